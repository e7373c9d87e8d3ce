//! Property-based tests for notification order and count.

use patternworks_observer::{Observer, Subject};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

struct Tagged {
    tag: usize,
    log: Rc<RefCell<Vec<(usize, String)>>>,
}

impl Observer for Tagged {
    fn update(&self, subject: &Subject) {
        let state = subject.state().unwrap_or_default().to_string();
        self.log.borrow_mut().push((self.tag, state));
    }
}

proptest! {
    #[test]
    fn every_change_reaches_every_observer_in_order(
        observers in 0usize..10,
        states in prop::collection::vec("[A-Za-z0-9 ]{0,16}", 1..6),
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        for tag in 0..observers {
            subject.attach(Rc::new(Tagged { tag, log: Rc::clone(&log) }));
        }

        for state in &states {
            subject.set_state(state.clone());
        }

        let expected: Vec<(usize, String)> = states
            .iter()
            .flat_map(|state| (0..observers).map(move |tag| (tag, state.clone())))
            .collect();
        prop_assert_eq!(&*log.borrow(), &expected);
        prop_assert_eq!(subject.state(), states.last().map(String::as_str));
    }
}
