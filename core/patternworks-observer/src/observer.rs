use crate::Subject;
use std::cell::RefCell;

/// Receives synchronous notifications from a [`Subject`].
pub trait Observer {
    /// Called after the subject's state changes.
    fn update(&self, subject: &Subject);
}

/// Prints each observed state to stdout and keeps the lines it printed.
#[derive(Debug, Default)]
pub struct PrintObserver {
    lines: RefCell<Vec<String>>,
}

impl PrintObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Observer for PrintObserver {
    fn update(&self, subject: &Subject) {
        let line = format!(
            "Observer notified with state: {}",
            subject.state().unwrap_or_default()
        );
        println!("{line}");
        self.lines.borrow_mut().push(line);
    }
}
