use crate::Observer;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Handle returned by [`Subject::attach`]: the observer's position in the
/// notification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl ObserverId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

/// A single piece of state plus the observers to notify when it changes.
///
/// Observers stay attached for the subject's whole lifetime.
#[derive(Default)]
pub struct Subject {
    state: Option<String>,
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, or `None` before the first [`set_state`](Self::set_state).
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Appends an observer to the notification list.
    ///
    /// Attaching the same observer twice means it is notified twice.
    pub fn attach(&mut self, observer: Rc<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.observers.len());
        self.observers.push(observer);
        debug!(%id, "observer attached");
        id
    }

    /// Replaces the state and notifies every observer before returning.
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = Some(state.into());
        self.notify_all();
    }

    /// Calls [`Observer::update`] on each observer in attachment order.
    ///
    /// Returns the number of notifications delivered.
    pub fn notify_all(&self) -> usize {
        debug!(state = ?self.state, observers = self.observers.len(), "notifying observers");
        for observer in &self.observers {
            observer.update(self);
        }
        self.observers.len()
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
