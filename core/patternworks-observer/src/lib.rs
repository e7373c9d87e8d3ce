//! Observer pattern for Patternworks.
//!
//! A [`Subject`] holds one piece of string state and an ordered list of
//! [`Observer`]s. Changing the state notifies every observer synchronously,
//! in attachment order, before `set_state` returns.
//!
//! Observers do not keep a handle on the subject. The subject lends itself
//! to each observer for the duration of [`Observer::update`], immutably, so
//! an observer can read the state but cannot change it mid-notification.

mod observer;
mod subject;

pub use observer::{Observer, PrintObserver};
pub use subject::{ObserverId, Subject};
