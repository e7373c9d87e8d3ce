//! The Patternworks demonstration sequence.
//!
//! Runs the three patterns one after another, each in isolation:
//! 1. Prototype: load the shape cache and draw copies of both prototypes
//! 2. Adapter: draw a circle and a square through the single-method drawer
//! 3. Observer: move a subject through two states with one observer attached
//!
//! Every line is printed to stdout as it happens and also returned, in order,
//! from [`run_demo`].

use patternworks_adapter::{DrawError, ShapeDrawer, ShapeDrawerAdapter};
use patternworks_observer::{PrintObserver, Subject};
use patternworks_prototype::{PrototypeError, ShapeCache, CIRCLE_ID, SQUARE_ID};
use std::rc::Rc;
use thiserror::Error;
use tracing::info;

/// Any failure that aborts the demonstration.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("prototype demo failed: {0}")]
    Prototype(#[from] PrototypeError),

    #[error("adapter demo failed: {0}")]
    Adapter(#[from] DrawError),
}

/// Runs the full demonstration and returns the lines it printed.
///
/// # Errors
///
/// Returns the first [`DemoError`] raised by any of the three patterns.
pub fn run_demo() -> Result<Vec<String>, DemoError> {
    let mut lines = Vec::new();
    prototype_demo(&mut lines)?;
    adapter_demo(&mut lines)?;
    observer_demo(&mut lines);
    Ok(lines)
}

fn emit(lines: &mut Vec<String>, line: String) {
    println!("{line}");
    lines.push(line);
}

fn prototype_demo(lines: &mut Vec<String>) -> Result<(), DemoError> {
    info!("running prototype demo");
    let cache = ShapeCache::loaded();

    for id in [CIRCLE_ID, SQUARE_ID] {
        let shape = cache.get_shape(id)?;
        emit(lines, format!("Shape: {}", shape.kind().label()));
        emit(lines, shape.draw());
    }
    Ok(())
}

fn adapter_demo(lines: &mut Vec<String>) -> Result<(), DemoError> {
    info!("running adapter demo");
    for kind in ["circle", "square"] {
        let mut drawer = ShapeDrawerAdapter::for_kind(kind)?;
        // ConsoleDrawer has already printed the line.
        lines.push(drawer.draw(kind)?);
    }
    Ok(())
}

fn observer_demo(lines: &mut Vec<String>) {
    info!("running observer demo");
    let observer = Rc::new(PrintObserver::new());
    let mut subject = Subject::new();
    subject.attach(observer.clone());

    subject.set_state("State 1");
    subject.set_state("State 2");

    lines.extend(observer.notifications());
}
