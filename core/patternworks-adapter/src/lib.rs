//! Adapter pattern for Patternworks.
//!
//! Callers see a narrow [`ShapeDrawer`] with a single `draw(kind)` method.
//! [`ShapeDrawerAdapter`] translates those calls onto an
//! [`AdvancedShapeDrawer`], which exposes one method per shape kind.

mod adapter;
mod drawer;
mod error;

pub use adapter::{ShapeDrawer, ShapeDrawerAdapter};
pub use drawer::{AdvancedShapeDrawer, ConsoleDrawer};
pub use error::{DrawError, DrawResult};
