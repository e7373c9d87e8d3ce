//! Prototype pattern for Patternworks.
//!
//! This crate provides:
//! - [`Shape`] — a cloneable entity tagged with a closed [`ShapeKind`]
//! - [`ShapeCache`] — an owned table of prototypes addressed by id
//!
//! The cache never hands out its stored prototypes. Every lookup returns a
//! fresh value built by [`Shape::duplicate`], so callers can mutate what they
//! get back without touching the master copy or each other.

mod cache;
mod error;
mod shape;

pub use cache::{ShapeCache, CIRCLE_ID, SQUARE_ID};
pub use error::{PrototypeError, PrototypeResult};
pub use shape::{Shape, ShapeKind};
