//! The prototype cache.
//!
//! Prototypes are built once when the cache is loaded. After that every
//! lookup is a `duplicate` of the stored instance; the cache never
//! constructs a second prototype and never lends out the one it owns.

use crate::{PrototypeError, PrototypeResult, Shape};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Id of the circle prototype installed by [`ShapeCache::load_cache`].
pub const CIRCLE_ID: &str = "1";
/// Id of the square prototype installed by [`ShapeCache::load_cache`].
pub const SQUARE_ID: &str = "2";

/// Owned table of prototype shapes keyed by id.
#[derive(Debug, Default)]
pub struct ShapeCache {
    prototypes: BTreeMap<String, Shape>,
}

impl ShapeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache with the standard prototypes already loaded.
    #[must_use]
    pub fn loaded() -> Self {
        let mut cache = Self::new();
        cache.load_cache();
        cache
    }

    /// Installs the standard prototypes: a circle under [`CIRCLE_ID`] and a
    /// square under [`SQUARE_ID`].
    ///
    /// Idempotent. Any entry already stored under one of these ids is
    /// replaced, so loading always restores the standard prototypes.
    pub fn load_cache(&mut self) {
        let defaults = [Shape::circle(CIRCLE_ID), Shape::square(SQUARE_ID)];
        for prototype in defaults {
            debug!(id = prototype.id(), kind = %prototype.kind(), "loading prototype");
            self.prototypes.insert(prototype.id().to_string(), prototype);
        }
    }

    /// Adds a prototype under its own id.
    ///
    /// # Errors
    ///
    /// Returns [`PrototypeError::DuplicateId`] if the id is taken. The
    /// existing prototype is left untouched.
    pub fn register(&mut self, prototype: Shape) -> PrototypeResult<()> {
        if self.prototypes.contains_key(prototype.id()) {
            warn!(id = prototype.id(), "rejecting duplicate prototype id");
            return Err(PrototypeError::DuplicateId(prototype.id().to_string()));
        }
        debug!(id = prototype.id(), kind = %prototype.kind(), "registering prototype");
        self.prototypes.insert(prototype.id().to_string(), prototype);
        Ok(())
    }

    /// Returns an independent copy of the prototype registered under `id`.
    ///
    /// # Errors
    ///
    /// - [`PrototypeError::NotFound`] if no prototype has this id.
    /// - [`PrototypeError::CloneFailure`] if the copy cannot be made.
    pub fn get_shape(&self, id: &str) -> PrototypeResult<Shape> {
        let Some(prototype) = self.prototypes.get(id) else {
            warn!(id, "shape not found in cache");
            return Err(PrototypeError::NotFound(id.to_string()));
        };
        debug!(id, kind = %prototype.kind(), "duplicating prototype");
        prototype.duplicate()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.prototypes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.prototypes.keys().map(String::as_str)
    }
}
