//! Shape entities and their explicit copy operation.

use crate::{PrototypeError, PrototypeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
}

impl ShapeKind {
    /// All known kinds, in declaration order.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Square];

    /// Lowercase tag, e.g. `"circle"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    /// Capitalised name used in console output, e.g. `"Circle"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = PrototypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PrototypeError::UnknownKind(s.to_string()))
    }
}

/// A shape held by the cache or handed out from it.
///
/// `Shape` intentionally has no `Clone` impl. Copies are made with
/// [`Shape::duplicate`], which copies every owned field into new storage.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    id: String,
    kind: ShapeKind,
    /// Free-form styling attributes (e.g. `"fill" -> "red"`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl Shape {
    /// Creates a shape of the given kind with no attributes.
    pub fn new(kind: ShapeKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            attributes: BTreeMap::new(),
        }
    }

    pub fn circle(id: impl Into<String>) -> Self {
        Self::new(ShapeKind::Circle, id)
    }

    pub fn square(id: impl Into<String>) -> Self {
        Self::new(ShapeKind::Square, id)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Returns the value of a styling attribute, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Sets a styling attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Placeholder draw action for this shape.
    #[must_use]
    pub fn draw(&self) -> String {
        format!("Drawing a {}", self.kind.label())
    }

    /// Produces an independent copy of this shape.
    ///
    /// The id and every attribute are copied into freshly reserved strings;
    /// nothing is shared with `self`. Only the string reservations are
    /// fallible; the attribute map's own node allocations abort on
    /// out-of-memory like any other collection.
    ///
    /// # Errors
    ///
    /// Returns [`PrototypeError::CloneFailure`] if storage for one of the
    /// copied strings cannot be reserved.
    pub fn duplicate(&self) -> PrototypeResult<Self> {
        let mut attributes = BTreeMap::new();
        for (name, value) in &self.attributes {
            attributes.insert(copy_str(name)?, copy_str(value)?);
        }
        Ok(Self {
            id: copy_str(&self.id)?,
            kind: self.kind,
            attributes,
        })
    }
}

fn copy_str(s: &str) -> PrototypeResult<String> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())
        .map_err(|e| PrototypeError::CloneFailure(e.to_string()))?;
    out.push_str(s);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_str_does_not_share_storage() {
        let source = String::from("fill");
        let copy = copy_str(&source).unwrap();
        assert_eq!(copy, source);
        assert_ne!(copy.as_ptr(), source.as_ptr());
    }

    #[test]
    fn copy_str_empty() {
        assert_eq!(copy_str("").unwrap(), "");
    }
}
