//! The single-method drawing facade and its adapter.

use crate::{AdvancedShapeDrawer, ConsoleDrawer, DrawError, DrawResult};
use tracing::{debug, warn};

/// Narrow drawing interface keyed by a shape kind name.
pub trait ShapeDrawer {
    /// Draws a shape of the named kind and returns the action performed.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UnsupportedShape`] for a kind the drawer does not know.
    fn draw(&mut self, kind: &str) -> DrawResult<String>;
}

/// Kinds the advanced drawer has a method for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawKind {
    Circle,
    Square,
}

impl DrawKind {
    fn parse(kind: &str) -> DrawResult<Self> {
        let trimmed = kind.trim();
        if trimmed.eq_ignore_ascii_case("circle") {
            Ok(Self::Circle)
        } else if trimmed.eq_ignore_ascii_case("square") {
            Ok(Self::Square)
        } else {
            Err(DrawError::UnsupportedShape(kind.to_string()))
        }
    }
}

/// Adapts an [`AdvancedShapeDrawer`] to the [`ShapeDrawer`] interface.
#[derive(Debug, Clone, Default)]
pub struct ShapeDrawerAdapter<D = ConsoleDrawer> {
    drawer: D,
}

impl ShapeDrawerAdapter<ConsoleDrawer> {
    /// Selects the drawer implementation for the given kind hint.
    ///
    /// Every supported kind is currently served by [`ConsoleDrawer`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UnsupportedShape`] if the hint names no known kind.
    pub fn for_kind(hint: &str) -> DrawResult<Self> {
        let drawer = match DrawKind::parse(hint) {
            Ok(DrawKind::Circle | DrawKind::Square) => ConsoleDrawer,
            Err(err) => {
                warn!(hint, "no drawer for shape kind");
                return Err(err);
            }
        };
        Ok(Self::with_drawer(drawer))
    }
}

impl<D: AdvancedShapeDrawer> ShapeDrawerAdapter<D> {
    pub fn with_drawer(drawer: D) -> Self {
        Self { drawer }
    }

    pub fn drawer(&self) -> &D {
        &self.drawer
    }

    pub fn into_inner(self) -> D {
        self.drawer
    }
}

impl<D: AdvancedShapeDrawer> ShapeDrawer for ShapeDrawerAdapter<D> {
    fn draw(&mut self, kind: &str) -> DrawResult<String> {
        let kind = DrawKind::parse(kind).inspect_err(|err| {
            warn!(%err, "rejecting draw request");
        })?;
        debug!(?kind, "dispatching draw request");
        Ok(match kind {
            DrawKind::Circle => self.drawer.draw_circle(),
            DrawKind::Square => self.drawer.draw_square(),
        })
    }
}
