/// The richer drawing interface, with one entry point per shape kind.
///
/// Each method performs its drawing action and returns the line describing it.
pub trait AdvancedShapeDrawer {
    fn draw_circle(&mut self) -> String;
    fn draw_square(&mut self) -> String;
}

/// Draws by printing a line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDrawer;

impl ConsoleDrawer {
    fn emit(line: String) -> String {
        println!("{line}");
        line
    }
}

impl AdvancedShapeDrawer for ConsoleDrawer {
    fn draw_circle(&mut self) -> String {
        Self::emit("Drawing an advanced Circle".to_string())
    }

    fn draw_square(&mut self) -> String {
        Self::emit("Drawing an advanced Square".to_string())
    }
}
