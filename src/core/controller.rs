/// Logical input action identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Forward,
    Backward,
    Left,
    Right,
    Quit,
}

/// Controller - read-only view of the per-frame input snapshot
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}
