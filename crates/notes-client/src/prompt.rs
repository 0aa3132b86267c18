//! Blocking user interaction needed by the board.

/// Confirmation and notification surface.
///
/// Both calls block the current handler until the user has seen or answered
/// them.
pub trait UserPrompt {
    /// Ask a yes/no question. Returning `false` aborts the pending action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a notification the user must acknowledge.
    fn alert(&mut self, message: &str);
}

impl<P: UserPrompt + ?Sized> UserPrompt for &mut P {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }
}
