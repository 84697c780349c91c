/// What a keydown on the message textarea should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Suppress the browser default and run the submit path.
    Submit,
    /// Leave the event to the browser.
    Pass,
}

/// Decides how a keydown on the message input is handled.
///
/// Enter submits through the same path as the send control. Shift+Enter
/// falls through so the browser inserts the newline itself.
pub fn keydown_intent(key: &str, shift_held: bool) -> KeyIntent {
    if key == "Enter" && !shift_held {
        KeyIntent::Submit
    } else {
        KeyIntent::Pass
    }
}
