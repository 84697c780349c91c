/// Bubble author rendered into the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Bot,
}

impl Speaker {
    /// Class fragment shared by the bubble wrapper and its avatar, the
    /// part of the host stylesheet contract that varies per author.
    pub fn class_name(self) -> &'static str {
        match self {
            Speaker::You => "you",
            Speaker::Bot => "bot",
        }
    }

    /// Short label rendered inside the avatar badge.
    pub fn avatar_label(self) -> &'static str {
        match self {
            Speaker::You => "YOU",
            Speaker::Bot => "BOT",
        }
    }
}

/// Greeting rendered on every mount.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Textarea placeholder while the conversation is live.
pub const INPUT_PLACEHOLDER: &str = "Type a message… (Shift+Enter for newline)";

/// Textarea placeholder after the server ends the session.
pub const ENDED_PLACEHOLDER: &str = "Session ended. Refresh or reopen to start a new chat.";

/// Rendered in the bot bubble when a successful response carries no
/// reply text.
pub const NO_REPLY_PLACEHOLDER: &str = "(No reply)";

/// Typing indicator label.
pub const TYPING_TEXT: &str = "Bot is typing…";

/// Error bubble shown when the exchange fails; names the configured
/// endpoint.
pub fn network_error_message(chat_url: &str) -> String {
    format!("Network error. Is the API up at: {chat_url} ?")
}
