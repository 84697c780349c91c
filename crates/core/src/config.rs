/// Endpoint base used when the host page does not publish one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Path of the single chat operation, appended to the API base.
const CHAT_PATH: &str = "/chat";

/// Widget configuration as resolved from the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    api_base: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl WidgetConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full URL of the chat endpoint.
    ///
    /// Trailing slashes on the base are stripped before the path is
    /// appended, so `https://shop.example/api/` and
    /// `https://shop.example/api` resolve to the same URL.
    pub fn chat_url(&self) -> String {
        let trimmed = self.api_base.trim_end_matches('/');
        format!("{trimmed}{CHAT_PATH}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_targets_local_loopback() {
        assert_eq!(
            WidgetConfig::default().chat_url(),
            "http://127.0.0.1:8000/chat"
        );
    }

    #[test]
    fn chat_url_strips_trailing_slashes() {
        let single = WidgetConfig::new("https://shop.example/api/");
        assert_eq!(single.chat_url(), "https://shop.example/api/chat");

        let repeated = WidgetConfig::new("https://shop.example///");
        assert_eq!(repeated.chat_url(), "https://shop.example/chat");

        let bare = WidgetConfig::new("https://shop.example");
        assert_eq!(bare.chat_url(), "https://shop.example/chat");
    }
}
