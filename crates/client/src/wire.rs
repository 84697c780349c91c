use replybot_core::{Context, NO_REPLY_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the chat POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: Context,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, context: Context) -> Self {
        Self {
            message: message.into(),
            context,
        }
    }
}

/// Chat response as it appears on the wire.
///
/// Both fields are optional: absence has defined fallbacks rather than
/// being an error. The context is kept as a raw value here because the
/// server may send anything; coercion happens in [`ChatReply::into_outcome`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub context: Option<Value>,
}

/// What the widget does with a successful exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyOutcome {
    /// Text rendered into the bot bubble.
    pub bot_text: String,
    /// Wholesale replacement for the widget's context.
    pub context: Context,
    /// Whether the replacement context concludes the session.
    pub session_ended: bool,
}

impl ChatReply {
    /// Resolves wire-level absence into the widget's fallbacks: a
    /// missing or empty reply renders the placeholder, a missing or
    /// non-object context collapses to the empty map.
    pub fn into_outcome(self) -> ReplyOutcome {
        let context = self.context.map(Context::from_value).unwrap_or_default();
        let session_ended = context.end_session();
        let bot_text = match self.reply {
            Some(text) if !text.is_empty() => text,
            _ => NO_REPLY_PLACEHOLDER.to_string(),
        };
        ReplyOutcome {
            bot_text,
            context,
            session_ended,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_body_carries_message_and_context() {
        let context = Context::from_value(json!({"step": "sizing"}));
        let request = ChatRequest::new("do you have this in blue?", context);

        let body = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(
            body,
            json!({
                "message": "do you have this in blue?",
                "context": {"step": "sizing"},
            })
        );
    }

    #[test]
    fn fresh_context_serializes_as_an_empty_object() {
        let request = ChatRequest::new("hello", Context::new());
        let body = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(body["context"], json!({}));
    }

    #[test]
    fn reply_and_context_replace_local_state() {
        let reply: ChatReply = serde_json::from_value(json!({
            "reply": "We ship in 2-3 days.",
            "context": {"intent": "shipping", "end_session": false},
        }))
        .expect("reply decodes");

        let outcome = reply.into_outcome();
        assert_eq!(outcome.bot_text, "We ship in 2-3 days.");
        assert_eq!(outcome.context.get("intent"), Some(&json!("shipping")));
        assert!(!outcome.session_ended);
    }

    #[test]
    fn missing_reply_renders_the_placeholder() {
        let reply: ChatReply =
            serde_json::from_value(json!({"context": {}})).expect("reply decodes");
        assert_eq!(reply.into_outcome().bot_text, NO_REPLY_PLACEHOLDER);
    }

    #[test]
    fn empty_reply_string_also_renders_the_placeholder() {
        let reply: ChatReply =
            serde_json::from_value(json!({"reply": ""})).expect("reply decodes");
        assert_eq!(reply.into_outcome().bot_text, NO_REPLY_PLACEHOLDER);
    }

    #[test]
    fn missing_context_collapses_to_the_empty_map() {
        let reply: ChatReply =
            serde_json::from_value(json!({"reply": "bye"})).expect("reply decodes");
        let outcome = reply.into_outcome();
        assert!(outcome.context.is_empty());
        assert!(!outcome.session_ended);
    }

    #[test]
    fn non_object_context_collapses_to_the_empty_map() {
        let reply: ChatReply =
            serde_json::from_value(json!({"reply": "bye", "context": 5}))
                .expect("reply decodes");
        assert!(reply.into_outcome().context.is_empty());
    }

    #[test]
    fn truthy_end_session_concludes_the_exchange() {
        let reply: ChatReply = serde_json::from_value(json!({
            "reply": "Thanks for visiting!",
            "context": {"end_session": 1},
        }))
        .expect("reply decodes");
        assert!(reply.into_outcome().session_ended);
    }

    #[test]
    fn returned_context_persists_and_seeds_the_next_request() {
        use replybot_storage::{CONTEXT_KEY, MemoryStore, WidgetStore};

        let reply: ChatReply = serde_json::from_value(json!({
            "reply": "Added to your cart.",
            "context": {"step": "cart"},
        }))
        .expect("reply decodes");
        let outcome = reply.into_outcome();

        let store = MemoryStore::new();
        store.save_context(&outcome.context).expect("save succeeds");
        assert_eq!(
            store.raw(CONTEXT_KEY).as_deref(),
            Some(r#"{"step":"cart"}"#)
        );

        // A later page load starts from the persisted blob.
        let restored = store
            .load_context()
            .expect("load succeeds")
            .expect("context stored");
        let next = ChatRequest::new("checkout please", restored);
        let body = serde_json::to_value(&next).expect("request serializes");
        assert_eq!(body["context"], json!({"step": "cart"}));
    }
}
