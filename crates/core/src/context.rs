use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only context key the widget itself understands.
pub const END_SESSION_KEY: &str = "end_session";

/// Server-issued conversation state, round-tripped on every exchange.
///
/// The server owns the shape. The widget stores it, sends it back
/// verbatim, and inspects exactly one key: [`END_SESSION_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(Map<String, Value>);

impl Context {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Coerces an arbitrary JSON value into a context.
    ///
    /// A non-object value is treated the same as an absent context and
    /// collapses to the empty map, so the persisted blob is always a
    /// JSON object.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the server has marked the conversation as concluded.
    ///
    /// The flag is boolean-ish rather than strictly boolean: any value a
    /// browser would treat as truthy counts, so `1`, `"yes"`, and even
    /// `{}` all end the session, while `false`, `0`, `""`, and `null`
    /// do not.
    pub fn end_session(&self) -> bool {
        self.0.get(END_SESSION_KEY).is_some_and(is_truthy)
    }
}

impl From<Map<String, Value>> for Context {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|raw| raw != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn context_with(value: Value) -> Context {
        let mut map = Map::new();
        map.insert(END_SESSION_KEY.to_string(), value);
        Context::from(map)
    }

    #[test]
    fn fresh_context_is_empty_and_live() {
        let context = Context::new();
        assert!(context.is_empty());
        assert!(!context.end_session());
    }

    #[test]
    fn end_session_follows_browser_truthiness() {
        assert!(context_with(json!(true)).end_session());
        assert!(context_with(json!(1)).end_session());
        assert!(context_with(json!(-0.5)).end_session());
        assert!(context_with(json!("yes")).end_session());
        assert!(context_with(json!([])).end_session());
        assert!(context_with(json!({})).end_session());

        assert!(!context_with(json!(false)).end_session());
        assert!(!context_with(json!(0)).end_session());
        assert!(!context_with(json!(0.0)).end_session());
        assert!(!context_with(json!("")).end_session());
        assert!(!context_with(json!(null)).end_session());
    }

    #[test]
    fn from_value_keeps_objects_and_drops_everything_else() {
        let kept = Context::from_value(json!({"step": "checkout", "cart": [1, 2]}));
        assert_eq!(kept.get("step"), Some(&json!("checkout")));

        assert!(Context::from_value(json!("not an object")).is_empty());
        assert!(Context::from_value(json!(5)).is_empty());
        assert!(Context::from_value(json!(null)).is_empty());
        assert!(Context::from_value(json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn serde_shape_is_the_bare_object() {
        let context: Context =
            serde_json::from_str(r#"{"intent":"order_status","end_session":false}"#)
                .expect("valid context JSON");
        assert_eq!(context.get("intent"), Some(&json!("order_status")));
        assert!(!context.end_session());

        let encoded = serde_json::to_string(&context).expect("context serializes");
        assert!(encoded.starts_with('{'));
        assert!(encoded.contains("\"intent\""));
    }
}
