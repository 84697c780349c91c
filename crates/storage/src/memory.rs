use std::cell::RefCell;
use std::collections::HashMap;

use replybot_core::Context;
use snafu::ResultExt;

use crate::error::{CorruptContextSnafu, SerializeContextSnafu, StorageResult};
use crate::{CONTEXT_KEY, PANEL_OPEN_KEY, WidgetStore};

/// In-memory store with the same string encoding as the browser backend.
///
/// Used by native tests to exercise the persistence contract, corrupt
/// payloads included, without a `window`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<&'static str, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw string under a key, bypassing the typed encoders.
    pub fn seed(&self, key: &'static str, raw: impl Into<String>) {
        self.entries.borrow_mut().insert(key, raw.into());
    }

    /// Raw stored string, as the browser backend would persist it.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl WidgetStore for MemoryStore {
    fn load_context(&self) -> StorageResult<Option<Context>> {
        let Some(raw) = self.raw(CONTEXT_KEY) else {
            return Ok(None);
        };
        let context = serde_json::from_str(&raw).context(CorruptContextSnafu {
            stage: "load-context",
            key: CONTEXT_KEY,
        })?;
        Ok(Some(context))
    }

    fn save_context(&self, context: &Context) -> StorageResult<()> {
        let encoded = serde_json::to_string(context).context(SerializeContextSnafu {
            stage: "save-context",
            key: CONTEXT_KEY,
        })?;
        self.entries.borrow_mut().insert(CONTEXT_KEY, encoded);
        Ok(())
    }

    fn load_panel_open(&self) -> StorageResult<Option<bool>> {
        Ok(self.raw(PANEL_OPEN_KEY).map(|value| value == "1"))
    }

    fn save_panel_open(&self, open: bool) -> StorageResult<()> {
        let value = if open { "1" } else { "0" };
        self.entries
            .borrow_mut()
            .insert(PANEL_OPEN_KEY, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::StorageError;

    #[test]
    fn context_round_trips_through_the_string_encoding() {
        let store = MemoryStore::new();
        let context = Context::from_value(json!({"step": "checkout", "end_session": false}));

        store.save_context(&context).expect("save succeeds");
        let loaded = store.load_context().expect("load succeeds");
        assert_eq!(loaded, Some(context));

        let raw = store.raw(CONTEXT_KEY).expect("raw value stored");
        assert!(raw.starts_with('{'), "persisted blob is a JSON object");
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert_eq!(store.load_context().expect("load succeeds"), None);
        assert_eq!(store.load_panel_open().expect("load succeeds"), None);
    }

    #[test]
    fn corrupt_context_surfaces_as_a_typed_error() {
        let store = MemoryStore::new();
        store.seed(CONTEXT_KEY, "{not json");

        let error = store.load_context().expect_err("corrupt blob rejected");
        assert!(matches!(error, StorageError::CorruptContext { .. }));
    }

    #[test]
    fn panel_flag_uses_the_original_wire_encoding() {
        let store = MemoryStore::new();

        store.save_panel_open(true).expect("save succeeds");
        assert_eq!(store.raw(PANEL_OPEN_KEY).as_deref(), Some("1"));
        assert_eq!(store.load_panel_open().expect("load succeeds"), Some(true));

        store.save_panel_open(false).expect("save succeeds");
        assert_eq!(store.raw(PANEL_OPEN_KEY).as_deref(), Some("0"));
        assert_eq!(store.load_panel_open().expect("load succeeds"), Some(false));
    }

    #[test]
    fn unknown_panel_flag_values_read_as_closed() {
        let store = MemoryStore::new();
        store.seed(PANEL_OPEN_KEY, "definitely");
        assert_eq!(store.load_panel_open().expect("load succeeds"), Some(false));
    }
}
