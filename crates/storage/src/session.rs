use replybot_core::Context;
use snafu::ResultExt;

use crate::error::{CorruptContextSnafu, SerializeContextSnafu, StorageError, StorageResult};
use crate::{CONTEXT_KEY, PANEL_OPEN_KEY, WidgetStore};

/// `window.sessionStorage` backend used in the browser.
///
/// Per-tab by construction: the blob survives same-tab navigations and
/// dies with the tab. Private browsing modes and host-page sandboxing
/// can make the whole storage object unavailable, which surfaces as
/// [`StorageError::Unavailable`] on every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    fn backend(stage: &'static str) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.session_storage().ok().flatten())
            .ok_or(StorageError::Unavailable { stage })
    }

    fn read(key: &'static str, stage: &'static str) -> StorageResult<Option<String>> {
        Self::backend(stage)?
            .get_item(key)
            .map_err(|_| StorageError::Denied { stage, key })
    }

    fn write(key: &'static str, value: &str, stage: &'static str) -> StorageResult<()> {
        Self::backend(stage)?
            .set_item(key, value)
            .map_err(|_| StorageError::Denied { stage, key })
    }
}

impl WidgetStore for SessionStore {
    fn load_context(&self) -> StorageResult<Option<Context>> {
        let Some(raw) = Self::read(CONTEXT_KEY, "load-context")? else {
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
        Self::write(CONTEXT_KEY, &encoded, "save-context")
    }

    fn load_panel_open(&self) -> StorageResult<Option<bool>> {
        let raw = Self::read(PANEL_OPEN_KEY, "load-panel-open")?;
        Ok(raw.map(|value| value == "1"))
    }

    fn save_panel_open(&self, open: bool) -> StorageResult<()> {
        let value = if open { "1" } else { "0" };
        Self::write(PANEL_OPEN_KEY, value, "save-panel-open")
    }
}
