#![deny(unsafe_code)]

pub mod error;
pub mod memory;
pub mod session;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use session::SessionStore;

use replybot_core::Context;

/// Session-storage key holding the JSON-serialized context blob.
pub const CONTEXT_KEY: &str = "rb_ctx";

/// Session-storage key holding the panel state, `"1"` open, `"0"` closed.
pub const PANEL_OPEN_KEY: &str = "rb_open";

/// Per-tab persistence seam for widget state.
///
/// Every operation is best-effort from the widget's point of view: the
/// controller logs failures and falls back to defaults, and nothing
/// ever propagates to the host page. The trait still returns results so
/// that the swallowing happens visibly at the call site rather than in
/// an empty catch.
pub trait WidgetStore {
    /// Loads the persisted context. `Ok(None)` when nothing is stored.
    fn load_context(&self) -> StorageResult<Option<Context>>;

    /// Persists the context, replacing any previous value.
    fn save_context(&self, context: &Context) -> StorageResult<()>;

    /// Loads the persisted panel state. `Ok(None)` when nothing is stored.
    fn load_panel_open(&self) -> StorageResult<Option<bool>>;

    /// Persists the panel open/closed state.
    fn save_panel_open(&self, open: bool) -> StorageResult<()>;
}
