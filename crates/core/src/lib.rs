#![deny(unsafe_code)]

//! Widget domain logic shared by the browser shell and its collaborators.
//!
//! Everything in this crate is pure: no DOM handles, no storage, no
//! network. The browser-facing crates consume these types and apply the
//! derived decisions to the page.

pub mod config;
/// Opaque server-issued conversation state.
pub mod context;
pub mod exchange;
pub mod input;
/// Transcript speakers and the widget's fixed user-facing copy.
pub mod message;

pub use config::{DEFAULT_API_BASE, WidgetConfig};
pub use context::{Context, END_SESSION_KEY};
pub use exchange::{ControlFlags, ExchangePhase, ExchangeState};
pub use input::{KeyIntent, keydown_intent};
pub use message::{
    ENDED_PLACEHOLDER, GREETING, INPUT_PLACEHOLDER, NO_REPLY_PLACEHOLDER, Speaker, TYPING_TEXT,
    network_error_message,
};
