#![deny(unsafe_code)]

pub mod error;
pub mod http;
pub mod wire;

pub use error::{ClientError, ClientResult};
pub use http::HttpChatClient;
pub use wire::{ChatReply, ChatRequest, ReplyOutcome};

use futures::future::LocalBoxFuture;

/// Transport seam for the chat exchange.
///
/// Browser futures are not `Send`, so implementations hand back locally
/// boxed futures. There is exactly one operation: POST the message with
/// the current context, decode the JSON reply.
pub trait ChatTransport {
    fn exchange(&self, request: ChatRequest) -> LocalBoxFuture<'_, ClientResult<ChatReply>>;
}
