use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use replybot_core::WidgetConfig;

use crate::ChatTransport;
use crate::error::{ClientError, ClientResult};
use crate::wire::{ChatReply, ChatRequest};

/// `fetch`-backed transport for the chat endpoint.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    chat_url: String,
}

impl HttpChatClient {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            chat_url: config.chat_url(),
        }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    async fn send(&self, request: ChatRequest) -> ClientResult<ChatReply> {
        let response = Request::post(&self.chat_url)
            .json(&request)
            .map_err(|error| self.transport_error("encode-request", error))?
            .send()
            .await
            .map_err(|error| self.transport_error("send-request", error))?;

        // The status line is not consulted: any JSON body counts as a
        // reply. Only transport failures and non-JSON bodies fail the
        // exchange.
        let raw = response
            .text()
            .await
            .map_err(|error| self.transport_error("read-response", error))?;

        serde_json::from_str(&raw).map_err(|error| ClientError::Decode {
            stage: "decode-response",
            url: self.chat_url.clone(),
            details: error.to_string(),
        })
    }

    fn transport_error(
        &self,
        stage: &'static str,
        error: impl std::fmt::Display,
    ) -> ClientError {
        ClientError::Transport {
            stage,
            url: self.chat_url.clone(),
            details: error.to_string(),
        }
    }
}

impl ChatTransport for HttpChatClient {
    fn exchange(&self, request: ChatRequest) -> LocalBoxFuture<'_, ClientResult<ChatReply>> {
        self.send(request).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_resolves_the_chat_url_once() {
        let client = HttpChatClient::new(&WidgetConfig::new("https://shop.example/api/"));
        assert_eq!(client.chat_url(), "https://shop.example/api/chat");
    }
}
