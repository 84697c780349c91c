#![deny(unsafe_code)]

//! Embeddable chat widget for the browser.
//!
//! The module is self-initializing: on load it injects its panel DOM
//! into the host page, restores the per-tab conversation context, and
//! wires its listeners. The host page configures it through the
//! `window.API_BASE` global and styles it through the `rb-*` class
//! contract; there is no other API surface.

pub mod controller;
pub mod dom;
pub mod error;
pub mod host;

use std::rc::Rc;

use snafu::OptionExt;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use replybot_client::HttpChatClient;
use replybot_storage::SessionStore;

use crate::controller::ChatWidget;
use crate::error::{NoDocumentSnafu, WidgetResult};

/// Initialize the widget module.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("ReplyBot widget module initialized");

    // Initialization failures are logged, never thrown into the host
    // page.
    if let Err(error) = schedule_mount() {
        log::error!("widget mount failed: {error}");
    }
}

/// Mounts now, or defers to `DOMContentLoaded` when the host page is
/// still parsing and has no body to append to yet.
fn schedule_mount() -> WidgetResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context(NoDocumentSnafu {
            stage: "schedule-mount",
        })?;

    if document.ready_state() == "loading" {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            if let Err(error) = mount() {
                log::error!("widget mount failed: {error}");
            }
        }));
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
        return Ok(());
    }

    mount()
}

fn mount() -> WidgetResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context(NoDocumentSnafu { stage: "mount" })?;

    let config = host::host_config();
    let client = HttpChatClient::new(&config);
    let chat_url = client.chat_url().to_string();
    log::info!("mounting chat widget against {chat_url}");

    let dom = dom::WidgetDom::build(&document)?;
    ChatWidget::mount(dom, Rc::new(SessionStore::new()), Rc::new(client), chat_url);
    Ok(())
}
