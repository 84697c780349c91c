use std::cell::RefCell;
use std::rc::Rc;

use replybot_client::{ChatRequest, ChatTransport, ClientError, ReplyOutcome};
use replybot_core::{
    Context, ExchangeState, GREETING, KeyIntent, Speaker, keydown_intent, network_error_message,
};
use replybot_storage::WidgetStore;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, KeyboardEvent};

use crate::dom::WidgetDom;

/// Mutable widget state, owned by the controller instance.
#[derive(Debug, Default)]
struct WidgetState {
    context: Context,
    exchange: ExchangeState,
}

/// The widget controller: owns the DOM handles, the conversation state,
/// and the registered event listeners.
///
/// Listeners capture an `Rc` of the controller and are stored on it, so
/// the instance stays alive for the lifetime of the page.
pub struct ChatWidget {
    dom: WidgetDom,
    store: Rc<dyn WidgetStore>,
    transport: Rc<dyn ChatTransport>,
    chat_url: String,
    state: RefCell<WidgetState>,
    listeners: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
    key_listeners: RefCell<Vec<Closure<dyn FnMut(KeyboardEvent)>>>,
}

impl ChatWidget {
    /// Restores persisted state, renders the greeting, and wires the
    /// widget's listeners.
    pub fn mount(
        dom: WidgetDom,
        store: Rc<dyn WidgetStore>,
        transport: Rc<dyn ChatTransport>,
        chat_url: String,
    ) -> Rc<Self> {
        let context = match store.load_context() {
            Ok(Some(context)) => context,
            Ok(None) => Context::new(),
            Err(error) => {
                log::warn!("stored context ignored: {error}");
                Context::new()
            }
        };

        let widget = Rc::new(Self {
            dom,
            store,
            transport,
            chat_url,
            state: RefCell::new(WidgetState {
                context,
                exchange: ExchangeState::new(),
            }),
            listeners: RefCell::new(Vec::new()),
            key_listeners: RefCell::new(Vec::new()),
        });

        widget.dom.append_bubble(Speaker::Bot, GREETING);
        widget.restore_panel();
        widget.apply_controls();
        widget.attach_listeners();
        widget
    }

    fn restore_panel(&self) {
        let open = match self.store.load_panel_open() {
            Ok(Some(open)) => open,
            Ok(None) => false,
            Err(error) => {
                log::debug!("panel state ignored: {error}");
                false
            }
        };
        self.dom.set_open(open);
    }

    fn apply_controls(&self) {
        let flags = self.state.borrow().exchange.controls();
        self.dom.apply_controls(flags);
    }

    fn set_open(&self, open: bool) {
        self.dom.set_open(open);
        if let Err(error) = self.store.save_panel_open(open) {
            log::debug!("panel state not persisted: {error}");
        }
    }

    fn toggle_panel(&self) {
        self.set_open(!self.dom.is_open());
    }

    /// Runs the submit path, shared by the send control, the form, and
    /// the Enter key.
    fn submit(self: &Rc<Self>) {
        let raw = self.dom.input_text();
        let message = raw.trim();
        if message.is_empty() {
            return;
        }
        // Rejected while a request is outstanding or after the session
        // ended, so a synthetic submit event cannot double-send.
        if !self.state.borrow_mut().exchange.begin() {
            return;
        }

        self.dom.append_bubble(Speaker::You, message);
        self.dom.clear_input();
        self.apply_controls();

        let request = ChatRequest::new(message, self.state.borrow().context.clone());
        let widget = Rc::clone(self);
        spawn_local(async move {
            match widget.transport.exchange(request).await {
                Ok(reply) => widget.finish_exchange(reply.into_outcome()),
                Err(error) => widget.fail_exchange(error),
            }
        });
    }

    fn finish_exchange(&self, outcome: ReplyOutcome) {
        {
            let mut state = self.state.borrow_mut();
            state.context = outcome.context.clone();
            state.exchange.complete(outcome.session_ended);
        }
        if let Err(error) = self.store.save_context(&outcome.context) {
            log::warn!("context not persisted: {error}");
        }

        self.dom.append_bubble(Speaker::Bot, &outcome.bot_text);
        self.apply_controls();
        if !outcome.session_ended {
            self.dom.focus_input();
        }
    }

    fn fail_exchange(&self, error: ClientError) {
        log::error!("chat exchange failed: {error}");
        self.state.borrow_mut().exchange.fail();
        self.dom
            .append_bubble(Speaker::Bot, &network_error_message(&self.chat_url));
        self.apply_controls();
    }

    fn attach_listeners(self: &Rc<Self>) {
        let widget = Rc::clone(self);
        self.listen(self.dom.toggle(), "click", move |_event| {
            widget.toggle_panel();
        });

        let widget = Rc::clone(self);
        self.listen(self.dom.close(), "click", move |_event| {
            widget.set_open(false);
        });

        let widget = Rc::clone(self);
        self.listen(self.dom.form(), "submit", move |event| {
            event.prevent_default();
            widget.submit();
        });

        let widget = Rc::clone(self);
        self.listen_keydown(self.dom.input(), move |event| {
            if keydown_intent(&event.key(), event.shift_key()) == KeyIntent::Submit {
                event.prevent_default();
                widget.submit();
            }
        });
    }

    fn listen(&self, target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push(closure);
    }

    fn listen_keydown(&self, target: &EventTarget, handler: impl FnMut(KeyboardEvent) + 'static) {
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(handler));
        let _ = target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        self.key_listeners.borrow_mut().push(closure);
    }
}
