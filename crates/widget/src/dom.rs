use replybot_core::{ControlFlags, ENDED_PLACEHOLDER, INPUT_PLACEHOLDER, Speaker, TYPING_TEXT};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlTextAreaElement};

use crate::error::{WidgetError, WidgetResult};

/// Id of the injected container, the host stylesheet's anchor.
pub const ROOT_ID: &str = "rb-chat";

const PANEL_CLASS: &str = "rb-panel";
const TITLE_CLASS: &str = "rb-title";
const CLOSE_CLASS: &str = "rb-close";
const TYPING_CLASS: &str = "rb-typing";
const MESSAGES_CLASS: &str = "rb-messages";
const INPUT_BAR_CLASS: &str = "rb-inputbar";
const SEND_CLASS: &str = "rb-send";
const TOGGLE_CLASS: &str = "rb-toggle";
const MSG_CLASS: &str = "rb-msg";
const AVATAR_CLASS: &str = "rb-avatar";
const BUBBLE_CLASS: &str = "rb-bubble";

/// State classes toggled on the root container.
const OPEN_STATE_CLASS: &str = "open";
const TYPING_STATE_CLASS: &str = "typing";

const PANEL_TITLE: &str = "ReplyBot";
const TOGGLE_LABEL: &str = "💬 Need Help?";

/// Typed handles into the injected widget subtree.
///
/// The class and id names above are the whole integration contract with
/// the host page; nothing else about the markup is promised.
pub struct WidgetDom {
    document: Document,
    root: HtmlElement,
    messages: HtmlElement,
    form: HtmlElement,
    input: HtmlTextAreaElement,
    send: HtmlButtonElement,
    toggle: HtmlButtonElement,
    close: HtmlButtonElement,
}

impl WidgetDom {
    /// Builds the panel subtree and appends it to the document body.
    pub fn build(document: &Document) -> WidgetResult<Self> {
        let body = document.body().ok_or(WidgetError::Dom {
            stage: "build-root",
            details: "document has no body".to_string(),
        })?;

        let root = create(document, "div", "", "build-root")?;
        root.set_id(ROOT_ID);

        let panel = create(document, "div", PANEL_CLASS, "build-panel")?;
        let _ = panel.set_attribute("role", "dialog");
        let _ = panel.set_attribute("aria-label", "Chat panel");

        let header = create(document, "header", "", "build-header")?;
        let title = create(document, "span", TITLE_CLASS, "build-title")?;
        title.set_text_content(Some(PANEL_TITLE));
        let close = create_button(document, CLOSE_CLASS, "build-close")?;
        let _ = close.set_attribute("aria-label", "Close chat");
        close.set_title("Close");
        close.set_text_content(Some("×"));
        let _ = header.append_child(&title);
        let _ = header.append_child(&close);

        let typing = create(document, "div", TYPING_CLASS, "build-typing")?;
        typing.set_text_content(Some(TYPING_TEXT));

        let messages = create(document, "div", MESSAGES_CLASS, "build-messages")?;
        let _ = messages.set_attribute("aria-live", "polite");

        let form = create(document, "form", INPUT_BAR_CLASS, "build-form")?;
        let input: HtmlTextAreaElement = create(document, "textarea", "", "build-input")?
            .dyn_into()
            .map_err(|_| WidgetError::Dom {
                stage: "build-input",
                details: "<textarea> is not a textarea element".to_string(),
            })?;
        input.set_placeholder(INPUT_PLACEHOLDER);
        let send = create_button(document, SEND_CLASS, "build-send")?;
        send.set_type("submit");
        send.set_text_content(Some("Send"));
        let _ = form.append_child(&input);
        let _ = form.append_child(&send);

        let toggle = create_button(document, TOGGLE_CLASS, "build-toggle")?;
        let _ = toggle.set_attribute("aria-expanded", "false");
        toggle.set_text_content(Some(TOGGLE_LABEL));

        let _ = panel.append_child(&header);
        let _ = panel.append_child(&typing);
        let _ = panel.append_child(&messages);
        let _ = panel.append_child(&form);
        let _ = root.append_child(&panel);
        let _ = root.append_child(&toggle);
        let _ = body.append_child(&root);

        Ok(Self {
            document: document.clone(),
            root,
            messages,
            form,
            input,
            send,
            toggle,
            close,
        })
    }

    pub fn form(&self) -> &HtmlElement {
        &self.form
    }

    pub fn input(&self) -> &HtmlTextAreaElement {
        &self.input
    }

    pub fn toggle(&self) -> &HtmlButtonElement {
        &self.toggle
    }

    pub fn close(&self) -> &HtmlButtonElement {
        &self.close
    }

    /// Appends one transcript bubble and keeps the latest message in view.
    ///
    /// Best-effort: if element creation fails there is nowhere to report
    /// it, so the bubble is simply dropped.
    pub fn append_bubble(&self, speaker: Speaker, text: &str) {
        let Ok(wrap) = self.document.create_element("div") else {
            return;
        };
        wrap.set_class_name(&format!("{MSG_CLASS} {}", speaker.class_name()));

        let Ok(avatar) = self.document.create_element("div") else {
            return;
        };
        avatar.set_class_name(&format!("{AVATAR_CLASS} {}", speaker.class_name()));
        avatar.set_text_content(Some(speaker.avatar_label()));

        let Ok(bubble) = self.document.create_element("div") else {
            return;
        };
        bubble.set_class_name(BUBBLE_CLASS);
        bubble.set_text_content(Some(text));

        let _ = wrap.append_child(&avatar);
        let _ = wrap.append_child(&bubble);
        let _ = self.messages.append_child(&wrap);

        self.messages.set_scroll_top(self.messages.scroll_height());
    }

    /// Opens or closes the panel; opening moves focus into the textarea.
    pub fn set_open(&self, open: bool) {
        let _ = self
            .root
            .class_list()
            .toggle_with_force(OPEN_STATE_CLASS, open);
        let expanded = if open { "true" } else { "false" };
        let _ = self.toggle.set_attribute("aria-expanded", expanded);
        if open {
            self.focus_input();
        }
    }

    pub fn is_open(&self) -> bool {
        self.root.class_list().contains(OPEN_STATE_CLASS)
    }

    /// Applies the derived control surface wholesale.
    pub fn apply_controls(&self, flags: ControlFlags) {
        self.input.set_disabled(!flags.input_enabled);
        self.send.set_disabled(!flags.send_enabled);
        let _ = self
            .root
            .class_list()
            .toggle_with_force(TYPING_STATE_CLASS, flags.typing_visible);
        if flags.ended {
            self.input.set_placeholder(ENDED_PLACEHOLDER);
        }
    }

    pub fn input_text(&self) -> String {
        self.input.value()
    }

    pub fn clear_input(&self) {
        self.input.set_value("");
    }

    pub fn focus_input(&self) {
        let _ = self.input.focus();
    }
}

fn create(
    document: &Document,
    tag: &str,
    class: &str,
    stage: &'static str,
) -> WidgetResult<HtmlElement> {
    let element = document.create_element(tag).map_err(|_| WidgetError::Dom {
        stage,
        details: format!("failed to create <{tag}>"),
    })?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element.dyn_into().map_err(|_| WidgetError::Dom {
        stage,
        details: format!("<{tag}> is not an HtmlElement"),
    })
}

fn create_button(
    document: &Document,
    class: &str,
    stage: &'static str,
) -> WidgetResult<HtmlButtonElement> {
    create(document, "button", class, stage)?
        .dyn_into()
        .map_err(|_| WidgetError::Dom {
            stage,
            details: "<button> is not a button element".to_string(),
        })
}
