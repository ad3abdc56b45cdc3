use pricing::cards::{Host, Node, Notification, Notifier};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Node as DomNode};

pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Shows notifications with the blocking `window.alert` dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notification: &Notification) {
        let Some(window) = web_sys::window() else { return };
        if let Err(err) = window.alert_with_message(notification.message()) {
            web_sys::console::error_1(&err);
        }
    }
}

/// Mounts card trees into the live DOM.
///
/// Activation payloads become `click` listeners that hand the notification to the injected
/// notifier. Listeners live as long as the page; cards are never removed.
pub struct WebHost {
    document: Document,
    notifier: Rc<dyn Notifier>,
}

impl fmt::Debug for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebHost").field("document", &self.document).finish_non_exhaustive()
    }
}

impl WebHost {
    #[must_use]
    pub fn new(document: Document, notifier: Rc<dyn Notifier>) -> Self {
        Self { document, notifier }
    }

    fn materialize(&self, node: &Node) -> Result<DomNode, JsValue> {
        let element = match node {
            Node::Text(text) => return Ok(self.document.create_text_node(text).into()),
            Node::Element(element) => element,
        };

        let dom = self.document.create_element(element.tag().as_ref())?;
        if let Some(class) = element.class_name() {
            dom.set_class_name(class);
        }
        for (attr, value) in element.attributes() {
            dom.set_attribute(attr.as_ref(), value)?;
        }
        for child in element.child_nodes() {
            dom.append_child(&self.materialize(child)?)?;
        }
        if let Some(notification) = element.activation() {
            self.listen(&dom, notification.clone())?;
        }

        Ok(dom.into())
    }

    fn listen(&self, target: &Element, notification: Notification) -> Result<(), JsValue> {
        let notifier = Rc::clone(&self.notifier);
        let on_click = Closure::<dyn Fn()>::new(move || notifier.notify(&notification));
        target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }
}

impl Host for WebHost {
    type Mount = Element;
    type Error = JsValue;

    fn find_mount(&self, selector: &str) -> Option<Self::Mount> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn append(&mut self, mount: &Self::Mount, node: &Node) -> Result<(), Self::Error> {
        let dom = self.materialize(node)?;
        mount.append_child(&dom)?;
        Ok(())
    }
}
