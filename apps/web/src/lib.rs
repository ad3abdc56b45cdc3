//! Browser entry point for the pricing page.
//!
//! Waits for the document to be ready, then mounts the default plans into the first
//! `.pricing-grid` element. Pages without that element are left untouched.

mod host;

pub use crate::host::{AlertNotifier, WebHost};

use pricing::cards::{PricingRenderer, Rendered};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Entry point for the WASM module.
///
/// # Errors
/// Returns the JS exception raised while reaching the document or attaching the ready listener.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = host::document()?;
    if is_parsed(&document.ready_state()) {
        return render_page().map(drop);
    }

    let on_ready = Closure::<dyn Fn()>::new(|| {
        if let Err(err) = render_page() {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    // Lives for the rest of the page.
    on_ready.forget();
    Ok(())
}

/// Renders the default plans into the current page.
///
/// # Errors
/// Returns the JS exception raised while building or attaching DOM nodes.
pub fn render_page() -> Result<Rendered, JsValue> {
    let mut host = WebHost::new(host::document()?, Rc::new(AlertNotifier));
    PricingRenderer::default().render(&mut host)
}

/// `document.readyState` is `"loading"` until parsing finishes, then `"interactive"` or `"complete"`.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[cfg(test)]
mod tests {
    use super::is_parsed;

    #[test]
    fn renders_immediately_once_parsed() {
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));
    }

    #[test]
    fn waits_for_content_loaded_while_loading() {
        assert!(!is_parsed("loading"));
    }
}
