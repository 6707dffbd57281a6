//! Helpers for tests that mount components into a real browser document.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlInputElement};

/// Fresh `<div>` appended to `<body>`, one per test.
pub fn mount_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Waits until yew has flushed pending renders.
pub async fn settle() {
    TimeoutFuture::new(0).await;
}

/// Sets the value of the matched input or textarea and fires a bubbling
/// `input` event, the way typing does.
pub fn type_into(root: &Element, selector: &str, value: &str) {
    let element = root.query_selector(selector).unwrap().unwrap();
    match element.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.set_value(value),
        None => element.unchecked_ref::<web_sys::HtmlTextAreaElement>().set_value(value),
    }
    let mut init = EventInit::new();
    init.bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}
