//! Thin web-sys helpers for the few places that still touch the document
//! directly. Missing elements are never an error for the caller beyond a
//! debug line; the feature just does nothing.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::error::{DashboardError, Result};

pub const CSRF_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Runs native constraint validation on the submitted form and shows the
/// browser's messages when it fails.
pub fn form_is_valid(event: &SubmitEvent) -> bool {
    match event.target_dyn_into::<HtmlFormElement>() {
        Some(form) => {
            if form.check_validity() {
                true
            } else {
                form.report_validity();
                false
            }
        }
        None => {
            log::debug!("submit event without a form target");
            true
        }
    }
}

pub fn csrf_token() -> Result<String> {
    document()
        .and_then(|doc| doc.query_selector(CSRF_SELECTOR).ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|token| !token.is_empty())
        .ok_or(DashboardError::MissingCsrfToken)
}

/// Selects the text of the input with `id` and copies it to the clipboard.
pub fn copy_input_text(id: &'static str) -> Result<()> {
    let doc = document().ok_or(DashboardError::MissingElement("document"))?;
    let input = doc
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .ok_or(DashboardError::MissingElement(id))?;
    input.select();
    let html_doc = doc
        .dyn_into::<HtmlDocument>()
        .map_err(|_| DashboardError::MissingElement("html document"))?;
    match html_doc.exec_command("copy") {
        Ok(true) => Ok(()),
        _ => Err(DashboardError::MissingElement("clipboard")),
    }
}

pub fn lock_body_scroll(locked: bool) {
    let body = match document().and_then(|doc| doc.body()) {
        Some(body) => body,
        None => {
            log::debug!("no <body> to lock");
            return;
        }
    };
    let value = if locked { "hidden" } else { "" };
    if body.style().set_property("overflow", value).is_err() {
        log::debug!("could not set body overflow");
    }
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Window `resize` subscription, removed again when dropped.
pub struct ResizeListener {
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn new(mut on_resize: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(width) = viewport_width() {
                on_resize(width);
            }
        });
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(ResizeListener { closure })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
        }
    }
}
