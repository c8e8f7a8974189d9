//! Handle to the widget's hidden file input.
//!
//! The element is captured when it mounts and held in a signal, so the
//! widget reaches its own input without looking it up by id.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use docdrop_core::InputControl;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Copyable handle to the mounted `<input type="file">`.
#[derive(Clone, Copy, PartialEq)]
pub struct FileInputHandle(Signal<Option<HtmlInputElement>>);

impl FileInputHandle {
    /// Wrap a signal that will receive the element once it mounts.
    #[must_use]
    pub const fn new(element: Signal<Option<HtmlInputElement>>) -> Self {
        Self(element)
    }

    /// Record the mounted element.
    pub fn attach(&mut self, element: HtmlInputElement) {
        self.0.set(Some(element));
    }

    /// Capture the input element from its `onmounted` event.
    pub fn attach_mounted(&mut self, evt: &MountedEvent) {
        let data = evt.data();
        let element = data
            .downcast::<web_sys::Element>()
            .and_then(|el| el.dyn_ref::<HtmlInputElement>())
            .cloned();
        match element {
            Some(el) => self.attach(el),
            None => warn!("mounted file input is not an HtmlInputElement"),
        }
    }

    /// Open the platform file picker.
    pub fn open_picker(&self) {
        match self.0.peek().as_ref() {
            Some(el) => el.click(),
            None => warn!("file picker requested before the input mounted"),
        }
    }
}

impl InputControl for FileInputHandle {
    fn clear(&mut self) {
        if let Some(el) = self.0.peek().as_ref() {
            el.set_value("");
        }
    }
}
