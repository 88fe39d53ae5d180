//! Host integration: DOM reads, scroll listeners, print and document title.
//!
//! Everything here is a no-op on native targets, where the page is only
//! ever rendered to a string.

use tracing::debug;
#[cfg(target_arch = "wasm32")]
use tracing::warn;

#[cfg(target_arch = "wasm32")]
use super::title::resolve_title;
use super::viewport::ViewportHandle;
#[cfg(not(target_arch = "wasm32"))]
use super::viewport::StaticViewport;

#[cfg(target_arch = "wasm32")]
pub use dom::DomViewport;

/// The viewport of the current build target.
#[cfg(target_arch = "wasm32")]
pub fn viewport() -> ViewportHandle {
    ViewportHandle::new(DomViewport)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport() -> ViewportHandle {
    ViewportHandle::new(StaticViewport)
}

/// Copy the first `h1`'s rendered text into the document title.
#[cfg(target_arch = "wasm32")]
pub fn sync_title_from_heading() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let heading = match document.query_selector("h1") {
        Ok(found) => found.map(|h1| h1.text_content().unwrap_or_default()),
        Err(err) => {
            warn!(?err, "h1 lookup failed");
            None
        }
    };
    if let Some(title) = resolve_title(heading.as_deref()) {
        debug!(%title, "document title synced");
        document.set_title(&title);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn sync_title_from_heading() {
    debug!("no live document; title is derived at export time");
}

/// Mirror the page language onto `<html lang>`.
#[cfg(target_arch = "wasm32")]
pub fn set_document_lang(lang: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(err) = root.set_attribute("lang", lang) {
            warn!(?err, lang, "failed to set document language");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_document_lang(lang: &str) {
    debug!(lang, "document language unchanged on native host");
}

/// Open the host's print dialog.
#[cfg(target_arch = "wasm32")]
pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.print() {
            warn!(?err, "print request rejected");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn print_page() {
    debug!("print requested on a host without a print dialog");
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{AddEventListenerOptions, HtmlElement};

    use crate::core::viewport::{ScrollHandler, ScrollSubscription, Viewport};

    /// Reads the live document of the browser window.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct DomViewport;

    impl Viewport for DomViewport {
        fn scroll_offset(&self) -> f64 {
            web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0)
        }

        fn section_top(&self, id: &str) -> Option<f64> {
            let element = web_sys::window()?.document()?.get_element_by_id(id)?;
            let element: HtmlElement = element.dyn_into().ok()?;
            Some(f64::from(element.offset_top()))
        }

        fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
            let Some(window) = web_sys::window() else {
                return ScrollSubscription::inert();
            };

            let closure = Closure::<dyn FnMut()>::new(move || handler());
            let options = AddEventListenerOptions::new();
            options.set_passive(true);

            if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            ) {
                warn!(?err, "could not attach scroll listener");
                return ScrollSubscription::inert();
            }

            ScrollSubscription::new(move || {
                if let Err(err) = window
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                {
                    warn!(?err, "could not detach scroll listener");
                }
            })
        }
    }
}
