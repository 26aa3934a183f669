//! Thin wrappers over the browser APIs the views touch directly.
//!
//! On wasm these go through `web-sys`. Native builds (unit tests, SSR) get
//! inert stand-ins so the shared state machines stay testable off the browser.

use dioxus::logger::tracing::debug;

/// Viewport width assumed when there is no window to measure.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1920.0;

/// Disables and re-enables page scrolling while an overlay is up.
pub trait ScrollLock {
    fn disable(&self);
    fn enable(&self);
}

/// Locks scrolling through the document body's inline style.
///
/// The scrollbar's width is moved into `padding-right` so the page does not
/// shift sideways when the bar disappears.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentScrollLock;

impl ScrollLock for DocumentScrollLock {
    fn disable(&self) {
        debug!("[platform] scroll lock on");
        #[cfg(target_arch = "wasm32")]
        web::lock_body();
    }

    fn enable(&self) {
        debug!("[platform] scroll lock off");
        #[cfg(target_arch = "wasm32")]
        web::unlock_body();
    }
}

/// Current `window.innerWidth`.
pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web::inner_width().unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_VIEWPORT_WIDTH
    }
}

/// Scroll the element with `id` into view. `false` if it is not on the page.
pub fn scroll_to_anchor(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web::scroll_into_view(id)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// `window.location.origin`, if running in a browser.
pub fn site_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web::origin()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Fragment of the current URL without the leading `#`, if any.
pub fn location_hash() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web::hash()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WindowListener;

/// Native stand-in; never attached to anything.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct WindowListener;

/// Call `handler` with the new viewport width on every `resize`. The listener
/// is removed when the returned guard drops.
pub fn on_resize(handler: impl FnMut(f64) + 'static) -> Option<WindowListener> {
    #[cfg(target_arch = "wasm32")]
    {
        let mut handler = handler;
        web::listen("resize", move |_| handler(viewport_width()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = handler;
        None
    }
}

/// Call `handler` with `KeyboardEvent.key` for every window `keydown`.
pub fn on_keydown(handler: impl FnMut(String) + 'static) -> Option<WindowListener> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let mut handler = handler;
        web::listen("keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                handler(key_event.key());
            }
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = handler;
        None
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use dioxus::logger::tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// A window event listener, detached on drop.
    pub struct WindowListener {
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl Drop for WindowListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    self.event,
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    pub(super) fn listen(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<WindowListener> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("[platform] could not listen for {event}: {err:?}");
            return None;
        }
        Some(WindowListener { event, callback })
    }

    pub(super) fn inner_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    pub(super) fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    pub(super) fn hash() -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let anchor = hash.trim_start_matches('#');
        (!anchor.is_empty()).then(|| anchor.to_string())
    }

    pub(super) fn scroll_into_view(id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        element.scroll_into_view();
        true
    }

    fn scrollbar_width(window: &web_sys::Window, document: &web_sys::Document) -> f64 {
        let inner = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        let client = document
            .document_element()
            .map(|el| el.client_width() as f64)
            .unwrap_or(inner);
        (inner - client).max(0.0)
    }

    pub(super) fn lock_body() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let padding = scrollbar_width(&window, &document);
        let style = body.style();
        let _ = style.set_property("overflow", "hidden");
        let _ = style.set_property("padding-right", &format!("{padding}px"));
    }

    pub(super) fn unlock_body() {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let _ = style.remove_property("overflow");
        let _ = style.remove_property("padding-right");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_fallbacks_are_inert() {
        assert_eq!(viewport_width(), DEFAULT_VIEWPORT_WIDTH);
        assert!(!scroll_to_anchor("contact"));
        assert!(site_origin().is_none());
        assert!(location_hash().is_none());
        assert!(on_resize(|_| {}).is_none());
        assert!(on_keydown(|_| {}).is_none());
        // Safe to call without a document.
        DocumentScrollLock.disable();
        DocumentScrollLock.enable();
    }
}
