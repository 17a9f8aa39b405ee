//! Modal built on the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap, Escape handling,
//! and `::backdrop` styling for free. The dialog manages its own display
//! (none when closed, block when open), so layout lives in an inner fixed
//! container rather than on the dialog itself.
//!
//! `showModal()` throws if the dialog is already open, and effects can run
//! more than once, so the effect checks the `open` attribute before calling
//! either method.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

/// Counter for generating unique dialog ids
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Modal that wraps content in a native `<dialog>` element.
///
/// Closing is always routed through `on_close` (Escape via the dialog's
/// `cancel` event, clicks on the backdrop); the owner decides what closing
/// means.
#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{id}")
    });
    let effect_id = dialog_id.clone();

    // Drive showModal()/close() from the is_open signal
    use_effect(move || {
        let open = is_open();
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&effect_id) else {
            return;
        };
        if element.has_attribute("open") == open {
            return;
        }
        let method = if open { "showModal" } else { "close" };
        if let Ok(value) = js_sys::Reflect::get(&element, &method.into()) {
            if let Some(func) = value.dyn_ref::<js_sys::Function>() {
                let _ = func.call0(&element);
            }
        }
    });

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80",
            // Escape fires 'cancel'
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    // clicks inside the content must not close the modal
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
