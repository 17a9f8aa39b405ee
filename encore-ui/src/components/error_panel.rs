//! Inline error panel shown in place of the card grid

use dioxus::prelude::*;

#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded",
            "data-testid": "error-panel",
            h2 { class: "font-bold mb-1", "Error" }
            p { "{message}" }
        }
    }
}
