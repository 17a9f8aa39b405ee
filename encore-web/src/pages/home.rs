use dioxus::prelude::*;

/// Root path: the grid with no modal. Everything visible lives in the
/// `Library` layout; this page only occupies the outlet.
#[component]
pub fn Home() -> Element {
    rsx! {}
}
