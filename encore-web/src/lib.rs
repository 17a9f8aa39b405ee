pub mod api;
pub mod pages;

use std::rc::Rc;

use api::HttpApi;
use dioxus::prelude::*;
use encore_ui::loader::ArtistLoader;
use pages::{ArtistModal, Home, Library};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Modal visibility is a function of the path: `/` means no modal,
/// `/artist/{id}` means the modal for that artist. Back/forward re-derive
/// the state through the router.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Library)]
    #[route("/")]
    Home {},
    #[route("/artist/:id")]
    ArtistModal { id: u32 },
}

#[component]
pub fn App() -> Element {
    // One loader (and thus one artist cache) for the whole page session
    use_context_provider(|| Rc::new(ArtistLoader::new(HttpApi)));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-gray-900", Router::<Route> {} }
    }
}
