//! Artist modal page
//!
//! Mounted while the path is `/artist/{id}`; loads the artist through the
//! shared `ArtistLoader` and shows it in the dialog. Closing resets the URL
//! to `/` synchronously, so a hidden modal and the root path never disagree;
//! the navigation unmounts this page, which clears the dialog content. A
//! fatal lookup failure never shows the modal at all: the page redirects
//! away wholesale, as there is nothing left to render here.

use std::rc::Rc;

use crate::api::HttpApi;
use crate::Route;
use dioxus::prelude::*;
use encore_ui::loader::ArtistLoader;
use encore_ui::{ArtistDetailView, Modal};

#[component]
pub fn ArtistModal(id: ReadSignal<u32>) -> Element {
    let loader: Rc<ArtistLoader<HttpApi>> = use_context();
    let mut is_open = use_signal(|| true);

    // id is read inside the reactive closure, so a history jump between two
    // artist paths restarts the load instead of rendering a stale record
    let artist = use_resource(move || {
        let loader = loader.clone();
        async move { loader.load_artist(id()).await }
    });

    use_effect(move || {
        if let Some(Err(err)) = &*artist.read() {
            tracing::error!("failed to load artist {}: {err}", id());
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/404.html");
            }
        }
    });

    let close = move |_: ()| {
        is_open.set(false);
        navigator().push(Route::Home {});
    };

    let rendered = match &*artist.read() {
        Some(Ok(artist)) => rsx! {
            Modal { is_open, on_close: close,
                ArtistDetailView { artist: artist.clone(), on_close: close }
            }
        },
        // still loading, or redirecting after a failed lookup
        _ => rsx! {},
    };
    rendered
}
