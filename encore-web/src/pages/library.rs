//! Library layout: header, the artist card grid, and the routed modal outlet
//!
//! The grid is a layout rather than a page so it stays mounted underneath
//! the modal when the route is `/artist/{id}`, and the artist list is only
//! fetched once per session.

use crate::{api, Route};
use dioxus::prelude::*;
use encore_ui::ArtistGridView;

#[component]
pub fn Library() -> Element {
    let artists = use_resource(api::fetch_artists);

    let grid = match &*artists.read() {
        None => rsx! {
            div { class: "flex items-center justify-center py-20 text-gray-400", "Loading..." }
        },
        Some(Ok(list)) => rsx! {
            ArtistGridView {
                artists: list.clone(),
                on_artist_click: move |id| {
                    navigator().push(Route::ArtistModal { id });
                },
            }
        },
        Some(Err(err)) => rsx! {
            ArtistGridView {
                artists: vec![],
                error: Some(format!("Could not load artists: {err}")),
                on_artist_click: |_| {},
            }
        },
    };

    rsx! {
        header { class: "border-b border-gray-800 py-6",
            h1 { class: "text-3xl font-bold text-white text-center", "Encore" }
            p { class: "text-gray-400 text-center text-sm mt-1",
                "Artists, bands, and where they played"
            }
        }
        {grid}
        Outlet::<Route> {}
    }
}
