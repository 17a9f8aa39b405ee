//! Artist detail view - the modal body
//!
//! Renders the full profile of a loaded artist: portrait, formation year,
//! first album, members, and the formatted concert history.

use crate::display_types::Artist;
use crate::format::{format_date, format_location};
use dioxus::prelude::*;

const PLACEHOLDER_PORTRAIT: &str = "https://placehold.co/250x250/1f2937/e5e7eb?text=Image+Not+Found";

/// Artist profile with concert history, rendered inside the modal.
///
/// Expects an artist whose concert lookup has already run; a degraded load
/// arrives here with an empty concert list and renders the placeholder line.
#[component]
pub fn ArtistDetailView(artist: Artist, on_close: EventHandler<()>) -> Element {
    let mut image_failed = use_signal(|| false);
    let src = if image_failed() {
        PLACEHOLDER_PORTRAIT.to_string()
    } else {
        artist.image.clone()
    };
    let members = if artist.members.is_empty() {
        "N/A".to_string()
    } else {
        artist.members.join(", ")
    };
    let concerts = artist.concerts.clone().unwrap_or_default();

    rsx! {
        div { class: "bg-gray-800 rounded-lg shadow-xl max-w-lg w-full max-h-[85vh] overflow-y-auto relative p-6",
            button {
                class: "absolute top-3 right-3 text-gray-400 hover:text-white text-2xl leading-none",
                "data-testid": "modal-close",
                onclick: move |_| on_close.call(()),
                "\u{00d7}"
            }
            img {
                class: "w-40 h-40 rounded-full object-cover mx-auto mb-4",
                src: "{src}",
                alt: "{artist.name}",
                onerror: move |_| image_failed.set(true),
            }
            h2 { class: "text-2xl font-bold text-white text-center mb-4", "{artist.name}" }
            p { class: "text-gray-300 mb-1",
                strong { "Formed: " }
                "{artist.creation_date}"
            }
            p { class: "text-gray-300 mb-1",
                strong { "First Album: " }
                "{artist.first_album}"
            }
            p { class: "text-gray-300 mb-4",
                strong { "Members: " }
                "{members}"
            }
            h3 { class: "text-lg font-semibold text-white mb-2", "Concert History" }
            ul { class: "space-y-1", "data-testid": "concert-list",
                if concerts.is_empty() {
                    li { class: "text-gray-400", "No upcoming concerts found." }
                } else {
                    for concert in concerts {
                        li { class: "flex justify-between gap-4 text-gray-300",
                            span { class: "font-medium", {format_date(Some(concert.date.as_str()))} }
                            span { {format_location(Some(concert.location.as_str()))} }
                        }
                    }
                }
            }
        }
    }
}
