//! Artist card component - pure view with callbacks

use crate::display_types::Artist;
use dioxus::prelude::*;

const PLACEHOLDER_PHOTO: &str = "https://placehold.co/300x300/1f2937/e5e7eb?text=No+Photo";

/// Individual artist card: portrait with a name overlay.
///
/// Pure view component - navigation is handled via the `on_click` callback
/// carrying the artist id, not direct router calls.
#[component]
pub fn ArtistCard(artist: Artist, on_click: EventHandler<u32>) -> Element {
    let artist_id = artist.id;
    let name = artist.name.clone();
    let mut image_failed = use_signal(|| false);
    let src = if image_failed() {
        PLACEHOLDER_PHOTO.to_string()
    } else {
        artist.image.clone()
    };

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 cursor-pointer relative",
            "data-testid": "artist-card",
            onclick: move |_| on_click.call(artist_id),
            div { class: "aspect-square bg-gray-700 relative",
                img {
                    class: "w-full h-full object-cover",
                    src: "{src}",
                    alt: "{name}",
                    onerror: move |_| image_failed.set(true),
                }
                div { class: "absolute inset-x-0 bottom-0 bg-gradient-to-t from-black/80 to-transparent p-4",
                    h2 {
                        class: "font-bold text-white text-lg truncate",
                        title: "{name}",
                        "{name}"
                    }
                }
            }
        }
    }
}
