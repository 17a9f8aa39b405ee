//! Artist grid view - pure rendering, no data fetching

use crate::components::artist_card::ArtistCard;
use crate::components::error_panel::ErrorPanel;
use crate::display_types::Artist;
use dioxus::prelude::*;

/// Card grid with a visible artist count.
///
/// When `error` is set the grid is replaced by an inline error panel and the
/// count label shows 0. Used for the initial-list failure, where there is no
/// single artist context to redirect from.
/// Count shown in the label: one per rendered card, so an error state
/// (which replaces the grid) reports 0.
fn visible_count(artists: &[Artist], error: &Option<String>) -> usize {
    if error.is_some() {
        0
    } else {
        artists.len()
    }
}

#[component]
pub fn ArtistGridView(
    artists: Vec<Artist>,
    #[props(default)] error: Option<String>,
    on_artist_click: EventHandler<u32>,
) -> Element {
    let count = visible_count(&artists, &error);

    rsx! {
        div { class: "container mx-auto flex flex-col py-10 px-4",
            p { class: "text-sm text-gray-400 mb-6",
                span { "data-testid": "artist-count", "{count}" }
                " artists"
            }
            if let Some(err) = error {
                ErrorPanel { message: err }
            } else {
                div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                    for artist in artists {
                        ArtistCard {
                            key: "{artist.id}",
                            artist,
                            on_click: on_artist_click,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: u32) -> Artist {
        Artist {
            id,
            name: format!("artist-{id}"),
            image: format!("https://example.com/{id}.jpg"),
            creation_date: 1980,
            first_album: "01-01-1982".to_string(),
            members: vec!["A".to_string()],
            concerts: None,
        }
    }

    #[test]
    fn test_count_matches_list_length() {
        let artists: Vec<Artist> = (1..=3).map(artist).collect();
        assert_eq!(visible_count(&artists, &None), 3);
        assert_eq!(visible_count(&[], &None), 0);
    }

    #[test]
    fn test_error_zeroes_count() {
        let artists = vec![artist(1), artist(2)];
        assert_eq!(visible_count(&artists, &Some("list unavailable".to_string())), 0);
    }
}
