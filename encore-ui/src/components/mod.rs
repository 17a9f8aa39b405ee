pub mod artist_card;
pub mod artist_detail;
pub mod artist_grid;
pub mod error_panel;
pub mod modal;

pub use artist_card::ArtistCard;
pub use artist_detail::ArtistDetailView;
pub use artist_grid::ArtistGridView;
pub use error_panel::ErrorPanel;
pub use modal::Modal;
