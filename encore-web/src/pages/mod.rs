pub mod artist_modal;
pub mod home;
pub mod library;

pub use artist_modal::ArtistModal;
pub use home::Home;
pub use library::Library;
