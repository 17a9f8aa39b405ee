//! encore-ui - shared display types and components for encore
//!
//! Contains the display types, pure view components, display formatting,
//! and the artist cache / load orchestrator behind the `ArtistApi` seam.
//! Nothing in here fetches data or assumes a live document, so the whole
//! crate is testable natively.

pub mod cache;
pub mod components;
pub mod display_types;
pub mod format;
pub mod loader;

pub use components::*;
pub use display_types::*;
