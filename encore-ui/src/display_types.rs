//! Display types for UI components
//!
//! Lightweight records shaped for rendering, converted from the wire
//! structs at the API boundary. They enable props-based components that
//! work with either real or test data.

/// Artist display info
#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: u32,
    pub name: String,
    /// Portrait URL; cards and the modal fall back to a placeholder if it 404s
    pub image: String,
    /// Formation year, rendered verbatim
    pub creation_date: u32,
    pub first_album: String,
    /// Band members in the order the backend lists them
    pub members: Vec<String>,
    /// `None` until the concert lookup has run, `Some` (possibly empty) after
    pub concerts: Option<Vec<Concert>>,
}

/// A single dated, located concert
#[derive(Clone, Debug, PartialEq)]
pub struct Concert {
    /// `DD-MM-YYYY`
    pub date: String,
    /// `city-country` slug, words joined with `_`
    pub location: String,
}
