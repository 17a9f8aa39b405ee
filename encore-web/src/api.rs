//! HTTP client for the artist endpoints
//!
//! Wire structs mirror the backend JSON exactly (`creationDate` is a bare
//! number there); they are converted into `encore-ui` display types at this
//! boundary. All URLs are page-relative, resolved against the origin that
//! served the app.

use encore_ui::display_types::{Artist, Concert};
use encore_ui::loader::{ApiError, ArtistApi};
use serde::Deserialize;

#[derive(Deserialize)]
struct ArtistRecord {
    id: u32,
    name: String,
    image: String,
    #[serde(rename = "creationDate")]
    creation_date: u32,
    #[serde(rename = "firstAlbum")]
    first_album: String,
    #[serde(default)]
    members: Vec<String>,
}

#[derive(Deserialize)]
struct ConcertRecord {
    date: String,
    location: String,
}

impl From<ArtistRecord> for Artist {
    fn from(rec: ArtistRecord) -> Self {
        Artist {
            id: rec.id,
            name: rec.name,
            image: rec.image,
            creation_date: rec.creation_date,
            first_album: rec.first_album,
            members: rec.members,
            concerts: None,
        }
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status().as_u16()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetches the full artist list for the card grid.
pub async fn fetch_artists() -> Result<Vec<Artist>, ApiError> {
    let records: Vec<ArtistRecord> = get_json("/filter").await?;
    Ok(records.into_iter().map(Artist::from).collect())
}

/// [`ArtistApi`] over the real endpoints.
#[derive(Clone, Copy, Default)]
pub struct HttpApi;

impl ArtistApi for HttpApi {
    async fn fetch_artist(&self, id: u32) -> Result<Option<Artist>, ApiError> {
        let records: Vec<ArtistRecord> = get_json(&format!("/filter?id={id}")).await?;
        Ok(records.into_iter().next().map(Artist::from))
    }

    async fn fetch_concerts(&self, id: u32) -> Result<Vec<Concert>, ApiError> {
        let records: Vec<ConcertRecord> = get_json(&format!("/concerts/data?id={id}")).await?;
        Ok(records
            .into_iter()
            .map(|r| Concert {
                date: r.date,
                location: r.location,
            })
            .collect())
    }
}
