//! Artist load orchestration
//!
//! `ArtistLoader` owns the session cache and coordinates the two lookups
//! behind a single `load_artist` call: the artist record itself (fatal on
//! failure) followed by its concerts (degraded to an empty list on failure).
//! Concurrent loads for the same id share one in-flight future instead of
//! issuing duplicate requests.
//!
//! Everything runs on the single wasm thread; the `RefCell`s are only ever
//! borrowed between suspension points, never across one.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use thiserror::Error;

use crate::cache::ArtistCache;
use crate::display_types::{Artist, Concert};

/// Error from the HTTP layer, produced by `ArtistApi` implementations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Error produced by [`ArtistLoader::load_artist`]; both variants are fatal
/// for the load and the caller is expected to leave the page
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    #[error("artist {0} not found")]
    NotFound(u32),
    #[error("artist lookup failed: {0}")]
    Lookup(ApiError),
}

/// The two read-only endpoints the loader orchestrates.
///
/// Implemented by the reqwest client in the web crate and by mocks in tests.
/// Futures here are deliberately not `Send`; everything runs on the one
/// wasm thread.
#[allow(async_fn_in_trait)]
pub trait ArtistApi {
    /// Looks up a single artist. `Ok(None)` when the result array is empty.
    async fn fetch_artist(&self, id: u32) -> Result<Option<Artist>, ApiError>;
    async fn fetch_concerts(&self, id: u32) -> Result<Vec<Concert>, ApiError>;
}

type PendingLoad = Shared<LocalBoxFuture<'static, Result<Artist, LoadError>>>;

/// Owns the artist cache and de-duplicates in-flight loads.
///
/// Constructed once at app start and shared via context, so the cache
/// lifetime matches the page session.
pub struct ArtistLoader<A> {
    api: A,
    cache: RefCell<ArtistCache>,
    /// In-flight loads keyed by artist id
    pending: RefCell<HashMap<u32, PendingLoad>>,
}

impl<A> ArtistLoader<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: RefCell::new(ArtistCache::new()),
            pending: RefCell::new(HashMap::new()),
        }
    }
}

impl<A: ArtistApi + 'static> ArtistLoader<A> {
    /// Loads the full artist record, profile plus concert history.
    ///
    /// A cache hit with concerts already attached resolves without any I/O,
    /// so repeated opens of the same modal are free. A failed artist lookup
    /// (or an empty result) is fatal; a failed concert lookup is logged and
    /// the artist comes back with an empty concert list.
    pub async fn load_artist(self: Rc<Self>, id: u32) -> Result<Artist, LoadError> {
        if let Some(artist) = self.cache.borrow().find(id) {
            if artist.concerts.is_some() {
                return Ok(artist.clone());
            }
        }

        let load = {
            let mut pending = self.pending.borrow_mut();
            match pending.get(&id) {
                Some(load) => load.clone(),
                None => {
                    let this = Rc::clone(&self);
                    let load = async move {
                        let result = Rc::clone(&this).fetch_and_cache(id).await;
                        // prune on completion, even if every caller that was
                        // awaiting has since been dropped
                        this.pending.borrow_mut().remove(&id);
                        result
                    }
                    .boxed_local()
                    .shared();
                    pending.insert(id, load.clone());
                    load
                }
            }
        };

        load.await
    }

    async fn fetch_and_cache(self: Rc<Self>, id: u32) -> Result<Artist, LoadError> {
        let mut artist = match self.api.fetch_artist(id).await {
            Ok(Some(artist)) => artist,
            Ok(None) => return Err(LoadError::NotFound(id)),
            Err(err) => return Err(LoadError::Lookup(err)),
        };

        // Cache the base record first so the profile survives a concert failure
        self.cache.borrow_mut().insert(artist.clone());

        let concerts = match self.api.fetch_concerts(id).await {
            Ok(concerts) => concerts,
            Err(err) => {
                tracing::warn!("concert lookup for artist {id} failed: {err}");
                Vec::new()
            }
        };

        artist.concerts = Some(concerts);
        if let Some(entry) = self.cache.borrow_mut().find_mut(id) {
            entry.concerts = artist.concerts.clone();
        }
        Ok(artist)
    }
}
