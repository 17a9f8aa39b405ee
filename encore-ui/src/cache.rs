//! Session-lifetime artist cache
//!
//! Append-only store keyed by artist id, holding every artist fetched so
//! far. A linear scan over a `Vec` keeps insertion order and is plenty at
//! the expected cardinality (tens of artists). Entries are never evicted;
//! the cache lives exactly as long as the page session.

use crate::display_types::Artist;

#[derive(Debug, Default)]
pub struct ArtistCache {
    entries: Vec<Artist>,
}

impl ArtistCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: u32) -> Option<&Artist> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut Artist> {
        self.entries.iter_mut().find(|a| a.id == id)
    }

    /// Appends the record unless an entry with the same id already exists,
    /// preserving the at-most-one-entry-per-id invariant.
    pub fn insert(&mut self, artist: Artist) {
        if self.find(artist.id).is_none() {
            self.entries.push(artist);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: u32, name: &str) -> Artist {
        Artist {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{id}.jpg"),
            creation_date: 1990,
            first_album: "01-01-1992".to_string(),
            members: vec!["A".to_string(), "B".to_string()],
            concerts: None,
        }
    }

    #[test]
    fn test_find_miss_on_empty() {
        let cache = ArtistCache::new();
        assert!(cache.find(1).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_then_find() {
        let mut cache = ArtistCache::new();
        cache.insert(artist(1, "one"));
        cache.insert(artist(2, "two"));
        assert_eq!(cache.find(2).map(|a| a.name.as_str()), Some("two"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_ignored() {
        let mut cache = ArtistCache::new();
        cache.insert(artist(1, "first"));
        cache.insert(artist(1, "second"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.find(1).map(|a| a.name.as_str()), Some("first"));
    }

    #[test]
    fn test_find_mut_allows_concert_attach() {
        let mut cache = ArtistCache::new();
        cache.insert(artist(3, "three"));
        cache.find_mut(3).unwrap().concerts = Some(vec![]);
        assert_eq!(cache.find(3).unwrap().concerts, Some(vec![]));
    }
}
