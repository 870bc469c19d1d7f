use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::PlayerError;
use crate::storage::Persistence;

use super::defaults::default_tracks;
use super::model::{Shelf, Track, TrackId};

/// Ordered collection of tracks. Insertion order drives next/previous.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog, dropping any later entry whose id was already seen.
    pub fn new(tracks: Vec<Track>) -> Self {
        let mut seen: HashSet<TrackId> = HashSet::with_capacity(tracks.len());
        let tracks = tracks
            .into_iter()
            .filter(|t| {
                let fresh = seen.insert(t.id);
                if !fresh {
                    warn!(id = t.id, title = %t.title, "dropping duplicate track id");
                }
                fresh
            })
            .collect();
        Self { tracks }
    }

    /// Resolve the catalog from storage, seeding defaults when nothing
    /// usable is stored.
    pub fn load(persistence: &mut Persistence) -> Self {
        match persistence.load() {
            Some(tracks) => {
                info!(tracks = tracks.len(), "catalog loaded from storage");
                Self::new(tracks)
            }
            None => {
                info!("seeding default catalog");
                Self::new(default_tracks())
            }
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn find_by_id(&self, id: TrackId) -> Result<&Track, PlayerError> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .ok_or(PlayerError::TrackNotFound(id))
    }

    /// Position of `id` in catalog order, computed fresh on every call.
    pub fn index_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Flip the liked flag of `id` and persist the catalog.
    ///
    /// Returns the new flag. Unknown ids change nothing and yield
    /// `TrackNotFound`. A failed write yields `StorageUnavailable` while the
    /// flag stays flipped in memory.
    pub fn toggle_liked(
        &mut self,
        id: TrackId,
        persistence: &mut Persistence,
    ) -> Result<bool, PlayerError> {
        let track = self
            .tracks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(PlayerError::TrackNotFound(id))?;
        track.is_liked = !track.is_liked;
        let liked = track.is_liked;
        debug!(id, liked, "toggled liked");

        persistence.save(self)?;
        Ok(liked)
    }

    /// Tracks whose title or artist contains `query` (case-insensitive)
    /// and that satisfy `category`.
    pub fn filter<'a, P>(
        &'a self,
        query: &str,
        category: P,
    ) -> impl Iterator<Item = &'a Track> + use<'a, P>
    where
        P: Fn(&Track) -> bool + 'a,
    {
        let query = query.to_lowercase();
        self.tracks.iter().filter(move |t| {
            category(*t)
                && (t.title.to_lowercase().contains(&query)
                    || t.artist.to_lowercase().contains(&query))
        })
    }

    /// Contents of one shelf under the current search query.
    pub fn shelf<'a>(
        &'a self,
        shelf: Shelf,
        query: &str,
    ) -> impl Iterator<Item = &'a Track> + use<'a> {
        self.filter(query, move |t| shelf.matches(t))
    }

    /// Liked tracks in catalog order.
    pub fn liked(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.is_liked)
    }
}
