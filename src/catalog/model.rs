use serde::{Deserialize, Serialize};

/// Stable track identifier, unique within a catalog.
pub type TrackId = u32;

/// One playable catalog entry.
///
/// The serialized field names match the persisted blob layout, so the
/// liked flag is stored as `isLiked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    /// Artwork reference (URL or path).
    pub img: String,
    /// Audio source reference (URL or path).
    pub audio: String,
    pub category: String,
    #[serde(rename = "isLiked", default)]
    pub is_liked: bool,
}

/// Categories that get a shelf of their own; everything else falls into
/// [`Shelf::Other`].
pub const NAMED_CATEGORIES: [&str; 2] = ["Featured", "Recent"];

/// The three browsable grids of the main view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shelf {
    Featured,
    Recent,
    Other,
}

impl Shelf {
    pub const ALL: [Shelf; 3] = [Shelf::Featured, Shelf::Recent, Shelf::Other];

    /// Heading rendered above the shelf.
    pub fn title(self) -> &'static str {
        match self {
            Shelf::Featured => "Featured",
            Shelf::Recent => "Recently Played",
            Shelf::Other => "Community Favorites",
        }
    }

    /// Category predicate for this shelf.
    pub fn matches(self, track: &Track) -> bool {
        match self {
            Shelf::Featured => track.category == "Featured",
            Shelf::Recent => track.category == "Recent",
            Shelf::Other => !NAMED_CATEGORIES.contains(&track.category.as_str()),
        }
    }
}
