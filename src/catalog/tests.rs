use super::*;
use crate::storage::{BlobStore, MemoryStore, Persistence};

fn t(id: TrackId, title: &str, artist: &str, category: &str) -> Track {
    Track {
        id,
        title: title.into(),
        artist: artist.into(),
        img: String::new(),
        audio: format!("/tmp/{id}.mp3"),
        category: category.into(),
        is_liked: false,
    }
}

fn persistence_with(blob: Option<&str>) -> Persistence {
    let mut store = MemoryStore::new();
    if let Some(blob) = blob {
        store.write("k", blob).unwrap();
    }
    Persistence::new(Box::new(store), "k")
}

#[test]
fn default_seed_has_ten_tracks_in_four_categories() {
    let tracks = default_tracks();
    assert_eq!(tracks.len(), 10);

    let mut categories: Vec<&str> = tracks.iter().map(|t| t.category.as_str()).collect();
    categories.dedup();
    assert_eq!(categories, vec!["Featured", "Recent", "Viral", "Electro"]);
    assert!(tracks.iter().all(|t| !t.is_liked));
}

#[test]
fn load_seeds_defaults_when_nothing_is_stored() {
    let mut p = persistence_with(None);
    let catalog = Catalog::load(&mut p);
    assert_eq!(catalog.tracks(), default_tracks().as_slice());
}

#[test]
fn load_seeds_defaults_for_null_and_garbage() {
    for blob in ["null", "{not json", r#"{"id": 1}"#] {
        let mut p = persistence_with(Some(blob));
        assert_eq!(Catalog::load(&mut p).len(), 10, "blob {blob:?}");
    }
}

#[test]
fn load_keeps_stored_empty_array() {
    let mut p = persistence_with(Some("[]"));
    assert!(Catalog::load(&mut p).is_empty());
}

#[test]
fn load_reads_persisted_liked_flags() {
    let blob = r#"[{"id":7,"title":"X","artist":"Y","img":"i","audio":"a","category":"Viral","isLiked":true}]"#;
    let mut p = persistence_with(Some(blob));
    let catalog = Catalog::load(&mut p);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.find_by_id(7).unwrap().is_liked);
}

#[test]
fn find_by_id_returns_every_track() {
    let catalog = Catalog::new(default_tracks());
    for track in catalog.tracks() {
        assert_eq!(catalog.find_by_id(track.id).unwrap(), track);
    }
    assert!(matches!(
        catalog.find_by_id(999),
        Err(crate::error::PlayerError::TrackNotFound(999))
    ));
}

#[test]
fn duplicate_ids_keep_first_entry() {
    let catalog = Catalog::new(vec![t(1, "A", "x", "Featured"), t(1, "B", "y", "Recent")]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find_by_id(1).unwrap().title, "A");
}

#[test]
fn toggle_liked_is_its_own_inverse_and_persists_each_time() {
    let mut p = persistence_with(None);
    let mut catalog = Catalog::new(vec![t(1, "A", "x", "Featured"), t(2, "B", "y", "Recent")]);

    assert!(catalog.toggle_liked(2, &mut p).unwrap());
    let stored = p.load().unwrap();
    assert!(stored.iter().find(|t| t.id == 2).unwrap().is_liked);

    assert!(!catalog.toggle_liked(2, &mut p).unwrap());
    let stored = p.load().unwrap();
    assert!(!stored.iter().find(|t| t.id == 2).unwrap().is_liked);
}

#[test]
fn toggle_liked_unknown_id_is_a_noop() {
    let mut p = persistence_with(None);
    let mut catalog = Catalog::new(vec![t(1, "A", "x", "Featured")]);
    assert!(matches!(
        catalog.toggle_liked(42, &mut p),
        Err(crate::error::PlayerError::TrackNotFound(42))
    ));
    assert!(p.load().is_none());
}

#[test]
fn filter_matches_title_or_artist_case_insensitively() {
    let catalog = Catalog::new(default_tracks());
    let ids: Vec<TrackId> = catalog.filter("CRIMSON", |_| true).map(|t| t.id).collect();
    // "Crimson Waves" is an artist, "Crimson Ghost" a title.
    assert_eq!(ids, vec![5, 7]);
}

#[test]
fn empty_query_returns_full_shelf() {
    let catalog = Catalog::new(default_tracks());
    let featured: Vec<TrackId> = catalog.shelf(Shelf::Featured, "").map(|t| t.id).collect();
    assert_eq!(featured, vec![1, 2, 3, 4]);
    let recent: Vec<TrackId> = catalog.shelf(Shelf::Recent, "").map(|t| t.id).collect();
    assert_eq!(recent, vec![5, 6]);
}

#[test]
fn other_shelf_takes_every_unnamed_category() {
    let catalog = Catalog::new(default_tracks());
    let other: Vec<TrackId> = catalog.shelf(Shelf::Other, "").map(|t| t.id).collect();
    assert_eq!(other, vec![7, 8, 9, 10]);

    let filtered: Vec<TrackId> = catalog.shelf(Shelf::Other, "pulse").map(|t| t.id).collect();
    assert_eq!(filtered, vec![9]);
}

#[test]
fn liked_lists_in_catalog_order() {
    let mut p = persistence_with(None);
    let mut catalog = Catalog::new(default_tracks());
    catalog.toggle_liked(9, &mut p).unwrap();
    catalog.toggle_liked(2, &mut p).unwrap();
    let ids: Vec<TrackId> = catalog.liked().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 9]);
}
