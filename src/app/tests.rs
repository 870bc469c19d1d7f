use super::*;
use crate::audio::testing::FakeSink;
use crate::catalog::{Catalog, Shelf, default_tracks};
use crate::session::{PlaybackState, Session};
use crate::storage::{MemoryStore, Persistence};
use crate::view::Icon;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use std::time::Duration;

fn app() -> App<FakeSink> {
    let session = Session::with_rng(FakeSink::new(), StdRng::seed_from_u64(3));
    let persistence = Persistence::new(Box::new(MemoryStore::new()), "k");
    App::new(Catalog::new(default_tracks()), session, persistence)
}

fn with_bars(mut app: App<FakeSink>) -> App<FakeSink> {
    app.hitboxes.progress = Some(Rect::new(10, 20, 101, 1));
    app.hitboxes.volume = Some(Rect::new(120, 20, 11, 1));
    app.hitboxes.tracks = vec![(Rect::new(0, 5, 30, 1), 6), (Rect::new(0, 6, 30, 1), 7)];
    app.hitboxes.play = Some(Rect::new(60, 19, 3, 1));
    app
}

#[test]
fn ratio_in_maps_edges_to_zero_and_one() {
    let r = Rect::new(10, 0, 11, 1);
    assert_eq!(ratio_in(r, 10), 0.0);
    assert_eq!(ratio_in(r, 15), 0.5);
    assert_eq!(ratio_in(r, 20), 1.0);
    assert_eq!(ratio_in(r, 3), 0.0);
    assert_eq!(ratio_in(r, 99), 1.0);
    assert_eq!(ratio_in(Rect::new(0, 0, 1, 1), 0), 0.0);
}

#[test]
fn clicking_a_track_row_selects_it_by_id() {
    let mut app = with_bars(app());
    app.pointer_press(3, 6);
    assert_eq!(app.session.current(), Some(7));
    assert_eq!(app.session.state(), PlaybackState::Playing);
}

#[test]
fn clicking_play_button_toggles() {
    let mut app = with_bars(app());
    app.pointer_press(61, 19);
    assert_eq!(app.session.current(), Some(1));
    app.pointer_press(61, 19);
    assert_eq!(app.session.state(), PlaybackState::Paused);
}

#[test]
fn progress_drag_seeks_and_holds_fill_until_release() {
    let mut app = with_bars(app());
    app.select(1);
    app.sync_view();

    app.pointer_press(60, 20);
    assert!(app.latch.progress);
    assert_eq!(app.session.position(), Duration::from_secs(100));

    app.pointer_move(35);
    assert_eq!(app.session.position(), Duration::from_secs(50));
    app.sync_view();
    assert_eq!(app.view.progress(), 0.25);

    app.pointer_release();
    assert!(!app.latch.progress && !app.latch.volume);
    assert!(app.scrub.is_none());

    app.session.sink_mut().position = Duration::from_secs(20);
    app.sync_view();
    assert_eq!(app.view.progress(), 0.1);
}

#[test]
fn moves_without_press_do_nothing() {
    let mut app = with_bars(app());
    app.select(1);
    app.pointer_move(60);
    assert_eq!(app.session.position(), Duration::ZERO);
}

#[test]
fn volume_drag_sets_level_immediately() {
    let mut app = with_bars(app());
    app.pointer_press(125, 20);
    assert!(app.latch.volume);
    assert_eq!(app.session.volume(), 0.5);
    app.pointer_move(500);
    assert_eq!(app.session.volume(), 1.0);
    app.pointer_release();
    app.pointer_move(120);
    assert_eq!(app.session.volume(), 1.0);
}

#[test]
fn like_requires_a_current_track_and_persists() {
    let mut app = app();
    app.toggle_like_current();
    assert_eq!(app.catalog.liked().count(), 0);

    app.select(4);
    app.toggle_like_current();
    app.sync_view();
    assert!(app.view.heart());
    assert_eq!(app.view.liked().len(), 1);
    let stored = app.persistence.load().unwrap();
    assert!(stored.iter().find(|t| t.id == 4).unwrap().is_liked);
}

#[test]
fn rejected_playback_sets_status_and_keeps_track() {
    let mut app = app();
    app.session.sink_mut().reject_play = true;
    app.select(2);
    assert_eq!(app.session.current(), Some(2));
    assert!(app.status.as_deref().unwrap().contains("playback rejected"));

    app.sync_view();
    assert_eq!(app.view.transport(), Icon::Play);
}

#[test]
fn unknown_ids_are_silent() {
    let mut app = app();
    app.select(404);
    assert!(app.status.is_none());
    assert_eq!(app.session.state(), PlaybackState::Idle);
}

#[test]
fn search_filters_focused_shelf_and_clamps_cursor() {
    let mut app = app();
    app.cursor = 3;
    app.enter_search();
    for c in "rain".chars() {
        app.push_query_char(c);
    }
    assert_eq!(app.focused_ids(), vec![2]);
    assert_eq!(app.cursor, 0);

    app.exit_search();
    assert!(!app.search_mode);
    assert_eq!(app.query, "rain");

    app.clear_search();
    assert_eq!(app.focused_ids(), vec![1, 2, 3, 4]);
}

#[test]
fn cursor_and_focus_cycle() {
    let mut app = app();
    app.cursor_up();
    assert_eq!(app.focused_track(), Some(4));
    app.cursor_down();
    assert_eq!(app.focused_track(), Some(1));

    app.focus_next();
    assert_eq!(app.focus, Focus::Shelf(Shelf::Recent));
    app.focus_prev();
    app.focus_prev();
    assert_eq!(app.focus, Focus::Library);
    assert!(app.focused_track().is_none());

    app.focus_next();
    app.focus_next();
    app.play_focused();
    assert_eq!(app.session.current(), Some(5));
}

#[test]
fn tick_advances_on_end_of_track() {
    let mut app = app();
    app.select(10);
    app.session.sink_mut().finish();
    app.tick();
    assert_eq!(app.session.current(), Some(1));
}

#[test]
fn modes_and_volume_nudges() {
    let mut app = app();
    app.toggle_shuffle();
    app.toggle_repeat();
    assert!(app.session.shuffle() && app.session.repeat());
    app.nudge_volume(0.25);
    assert_eq!(app.session.volume(), 1.0);
    app.nudge_volume(-0.5);
    assert_eq!(app.session.volume(), 0.5);
}

struct ReadOnlyStore;

impl crate::storage::BlobStore for ReadOnlyStore {
    fn read(&self, _key: &str) -> Result<Option<String>, crate::error::StorageError> {
        Ok(None)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), crate::error::StorageError> {
        Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
    }
}

#[test]
fn failed_like_write_keeps_flag_and_reports_once() {
    let session = Session::with_rng(FakeSink::new(), StdRng::seed_from_u64(3));
    let persistence = Persistence::new(Box::new(ReadOnlyStore), "k");
    let mut app = App::new(Catalog::new(default_tracks()), session, persistence);

    app.select(1);
    app.toggle_like_current();
    assert!(app.catalog.find_by_id(1).unwrap().is_liked);
    assert!(app.status.as_deref().unwrap().starts_with("storage unavailable"));
    assert!(!app.persistence.is_available());

    app.toggle_like_current();
    assert!(!app.catalog.find_by_id(1).unwrap().is_liked);
    assert!(app.status.is_none());
}
