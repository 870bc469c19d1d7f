//! Application model: `App` and the focus/search state of the UI.
//!
//! Handlers here translate user input into session transitions and catalog
//! mutations, then re-project the result onto the view.

use tracing::debug;

use crate::audio::AudioSink;
use crate::catalog::{Catalog, Shelf, TrackId};
use crate::error::PlayerError;
use crate::session::Session;
use crate::storage::Persistence;
use crate::view::{self, ViewState, ViewUpdate};

use super::pointer::{DragLatch, Hitboxes, Target, ratio_in};

/// Which list the keyboard cursor is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Shelf(Shelf),
    Library,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Shelf(Shelf::Featured),
        Focus::Shelf(Shelf::Recent),
        Focus::Shelf(Shelf::Other),
        Focus::Library,
    ];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        Self::ORDER[next]
    }
}

/// The main application model.
pub struct App<S: AudioSink = Box<dyn AudioSink>> {
    pub catalog: Catalog,
    pub session: Session<S>,
    pub persistence: Persistence,
    pub view: ViewState,

    pub query: String,
    pub search_mode: bool,

    pub focus: Focus,
    pub cursor: usize,

    pub latch: DragLatch,
    /// Last pointer ratio on the progress bar while dragging.
    pub scrub: Option<f64>,
    pub hitboxes: Hitboxes,

    /// Transient message shown in the status line.
    pub status: Option<String>,
}

impl<S: AudioSink> App<S> {
    pub fn new(catalog: Catalog, session: Session<S>, persistence: Persistence) -> Self {
        Self {
            catalog,
            session,
            persistence,
            view: ViewState::default(),
            query: String::new(),
            search_mode: false,
            focus: Focus::Shelf(Shelf::Featured),
            cursor: 0,
            latch: DragLatch::default(),
            scrub: None,
            hitboxes: Hitboxes::default(),
            status: None,
        }
    }

    /// Re-project session and catalog onto the view.
    pub fn sync_view(&mut self) -> Vec<ViewUpdate> {
        let scrub = if self.latch.progress { self.scrub } else { None };
        view::sync(&mut self.view, &self.session, &self.catalog, scrub)
    }

    /// Drain sink notifications (time updates, end of track).
    pub fn tick(&mut self) {
        if let Some(e) = self.session.pump(&self.catalog) {
            self.report(Err(e));
        }
    }

    // --- transport ---

    pub fn select(&mut self, id: TrackId) {
        let result = self.session.select(&self.catalog, id);
        self.report(result);
    }

    pub fn toggle_playback(&mut self) {
        let result = self.session.toggle(&self.catalog);
        self.report(result);
    }

    pub fn skip_forward(&mut self) {
        let result = self.session.skip_forward(&self.catalog);
        self.report(result);
    }

    pub fn skip_backward(&mut self) {
        let result = self.session.skip_backward(&self.catalog);
        self.report(result);
    }

    pub fn seek_by(&mut self, secs: i64) {
        self.session.seek_by(secs);
    }

    pub fn nudge_volume(&mut self, delta: f32) {
        let level = self.session.volume() + delta;
        self.session.set_volume(level);
    }

    pub fn toggle_shuffle(&mut self) {
        let on = !self.session.shuffle();
        self.session.set_shuffle(on);
    }

    pub fn toggle_repeat(&mut self) {
        let on = !self.session.repeat();
        self.session.set_repeat(on);
    }

    /// Flip the liked flag of the current track. Does nothing when idle.
    pub fn toggle_like_current(&mut self) {
        let Some(id) = self.session.current() else {
            return;
        };
        let result = self
            .catalog
            .toggle_liked(id, &mut self.persistence)
            .map(|_| ());
        self.report(result);
    }

    // --- keyboard cursor ---

    /// Track ids of the focused list, in display order.
    pub fn focused_ids(&self) -> Vec<TrackId> {
        match self.focus {
            Focus::Shelf(shelf) => self.catalog.shelf(shelf, &self.query).map(|t| t.id).collect(),
            Focus::Library => self.catalog.liked().map(|t| t.id).collect(),
        }
    }

    pub fn focused_track(&self) -> Option<TrackId> {
        self.focused_ids().get(self.cursor).copied()
    }

    pub fn cursor_down(&mut self) {
        let len = self.focused_ids().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.focused_ids().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.step(true);
        self.cursor = 0;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.step(false);
        self.cursor = 0;
    }

    pub fn play_focused(&mut self) {
        if let Some(id) = self.focused_track() {
            self.select(id);
        }
    }

    // --- search ---

    pub fn enter_search(&mut self) {
        self.search_mode = true;
    }

    /// Leave search mode keeping the query.
    pub fn exit_search(&mut self) {
        self.search_mode = false;
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.search_mode = false;
        self.clamp_cursor();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_cursor();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.focused_ids().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    // --- pointer ---

    pub fn pointer_press(&mut self, column: u16, row: u16) {
        let Some(target) = self.hitboxes.target_at(column, row) else {
            return;
        };
        match target {
            Target::Progress(_) => {
                self.latch.progress = true;
                self.scrub_progress(column);
            }
            Target::Volume(_) => {
                self.latch.volume = true;
                self.scrub_volume(column);
            }
            Target::Heart => self.toggle_like_current(),
            Target::Prev => self.skip_backward(),
            Target::Play => self.toggle_playback(),
            Target::Next => self.skip_forward(),
            Target::Shuffle => self.toggle_shuffle(),
            Target::Repeat => self.toggle_repeat(),
            Target::Track(id) => self.select(id),
        }
    }

    pub fn pointer_move(&mut self, column: u16) {
        if self.latch.progress {
            self.scrub_progress(column);
        }
        if self.latch.volume {
            self.scrub_volume(column);
        }
    }

    pub fn pointer_release(&mut self) {
        self.latch.release();
        self.scrub = None;
    }

    fn scrub_progress(&mut self, column: u16) {
        let Some(rect) = self.hitboxes.progress else {
            return;
        };
        let ratio = ratio_in(rect, column);
        self.scrub = Some(ratio);
        self.session.seek(ratio);
    }

    fn scrub_volume(&mut self, column: u16) {
        let Some(rect) = self.hitboxes.volume else {
            return;
        };
        self.session.set_volume(ratio_in(rect, column) as f32);
    }

    /// Log a failed transition and surface the ones the user should see.
    fn report(&mut self, result: Result<(), PlayerError>) {
        match result {
            Ok(()) => self.status = None,
            Err(e @ (PlayerError::TrackNotFound(_) | PlayerError::EmptyCatalog)) => {
                debug!(error = %e, "ignored");
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}
