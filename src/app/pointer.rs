//! Mouse hit testing and the progress/volume drag latch.

use ratatui::layout::{Position, Rect};

use crate::catalog::TrackId;

/// Set while a bar is being dragged; cleared on any button release.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DragLatch {
    pub progress: bool,
    pub volume: bool,
}

impl DragLatch {
    pub fn release(&mut self) {
        self.progress = false;
        self.volume = false;
    }
}

/// Screen regions recorded during the last draw.
///
/// Track rows carry their id directly, so a click never has to recover an
/// id from rendered text.
#[derive(Debug, Default, Clone)]
pub struct Hitboxes {
    pub progress: Option<Rect>,
    pub volume: Option<Rect>,
    pub heart: Option<Rect>,
    pub prev: Option<Rect>,
    pub play: Option<Rect>,
    pub next: Option<Rect>,
    pub shuffle: Option<Rect>,
    pub repeat: Option<Rect>,
    pub tracks: Vec<(Rect, TrackId)>,
}

/// Controls that can be hit with the mouse.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Target {
    Progress(Rect),
    Volume(Rect),
    Heart,
    Prev,
    Play,
    Next,
    Shuffle,
    Repeat,
    Track(TrackId),
}

fn hit(rect: Option<Rect>, pos: Position) -> Option<Rect> {
    rect.filter(|r| r.contains(pos))
}

impl Hitboxes {
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let pos = Position::new(column, row);
        if let Some(r) = hit(self.progress, pos) {
            return Some(Target::Progress(r));
        }
        if let Some(r) = hit(self.volume, pos) {
            return Some(Target::Volume(r));
        }
        let buttons = [
            (self.heart, Target::Heart),
            (self.prev, Target::Prev),
            (self.play, Target::Play),
            (self.next, Target::Next),
            (self.shuffle, Target::Shuffle),
            (self.repeat, Target::Repeat),
        ];
        if let Some((_, target)) = buttons.iter().find(|(r, _)| hit(*r, pos).is_some()) {
            return Some(*target);
        }
        self.tracks
            .iter()
            .find(|(r, _)| r.contains(pos))
            .map(|&(_, id)| Target::Track(id))
    }
}

/// Horizontal position of `column` inside `rect`, clamped to [0, 1].
///
/// The first cell maps to 0 and the last to 1.
pub fn ratio_in(rect: Rect, column: u16) -> f64 {
    if rect.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(rect.x) as f64;
    (offset / (rect.width - 1) as f64).clamp(0.0, 1.0)
}
