use std::collections::HashMap;

use crate::catalog::TrackId;

/// Play/pause glyph shown on cards and on the transport button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    Play,
    Pause,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Play => "▶",
            Icon::Pause => "⏸",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub category: String,
    pub img: String,
}

/// One row of the sidebar liked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikedEntry {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    /// Marks the entry of the current track.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabels {
    pub elapsed: String,
    pub total: String,
    pub remaining: String,
}

impl Default for TimeLabels {
    fn default() -> Self {
        Self {
            elapsed: "0:00".to_string(),
            total: "0:00".to_string(),
            remaining: "-0:00".to_string(),
        }
    }
}

/// A single declarative change to the rendered surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    CardIcon { id: TrackId, icon: Icon },
    TransportIcon(Icon),
    Heart(bool),
    NowPlaying(Option<NowPlaying>),
    ProgressFill(f64),
    TimeLabels(TimeLabels),
    VolumeFill(f32),
    LikedList(Vec<LikedEntry>),
    Modes { shuffle: bool, repeat: bool },
}

/// What is currently rendered. Only [`ViewState::apply`] mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    card_icons: HashMap<TrackId, Icon>,
    transport: Icon,
    heart: bool,
    now_playing: Option<NowPlaying>,
    progress: f64,
    labels: TimeLabels,
    volume: f32,
    liked: Vec<LikedEntry>,
    shuffle: bool,
    repeat: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            card_icons: HashMap::new(),
            transport: Icon::Play,
            heart: false,
            now_playing: None,
            progress: 0.0,
            labels: TimeLabels::default(),
            volume: 1.0,
            liked: Vec::new(),
            shuffle: false,
            repeat: false,
        }
    }
}

impl ViewState {
    pub fn card_icon(&self, id: TrackId) -> Icon {
        self.card_icons.get(&id).copied().unwrap_or_default()
    }

    pub fn transport(&self) -> Icon {
        self.transport
    }

    pub fn heart(&self) -> bool {
        self.heart
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn labels(&self) -> &TimeLabels {
        &self.labels
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn liked(&self) -> &[LikedEntry] {
        &self.liked
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn apply(&mut self, update: &ViewUpdate) {
        match update {
            ViewUpdate::CardIcon { id, icon } => {
                self.card_icons.insert(*id, *icon);
            }
            ViewUpdate::TransportIcon(icon) => self.transport = *icon,
            ViewUpdate::Heart(liked) => self.heart = *liked,
            ViewUpdate::NowPlaying(np) => self.now_playing = np.clone(),
            ViewUpdate::ProgressFill(ratio) => self.progress = *ratio,
            ViewUpdate::TimeLabels(labels) => self.labels = labels.clone(),
            ViewUpdate::VolumeFill(level) => self.volume = *level,
            ViewUpdate::LikedList(entries) => self.liked = entries.clone(),
            ViewUpdate::Modes { shuffle, repeat } => {
                self.shuffle = *shuffle;
                self.repeat = *repeat;
            }
        }
    }
}
