use std::time::Duration;

use crate::audio::AudioSink;
use crate::catalog::Catalog;
use crate::session::Session;

use super::model::{Icon, LikedEntry, NowPlaying, TimeLabels, ViewState, ViewUpdate};

/// Format a duration as `m:ss`.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Bring `surface` in line with the session and catalog.
///
/// `scrub` is the pointer position while the progress bar is being dragged;
/// the fill follows it and the time labels hold still. Returns the updates
/// that were applied, which is empty when nothing changed.
pub fn sync<S: AudioSink>(
    surface: &mut ViewState,
    session: &Session<S>,
    catalog: &Catalog,
    scrub: Option<f64>,
) -> Vec<ViewUpdate> {
    let mut updates: Vec<ViewUpdate> = Vec::new();
    let current = session.current();
    let playing = session.is_playing();
    let icon_for = |is_current: bool| {
        if is_current && playing {
            Icon::Pause
        } else {
            Icon::Play
        }
    };

    for track in catalog.tracks() {
        let icon = icon_for(current == Some(track.id));
        if surface.card_icon(track.id) != icon {
            updates.push(ViewUpdate::CardIcon { id: track.id, icon });
        }
    }

    let transport = icon_for(current.is_some());
    if surface.transport() != transport {
        updates.push(ViewUpdate::TransportIcon(transport));
    }

    let track = session.current_track(catalog);
    let heart = track.is_some_and(|t| t.is_liked);
    if surface.heart() != heart {
        updates.push(ViewUpdate::Heart(heart));
    }

    let now_playing = track.map(|t| NowPlaying {
        id: t.id,
        title: t.title.clone(),
        artist: t.artist.clone(),
        category: t.category.clone(),
        img: t.img.clone(),
    });
    if surface.now_playing() != now_playing.as_ref() {
        updates.push(ViewUpdate::NowPlaying(now_playing));
    }

    match scrub {
        Some(ratio) => {
            if surface.progress() != ratio {
                updates.push(ViewUpdate::ProgressFill(ratio));
            }
        }
        None if current.is_some() => {
            // Until the sink knows the length the bar and clocks sit at zero.
            let (ratio, labels) = match (session.progress(), session.duration()) {
                (Some(ratio), Some(total)) => {
                    let elapsed = session.position();
                    let labels = TimeLabels {
                        elapsed: format_clock(elapsed),
                        total: format_clock(total),
                        remaining: format!("-{}", format_clock(total.saturating_sub(elapsed))),
                    };
                    (ratio, labels)
                }
                _ => (0.0, TimeLabels::default()),
            };
            if surface.progress() != ratio {
                updates.push(ViewUpdate::ProgressFill(ratio));
            }
            if *surface.labels() != labels {
                updates.push(ViewUpdate::TimeLabels(labels));
            }
        }
        None => {}
    }

    let volume = session.volume();
    if surface.volume() != volume {
        updates.push(ViewUpdate::VolumeFill(volume));
    }

    let liked: Vec<LikedEntry> = catalog
        .liked()
        .map(|t| LikedEntry {
            id: t.id,
            title: t.title.clone(),
            artist: t.artist.clone(),
            active: current == Some(t.id),
        })
        .collect();
    if surface.liked() != liked.as_slice() {
        updates.push(ViewUpdate::LikedList(liked));
    }

    if surface.shuffle() != session.shuffle() || surface.repeat() != session.repeat() {
        updates.push(ViewUpdate::Modes {
            shuffle: session.shuffle(),
            repeat: session.repeat(),
        });
    }

    for u in &updates {
        surface.apply(u);
    }
    updates
}
