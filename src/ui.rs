//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the shelves, the liked-tracks sidebar and the player
//! bar using `ratatui`, and records the hitboxes mouse handling needs.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Focus, Hitboxes};
use crate::audio::AudioSink;
use crate::catalog::{Shelf, TrackId};
use crate::config::{ControlsSettings, TimeField, TrackField, UiSettings};
use crate::view::{NowPlaying, TimeLabels};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("tab", "next list");
    map.insert("enter", "play selected");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    // H/L is filled dynamically from config.
    map.insert("+/-", "volume");
    map.insert("f", "like");
    map.insert("/", "search");
    map.insert("s", "shuffle");
    map.insert("r", "repeat");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    let order = [
        "j/k", "tab", "enter", "space/p", "h/l", "H/L", "+/-", "f", "/", "s", "r", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] seek -/+{scrub_seconds}s"))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Build the now-playing line according to `ui` settings.
fn now_playing_text(np: &NowPlaying, ui: &UiSettings) -> String {
    let parts: Vec<&str> = ui
        .now_playing_fields
        .iter()
        .map(|f| match f {
            TrackField::Title => np.title.as_str(),
            TrackField::Artist => np.artist.as_str(),
            TrackField::Category => np.category.as_str(),
            TrackField::Image => np.img.as_str(),
        })
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        np.title.clone()
    } else {
        parts.join(&ui.now_playing_separator)
    }
}

/// Labels left and right of the progress bar.
fn time_texts(labels: &TimeLabels, fields: &[TimeField]) -> (String, String) {
    let left = if fields.contains(&TimeField::Elapsed) {
        labels.elapsed.clone()
    } else {
        String::new()
    };
    let right = fields
        .iter()
        .filter_map(|f| match f {
            TimeField::Elapsed => None,
            TimeField::Total => Some(labels.total.as_str()),
            TimeField::Remaining => Some(labels.remaining.as_str()),
        })
        .collect::<Vec<&str>>()
        .join(" ");
    (left, right)
}

/// Window `[start, end)` of a list of `total` rows that keeps `selected`
/// roughly centered in `height` rows.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

/// Render a list of tracks and record one hitbox per visible row.
fn draw_track_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[(TrackId, String)],
    cursor: Option<usize>,
    placeholder: &str,
    hitboxes: &mut Hitboxes,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "));
    if cursor.is_some() {
        block = block.border_style(Style::default().add_modifier(Modifier::BOLD));
    }
    let inner = block.inner(area);

    if rows.is_empty() {
        let p = Paragraph::new(placeholder).dim().block(block);
        frame.render_widget(p, area);
        return;
    }

    let sel = cursor.unwrap_or(0).min(rows.len() - 1);
    let (start, end) = visible_window(rows.len(), inner.height as usize, sel);

    for (offset, (id, _)) in rows[start..end].iter().enumerate() {
        let row = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
        hitboxes.tracks.push((row, *id));
    }

    let items: Vec<ListItem> = rows[start..end]
        .iter()
        .map(|(_, text)| ListItem::new(text.as_str()))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if cursor.is_some() {
        state.select(Some(sel - start));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into `frame` and return the regions the mouse can hit.
pub fn draw<S: AudioSink>(
    frame: &mut Frame,
    app: &App<S>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) -> Hitboxes {
    let mut hitboxes = Hitboxes::default();

    let [header_area, body_area, player_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(5),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    // Header: title + search box
    let [title_area, search_area] =
        Layout::horizontal([Constraint::Length(32), Constraint::Min(10)]).areas(header_area);
    let title = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" spoty ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(title, title_area);

    let search_text = if app.search_mode {
        format!("{}_", app.query)
    } else if app.query.is_empty() {
        "What do you want to play?".to_string()
    } else {
        app.query.clone()
    };
    let mut search = Paragraph::new(search_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" search (/) ")
            .padding(Padding::horizontal(1)),
    );
    if !app.search_mode && app.query.is_empty() {
        search = search.dim();
    }
    frame.render_widget(search, search_area);

    // Body: sidebar + shelves
    let [sidebar_area, shelves_area] =
        Layout::horizontal([Constraint::Length(32), Constraint::Min(20)]).areas(body_area);

    let liked_rows: Vec<(TrackId, String)> = app
        .view
        .liked()
        .iter()
        .map(|e| {
            let marker = if e.active { "♪ " } else { "  " };
            (e.id, format!("{marker}{} · {}", e.title, e.artist))
        })
        .collect();
    draw_track_list(
        frame,
        sidebar_area,
        "Your Library",
        &liked_rows,
        (app.focus == Focus::Library).then_some(app.cursor),
        "Your favorites will appear here",
        &mut hitboxes,
    );

    let shelf_areas = Layout::vertical([Constraint::Ratio(1, 3); 3]).split(shelves_area);
    for (shelf, area) in Shelf::ALL.iter().zip(shelf_areas.iter()) {
        let rows: Vec<(TrackId, String)> = app
            .catalog
            .shelf(*shelf, &app.query)
            .map(|t| {
                let icon = app.view.card_icon(t.id).glyph();
                (t.id, format!("{icon} {}  {}", t.title, t.artist))
            })
            .collect();
        draw_track_list(
            frame,
            *area,
            shelf.title(),
            &rows,
            (app.focus == Focus::Shelf(*shelf)).then_some(app.cursor),
            "No matches",
            &mut hitboxes,
        );
    }

    draw_player(frame, player_area, app, ui_settings, &mut hitboxes);

    // Footer: status message wins over the control hints.
    let footer_text = match &app.status {
        Some(msg) => msg.clone(),
        None => controls_text(controls_settings.scrub_seconds),
    };
    let mut footer = Paragraph::new(footer_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    if app.status.is_some() {
        footer = footer.yellow();
    }
    frame.render_widget(footer, footer_area);

    hitboxes
}

fn draw_player<S: AudioSink>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    ui_settings: &UiSettings,
    hitboxes: &mut Hitboxes,
) {
    let block = Block::bordered().title(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [info_row, buttons_row, progress_row] = Layout::vertical([Constraint::Length(1); 3]).areas(inner);

    // Track info + heart
    let [info_area, heart_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(3)]).areas(info_row);
    let info = match app.view.now_playing() {
        Some(np) => Line::from(now_playing_text(np, ui_settings)).bold(),
        None => Line::from("Nothing playing").dim(),
    };
    frame.render_widget(Paragraph::new(info), info_area);
    let heart = if app.view.heart() {
        Span::from(" ♥ ").green()
    } else {
        Span::from(" ♡ ")
    };
    frame.render_widget(Paragraph::new(heart), heart_area);
    hitboxes.heart = Some(heart_area);

    // Transport buttons
    let [shuffle_area, prev_area, play_area, next_area, repeat_area] =
        Layout::horizontal([Constraint::Length(3); 5])
            .flex(Flex::Center)
            .spacing(2)
            .areas(buttons_row);
    let mode = |on: bool, glyph: &'static str| {
        if on {
            Span::from(glyph).green().bold()
        } else {
            Span::from(glyph).dim()
        }
    };
    frame.render_widget(Paragraph::new(mode(app.view.shuffle(), " ⇄ ")), shuffle_area);
    frame.render_widget(Paragraph::new(" ⏮ "), prev_area);
    frame.render_widget(
        Paragraph::new(format!(" {} ", app.view.transport().glyph())).bold(),
        play_area,
    );
    frame.render_widget(Paragraph::new(" ⏭ "), next_area);
    frame.render_widget(Paragraph::new(mode(app.view.repeat(), " ↻ ")), repeat_area);
    hitboxes.shuffle = Some(shuffle_area);
    hitboxes.prev = Some(prev_area);
    hitboxes.play = Some(play_area);
    hitboxes.next = Some(next_area);
    hitboxes.repeat = Some(repeat_area);

    // Progress + volume
    let (left, right) = time_texts(app.view.labels(), &ui_settings.time_fields);
    let [elapsed_area, bar_area, total_area, vol_label_area, vol_area] = Layout::horizontal([
        Constraint::Length(left.chars().count() as u16 + 1),
        Constraint::Min(10),
        Constraint::Length(right.chars().count() as u16 + 1),
        Constraint::Length(5),
        Constraint::Length(12),
    ])
    .areas(progress_row);

    frame.render_widget(Paragraph::new(left), elapsed_area);
    let progress = Gauge::default()
        .ratio(app.view.progress().clamp(0.0, 1.0))
        .label("")
        .gauge_style(Style::default().green());
    frame.render_widget(progress, bar_area);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        total_area,
    );
    frame.render_widget(Paragraph::new(" vol").dim(), vol_label_area);
    let volume = Gauge::default()
        .ratio(f64::from(app.view.volume()).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(volume, vol_area);
    hitboxes.progress = Some(bar_area);
    hitboxes.volume = Some(vol_area);
}
