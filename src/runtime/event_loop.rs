use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Hitboxes};
use crate::config;
use crate::ui;

/// Main terminal event loop: pumps the sink, keeps the view in sync, draws
/// and dispatches input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    loop {
        app.tick();
        app.sync_view();

        let mut hitboxes = Hitboxes::default();
        terminal.draw(|f| {
            hitboxes = ui::draw(f, app, &settings.ui, &settings.controls);
        })?;
        app.hitboxes = hitboxes;

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key_event(key, settings, app) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app),
            _ => {}
        }
    }
}

fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.pointer_press(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.pointer_move(mouse.column)
        }
        MouseEventKind::Up(_) => app.pointer_release(),
        MouseEventKind::ScrollDown => app.cursor_down(),
        MouseEventKind::ScrollUp => app.cursor_up(),
        _ => {}
    }
}

/// Returns true when shutdown is requested.
fn handle_key_event(key: KeyEvent, settings: &config::Settings, app: &mut App) -> bool {
    if app.search_mode {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.exit_search(),
            KeyCode::Backspace => app.pop_query_char(),
            KeyCode::Down => app.cursor_down(),
            KeyCode::Up => app.cursor_up(),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => app.cursor_down(),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => app.cursor_up(),
            KeyCode::Char(c) if !c.is_control() => app.push_query_char(c),
            _ => {}
        }
        return false;
    }

    let scrub = settings.controls.scrub_seconds.min(i64::MAX as u64) as i64;
    let step = settings.controls.volume_step;

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => app.play_focused(),
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_playback(),
        KeyCode::Char('l') => app.skip_forward(),
        KeyCode::Char('h') => app.skip_backward(),
        KeyCode::Char('L') | KeyCode::Right => app.seek_by(scrub),
        KeyCode::Char('H') | KeyCode::Left => app.seek_by(-scrub),
        KeyCode::Char('+') | KeyCode::Char('=') => app.nudge_volume(step),
        KeyCode::Char('-') => app.nudge_volume(-step),
        KeyCode::Char('f') => app.toggle_like_current(),
        KeyCode::Char('s') => app.toggle_shuffle(),
        KeyCode::Char('r') => app.toggle_repeat(),
        _ => {}
    }
    false
}
