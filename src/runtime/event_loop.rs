use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Screen};
use crate::audio::AudioBackend;
use crate::config;
use crate::ui;

/// Main terminal event loop: draws the current screen and dispatches key
/// presses to it. Returns `Ok(())` when the user quits.
pub fn run<B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick();
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply `key` to the current screen. Returns true when the app should quit.
fn handle_key_event<B: AudioBackend>(key: KeyEvent, app: &mut App<B>) -> bool {
    if key.code == KeyCode::Char('q') {
        return true;
    }

    match app.screen {
        Screen::Home => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.library.next(),
            KeyCode::Char('k') | KeyCode::Up => app.library.prev(),
            KeyCode::Enter => app.open_selected(),
            KeyCode::Char('r') => app.reload_library(),
            _ => {}
        },
        Screen::Player(_) => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle(),
            KeyCode::Char('l') | KeyCode::Right => app.next(),
            KeyCode::Char('h') | KeyCode::Left => app.previous(),
            KeyCode::Esc | KeyCode::Backspace => app.back(),
            _ => {}
        },
    }

    false
}
