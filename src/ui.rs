//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the library list and the now-playing screen with `ratatui`.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, PlayerView, Screen};
use crate::audio::AudioBackend;
use crate::config::UiSettings;
use crate::library::Track;
use crate::player::{PlaybackState, StartPosition};

const HOME_CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("enter", "open player"),
    ("r", "reload"),
    ("q", "quit"),
];

const PLAYER_CONTROLS: &[(&str, &str)] = &[
    ("h", "previous"),
    ("space/p", "play/pause"),
    ("l", "next"),
    ("esc", "library"),
    ("q", "quit"),
];

/// Render a controls help line.
fn controls_text(controls: &[(&str, &str)]) -> String {
    controls
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn locality_tag(track: &Track) -> &'static str {
    if track.is_local() { "local " } else { "remote" }
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
pub fn draw<B: AudioBackend>(frame: &mut Frame, app: &App<B>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadenza ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = status_text(app, ui_settings);
    let status_par = Paragraph::new(status)
        .block(bordered(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    let controls = match &app.screen {
        Screen::Home => {
            draw_library(frame, app, chunks[2]);
            HOME_CONTROLS
        }
        Screen::Player(view) => {
            draw_player(frame, app, view, chunks[2]);
            PLAYER_CONTROLS
        }
    };

    let footer = Paragraph::new(controls_text(controls))
        .block(bordered(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn status_text<B: AudioBackend>(app: &App<B>, ui: &UiSettings) -> String {
    if let Some(err) = &app.status {
        return format!("ERROR: {err}");
    }

    match app.player() {
        None => format!("LIBRARY: {} tracks", app.library.tracks.len()),
        Some(view) => {
            let session = &view.session;
            let state = match session.state() {
                PlaybackState::Idle => "Stopped",
                PlaybackState::Paused => "Paused",
                PlaybackState::Playing => "Playing",
            };
            let mut parts = vec![
                track_counter(session.index(), session.tracks().len()),
                state.to_string(),
            ];
            if view.start == StartPosition::NotFound {
                parts.push("selection not in library, started at first track".to_string());
            }
            if ui.show_elapsed {
                if let Some(elapsed) = session.elapsed() {
                    parts.push(format_mmss(elapsed));
                }
            }
            parts.join(" • ")
        }
    }
}

/// One-based position within the sequence, `0/0` when it is empty.
fn track_counter(index: usize, len: usize) -> String {
    if len == 0 {
        return "TRACK: 0/0".to_string();
    }
    format!("TRACK: {}/{}", index + 1, len)
}

fn draw_library<B: AudioBackend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let library = &app.library;
    if library.tracks.is_empty() {
        let empty = Paragraph::new("No tracks in the library.")
            .alignment(Alignment::Center)
            .block(bordered(" tracks "));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = library
        .tracks
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("[{}] ", locality_tag(t))).dim(),
                Span::raw(t.title.as_str()).bold(),
                Span::raw("  "),
                Span::raw(t.artist.as_str()).italic(),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(bordered(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(library.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_player<B: AudioBackend>(frame: &mut Frame, app: &App<B>, view: &PlayerView<B>, area: Rect) {
    let session = &view.session;
    let Some(track) = session.current() else {
        let empty = Paragraph::new("Nothing to play.")
            .alignment(Alignment::Center)
            .block(bordered(" now playing "));
        frame.render_widget(empty, area);
        return;
    };

    let toggle = if session.is_playing() { "‖ pause" } else { "▶ play" };
    let lines = vec![
        Line::from(format!("Artwork: {}", app.assets.describe(&track.image))).dim(),
        Line::from(""),
        Line::from(track.title.as_str()).bold(),
        Line::from(track.artist.as_str()).italic(),
        Line::from(format!("Source: {} ({})", track.audio, locality_tag(track).trim())).dim(),
        Line::from(""),
        Line::from(format!("⏮ prev      {toggle}      next ⏭")),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(" now playing "))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}
