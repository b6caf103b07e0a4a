//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the playlist region using
//! `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::cast::{CycleState, NowPlaying};
use crate::config::UiSettings;
use crate::library::Track;

/// Build the playlist lines: the current track is prefixed with the marker
/// glyph and rendered bold in the accent color, all others render plainly
/// with matching indentation. Pure function of its inputs.
pub fn playlist_lines(
    tracks: &[Track],
    current: Option<usize>,
    ui: &UiSettings,
) -> Vec<Line<'static>> {
    let accent = accent_color(&ui.accent_color);
    let highlight = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let pad = " ".repeat(ui.marker.chars().count());

    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            if current == Some(i) {
                Line::from(vec![
                    Span::styled(ui.marker.clone(), highlight),
                    Span::styled(track.display.clone(), highlight),
                ])
            } else {
                Line::from(vec![
                    Span::raw(pad.clone()),
                    Span::raw(track.display.clone()),
                ])
            }
        })
        .collect()
}

fn accent_color(name: &str) -> Color {
    name.parse().unwrap_or(Color::Blue)
}

fn state_text(state: CycleState) -> &'static str {
    match state {
        CycleState::Loading => "Loading",
        CycleState::Playing => "On air",
        CycleState::Stopped => "Stopped",
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    tracks: &[Track],
    info: &NowPlaying,
    last_log: Option<&str>,
    dir: &str,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" wavecast ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        parts.push(state_text(info.state).to_string());
        if let Some(i) = info.index {
            if let Some(track) = tracks.get(i) {
                parts.push(format!("Track: {}", track.display));
            }
        }
        parts.push(format!("Tracks: {}", tracks.len()));
        parts.push(format!("Cycles: {}", info.cycles));
        parts.push(format!("Dir: {}", dir));
        if let Some(line) = last_log {
            parts.push(line.to_string());
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Playlist region; after a stop it carries the stopped (or error) text
    // instead of the list.
    if info.state == CycleState::Stopped {
        let text = match &info.error {
            Some(e) => format!("error: {}", e),
            None => ui_settings.stopped_text.clone(),
        };
        let stopped = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .wrap(Wrap { trim: true });
        frame.render_widget(stopped, chunks[2]);
    } else {
        let items: Vec<ListItem> = playlist_lines(tracks, info.index, ui_settings)
            .into_iter()
            .map(ListItem::new)
            .collect();
        let list =
            List::new(items).block(Block::default().borders(Borders::ALL).title(" tracks "));
        frame.render_widget(list, chunks[2]);
    }

    let footer = Paragraph::new("[q/esc/ctrl-c] stop").block(
        Block::default()
            .borders(Borders::ALL)
            .title(" controls ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(footer, chunks[3]);
}
