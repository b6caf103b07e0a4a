use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::cast::{CastPlayer, CycleState};
use crate::config;
use crate::library::Track;
use crate::logging::{self, LogBuffer};
use crate::ui;

/// Draw/poll loop: renders the playlist from the shared `NowPlaying`
/// snapshot and forwards an interrupt to the cycler. Returns once the cycle
/// is stopped, after drawing a final frame with the stopped view so both
/// output surfaces reflect the stop.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    tracks: &[Track],
    player: &CastPlayer,
    log_buffer: &LogBuffer,
    dir: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let handle = player.playback_handle();

    loop {
        let info = match handle.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => break,
        };
        let last_log = logging::last_line(log_buffer);
        terminal.draw(|f| ui::draw(f, tracks, &info, last_log.as_deref(), dir, &settings.ui))?;

        // The cycler stopping on its own (fatal error) ends the loop too;
        // the frame above already showed the stopped view.
        if info.state == CycleState::Stopped {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_interrupt(key.code, key.modifiers) {
                    player.stop();

                    let info = match handle.lock() {
                        Ok(guard) => guard.clone(),
                        Err(_) => break,
                    };
                    let last_log = logging::last_line(log_buffer);
                    terminal
                        .draw(|f| ui::draw(f, tracks, &info, last_log.as_deref(), dir, &settings.ui))?;
                    break;
                }
            }
        }
    }

    Ok(())
}

fn is_interrupt(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
