use std::env;
use std::path::{Path, PathBuf};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::cast::{CastPlayer, PlaybackSession};
use crate::error::CastError;
use crate::library::scan;
use crate::logging;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let log_buffer = logging::init();
    let settings = settings::load_settings();

    let dir = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| ".".to_string())
    });

    let tracks = scan(Path::new(&dir), &settings.library);
    if tracks.is_empty() {
        // Configuration error: reported once, the loop is never entered.
        return Err(Box::new(CastError::NoTracks {
            dir,
            extensions: settings.library.extensions.clone(),
        }));
    }

    let session = PlaybackSession::new(PathBuf::from(&settings.cast.output_path));
    log::info!(
        "{} track(s) in {}, casting to {}",
        tracks.len(),
        dir,
        session.output_path().display()
    );
    let player = CastPlayer::new(tracks.clone(), session, settings.playback.clone());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &tracks,
        &player,
        &log_buffer,
        &dir,
    );

    // Stop is idempotent; join the cycler even when the event loop errored.
    player.stop();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
