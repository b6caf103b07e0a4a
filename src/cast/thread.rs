use std::fs;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use log::{info, warn};

use crate::config::PlaybackSettings;
use crate::error::Result;
use crate::library::Track;

use super::embed::AudioEmbed;
use super::session::PlaybackSession;
use super::types::{CastCmd, CycleState, NowPlaying, PlaybackHandle, next_index};

pub(super) fn spawn_cycler_thread(
    tracks: Vec<Track>,
    rx: Receiver<CastCmd>,
    now_playing: PlaybackHandle,
    mut session: PlaybackSession,
    playback: PlaybackSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let outcome = run_cycle(&tracks, &rx, &now_playing, &mut session, &playback);

        // Teardown runs on every exit path: the stopped state must leave no
        // payload behind.
        if let Err(e) = session.clear() {
            warn!("could not clear cast document on stop: {}", e);
        }
        if let Ok(mut info) = now_playing.lock() {
            info.index = None;
            info.state = CycleState::Stopped;
            if let Err(e) = outcome {
                info.error = Some(e.to_string());
            }
        }
    })
}

/// The cycle state machine. Returns `Ok(())` on a requested stop and `Err`
/// on an unrecoverable failure; either way the caller publishes `Stopped`.
fn run_cycle(
    tracks: &[Track],
    rx: &Receiver<CastCmd>,
    now_playing: &PlaybackHandle,
    session: &mut PlaybackSession,
    playback: &PlaybackSettings,
) -> Result<()> {
    if tracks.is_empty() {
        return Ok(());
    }

    let backoff = Duration::from_millis(playback.error_backoff_ms);
    let mut current = 0usize;
    let mut skipped_in_row = 0usize;

    info!("starting the cycle with {} track(s)", tracks.len());

    loop {
        // Loading: the previous index stays published until the next track
        // is actually embedded.
        if let Ok(mut info) = now_playing.lock() {
            info.state = CycleState::Loading;
        }

        let track = &tracks[current];

        if !track.is_playable() {
            // Zero-duration skips advance without waiting; only an entirely
            // skipped pass inserts a backoff.
            warn!("skipping {}: unknown or zero duration", track.display);
            skipped_in_row += 1;
            if skip_pause(tracks, &mut skipped_in_row) && wait_or_stop(rx, backoff) {
                return Ok(());
            }
            advance(&mut current, tracks.len(), now_playing);
            continue;
        }

        let bytes = match fs::read(&track.path) {
            Ok(b) => b,
            Err(e) => {
                warn!("could not read {}: {}", track.display, e);
                skipped_in_row += 1;
                if wait_or_stop(rx, backoff) {
                    return Ok(());
                }
                advance(&mut current, tracks.len(), now_playing);
                continue;
            }
        };

        // Playing: replace the payload first, then publish the index, so the
        // marked row and the embedded payload always agree.
        session.replace(&AudioEmbed::new(&bytes))?;
        if let Ok(mut info) = now_playing.lock() {
            info.index = Some(current);
            info.state = CycleState::Playing;
        }
        info!(
            "on air: {} ({:.1}s)",
            track.display,
            track.duration.as_secs_f64()
        );
        skipped_in_row = 0;

        if wait_or_stop(rx, track.duration) {
            return Ok(());
        }

        advance(&mut current, tracks.len(), now_playing);
    }
}

/// Wait up to `timeout` for a stop request. Returns true when the cycle
/// should end; a timeout means the wait simply elapsed.
fn wait_or_stop(rx: &Receiver<CastCmd>, timeout: Duration) -> bool {
    match rx.recv_timeout(timeout) {
        Ok(CastCmd::Stop) | Err(RecvTimeoutError::Disconnected) => true,
        Err(RecvTimeoutError::Timeout) => false,
    }
}

fn advance(current: &mut usize, len: usize, now_playing: &PlaybackHandle) {
    let next = next_index(*current, len);
    if next <= *current {
        if let Ok(mut info) = now_playing.lock() {
            info.cycles += 1;
        }
        info!("reached the end of the list, wrapping around");
    }
    *current = next;
}

/// A whole pass without a single playable track must not busy-spin; once the
/// skip counter covers the list, the caller inserts one backoff wait.
fn skip_pause(tracks: &[Track], skipped_in_row: &mut usize) -> bool {
    if *skipped_in_row >= tracks.len() {
        warn!("no playable tracks in the current pass, backing off");
        *skipped_in_row = 0;
        true
    } else {
        false
    }
}
