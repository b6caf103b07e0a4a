use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::PlaybackSettings;
use crate::library::Track;

use super::session::PlaybackSession;
use super::thread::spawn_cycler_thread;
use super::types::{CastCmd, NowPlaying, PlaybackHandle};

pub struct CastPlayer {
    tx: Sender<CastCmd>,
    now_playing: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl CastPlayer {
    pub fn new(tracks: Vec<Track>, session: PlaybackSession, playback: PlaybackSettings) -> Self {
        let (tx, rx) = mpsc::channel::<CastCmd>();
        let now_playing: PlaybackHandle = Arc::new(Mutex::new(NowPlaying::default()));

        let cycler_handle = spawn_cycler_thread(tracks, rx, now_playing.clone(), session, playback);

        Self {
            tx,
            now_playing,
            join: Mutex::new(Some(cycler_handle)),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.now_playing.clone()
    }

    /// Request a stop and wait for the cycler to clear the cast document and
    /// publish its final state. Safe to call more than once.
    pub fn stop(&self) {
        let _ = self.tx.send(CastCmd::Stop);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
