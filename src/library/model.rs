use std::path::PathBuf;
use std::time::Duration;

/// One discovered audio file. Built once by the startup scan and immutable
/// afterwards; a zero duration marks a track the cycler will skip.
#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    pub display: String,
    pub duration: Duration,
}

impl Track {
    pub fn is_playable(&self) -> bool {
        !self.duration.is_zero()
    }
}
