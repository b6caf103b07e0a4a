use std::path::Path;

use log::warn;

/// Playback time of a WAV file in seconds, read from the header fields:
/// frame count divided by sample rate.
///
/// Returns `0.0` when the file is missing or its header cannot be parsed,
/// so callers skip the track instead of stalling on it.
pub fn wav_duration_secs(path: &Path) -> f64 {
    let reader = match hound::WavReader::open(path) {
        Ok(r) => r,
        Err(e) => {
            warn!("could not read duration of {}: {}", path.display(), e);
            return 0.0;
        }
    };

    let spec = reader.spec();
    if spec.sample_rate == 0 {
        warn!("{}: header reports a zero sample rate", path.display());
        return 0.0;
    }

    reader.duration() as f64 / spec.sample_rate as f64
}
