//! Track discovery: scanning a directory into an ordered track list and
//! deriving playback durations from WAV headers.

mod duration;
mod model;
mod scan;

pub use duration::wav_duration_secs;
pub use model::Track;
pub use scan::scan;
