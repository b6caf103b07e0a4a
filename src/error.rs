use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CastError {
    /// The scan produced no tracks, so there is nothing to cycle.
    #[error("no tracks matching {extensions:?} found in {dir}")]
    NoTracks { dir: String, extensions: Vec<String> },

    /// The cast document could not be written or replaced.
    #[error("failed to update cast document {path}: {source}")]
    SurfaceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CastError>;
