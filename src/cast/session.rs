use std::fs;
use std::path::PathBuf;

use crate::error::{CastError, Result};

use super::embed::AudioEmbed;

/// Owns the cast document: the single file holding the currently embedded
/// payload. Holds at most one embed at a time; `replace` swaps the whole
/// document so a watcher never sees two payloads, `clear` empties it.
pub struct PlaybackSession {
    output_path: PathBuf,
}

impl PlaybackSession {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// Replace the current payload with `embed`. The previous payload is
    /// discarded.
    pub fn replace(&mut self, embed: &AudioEmbed) -> Result<()> {
        self.write_document(embed.html())
    }

    /// Drop the current payload, leaving an empty document behind.
    pub fn clear(&mut self) -> Result<()> {
        self.write_document("")
    }

    // Write-then-rename so the hosting page never reads a half-written
    // payload.
    fn write_document(&self, contents: &str) -> Result<()> {
        let tmp = self.output_path.with_extension("tmp");
        let write = fs::write(&tmp, contents).and_then(|_| fs::rename(&tmp, &self.output_path));
        write.map_err(|source| CastError::SurfaceWrite {
            path: self.output_path.clone(),
            source,
        })
    }
}
