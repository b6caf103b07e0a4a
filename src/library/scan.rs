use std::path::Path;
use std::time::Duration;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::duration::wav_duration_secs;
use super::model::Track;

fn matches_extension(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Scan `dir` into an ordered track list. Durations are derived from each
/// file's WAV header here, once; tracks whose header cannot be read get a
/// zero duration and are later skipped by the cycler.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && matches_extension(path, settings)
        {
            let display = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("UNKNOWN")
                .to_string();

            let duration = Duration::from_secs_f64(wav_duration_secs(path));

            tracks.push(Track {
                path: path.to_path_buf(),
                display,
                duration,
            });
        }
    }

    tracks.sort_by(|a, b| a.display.cmp(&b.display));
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_wav(path: &Path, sample_rate: u32, frames: u32) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..frames {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn matches_extension_is_case_insensitive_and_configurable() {
        let settings = LibrarySettings::default();
        assert!(matches_extension(Path::new("/tmp/a.wav"), &settings));
        assert!(matches_extension(Path::new("/tmp/a.WAV"), &settings));
        assert!(!matches_extension(Path::new("/tmp/a.mp3"), &settings));
        assert!(!matches_extension(Path::new("/tmp/a"), &settings));

        let settings = LibrarySettings {
            extensions: vec![".wave".into()],
            ..LibrarySettings::default()
        };
        assert!(matches_extension(Path::new("/tmp/a.wave"), &settings));
        assert!(!matches_extension(Path::new("/tmp/a.wav"), &settings));
    }

    #[test]
    fn scan_filters_non_matching_and_sorts_by_name() {
        let dir = tempdir().unwrap();

        write_wav(&dir.path().join("b.wav"), 8000, 800);
        write_wav(&dir.path().join("a.wav"), 8000, 1600);
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].display, "a.wav");
        assert_eq!(tracks[1].display, "b.wav");
    }

    #[test]
    fn scan_derives_durations_and_marks_corrupt_files_unplayable() {
        let dir = tempdir().unwrap();

        write_wav(&dir.path().join("good.wav"), 8000, 4000);
        fs::write(dir.path().join("bad.wav"), b"not a RIFF container").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 2);

        let bad = &tracks[0];
        let good = &tracks[1];
        assert_eq!(bad.display, "bad.wav");
        assert!(!bad.is_playable());
        assert_eq!(good.display, "good.wav");
        assert!(good.is_playable());
        assert!((good.duration.as_secs_f64() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        write_wav(&dir.path().join(".hidden.wav"), 8000, 80);
        write_wav(&dir.path().join("visible.wav"), 8000, 80);

        let tracks = scan(dir.path(), &LibrarySettings::default());

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "visible.wav");
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        write_wav(&dir.path().join("root.wav"), 8000, 80);
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        write_wav(&sub.join("child.wav"), 8000, 80);

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "root.wav");
    }

    #[test]
    fn scan_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        write_wav(&dir.path().join("root.wav"), 8000, 80);
        write_wav(&d1.join("one.wav"), 8000, 80);
        write_wav(&d2.join("two.wav"), 8000, 80);

        // WalkDir depth counts root as 0, children as 1, grandchildren as 2...
        // With max_depth=2 we should see root + d1/*, but not d1/d2/*.
        let settings = LibrarySettings {
            recursive: true,
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);

        let names: Vec<String> = tracks.iter().map(|t| t.display.clone()).collect();
        assert!(names.contains(&"root.wav".to_string()));
        assert!(names.contains(&"one.wav".to_string()));
        assert!(!names.contains(&"two.wav".to_string()));
    }

    #[test]
    fn scan_of_empty_dir_is_empty() {
        let dir = tempdir().unwrap();
        assert!(scan(dir.path(), &LibrarySettings::default()).is_empty());
    }
}
