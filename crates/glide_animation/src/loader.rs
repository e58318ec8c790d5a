//! Loading curve definitions from plain text.
//!
//! One segment per line, eight whitespace-separated decimal numbers:
//!
//! ```text
//! start.x start.y ctrl0.x ctrl0.y ctrl1.x ctrl1.y end.x end.y
//! ```
//!
//! Control fields are offsets relative to their anchor. Blank lines and
//! lines starting with `#` are skipped.

use std::path::{Path, PathBuf};

use glide_core::Vec2;
use thiserror::Error;
use tracing::{debug, warn};

use crate::curve::CubicBezier;

/// Failures while reading or parsing a curve file.
#[derive(Debug, Error)]
pub enum CurveFileError {
    /// The file does not exist. Callers wanting degrade-and-continue
    /// behavior can match on this variant instead of failing.
    #[error("curve file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read curve file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not hold eight parsable numbers.
    #[error("curve file syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    /// A segment's control handles leave its time span.
    #[error("curve file segment at line {line} is not monotonic in time")]
    NonMonotonic { line: usize },

    /// No segments left after skipping blanks and comments.
    #[error("curve file defines no segments")]
    Empty,
}

/// Parses curve-file text into ordered segments.
///
/// Line numbers in errors are 1-based. Rejects input that defines no
/// segments at all, so the result is always non-empty.
pub fn parse_curves(src: &str) -> Result<Vec<CubicBezier>, CurveFileError> {
    let mut curves = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 8 {
            return Err(CurveFileError::Syntax {
                line: line_no,
                msg: format!("expected 8 values per segment, found {}", fields.len()),
            });
        }
        let mut nums = [0.0f32; 8];
        for (slot, tok) in nums.iter_mut().zip(&fields) {
            *slot = tok.parse().map_err(|_| CurveFileError::Syntax {
                line: line_no,
                msg: format!("invalid number `{tok}`"),
            })?;
        }

        let curve = CubicBezier::new(
            Vec2::new(nums[0], nums[1]),
            Vec2::new(nums[2], nums[3]),
            Vec2::new(nums[4], nums[5]),
            Vec2::new(nums[6], nums[7]),
        );
        if !curve.is_time_monotonic() {
            return Err(CurveFileError::NonMonotonic { line: line_no });
        }
        curves.push(curve);
    }

    if curves.is_empty() {
        return Err(CurveFileError::Empty);
    }
    Ok(curves)
}

/// Reads and parses a curve file from disk.
pub fn load_curves(path: impl AsRef<Path>) -> Result<Vec<CubicBezier>, CurveFileError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), "curve file not found");
            CurveFileError::NotFound(path.to_path_buf())
        } else {
            CurveFileError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let curves = parse_curves(&src)?;
    debug!(path = %path.display(), segments = curves.len(), "loaded curve file");
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_segments_and_skip_noise() {
        let src = r#"
# fade in over 100ms, then hold a slow rise to 250ms
0 0 30 0 -30 0 100 1

100 1 50 0 -50 0 250 3
"#;
        let curves = parse_curves(src).unwrap();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].start(), Vec2::new(0.0, 0.0));
        assert_eq!(curves[0].start_ctrl(), Vec2::new(30.0, 0.0));
        assert_eq!(curves[0].end_ctrl(), Vec2::new(-30.0, 0.0));
        assert_eq!(curves[0].end(), Vec2::new(100.0, 1.0));
        assert_eq!(curves[1].end(), Vec2::new(250.0, 3.0));
    }

    #[test]
    fn wrong_field_count_reports_the_line() {
        let src = "0 0 30 0 -30 0 100 1\n# next one is short\n0 0 30 0 100 1\n";
        let err = parse_curves(src).unwrap_err();
        assert!(matches!(err, CurveFileError::Syntax { line: 3, .. }), "{err}");
    }

    #[test]
    fn bad_number_reports_the_line() {
        let src = "0 0 thirty 0 -30 0 100 1\n";
        let err = parse_curves(src).unwrap_err();
        assert!(matches!(err, CurveFileError::Syntax { line: 1, .. }), "{err}");
    }

    #[test]
    fn blank_or_comment_only_input_is_empty() {
        for src in ["", "\n\n", "# nothing here\n\n# still nothing\n"] {
            let err = parse_curves(src).unwrap_err();
            assert!(matches!(err, CurveFileError::Empty), "{src:?} -> {err}");
        }
    }

    #[test]
    fn non_monotonic_segment_is_rejected() {
        // Start handle at x = 400 overshoots the 300ms span.
        let src = "0 0 400 0 -100 0 300 1\n";
        let err = parse_curves(src).unwrap_err();
        assert!(matches!(err, CurveFileError::NonMonotonic { line: 1 }), "{err}");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_curves("/definitely/not/here/pulse.curves").unwrap_err();
        assert!(matches!(err, CurveFileError::NotFound(_)), "{err}");
    }

    #[test]
    fn load_curves_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("glide_loader_{}.curves", std::process::id()));
        std::fs::write(&path, "0 0 0 0 0 0 120 1\n").unwrap();
        let curves = load_curves(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].duration(), 120.0);
    }
}
