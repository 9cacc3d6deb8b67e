//! Orientation Resolver: pick a source image and a rotation for a monitor's
//! current orientation.

use std::path::{Path, PathBuf};

use deskwall_common::error::{WallError, WallResult};
use deskwall_layout::Orientation;

/// The chosen source file and the clockwise rotation (in degrees) required
/// to map it into the monitor's native orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSource {
    pub path: PathBuf,
    pub rotation_degrees: u32,
}

/// Resolve a source image for `orientation` out of a 4-slot source table
/// (`[landscape_0, portrait_90, landscape_180, portrait_270]`).
///
/// Preference order: exact orientation match, then (if `auto_rotate`) the
/// orientation 180° from the monitor's own, then a fixed scan over all four
/// orientations starting at landscape_0.
pub fn resolve(
    index: usize,
    orientation: Orientation,
    auto_rotate: bool,
    source: &[Option<PathBuf>; 4],
) -> WallResult<ResolvedSource> {
    if let Some(path) = &source[orientation.index()] {
        return Ok(ResolvedSource {
            path: path.clone(),
            rotation_degrees: 0,
        });
    }

    if !auto_rotate {
        return Err(WallError::NoSource { index });
    }

    let flipped = orientation.flipped();
    if let Some(path) = &source[flipped.index()] {
        return Ok(ResolvedSource {
            path: path.clone(),
            rotation_degrees: rotation_for(orientation, flipped),
        });
    }

    for candidate in Orientation::ALL {
        if let Some(path) = &source[candidate.index()] {
            return Ok(ResolvedSource {
                path: path.clone(),
                rotation_degrees: rotation_for(orientation, candidate),
            });
        }
    }

    Err(WallError::NoSource { index })
}

/// Clockwise rotation to apply to an image shot at `chosen` orientation so
/// it displays correctly on a monitor currently at `current` orientation.
fn rotation_for(current: Orientation, chosen: Orientation) -> u32 {
    let delta = chosen.degrees() as i32 - current.degrees() as i32;
    (360 - delta).rem_euclid(360) as u32
}

/// Convenience helper for callers that only have a path, not a full table —
/// used by tests and the CLI's `check` path-existence validation.
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: [Option<&str>; 4]) -> [Option<PathBuf>; 4] {
        [
            entries[0].map(PathBuf::from),
            entries[1].map(PathBuf::from),
            entries[2].map(PathBuf::from),
            entries[3].map(PathBuf::from),
        ]
    }

    #[test]
    fn exact_match_wins_with_zero_rotation() {
        let source = table([Some("a.png"), None, None, None]);
        let resolved = resolve(0, Orientation::Landscape0, true, &source).unwrap();
        assert_eq!(resolved.path, PathBuf::from("a.png"));
        assert_eq!(resolved.rotation_degrees, 0);
    }

    #[test]
    fn auto_rotate_false_without_exact_match_fails() {
        let source = table([Some("a.png"), None, None, None]);
        let err = resolve(0, Orientation::Portrait90, false, &source).unwrap_err();
        assert!(matches!(err, WallError::NoSource { index: 0 }));
    }

    #[test]
    fn portrait_with_only_landscape_0_rotates_270() {
        // Monitor is portrait_90, only landscape_0 is provided: this is
        // neither an exact match nor the flipped (portrait_270) slot, so the
        // fixed scan finds landscape_0 first.
        let source = table([Some("a.png"), None, None, None]);
        let resolved = resolve(0, Orientation::Portrait90, true, &source).unwrap();
        assert_eq!(resolved.path, PathBuf::from("a.png"));
        assert_eq!(resolved.rotation_degrees, 270);
    }

    #[test]
    fn prefers_flipped_orientation_over_scan_order() {
        // landscape_180 is the flip of landscape_0; landscape_0 file set too.
        let source = table([Some("zero.png"), None, Some("flip.png"), None]);
        let resolved = resolve(0, Orientation::Landscape0, true, &source).unwrap();
        // Exact match (index 0) wins over the flip.
        assert_eq!(resolved.path, PathBuf::from("zero.png"));

        let source_no_exact = table([None, None, Some("flip.png"), None]);
        let resolved = resolve(0, Orientation::Landscape0, true, &source_no_exact).unwrap();
        assert_eq!(resolved.path, PathBuf::from("flip.png"));
        assert_eq!(resolved.rotation_degrees, 180);
    }

    #[test]
    fn no_source_anywhere_fails() {
        let source = table([None, None, None, None]);
        let err = resolve(2, Orientation::Landscape0, true, &source).unwrap_err();
        assert!(matches!(err, WallError::NoSource { index: 2 }));
    }
}
