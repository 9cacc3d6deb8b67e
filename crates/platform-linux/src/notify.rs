//! Poll-and-diff display-change detection.
//!
//! Linux has no single cross-desktop-environment event for "monitor layout
//! changed", so this polls [`DisplaySource::enumerate`] on an interval and
//! diffs against the previous snapshot.

use std::time::Duration;

use deskwall_common::error::WallResult;
use deskwall_layout::MonitorInfo;

use crate::display::DisplaySource;

/// Default interval between polls of the display source.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

fn layout_changed(previous: &[MonitorInfo], current: &[MonitorInfo]) -> bool {
    if previous.len() != current.len() {
        return true;
    }
    previous.iter().zip(current.iter()).any(|(a, b)| {
        a.name != b.name
            || a.x != b.x
            || a.y != b.y
            || a.width != b.width
            || a.height != b.height
            || a.orientation != b.orientation
            || a.active != b.active
            || a.is_primary != b.is_primary
    })
}

/// Block, polling `source` every `interval`, calling `on_change` with the new
/// monitor list whenever it differs from the last observed one. Runs until
/// `on_change` returns `Err`, propagating it to the caller.
pub fn watch<F>(
    source: &dyn DisplaySource,
    interval: Duration,
    mut on_change: F,
) -> WallResult<()>
where
    F: FnMut(&[MonitorInfo]) -> WallResult<()>,
{
    let mut previous = source.enumerate()?;
    on_change(&previous)?;

    loop {
        std::thread::sleep(interval);
        let current = source.enumerate()?;
        if layout_changed(&previous, &current) {
            tracing::info!("monitor layout changed, re-running update");
            on_change(&current)?;
            previous = current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskwall_layout::Orientation;

    fn monitor(name: &str, x: i32, y: i32, w: u32, h: u32) -> MonitorInfo {
        MonitorInfo {
            name: name.to_string(),
            x,
            y,
            width: w,
            height: h,
            orientation: Orientation::Landscape0,
            active: true,
            is_primary: x == 0 && y == 0,
        }
    }

    #[test]
    fn identical_snapshots_report_no_change() {
        let a = vec![monitor("m", 0, 0, 100, 100)];
        let b = vec![monitor("m", 0, 0, 100, 100)];
        assert!(!layout_changed(&a, &b));
    }

    #[test]
    fn position_change_is_detected() {
        let a = vec![monitor("m", 0, 0, 100, 100)];
        let b = vec![monitor("m", 100, 0, 100, 100)];
        assert!(layout_changed(&a, &b));
    }

    #[test]
    fn monitor_count_change_is_detected() {
        let a = vec![monitor("m", 0, 0, 100, 100)];
        let b = vec![monitor("m", 0, 0, 100, 100), monitor("n", 100, 0, 100, 100)];
        assert!(layout_changed(&a, &b));
    }

    #[test]
    fn orientation_change_is_detected() {
        let a = vec![monitor("m", 0, 0, 100, 100)];
        let mut b = a.clone();
        b[0].orientation = Orientation::Portrait90;
        assert!(layout_changed(&a, &b));
    }
}
