//! Build the virtual-desktop bounding rectangle and rebase monitors into it.

use crate::{union_rect, Monitor, MonitorInfo, Point, Rectangle};

/// Layout-stage failure: the monitor set produced no usable desktop area.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no active monitors in the current layout")]
    EmptyLayout,
}

/// Fold [`union_rect`] over every active monitor, starting from an empty rectangle.
pub fn compute_virtual_desktop(monitors: &[MonitorInfo]) -> Rectangle {
    monitors
        .iter()
        .filter(|m| m.active)
        .fold(Rectangle::EMPTY, |acc, m| {
            union_rect(acc, Rectangle::from_monitor(m))
        })
}

/// Rebase every active monitor's origin into non-negative canvas coordinates.
///
/// Fails with [`LayoutError::EmptyLayout`] if the desktop rectangle is empty
/// (no active monitors). On success, every active monitor's `virt_pos` is
/// non-negative and the returned rectangle has `x = y = 0`.
pub fn rebase(monitors: &[MonitorInfo], desktop: Rectangle) -> Result<(Rectangle, Vec<Monitor>), LayoutError> {
    if desktop.width == 0 || desktop.height == 0 {
        return Err(LayoutError::EmptyLayout);
    }

    let placed = monitors
        .iter()
        .filter(|m| m.active)
        .map(|m| Monitor {
            info: m.clone(),
            virt_pos: Point {
                x: m.x - desktop.x,
                y: m.y - desktop.y,
            },
        })
        .collect();

    let rebased = Rectangle {
        x: 0,
        y: 0,
        width: desktop.width,
        height: desktop.height,
    };

    Ok((rebased, placed))
}
