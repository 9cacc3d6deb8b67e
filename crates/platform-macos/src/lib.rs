//! macOS platform scaffolding.
//!
//! This crate provides compile-safe placeholders for CoreGraphics display
//! enumeration and `NSWorkspace` wallpaper integration planned for later
//! milestones.

use deskwall_common::error::{WallError, WallResult};
use deskwall_layout::MonitorInfo;

/// Detect monitors on macOS.
///
/// TODO(platform/macos): replace with CoreGraphics `CGGetActiveDisplayList`
/// enumeration.
pub fn detect_monitors() -> WallResult<Vec<MonitorInfo>> {
    Err(WallError::platform("macOS monitor detection is not implemented yet"))
}

/// Set the desktop wallpaper on macOS.
///
/// TODO(platform/macos): replace with `NSWorkspace.setDesktopImageURL`.
pub fn install_wallpaper(_canvas_path: &std::path::Path) -> WallResult<()> {
    Err(WallError::unsupported("macOS wallpaper install is not implemented yet"))
}
