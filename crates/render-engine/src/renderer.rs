//! Per-Monitor Renderer: turn one monitor's configuration into a rendered tile.

use deskwall_common::config::MonitorWallpaperConfig;
use deskwall_common::error::{WallError, WallResult};
use deskwall_layout::{Monitor, Orientation};
use image::{imageops, RgbaImage};

use crate::orientation::resolve;
use crate::style;

/// A rendered, monitor-sized tile ready to be pasted onto the canvas, or
/// `None` if the monitor produced no usable output (inactive or no source).
pub type RenderedTile = Option<RgbaImage>;

/// Render one monitor's tile per §4.R:
/// 1. Inactive monitors produce no tile.
/// 2. The Orientation Resolver picks a source file and rotation.
/// 3. The file is loaded, rotated if needed, and dispatched to the Style Engine.
pub fn render_monitor(
    index: usize,
    monitor: &Monitor,
    config: &MonitorWallpaperConfig,
) -> WallResult<RenderedTile> {
    if !monitor.info.active {
        return Ok(None);
    }

    let resolved = match resolve(
        index,
        monitor.info.orientation,
        config.auto_rotate,
        &config.source,
    ) {
        Ok(resolved) => resolved,
        Err(WallError::NoSource { .. }) => return Ok(None),
        Err(other) => return Err(other),
    };

    let mut image = image::open(&resolved.path).map_err(|e| WallError::LoadFailed {
        path: resolved.path.clone(),
        message: e.to_string(),
    })?;

    if resolved.rotation_degrees != 0 {
        image = rotate(image, resolved.rotation_degrees, index)?;
    }

    let tile = style::apply(
        config.style,
        &image,
        monitor.info.width,
        monitor.info.height,
        config.bg_color,
        index,
    )?;

    Ok(Some(tile))
}

fn rotate(image: image::DynamicImage, degrees: u32, index: usize) -> WallResult<image::DynamicImage> {
    match degrees {
        90 => Ok(image::DynamicImage::ImageRgba8(imageops::rotate90(&image))),
        180 => Ok(image::DynamicImage::ImageRgba8(imageops::rotate180(&image))),
        270 => Ok(image::DynamicImage::ImageRgba8(imageops::rotate270(&image))),
        0 => Ok(image),
        other => Err(WallError::RotateFailed {
            index,
            message: format!("unsupported rotation angle: {other}"),
        }),
    }
}

/// Validate a monitor's orientation is one of the four known values;
/// the in-memory [`Orientation`] enum is closed, so this always succeeds —
/// kept as a named seam matching §4.R step 2 for callers that parse
/// orientation from an external integer.
pub fn validate_orientation(raw: u32) -> WallResult<Orientation> {
    match raw {
        0 => Ok(Orientation::Landscape0),
        90 => Ok(Orientation::Portrait90),
        180 => Ok(Orientation::Landscape180),
        270 => Ok(Orientation::Portrait270),
        _ => Err(WallError::BadOrientation { index: 0 }),
    }
}
