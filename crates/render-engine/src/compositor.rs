//! Canvas Compositor: allocate the virtual-desktop canvas and paste each
//! monitor's rendered tile at its rebased position.

use std::path::Path;

use deskwall_common::error::{WallError, WallResult};
use deskwall_layout::{Monitor, Rectangle};
use image::{imageops, Rgba, RgbaImage};

use crate::renderer::RenderedTile;

/// Allocate a `#000000` canvas sized to `desktop` and paste `tiles[i]` (if
/// present) at `monitors[i].virt_pos`, in ascending monitor index order so
/// composition is deterministic. Later indices overwrite earlier ones on
/// overlap, though overlap is not expected in a correctly rebased layout.
pub fn composite(desktop: Rectangle, monitors: &[Monitor], tiles: &[RenderedTile]) -> RgbaImage {
    let mut canvas =
        RgbaImage::from_pixel(desktop.width.max(1), desktop.height.max(1), Rgba([0, 0, 0, 255]));

    for (monitor, tile) in monitors.iter().zip(tiles.iter()) {
        if let Some(tile) = tile {
            imageops::overlay(
                &mut canvas,
                tile,
                monitor.virt_pos.x as i64,
                monitor.virt_pos.y as i64,
            );
        }
    }

    canvas
}

/// Write the canvas to `path` via a temp-file-then-rename so the platform
/// never observes a partially written file.
pub fn write_canvas(canvas: &RgbaImage, path: &Path) -> WallResult<()> {
    let tmp_path = path.with_extension(format!(
        "{}.tmp",
        path.extension().and_then(|e| e.to_str()).unwrap_or("out")
    ));

    canvas.save(&tmp_path).map_err(|e| WallError::WriteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    std::fs::rename(&tmp_path, path).map_err(|e| WallError::WriteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskwall_layout::{MonitorInfo, Orientation, Point};

    fn placed(name: &str, x: i32, y: i32, w: u32, h: u32) -> Monitor {
        Monitor {
            info: MonitorInfo {
                name: name.to_string(),
                x,
                y,
                width: w,
                height: h,
                orientation: Orientation::Landscape0,
                active: true,
                is_primary: x == 0 && y == 0,
            },
            virt_pos: Point { x, y },
        }
    }

    #[test]
    fn canvas_size_matches_desktop_rectangle() {
        let desktop = Rectangle {
            x: 0,
            y: 0,
            width: 4480,
            height: 1440,
        };
        let canvas = composite(desktop, &[], &[]);
        assert_eq!(canvas.width(), 4480);
        assert_eq!(canvas.height(), 1440);
    }

    #[test]
    fn missing_tile_leaves_background_color_showing() {
        let desktop = Rectangle {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
        };
        let monitors = vec![placed("a", 0, 0, 100, 100)];
        let canvas = composite(desktop, &monitors, &[None]);
        assert_eq!(canvas.get_pixel(10, 10), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn tile_is_pasted_at_its_virt_pos() {
        let desktop = Rectangle {
            x: 0,
            y: 0,
            width: 200,
            height: 100,
        };
        let monitors = vec![placed("a", 0, 0, 100, 100), placed("b", 100, 0, 100, 100)];
        let tile_a = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
        let tile_b = RgbaImage::from_pixel(100, 100, Rgba([0, 255, 0, 255]));
        let canvas = composite(desktop, &monitors, &[Some(tile_a), Some(tile_b)]);
        assert_eq!(canvas.get_pixel(10, 10), &Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(150, 10), &Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn write_canvas_round_trips_through_temp_rename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallpaper_generated.png");
        let canvas = RgbaImage::from_pixel(10, 10, Rgba([1, 2, 3, 255]));
        write_canvas(&canvas, &path).unwrap();
        assert!(path.exists());
        let tmp = path.with_extension("png.tmp");
        assert!(!tmp.exists());
    }
}
