//! Style Engine: map a decoded source image onto a monitor-sized canvas
//! under one of the five supported fit styles.

use deskwall_common::config::StyleKind;
use deskwall_common::error::{WallError, WallResult};
use image::{imageops, DynamicImage, Rgba, RgbaImage};

/// Apply `style` to `source`, producing an image of exactly `(target_w, target_h)`.
pub fn apply(
    style: StyleKind,
    source: &DynamicImage,
    target_w: u32,
    target_h: u32,
    bg_color: [u8; 3],
    index: usize,
) -> WallResult<RgbaImage> {
    let result = match style {
        StyleKind::FitNoCut => fit_no_cut(source, target_w, target_h, bg_color),
        StyleKind::FitEdgeCut => fit_edge_cut(source, target_w, target_h),
        StyleKind::Stretch => stretch(source, target_w, target_h),
        StyleKind::Tile => tile(source, target_w, target_h, bg_color),
        StyleKind::Center => center(source, target_w, target_h, bg_color),
    };
    result.ok_or_else(|| WallError::StyleFailed {
        style: format!("{style:?}"),
        index,
        message: "produced a zero-sized canvas".to_string(),
    })
}

fn background(width: u32, height: u32, color: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(
        width.max(1),
        height.max(1),
        Rgba([color[0], color[1], color[2], 255]),
    )
}

/// Scale preserving aspect ratio so the image fits entirely inside target,
/// padding the shorter axis with `bg_color`, centered (top-left biased).
fn fit_no_cut(source: &DynamicImage, tw: u32, th: u32, bg_color: [u8; 3]) -> Option<RgbaImage> {
    if tw == 0 || th == 0 {
        return None;
    }
    let scaled = source.resize(tw, th, imageops::FilterType::Lanczos3);
    let mut canvas = background(tw, th, bg_color);
    let (sw, sh) = (scaled.width(), scaled.height());
    let off_x = (tw - sw) / 2;
    let off_y = (th - sh) / 2;
    imageops::overlay(&mut canvas, &scaled.to_rgba8(), off_x as i64, off_y as i64);
    Some(canvas)
}

/// Scale preserving aspect ratio so the image fully covers target, cropping
/// the overflowing axis centered.
fn fit_edge_cut(source: &DynamicImage, tw: u32, th: u32) -> Option<RgbaImage> {
    if tw == 0 || th == 0 {
        return None;
    }
    let scaled = source.resize_to_fill(tw, th, imageops::FilterType::Lanczos3);
    Some(scaled.to_rgba8())
}

/// Rescale to exactly `(tw, th)`, ignoring aspect ratio.
fn stretch(source: &DynamicImage, tw: u32, th: u32) -> Option<RgbaImage> {
    if tw == 0 || th == 0 {
        return None;
    }
    Some(
        source
            .resize_exact(tw, th, imageops::FilterType::Lanczos3)
            .to_rgba8(),
    )
}

/// Tile the un-resized source across the target; if the source already
/// covers the target on both axes, crop from (0, 0) instead.
fn tile(source: &DynamicImage, tw: u32, th: u32, bg_color: [u8; 3]) -> Option<RgbaImage> {
    if tw == 0 || th == 0 {
        return None;
    }
    let rgba = source.to_rgba8();
    let (sw, sh) = (rgba.width(), rgba.height());
    if sw == 0 || sh == 0 {
        return None;
    }

    if sw >= tw && sh >= th {
        return Some(imageops::crop_imm(&rgba, 0, 0, tw, th).to_image());
    }

    let mut canvas = background(tw, th, bg_color);
    let mut y = 0i64;
    while (y as u32) < th {
        let mut x = 0i64;
        while (x as u32) < tw {
            imageops::overlay(&mut canvas, &rgba, x, y);
            x += sw as i64;
        }
        y += sh as i64;
    }
    Some(canvas)
}

/// Center the source on the target; if the source is larger than the target
/// on both axes, center-crop instead of padding.
fn center(source: &DynamicImage, tw: u32, th: u32, bg_color: [u8; 3]) -> Option<RgbaImage> {
    if tw == 0 || th == 0 {
        return None;
    }
    let rgba = source.to_rgba8();
    let (sw, sh) = (rgba.width(), rgba.height());
    if sw == 0 || sh == 0 {
        return None;
    }

    if sw > tw && sh > th {
        let off_x = (sw - tw) / 2;
        let off_y = (sh - th) / 2;
        return Some(imageops::crop_imm(&rgba, off_x, off_y, tw, th).to_image());
    }

    let mut canvas = background(tw, th, bg_color);
    let off_x = (tw as i64 - sw as i64) / 2;
    let off_y = (th as i64 - sh as i64) / 2;
    imageops::overlay(&mut canvas, &rgba, off_x, off_y);
    Some(canvas)
}
