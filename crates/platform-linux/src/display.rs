//! Monitor enumeration on Linux via `xrandr`/`wlr-randr` output parsing.

use std::process::Command;

use deskwall_common::error::WallResult;
use deskwall_layout::{MonitorInfo, Orientation};

/// The `DisplaySource` collaborator contract: enumerate currently connected
/// monitors, in a stable index order matching the config file's `monitor[]`
/// array.
pub trait DisplaySource {
    fn enumerate(&self) -> WallResult<Vec<MonitorInfo>>;
}

/// Display server family, used only to pick a parse order preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DisplayServerKind {
    Wayland,
    X11,
    Unknown,
}

/// xrandr/wlr-randr backed display source for X11 and wlroots-based Wayland
/// compositors.
#[derive(Debug, Default)]
pub struct LinuxDisplaySource;

impl DisplaySource for LinuxDisplaySource {
    fn enumerate(&self) -> WallResult<Vec<MonitorInfo>> {
        tracing::debug!("enumerating monitors");

        let server = detect_display_server();
        let monitors = match server {
            DisplayServerKind::Wayland => parse_wlr_randr_output().or_else(parse_xrandr_output),
            DisplayServerKind::X11 => parse_xrandr_output().or_else(parse_wlr_randr_output),
            DisplayServerKind::Unknown => {
                parse_xrandr_output().or_else(parse_wlr_randr_output)
            }
        }
        .unwrap_or_else(default_monitor);

        Ok(monitors)
    }
}

fn detect_display_server() -> DisplayServerKind {
    match std::env::var("XDG_SESSION_TYPE")
        .as_deref()
        .map(str::to_lowercase)
        .as_deref()
    {
        Ok("wayland") => return DisplayServerKind::Wayland,
        Ok("x11" | "mir") => return DisplayServerKind::X11,
        _ => {}
    }

    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServerKind::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServerKind::X11
    } else {
        DisplayServerKind::Unknown
    }
}

fn parse_xrandr_output() -> Option<Vec<MonitorInfo>> {
    let output = Command::new("xrandr").arg("--query").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    parse_xrandr_str(&stdout)
}

/// Map an xrandr rotation keyword to a clockwise [`Orientation`].
fn orientation_from_xrandr_token(token: &str) -> Orientation {
    match token {
        "left" => Orientation::Portrait270,
        "inverted" => Orientation::Landscape180,
        "right" => Orientation::Portrait90,
        _ => Orientation::Landscape0,
    }
}

fn parse_xrandr_str(stdout: &str) -> Option<Vec<MonitorInfo>> {
    let mut monitors = Vec::new();
    let mut lines = stdout.lines().peekable();
    let mut any_active_seen = false;

    while let Some(line) = lines.next() {
        if !line.contains(" connected") || line.contains(" disconnected") {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };

        // xrandr geometry token: WxH+X+Y. Present for any monitor with an
        // active mode; absent for connected-but-disabled outputs.
        let geometry_token = line.split_whitespace().find(|token| {
            let has_x = token.contains('x');
            let plus_count = token.chars().filter(|&c| c == '+').count();
            has_x && plus_count >= 2
        });

        let Some(geometry) = geometry_token else {
            tracing::debug!(monitor = name, "connected monitor reports no active mode");
            monitors.push(MonitorInfo {
                name: name.to_string(),
                x: 0,
                y: 0,
                width: 0,
                height: 0,
                orientation: Orientation::Landscape0,
                active: false,
                is_primary: false,
            });
            continue;
        };

        let Some((wh, rest)) = geometry.split_once('+') else {
            continue;
        };
        let Some((w_str, h_str)) = wh.split_once('x') else {
            continue;
        };
        let mut pos_parts = rest.splitn(2, '+');
        let (Some(x_str), Some(y_str)) = (pos_parts.next(), pos_parts.next()) else {
            continue;
        };

        let (Ok(width), Ok(height), Ok(x), Ok(y)) = (
            w_str.parse::<u32>(),
            h_str.parse::<u32>(),
            x_str.parse::<i32>(),
            y_str.parse::<i32>(),
        ) else {
            continue;
        };

        if width == 0 || height == 0 {
            tracing::debug!(monitor = name, width, height, "zero-dimension monitor");
            monitors.push(MonitorInfo {
                name: name.to_string(),
                x,
                y,
                width: 0,
                height: 0,
                orientation: Orientation::Landscape0,
                active: false,
                is_primary: false,
            });
            continue;
        }

        // The rotation keyword (normal/left/inverted/right), when present,
        // follows the geometry token and precedes the capability list.
        let orientation = line
            .split_whitespace()
            .skip_while(|t| *t != geometry)
            .nth(1)
            .map(orientation_from_xrandr_token)
            .unwrap_or(Orientation::Landscape0);

        // Mirror-driver outputs share geometry with an already-seen active
        // monitor; treat the second occurrence as inactive.
        let is_mirror = monitors
            .iter()
            .any(|m: &MonitorInfo| m.active && m.x == x && m.y == y && m.width == width && m.height == height);

        any_active_seen = any_active_seen || !is_mirror;

        monitors.push(MonitorInfo {
            name: name.to_string(),
            x,
            y,
            width,
            height,
            orientation,
            active: !is_mirror,
            is_primary: x == 0 && y == 0,
        });
    }

    if monitors.is_empty() || !any_active_seen {
        None
    } else {
        Some(monitors)
    }
}

fn parse_wlr_randr_output() -> Option<Vec<MonitorInfo>> {
    let output = Command::new("wlr-randr").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let mut monitors = Vec::new();

    let mut current_name: Option<String> = None;
    let mut current_width: Option<u32> = None;
    let mut current_height: Option<u32> = None;
    let mut current_x: i32 = 0;
    let mut current_y: i32 = 0;
    let mut current_enabled: bool = true;
    let mut current_transform: Orientation = Orientation::Landscape0;

    let flush_current = |name: &mut Option<String>,
                         width: &mut Option<u32>,
                         height: &mut Option<u32>,
                         x: i32,
                         y: i32,
                         orientation: Orientation,
                         enabled: bool,
                         monitors: &mut Vec<MonitorInfo>| {
        if let Some(name) = name.take() {
            let (w, h) = (width.take(), height.take());
            monitors.push(MonitorInfo {
                name,
                x,
                y,
                width: w.unwrap_or(0),
                height: h.unwrap_or(0),
                orientation,
                active: enabled && w.unwrap_or(0) > 0 && h.unwrap_or(0) > 0,
                is_primary: x == 0 && y == 0,
            });
        }
    };

    for raw_line in stdout.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if !raw_line.starts_with(' ') && !raw_line.starts_with('\t') {
            flush_current(
                &mut current_name,
                &mut current_width,
                &mut current_height,
                current_x,
                current_y,
                current_transform,
                current_enabled,
                &mut monitors,
            );

            let name = line
                .split('(')
                .next()
                .unwrap_or(line)
                .trim_end_matches(':')
                .trim()
                .to_string();
            current_name = Some(name);
            current_width = None;
            current_height = None;
            current_x = 0;
            current_y = 0;
            current_enabled = true;
            current_transform = Orientation::Landscape0;
            continue;
        }

        if let Some(rest) = line.strip_prefix("Enabled:") {
            let val = rest.trim().to_lowercase();
            current_enabled = val == "yes" || val == "true" || val == "1";
            continue;
        }

        if let Some(rest) = line.strip_prefix("current") {
            let rest = rest.trim();
            if let Some((res, _hz_part)) = rest.split_once(" @ ") {
                let res = res.trim();
                if let Some((w_str, h_str)) = res.split_once('x') {
                    current_width = w_str.trim().parse::<u32>().ok();
                    current_height = h_str.trim().parse::<u32>().ok();
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("Position:") {
            let mut parts = rest.trim().split(',');
            current_x = parts
                .next()
                .and_then(|v| v.trim().parse::<i32>().ok())
                .unwrap_or(0);
            current_y = parts
                .next()
                .and_then(|v| v.trim().parse::<i32>().ok())
                .unwrap_or(0);
            continue;
        }

        if let Some(rest) = line.strip_prefix("Transform:") {
            current_transform = match rest.trim() {
                "90" => Orientation::Portrait90,
                "180" | "flipped-180" => Orientation::Landscape180,
                "270" => Orientation::Portrait270,
                _ => Orientation::Landscape0,
            };
        }
    }

    flush_current(
        &mut current_name,
        &mut current_width,
        &mut current_height,
        current_x,
        current_y,
        current_transform,
        current_enabled,
        &mut monitors,
    );

    if monitors.iter().any(|m| m.active) {
        Some(monitors)
    } else {
        None
    }
}

fn default_monitor() -> Vec<MonitorInfo> {
    vec![MonitorInfo {
        name: "default".to_string(),
        x: 0,
        y: 0,
        width: 1920,
        height: 1080,
        orientation: Orientation::Landscape0,
        active: true,
        is_primary: true,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    const XRANDR_FIXTURE: &str = "\
Screen 0: minimum 320 x 200, current 4480 x 1440, maximum 16384 x 16384
eDP-2 connected primary 2560x1440+1920+0 normal (normal left inverted right x axis y axis) 355mm x 200mm
   2560x1440    240.00*+  60.00 +  59.99    59.99
   1920x1080     60.01    59.97
HDMI-1-0 connected 1080x1920+0+0 left (normal left inverted right x axis y axis) 527mm x 296mm
   1080x1920     60.00*+  75.00    50.00
DP-1-0 disconnected (normal left inverted right x axis y axis)
DP-1-1 disconnected (normal left inverted right x axis y axis)
";

    #[test]
    fn xrandr_parses_two_monitors_correct_geometry() {
        let monitors = parse_xrandr_str(XRANDR_FIXTURE).expect("should parse two monitors");
        assert_eq!(monitors.len(), 2);

        let edp = &monitors[0];
        assert_eq!(edp.name, "eDP-2");
        assert_eq!(edp.width, 2560);
        assert_eq!(edp.height, 1440);
        assert_eq!(edp.x, 1920);
        assert!(edp.active);

        let hdmi = &monitors[1];
        assert_eq!(hdmi.name, "HDMI-1-0");
        assert_eq!(hdmi.width, 1080);
        assert_eq!(hdmi.height, 1920);
        assert_eq!(hdmi.orientation, Orientation::Portrait270);
    }

    #[test]
    fn xrandr_skips_disconnected_monitors() {
        let monitors = parse_xrandr_str(XRANDR_FIXTURE).expect("should parse");
        let names: Vec<&str> = monitors.iter().map(|m| m.name.as_str()).collect();
        assert!(!names.contains(&"DP-1-0"));
        assert!(!names.contains(&"DP-1-1"));
    }

    #[test]
    fn xrandr_connected_no_mode_is_reported_inactive() {
        let input = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
HDMI-1 connected (normal left inverted right x axis y axis)
   1920x1080     60.00 +
eDP-1 connected primary 1920x1080+0+0 normal (normal left inverted right x axis y axis)
   1920x1080     60.00*+
";
        let monitors = parse_xrandr_str(input).expect("should parse at least eDP-1");
        let hdmi = monitors.iter().find(|m| m.name == "HDMI-1").unwrap();
        assert!(!hdmi.active);
        let edp = monitors.iter().find(|m| m.name == "eDP-1").unwrap();
        assert!(edp.active);
    }

    #[test]
    fn all_disconnected_falls_through_to_none() {
        let input = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
DP-1 disconnected (normal left inverted right x axis y axis)
";
        assert!(parse_xrandr_str(input).is_none());
    }
}
