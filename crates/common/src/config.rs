//! Wallpaper configuration: load, default-fill, and validate the on-disk
//! JSON document into the in-memory form the rest of the pipeline consumes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{WallError, WallResult};

/// Maximum number of `monitor[]` entries accepted by [`RuntimeConfig::load`].
pub const MONITOR_COUNT_MAX: usize = 8;

/// The five supported wallpaper fit styles, as spelled in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    FitNoCut,
    FitEdgeCut,
    Stretch,
    Tile,
    Center,
}

/// Raw, as-parsed config document (mirrors the §6 JSON schema exactly).
#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    #[serde(default)]
    monitor: Vec<RawMonitorConfig>,
    #[serde(default)]
    settings: RawSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct RawMonitorConfig {
    wallpaper: RawWallpaperConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct RawWallpaperConfig {
    #[serde(default)]
    auto_rotate: bool,
    style: String,
    #[serde(default)]
    bg_color: Option<String>,
    #[serde(default)]
    source: RawSourceTable,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawSourceTable {
    landscape_0: Option<PathBuf>,
    portrait_90: Option<PathBuf>,
    landscape_180: Option<PathBuf>,
    portrait_270: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawSettings {
    #[serde(default = "default_output_format")]
    output_format: String,
    #[serde(default = "default_workdir")]
    workdir: String,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            workdir: default_workdir(),
        }
    }
}

fn default_output_format() -> String {
    "bmp".to_string()
}

fn default_workdir() -> String {
    ".".to_string()
}

/// One monitor's validated wallpaper configuration, index-bound to the
/// live display enumeration.
#[derive(Debug, Clone)]
pub struct MonitorWallpaperConfig {
    pub auto_rotate: bool,
    pub style: StyleKind,
    pub bg_color: [u8; 3],
    pub source: [Option<PathBuf>; 4],
}

/// Validated, defaulted, in-memory configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub monitor: Vec<MonitorWallpaperConfig>,
    pub output_format: String,
    pub workdir: PathBuf,
}

impl RuntimeConfig {
    /// Load, parse, default-fill, and validate the config at `path`.
    pub fn load(path: &Path) -> WallResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            WallError::config(format!("failed to read config at {}: {e}", path.display()))
        })?;
        Self::parse(&text)
    }

    /// Parse and validate a config document already read into memory.
    pub fn parse(text: &str) -> WallResult<Self> {
        let raw: RawConfig = serde_json::from_str(text)
            .map_err(|e| WallError::config(format!("invalid config JSON: {e}")))?;

        if raw.monitor.len() > MONITOR_COUNT_MAX {
            return Err(WallError::config(format!(
                "config declares {} monitors, exceeding the maximum of {MONITOR_COUNT_MAX}",
                raw.monitor.len()
            )));
        }

        let monitor = raw
            .monitor
            .into_iter()
            .map(|m| validate_monitor(m.wallpaper))
            .collect::<WallResult<Vec<_>>>()?;

        Ok(Self {
            monitor,
            output_format: raw.settings.output_format,
            workdir: PathBuf::from(raw.settings.workdir),
        })
    }
}

fn validate_monitor(raw: RawWallpaperConfig) -> WallResult<MonitorWallpaperConfig> {
    let style = parse_style(&raw.style)?;

    let bg_color = match raw.bg_color.as_deref().map(parse_hex_color) {
        Some(Ok(color)) => color,
        Some(Err(bad)) => {
            tracing::warn!(value = %bad, "invalid bg_color, falling back to #000000");
            [0, 0, 0]
        }
        None => [0, 0, 0],
    };

    Ok(MonitorWallpaperConfig {
        auto_rotate: raw.auto_rotate,
        style,
        bg_color,
        source: [
            raw.source.landscape_0,
            raw.source.portrait_90,
            raw.source.landscape_180,
            raw.source.portrait_270,
        ],
    })
}

fn parse_style(raw: &str) -> WallResult<StyleKind> {
    match raw {
        "fit_no_cut" => Ok(StyleKind::FitNoCut),
        "fit_edge_cut" => Ok(StyleKind::FitEdgeCut),
        "stretch" => Ok(StyleKind::Stretch),
        "tile" => Ok(StyleKind::Tile),
        "center" => Ok(StyleKind::Center),
        other => Err(WallError::config(format!("unknown wallpaper style: {other}"))),
    }
}

fn parse_hex_color(raw: &str) -> Result<[u8; 3], String> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() != 6 && hex.len() != 8 {
        return Err(raw.to_string());
    }
    let byte = |i: usize| -> Result<u8, String> {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| raw.to_string())
    };
    Ok([byte(0)?, byte(2)?, byte(4)?])
}

/// Logging configuration, shared with [`crate::logging::init_logging`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "deskwall=debug,warn").
    pub level: String,
    /// Whether to output structured JSON logs.
    pub json: bool,
    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_minimal_single_monitor_config() {
        let json = r#"{
            "monitor": [
                { "wallpaper": { "auto_rotate": true, "style": "fit_no_cut", "bg_color": "#112233", "source": { "landscape_0": "/tmp/a.png" } } }
            ],
            "settings": { "output_format": "png", "workdir": "/tmp" }
        }"#;
        let cfg = RuntimeConfig::parse(json).unwrap();
        assert_eq!(cfg.monitor.len(), 1);
        assert_eq!(cfg.monitor[0].style, StyleKind::FitNoCut);
        assert_eq!(cfg.monitor[0].bg_color, [0x11, 0x22, 0x33]);
        assert_eq!(cfg.output_format, "png");
    }

    #[test]
    fn defaults_output_format_and_workdir_when_settings_omitted() {
        let json = r#"{ "monitor": [] }"#;
        let cfg = RuntimeConfig::parse(json).unwrap();
        assert_eq!(cfg.output_format, "bmp");
        assert_eq!(cfg.workdir, PathBuf::from("."));
    }

    #[test]
    fn rejects_unknown_style() {
        let json = r#"{
            "monitor": [ { "wallpaper": { "style": "spiral", "source": {} } } ]
        }"#;
        assert!(RuntimeConfig::parse(json).is_err());
    }

    #[test]
    fn falls_back_bad_bg_color_instead_of_failing() {
        let json = r#"{
            "monitor": [ { "wallpaper": { "style": "stretch", "bg_color": "not-a-color", "source": {} } } ]
        }"#;
        let cfg = RuntimeConfig::parse(json).unwrap();
        assert_eq!(cfg.monitor[0].bg_color, [0, 0, 0]);
    }

    #[test]
    fn rejects_too_many_monitors() {
        let entries = (0..MONITOR_COUNT_MAX + 1)
            .map(|_| r#"{ "wallpaper": { "style": "stretch", "source": {} } }"#)
            .collect::<Vec<_>>()
            .join(",");
        let json = format!(r#"{{ "monitor": [{entries}] }}"#);
        assert!(RuntimeConfig::parse(&json).is_err());
    }
}
