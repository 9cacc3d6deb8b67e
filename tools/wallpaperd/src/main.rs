//! wallpaperd — multi-monitor wallpaper compositor driver.
//!
//! Usage:
//!   wallpaperd [-c <config>] [-v] [--once]

use std::path::PathBuf;

use clap::Parser;

use deskwall_common::config::{LoggingConfig, MonitorWallpaperConfig, RuntimeConfig};
use deskwall_common::error::{WallError, WallResult};
use deskwall_layout::{compute_virtual_desktop, rebase, Monitor, MonitorInfo};
use deskwall_platform_linux::display::{DisplaySource, LinuxDisplaySource};
use deskwall_platform_linux::install::{LinuxWallpaperInstaller, WallpaperInstaller};
use deskwall_platform_linux::notify;
use deskwall_render_engine::compositor::{composite, write_canvas};
use deskwall_render_engine::renderer::render_monitor;

#[derive(Parser)]
#[command(
    name = "wallpaperd",
    about = "Composites per-monitor wallpapers into one virtual-desktop canvas and installs it",
    version,
    author
)]
struct Cli {
    /// Path to the wallpaper config file.
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,

    /// Run a single update cycle and exit instead of watching for changes.
    #[arg(long)]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    deskwall_common::logging::init_logging(&LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    let config = RuntimeConfig::load(&cli.config)?;
    let display_source = LinuxDisplaySource;
    let installer = LinuxWallpaperInstaller;

    if cli.once {
        update(&config, &display_source, &installer)?;
        return Ok(());
    }

    notify::watch(&display_source, notify::DEFAULT_POLL_INTERVAL, |monitors| {
        update_with_monitors(&config, monitors.to_vec(), &installer)
    })?;

    Ok(())
}

/// One full Driver cycle: detect → layout → render → composite → install.
fn update(
    config: &RuntimeConfig,
    display_source: &dyn DisplaySource,
    installer: &dyn WallpaperInstaller,
) -> WallResult<()> {
    let monitors = display_source.enumerate()?;
    update_with_monitors(config, monitors, installer)
}

fn update_with_monitors(
    config: &RuntimeConfig,
    monitors: Vec<MonitorInfo>,
    installer: &dyn WallpaperInstaller,
) -> WallResult<()> {
    tracing::info!(monitor_count = monitors.len(), "running update cycle");

    let desktop = compute_virtual_desktop(&monitors);
    let (desktop, placed) = rebase(&monitors, desktop).map_err(|_| WallError::EmptyLayout)?;

    let tiles = placed
        .iter()
        .enumerate()
        .map(|(index, monitor)| render_for(index, monitor, config))
        .collect::<WallResult<Vec<_>>>()?;

    let canvas = composite(desktop, &placed, &tiles);

    let canvas_path = canvas_path(config);
    write_canvas(&canvas, &canvas_path)?;
    installer.install(&canvas_path)?;

    tracing::info!(path = %canvas_path.display(), "wallpaper updated");
    Ok(())
}

fn render_for(
    index: usize,
    monitor: &Monitor,
    config: &RuntimeConfig,
) -> WallResult<deskwall_render_engine::renderer::RenderedTile> {
    static EMPTY: MonitorWallpaperConfig = MonitorWallpaperConfig {
        auto_rotate: false,
        style: deskwall_common::config::StyleKind::Stretch,
        bg_color: [0, 0, 0],
        source: [None, None, None, None],
    };

    let monitor_config = config.monitor.get(index).unwrap_or(&EMPTY);
    render_monitor(index, monitor, monitor_config)
}

fn canvas_path(config: &RuntimeConfig) -> PathBuf {
    let file_name = format!("wallpaper_generated.{}", config.output_format);
    let path = config.workdir.join(file_name);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}
