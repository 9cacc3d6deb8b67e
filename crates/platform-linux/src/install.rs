//! Desktop-environment wallpaper setter dispatch.

use std::path::Path;
use std::process::Command;

use deskwall_common::error::{WallError, WallResult};

/// The `WallpaperInstaller` collaborator contract: hand the compositor's
/// freshly written canvas to the desktop environment.
pub trait WallpaperInstaller {
    fn install(&self, canvas_path: &Path) -> WallResult<()>;
}

/// Dispatches to `gsettings`, `feh`, or `xsetroot` depending on
/// `XDG_CURRENT_DESKTOP` and what's on `PATH`, in that preference order.
#[derive(Debug, Default)]
pub struct LinuxWallpaperInstaller;

impl WallpaperInstaller for LinuxWallpaperInstaller {
    fn install(&self, canvas_path: &Path) -> WallResult<()> {
        if !canvas_path.is_absolute() {
            return Err(WallError::InstallFailed {
                message: format!(
                    "canvas path must be absolute, got {}",
                    canvas_path.display()
                ),
            });
        }

        let desktop = std::env::var("XDG_CURRENT_DESKTOP")
            .unwrap_or_default()
            .to_lowercase();

        if desktop.contains("gnome") || desktop.contains("unity") || desktop.contains("cinnamon") {
            if let Ok(()) = set_via_gsettings(canvas_path) {
                return Ok(());
            }
        }

        if command_exists("feh") {
            return set_via_feh(canvas_path);
        }

        if command_exists("xsetroot") {
            return set_via_xsetroot(canvas_path);
        }

        if command_exists("gsettings") {
            return set_via_gsettings(canvas_path);
        }

        Err(WallError::InstallFailed {
            message: "no supported wallpaper setter found (tried gsettings, feh, xsetroot)"
                .to_string(),
        })
    }
}

fn command_exists(name: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| {
            std::env::split_paths(&paths).any(|dir| dir.join(name).is_file())
        })
        .unwrap_or(false)
}

fn set_via_gsettings(canvas_path: &Path) -> WallResult<()> {
    let uri = format!("file://{}", canvas_path.display());
    run_setter(
        "gsettings",
        &[
            "set",
            "org.gnome.desktop.background",
            "picture-uri",
            &uri,
        ],
    )?;
    // Dark-mode variant key; best effort, GNOME >= 42 only.
    let _ = run_setter(
        "gsettings",
        &[
            "set",
            "org.gnome.desktop.background",
            "picture-uri-dark",
            &uri,
        ],
    );
    Ok(())
}

fn set_via_feh(canvas_path: &Path) -> WallResult<()> {
    run_setter("feh", &["--bg-fill", &canvas_path.to_string_lossy()])
}

fn set_via_xsetroot(canvas_path: &Path) -> WallResult<()> {
    run_setter(
        "xsetroot",
        &["-fullscreen", "-background", &canvas_path.to_string_lossy()],
    )
}

fn run_setter(program: &str, args: &[&str]) -> WallResult<()> {
    tracing::debug!(program, ?args, "invoking wallpaper setter");
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| WallError::InstallFailed {
            message: format!("failed to spawn {program}: {e}"),
        })?;

    if !output.status.success() {
        return Err(WallError::InstallFailed {
            message: format!(
                "{program} exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_is_rejected() {
        let installer = LinuxWallpaperInstaller;
        let err = installer
            .install(Path::new("relative/wallpaper.png"))
            .unwrap_err();
        assert!(matches!(err, WallError::InstallFailed { .. }));
    }
}
