//! Windows platform integration.

use std::process::Command;

use deskwall_common::error::{WallError, WallResult};
use deskwall_layout::{MonitorInfo, Orientation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawScreen {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Width")]
    width: Option<u32>,
    #[serde(rename = "Height")]
    height: Option<u32>,
    #[serde(rename = "X")]
    x: Option<i32>,
    #[serde(rename = "Y")]
    y: Option<i32>,
    #[serde(rename = "Primary")]
    primary: Option<bool>,
    #[serde(rename = "Orientation")]
    orientation: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScreens {
    One(RawScreen),
    Many(Vec<RawScreen>),
}

/// Detect monitors on Windows via `System.Windows.Forms.Screen`.
pub fn detect_monitors() -> WallResult<Vec<MonitorInfo>> {
    let stdout = run_powershell_monitor_query()
        .map_err(|e| WallError::platform(format!("Failed to query Windows monitors: {e}")))?;

    let parsed: RawScreens = serde_json::from_str(&stdout)
        .map_err(|e| WallError::platform(format!("Failed to parse Windows monitor metadata: {e}")))?;

    let screens = match parsed {
        RawScreens::One(s) => vec![s],
        RawScreens::Many(v) => v,
    };

    let mut monitors: Vec<MonitorInfo> = screens
        .into_iter()
        .enumerate()
        .map(|(idx, s)| MonitorInfo {
            name: s.name.unwrap_or_else(|| format!("DISPLAY{}", idx + 1)),
            width: s.width.unwrap_or(1920).max(1),
            height: s.height.unwrap_or(1080).max(1),
            x: s.x.unwrap_or(0),
            y: s.y.unwrap_or(0),
            orientation: s
                .orientation
                .and_then(|o| Orientation::from_index(o as usize))
                .unwrap_or(Orientation::Landscape0),
            active: true,
            is_primary: s.primary.unwrap_or(idx == 0),
        })
        .collect();

    if monitors.is_empty() {
        return Err(WallError::platform("No displays reported by Windows monitor query"));
    }

    if !monitors.iter().any(|m| m.is_primary) {
        monitors[0].is_primary = true;
    }

    Ok(monitors)
}

/// Set the desktop wallpaper via the `SystemParametersInfo` registry path,
/// driven through PowerShell the same way monitor detection is.
pub fn install_wallpaper(canvas_path: &std::path::Path) -> WallResult<()> {
    if !canvas_path.is_absolute() {
        return Err(WallError::InstallFailed {
            message: format!("canvas path must be absolute, got {}", canvas_path.display()),
        });
    }

    let script = format!(
        "Set-ItemProperty -Path 'HKCU:\\Control Panel\\Desktop' -Name Wallpaper -Value '{}'; \
         Add-Type -TypeDefinition 'using System.Runtime.InteropServices; public class W { [DllImport(\"user32.dll\", CharSet = CharSet.Auto)] public static extern int SystemParametersInfo(int uAction, int uParam, string lpvParam, int fuWinIni); }'; \
         [W]::SystemParametersInfo(20, 0, '{}', 3)",
        canvas_path.display(),
        canvas_path.display(),
    );

    run_powershell(&script)
        .map_err(|e| WallError::InstallFailed { message: e })
        .map(|_| ())
}

fn run_powershell_monitor_query() -> Result<String, String> {
    let script = "Add-Type -AssemblyName System.Windows.Forms; [System.Windows.Forms.Screen]::AllScreens | ForEach-Object { [PSCustomObject]@{ Name = $_.DeviceName; Width = $_.Bounds.Width; Height = $_.Bounds.Height; X = $_.Bounds.X; Y = $_.Bounds.Y; Primary = $_.Primary } } | ConvertTo-Json -Compress";
    run_powershell(script)
}

fn run_powershell(script: &str) -> Result<String, String> {
    let shells = ["pwsh", "powershell"];
    let mut last_err = String::new();

    for shell in shells {
        let output = Command::new(shell).args(["-NoProfile", "-Command", script]).output();

        match output {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !stdout.is_empty() {
                    return Ok(stdout);
                }
                return Ok(String::new());
            }
            Ok(output) => {
                last_err = format!(
                    "{shell} exited with status {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            Err(e) => {
                last_err = format!("failed to launch {shell}: {e}");
            }
        }
    }

    Err(last_err)
}
