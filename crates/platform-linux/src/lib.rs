//! deskwall Linux Platform Integration
//!
//! Platform-specific implementations for Linux:
//! - **Display Detection:** monitor enumeration via `xrandr`/`wlr-randr`
//! - **Install:** desktop-environment wallpaper setter dispatch
//! - **Notify:** poll-and-diff display-change detection

pub mod display;
pub mod install;
pub mod notify;

pub use display::*;
pub use install::*;
