//! deskwall Render Engine
//!
//! Turns a rebased monitor layout into a single composited desktop image:
//!
//! ```text
//! MonitorInfo + wallpaper config
//!        │
//!        ├── Orientation Resolver (source file + rotation)
//!        │
//!        ├── Per-Monitor Renderer (load, rotate, style)
//!        │
//!        └── Canvas Compositor (paste at virt_pos, write to disk)
//! ```

pub mod compositor;
pub mod orientation;
pub mod renderer;
pub mod style;

pub use compositor::*;
pub use renderer::*;
