//! deskwall monitor model, geometry primitives, and virtual-desktop layout.
//!
//! This crate holds the cross-platform display contracts used by the
//! rendering and driver crates without coupling to a concrete OS backend,
//! plus the pure geometry/layout math that turns a set of monitor
//! placements into a single virtual-desktop canvas.

pub mod geometry;
pub mod layout;

pub use geometry::*;
pub use layout::*;

use serde::{Deserialize, Serialize};

/// A monitor's rotation relative to landscape, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Landscape0,
    Portrait90,
    Landscape180,
    Portrait270,
}

impl Orientation {
    /// All four orientations in the fixed scan order used by the
    /// orientation resolver's fallback search.
    pub const ALL: [Orientation; 4] = [
        Orientation::Landscape0,
        Orientation::Portrait90,
        Orientation::Landscape180,
        Orientation::Portrait270,
    ];

    /// Degrees clockwise from landscape.
    pub fn degrees(self) -> u32 {
        match self {
            Orientation::Landscape0 => 0,
            Orientation::Portrait90 => 90,
            Orientation::Landscape180 => 180,
            Orientation::Portrait270 => 270,
        }
    }

    /// Index into a 4-slot source table (`[landscape_0, portrait_90, landscape_180, portrait_270]`).
    pub fn index(self) -> usize {
        match self {
            Orientation::Landscape0 => 0,
            Orientation::Portrait90 => 1,
            Orientation::Landscape180 => 2,
            Orientation::Portrait270 => 3,
        }
    }

    /// The orientation 180° from this one.
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Landscape0 => Orientation::Landscape180,
            Orientation::Portrait90 => Orientation::Portrait270,
            Orientation::Landscape180 => Orientation::Landscape0,
            Orientation::Portrait270 => Orientation::Portrait90,
        }
    }

    pub fn from_index(index: usize) -> Option<Orientation> {
        Orientation::ALL.get(index).copied()
    }
}

/// A connected monitor's physical placement, as reported by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorInfo {
    pub name: String,
    /// Position in the virtual desktop (pixels, platform coordinate space).
    pub x: i32,
    pub y: i32,
    /// Resolution in physical pixels.
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    /// False for disconnected/mirror-driver outputs; such monitors never
    /// contribute to the bounding box or to composition.
    pub active: bool,
    /// Whether this monitor's origin is `(0, 0)`.
    pub is_primary: bool,
}

/// A monitor merged with its runtime placement (`virt_pos`), ready for
/// rendering and composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Monitor {
    pub info: MonitorInfo,
    /// Non-negative position in canvas space, set by [`layout::rebase`].
    pub virt_pos: Point,
}

/// A signed 2-D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// An axis-aligned rectangle in signed coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const EMPTY: Rectangle = Rectangle {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    pub fn from_monitor(info: &MonitorInfo) -> Rectangle {
        Rectangle {
            x: info.x,
            y: info.y,
            width: info.width,
            height: info.height,
        }
    }
}

/// A 1-D interval, endpoints unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub s: i64,
    pub e: i64,
}

impl Line {
    pub fn new(s: i64, e: i64) -> Self {
        Self { s, e }
    }

    pub fn min(&self) -> i64 {
        self.s.min(self.e)
    }

    pub fn max(&self) -> i64 {
        self.s.max(self.e)
    }
}
