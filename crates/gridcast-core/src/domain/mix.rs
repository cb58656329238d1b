//! Mixed-canvas layout domain entities.
//!
//! A recording session composites every displayed participant into one output
//! canvas.  The engine describes that composition as a [`MixLayout`]: the
//! canvas dimensions plus an ordered list of [`Region`]s, each a normalized
//! rectangle telling the downstream compositor where one participant's video
//! is drawn.
//!
//! All coordinates are normalized to `[0, 1]` relative to the canvas so the
//! same layout works at any output resolution.  Regions are value types:
//! every recomputation produces a fresh sequence, nothing is mutated in place
//! or reused across computations.

use serde::{Deserialize, Serialize};

/// Background color painted behind all regions, as a hex literal.
///
/// Fixed for the lifetime of the engine; the compositor fills any canvas area
/// not covered by a region with this color.
pub const BACKGROUND_COLOR: &str = "#23b9dc";

/// Numeric participant identifier, unique within one session.
pub type Uid = u32;

/// Output canvas dimensions in pixels.
///
/// Configured once at session start and immutable for the session's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width-to-height ratio, used to square up thumbnail cells whose widths
    /// are expressed as canvas-width fractions.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// How the compositor renders one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Regular tile.
    Tile,
    /// Enlarged primary placement for the highlighted participant.
    Primary,
}

impl RenderMode {
    /// Wire-level flag understood by the compositor (0 = tile, 1 = primary).
    pub fn as_flag(self) -> u8 {
        match self {
            RenderMode::Tile => 0,
            RenderMode::Primary => 1,
        }
    }
}

/// One participant's rectangle within the mixed canvas.
///
/// `x`, `y` locate the top-left corner; all four geometry fields are
/// normalized canvas fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Participant whose video fills this region.
    pub uid: Uid,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Opacity / stacking weight handed through to the compositor.
    pub alpha: f32,
    pub render_mode: RenderMode,
}

impl Region {
    /// Returns `true` if the rectangle lies entirely within the canvas.
    ///
    /// A small epsilon absorbs `f32` rounding in fraction arithmetic such as
    /// `6.0 / 7.0 + 1.0 / 7.0`.
    pub fn within_canvas(&self) -> bool {
        const EPS: f32 = 1e-5;
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= 1.0 + EPS
            && self.y + self.height <= 1.0 + EPS
    }
}

/// A complete compositing layout, produced by one recomputation.
///
/// The value is fully owned by the caller until consumed by one submission to
/// the compositor; the engine retains nothing.  `PartialEq` is derived so two
/// computations over an identical snapshot can be compared bit-for-bit.
#[derive(Debug, Clone, PartialEq)]
pub struct MixLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Always [`BACKGROUND_COLOR`].
    pub background_color: &'static str,
    /// When set, the compositor keeps a participant's last decoded frame on
    /// the canvas while their stream is interrupted instead of blanking.
    pub keep_last_frame: bool,
    /// One region per displayed participant, in emission order.
    pub regions: Vec<Region>,
}

/// Which geometry algorithm family arranges the displayed participants.
///
/// Configured once at session start and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// One full-canvas speaker with a thumbnail strip along the bottom.
    #[default]
    Default,
    /// Near-square grid chosen purely by participant count.
    BestFit,
    /// Enlarged highlighted participant with a narrow tile column.
    VerticalPresentation,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
