//! Layout assembly: the one operation the compositor consumes.
//!
//! [`compose_layout`] takes the resolved subscriber snapshot plus the
//! session's mix profile and produces a complete [`MixLayout`].  The
//! computation is total (it cannot fail) and synchronous: it runs to
//! completion with no suspension points, in O(displayed participants).
//! An under-populated result (fewer regions than active participants, or
//! none) is a valid outcome; callers must treat the region count as
//! authoritative.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::mix::{Canvas, LayoutMode, MixLayout, Uid, BACKGROUND_COLOR};
use crate::geometry;

/// Per-session compositing parameters, fixed at session start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixProfile {
    pub canvas: Canvas,
    pub mode: LayoutMode,
    /// Forwarded into every produced layout; see [`MixLayout::keep_last_frame`].
    pub keep_last_frame: bool,
}

/// Computes the current compositing layout.
///
/// `subscribers` is the resolved display set in arrival order: an owned
/// snapshot, never a live collection.  `highlight` is the already-resolved
/// highlight uid; it only affects vertical-presentation mode.
///
/// An empty subscriber set yields a layout with no regions and no region
/// allocation, whatever the mode.
pub fn compose_layout(
    profile: &MixProfile,
    subscribers: &[Uid],
    highlight: Option<Uid>,
) -> MixLayout {
    let regions = if subscribers.is_empty() {
        Vec::new()
    } else {
        geometry::arrange(profile.mode, subscribers, highlight, profile.canvas)
    };

    debug!(
        mode = ?profile.mode,
        subscribers = subscribers.len(),
        regions = regions.len(),
        highlight = ?highlight,
        "composed layout"
    );

    MixLayout {
        canvas_width: profile.canvas.width,
        canvas_height: profile.canvas.height,
        background_color: BACKGROUND_COLOR,
        keep_last_frame: profile.keep_last_frame,
        regions,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
