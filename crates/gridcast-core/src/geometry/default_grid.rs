//! Default layout: first subscriber full-canvas, the rest in a thumbnail
//! strip along the bottom edge.
//!
//! Thumbnails are sized as canvas-width fractions; heights multiply by the
//! canvas aspect ratio so cells stay square-ish regardless of resolution.
//! Four thumbnails per row, rows stacking upward from the bottom edge.
//! There is no highlight concept in this mode; the first arrival simply owns
//! the canvas.

use crate::domain::mix::{Canvas, Region, RenderMode, Uid};

/// Thumbnail width as a canvas-width fraction.
const THUMB_WIDTH: f32 = 0.235;

/// Horizontal margin between thumbnails (and from the canvas edge), as a
/// canvas-width fraction.
const THUMB_EDGE: f32 = 0.012;

/// Thumbnails per row.
const COLUMNS: usize = 4;

pub fn arrange(subscribers: &[Uid], canvas: Canvas) -> Vec<Region> {
    let Some((&first, rest)) = subscribers.split_first() else {
        return Vec::new();
    };

    let mut regions = Vec::with_capacity(subscribers.len());
    regions.push(Region {
        uid: first,
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
        alpha: 1.0,
        render_mode: RenderMode::Tile,
    });

    // Width fractions scale by the aspect ratio when applied vertically.
    let aspect = canvas.aspect();
    let thumb_height = THUMB_WIDTH * aspect;
    let v_edge = THUMB_EDGE * aspect;

    for (i, &uid) in rest.iter().enumerate() {
        let col = (i % COLUMNS) as f32;
        let row = (i / COLUMNS) as f32;
        regions.push(Region {
            uid,
            x: col * (THUMB_WIDTH + THUMB_EDGE) + THUMB_EDGE,
            y: 1.0 - (row + 1.0) * (thumb_height + v_edge),
            width: THUMB_WIDTH,
            height: thumb_height,
            // The strip stacks above the full-canvas region; weights follow
            // the emission index as the compositor expects.
            alpha: (i + 2) as f32,
            render_mode: RenderMode::Tile,
        });
    }

    regions
}

// ── Tests ─────────────────────────────────────────────────────────────────────
