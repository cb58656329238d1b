//! Best-fit layout: a near-square grid chosen purely by subscriber count.
//!
//! Count buckets:
//!
//! | subscribers | arrangement            |
//! |-------------|------------------------|
//! | 1           | full canvas            |
//! | 2           | two full-height halves |
//! | 3–4         | 2×2 grid               |
//! | 5–9         | 3×3 grid               |
//! | 10–16       | 4×4 grid               |
//! | 17          | packed 5-column grid   |
//! | > 17        | nothing                |
//!
//! The `> 17` bucket is an explicit capacity ceiling: excess participants are
//! silently omitted and the caller sees an empty region list.

use tracing::warn;

use crate::domain::mix::{Region, RenderMode, Uid};

/// Hard ceiling on displayable subscribers in this mode.
pub const CAPACITY: usize = 17;

pub fn arrange(subscribers: &[Uid]) -> Vec<Region> {
    match subscribers.len() {
        0 => Vec::new(),
        1 => square(subscribers, 1),
        2 => split_pair(subscribers),
        3..=4 => square(subscribers, 2),
        5..=9 => square(subscribers, 3),
        10..=16 => square(subscribers, 4),
        17 => packed_seventeen(subscribers),
        count => {
            warn!(count, capacity = CAPACITY, "subscriber count exceeds best-fit capacity");
            Vec::new()
        }
    }
}

/// Tiles subscribers onto an `side × side` grid of `1/side` cells, row-major.
fn square(subscribers: &[Uid], side: usize) -> Vec<Region> {
    let cell = 1.0 / side as f32;
    subscribers
        .iter()
        .enumerate()
        .map(|(i, &uid)| Region {
            uid,
            x: (i % side) as f32 * cell,
            y: (i / side) as f32 * cell,
            width: cell,
            height: cell,
            alpha: (i + 1) as f32,
            render_mode: RenderMode::Tile,
        })
        .collect()
}

/// Two full-height columns rather than a 1×2 square.
fn split_pair(subscribers: &[Uid]) -> Vec<Region> {
    subscribers
        .iter()
        .enumerate()
        .map(|(i, &uid)| Region {
            uid,
            x: if i % 2 == 0 { 0.0 } else { 0.5 },
            y: 0.0,
            width: 0.5,
            height: 1.0,
            alpha: (i + 1) as f32,
            render_mode: RenderMode::Tile,
        })
        .collect()
}

/// Seventeen subscribers on a five-column grid of `1/5` cells.
///
/// The first sixteen fill four rows of four, each row inset by half a cell so
/// the block is centered; the seventeenth sits alone on the fifth row,
/// centered with its own `(1 − cell) / 2` offset.
fn packed_seventeen(subscribers: &[Uid]) -> Vec<Region> {
    const SIDE: usize = 5;
    let cell = 1.0 / SIDE as f32;

    subscribers
        .iter()
        .enumerate()
        .map(|(i, &uid)| {
            let col = (i % (SIDE - 1)) as f32;
            let row = (i / (SIDE - 1)) as f32;
            Region {
                uid,
                x: if i == 16 {
                    (1.0 - cell) * 0.5
                } else {
                    0.5 * cell + cell * col
                },
                y: row * cell,
                width: cell,
                height: cell,
                alpha: (i + 1) as f32,
                render_mode: RenderMode::Tile,
            }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
