//! Geometry algorithm families.
//!
//! Each family is a stateless pure function from (ordered subscriber uids,
//! optional highlight uid, canvas) to an ordered region sequence.  The
//! dispatch below is the layout policy selector: `Default` always uses the
//! bottom-strip grid, `BestFit` and `VerticalPresentation` pick a
//! sub-algorithm from the subscriber count.
//!
//! Callers hand in a non-empty subscriber set; an empty set is short-circuited
//! before dispatch so no algorithm ever runs over nothing.

pub mod best_fit;
pub mod default_grid;
pub mod vertical;

use crate::domain::mix::{Canvas, LayoutMode, Region, Uid};

/// Arranges the displayed subscribers according to the configured mode.
pub fn arrange(
    mode: LayoutMode,
    subscribers: &[Uid],
    highlight: Option<Uid>,
    canvas: Canvas,
) -> Vec<Region> {
    match mode {
        LayoutMode::Default => default_grid::arrange(subscribers, canvas),
        LayoutMode::BestFit => best_fit::arrange(subscribers),
        LayoutMode::VerticalPresentation => vertical::arrange(subscribers, highlight),
    }
}
