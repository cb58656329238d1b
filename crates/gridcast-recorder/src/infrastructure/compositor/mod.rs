//! Compositor adapters.
//!
//! The real target is the external mixing engine; until one is attached the
//! headless binary uses [`LoggingCompositor`], which records what *would* be
//! rendered.  Tests use [`mock::CapturingCompositor`].

pub mod mock;

use gridcast_core::MixLayout;
use tracing::info;

use crate::application::control_loop::{Compositor, CompositorError};

/// Compositor stand-in that logs each submitted layout.
///
/// Used by the headless binary so the recompute-and-submit cycle is fully
/// observable without a rendering engine.
#[derive(Debug, Default)]
pub struct LoggingCompositor;

impl LoggingCompositor {
    pub fn new() -> Self {
        Self
    }
}

impl Compositor for LoggingCompositor {
    fn submit(&self, layout: &MixLayout) -> Result<(), CompositorError> {
        info!(
            canvas = format_args!("{}x{}", layout.canvas_width, layout.canvas_height),
            regions = layout.regions.len(),
            keep_last_frame = layout.keep_last_frame,
            "layout submitted"
        );
        Ok(())
    }
}
