//! RecorderController: the recompute-and-submit control loop.
//!
//! The controller consumes session events (participant joins and leaves,
//! explicit refreshes, highlight updates), keeps the roster current, and on
//! every change runs one synchronous recomputation whose result is submitted
//! to the compositor exactly once and then dropped.
//!
//! # Architecture
//!
//! The controller depends only on ports ([`SessionEventSource`],
//! [`Compositor`]) and use-case types ([`LayoutPipeline`],
//! [`ParticipantRoster`]).  Infrastructure implementations are injected at
//! construction time, making the loop fully unit-testable.

use std::sync::Arc;

use async_trait::async_trait;
use gridcast_core::{HighlightTarget, MixLayout, Uid};
use thiserror::Error;
use tracing::{error, info};

use super::compute_layout::LayoutPipeline;
use super::manage_session::ParticipantRoster;

/// Error type for layout submission.
#[derive(Debug, Error)]
pub enum CompositorError {
    /// The downstream engine refused the layout.
    #[error("compositor rejected layout: {0}")]
    Rejected(String),

    /// No engine is attached to receive layouts.
    #[error("no compositor attached")]
    Detached,
}

/// Sink for computed layouts.
///
/// One call per recomputation; the layout is borrowed for the duration of the
/// call and released by the controller immediately afterwards.
/// Infrastructure implementations hand it to the external engine; test
/// implementations record it.
pub trait Compositor: Send + Sync {
    fn submit(&self, layout: &MixLayout) -> Result<(), CompositorError>;
}

/// Something that happened to the session, as reported by the hosting engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A participant started publishing video.
    Joined(Uid),
    /// A participant stopped publishing video.
    Left(Uid),
    /// Recompute without a roster change (e.g. after compositor reattach).
    Refresh,
    /// Change (or clear) the highlighted participant.
    HighlightChanged(Option<HighlightTarget>),
    /// Stop consuming events and return from the control loop.
    Shutdown,
}

/// Source of session events.
///
/// Infrastructure implementations pump an engine callback channel; test
/// implementations replay a script.
#[async_trait]
pub trait SessionEventSource: Send {
    /// Next event, or `None` when the source is exhausted/closed.
    async fn next_event(&mut self) -> Option<SessionEvent>;
}

/// Drives the session: events in, layouts out.
pub struct RecorderController {
    roster: ParticipantRoster,
    pipeline: LayoutPipeline,
    compositor: Arc<dyn Compositor>,
    recomputations: u64,
}

impl RecorderController {
    pub fn new(pipeline: LayoutPipeline, compositor: Arc<dyn Compositor>) -> Self {
        Self {
            roster: ParticipantRoster::new(),
            pipeline,
            compositor,
            recomputations: 0,
        }
    }

    pub fn roster(&self) -> &ParticipantRoster {
        &self.roster
    }

    /// Total recomputations performed so far.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Consumes events until the source closes or a shutdown event arrives.
    pub async fn run<S: SessionEventSource>(&mut self, source: &mut S) {
        while let Some(event) = source.next_event().await {
            if !self.handle_event(event) {
                break;
            }
        }
        info!(
            recomputations = self.recomputations,
            "control loop finished"
        );
    }

    /// Applies one event.  Returns `false` when the loop should stop.
    pub fn handle_event(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Joined(uid) => {
                if self.roster.join(uid) {
                    info!(uid, participants = self.roster.len(), "participant joined");
                    self.recompute();
                }
            }
            SessionEvent::Left(uid) => {
                if self.roster.leave(uid) {
                    info!(uid, participants = self.roster.len(), "participant left");
                    self.recompute();
                }
            }
            SessionEvent::Refresh => self.recompute(),
            SessionEvent::HighlightChanged(target) => {
                self.pipeline.set_highlight(target);
                self.recompute();
            }
            SessionEvent::Shutdown => {
                info!("shutdown event received");
                return false;
            }
        }
        true
    }

    /// One snapshot → compute → submit cycle.  The layout value lives exactly
    /// as long as this call.
    fn recompute(&mut self) {
        let snapshot = self.roster.snapshot();
        let layout = self.pipeline.compute(&snapshot);
        self.recomputations += 1;

        if let Err(e) = self.compositor.submit(&layout) {
            // Submission failure leaves the previous canvas on screen; the
            // next roster change will retry with a fresh layout.
            error!(error = %e, "layout submission failed");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
