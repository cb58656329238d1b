//! LayoutPipeline: one recomputation from roster snapshot to submitted-ready
//! [`MixLayout`].
//!
//! The pipeline owns the session's fixed compositing parameters (canvas,
//! mode, subscription policy, addressing) plus the one mutable knob, the
//! highlight target, and wires them through the engine in order: resolve the
//! highlight, resolve the display set, compose the layout.  Each call is
//! synchronous and total; the produced layout is handed back by value.

use std::sync::Arc;

use gridcast_core::{
    compose_layout, resolve_display_set, resolve_highlight, Addressing, Directory,
    HighlightTarget, MixLayout, MixProfile, SubscriberPolicy, Uid,
};
use tracing::info;

/// Stateless-per-call layout computation with injected directory access.
pub struct LayoutPipeline {
    profile: MixProfile,
    policy: SubscriberPolicy,
    addressing: Addressing,
    highlight: Option<HighlightTarget>,
    directory: Arc<dyn Directory + Send + Sync>,
}

impl LayoutPipeline {
    pub fn new(
        profile: MixProfile,
        policy: SubscriberPolicy,
        addressing: Addressing,
        highlight: Option<HighlightTarget>,
        directory: Arc<dyn Directory + Send + Sync>,
    ) -> Self {
        Self {
            profile,
            policy,
            addressing,
            highlight,
            directory,
        }
    }

    pub fn profile(&self) -> &MixProfile {
        &self.profile
    }

    /// Replaces the highlight target; takes effect on the next computation.
    pub fn set_highlight(&mut self, target: Option<HighlightTarget>) {
        info!(?target, "highlight target updated");
        self.highlight = target;
    }

    /// Computes the layout for one roster snapshot.
    pub fn compute(&self, snapshot: &[Uid]) -> MixLayout {
        let highlight = resolve_highlight(self.highlight.as_ref(), &*self.directory);
        let displayed = resolve_display_set(
            snapshot,
            &self.policy,
            self.addressing,
            self.profile.mode,
            &*self.directory,
            highlight,
        );
        let layout = compose_layout(&self.profile, &displayed, highlight);

        info!(
            active = snapshot.len(),
            displayed = displayed.len(),
            regions = layout.regions.len(),
            mode = ?self.profile.mode,
            "layout recomputed"
        );
        layout
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
