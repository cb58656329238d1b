//! # gridcast-core
//!
//! Compositing-layout engine for a multi-party video-recording session: given
//! the currently active participants, compute the deterministic arrangement
//! of normalized display regions that a downstream compositor renders into
//! one canvas.
//!
//! This crate is the pure heart of gridcast.  It has no async code and no I/O
//! beyond `tracing` diagnostics; the hosting controller lives in
//! `gridcast-recorder`.
//!
//! The crate defines:
//!
//! - **`domain`** – the value types: [`Canvas`], [`Region`], [`MixLayout`],
//!   [`LayoutMode`].
//!
//! - **`subscribe`** – subscriber set resolution: filtering the active
//!   participant snapshot through the session's subscription policy, and
//!   resolving the highlight target to a uid.
//!
//! - **`geometry`** – the three algorithm families (default grid, best-fit
//!   grids, vertical-presentation tiers), each a stateless pure function.
//!
//! - **`compose`** – layout assembly: one call producing the [`MixLayout`]
//!   value the compositor consumes.
//!
//! - **`directory`** – the uid ↔ account translation port used by
//!   account-addressed sessions.

pub mod compose;
pub mod directory;
pub mod domain;
pub mod geometry;
pub mod subscribe;

// Re-export the most-used types at the crate root so callers can write
// `gridcast_core::MixLayout` instead of `gridcast_core::domain::mix::MixLayout`.
pub use compose::{compose_layout, MixProfile};
pub use directory::{Directory, StaticDirectory};
pub use domain::mix::{
    Canvas, LayoutMode, MixLayout, Region, RenderMode, Uid, BACKGROUND_COLOR,
};
pub use subscribe::{
    resolve_display_set, resolve_highlight, Addressing, HighlightTarget, SubscriberPolicy,
};
