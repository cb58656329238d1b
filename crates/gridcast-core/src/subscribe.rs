//! Subscriber set resolution: which participants get a region.
//!
//! Turns the raw active-participant list plus the session's subscription
//! policy into the ordered set of uids the geometry algorithms will place.
//! Arrival order is preserved throughout: the compositor's stacking and the
//! grid cell assignment both follow it.
//!
//! The input slice is an owned snapshot taken by the caller.  The live
//! participant roster belongs to the hosting controller and may be mutated by
//! its event handling at any time; resolution never iterates that shared
//! collection directly.

use std::collections::HashSet;

use tracing::debug;

use crate::directory::Directory;
use crate::domain::mix::{LayoutMode, Uid};

/// How participants are addressed for subscription and highlight lookup.
///
/// Mirrors how the session was joined: numeric uid, or registered account
/// name with uids resolved through the [`Directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    Numeric,
    Account,
}

/// The participant designated for enlarged primary placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightTarget {
    /// Direct numeric identifier.  Zero means "unset" upstream and resolves
    /// to no highlight.
    Uid(Uid),
    /// Account name, resolved through the directory at recompute time.
    Account(String),
}

/// Subscription policy configured at session start.
#[derive(Debug, Clone, Default)]
pub struct SubscriberPolicy {
    /// When set, every active participant is displayed and the allow-lists
    /// are ignored.
    pub auto_subscribe: bool,
    /// Explicitly subscribed numeric identifiers.
    pub allowed_uids: HashSet<Uid>,
    /// Explicitly subscribed account names (account-addressed sessions).
    pub allowed_accounts: HashSet<String>,
}

impl SubscriberPolicy {
    /// Policy that displays every active participant.
    pub fn auto() -> Self {
        Self {
            auto_subscribe: true,
            ..Self::default()
        }
    }
}

/// Resolves the configured highlight target to a participant identifier.
///
/// Returns `None` for an unset target, a zero uid, or an account name the
/// directory cannot resolve, each of which means "no primary region" to the
/// geometry algorithms.
pub fn resolve_highlight(
    target: Option<&HighlightTarget>,
    directory: &dyn Directory,
) -> Option<Uid> {
    match target {
        None | Some(HighlightTarget::Uid(0)) => None,
        Some(HighlightTarget::Uid(uid)) => Some(*uid),
        Some(HighlightTarget::Account(account)) => directory.uid_of(account),
    }
}

/// Filters a participant snapshot down to the displayed subscriber set.
///
/// A participant is kept when auto-subscribe is on, its uid is in the uid
/// allow-list, or (account addressing) its resolved account name is in the
/// account allow-list.
///
/// Account-addressed vertical-presentation sessions carry one extra rule: a
/// participant whose account fails to resolve is dropped unless a highlight
/// uid was resolved.  This preserves the upstream engine's observable
/// behaviour; it reads as a guard against losing the highlighted participant
/// when account resolution is flaky, and is a quirk rather than a rule other
/// code should rely on.
pub fn resolve_display_set(
    snapshot: &[Uid],
    policy: &SubscriberPolicy,
    addressing: Addressing,
    mode: LayoutMode,
    directory: &dyn Directory,
    highlight: Option<Uid>,
) -> Vec<Uid> {
    snapshot
        .iter()
        .copied()
        .filter(|&uid| {
            let account = match addressing {
                Addressing::Account => directory.account_of(uid),
                Addressing::Numeric => None,
            };

            let permitted = policy.auto_subscribe
                || policy.allowed_uids.contains(&uid)
                || account
                    .as_deref()
                    .is_some_and(|name| policy.allowed_accounts.contains(name));
            if !permitted {
                return false;
            }

            if addressing == Addressing::Account
                && mode == LayoutMode::VerticalPresentation
                && account.is_none()
                && highlight.is_none()
            {
                debug!(uid, "dropping participant: account unresolved and no highlight set");
                return false;
            }

            true
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
