//! Session lifecycle and participant roster bookkeeping.
//!
//! The external media engine owns the channel; this module tracks what the
//! controller needs locally: which session we joined, how its participants
//! are addressed, and the arrival-ordered roster of active participants.
//!
//! # Roster snapshots
//!
//! The roster is mutated by the controller's event handling while layout
//! recomputation reads it.  [`ParticipantRoster::snapshot`] clones the
//! arrival-ordered uid list so a recomputation operates on a coherent
//! point-in-time copy and never iterates the live collection.

use std::collections::HashSet;

use gridcast_core::{Addressing, Uid};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors from session lifecycle transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `join` was called while a session is already active.
    #[error("session already joined")]
    AlreadyJoined,

    /// An operation required an active session.
    #[error("no active session")]
    NotJoined,
}

/// Where the session stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created, not yet joined to a channel.
    Idle,
    /// Joined; participants flow and layouts recompute.
    Joined,
    /// Left the channel (normally or on engine error); terminal.
    Stopped,
}

/// One recording session's identity and lifecycle.
///
/// The underlying engine reports join/leave success through its own status
/// codes; this type only guards against out-of-order transitions locally.
#[derive(Debug, Clone)]
pub struct RecordingSession {
    session_id: Uuid,
    channel: String,
    addressing: Addressing,
    phase: SessionPhase,
}

impl RecordingSession {
    pub fn new(channel: impl Into<String>, addressing: Addressing) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            channel: channel.into(),
            addressing,
            phase: SessionPhase::Idle,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Marks the session joined.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyJoined`] unless the session is idle.
    pub fn join(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Idle {
            return Err(SessionError::AlreadyJoined);
        }
        self.phase = SessionPhase::Joined;
        info!(session = %self.session_id, channel = %self.channel, "session joined");
        Ok(())
    }

    /// Leaves the channel normally.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotJoined`] if no session is active.
    pub fn leave(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Joined {
            return Err(SessionError::NotJoined);
        }
        self.phase = SessionPhase::Stopped;
        info!(session = %self.session_id, "session left");
        Ok(())
    }

    /// Terminal stop after an engine-reported failure.  Valid in any phase.
    pub fn stop_on_error(&mut self) {
        self.phase = SessionPhase::Stopped;
        info!(session = %self.session_id, "session stopped on error");
    }
}

/// Arrival-ordered set of active participants.
///
/// Order is what the geometry algorithms tile by, so joins append and leaves
/// close the gap without reshuffling the remaining order.  Membership is
/// tracked separately for O(1) duplicate-join checks.
#[derive(Debug, Default)]
pub struct ParticipantRoster {
    order: Vec<Uid>,
    members: HashSet<Uid>,
}

impl ParticipantRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a participant.  Returns `false` (and changes nothing) when the
    /// uid is already present.
    pub fn join(&mut self, uid: Uid) -> bool {
        if !self.members.insert(uid) {
            return false;
        }
        self.order.push(uid);
        true
    }

    /// Removes a participant.  Returns `false` when the uid was not present.
    pub fn leave(&mut self, uid: Uid) -> bool {
        if !self.members.remove(&uid) {
            return false;
        }
        self.order.retain(|&u| u != uid);
        true
    }

    pub fn contains(&self, uid: Uid) -> bool {
        self.members.contains(&uid)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Clones the current arrival-ordered uid list.
    ///
    /// Layout computation works exclusively on this owned copy.
    pub fn snapshot(&self) -> Vec<Uid> {
        self.order.clone()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
