//! Directory port: participant identifier ↔ account name translation.
//!
//! Sessions joined by account name address participants by human-readable
//! account rather than numeric uid.  The hosting controller injects whatever
//! directory the external engine exposes; the engine only consumes lookups
//! during subscriber resolution in account-addressed mode.
//!
//! Lookup failure is an expected outcome (a participant may not have
//! registered an account), so both directions return `Option` rather than an
//! error type.

use std::collections::HashMap;

use crate::domain::mix::Uid;

/// Identifier ↔ account translation service.
///
/// Infrastructure implementations delegate to the external engine; tests use
/// [`StaticDirectory`].
pub trait Directory {
    /// Resolves a participant's account name.  `None` when the participant
    /// has no (or an empty) account.
    fn account_of(&self, uid: Uid) -> Option<String>;

    /// Resolves an account name back to a participant identifier.  `None`
    /// when the account is unknown.
    fn uid_of(&self, account: &str) -> Option<Uid>;
}

/// In-memory [`Directory`] backed by a uid → account map.
///
/// Used by tests and as the config-seeded stand-in until an engine-backed
/// directory is wired in by the hosting process.
#[derive(Debug, Default, Clone)]
pub struct StaticDirectory {
    accounts: HashMap<Uid, String>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the account name for a participant.
    ///
    /// Empty account names are treated as "no account" and ignored, matching
    /// how zero-length lookups behave upstream.
    pub fn insert(&mut self, uid: Uid, account: impl Into<String>) {
        let account = account.into();
        if !account.is_empty() {
            self.accounts.insert(uid, account);
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Directory for StaticDirectory {
    fn account_of(&self, uid: Uid) -> Option<String> {
        self.accounts.get(&uid).cloned()
    }

    fn uid_of(&self, account: &str) -> Option<Uid> {
        self.accounts
            .iter()
            .find(|(_, name)| name.as_str() == account)
            .map(|(uid, _)| *uid)
    }
}
