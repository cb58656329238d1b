//! Scripted event source for unit testing.
//!
//! Replays a fixed list of [`SessionEvent`]s, then reports the source as
//! closed; no channel plumbing needed in controller tests.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::application::control_loop::{SessionEvent, SessionEventSource};

/// A [`SessionEventSource`] that yields pre-scripted events.
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    events: VecDeque<SessionEvent>,
}

impl ScriptedEventSource {
    pub fn new(events: impl IntoIterator<Item = SessionEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Events not yet consumed.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl SessionEventSource for ScriptedEventSource {
    async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_source_replays_and_then_closes() {
        let mut source =
            ScriptedEventSource::new([SessionEvent::Joined(5), SessionEvent::Shutdown]);

        assert_eq!(source.next_event().await, Some(SessionEvent::Joined(5)));
        assert_eq!(source.next_event().await, Some(SessionEvent::Shutdown));
        assert_eq!(source.next_event().await, None);
        assert_eq!(source.remaining(), 0);
    }
}
