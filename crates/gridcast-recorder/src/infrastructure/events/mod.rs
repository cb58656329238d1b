//! Session event sources.
//!
//! The external engine reports joins/leaves through callbacks; the hosting
//! process forwards them into a tokio mpsc channel whose receiving half is a
//! [`ChannelEventSource`].  Tests use [`mock::ScriptedEventSource`].

pub mod mock;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::control_loop::{SessionEvent, SessionEventSource};

/// Event source backed by a tokio mpsc channel.
pub struct ChannelEventSource {
    rx: mpsc::Receiver<SessionEvent>,
}

impl ChannelEventSource {
    /// Creates the channel pair: the sender goes wherever engine callbacks
    /// land, the source goes to the controller.
    pub fn channel(capacity: usize) -> (mpsc::Sender<SessionEvent>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self { rx })
    }
}

#[async_trait]
impl SessionEventSource for ChannelEventSource {
    async fn next_event(&mut self) -> Option<SessionEvent> {
        self.rx.recv().await
    }
}
