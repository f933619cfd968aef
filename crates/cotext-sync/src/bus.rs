//! The broadcast bus connecting tabs.
//!
//! [`Bus`] is the only thing a [`Synchronizer`](crate::Synchronizer) needs
//! to publish. [`LocalBus`] is an in-process implementation on top of a
//! tokio broadcast channel: every attached tab sees every frame except its
//! own. Delivery is at-least-once per subscriber only while the subscriber
//! keeps up; a tab that falls more than `capacity` frames behind loses the
//! oldest ones.

use cotext_common::{SyncError, TabId};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::{debug, warn};

use crate::protocol::ChannelMessage;

/// Something a tab can post messages on.
pub trait Bus {
    fn post(&self, message: &ChannelMessage) -> Result<(), SyncError>;
}

/// A frame as it travels on a [`LocalBus`].
#[derive(Debug, Clone)]
pub struct Envelope {
    pub origin: TabId,
    /// JSON-encoded [`ChannelMessage`].
    pub payload: String,
}

// ---------------------------------------------------------------------------
// LocalBus
// ---------------------------------------------------------------------------

/// In-process broadcast hub shared by all tabs on one channel name.
#[derive(Clone)]
pub struct LocalBus {
    name: String,
    sender: broadcast::Sender<Envelope>,
}

impl LocalBus {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            name: name.into(),
            sender,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a new tab. The port posts on behalf of the tab and the inbox
    /// yields every frame posted by other tabs from now on.
    pub fn connect(&self) -> (BusPort, BusInbox) {
        let tab = TabId::new();
        debug!(channel = %self.name, tab = %tab, "Tab attached");
        let port = BusPort {
            tab,
            sender: self.sender.clone(),
        };
        let inbox = BusInbox {
            tab,
            receiver: self.sender.subscribe(),
        };
        (port, inbox)
    }

    /// Number of attached inboxes.
    pub fn listeners(&self) -> usize {
        self.sender.receiver_count()
    }
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// Sending half of a tab's attachment.
#[derive(Clone)]
pub struct BusPort {
    tab: TabId,
    sender: broadcast::Sender<Envelope>,
}

impl BusPort {
    pub fn tab(&self) -> TabId {
        self.tab
    }
}

impl Bus for BusPort {
    fn post(&self, message: &ChannelMessage) -> Result<(), SyncError> {
        let envelope = Envelope {
            origin: self.tab,
            payload: message.encode()?,
        };
        // Posting into an empty channel is fine; nobody is listening yet.
        if self.sender.send(envelope).is_err() {
            debug!(tab = %self.tab, kind = message.kind(), "Posted with no listeners");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Inbox
// ---------------------------------------------------------------------------

/// Receiving half of a tab's attachment.
pub struct BusInbox {
    tab: TabId,
    receiver: broadcast::Receiver<Envelope>,
}

impl BusInbox {
    pub fn tab(&self) -> TabId {
        self.tab
    }

    /// Wait for the next frame from another tab. Returns `None` once every
    /// port and the hub are gone.
    pub async fn recv(&mut self) -> Option<ChannelMessage> {
        loop {
            match self.receiver.recv().await {
                Ok(envelope) => {
                    if let Some(message) = self.accept(envelope) {
                        return Some(message);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(tab = %self.tab, skipped, "Inbox lagged, frames lost");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`recv`](Self::recv). `Ok(None)` means
    /// nothing is pending right now.
    pub fn try_recv(&mut self) -> Result<Option<ChannelMessage>, SyncError> {
        loop {
            match self.receiver.try_recv() {
                Ok(envelope) => {
                    if let Some(message) = self.accept(envelope) {
                        return Ok(Some(message));
                    }
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(tab = %self.tab, skipped, "Inbox lagged, frames lost");
                }
                Err(TryRecvError::Closed) => return Err(SyncError::BusClosed),
            }
        }
    }

    /// Drop own frames and frames that do not decode.
    fn accept(&self, envelope: Envelope) -> Option<ChannelMessage> {
        if envelope.origin == self.tab {
            return None;
        }
        match ChannelMessage::decode(&envelope.payload) {
            Ok(message) => Some(message),
            Err(e) => {
                warn!(tab = %self.tab, from = %envelope.origin, error = %e, "Dropping undecodable frame");
                None
            }
        }
    }
}
