/**
 * Conversation Broadcast Channels
 *
 * Manages per-conversation broadcast channels for in-process message
 * fan-out. A conversation is identified by the unordered pair of the two
 * participants, so both directions of a DM exchange share one channel and
 * there is no cross-talk between conversations.
 *
 * Transport wiring (websockets, SSE) is outside this crate's scope; the
 * channels are the seam a transport layer would subscribe on.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::messaging::types::Message;

/// Normalize two participant ids into an order-independent channel key.
fn pair_key(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Per-conversation broadcast channels.
#[derive(Clone)]
pub struct ConversationBroadcast {
    channels: Arc<Mutex<HashMap<(Uuid, Uuid), broadcast::Sender<Message>>>>,
}

impl ConversationBroadcast {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get or create the broadcast sender for a conversation.
    pub fn sender(&self, a: Uuid, b: Uuid) -> broadcast::Sender<Message> {
        let mut channels = self.channels.lock().expect("broadcast map lock poisoned");
        channels
            .entry(pair_key(a, b))
            .or_insert_with(|| broadcast::channel(100).0)
            .clone()
    }

    /// Subscribe to a conversation's messages.
    pub fn subscribe(&self, a: Uuid, b: Uuid) -> broadcast::Receiver<Message> {
        self.sender(a, b).subscribe()
    }

    /// Publish a message to its conversation's subscribers, if any.
    pub fn publish(&self, message: Message) {
        let key = pair_key(message.sender_id, message.receiver_id);
        if let Some(sender) = self
            .channels
            .lock()
            .expect("broadcast map lock poisoned")
            .get(&key)
        {
            // Ignore the error case: no live receivers.
            let _ = sender.send(message);
        }
    }

    /// Drop channels with no remaining subscribers.
    pub fn cleanup_inactive_channels(&self) {
        self.channels
            .lock()
            .expect("broadcast map lock poisoned")
            .retain(|_, sender| sender.receiver_count() > 0);
    }

    /// Subscriber count for a conversation (for debugging).
    pub fn subscriber_count(&self, a: Uuid, b: Uuid) -> usize {
        self.channels
            .lock()
            .expect("broadcast map lock poisoned")
            .get(&pair_key(a, b))
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }
}

impl Default for ConversationBroadcast {
    fn default() -> Self {
        Self::new()
    }
}
