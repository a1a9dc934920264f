//! In-process real-time fan-out for direct messages.

pub mod broadcast;

pub use broadcast::ConversationBroadcast;
