//! Direct messaging between identities, gated on block relations.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{list_conversation, list_conversation_peers, send_message};
