//! Connection request state machine.
//!
//! A connection request is a directed proposal from one identity to another
//! to become mutually linked. Lifecycle: `pending -> accepted` (terminal) or
//! `pending -> deleted` (rejection). There is no transition out of
//! `accepted`, and at most one active request may exist per unordered pair
//! of identities, enforced by a unique index at the storage layer so the
//! guarantee holds under concurrent duplicate requests.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{
    accept_connection_request, list_connections, list_friends, reject_connection_request,
    send_connection_request,
};
