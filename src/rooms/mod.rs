//! Chat rooms: named group spaces with explicit membership. Posting and
//! reading room messages requires membership.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{create_room, join_room, list_room_messages, list_rooms, post_room_message};
