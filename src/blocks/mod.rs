//! Block relations: directional suppression of messaging between two
//! identities. Blocking is directional in storage, but the messaging gate
//! checks both directions.

pub mod db;
pub mod handlers;

pub use handlers::block_user;
