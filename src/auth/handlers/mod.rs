//! HTTP handlers for authentication and profiles.

pub mod login;
pub mod me;
pub mod profile;
pub mod register;
pub mod types;

pub use login::login;
pub use me::get_me;
pub use profile::{search_users, update_profile};
pub use register::register;
