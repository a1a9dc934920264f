//! Authentication and identity: user records, bcrypt password hashing,
//! JWT session tokens, and the register/login/profile handlers.

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{get_me, login, register, search_users, update_profile};
