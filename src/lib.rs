//! StudyLink backend library
//!
//! REST backend for a study collaboration app: registration and login with
//! bcrypt-hashed credentials and JWT sessions, profile management, a
//! connection-request social graph, user blocking, direct messaging gated on
//! blocks, and shared chat rooms.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, router assembly
//! - **`routes`** - HTTP route configuration
//! - **`auth`** - Registration, login, profiles, JWT sessions
//! - **`middleware`** - Bearer-token identity extraction
//! - **`connections`** - Connection request state machine
//! - **`blocks`** - Block relations
//! - **`messaging`** - Direct messages and conversation queries
//! - **`rooms`** - Chat rooms and room messages
//! - **`realtime`** - In-process broadcast channels for message fan-out
//! - **`error`** - API error taxonomy and HTTP mapping
//!
//! All persistent state lives in the SQLite database behind an explicitly
//! passed `sqlx::SqlitePool`; handlers hold no long-lived in-memory copies
//! of persisted entities and re-read current state on every operation.

pub mod auth;
pub mod blocks;
pub mod connections;
pub mod error;
pub mod messaging;
pub mod middleware;
pub mod realtime;
pub mod rooms;
pub mod routes;
pub mod server;
