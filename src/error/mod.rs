//! API error taxonomy and HTTP response mapping.

pub mod conversion;
pub mod types;

pub use types::ApiError;
