//! Shared types for the camp-cloud booking service
//!
//! Wire/domain models and the unified error system used by the API surface.
//! Database derives are gated behind the `db` feature so client-side crates
//! can depend on the types without pulling in sqlx.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
