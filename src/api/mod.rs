//! User directory API client and types.
//!
//! This module provides the interface for fetching user batches from the
//! remote directory service.

mod client;
mod error;
mod types;

pub use client::{UserClient, DEFAULT_BATCH_SIZE};
pub use error::ApiError;
pub use types::UserRecord;
