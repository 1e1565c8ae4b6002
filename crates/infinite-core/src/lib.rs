//! iNFINITE core: transport-agnostic error types and the JSON wire shapes of
//! every endpoint the service exposes.
//!
//! This crate carries no HTTP or runtime dependencies so the response
//! contracts can be shared by the gateway, its tests, and external tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `InfiniteError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, InfiniteError};
