//! Top-level facade crate for the iNFINITE AI service.
//!
//! Re-exports the core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use infinite_core::*;
}

pub mod gateway {
    pub use infinite_gateway::*;
}
