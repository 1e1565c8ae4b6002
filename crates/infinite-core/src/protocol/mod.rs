//! Wire shapes (JSON) for every HTTP endpoint.
//!
//! - `ops`: index, liveness and readiness bodies.
//! - `predict`: prediction result and the error envelope.
//!
//! All types derive both `Serialize` and `Deserialize` so the gateway and any
//! client (tests included) agree on one definition of each body.

pub mod ops;
pub mod predict;

use chrono::{SecondsFormat, Utc};

/// Service version reported by `/`, `/health` and the placeholder model.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Human-readable service name reported by `/`.
pub const SERVICE_NAME: &str = "iNFINITE AI 2025";

/// Current UTC time as an ISO-8601 / RFC 3339 string (`2025-01-01T00:00:00.000000Z`).
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
