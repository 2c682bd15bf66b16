//! Default configuration values shared across boardkit crates.

/// Default board API endpoint.
pub const API_BASE_URL: &str = "http://localhost:8080";

/// Default page size for board listing.
pub const PAGE_SIZE: u32 = 10;

/// Timeout for API requests (seconds). Save/update requests carry
/// attachment bytes, so this is deliberately generous.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;
