//! Shared constants for integration tests.
//!
//! Integration tests are compiled as separate crates (one per top-level file in
//! `tests/`). Placing shared constants under `tests/common/` avoids creating an
//! additional integration test binary while still allowing reuse via:
//!
//! ```rust
//! #[path = "common/test_constants.rs"]
//! mod test_constants;
//! ```

/// Region used for instance payloads throughout the suite.
pub const DEFAULT_REGION: &str = "ewr";

/// Smallest shared-CPU plan, used for instance payloads throughout the suite.
pub const DEFAULT_PLAN: &str = "vc2-1c-1gb";

/// Bearer token sent by test clients.
pub const TEST_TOKEN: &str = "test-token";
