//! Centralized constants for the Cloudera Manager client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default TCP connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default Cloudera Manager API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default Cloudera Manager web/API port.
pub const DEFAULT_CM_PORT: u16 = 7180;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Timeout Configuration Bounds
// =============================================================================

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Command Polling Defaults
// =============================================================================

/// Default delay between command status checks in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

/// Default upper bound on a single command wait in seconds (30 minutes).
pub const DEFAULT_MAX_WAIT_SECS: u64 = 1800;

/// Maximum allowed poll interval in seconds (10 minutes).
pub const MAX_POLL_INTERVAL_SECS: u64 = 600;
