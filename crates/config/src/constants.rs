//! Centralized constants for the ISM TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `max_retries`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default OpenSearch Dashboards port.
pub const DEFAULT_DASHBOARDS_PORT: u16 = 5601;

// =============================================================================
// Managed Indices Defaults
// =============================================================================

/// Default page size for the managed indices table.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Page sizes offered by the managed indices table and the preview grid.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [5, 10, 20, 50];

/// Window in which repeated refresh requests are collapsed.
pub const REFRESH_DEBOUNCE_MS: u64 = 500;

/// How long the data stream filter options stay cached.
pub const DATA_STREAMS_CACHE_TTL_SECS: u64 = 60;

// =============================================================================
// Transform Preview Defaults
// =============================================================================

/// Number of sample documents fetched for the transform preview grid.
pub const DEFAULT_SAMPLE_DATA_SIZE: u64 = 50;

/// Initial page size of the transform preview grid.
pub const DEFAULT_PREVIEW_PAGE_SIZE: u64 = 10;

/// Number of preview columns visible before the user picks any.
pub const DEFAULT_PREVIEW_VISIBLE_COLUMNS: usize = 5;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 100;
