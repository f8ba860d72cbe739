//! Test helpers shared by unit and integration tests.
//!
//! ```ignore
//! use ism_client::testing::load_fixture;
//!
//! let fixture = load_fixture("managed_indices/list.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the crate's `fixtures/` directory.
///
/// # Panics
///
/// Panics if the file is missing or is not valid JSON.
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Wrap a payload in a successful `{ok: true, response}` envelope.
pub fn ok_envelope(response: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "ok": true, "response": response })
}

/// A failed `{ok: false, error}` envelope.
pub fn error_envelope(message: &str) -> serde_json::Value {
    serde_json::json!({ "ok": false, "error": message })
}
