//! Query state of the managed indices view and its location string.
//!
//! The location string is the terminal counterpart of the dashboard URL's
//! query string: `from`, `size`, `search`, `sortField`, `sortDirection`,
//! and `showDataStreams`.
//!
//! Invariants:
//! - `page_size` is always one of `PAGE_SIZE_OPTIONS`.
//! - Changing the search text resets `page_index` to 0.
//! - Malformed or missing location fields fall back to defaults.

use ism_client::models::{ManagedIndicesQuery, SortDirection, SortField};
use ism_config::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use url::form_urlencoded;

use super::filter::RecordFilters;

const KEY_FROM: &str = "from";
const KEY_SIZE: &str = "size";
const KEY_SEARCH: &str = "search";
const KEY_SORT_FIELD: &str = "sortField";
const KEY_SORT_DIRECTION: &str = "sortDirection";
const KEY_SHOW_DATA_STREAMS: &str = "showDataStreams";

/// Search, sort, data stream toggle, and pagination of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub show_data_streams: bool,
    pub page_index: u64,
    pub page_size: u64,
}

/// The part of [`QueryState`] whose change requires a refetch through the debounce.
///
/// Pagination is excluded; page changes fetch directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticQuery {
    pub search_text: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub show_data_streams: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            show_data_streams: false,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn is_valid_page_size(size: u64) -> bool {
    PAGE_SIZE_OPTIONS.contains(&size)
}

impl QueryState {
    /// Default state with a custom initial page size.
    ///
    /// Sizes outside the page size options fall back to the default.
    pub fn with_page_size(page_size: u64) -> Self {
        Self {
            page_size: if is_valid_page_size(page_size) {
                page_size
            } else {
                DEFAULT_PAGE_SIZE
            },
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page_index = 0;
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.sort_field = field;
        self.sort_direction = direction;
    }

    pub fn toggle_data_streams(&mut self) {
        self.show_data_streams = !self.show_data_streams;
    }

    pub fn set_page_index(&mut self, page_index: u64) {
        self.page_index = page_index;
    }

    /// Change the page size and go back to the first page.
    ///
    /// Returns `false` and leaves the state untouched for unsupported sizes.
    pub fn set_page_size(&mut self, page_size: u64) -> bool {
        if !is_valid_page_size(page_size) {
            return false;
        }
        self.page_size = page_size;
        self.page_index = 0;
        true
    }

    /// Offset of the first record on the current page.
    pub fn from(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` records (at least one).
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn semantic(&self) -> SemanticQuery {
        SemanticQuery {
            search_text: self.search_text.clone(),
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            show_data_streams: self.show_data_streams,
        }
    }

    /// Encode as a location query string.
    pub fn serialize(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(KEY_FROM, &self.from().to_string())
            .append_pair(KEY_SIZE, &self.page_size.to_string())
            .append_pair(KEY_SEARCH, &self.search_text)
            .append_pair(KEY_SORT_FIELD, self.sort_field.as_str())
            .append_pair(KEY_SORT_DIRECTION, self.sort_direction.as_str())
            .append_pair(KEY_SHOW_DATA_STREAMS, &self.show_data_streams.to_string())
            .finish()
    }

    /// Decode a location query string, with or without a leading `?`.
    pub fn deserialize(location: &str) -> Self {
        let location = location.strip_prefix('?').unwrap_or(location);
        let mut state = Self::default();
        let mut from: Option<u64> = None;

        for (key, value) in form_urlencoded::parse(location.as_bytes()) {
            match key.as_ref() {
                KEY_FROM => from = value.parse().ok(),
                KEY_SIZE => {
                    if let Some(size) = value.parse::<u64>().ok().filter(|s| is_valid_page_size(*s)) {
                        state.page_size = size;
                    }
                }
                KEY_SEARCH => state.search_text = value.into_owned(),
                KEY_SORT_FIELD => {
                    state.sort_field = SortField::parse(&value).unwrap_or_default();
                }
                KEY_SORT_DIRECTION => {
                    state.sort_direction = SortDirection::parse(&value).unwrap_or_default();
                }
                KEY_SHOW_DATA_STREAMS => state.show_data_streams = value == "true",
                _ => {}
            }
        }

        state.page_index = from.unwrap_or(0) / state.page_size;
        state
    }

    /// Build the backend request for the current page.
    pub fn to_request(&self, filters: &RecordFilters) -> ManagedIndicesQuery {
        ManagedIndicesQuery {
            from: self.from(),
            size: self.page_size,
            search: self.search_text.clone(),
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            show_data_streams: self.show_data_streams,
            terms: filters.terms.clone(),
            indices: filters.indices.clone(),
            data_streams: filters.data_streams.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_search_resets_page() {
        let mut state = QueryState {
            page_index: 3,
            ..Default::default()
        };
        state.set_search("logs");
        assert_eq!(state.page_index, 0);
        assert_eq!(state.search_text, "logs");
    }

    #[test]
    fn test_set_sort_keeps_page() {
        let mut state = QueryState {
            page_index: 2,
            ..Default::default()
        };
        state.set_sort(SortField::PolicyId, SortDirection::Asc);
        assert_eq!(state.page_index, 2);
    }

    #[test]
    fn test_serialize_layout() {
        let state = QueryState {
            search_text: "logs app".to_string(),
            page_index: 2,
            page_size: 10,
            ..Default::default()
        };
        assert_eq!(
            state.serialize(),
            "from=20&size=10&search=logs+app&sortField=index&sortDirection=desc&showDataStreams=false"
        );
    }

    #[test]
    fn test_deserialize_falls_back_to_defaults() {
        let state = QueryState::deserialize("?size=7&sortField=bogus&sortDirection=up&from=abc");
        assert_eq!(state, QueryState::default());
        assert_eq!(QueryState::deserialize(""), QueryState::default());
    }

    #[test]
    fn test_deserialize_reads_fields() {
        let state = QueryState::deserialize(
            "from=100&size=50&search=data_streams%3Ametrics&sortField=dataStream&sortDirection=asc&showDataStreams=true",
        );
        assert_eq!(state.page_index, 2);
        assert_eq!(state.page_size, 50);
        assert_eq!(state.search_text, "data_streams:metrics");
        assert_eq!(state.sort_field, SortField::DataStream);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert!(state.show_data_streams);
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        let mut state = QueryState {
            page_index: 4,
            ..Default::default()
        };
        assert!(!state.set_page_size(13));
        assert_eq!(state.page_index, 4);
        assert!(state.set_page_size(50));
        assert_eq!(state.page_index, 0);
        assert_eq!(QueryState::with_page_size(13).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_count() {
        let state = QueryState::default();
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_count(20), 1);
        assert_eq!(state.page_count(21), 2);
    }
}
