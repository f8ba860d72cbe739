//! Property tests for the managed indices location string.

use ism_client::models::{SortDirection, SortField};
use ism_config::constants::PAGE_SIZE_OPTIONS;
use ism_tui::managed_indices::QueryState;
use proptest::prelude::*;

fn query_state() -> impl Strategy<Value = QueryState> {
    (
        ".{0,40}",
        prop::sample::select(SortField::ALL.to_vec()),
        prop::bool::ANY,
        prop::bool::ANY,
        0u64..500,
        prop::sample::select(PAGE_SIZE_OPTIONS.to_vec()),
    )
        .prop_map(
            |(search_text, sort_field, ascending, show_data_streams, page_index, page_size)| {
                QueryState {
                    search_text,
                    sort_field,
                    sort_direction: if ascending {
                        SortDirection::Asc
                    } else {
                        SortDirection::Desc
                    },
                    show_data_streams,
                    page_index,
                    page_size,
                }
            },
        )
}

proptest! {
    #[test]
    fn location_round_trips(state in query_state()) {
        let decoded = QueryState::deserialize(&state.serialize());
        prop_assert_eq!(decoded, state);
    }

    #[test]
    fn arbitrary_locations_decode_to_valid_state(location in ".{0,80}") {
        let state = QueryState::deserialize(&location);
        prop_assert!(PAGE_SIZE_OPTIONS.contains(&state.page_size));
    }
}
