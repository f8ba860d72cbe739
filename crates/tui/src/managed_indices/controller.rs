//! Managed indices list controller.
//!
//! A synchronous state machine: input methods mutate view state and return
//! the [`Command`]s the runtime must execute; completion methods fold the
//! backend results back in. Notifications, history, and breadcrumbs are
//! passed in by the caller.
//!
//! Invariants:
//! - Every fetch carries a sequence number; only the latest issued one is applied.
//! - Semantic changes (search, sort, data stream toggle) refetch through the
//!   debouncer, and only when the semantic query actually changed.
//! - Page and page size changes fetch directly.
//! - The data stream column follows the toggle only once a fetch settles.

use std::sync::Arc;
use std::time::Instant;

use ism_client::ClientError;
use ism_client::models::{
    AcknowledgedResponse, BulkActionResponse, DATA_STREAM_LACK_PERMISSION_WARNING,
    DataStreamsResponse, ManagedIndexItem, ManagedIndicesQuery, ManagedIndicesResponse,
    SortDirection, SortField, is_data_stream_permission_error,
};
use ism_config::constants::PAGE_SIZE_OPTIONS;

use super::columns::policy_modal_error;
use super::debounce::{Debouncer, Trigger};
use super::filter::{QueryAst, translate, with_data_stream};
use super::modal::{Modal, ModalHost, RetryStart};
use super::query_state::{QueryState, SemanticQuery};
use super::selection::{
    self, BulkReport, REMOVE_POLICY_WORDING, RETRY_POLICY_WORDING, Selection,
};
use crate::services::{Chrome, History, Notifier};

pub const BREADCRUMB_INDEX_MANAGEMENT: &str = "Index Management";
pub const BREADCRUMB_MANAGED_INDICES: &str = "Managed Indices";

pub const LOAD_ERROR: &str = "There was a problem loading the managed indices";
pub const DATA_STREAMS_LOAD_ERROR: &str = "There was a problem loading data streams";
pub const EDIT_ALIAS_ERROR: &str = "There was a problem editing the rollover alias";
pub const ALIAS_REQUIRED: &str = "Alias is required";

/// Route of the policy editor, opened from the policy modal.
pub const EDIT_POLICY_ROUTE: &str = "#/edit-policy";

/// Work the runtime performs on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchManagedIndices {
        seq: u64,
        query: ManagedIndicesQuery,
    },
    LoadDataStreams,
    RemovePolicy {
        indices: Vec<String>,
    },
    RetryPolicy {
        indices: Vec<String>,
        state: Option<String>,
    },
    EditRolloverAlias {
        index: String,
        alias: String,
    },
}

/// Data stream filter picker.
#[derive(Debug, Clone, Default)]
pub struct DataStreamFilter {
    pub open: bool,
    pub cursor: usize,
    pub options: Vec<String>,
    pub loading: bool,
}

#[derive(Debug)]
pub struct ManagedIndicesController {
    query: QueryState,
    last_semantic: SemanticQuery,
    records: Vec<ManagedIndexItem>,
    total: u64,
    loading: bool,
    data_stream_column_visible: bool,
    selection: Selection,
    cursor: usize,
    modal: ModalHost,
    debouncer: Debouncer,
    last_issued_seq: u64,
    last_request: Option<ManagedIndicesQuery>,
    data_stream_filter: DataStreamFilter,
    editing_search: bool,
}

impl ManagedIndicesController {
    pub fn new(query: QueryState) -> Self {
        Self {
            last_semantic: query.semantic(),
            data_stream_column_visible: query.show_data_streams,
            query,
            records: Vec::new(),
            total: 0,
            loading: false,
            selection: Selection::default(),
            cursor: 0,
            modal: ModalHost::default(),
            debouncer: Debouncer::default(),
            last_issued_seq: 0,
            last_request: None,
            data_stream_filter: DataStreamFilter::default(),
            editing_search: false,
        }
    }

    /// Restore from a persisted location, or start fresh with `page_size`.
    pub fn from_location(location: Option<&str>, page_size: u64) -> Self {
        let query = match location {
            Some(location) => QueryState::deserialize(location),
            None => QueryState::with_page_size(page_size),
        };
        Self::new(query)
    }

    // --- accessors -------------------------------------------------------

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn records(&self) -> &[ManagedIndexItem] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_data_stream_column_visible(&self) -> bool {
        self.data_stream_column_visible
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn modal(&self) -> &ModalHost {
        &self.modal
    }

    pub fn data_stream_filter(&self) -> &DataStreamFilter {
        &self.data_stream_filter
    }

    pub fn is_editing_search(&self) -> bool {
        self.editing_search
    }

    pub fn last_issued_seq(&self) -> u64 {
        self.last_issued_seq
    }

    pub fn location(&self) -> String {
        self.query.serialize()
    }

    pub fn is_filter_applied(&self) -> bool {
        !self.query.search_text.trim().is_empty()
    }

    pub fn page_count(&self) -> u64 {
        self.query.page_count(self.total)
    }

    pub fn selected_records(&self) -> Vec<&ManagedIndexItem> {
        self.selection.resolve(&self.records)
    }

    pub fn can_retry(&self) -> bool {
        selection::can_retry(&self.selected_records())
    }

    pub fn can_remove_policy(&self) -> bool {
        selection::can_remove_policy(&self.selected_records())
    }

    pub fn can_edit_rollover_alias(&self) -> bool {
        selection::can_edit_rollover_alias(&self.selected_records())
    }

    // --- lifecycle -------------------------------------------------------

    pub fn mount(
        &mut self,
        now: Instant,
        history: &mut dyn History,
        chrome: &mut dyn Chrome,
    ) -> Vec<Command> {
        chrome.set_breadcrumbs(&[BREADCRUMB_INDEX_MANAGEMENT, BREADCRUMB_MANAGED_INDICES]);
        history.replace(self.location());
        let mut commands = self.refresh(now);
        if self.query.show_data_streams {
            commands.push(self.request_data_streams());
        }
        commands
    }

    /// Debounced refetch of the current page.
    pub fn refresh(&mut self, now: Instant) -> Vec<Command> {
        match self.debouncer.call(now) {
            Trigger::Now => vec![self.start_fetch()],
            Trigger::Deferred => {
                tracing::trace!("refresh deferred by debounce");
                Vec::new()
            }
        }
    }

    /// Fire a deferred refresh once its debounce window has passed.
    ///
    /// The trailing run is skipped when the request would repeat the last one sent.
    pub fn tick(&mut self, now: Instant) -> Vec<Command> {
        if !self.debouncer.poll(now) {
            return Vec::new();
        }
        if self.last_request.as_ref() == Some(&self.current_request()) {
            tracing::trace!("trailing refresh skipped, query unchanged");
            return Vec::new();
        }
        vec![self.start_fetch()]
    }

    /// Refresh after the server data changed; a deferred run fires even for an identical query.
    fn reload_after_mutation(&mut self, now: Instant) -> Vec<Command> {
        self.last_request = None;
        self.refresh(now)
    }

    fn current_request(&self) -> ManagedIndicesQuery {
        let filters = translate(&QueryAst::parse(&self.query.search_text));
        self.query.to_request(&filters)
    }

    fn start_fetch(&mut self) -> Command {
        self.last_issued_seq += 1;
        self.loading = true;
        let query = self.current_request();
        self.last_request = Some(query.clone());
        tracing::debug!(
            seq = self.last_issued_seq,
            from = query.from,
            size = query.size,
            "fetching managed indices"
        );
        Command::FetchManagedIndices {
            seq: self.last_issued_seq,
            query,
        }
    }

    fn on_semantic_change(&mut self, now: Instant) -> Vec<Command> {
        let semantic = self.query.semantic();
        if semantic == self.last_semantic {
            return Vec::new();
        }
        self.last_semantic = semantic;
        self.refresh(now)
    }

    pub fn on_fetch_completed(
        &mut self,
        seq: u64,
        result: Result<ManagedIndicesResponse, Arc<ClientError>>,
        notifier: &mut dyn Notifier,
        history: &mut dyn History,
    ) {
        if seq != self.last_issued_seq {
            tracing::debug!(
                seq,
                latest = self.last_issued_seq,
                "discarding stale managed indices response"
            );
            return;
        }

        match result {
            Ok(response) => {
                self.records = response.managed_indices;
                self.total = response.total_managed_indices;
                self.cursor = self.cursor.min(self.records.len().saturating_sub(1));
            }
            Err(e) => notifier.error(e.user_message(LOAD_ERROR)),
        }

        self.loading = false;
        self.data_stream_column_visible = self.query.show_data_streams;
        history.replace(self.location());
    }

    // --- query changes ---------------------------------------------------

    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) -> Vec<Command> {
        self.query.set_search(text);
        self.on_semantic_change(now)
    }

    pub fn begin_search_edit(&mut self) {
        self.editing_search = true;
    }

    pub fn end_search_edit(&mut self) {
        self.editing_search = false;
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) -> Vec<Command> {
        let mut text = self.query.search_text.clone();
        text.push(c);
        self.set_search(text, now)
    }

    pub fn pop_search_char(&mut self, now: Instant) -> Vec<Command> {
        let mut text = self.query.search_text.clone();
        if text.pop().is_none() {
            return Vec::new();
        }
        self.set_search(text, now)
    }

    pub fn reset_filters(&mut self, now: Instant) -> Vec<Command> {
        self.set_search(String::new(), now)
    }

    pub fn set_sort(
        &mut self,
        field: SortField,
        direction: SortDirection,
        now: Instant,
    ) -> Vec<Command> {
        self.query.set_sort(field, direction);
        self.on_semantic_change(now)
    }

    /// Next sort field; the data stream column is skipped while it is hidden.
    pub fn cycle_sort_field(&mut self, now: Instant) -> Vec<Command> {
        let mut field = self.query.sort_field.next();
        if field == SortField::DataStream && !self.query.show_data_streams {
            field = field.next();
        }
        self.set_sort(field, self.query.sort_direction, now)
    }

    pub fn flip_sort_direction(&mut self, now: Instant) -> Vec<Command> {
        let direction = self.query.sort_direction.flipped();
        self.set_sort(self.query.sort_field, direction, now)
    }

    /// Flip the data stream toggle. The column follows after the next fetch.
    pub fn toggle_data_streams(&mut self, now: Instant) -> Vec<Command> {
        self.query.toggle_data_streams();
        if !self.query.show_data_streams {
            self.data_stream_filter.open = false;
        }
        let mut commands = self.on_semantic_change(now);
        if self.query.show_data_streams && self.data_stream_filter.options.is_empty() {
            commands.push(self.request_data_streams());
        }
        commands
    }

    pub fn set_page(&mut self, page_index: u64) -> Vec<Command> {
        let last = self.page_count().saturating_sub(1);
        let page_index = page_index.min(last);
        if page_index == self.query.page_index {
            return Vec::new();
        }
        self.query.set_page_index(page_index);
        vec![self.start_fetch()]
    }

    pub fn next_page(&mut self) -> Vec<Command> {
        self.set_page(self.query.page_index.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Vec<Command> {
        match self.query.page_index.checked_sub(1) {
            Some(page) => self.set_page(page),
            None => Vec::new(),
        }
    }

    pub fn set_page_size(&mut self, page_size: u64) -> Vec<Command> {
        if page_size == self.query.page_size || !self.query.set_page_size(page_size) {
            return Vec::new();
        }
        vec![self.start_fetch()]
    }

    /// Step to the next (or previous) page size option, clamped at the ends.
    pub fn step_page_size(&mut self, forward: bool) -> Vec<Command> {
        let position = PAGE_SIZE_OPTIONS
            .iter()
            .position(|s| *s == self.query.page_size)
            .unwrap_or(0);
        let next = if forward {
            (position + 1).min(PAGE_SIZE_OPTIONS.len() - 1)
        } else {
            position.saturating_sub(1)
        };
        self.set_page_size(PAGE_SIZE_OPTIONS[next])
    }

    // --- data streams ----------------------------------------------------

    fn request_data_streams(&mut self) -> Command {
        self.data_stream_filter.loading = true;
        Command::LoadDataStreams
    }

    pub fn open_data_stream_filter(&mut self) -> Vec<Command> {
        if !self.query.show_data_streams {
            return Vec::new();
        }
        self.data_stream_filter.open = true;
        self.data_stream_filter.cursor = 0;
        vec![self.request_data_streams()]
    }

    pub fn close_data_stream_filter(&mut self) {
        self.data_stream_filter.open = false;
    }

    pub fn move_filter_cursor(&mut self, delta: isize) {
        let len = self.data_stream_filter.options.len();
        if len == 0 {
            return;
        }
        let cursor = self.data_stream_filter.cursor.saturating_add_signed(delta);
        self.data_stream_filter.cursor = cursor.min(len - 1);
    }

    /// Narrow the search to the highlighted data stream.
    pub fn choose_data_stream(&mut self, now: Instant) -> Vec<Command> {
        let Some(name) = self
            .data_stream_filter
            .options
            .get(self.data_stream_filter.cursor)
            .cloned()
        else {
            return Vec::new();
        };
        self.data_stream_filter.open = false;
        let search = with_data_stream(&self.query.search_text, &name);
        self.set_search(search, now)
    }

    pub fn on_data_streams_loaded(
        &mut self,
        result: Result<DataStreamsResponse, Arc<ClientError>>,
        notifier: &mut dyn Notifier,
    ) {
        self.data_stream_filter.loading = false;
        match result {
            Ok(response) => {
                self.data_stream_filter.options = response
                    .data_streams
                    .into_iter()
                    .map(|stream| stream.name)
                    .collect();
            }
            Err(e) => {
                self.data_stream_filter.options.clear();
                let permission_denied = match e.as_ref() {
                    ClientError::Server(message) => is_data_stream_permission_error(message),
                    ClientError::ApiError { message, .. } => {
                        is_data_stream_permission_error(message)
                    }
                    _ => false,
                };
                if permission_denied {
                    notifier.warning(DATA_STREAM_LACK_PERMISSION_WARNING.to_string());
                } else {
                    notifier.error(e.user_message(DATA_STREAMS_LOAD_ERROR));
                }
            }
        }
        let len = self.data_stream_filter.options.len();
        self.data_stream_filter.cursor = self.data_stream_filter.cursor.min(len.saturating_sub(1));
    }

    // --- selection -------------------------------------------------------

    pub fn move_cursor(&mut self, delta: isize) {
        if self.records.is_empty() {
            self.cursor = 0;
            return;
        }
        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(self.records.len() - 1);
    }

    pub fn current_record(&self) -> Option<&ManagedIndexItem> {
        self.records.get(self.cursor)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(index) = self.current_record().map(|r| r.index.clone()) {
            self.selection.toggle(&index);
        }
    }

    pub fn toggle_select_all(&mut self) {
        let all_selected = !self.records.is_empty()
            && self.records.iter().all(|r| self.selection.contains(&r.index));
        self.selection.clear();
        if !all_selected {
            for record in &self.records {
                self.selection.select(&record.index);
            }
        }
    }

    // --- modals ----------------------------------------------------------

    /// Open the remove-policy confirmation. Returns whether it opened.
    pub fn open_remove_policy(&mut self) -> bool {
        let selected = self.selected_records();
        if !selection::can_remove_policy(&selected) {
            return false;
        }
        let subject = selection::removal_subject(&selected);
        let indices = selected.iter().map(|r| r.index.clone()).collect();
        self.modal.open(Modal::Confirmation {
            title: format!("Remove {subject}"),
            body: format!("Remove {subject} permanently? This action cannot be undone."),
            action_label: "Remove".to_string(),
            indices,
        });
        true
    }

    pub fn open_retry(&mut self) -> bool {
        let selected = self.selected_records();
        if !selection::can_retry(&selected) {
            return false;
        }
        let indices = selected.iter().map(|r| r.index.clone()).collect();
        let mut states: Vec<String> = Vec::new();
        for policy in selected.iter().filter_map(|r| r.policy.as_ref()) {
            for state in &policy.states {
                if !states.contains(&state.name) {
                    states.push(state.name.clone());
                }
            }
        }
        self.modal.open(Modal::Retry {
            indices,
            states,
            start: RetryStart::CurrentState,
        });
        true
    }

    pub fn open_edit_rollover_alias(&mut self) -> bool {
        let selected = self.selected_records();
        if !selection::can_edit_rollover_alias(&selected) {
            return false;
        }
        let index = selected[0].index.clone();
        self.modal.open(Modal::RolloverAlias {
            index,
            alias: String::new(),
            error: None,
        });
        true
    }

    pub fn open_info(&mut self) -> bool {
        let Some(record) = self.current_record() else {
            return false;
        };
        let modal = Modal::Info {
            index: record.index.clone(),
            info: record
                .managed_index_meta_data
                .as_ref()
                .and_then(|m| m.info.clone()),
        };
        self.modal.open(modal);
        true
    }

    pub fn open_policy(&mut self) -> bool {
        let Some(record) = self.current_record() else {
            return false;
        };
        let modal = Modal::Policy {
            index: record.index.clone(),
            policy_id: record.policy_id.clone(),
            policy: record.policy.clone(),
            error: policy_modal_error(record),
        };
        self.modal.open(modal);
        true
    }

    pub fn modal_host_mut(&mut self) -> &mut ModalHost {
        &mut self.modal
    }

    /// Close the open modal without touching the backend.
    pub fn cancel_modal(&mut self) {
        if self.modal.is_submitting() {
            return;
        }
        self.modal.close();
    }

    pub fn confirm_modal(&mut self, history: &mut dyn History) -> Vec<Command> {
        if self.modal.is_submitting() {
            return Vec::new();
        }
        let Some(modal) = self.modal.modal().cloned() else {
            return Vec::new();
        };

        match modal {
            Modal::Info { .. } => {
                self.modal.close();
                Vec::new()
            }
            Modal::Policy { policy_id, .. } => {
                self.modal.close();
                if let Some(id) = policy_id {
                    history.push(format!("{EDIT_POLICY_ROUTE}?id={id}"));
                }
                Vec::new()
            }
            Modal::Confirmation { indices, .. } => {
                if indices.is_empty() {
                    self.modal.close();
                    return Vec::new();
                }
                self.modal.set_submitting(true);
                vec![Command::RemovePolicy { indices }]
            }
            Modal::Retry { indices, start, .. } => {
                self.modal.set_submitting(true);
                let state = match start {
                    RetryStart::CurrentState => None,
                    RetryStart::State(name) => Some(name),
                };
                vec![Command::RetryPolicy { indices, state }]
            }
            Modal::RolloverAlias { index, alias, .. } => {
                let alias = alias.trim().to_string();
                if alias.is_empty() {
                    if let Some(Modal::RolloverAlias { error, .. }) = self.modal.modal_mut() {
                        *error = Some(ALIAS_REQUIRED.to_string());
                    }
                    return Vec::new();
                }
                self.modal.set_submitting(true);
                vec![Command::EditRolloverAlias { index, alias }]
            }
        }
    }

    // --- bulk action results ---------------------------------------------

    pub fn on_remove_policy_completed(
        &mut self,
        result: Result<BulkActionResponse, Arc<ClientError>>,
        notifier: &mut dyn Notifier,
        now: Instant,
    ) -> Vec<Command> {
        self.modal.set_submitting(false);
        match result {
            Ok(response) => {
                report(&response, REMOVE_POLICY_WORDING, notifier);
                self.modal.close();
                self.selection.clear();
                self.reload_after_mutation(now)
            }
            Err(e) => {
                notifier.error(e.user_message(REMOVE_POLICY_WORDING.generic_error));
                Vec::new()
            }
        }
    }

    pub fn on_retry_completed(
        &mut self,
        result: Result<BulkActionResponse, Arc<ClientError>>,
        notifier: &mut dyn Notifier,
        now: Instant,
    ) -> Vec<Command> {
        self.modal.set_submitting(false);
        match result {
            Ok(response) => {
                report(&response, RETRY_POLICY_WORDING, notifier);
                self.modal.close();
                self.reload_after_mutation(now)
            }
            Err(e) => {
                notifier.error(e.user_message(RETRY_POLICY_WORDING.generic_error));
                Vec::new()
            }
        }
    }

    pub fn on_rollover_alias_edited(
        &mut self,
        index: &str,
        result: Result<AcknowledgedResponse, Arc<ClientError>>,
        notifier: &mut dyn Notifier,
        now: Instant,
    ) -> Vec<Command> {
        self.modal.set_submitting(false);
        match result {
            Ok(response) if response.acknowledged => {
                notifier.success(format!("Edited rollover alias on {index}"));
                self.modal.close();
                self.reload_after_mutation(now)
            }
            Ok(_) => {
                notifier.error(format!("Failed to edit rollover alias on {index}"));
                Vec::new()
            }
            Err(e) => {
                notifier.error(e.user_message(EDIT_ALIAS_ERROR));
                Vec::new()
            }
        }
    }
}

fn report(
    response: &BulkActionResponse,
    wording: selection::BulkWording,
    notifier: &mut dyn Notifier,
) {
    let report = BulkReport::from_response(response, wording);
    if let Some(message) = report.success {
        notifier.success(message);
    }
    if let Some(message) = report.failure {
        notifier.error(message);
    }
}
