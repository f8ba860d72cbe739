//! Sample data grid shown while selecting fields to transform.
//!
//! One fetch pulls up to [`DEFAULT_SAMPLE_DATA_SIZE`] documents from the
//! source index; pagination then walks that window client side.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use ism_client::ClientError;
use ism_client::models::{
    FieldItem, SampleDataQuery, SampleDataResponse, SampleDocument, SortDirection,
};
use ism_config::constants::{
    DEFAULT_PREVIEW_PAGE_SIZE, DEFAULT_PREVIEW_VISIBLE_COLUMNS, DEFAULT_SAMPLE_DATA_SIZE,
    PAGE_SIZE_OPTIONS,
};
use serde_json::{Map, Value};

use crate::managed_indices::columns::DEFAULT_EMPTY_DATA;
use crate::services::Notifier;

pub const LOAD_ERROR: &str = "There was a problem loading the transforms";

const KEYWORD_SUFFIX: &str = ".keyword";
const DATE_FORMAT: &str = "%m/%d/%y %-I:%M %p";

/// A grid column; `schema` is the mapping type of the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewColumn {
    pub id: String,
    pub schema: String,
}

impl From<&FieldItem> for PreviewColumn {
    fn from(field: &FieldItem) -> Self {
        Self {
            id: field.label.clone(),
            schema: field.field_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingColumn {
    pub id: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewCommand {
    SearchSampleData {
        index: String,
        query: SampleDataQuery,
        filter: Option<Value>,
    },
}

#[derive(Debug)]
pub struct TransformPreview {
    source_index: String,
    source_index_filter: Option<Value>,
    columns: Vec<PreviewColumn>,
    infer_columns: bool,
    visible_columns: Vec<String>,
    sorting_columns: Vec<SortingColumn>,
    column_cursor: usize,
    page_index: u64,
    page_size: u64,
    from: u64,
    loading: bool,
    data: Vec<SampleDocument>,
    total: u64,
    read_only: bool,
}

impl TransformPreview {
    /// Preview over `fields`; with no fields the columns are taken from the
    /// first page of sample documents.
    pub fn new(
        source_index: impl Into<String>,
        source_index_filter: Option<Value>,
        fields: &[FieldItem],
    ) -> Self {
        let columns: Vec<PreviewColumn> = fields.iter().map(PreviewColumn::from).collect();
        let visible_columns = initial_visible(&columns);
        Self {
            source_index: source_index.into(),
            source_index_filter,
            infer_columns: columns.is_empty(),
            columns,
            visible_columns,
            sorting_columns: Vec::new(),
            column_cursor: 0,
            page_index: 0,
            page_size: DEFAULT_PREVIEW_PAGE_SIZE,
            from: 0,
            loading: true,
            data: Vec::new(),
            total: 0,
            read_only: false,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn source_index(&self) -> &str {
        &self.source_index
    }

    pub fn columns(&self) -> &[PreviewColumn] {
        &self.columns
    }

    pub fn visible_columns(&self) -> &[String] {
        &self.visible_columns
    }

    pub fn sorting_columns(&self) -> &[SortingColumn] {
        &self.sorting_columns
    }

    pub fn column_cursor(&self) -> usize {
        self.column_cursor
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn from(&self) -> u64 {
        self.from
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn data(&self) -> &[SampleDocument] {
        &self.data
    }

    pub fn fetch_data(&mut self) -> PreviewCommand {
        self.loading = true;
        tracing::debug!(index = %self.source_index, "loading transform sample data");
        PreviewCommand::SearchSampleData {
            index: self.source_index.clone(),
            query: SampleDataQuery {
                from: 0,
                size: DEFAULT_SAMPLE_DATA_SIZE,
            },
            filter: self.source_index_filter.clone(),
        }
    }

    pub fn on_data_loaded(
        &mut self,
        result: Result<SampleDataResponse, Arc<ClientError>>,
        notifier: &mut dyn Notifier,
    ) {
        match result {
            Ok(response) => {
                self.total = response.total.value;
                self.data = response.data;
                if self.infer_columns {
                    self.columns = infer_columns(&self.data);
                    self.visible_columns = initial_visible(&self.columns);
                    self.column_cursor = 0;
                }
            }
            Err(e) => notifier.error(e.user_message(LOAD_ERROR)),
        }
        self.loading = false;
    }

    /// Rows the grid pages over.
    pub fn row_count(&self) -> u64 {
        self.total.min(DEFAULT_SAMPLE_DATA_SIZE)
    }

    pub fn page_count(&self) -> u64 {
        self.row_count().div_ceil(self.page_size).max(1)
    }

    /// Row indices of the current page.
    pub fn page_rows(&self) -> std::ops::Range<u64> {
        let end = (self.from + self.page_size).min(self.row_count());
        self.from.min(end)..end
    }

    pub fn set_page(&mut self, page_index: u64) {
        self.page_index = page_index.min(self.page_count() - 1);
        self.from = self.page_index * self.page_size;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page_index + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page_index.saturating_sub(1));
    }

    pub fn set_page_size(&mut self, page_size: u64) {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return;
        }
        self.page_size = page_size;
        self.page_index = 0;
        self.from = 0;
    }

    pub fn step_page_size(&mut self, forward: bool) {
        let position = PAGE_SIZE_OPTIONS
            .iter()
            .position(|s| *s == self.page_size)
            .unwrap_or(0);
        let next = if forward {
            (position + 1).min(PAGE_SIZE_OPTIONS.len() - 1)
        } else {
            position.saturating_sub(1)
        };
        self.set_page_size(PAGE_SIZE_OPTIONS[next]);
    }

    pub fn move_column_cursor(&mut self, delta: isize) {
        if self.columns.is_empty() {
            return;
        }
        self.column_cursor = self
            .column_cursor
            .saturating_add_signed(delta)
            .min(self.columns.len() - 1);
    }

    /// Show or hide the column under the cursor. Visible columns keep field order.
    pub fn toggle_column(&mut self) {
        let Some(column) = self.columns.get(self.column_cursor) else {
            return;
        };
        let id = column.id.clone();
        if self.visible_columns.contains(&id) {
            self.visible_columns.retain(|c| *c != id);
        } else {
            self.visible_columns.push(id);
            let order: Vec<&str> = self.columns.iter().map(|c| c.id.as_str()).collect();
            self.visible_columns
                .sort_by_key(|c| order.iter().position(|o| *o == c.as_str()));
        }
    }

    /// Cycle the cursor column through ascending, descending, and unsorted.
    pub fn cycle_sort(&mut self) {
        let Some(id) = self.columns.get(self.column_cursor).map(|c| c.id.clone()) else {
            return;
        };
        match self.sorting_columns.iter().position(|s| s.id == id) {
            Some(i) if self.sorting_columns[i].direction == SortDirection::Asc => {
                self.sorting_columns[i].direction = SortDirection::Desc;
            }
            Some(i) => {
                self.sorting_columns.remove(i);
            }
            None => self.sorting_columns.push(SortingColumn {
                id,
                direction: SortDirection::Asc,
            }),
        }
    }

    pub fn column(&self, id: &str) -> Option<&PreviewColumn> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Text for one cell; `row` is an index into the sample window.
    pub fn render_cell(&self, row: u64, column_id: &str) -> String {
        if self.loading {
            return DEFAULT_EMPTY_DATA.to_string();
        }
        let (Some(document), Some(column)) = (
            usize::try_from(row).ok().and_then(|r| self.data.get(r)),
            self.column(column_id),
        ) else {
            return DEFAULT_EMPTY_DATA.to_string();
        };
        render_value(&document.source, column)
    }
}

fn initial_visible(columns: &[PreviewColumn]) -> Vec<String> {
    columns
        .iter()
        .take(DEFAULT_PREVIEW_VISIBLE_COLUMNS)
        .map(|c| c.id.clone())
        .collect()
}

fn render_value(source: &Map<String, Value>, column: &PreviewColumn) -> String {
    let empty = || DEFAULT_EMPTY_DATA.to_string();
    match column.schema.as_str() {
        "keyword" => {
            let id = column.id.strip_suffix(KEYWORD_SUFFIX).unwrap_or(&column.id);
            match source.get(id) {
                Some(Value::String(s)) if !s.is_empty() => s.clone(),
                Some(value) if is_truthy(value) => value.to_string(),
                _ => empty(),
            }
        }
        "date" => match source.get(&column.id) {
            Some(value) if is_truthy(value) => render_time(value).unwrap_or_else(|| value.to_string()),
            _ => empty(),
        },
        "geo_point" => match source.get(&column.id) {
            Some(value) if is_truthy(value) => match (value.get("lat"), value.get("lon")) {
                (Some(lat), Some(lon)) => format!("{lat}, {lon}"),
                _ => empty(),
            },
            _ => empty(),
        },
        "boolean" => match source.get(&column.id) {
            None | Some(Value::Null) => empty(),
            Some(value) if is_truthy(value) => "true".to_string(),
            Some(_) => "false".to_string(),
        },
        _ => match source.get(&column.id) {
            None | Some(Value::Null) => empty(),
            Some(value) => value.to_string(),
        },
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Epoch milliseconds or RFC 3339 strings, shown in local time.
fn render_time(value: &Value) -> Option<String> {
    let time: DateTime<Local> = match value {
        Value::Number(n) => Local.timestamp_millis_opt(n.as_i64()?).single()?,
        Value::String(s) => match s.parse::<i64>() {
            Ok(millis) => Local.timestamp_millis_opt(millis).single()?,
            Err(_) => DateTime::parse_from_rfc3339(s).ok()?.with_timezone(&Local),
        },
        _ => return None,
    };
    Some(time.format(DATE_FORMAT).to_string())
}

/// Columns guessed from the sample documents, in first-seen order.
fn infer_columns(documents: &[SampleDocument]) -> Vec<PreviewColumn> {
    let mut columns: Vec<PreviewColumn> = Vec::new();
    for document in documents {
        for (key, value) in &document.source {
            if columns.iter().any(|c| &c.id == key) || value.is_null() {
                continue;
            }
            columns.push(PreviewColumn {
                id: key.clone(),
                schema: infer_schema(value).to_string(),
            });
        }
    }
    columns
}

fn infer_schema(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "double",
        Value::Number(_) => "long",
        Value::String(_) => "text",
        Value::Object(o) if o.contains_key("lat") && o.contains_key("lon") => "geo_point",
        _ => "object",
    }
}
