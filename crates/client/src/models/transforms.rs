//! Sample documents used by the transform preview grid.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Paging window for `/api/ism/_searchSampleData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDataQuery {
    pub from: u64,
    pub size: u64,
}

/// One hit from the source index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDocument {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_index", default)]
    pub index: Option<String>,
    #[serde(rename = "_source", default)]
    pub source: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitsTotal {
    pub value: u64,
    #[serde(default)]
    pub relation: Option<TotalRelation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalRelation {
    Eq,
    Gte,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleDataResponse {
    #[serde(default)]
    pub data: Vec<SampleDocument>,
    #[serde(default)]
    pub total: HitsTotal,
}

/// A field of the source index offered as a preview column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldItem {
    pub label: String,
    /// Mapping type, e.g. `keyword`, `date`, `geo_point`.
    #[serde(rename = "type")]
    pub field_type: String,
}
