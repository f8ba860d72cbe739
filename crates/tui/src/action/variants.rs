//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: lifecycle and terminal events
//! - **Triggers**: backend calls for the runtime to execute
//! - **Results**: backend responses, folded back into view state

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ism_client::ClientError;
use ism_client::models::{
    AcknowledgedResponse, BulkActionResponse, DataStreamsResponse, ManagedIndicesQuery,
    ManagedIndicesResponse, SampleDataQuery, SampleDataResponse,
};
use serde_json::Value;

use crate::managed_indices::Command;
use crate::transforms::PreviewCommand;
use crate::ui::toast::ToastLevel;

#[derive(Debug, Clone)]
pub enum Action {
    // --- System ---
    Quit,
    Tick,
    Input(KeyEvent),
    Resize(u16, u16),
    Notify(ToastLevel, String),

    // --- Triggers ---
    LoadManagedIndices {
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
    LoadSampleData {
        index: String,
        query: SampleDataQuery,
        filter: Option<Value>,
    },

    // --- Results ---
    ManagedIndicesLoaded {
        seq: u64,
        result: Result<ManagedIndicesResponse, Arc<ClientError>>,
    },
    DataStreamsLoaded(Result<DataStreamsResponse, Arc<ClientError>>),
    PolicyRemoved(Result<BulkActionResponse, Arc<ClientError>>),
    PolicyRetried(Result<BulkActionResponse, Arc<ClientError>>),
    RolloverAliasEdited {
        index: String,
        result: Result<AcknowledgedResponse, Arc<ClientError>>,
    },
    SampleDataLoaded(Result<SampleDataResponse, Arc<ClientError>>),
}

impl Action {
    /// True for actions the runtime turns into backend calls.
    pub fn is_side_effect(&self) -> bool {
        matches!(
            self,
            Self::LoadManagedIndices { .. }
                | Self::LoadDataStreams
                | Self::RemovePolicy { .. }
                | Self::RetryPolicy { .. }
                | Self::EditRolloverAlias { .. }
                | Self::LoadSampleData { .. }
        )
    }

    /// Stable name for tracing; never includes payloads.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Tick => "Tick",
            Self::Input(_) => "Input",
            Self::Resize(..) => "Resize",
            Self::Notify(..) => "Notify",
            Self::LoadManagedIndices { .. } => "LoadManagedIndices",
            Self::LoadDataStreams => "LoadDataStreams",
            Self::RemovePolicy { .. } => "RemovePolicy",
            Self::RetryPolicy { .. } => "RetryPolicy",
            Self::EditRolloverAlias { .. } => "EditRolloverAlias",
            Self::LoadSampleData { .. } => "LoadSampleData",
            Self::ManagedIndicesLoaded { .. } => "ManagedIndicesLoaded",
            Self::DataStreamsLoaded(_) => "DataStreamsLoaded",
            Self::PolicyRemoved(_) => "PolicyRemoved",
            Self::PolicyRetried(_) => "PolicyRetried",
            Self::RolloverAliasEdited { .. } => "RolloverAliasEdited",
            Self::SampleDataLoaded(_) => "SampleDataLoaded",
        }
    }
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::FetchManagedIndices { seq, query } => Self::LoadManagedIndices { seq, query },
            Command::LoadDataStreams => Self::LoadDataStreams,
            Command::RemovePolicy { indices } => Self::RemovePolicy { indices },
            Command::RetryPolicy { indices, state } => Self::RetryPolicy { indices, state },
            Command::EditRolloverAlias { index, alias } => Self::EditRolloverAlias { index, alias },
        }
    }
}

impl From<PreviewCommand> for Action {
    fn from(command: PreviewCommand) -> Self {
        match command {
            PreviewCommand::SearchSampleData {
                index,
                query,
                filter,
            } => Self::LoadSampleData {
                index,
                query,
                filter,
            },
        }
    }
}
