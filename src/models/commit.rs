//! Commit history model types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry in a gist's commit history.
///
/// `version` is the opaque revision id (sha) the provider assigns to the
/// historical state this entry records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitEntry {
    pub version: String,
    pub committed_at: DateTime<Utc>,
    pub change_status: ChangeStatus,
    /// Remaining provider fields, untyped (`user`, `url`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Addition/deletion counts for one commit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChangeStatus {
    pub total: u64,
    pub additions: u64,
    pub deletions: u64,
}

/// Pagination query for history endpoints.
///
/// Values are forwarded to the upstream verbatim; the proxy never parses
/// them, so whatever the caller sends is the upstream's problem.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryPage {
    pub page: Option<String>,
    pub per_page: Option<String>,
}
