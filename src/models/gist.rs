//! Gist model and related types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A gist as the upstream provider returns it.
///
/// Typed fields cover the attributes the proxy interprets. Everything else
/// the provider sends lands in the flattened `extra` map and is carried
/// through verbatim, so field stripping can operate on an explicit
/// deny-list instead of guessing at the provider's full schema. A revision
/// (a gist snapshot at a historical version) has the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gist {
    pub id: String,
    pub description: Option<String>,
    pub public: bool,
    pub files: BTreeMap<String, GistFile>,
    /// Remaining provider fields, untyped.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single file within a gist.
///
/// `content` is absent on payloads where the provider omits bodies
/// (truncated files, list endpoints).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Remaining provider fields, untyped (`filename`, `truncated`,
    /// `raw_url`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request payload for gist creation: one file under `filename`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGistRequest {
    #[serde(default)]
    pub description: Option<String>,
    pub filename: String,
    pub content: String,
    #[serde(default)]
    pub public: Option<bool>,
}

/// Request payload for upserting a single file's content.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGistRequest {
    pub filename: String,
    pub content: String,
}

/// Creation response surfaced to callers: only the id and the file map,
/// exactly as the upstream returned them.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedGist {
    pub id: String,
    pub files: BTreeMap<String, GistFile>,
}

impl From<Gist> for CreatedGist {
    fn from(gist: Gist) -> Self {
        Self {
            id: gist.id,
            files: gist.files,
        }
    }
}
