//! gistrelay - sanitizing proxy for an upstream gist-hosting service
//!
//! Forwards gist create/read/update/delete/history operations to the
//! upstream provider and strips provider-internal fields from what comes
//! back. Every failure is normalized to a fixed two-outcome JSON envelope.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use models::{
    ChangeStatus, CommitEntry, CreateGistRequest, CreatedGist, Gist, GistFile, HistoryPage,
    UpdateGistRequest,
};
pub use services::{UpstreamClient, UpstreamError};

/// Application state shared across handlers
///
/// Built once at startup and never mutated afterwards; there is no other
/// state shared between requests.
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
}
