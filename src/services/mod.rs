pub mod revisions;
pub mod sanitize;
pub mod upstream;

pub use revisions::revisions_containing_file;
pub use sanitize::{sanitize_commit_entry, sanitize_gist};
pub use upstream::{UpstreamClient, UpstreamError};
