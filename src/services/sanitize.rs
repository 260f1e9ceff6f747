//! Response sanitization
//!
//! Pure field stripping over provider payloads before they are surfaced to
//! callers. No I/O; removing an already-absent field is a no-op, so
//! sanitizing twice equals sanitizing once.

use crate::models::{CommitEntry, Gist};

/// Provider bookkeeping removed from the top level of every gist and
/// revision payload.
pub const GIST_INTERNAL_FIELDS: [&str; 11] = [
    "owner",
    "history",
    "forks",
    "user",
    "url",
    "forks_url",
    "commits_url",
    "git_pull_url",
    "git_push_url",
    "html_url",
    "comments_url",
];

/// Transient fetch URL removed from every file entry.
pub const FILE_INTERNAL_FIELDS: [&str; 1] = ["raw_url"];

/// Identity fields removed from every commit-history entry.
pub const COMMIT_INTERNAL_FIELDS: [&str; 2] = ["user", "url"];

/// Strip provider-internal fields from a gist or revision payload.
///
/// Filename keys and every other file attribute are preserved.
pub fn sanitize_gist(mut gist: Gist) -> Gist {
    for field in GIST_INTERNAL_FIELDS {
        gist.extra.remove(field);
    }
    for file in gist.files.values_mut() {
        for field in FILE_INTERNAL_FIELDS {
            file.extra.remove(field);
        }
    }
    gist
}

/// Strip provider-internal fields from a commit-history entry.
pub fn sanitize_commit_entry(mut entry: CommitEntry) -> CommitEntry {
    for field in COMMIT_INTERNAL_FIELDS {
        entry.extra.remove(field);
    }
    entry
}
