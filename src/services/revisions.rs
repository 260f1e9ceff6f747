//! Revision-by-file filtering
//!
//! Determines which historical revisions of a gist contained a given file
//! by fetching every candidate revision's full snapshot concurrently.

use futures::future::try_join_all;

use crate::models::CommitEntry;
use crate::services::sanitize::sanitize_commit_entry;
use crate::services::upstream::{UpstreamClient, UpstreamError};

/// List the entries of one commit-history page whose revision snapshot
/// contains `filename`, sanitized, in upstream order.
///
/// History entries carry no file manifest, so presence has to be checked
/// against each full snapshot: a file absent from one revision may exist
/// in both earlier and later ones. One revision fetch is issued per entry,
/// all concurrently with no upper bound; the first failed fetch fails the
/// whole listing and partial results are discarded.
pub async fn revisions_containing_file(
    upstream: &UpstreamClient,
    gist_id: &str,
    filename: &str,
    page: Option<&str>,
    per_page: Option<&str>,
) -> Result<Vec<CommitEntry>, UpstreamError> {
    let entries = upstream.commits(gist_id, page, per_page).await?;

    let checks = entries.iter().map(|entry| async move {
        let revision = upstream.revision(gist_id, &entry.version).await?;
        // Exact key match, case-sensitive, no normalization.
        Ok::<_, UpstreamError>(revision.files.contains_key(filename))
    });
    let present = try_join_all(checks).await?;

    Ok(entries
        .into_iter()
        .zip(present)
        .filter(|(_, present)| *present)
        .map(|(entry, _)| sanitize_commit_entry(entry))
        .collect())
}
