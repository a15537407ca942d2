use crate::error::RemoteError;
use crate::remote::RemoteStore;
use crate::resolver::PlanEntry;
use crate::retry::{with_retry, RetryConfig};
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Success(PathBuf),
    Skipped(String),
    Failed { path: PathBuf, reason: String },
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Success(_))
    }
}

/// Fetches one plan entry into `dest_dir`, overwriting any file already there.
///
/// Never returns an error: every failure stays inside the outcome so the
/// caller can keep going with the next entry.
pub async fn fetch<S: RemoteStore + ?Sized>(
    store: &S,
    entry: &PlanEntry,
    dest_dir: &Path,
    retry: &RetryConfig,
) -> DownloadOutcome {
    let path = dest_dir.join(entry.file_name());

    let url = match &entry.url {
        Some(url) => url,
        None => {
            return DownloadOutcome::Skipped(format!(
                "{} has no content stored on the remote side",
                entry.title
            ))
        }
    };

    debug!("{} download in progress...", entry.title);
    let fetched = with_retry(
        retry,
        &format!("fetch of {}", path.display()),
        || store.fetch_content(url),
        RemoteError::is_transient,
    )
    .await;

    let fetched = match fetched {
        Ok(f) => f,
        Err(e) => {
            return DownloadOutcome::Failed {
                path,
                reason: e.to_string(),
            }
        }
    };

    if !fetched.is_ok() {
        return DownloadOutcome::Failed {
            path,
            reason: format!("HTTP {}", fetched.status),
        };
    }

    match fs::write(&path, &fetched.body).await {
        Ok(()) => DownloadOutcome::Success(path),
        Err(e) => DownloadOutcome::Failed {
            reason: format!("could not open file for writing ({})", e),
            path,
        },
    }
}
