use crate::error::{RemoteError, Result};
use crate::executor::{self, DownloadOutcome};
use crate::item::RemoteItem;
use crate::remote::RemoteStore;
use crate::report::RunReport;
use crate::resolver::{self, ExportPlan, PlanEntry};
use crate::retry::{with_retry, RetryConfig};
use crate::sanitize::sanitize;

use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt};
use log::{error, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorOptions {
    pub list_retry: RetryConfig,
    pub fetch_retry: RetryConfig,
    /// Leaf downloads in flight per folder. 1 keeps everything sequential.
    pub jobs: usize,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        MirrorOptions {
            list_retry: RetryConfig::listing(),
            fetch_retry: RetryConfig::fetch(),
            jobs: 1,
        }
    }
}

/// Mirrors the whole remote store under `output_root/<root title>/`.
///
/// Only a revoked or expired authorization stops the run early; every other
/// failure is confined to its item or folder and shows up in the report.
pub async fn mirror<S: RemoteStore + ?Sized>(
    store: &S,
    output_root: &Path,
    options: &MirrorOptions,
) -> Result<RunReport> {
    fs::create_dir_all(output_root).await?;

    let root = with_retry(
        &options.list_retry,
        "lookup of the root folder",
        || store.get_root(),
        |e| !matches!(e, RemoteError::Unauthorized),
    )
    .await?;

    let mut traversal = Traversal {
        store,
        options: *options,
        report: RunReport::default(),
    };
    traversal.enter(root, output_root.to_owned(), 0).await?;
    Ok(traversal.report)
}

struct Traversal<'a, S: ?Sized> {
    store: &'a S,
    options: MirrorOptions,
    report: RunReport,
}

impl<'a, S: RemoteStore + ?Sized> Traversal<'a, S> {
    fn enter(
        &mut self,
        folder: RemoteItem,
        base_path: PathBuf,
        depth: usize,
    ) -> BoxFuture<'_, Result<()>> {
        async move {
            let indent = " ".repeat(depth);
            println!("\n{}Getting contents of folder {}", indent, folder.title);

            let store = self.store;
            let children = with_retry(
                &self.options.list_retry,
                &format!("listing of folder {}", folder.title),
                || store.list_children(&folder.id),
                |e| !matches!(e, RemoteError::Unauthorized),
            )
            .await;
            let children = match children {
                Ok(c) => c,
                Err(RemoteError::Unauthorized) => return Err(RemoteError::Unauthorized.into()),
                Err(e) => {
                    error!("Couldn't get contents of folder {}: {}", folder.title, e);
                    self.report.folder_failed(&folder.title, &e.to_string());
                    return Ok(());
                }
            };

            for item in children.iter() {
                let marker = if item.is_folder() { "[]" } else { "--" };
                println!("{}{} {}", indent, marker, item.title);
            }

            let dest_path = base_path.join(sanitize(&folder.title));
            if let Err(e) = fs::create_dir_all(&dest_path).await {
                error!("Couldn't create directory {}: {}", dest_path.display(), e);
                self.report.folder_failed(&folder.title, &e.to_string());
                return Ok(());
            }
            self.report.folders += 1;

            let (folders, leaves): (Vec<_>, Vec<_>) =
                children.into_iter().partition(RemoteItem::is_folder);

            let groups = self.plan_leaves(&leaves, &dest_path);
            let outcomes = self.download_all(groups, &dest_path).await;
            for outcome in outcomes.iter() {
                self.report.record(outcome);
            }

            for sub in folders.into_iter() {
                self.enter(sub, dest_path.clone(), depth + 1).await?;
            }
            Ok(())
        }
        .boxed()
    }

    /// Resolves every leaf and groups the entries by destination file, in
    /// listing order.
    fn plan_leaves(&mut self, leaves: &[RemoteItem], dest_path: &Path) -> Vec<Vec<PlanEntry>> {
        let mut groups: Vec<Vec<PlanEntry>> = vec![];
        let mut index: HashMap<PathBuf, usize> = HashMap::new();

        for leaf in leaves.iter() {
            let entries = match resolver::resolve(leaf) {
                ExportPlan::Renditions(entries) => entries,
                ExportPlan::Unexportable => {
                    if leaf.is_native_document() {
                        warn!(
                            "{} can't be exported ({} mimeType)",
                            leaf.title, leaf.mime_type
                        );
                    } else {
                        warn!("{} has no downloadable content", leaf.title);
                    }
                    self.report.unexportable += 1;
                    continue;
                }
            };

            for entry in entries.into_iter() {
                let path = dest_path.join(entry.file_name());
                match index.get(&path) {
                    Some(&i) => groups[i].push(entry),
                    None => {
                        index.insert(path, groups.len());
                        groups.push(vec![entry]);
                    }
                }
            }
        }

        groups
    }

    /// Runs up to `jobs` groups at a time. Entries inside a group share a
    /// destination path and run one after another.
    async fn download_all(
        &self,
        groups: Vec<Vec<PlanEntry>>,
        dest_path: &Path,
    ) -> Vec<DownloadOutcome> {
        let store = self.store;
        let retry = &self.options.fetch_retry;

        let per_group: Vec<Vec<DownloadOutcome>> = futures::stream::iter(groups.into_iter())
            .map(|group| async move {
                let mut outcomes = vec![];
                for entry in group.iter() {
                    let outcome = executor::fetch(store, entry, dest_path, retry).await;
                    log_outcome(&outcome);
                    outcomes.push(outcome);
                }
                outcomes
            })
            .buffer_unordered(self.options.jobs.max(1))
            .collect()
            .await;

        per_group.into_iter().flatten().collect()
    }
}

fn log_outcome(outcome: &DownloadOutcome) {
    match outcome {
        DownloadOutcome::Success(path) => println!("Created {}", path.display()),
        DownloadOutcome::Skipped(reason) => warn!("Skipped: {}", reason),
        DownloadOutcome::Failed { path, reason } => {
            println!("ERROR while saving {}", path.display());
            error!("{}: {}", path.display(), reason);
        }
    }
}
