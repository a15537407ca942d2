use crate::extensions;
use crate::item::RemoteItem;
use log::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Server-side conversion of a native document.
    Export {
        mime_type: String,
        extension: &'static str,
    },
    /// The stored bytes, unconverted.
    Direct,
}

/// One concrete (url, target format) pair for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub title: String,
    pub target: Target,
    /// `None` when the remote side advertises the rendition but has no content.
    pub url: Option<String>,
}

impl PlanEntry {
    /// File name under the destination directory, before joining.
    pub fn file_name(&self) -> String {
        let base = crate::sanitize::sanitize(&self.title);
        match &self.target {
            Target::Export { extension, .. } => format!("{}{}", base, extension),
            Target::Direct => base,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPlan {
    /// Export entries first (in MIME type order), then the direct download.
    Renditions(Vec<PlanEntry>),
    Unexportable,
}

pub fn resolve(item: &RemoteItem) -> ExportPlan {
    let no_exports = item.export_links.as_ref().map_or(true, |l| l.is_empty());
    if no_exports && item.download_url.is_none() {
        return ExportPlan::Unexportable;
    }

    let mut entries = vec![];

    if let Some(links) = &item.export_links {
        for (mime_type, url) in links.iter() {
            match extensions::extension_for(mime_type) {
                Some(extension) => entries.push(PlanEntry {
                    title: item.title.clone(),
                    target: Target::Export {
                        mime_type: mime_type.clone(),
                        extension,
                    },
                    url: non_empty(url),
                }),
                None => warn!(
                    "Couldn't find mime-type mapping: {} (item {})",
                    mime_type, item.title
                ),
            }
        }
    }

    if let Some(url) = &item.download_url {
        entries.push(PlanEntry {
            title: item.title.clone(),
            target: Target::Direct,
            url: non_empty(url),
        });
    }

    ExportPlan::Renditions(entries)
}

fn non_empty(url: &str) -> Option<String> {
    if url.is_empty() {
        None
    } else {
        Some(url.to_owned())
    }
}
