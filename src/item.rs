use serde::Deserialize;
use std::collections::BTreeMap;

pub const FOLDER_MIME: &str = "application/vnd.google-apps.folder";
const NATIVE_PREFIX: &str = "application/vnd.google-apps.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Folder,
    File,
}

/// One entry of the remote store, rebuilt from every listing and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteItem {
    pub id: String,
    pub title: String,
    pub kind: ItemKind,
    pub mime_type: String,
    /// Export MIME type -> export URL. Only native documents carry this.
    pub export_links: Option<BTreeMap<String, String>>,
    pub download_url: Option<String>,
}

impl RemoteItem {
    pub fn folder(id: &str, title: &str) -> Self {
        RemoteItem {
            id: id.to_owned(),
            title: title.to_owned(),
            kind: ItemKind::Folder,
            mime_type: FOLDER_MIME.to_owned(),
            export_links: None,
            download_url: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    pub fn is_native_document(&self) -> bool {
        self.mime_type.starts_with(NATIVE_PREFIX)
    }
}

/// Wire shape of a Drive v2 `File` resource. Only the fields the mirror needs.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub mime_type: String,
    pub export_links: Option<BTreeMap<String, String>>,
    pub download_url: Option<String>,
}

impl From<DriveFile> for RemoteItem {
    fn from(f: DriveFile) -> Self {
        let kind = if f.mime_type == FOLDER_MIME {
            ItemKind::Folder
        } else {
            ItemKind::File
        };
        RemoteItem {
            id: f.id,
            title: f.title,
            kind,
            mime_type: f.mime_type,
            export_links: f.export_links,
            download_url: f.download_url,
        }
    }
}
