use super::DriveClient;
use crate::error::RemoteError;
use crate::item::{DriveFile, RemoteItem};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileList {
    #[serde(default)]
    items: Vec<DriveFile>,
    next_page_token: Option<String>,
}

fn parents_query(folder_id: &str) -> String {
    format!("'{}' in parents", folder_id.replace('\'', "\\'"))
}

/// Lists every direct child of `folder_id`, following pagination.
pub async fn list_children(
    client: &DriveClient,
    folder_id: &str,
) -> Result<Vec<RemoteItem>, RemoteError> {
    let q = parents_query(folder_id);
    let FileList {
        items,
        mut next_page_token,
    } = client.request_json("files", &[("q", q.as_str())]).await?;
    let mut entries: Vec<RemoteItem> = items.into_iter().map(RemoteItem::from).collect();

    while let Some(page_token) = next_page_token {
        let FileList {
            items: more,
            next_page_token: next,
        } = client
            .request_json("files", &[("q", q.as_str()), ("pageToken", page_token.as_str())])
            .await?;
        next_page_token = next;
        entries.extend(more.into_iter().map(RemoteItem::from));
    }

    Ok(entries)
}
