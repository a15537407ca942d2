use super::DriveClient;
use crate::error::RemoteError;
use crate::item::{DriveFile, RemoteItem};

pub async fn get_root(client: &DriveClient) -> Result<RemoteItem, RemoteError> {
    let root: DriveFile = client.request_json("files/root", &[]).await?;
    Ok(root.into())
}
