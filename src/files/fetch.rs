use super::DriveClient;
use crate::error::RemoteError;
use crate::remote::Fetched;
use bytes::Bytes;

/// Authorized GET of an export or download URL.
///
/// A body that cannot be read to the end maps to [`RemoteError::Transient`].
pub async fn fetch_content(client: &DriveClient, url: &str) -> Result<Fetched, RemoteError> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();

    if status != 200 {
        return Ok(Fetched {
            status,
            body: Bytes::new(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| RemoteError::Transient(format!("incomplete read of {}: {}", url, e)))?;

    Ok(Fetched { status, body })
}
