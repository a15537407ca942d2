use crate::error::RemoteError;
use crate::item::RemoteItem;
use async_trait::async_trait;
use bytes::Bytes;

/// Raw answer to a content GET. Non-200 statuses are not errors at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: Bytes,
}

impl Fetched {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// What the mirror needs from a remote store. Built once, already authorized,
/// and shared read-only for the whole run.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn get_root(&self) -> Result<RemoteItem, RemoteError>;

    /// Direct children of `folder_id`, in no particular order.
    async fn list_children(&self, folder_id: &str) -> Result<Vec<RemoteItem>, RemoteError>;

    async fn fetch_content(&self, url: &str) -> Result<Fetched, RemoteError>;
}
