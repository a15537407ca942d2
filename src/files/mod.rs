use crate::error::RemoteError;
use crate::item::RemoteItem;
use crate::remote::{Fetched, RemoteStore};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub mod fetch;
pub mod get_root;
pub mod list_children;

pub const BASE_URL: &str = "https://www.googleapis.com/drive/v2";

/// Drive v2 client carrying an already-authorized bearer token.
#[derive(Clone)]
pub struct DriveClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl DriveClient {
    pub fn new(token: &str) -> Self {
        DriveClient::with_base_url(token, BASE_URL)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        DriveClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.trim().to_owned(),
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http.get(url).bearer_auth(&self.token)
    }

    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        api: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RemoteError> {
        let response = self
            .get(&format!("{}/{}", self.base_url, api))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RemoteError::Unauthorized);
        }
        if !status.is_success() {
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RemoteStore for DriveClient {
    async fn get_root(&self) -> Result<RemoteItem, RemoteError> {
        get_root::get_root(self).await
    }

    async fn list_children(&self, folder_id: &str) -> Result<Vec<RemoteItem>, RemoteError> {
        list_children::list_children(self, folder_id).await
    }

    async fn fetch_content(&self, url: &str) -> Result<Fetched, RemoteError> {
        fetch::fetch_content(self, url).await
    }
}
