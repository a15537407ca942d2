//! In-memory remote store for tests.

use crate::error::RemoteError;
use crate::item::{ItemKind, RemoteItem};
use crate::remote::{Fetched, RemoteStore};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum FakeResponse {
    Body(Vec<u8>),
    Status(u16),
    /// Fails with a transient error this many times, then serves the body.
    TruncatedThen(u32, Vec<u8>),
}

pub struct FakeStore {
    root: RemoteItem,
    children: HashMap<String, Vec<RemoteItem>>,
    content: HashMap<String, FakeResponse>,
    list_errors: Mutex<HashMap<String, (u32, bool)>>,
    fetches: Mutex<Vec<String>>,
    listings: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn new(root_title: &str) -> Self {
        FakeStore {
            root: RemoteItem::folder("root", root_title),
            children: HashMap::new(),
            content: HashMap::new(),
            list_errors: Mutex::new(HashMap::new()),
            fetches: Mutex::new(vec![]),
            listings: Mutex::new(vec![]),
        }
    }

    pub fn child(mut self, parent_id: &str, item: RemoteItem) -> Self {
        self.children
            .entry(parent_id.to_owned())
            .or_insert_with(Vec::new)
            .push(item);
        self
    }

    pub fn content(mut self, url: &str, response: FakeResponse) -> Self {
        self.content.insert(url.to_owned(), response);
        self
    }

    /// Listing `folder_id` fails `times` times; `unauthorized` picks the error.
    pub fn failing_listing(self, folder_id: &str, times: u32, unauthorized: bool) -> Self {
        self.list_errors
            .lock()
            .unwrap()
            .insert(folder_id.to_owned(), (times, unauthorized));
        self
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|u| *u == url)
            .count()
    }

    pub fn listing_count(&self, folder_id: &str) -> usize {
        self.listings
            .lock()
            .unwrap()
            .iter()
            .filter(|id| *id == folder_id)
            .count()
    }
}

pub fn doc(id: &str, title: &str, links: &[(&str, &str)]) -> RemoteItem {
    RemoteItem {
        id: id.to_owned(),
        title: title.to_owned(),
        kind: ItemKind::File,
        mime_type: "application/vnd.google-apps.document".to_owned(),
        export_links: Some(
            links
                .iter()
                .map(|(m, u)| (m.to_string(), u.to_string()))
                .collect::<BTreeMap<_, _>>(),
        ),
        download_url: None,
    }
}

pub fn binary(id: &str, title: &str, url: &str) -> RemoteItem {
    RemoteItem {
        id: id.to_owned(),
        title: title.to_owned(),
        kind: ItemKind::File,
        mime_type: "application/octet-stream".to_owned(),
        export_links: None,
        download_url: Some(url.to_owned()),
    }
}

#[async_trait]
impl RemoteStore for FakeStore {
    async fn get_root(&self) -> Result<RemoteItem, RemoteError> {
        Ok(self.root.clone())
    }

    async fn list_children(&self, folder_id: &str) -> Result<Vec<RemoteItem>, RemoteError> {
        self.listings.lock().unwrap().push(folder_id.to_owned());
        if let Some((left, unauthorized)) = self.list_errors.lock().unwrap().get_mut(folder_id) {
            if *left > 0 {
                *left -= 1;
                return Err(if *unauthorized {
                    RemoteError::Unauthorized
                } else {
                    RemoteError::Api {
                        status: 500,
                        message: "backend error".to_owned(),
                    }
                });
            }
        }
        Ok(self.children.get(folder_id).cloned().unwrap_or_default())
    }

    async fn fetch_content(&self, url: &str) -> Result<Fetched, RemoteError> {
        self.fetches.lock().unwrap().push(url.to_owned());
        let previous = self.fetch_count(url) as u32 - 1;
        match self.content.get(url) {
            Some(FakeResponse::Body(b)) => Ok(Fetched {
                status: 200,
                body: Bytes::from(b.clone()),
            }),
            Some(FakeResponse::Status(status)) => Ok(Fetched {
                status: *status,
                body: Bytes::new(),
            }),
            Some(FakeResponse::TruncatedThen(times, b)) => {
                if previous < *times {
                    Err(RemoteError::Transient("incomplete read".to_owned()))
                } else {
                    Ok(Fetched {
                        status: 200,
                        body: Bytes::from(b.clone()),
                    })
                }
            }
            None => Ok(Fetched {
                status: 404,
                body: Bytes::new(),
            }),
        }
    }
}
