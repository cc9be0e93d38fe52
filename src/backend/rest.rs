//! REST backend implementation.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::{BackendError, CreateTaskArgs, TaskService, UpdateTaskArgs};
use crate::task::{Filter, Task, TaskId};

const DEFAULT_USER_AGENT: &str = concat!("yourtasks/", env!("CARGO_PKG_VERSION"));

/// Task service backed by a conventional `/tasks` REST resource.
#[derive(Clone, Debug)]
pub struct RestBackend {
    base_url: String,
    http: reqwest::Client,
}

impl RestBackend {
    /// Create a backend rooted at `base_url` (surrounding whitespace and
    /// trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .default_headers(Self::headers())
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers() -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    /// `<base>/tasks/<id>` with the id percent-encoded as a single path segment
    fn task_url(&self, id: &TaskId) -> Result<Url, BackendError> {
        let mut url = Url::parse(&self.tasks_url())
            .map_err(|e| BackendError::Network(format!("invalid base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| BackendError::Network(format!("base URL {} cannot carry a path", self.base_url)))?
            .push(id.as_str());
        Ok(url)
    }

    async fn exec_request(&self, req: reqwest::RequestBuilder, method: &str, url: &str) -> Result<String, BackendError> {
        let res = req
            .send()
            .await
            .map_err(|e| BackendError::Network(format!("{method} {url}: {e}")))?;
        let status = res.status();
        let body = res.text().await;
        debug!("{method} {url} -> {status}");
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: body.unwrap_or_default(),
            });
        }
        body.map_err(|e| BackendError::Network(format!("{method} {url}: failed to read body: {e}")))
    }

    fn decode_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, BackendError> {
        serde_json::from_str::<T>(body)
            .map_err(|e| BackendError::InvalidData(format!("decode error for {url}: {e}; body={body}")))
    }
}

#[async_trait]
impl TaskService for RestBackend {
    fn backend_type(&self) -> &str {
        "rest"
    }

    async fn list_tasks(&self, filter: Filter) -> Result<Vec<Task>, BackendError> {
        let url = self.tasks_url();
        let req = self.http.get(&url);
        let req = if let Some(completed) = filter.completed() {
            req.query(&[("completed", completed)])
        } else {
            req
        };
        let body = self.exec_request(req, "GET", &url).await?;
        Self::decode_json(&url, &body)
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        let url = self.tasks_url();
        let req = self.http.post(&url).json(&args);
        let body = self.exec_request(req, "POST", &url).await?;
        Self::decode_json(&url, &body)
    }

    async fn update_task(&self, id: &TaskId, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        let url = self.task_url(id)?;
        let req = self.http.put(url.clone()).json(&args);
        let body = self.exec_request(req, "PUT", url.as_str()).await?;
        Self::decode_json(url.as_str(), &body)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), BackendError> {
        let url = self.task_url(id)?;
        let req = self.http.delete(url.clone());
        // Any 2xx counts; the body is not inspected.
        self.exec_request(req, "DELETE", url.as_str()).await.map(|_| ())
    }
}
