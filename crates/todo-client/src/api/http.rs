//! reqwest-backed implementation of [`TodoApi`].

use async_trait::async_trait;
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::TodoApi;
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskId, User};

/// Characters escaped when an id is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Serialize)]
struct CompletionPatch {
    completed: bool,
}

/// HTTP client for the task store. No timeout is applied to requests.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn task_url(&self, id: &TaskId) -> String {
        format!(
            "{}/todos/{}",
            self.base_url,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response.error_for_status()?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn list<T: DeserializeOwned>(&self, collection: &str, limit: usize) -> ApiResult<Vec<T>> {
        let url = self.collection_url(collection);
        debug!("GET {} (limit {})", url, limit);
        let response = self
            .client
            .get(url)
            .query(&[("_limit", limit)])
            .send()
            .await?;
        Self::read_json(response).await
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_tasks(&self, limit: usize) -> ApiResult<Vec<Task>> {
        self.list("todos", limit).await
    }

    async fn list_users(&self, limit: usize) -> ApiResult<Vec<User>> {
        self.list("users", limit).await
    }

    async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        let url = self.collection_url("todos");
        debug!("POST {}", url);
        let response = self.client.post(url).json(task).send().await?;
        Self::read_json(response).await
    }

    async fn update_task_completion(&self, id: &TaskId, completed: bool) -> ApiResult<()> {
        let url = self.task_url(id);
        debug!("PATCH {} completed={}", url, completed);
        self.client
            .patch(url)
            .json(&CompletionPatch { completed })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> ApiResult<()> {
        let url = self.task_url(id);
        debug!("DELETE {}", url);
        self.client
            .delete(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
