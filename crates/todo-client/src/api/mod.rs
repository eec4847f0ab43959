//! Remote Store Calls
//!
//! Raw bindings to the task store endpoints. Every call reports failure as
//! an `ApiError`; absorbing those is the gateway's job.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskId, User};

pub use http::HttpTodoApi;

/// The five operations the client needs from the task store.
///
/// Futures are not `Send` so the same trait serves the browser build.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos?_limit=N`
    async fn list_tasks(&self, limit: usize) -> ApiResult<Vec<Task>>;

    /// `GET /users?_limit=N`
    async fn list_users(&self, limit: usize) -> ApiResult<Vec<User>>;

    /// `POST /todos`, returns the stored task with its assigned id
    async fn create_task(&self, task: &NewTask) -> ApiResult<Task>;

    /// `PATCH /todos/{id}` with `{completed}`
    async fn update_task_completion(&self, id: &TaskId, completed: bool) -> ApiResult<()>;

    /// `DELETE /todos/{id}`
    async fn delete_task(&self, id: &TaskId) -> ApiResult<()>;
}
