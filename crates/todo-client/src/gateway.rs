//! Data Access Gateway
//!
//! Wraps a [`TodoApi`] so that no failure escapes: each operation reports
//! its error through the [`ErrorReporter`] and hands back a safe default.

use std::rc::Rc;

use log::warn;

use crate::api::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTask, Task, TaskId, User};
use crate::report::ErrorReporter;

pub struct TodoGateway<A> {
    api: A,
    reporter: Rc<dyn ErrorReporter>,
}

impl<A: TodoApi> TodoGateway<A> {
    pub fn new(api: A, reporter: Rc<dyn ErrorReporter>) -> Self {
        Self { api, reporter }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Bounded read of the task collection. Empty on failure.
    pub async fn list_tasks(&self, limit: usize) -> Vec<Task> {
        let result = self.api.list_tasks(limit).await;
        self.absorb("list tasks", result).unwrap_or_default()
    }

    /// Bounded read of the user collection. Empty on failure.
    pub async fn list_users(&self, limit: usize) -> Vec<User> {
        let result = self.api.list_users(limit).await;
        self.absorb("list users", result).unwrap_or_default()
    }

    /// Returns the stored task, or `None` if nothing was created.
    pub async fn create_task(&self, input: NewTask) -> Option<Task> {
        let result = self.api.create_task(&input).await;
        self.absorb("create task", result)
    }

    /// Every failure is reported as a connectivity problem.
    pub async fn update_task_completion(&self, id: &TaskId, completed: bool) -> bool {
        let result = self.api.update_task_completion(id, completed).await;
        self.absorb("update task", result.map_err(ApiError::into_connectivity)).is_some()
    }

    /// `true` once the store confirmed the deletion.
    pub async fn delete_task(&self, id: &TaskId) -> bool {
        let result = self.api.delete_task(id).await;
        self.absorb("delete task", result.map_err(ApiError::into_connectivity)).is_some()
    }

    fn absorb<T>(&self, operation: &str, result: ApiResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.fail(operation, &err);
                None
            }
        }
    }

    fn fail(&self, operation: &str, err: &ApiError) {
        warn!("{} failed: {}", operation, err);
        self.reporter.report(err);
    }
}
