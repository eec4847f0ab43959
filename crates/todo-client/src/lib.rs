//! Todo Client
//!
//! Layered data access for the remote task store:
//! - models: wire entities and the shared identifier type
//! - api: raw HTTP calls returning `ApiResult`
//! - gateway: failure-absorbing operations used by the UI

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod report;

pub use api::{HttpTodoApi, TodoApi};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, SERVER_UNAVAILABLE};
pub use gateway::TodoGateway;
pub use models::{EntityId, NewTask, Task, TaskId, User, UserId};
pub use report::ErrorReporter;
