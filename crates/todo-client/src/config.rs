//! Client configuration.
//!
//! The store address is fixed; there is no environment or file lookup.

/// Address of the remote task store.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
/// Number of tasks fetched at startup.
pub const DEFAULT_TASK_LIMIT: usize = 15;
/// Number of users fetched at startup.
pub const DEFAULT_USER_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub task_limit: usize,
    pub user_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            task_limit: DEFAULT_TASK_LIMIT,
            user_limit: DEFAULT_USER_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Point the client at another server, e.g. a mock in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
