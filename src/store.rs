//! Application State
//!
//! The tasks and users currently loaded. Owned by the controller.

use todo_client::{Task, TaskId, User, UserId};

#[derive(Clone, Debug, Default)]
pub struct TodoState {
    /// Tasks in fetch order, newly created ones appended
    pub tasks: Vec<Task>,
    /// Users loaded at startup; never changed afterwards
    pub users: Vec<User>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the user owning a task, or "" when the owner is not loaded.
    pub fn owner_name(&self, owner_id: &UserId) -> &str {
        self.users
            .iter()
            .find(|user| &user.id == owner_id)
            .map(|user| user.name.as_str())
            .unwrap_or("")
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Set the completed flag on every task with this id.
    pub fn set_completed(&mut self, task_id: &TaskId, completed: bool) {
        self.tasks
            .iter_mut()
            .filter(|task| &task.id == task_id)
            .for_each(|task| task.completed = completed);
    }

    /// Drop every task with this id.
    pub fn remove_task(&mut self, task_id: &TaskId) {
        self.tasks.retain(|task| &task.id != task_id);
    }
}
