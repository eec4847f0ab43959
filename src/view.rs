//! List View Model
//!
//! What the page shows, independent of the DOM. Components read rows and
//! options from here; the controller mutates it through the handles that
//! `render_task` returns, so nothing has to be looked up by attribute.

use todo_client::{Task, TaskId, User};

/// Handle to one rendered row. Never reused within a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

/// One list item: the task it shows plus the checkbox state on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub key: RowKey,
    pub task_id: TaskId,
    pub title: String,
    pub owner_name: String,
    pub completed: bool,
}

impl TaskRow {
    /// "title by owner", as the row label reads.
    pub fn label(&self) -> String {
        format!("{} by {}", self.title, self.owner_name)
    }
}

/// Entry in the owner select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct TodoListView {
    /// Top of the list first.
    rows: Vec<TaskRow>,
    owner_options: Vec<OwnerOption>,
    next_key: u64,
}

impl TodoListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row for `task` at the top of the list.
    ///
    /// Every call creates a new row, even for a task that is already shown.
    pub fn render_task(&mut self, task: &Task, owner_name: &str) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.rows.insert(
            0,
            TaskRow {
                key,
                task_id: task.id.clone(),
                title: task.title.clone(),
                owner_name: owner_name.to_string(),
                completed: task.completed,
            },
        );
        key
    }

    /// Detach the row behind `key`. `None` if it is not rendered.
    pub fn remove_task(&mut self, key: RowKey) -> Option<TaskRow> {
        let index = self.rows.iter().position(|row| row.key == key)?;
        Some(self.rows.remove(index))
    }

    pub fn populate_owner_options(&mut self, user: &User) {
        self.owner_options.push(OwnerOption {
            value: user.id.to_string(),
            label: user.name.clone(),
        });
    }

    /// Record the checkbox state the user just set.
    pub fn set_completed(&mut self, key: RowKey, completed: bool) -> Option<&TaskRow> {
        let row = self.rows.iter_mut().find(|row| row.key == key)?;
        row.completed = completed;
        Some(row)
    }

    pub fn row(&self, key: RowKey) -> Option<&TaskRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn owner_options(&self) -> &[OwnerOption] {
        &self.owner_options
    }
}
