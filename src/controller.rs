//! Todo Controller
//!
//! Owns the loaded state and the list view model, and turns page events
//! into gateway calls. All mutation happens between await points, so no
//! borrow is held while a request is in flight.

use std::cell::{Cell, RefCell};

use log::{debug, info};
use todo_client::{ClientConfig, NewTask, Task, TodoApi, TodoGateway, User, UserId};

use crate::store::TodoState;
use crate::view::{OwnerOption, RowKey, TaskRow, TodoListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial fetches in flight
    Loading,
    /// List is interactive
    Ready,
}

pub struct TodoController<A> {
    gateway: TodoGateway<A>,
    task_limit: usize,
    user_limit: usize,
    phase: Cell<Phase>,
    started: Cell<bool>,
    state: RefCell<TodoState>,
    view: RefCell<TodoListView>,
}

impl<A: TodoApi> TodoController<A> {
    pub fn new(gateway: TodoGateway<A>, config: &ClientConfig) -> Self {
        Self {
            gateway,
            task_limit: config.task_limit,
            user_limit: config.user_limit,
            phase: Cell::new(Phase::Loading),
            started: Cell::new(false),
            state: RefCell::new(TodoState::new()),
            view: RefCell::new(TodoListView::new()),
        }
    }

    /// Load tasks and users together, then draw the list and owner options.
    ///
    /// Only the first call does anything.
    pub async fn start(&self) {
        if self.started.replace(true) {
            return;
        }

        let (tasks, users) = futures::join!(
            self.gateway.list_tasks(self.task_limit),
            self.gateway.list_users(self.user_limit),
        );
        info!("Loaded {} tasks and {} users", tasks.len(), users.len());

        let mut state = self.state.borrow_mut();
        let mut view = self.view.borrow_mut();
        state.tasks = tasks;
        state.users = users;

        for task in &state.tasks {
            view.render_task(task, state.owner_name(&task.owner_id));
        }
        for user in &state.users {
            view.populate_owner_options(user);
        }
        self.phase.set(Phase::Ready);
    }

    /// Create an incomplete task and show it at the top of the list.
    pub async fn create(&self, owner_id: UserId, title: String) -> Option<RowKey> {
        let created = self.gateway.create_task(NewTask::new(owner_id, title)).await?;
        debug!("Created task {}", created.id);

        let mut state = self.state.borrow_mut();
        let key = self
            .view
            .borrow_mut()
            .render_task(&created, state.owner_name(&created.owner_id));
        state.add_task(created);
        Some(key)
    }

    /// The checkbox for `key` now reads `completed`; tell the store.
    ///
    /// The row keeps the user's state whatever the outcome.
    pub async fn toggle(&self, key: RowKey, completed: bool) -> bool {
        let task_id = match self.view.borrow_mut().set_completed(key, completed) {
            Some(row) => row.task_id.clone(),
            None => return false,
        };

        if !self.gateway.update_task_completion(&task_id, completed).await {
            return false;
        }
        self.state.borrow_mut().set_completed(&task_id, completed);
        true
    }

    /// Delete the task behind `key`; the row goes only once the store agrees.
    pub async fn dismiss(&self, key: RowKey) -> bool {
        let task_id = match self.view.borrow().row(key) {
            Some(row) => row.task_id.clone(),
            None => return false,
        };

        if !self.gateway.delete_task(&task_id).await {
            return false;
        }
        self.state.borrow_mut().remove_task(&task_id);
        self.view.borrow_mut().remove_task(key);
        debug!("Deleted task {}", task_id);
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn rows(&self) -> Vec<TaskRow> {
        self.view.borrow().rows().to_vec()
    }

    pub fn owner_options(&self) -> Vec<OwnerOption> {
        self.view.borrow().owner_options().to_vec()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state.borrow().users.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::rc::Rc;
    use todo_client::{ApiError, ApiResult, EntityId, TaskId};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ListTasks(usize),
        ListUsers(usize),
        Create(NewTask),
        Update(TaskId, bool),
        Delete(TaskId),
    }

    /// Scripted store: answers from fixed data and records every call.
    #[derive(Default)]
    struct FakeApi {
        tasks: Option<Vec<Task>>,
        users: Option<Vec<User>>,
        next_id: Cell<i64>,
        fail_writes: Cell<bool>,
        calls: Rc<RefCell<Vec<Call>>>,
    }

    #[async_trait(?Send)]
    impl TodoApi for FakeApi {
        async fn list_tasks(&self, limit: usize) -> ApiResult<Vec<Task>> {
            self.calls.borrow_mut().push(Call::ListTasks(limit));
            self.tasks.clone().ok_or(ApiError::Network("connection refused".into()))
        }

        async fn list_users(&self, limit: usize) -> ApiResult<Vec<User>> {
            self.calls.borrow_mut().push(Call::ListUsers(limit));
            self.users.clone().ok_or(ApiError::Network("connection refused".into()))
        }

        async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
            self.calls.borrow_mut().push(Call::Create(task.clone()));
            if self.fail_writes.get() {
                return Err(ApiError::Status(500));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            Ok(Task {
                id: EntityId::from(id),
                owner_id: task.owner_id.clone(),
                title: task.title.clone(),
                completed: task.completed,
            })
        }

        async fn update_task_completion(&self, id: &TaskId, completed: bool) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Update(id.clone(), completed));
            if self.fail_writes.get() { Err(ApiError::Status(500)) } else { Ok(()) }
        }

        async fn delete_task(&self, id: &TaskId) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Delete(id.clone()));
            if self.fail_writes.get() { Err(ApiError::Status(500)) } else { Ok(()) }
        }
    }

    struct Harness {
        controller: TodoController<FakeApi>,
        calls: Rc<RefCell<Vec<Call>>>,
        reports: Rc<RefCell<Vec<String>>>,
    }

    impl Harness {
        fn writes(&self) -> Vec<Call> {
            self.calls
                .borrow()
                .iter()
                .filter(|call| !matches!(call, Call::ListTasks(_) | Call::ListUsers(_)))
                .cloned()
                .collect()
        }

        fn fail_writes(&self, fail: bool) {
            self.controller.gateway.api().fail_writes.set(fail);
        }
    }

    fn make_task(id: i64, owner: i64, title: &str) -> Task {
        Task {
            id: EntityId::from(id),
            owner_id: EntityId::from(owner),
            title: title.to_string(),
            completed: false,
        }
    }

    fn make_users() -> Vec<User> {
        vec![
            User { id: EntityId::from(1), name: "Leanne Graham".into() },
            User { id: EntityId::from(2), name: "Ervin Howell".into() },
        ]
    }

    fn harness(tasks: Option<Vec<Task>>, users: Option<Vec<User>>) -> Harness {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = FakeApi {
            tasks,
            users,
            next_id: Cell::new(201),
            calls: calls.clone(),
            ..Default::default()
        };
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = reports.clone();
        let reporter = move |err: &ApiError| sink.borrow_mut().push(err.user_message());
        let gateway = TodoGateway::new(api, Rc::new(reporter));
        Harness {
            controller: TodoController::new(gateway, &ClientConfig::default()),
            calls,
            reports,
        }
    }

    async fn started(tasks: Vec<Task>) -> Harness {
        let h = harness(Some(tasks), Some(make_users()));
        h.controller.start().await;
        h
    }

    #[tokio::test]
    async fn test_start_renders_newest_first_with_owner_names() {
        let h = started(vec![
            make_task(1, 1, "t1"),
            make_task(2, 2, "t2"),
            make_task(3, 9, "t3"),
        ])
        .await;

        assert_eq!(h.controller.phase(), Phase::Ready);
        let rows = h.controller.rows();
        let titles: Vec<_> = rows.iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, ["t3", "t2", "t1"]);
        assert_eq!(rows[0].owner_name, "");
        assert_eq!(rows[1].owner_name, "Ervin Howell");
        assert_eq!(rows[2].owner_name, "Leanne Graham");

        let options = h.controller.owner_options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "1");
        assert_eq!(options[0].label, "Leanne Graham");
    }

    #[tokio::test]
    async fn test_start_uses_configured_limits() {
        let h = started(Vec::new()).await;
        let calls = h.calls.borrow();
        assert!(calls.contains(&Call::ListTasks(15)));
        assert!(calls.contains(&Call::ListUsers(5)));
    }

    #[tokio::test]
    async fn test_start_runs_once() {
        let h = started(vec![make_task(1, 1, "t1")]).await;
        h.controller.start().await;
        assert_eq!(h.controller.rows().len(), 1);
        assert_eq!(h.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_task_fetch_failure_still_loads_users() {
        let h = harness(None, Some(make_users()));
        h.controller.start().await;

        assert!(h.controller.rows().is_empty());
        assert_eq!(h.reports.borrow().len(), 1);
        assert_eq!(h.controller.users().len(), 2);
        assert_eq!(h.controller.owner_options().len(), 2);
        assert_eq!(h.controller.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_user_fetch_failure_leaves_owner_names_empty() {
        let h = harness(Some(vec![make_task(1, 1, "t1")]), None);
        h.controller.start().await;

        assert_eq!(h.controller.rows()[0].owner_name, "");
        assert!(h.controller.owner_options().is_empty());
        assert_eq!(h.reports.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_create_puts_task_on_top() {
        let h = started(vec![make_task(1, 2, "old")]).await;

        let key = h
            .controller
            .create(EntityId::parse("1"), "X".to_string())
            .await
            .expect("create should succeed");

        let rows = h.controller.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, key);
        assert_eq!(rows[0].title, "X");
        assert_eq!(rows[0].owner_name, "Leanne Graham");
        assert!(!rows[0].completed);

        assert_eq!(
            h.writes(),
            [Call::Create(NewTask::new(EntityId::from(1), "X"))]
        );
        assert_eq!(h.controller.tasks().len(), 2);
    }

    #[tokio::test]
    async fn test_create_failure_changes_nothing() {
        let h = started(vec![make_task(1, 2, "old")]).await;
        h.fail_writes(true);

        assert!(h.controller.create(EntityId::from(1), "X".into()).await.is_none());
        assert_eq!(h.controller.rows().len(), 1);
        assert_eq!(h.controller.tasks().len(), 1);
        assert_eq!(h.reports.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_sends_one_update() {
        let h = harness(Some(vec![make_task(5, 1, "five")]), Some(make_users()));
        h.controller.start().await;
        let key = h.controller.rows()[0].key;

        assert!(h.controller.toggle(key, true).await);

        assert_eq!(h.writes(), [Call::Update(EntityId::from("5"), true)]);
        assert_eq!(h.controller.rows()[0].key, key);
        assert!(h.controller.rows()[0].completed);
        assert!(h.controller.tasks()[0].completed);
    }

    #[tokio::test]
    async fn test_toggle_failure_keeps_checkbox_state() {
        let h = started(vec![make_task(5, 1, "five")]).await;
        h.fail_writes(true);
        let key = h.controller.rows()[0].key;

        assert!(!h.controller.toggle(key, true).await);

        assert!(h.controller.rows()[0].completed);
        assert!(!h.controller.tasks()[0].completed);
        assert_eq!(h.writes().len(), 1);
        assert_eq!(h.reports.borrow().as_slice(), [todo_client::SERVER_UNAVAILABLE.to_string()]);
    }

    #[tokio::test]
    async fn test_dismiss_removes_row_and_task() {
        let h = started(vec![make_task(4, 1, "four"), make_task(5, 1, "five")]).await;
        let key = h.controller.rows()[0].key;

        assert!(h.controller.dismiss(key).await);

        assert_eq!(h.writes(), [Call::Delete(EntityId::from(5))]);
        let rows = h.controller.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "four");
        assert_eq!(h.controller.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_dismiss_failure_keeps_row_and_task() {
        let h = started(vec![make_task(5, 1, "five")]).await;
        h.fail_writes(true);
        let key = h.controller.rows()[0].key;

        assert!(!h.controller.dismiss(key).await);

        assert_eq!(h.writes(), [Call::Delete(EntityId::from(5))]);
        assert_eq!(h.controller.rows().len(), 1);
        assert_eq!(h.controller.tasks().len(), 1);
        assert_eq!(h.reports.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_owner_options_stable_across_actions() {
        let h = started(vec![make_task(5, 1, "five")]).await;
        let before = h.controller.owner_options();

        h.controller.create(EntityId::from(2), "X".into()).await.expect("create should succeed");
        let key = h.controller.rows()[1].key;
        assert!(h.controller.toggle(key, true).await);
        assert!(h.controller.dismiss(key).await);

        assert_eq!(h.controller.owner_options(), before);
        assert_eq!(h.calls.borrow().iter().filter(|call| matches!(call, Call::ListUsers(_))).count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_row_sends_nothing() {
        let h = started(vec![make_task(5, 1, "five")]).await;
        let key = h.controller.rows()[0].key;
        assert!(h.controller.dismiss(key).await);

        assert!(!h.controller.dismiss(key).await);
        assert!(!h.controller.toggle(key, true).await);
        assert_eq!(h.writes().len(), 1);
    }
}
