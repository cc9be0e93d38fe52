#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use yourtasks::backend::{BackendError, CreateTaskArgs, TaskService, UpdateTaskArgs};
use yourtasks::task::{Filter, Task, TaskId};

pub fn task(id: &str, title: &str, completed: bool) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        completed,
    }
}

/// In-memory task store that counts every call it receives.
pub struct FakeTaskService {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicU64,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl FakeTaskService {
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            next_id: AtomicU64::new(100),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every following call answer with a 500
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    pub fn stored_task(&self, id: &str) -> Option<Task> {
        self.stored().into_iter().find(|task| task.id.as_str() == id)
    }

    fn begin(&self) -> Result<(), BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            Err(BackendError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn not_found(id: &TaskId) -> BackendError {
        BackendError::Status {
            status: 404,
            body: format!("no task {}", id),
        }
    }
}

#[async_trait]
impl TaskService for FakeTaskService {
    fn backend_type(&self) -> &str {
        "fake"
    }

    async fn list_tasks(&self, filter: Filter) -> Result<Vec<Task>, BackendError> {
        self.begin()?;
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect())
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        self.begin()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Task {
            id: TaskId::new(id.to_string()),
            title: args.title,
            completed: false,
        };
        self.tasks.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_task(&self, id: &TaskId, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        self.begin()?;
        let mut tasks = self.tasks.lock().unwrap();
        let stored = tasks.iter_mut().find(|task| &task.id == id).ok_or_else(|| Self::not_found(id))?;
        stored.title = args.title;
        stored.completed = args.completed;
        Ok(stored.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), BackendError> {
        self.begin()?;
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|task| &task.id != id);
        if tasks.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
