use super::actions::Action;
use crate::backend::TaskService;
use crate::controller::{execute, Request};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type RequestId = u64;

#[derive(Debug)]
pub struct BackgroundRequest {
    pub handle: JoinHandle<()>,
    pub description: String,
    pub is_load: bool,
    pub started_at: Instant,
}

/// A request whose future has completed, as reported by cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedRequest {
    pub description: String,
    pub elapsed: Duration,
}

/// Runs task service requests on the tokio runtime.
///
/// Each request reports back through the action channel as
/// [`Action::RequestFinished`]. Requests are independent: nothing orders or
/// cancels them except dropping the manager.
pub struct TaskManager {
    requests: HashMap<RequestId, BackgroundRequest>,
    next_request_id: RequestId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                requests: HashMap::new(),
                next_request_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn `request` against `service` in the background
    pub fn spawn_request(&mut self, service: Arc<dyn TaskService>, request: Request) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let action_sender = self.action_sender.clone();
        let description = request.describe();
        let is_load = matches!(request, Request::Load(_));

        let handle = tokio::spawn(async move {
            let outcome = execute(service.as_ref(), request).await;
            let _ = action_sender.send(Action::RequestFinished(outcome));
        });

        let background = BackgroundRequest {
            handle,
            description,
            is_load,
            started_at: Instant::now(),
        };

        self.requests.insert(request_id, background);
        request_id
    }

    /// Forget requests whose futures have completed, reporting how long each took
    pub fn cleanup_finished_requests(&mut self) -> Vec<FinishedRequest> {
        let finished: Vec<RequestId> = self
            .requests
            .iter()
            .filter(|(_, request)| request.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.requests.remove(&id))
            .map(|request| FinishedRequest {
                elapsed: request.started_at.elapsed(),
                description: request.description,
            })
            .collect()
    }

    /// Check if any list query is still in flight
    pub fn is_loading(&self) -> bool {
        self.requests.values().any(|request| request.is_load)
    }

    /// Get the number of in-flight requests
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Abort all running requests
    pub fn cancel_all_requests(&mut self) {
        for (_, request) in self.requests.drain() {
            request.handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_requests();
    }
}
