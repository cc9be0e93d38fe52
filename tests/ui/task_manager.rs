use crate::common::{task, FakeTaskService};
use std::sync::Arc;
use std::time::{Duration, Instant};
use yourtasks::controller::{Outcome, Request};
use yourtasks::task::{Filter, TaskId};
use yourtasks::ui::core::{Action, TaskManager};

#[tokio::test]
async fn test_spawned_request_reports_outcome() {
    let service = Arc::new(FakeTaskService::with_tasks(vec![
        task("1", "Write report", false),
        task("2", "Buy bread", true),
    ]));
    let (mut manager, mut rx) = TaskManager::new();

    let id = manager.spawn_request(service.clone(), Request::Load(Filter::Completed));
    assert_eq!(id, 1);
    assert!(manager.is_loading());
    assert_eq!(manager.request_count(), 1);

    match rx.recv().await {
        Some(Action::RequestFinished(Outcome::Loaded { filter, tasks })) => {
            assert_eq!(filter, Filter::Completed);
            assert_eq!(tasks, vec![task("2", "Buy bread", true)]);
        }
        other => panic!("unexpected action: {other:?}"),
    }

    let started = Instant::now();
    let mut finished = Vec::new();
    for _ in 0..100 {
        finished = manager.cleanup_finished_requests();
        if !finished.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].description, "Load completed tasks");
    assert!(finished[0].elapsed <= started.elapsed() + Duration::from_millis(50));
    assert!(!manager.is_loading());
    assert_eq!(manager.request_count(), 0);
}

#[tokio::test]
async fn test_failed_request_reports_failure() {
    let service = Arc::new(FakeTaskService::new());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_request(service, Request::Delete(TaskId::new("missing")));
    assert!(!manager.is_loading());

    match rx.recv().await {
        Some(Action::RequestFinished(Outcome::Failed { message, detail })) => {
            assert_eq!(message, "Delete failed");
            assert!(detail.contains("missing"));
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_request_ids_increase_and_cancel_clears() {
    let service = Arc::new(FakeTaskService::new());
    let (mut manager, _rx) = TaskManager::new();

    let first = manager.spawn_request(service.clone(), Request::Load(Filter::All));
    let second = manager.spawn_request(service, Request::Load(Filter::Pending));
    assert!(second > first);
    assert_eq!(manager.request_count(), 2);

    manager.cancel_all_requests();
    assert_eq!(manager.request_count(), 0);
}
