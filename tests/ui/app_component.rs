use crate::common::{task, FakeTaskService};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use yourtasks::constants::{EMPTY_LIST_MESSAGE, ERROR_FETCH_FAILED, HEADER_TITLE};
use yourtasks::controller::{Mode, TaskListState};
use yourtasks::logger::Logger;
use yourtasks::task::{Filter, TaskId};
use yourtasks::ui::core::Action;
use yourtasks::ui::AppComponent;

fn seeded_service() -> Arc<FakeTaskService> {
    Arc::new(FakeTaskService::with_tasks(vec![
        task("1", "Write report", false),
        task("2", "Buy bread", true),
        task("3", "Call mom", false),
    ]))
}

fn new_app(service: &Arc<FakeTaskService>) -> AppComponent {
    AppComponent::new(service.clone(), TaskListState::default(), Logger::new())
}

/// Feed `code` through key routing and the component chain
fn press(app: &mut AppComponent, code: KeyCode) {
    let action = app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    app.dispatch(action);
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Let background requests finish and apply their outcomes
async fn settle(app: &mut AppComponent) {
    for _ in 0..200 {
        app.process_background_actions();
        if app.active_request_count() == 0 {
            // A request may finish between draining and cleanup
            app.process_background_actions();
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("background requests did not finish");
}

async fn loaded_app(service: &Arc<FakeTaskService>) -> AppComponent {
    let mut app = new_app(service);
    app.trigger_initial_load();
    settle(&mut app).await;
    app
}

fn screen_text(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_initial_load_fills_list() {
    let service = seeded_service();
    let app = loaded_app(&service).await;

    assert_eq!(app.state().tasks.len(), 3);
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn test_typing_a_draft_creates_task() {
    let service = Arc::new(FakeTaskService::new());
    let mut app = loaded_app(&service).await;

    press(&mut app, KeyCode::Char('a'));
    assert!(app.is_draft_focused());

    // Global keys are plain text while the draft has focus
    type_text(&mut app, "Buy milk q");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.state().draft, "Buy milk");
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert_eq!(app.state().tasks.len(), 1);
    assert_eq!(app.state().tasks[0].title, "Buy milk");
    assert!(!app.state().tasks[0].completed);
    assert_eq!(app.state().draft, "");

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_draft_focused());
}

#[tokio::test]
async fn test_blank_draft_sends_nothing() {
    let service = Arc::new(FakeTaskService::new());
    let mut app = loaded_app(&service).await;
    let calls = service.call_count();

    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.active_request_count(), 0);
    assert_eq!(service.call_count(), calls);
    assert!(app.state().notification.is_none());
}

#[tokio::test]
async fn test_space_toggles_selected_task() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;

    press(&mut app, KeyCode::Char(' '));
    settle(&mut app).await;

    assert!(app.state().tasks[0].completed);
    assert!(service.stored_task("1").unwrap().completed);
}

#[tokio::test]
async fn test_delete_selected_task() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    settle(&mut app).await;

    let ids: Vec<&str> = app.state().tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[tokio::test]
async fn test_inline_edit_and_save() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.state().mode(), Mode::Editing(TaskId::new("1")));

    // Navigation keys are text while editing
    for _ in 0.."report".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "joke");
    assert_eq!(app.state().edit.as_ref().unwrap().text, "Write joke");

    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert_eq!(app.state().mode(), Mode::Viewing);
    assert_eq!(app.state().tasks[0].title, "Write joke");
    assert_eq!(service.stored_task("1").unwrap().title, "Write joke");
}

#[tokio::test]
async fn test_escape_cancels_edit() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;
    let calls = service.call_count();

    press(&mut app, KeyCode::Enter);
    type_text(&mut app, " draft");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.state().mode(), Mode::Viewing);
    assert_eq!(app.state().tasks[0].title, "Write report");
    assert_eq!(service.call_count(), calls);
}

#[tokio::test]
async fn test_blank_edit_shows_notification() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;

    press(&mut app, KeyCode::Char('e'));
    for _ in 0.."Write report".len() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().notification.as_deref(), Some("Cannot be empty"));
    assert_eq!(app.active_request_count(), 0);

    press(&mut app, KeyCode::Enter);
    assert!(app.state().notification.is_none());
    assert_eq!(app.state().mode(), Mode::Editing(TaskId::new("1")));
}

#[tokio::test]
async fn test_notification_blocks_input_until_dismissed() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;

    service.set_failing(true);
    press(&mut app, KeyCode::Char('r'));
    settle(&mut app).await;

    assert_eq!(app.state().notification.as_deref(), Some(ERROR_FETCH_FAILED));
    assert_eq!(app.state().tasks.len(), 3);

    let action = app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(matches!(action, Action::None));
    app.dispatch(action);
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(app.state().notification.is_none());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_filter_keys_reload_once() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;

    press(&mut app, KeyCode::Char('2'));
    settle(&mut app).await;
    assert_eq!(app.state().filter, Filter::Completed);
    assert!(app.state().tasks.iter().all(|t| t.completed));

    let calls = service.call_count();
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_request_count(), 0);
    assert_eq!(service.call_count(), calls);

    press(&mut app, KeyCode::Tab);
    settle(&mut app).await;
    assert_eq!(app.state().filter, Filter::Pending);
    assert!(app.state().tasks.iter().all(|t| !t.completed));
}

#[tokio::test]
async fn test_dark_mode_and_dialogs() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;

    press(&mut app, KeyCode::Char('t'));
    assert!(app.state().dark_mode);

    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());
    // Keys go to the dialog while it is open
    press(&mut app, KeyCode::Char('t'));
    assert!(app.state().dark_mode);
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());

    press(&mut app, KeyCode::Char('G'));
    assert!(app.is_dialog_visible());
    press(&mut app, KeyCode::Char('G'));
    assert!(!app.is_dialog_visible());
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn test_render_empty_list() {
    let service = Arc::new(FakeTaskService::new());
    let mut app = new_app(&service);

    let screen = screen_text(&mut app);

    assert!(screen.contains(HEADER_TITLE));
    assert!(screen.contains(EMPTY_LIST_MESSAGE));
    assert!(screen.contains("all (0)"));
}

#[tokio::test]
async fn test_render_tasks_and_edit_field() {
    let service = seeded_service();
    let mut app = loaded_app(&service).await;

    let screen = screen_text(&mut app);
    assert!(screen.contains("[ ] Write report"));
    assert!(screen.contains("[x] Buy bread"));
    assert!(screen.contains("all (3)"));

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "!");
    let screen = screen_text(&mut app);
    assert!(screen.contains("Write report!"));
}

#[tokio::test]
async fn test_render_notification() {
    let service = seeded_service();
    service.set_failing(true);
    let mut app = loaded_app(&service).await;

    let screen = screen_text(&mut app);
    assert!(screen.contains(ERROR_FETCH_FAILED));
}

#[tokio::test]
async fn test_finished_requests_are_logged_with_duration() {
    let service = seeded_service();
    let logger = Logger::new();
    let mut app = AppComponent::new(service.clone(), TaskListState::default(), logger.clone());

    app.trigger_initial_load();
    settle(&mut app).await;

    let logs = logger.get_logs();
    assert!(
        logs.iter().any(|line| line.contains("'Load all tasks' finished in")),
        "missing timing line in {logs:?}"
    );
}
