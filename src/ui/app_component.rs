use crate::backend::TaskService;
use crate::controller::{Outcome, Request, TaskListController, TaskListState};
use crate::logger::Logger;
use crate::ui::components::{
    DialogComponent, DraftInputComponent, FilterBarComponent, Header, StatusBar, TaskListComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::Block, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Root component: routes input, runs requests, owns the controller.
pub struct AppComponent {
    // Component composition
    draft_input: DraftInputComponent,
    filter_bar: FilterBarComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    controller: TaskListController,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: Arc<dyn TaskService>, state: TaskListState, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        Self {
            draft_input: DraftInputComponent::new(),
            filter_bar: FilterBarComponent,
            task_list: TaskListComponent::new(),
            dialog,
            controller: TaskListController::new(service, state),
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &TaskListState {
        self.controller.state()
    }

    pub fn is_draft_focused(&self) -> bool {
        self.draft_input.is_focused()
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Get the number of in-flight requests
    pub fn active_request_count(&self) -> usize {
        self.task_manager.request_count()
    }

    /// Load the configured filter on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("AppComponent: Starting initial load".to_string());
        let request = self.controller.reload();
        self.spawn_request(request);
    }

    fn spawn_request(&mut self, request: Request) {
        self.logger
            .log(format!("Background: Spawning request '{}'", request.describe()));
        let service = self.controller.service();
        self.task_manager.spawn_request(service, request);
    }

    fn spawn_optional(&mut self, request: Option<Request>) {
        if let Some(request) = request {
            self.spawn_request(request);
        }
    }

    /// Keys while a task title is being edited
    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SaveEdit,
            KeyCode::Esc => Action::CancelEdit,
            KeyCode::Backspace => Action::EditBackspace,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(c) => Action::EditInput(c),
            _ => Action::None,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('/') => Action::FocusDraft,
            KeyCode::Char('t') => Action::ToggleDarkMode,
            KeyCode::Char('r') => Action::Reload,
            _ => Action::None,
        }
    }

    /// Route a key to whoever owns input right now
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let state = self.controller.state();

        if state.notification.is_some() {
            // The notification blocks everything until acknowledged
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissNotification,
                _ => Action::None,
            };
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key, state);
        }

        if state.edit.is_some() {
            return self.handle_edit_key(key);
        }

        if self.draft_input.is_focused() {
            return self.draft_input.handle_key_events(key, state);
        }

        let action = self.task_list.handle_key_events(key, state);
        if !matches!(action, Action::None) {
            return action;
        }

        let action = self.filter_bar.handle_key_events(key, state);
        if !matches!(action, Action::None) {
            return action;
        }

        self.handle_global_key(key)
    }

    /// Apply an action that survived the component chain
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::DraftInput(c) => self.controller.push_draft_char(c),
            Action::DraftBackspace => self.controller.pop_draft_char(),
            Action::SubmitDraft => {
                let request = self.controller.submit_draft();
                self.spawn_optional(request);
            }
            Action::ToggleTask(id) => {
                if let Some(task) = self.controller.state().find(&id).cloned() {
                    self.logger
                        .log(format!("Task: Toggling '{}' (ID: {})", task.title, task.id));
                    let request = self.controller.toggle_complete(&task);
                    self.spawn_request(request);
                }
            }
            Action::DeleteTask(id) => {
                self.logger.log(format!("Task: Deleting task ID {}", id));
                let request = self.controller.delete(&id);
                self.spawn_request(request);
            }
            Action::StartEdit(id) => {
                if let Some(task) = self.controller.state().find(&id).cloned() {
                    self.logger.log(format!("Task: Editing task ID {}", id));
                    self.controller.start_edit(&task);
                }
            }
            Action::EditInput(c) => self.controller.push_edit_char(c),
            Action::EditBackspace => self.controller.pop_edit_char(),
            Action::SaveEdit => {
                let request = self.controller.save_current_edit();
                self.spawn_optional(request);
            }
            Action::CancelEdit => {
                self.logger.log("Task: Edit cancelled".to_string());
                self.controller.cancel_edit();
            }
            Action::SetFilter(filter) => {
                let request = self.controller.set_filter(filter);
                self.spawn_optional(request);
            }
            Action::NextFilter => {
                let next = self.controller.state().filter.next();
                let request = self.controller.set_filter(next);
                self.spawn_optional(request);
            }
            Action::ToggleDarkMode => {
                self.controller.toggle_dark_mode();
                self.logger.log(format!(
                    "View: Dark mode {}",
                    if self.controller.state().dark_mode { "on" } else { "off" }
                ));
            }
            Action::Reload => {
                let request = self.controller.reload();
                self.spawn_request(request);
            }
            Action::RequestFinished(outcome) => {
                self.log_outcome(&outcome);
                self.controller.apply(outcome);
                self.task_list.clamp_selection(self.controller.state().tasks.len());
            }
            Action::DismissNotification => self.controller.state_mut().dismiss_notification(),
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    fn log_outcome(&self, outcome: &Outcome) {
        let message = match outcome {
            Outcome::Loaded { filter, tasks } => format!("Data: Loaded {} tasks for '{}'", tasks.len(), filter),
            Outcome::Created(task) => format!("Task: Created '{}' (ID: {})", task.title, task.id),
            Outcome::Toggled(task) => format!("Task: {} now completed={}", task.id, task.completed),
            Outcome::Saved(task) => format!("Task: Saved {} as '{}'", task.id, task.title),
            Outcome::Deleted(id) => format!("Task: Deleted {}", id),
            Outcome::Failed { message, detail } => format!("Error: {} ({})", message, detail),
        };
        self.logger.log(message);
    }

    /// Drain results of finished background requests
    pub fn process_background_actions(&mut self) {
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.handle_app_action(action);
        }

        for finished in self.task_manager.cleanup_finished_requests() {
            self.logger.log(format!(
                "Background: '{}' finished in {} ms",
                finished.description,
                finished.elapsed.as_millis()
            ));
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }

    /// Run `action` through the components, then apply what is left
    pub fn dispatch(&mut self, action: Action) {
        let state = self.controller.state();
        let action = self.dialog.update(action, state);
        let action = self.draft_input.update(action, state);
        let action = self.task_list.update(action, state);
        self.handle_app_action(action);
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let state = self.controller.state();
        let theme = Theme::for_mode(state.dark_mode);
        let areas = LayoutManager::main_layout(rect);

        f.render_widget(Block::default().style(theme.base()), rect);

        Header::render(f, areas.header, state, &theme);
        self.draft_input.render(f, areas.draft, state, &theme);
        self.filter_bar.render(f, areas.filters, state, &theme);
        self.task_list.render(f, areas.tasks, state, &theme);

        let status = StatusBar::status_text(
            self.task_manager.is_loading(),
            self.task_manager.request_count(),
            state.edit.is_some(),
        );
        StatusBar::render(f, areas.status, status, &theme);

        self.dialog.render(f, rect, state, &theme);
    }
}
