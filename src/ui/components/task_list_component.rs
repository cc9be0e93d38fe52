use crate::constants::EMPTY_LIST_MESSAGE;
use crate::controller::TaskListState;
use crate::task::Task;
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Scrollable task list with a cursor; the edit target renders as an inline input.
pub struct TaskListComponent {
    pub selected_index: usize,
    pub list_state: ListState,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    /// Task under the cursor, if any
    pub fn selected_task<'a>(&self, state: &'a TaskListState) -> Option<&'a Task> {
        state.tasks.get(self.selected_index)
    }

    /// Keep the cursor inside the collection after it was replaced or shrunk
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= len {
                self.selected_index = len - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn next(&mut self, len: usize) {
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    fn previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn create_task_item<'a>(task: &'a Task, state: &'a TaskListState, theme: &Theme) -> ListItem<'a> {
        let checkbox = if task.completed { "[x] " } else { "[ ] " };

        let line = match &state.edit {
            Some(session) if session.task_id == task.id => Line::from(vec![
                Span::styled(checkbox, theme.base()),
                Span::styled(
                    format!("{}█", session.text),
                    theme.base().fg(theme.editing),
                ),
            ]),
            _ => {
                let title_style = if task.completed { theme.done_style() } else { theme.base() };
                Line::from(vec![
                    Span::styled(checkbox, theme.base()),
                    Span::styled(task.title.as_str(), title_style),
                ])
            }
        };

        ListItem::new(line)
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent, state: &TaskListState) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char(' ') => self
                .selected_task(state)
                .map_or(Action::None, |task| Action::ToggleTask(task.id.clone())),
            KeyCode::Enter | KeyCode::Char('e') => self
                .selected_task(state)
                .map_or(Action::None, |task| Action::StartEdit(task.id.clone())),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_task(state)
                .map_or(Action::None, |task| Action::DeleteTask(task.id.clone())),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action, state: &TaskListState) -> Action {
        match action {
            Action::NextTask => {
                self.next(state.tasks.len());
                self.clamp_selection(state.tasks.len());
                Action::None
            }
            Action::PreviousTask => {
                self.previous();
                self.clamp_selection(state.tasks.len());
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, state: &TaskListState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({}) ", state.filter, state.tasks.len()))
            .style(theme.base())
            .border_style(theme.muted_style());

        if state.tasks.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_MESSAGE)
                .block(block)
                .style(theme.muted_style())
                .alignment(Alignment::Center);
            f.render_widget(empty, rect);
            return;
        }

        self.clamp_selection(state.tasks.len());

        let items: Vec<ListItem> = state
            .tasks
            .iter()
            .map(|task| Self::create_task_item(task, state, theme))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.highlight_style())
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
