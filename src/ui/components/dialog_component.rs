//! Modal dialogs.
//!
//! Hosts the help and logs dialogs and renders the blocking error
//! notification on top of everything else. The notification itself lives in
//! the task list state; key handling for it is done by the app component.

use crate::controller::TaskListState;
use crate::logger::Logger;
use crate::ui::components::dialogs::{system_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    scroll: DialogScroll,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll: DialogScroll::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll.reset();
    }

    fn close(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent, _state: &TaskListState) -> Action {
        match (self.dialog_type, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => Action::HideDialog,
            (Some(DialogType::Help), KeyCode::Char('?') | KeyCode::Char('h')) => Action::HideDialog,
            (Some(DialogType::Logs), KeyCode::Char('G')) => Action::HideDialog,
            (_, KeyCode::Char('j') | KeyCode::Down) => {
                self.scroll.down();
                Action::None
            }
            (_, KeyCode::Char('k') | KeyCode::Up) => {
                self.scroll.up();
                Action::None
            }
            (_, KeyCode::PageDown) => {
                self.scroll.page_down();
                Action::None
            }
            (_, KeyCode::PageUp) => {
                self.scroll.page_up();
                Action::None
            }
            (_, KeyCode::Home | KeyCode::Char('g')) => {
                self.scroll.to_top();
                Action::None
            }
            (_, KeyCode::End) => {
                self.scroll.to_bottom();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action, _state: &TaskListState) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.close();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, state: &TaskListState, theme: &Theme) {
        match self.dialog_type {
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll, theme),
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll, theme);
            }
            None => {}
        }

        if let Some(message) = &state.notification {
            system_dialogs::render_error_dialog(f, rect, message, theme);
        }
    }
}
