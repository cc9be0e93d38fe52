//! Draft input for new tasks

use crate::constants::DRAFT_PLACEHOLDER;
use crate::controller::TaskListState;
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Single-line input holding the draft title. Enter submits it.
#[derive(Default)]
pub struct DraftInputComponent {
    focused: bool,
}

impl DraftInputComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Component for DraftInputComponent {
    fn handle_key_events(&mut self, key: KeyEvent, _state: &TaskListState) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitDraft,
            KeyCode::Esc => Action::BlurDraft,
            KeyCode::Backspace => Action::DraftBackspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::DraftInput(c),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action, _state: &TaskListState) -> Action {
        match action {
            Action::FocusDraft => {
                self.on_focus();
                Action::None
            }
            Action::BlurDraft => {
                self.on_blur();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, state: &TaskListState, theme: &Theme) {
        let border_style = if self.focused {
            theme.accent_style()
        } else {
            theme.muted_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme.base());

        let paragraph = if self.focused {
            Paragraph::new(format!("{}█", state.draft)).style(theme.base())
        } else if state.draft.is_empty() {
            Paragraph::new(DRAFT_PLACEHOLDER).style(theme.muted_style())
        } else {
            Paragraph::new(state.draft.as_str()).style(theme.base())
        };

        f.render_widget(paragraph.block(block), rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
