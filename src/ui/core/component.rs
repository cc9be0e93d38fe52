use super::actions::Action;
use crate::controller::TaskListState;
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A piece of the screen that reacts to keys and renders from shared state.
///
/// Components never mutate [`TaskListState`] directly; they translate input
/// into [`Action`]s that the app component applies through the controller.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent, state: &TaskListState) -> Action;

    fn update(&mut self, action: Action, _state: &TaskListState) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, state: &TaskListState, theme: &Theme);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
