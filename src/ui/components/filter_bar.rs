//! Filter selector

use crate::controller::TaskListState;
use crate::task::Filter;
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Modifier, widgets::Tabs, Frame};

pub struct FilterBarComponent;

impl Component for FilterBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent, _state: &TaskListState) -> Action {
        match key.code {
            KeyCode::Char('1') => Action::SetFilter(Filter::All),
            KeyCode::Char('2') => Action::SetFilter(Filter::Completed),
            KeyCode::Char('3') => Action::SetFilter(Filter::Pending),
            KeyCode::Char('f') | KeyCode::Tab => Action::NextFilter,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, state: &TaskListState, theme: &Theme) {
        let selected = Filter::ALL
            .iter()
            .position(|filter| *filter == state.filter)
            .unwrap_or(0);

        let tabs = Tabs::new(Filter::ALL.iter().map(|filter| filter.as_str()))
            .select(selected)
            .style(theme.muted_style())
            .highlight_style(theme.accent_style().add_modifier(Modifier::UNDERLINED))
            .divider(" ");

        f.render_widget(tabs, rect);
    }
}
