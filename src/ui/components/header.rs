//! Title line with the dark-mode indicator

use crate::constants::{DARK_MODE_LABEL, HEADER_TITLE, LIGHT_MODE_LABEL};
use crate::controller::TaskListState;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

pub struct Header;

impl Header {
    /// Label of the toggle: it names the mode the `t` key switches to
    pub fn toggle_label(dark_mode: bool) -> &'static str {
        if dark_mode {
            LIGHT_MODE_LABEL
        } else {
            DARK_MODE_LABEL
        }
    }

    pub fn render(f: &mut Frame, area: Rect, state: &TaskListState, theme: &Theme) {
        let label = Self::toggle_label(state.dark_mode);
        let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).split(area);

        f.render_widget(Paragraph::new(HEADER_TITLE).style(theme.accent_style()), chunks[0]);
        f.render_widget(
            Paragraph::new(format!("t: {}", label))
                .style(theme.muted_style())
                .alignment(Alignment::Right),
            chunks[1],
        );
    }
}
