//! Status bar component

use crate::constants::{HINT_TEXT, LOADING_MESSAGE};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn status_text(loading: bool, in_flight: usize, editing: bool) -> String {
        if loading {
            format!("🔄 {}", LOADING_MESSAGE)
        } else if editing {
            "Enter: save • Esc: cancel".to_string()
        } else if in_flight > 0 {
            format!("🔄 {} request(s) in flight", in_flight)
        } else {
            HINT_TEXT.to_string()
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, text: String, theme: &Theme) {
        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(theme.muted_style());

        f.render_widget(status_bar, area);
    }
}
