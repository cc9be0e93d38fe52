use super::scroll_behavior::DialogScroll;
use crate::constants::{DIALOG_DISMISS_HINT, DIALOG_TITLE_ERROR, DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

/// Key reference shown by the help dialog
pub const HELP_LINES: &[&str] = &[
    "Tasks",
    "  j / ↓        next task",
    "  k / ↑        previous task",
    "  space        toggle completed",
    "  enter / e    edit title",
    "  d / del      delete task",
    "",
    "Adding",
    "  a / i / '/'  type a new task",
    "  enter        add it",
    "  esc          back to the list",
    "",
    "Editing",
    "  enter        save",
    "  esc          cancel",
    "",
    "View",
    "  1 / 2 / 3    all / completed / pending",
    "  f / tab      next filter",
    "  r            reload",
    "  t            toggle dark mode",
    "",
    "Other",
    "  G            logs",
    "  ? / h        this help",
    "  q / ctrl-c   quit",
];

/// Blocking notification; stays until dismissed.
pub fn render_error_dialog(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" ⚠ {} ", DIALOG_TITLE_ERROR))
        .title_alignment(Alignment::Center)
        .style(theme.base().fg(theme.error));

    let text = format!("{}\n\n{}", message, DIALOG_DISMISS_HINT);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, dialog_area);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll, theme: &Theme) {
    let lines: Vec<String> = HELP_LINES.iter().map(|line| line.to_string()).collect();
    render_scrollable_dialog(f, area, DIALOG_TITLE_HELP, &lines, scroll, theme);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut DialogScroll, theme: &Theme) {
    if logs.is_empty() {
        let empty = vec!["No log entries yet".to_string()];
        render_scrollable_dialog(f, area, DIALOG_TITLE_LOGS, &empty, scroll, theme);
    } else {
        render_scrollable_dialog(f, area, DIALOG_TITLE_LOGS, logs, scroll, theme);
    }
}

fn render_scrollable_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[String],
    scroll: &mut DialogScroll,
    theme: &Theme,
) {
    let dialog_area = LayoutManager::centered_rect(80, 70, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .style(theme.base().fg(theme.accent));

    let content_area = block.inner(dialog_area);
    let visible_height = content_area.height as usize;
    let offset = scroll.clamp(lines.len(), visible_height);

    let visible: Vec<&str> = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .map(String::as_str)
        .collect();

    let paragraph = Paragraph::new(visible.join("\n")).style(theme.base());

    f.render_widget(block, dialog_area);
    f.render_widget(paragraph, content_area);

    if lines.len() > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(theme.muted_style());

        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar_state);
    }
}
