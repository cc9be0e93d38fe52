use ratatui::widgets::ScrollbarState;

const PAGE_LINES: usize = 10;

/// Scroll position of a dialog body, clamped when rendered.
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_LINES));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_LINES));
    }

    pub fn to_top(&mut self) {
        self.set(0);
    }

    pub fn to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Offset limited to the content, recording it in the scrollbar state
    pub fn clamp(&mut self, total_lines: usize, visible_lines: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_lines);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_lines)
            .position(self.offset);
        self.offset
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }
}
