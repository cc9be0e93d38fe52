//! Light and dark color palettes.

use ratatui::style::{Color, Modifier, Style};

/// Colors used by every component; selected by the dark-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub done: Color,
    pub selection: Color,
    pub editing: Color,
    pub error: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Blue,
            done: Color::Gray,
            selection: Color::LightBlue,
            editing: Color::Magenta,
            error: Color::Red,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            muted: Color::Gray,
            accent: Color::Cyan,
            done: Color::DarkGray,
            selection: Color::DarkGray,
            editing: Color::Yellow,
            error: Color::LightRed,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted_style(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn accent_style(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn done_style(&self) -> Style {
        self.base().fg(self.done).add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().bg(self.selection).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
