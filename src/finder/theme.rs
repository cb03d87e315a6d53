//! Color theme for the finder UI
//!
//! A theme is passed into the finder by value; there is no process-wide
//! style state.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the finder
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for the query prompt
    pub prompt: Color,
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for the match counter and dimmed text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            prompt: Color::Cyan,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the query prompt
    #[must_use]
    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt).add_modifier(Modifier::BOLD)
    }

    /// Style for the highlighted row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    /// Style for the match counter and placeholder text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
