//! Rendering for the finder UI
//!
//! Draws the query prompt, a match counter and a bounded window of the
//! filtered list. The window follows the cursor via the session's scroll
//! offset.

use super::state::{MAX_VISIBLE, SessionState};
use super::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

const PROMPT: &str = "> ";

/// Render one frame of the finder.
pub fn render(frame: &mut Frame, state: &SessionState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query prompt
            Constraint::Length(1), // Match counter
            Constraint::Min(1),    // Item list
        ])
        .split(frame.area());

    let prompt_line = Line::from(vec![
        Span::styled(PROMPT, theme.prompt_style()),
        Span::raw(state.query.as_str()),
    ]);
    frame.render_widget(Paragraph::new(prompt_line), chunks[0]);

    // Place the terminal cursor inside the query.
    let query_cols = state.query[..state.query_cursor].chars().count();
    #[allow(clippy::cast_possible_truncation)]
    let cursor_x = chunks[0].x + (PROMPT.len() + query_cols) as u16;
    frame.set_cursor_position((cursor_x.min(chunks[0].right().saturating_sub(1)), chunks[0].y));

    let counter = format!("  {}/{}", state.filtered.len(), state.items.len());
    frame.render_widget(
        Paragraph::new(counter).style(theme.dimmed_style()),
        chunks[1],
    );

    if state.filtered.is_empty() {
        frame.render_widget(
            Paragraph::new("  no matches").style(theme.dimmed_style()),
            chunks[2],
        );
        return;
    }

    let visible = (chunks[2].height as usize).min(MAX_VISIBLE);
    let start = state.scroll_offset;
    let end = (start + visible).min(state.filtered.len());

    let items: Vec<ListItem> = state.filtered[start..end]
        .iter()
        .enumerate()
        .map(|(visible_idx, &item_idx)| {
            let is_cursor = start + visible_idx == state.cursor;
            let marker = if is_cursor { "> " } else { "  " };
            let text_style = if is_cursor {
                theme.selected_style()
            } else {
                theme.normal_style()
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, theme.cursor_style()),
                Span::styled(state.items[item_idx as usize].as_str(), text_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), chunks[2]);
}
