//! Session state for the interactive finder
//!
//! One [`SessionState`] is owned by the event loop for the lifetime of a
//! selection session. It is mutated only in response to input events, so
//! transitions can be unit-tested by feeding synthetic event sequences.

use nucleo::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};
use std::cmp::Reverse;

/// Maximum number of list rows visible at once
pub const MAX_VISIBLE: usize = 10;

/// Mutable state of one selection session
#[derive(Debug)]
pub struct SessionState {
    /// Full candidate list, fixed for the session
    pub items: Vec<String>,
    /// Indices into `items` matching the current query, best match first
    pub filtered: Vec<u32>,
    /// Cursor position within `filtered`
    pub cursor: usize,
    /// Scroll offset of the visible window into `filtered`
    pub scroll_offset: usize,
    /// Current search query
    pub query: String,
    /// Byte position of the edit cursor within the query
    pub query_cursor: usize,
    /// Candidate captured by a confirm event
    pub selected: Option<String>,
    /// Whether the session was cancelled
    pub cancelled: bool,
    /// Whether the loop should exit
    pub should_exit: bool,
}

impl SessionState {
    /// Create a session over `items` with no filter applied.
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let filtered: Vec<u32> = (0..items.len() as u32).collect();

        Self {
            items,
            filtered,
            cursor: 0,
            scroll_offset: 0,
            query: String::new(),
            query_cursor: 0,
            selected: None,
            cancelled: false,
            should_exit: false,
        }
    }

    /// Candidate under the cursor, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.filtered
            .get(self.cursor)
            .map(|&idx| self.items[idx as usize].as_str())
    }

    /// Move cursor up, floored at the first row.
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down, capped at the last filtered row.
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Keep the cursor inside the visible window.
    ///
    /// The window only moves when the cursor crosses its edges.
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + MAX_VISIBLE {
            self.scroll_offset = self.cursor + 1 - MAX_VISIBLE;
        }
    }

    /// Capture the candidate under the cursor and end the session.
    ///
    /// No-op when the filtered list is empty.
    pub fn confirm(&mut self) {
        if let Some(item) = self.current() {
            self.selected = Some(item.to_string());
            self.should_exit = true;
        }
    }

    /// End the session without a selection.
    pub const fn abort(&mut self) {
        self.cancelled = true;
        self.should_exit = true;
    }

    /// Insert a character at the query cursor.
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Delete the character before the query cursor.
    pub fn query_backspace(&mut self) {
        if let Some(c) = self.query[..self.query_cursor].chars().next_back() {
            self.query_cursor -= c.len_utf8();
            self.query.remove(self.query_cursor);
        }
    }

    /// Delete the character under the query cursor.
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
        }
    }

    /// Move the query cursor one character left.
    pub fn query_cursor_left(&mut self) {
        if let Some(c) = self.query[..self.query_cursor].chars().next_back() {
            self.query_cursor -= c.len_utf8();
        }
    }

    /// Move the query cursor one character right.
    pub fn query_cursor_right(&mut self) {
        if let Some(c) = self.query[self.query_cursor..].chars().next() {
            self.query_cursor += c.len_utf8();
        }
    }

    /// Clear the whole query.
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    /// Delete the word before the query cursor.
    pub fn query_delete_word(&mut self) {
        let trimmed = self.query[..self.query_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |idx| idx + 1);
        self.query.drain(start..self.query_cursor);
        self.query_cursor = start;
    }

    /// Recompute `filtered` from the full item list for the current query.
    ///
    /// An empty query restores all items in their original order. The cursor
    /// is clamped into the new bounds; when the list shrinks below it, the
    /// cursor moves to the new last row, never negative.
    pub fn refilter(&mut self, matcher: &mut Matcher) {
        if self.query.is_empty() {
            #[allow(clippy::cast_possible_truncation)]
            {
                self.filtered = (0..self.items.len() as u32).collect();
            }
        } else {
            let pattern =
                Pattern::parse(&self.query, CaseMatching::Smart, Normalization::Smart);
            let mut buf = Vec::new();

            #[allow(clippy::cast_possible_truncation)]
            let mut scored: Vec<(u32, u32)> = self
                .items
                .iter()
                .enumerate()
                .filter_map(|(idx, item)| {
                    let haystack = Utf32Str::new(item, &mut buf);
                    pattern
                        .score(haystack, matcher)
                        .map(|score| (idx as u32, score))
                })
                .collect();

            // Stable sort keeps the original order for equal scores.
            scored.sort_by_key(|&(_, score)| Reverse(score));
            self.filtered = scored.into_iter().map(|(idx, _)| idx).collect();
        }

        if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len().saturating_sub(1);
        }
        if self.scroll_offset > self.cursor {
            self.scroll_offset = self.cursor;
        }
        self.adjust_scroll();
    }
}
