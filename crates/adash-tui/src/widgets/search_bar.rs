//! Search bar widget — text input + filter readout at the bottom of the
//! screen.
//!
//! The typed needle is applied live: every edit re-evaluates the active
//! view's query. The right-hand segment shows the applied category filter
//! and how many records the combined query currently matches.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor (arrow keys while this pane
//!   is focused, re-mapped by the App shell).

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tracing;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// The needle typed by the user, used exactly as typed (whitespace
    /// included).
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
}

impl SearchBarState {
    /// Handle a key event from the app shell.
    ///
    /// Text-editing events (`Char`, `Backspace`, arrow keys) update the
    /// needle; all other events are ignored.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, cursor = self.cursor, "search: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    // Walk back one char boundary
                    let prev = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.query.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(query = %self.query, cursor = self.cursor, "search: backspace");
                }
            }
            // Left/right arrows re-mapped from Nav by the App shell
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    tracing::debug!(cursor = self.cursor, "search: cursor left");
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.query.len() {
                    let next = self.query[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.query.len());
                    self.cursor = next;
                    tracing::debug!(cursor = self.cursor, "search: cursor right");
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    theme: &'a Theme,
    /// Display form of the applied category filter (`all`, `pending`, …).
    filter_label: String,
    /// Matching rows / total rows in the active view.
    shown: usize,
    total: usize,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a SearchBarState, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            focused,
            theme,
            filter_label: "all".to_string(),
            shown: 0,
            total: 0,
        }
    }

    /// Attach the filter readout shown on the right-hand side.
    pub fn context(mut self, filter_label: String, shown: usize, total: usize) -> Self {
        self.filter_label = filter_label;
        self.shown = shown;
        self.total = total;
        self
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Search")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        // Split inner area: needle text (fill) | filter readout (fixed width)
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(30)])
            .split(inner);

        // Needle input
        let query_line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        // Filter readout:  filter:[pending]  3/6
        let readout = format!(
            "filter:[{}]  {}/{}",
            self.filter_label, self.shown, self.total
        );
        Paragraph::new(Line::from(readout))
            .right_aligned()
            .render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_inserts_at_the_cursor() {
        let mut s = SearchBarState::default();
        for c in "mali".chars() {
            s.handle(&AppEvent::Char(c));
        }
        assert_eq!(s.query, "mali");
        assert_eq!(s.cursor, 4);
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Char('x'));
        assert_eq!(s.query, "malxi");
    }

    #[test]
    fn backspace_removes_one_char_boundary() {
        let mut s = SearchBarState::default();
        for c in "qo'л".chars() {
            s.handle(&AppEvent::Char(c));
        }
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.query, "qo'");
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn cursor_movement_clamps_at_the_edges() {
        let mut s = SearchBarState::default();
        s.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(s.cursor, 0);
        s.handle(&AppEvent::Char('a'));
        s.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        let mut s = SearchBarState::default();
        s.handle(&AppEvent::Char(' '));
        s.handle(&AppEvent::Char(' '));
        assert_eq!(s.query, "  ");
    }
}
