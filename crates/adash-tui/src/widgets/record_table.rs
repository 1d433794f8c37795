//! Record table widget — the scrollable table pane on the right.
//!
//! The rows it renders are always the *filtered* view produced by the query
//! layer; the widget itself knows nothing about records, only pre-rendered
//! lines. Per-type row builders live at the bottom of this module.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row (scrolls view if needed) |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `G` | Jump to the last row |
//!
//! # Scroll semantics
//!
//! `scroll_offset` = number of rows hidden above the window (0 = top).
//! `cursor` = absolute index into the filtered rows. The cursor is always
//! kept within the visible window; moving it past the edge auto-scrolls.
//! The filtered row count changes on every keystroke, so the cursor is
//! clamped against the current length at read time via
//! [`RecordTableState::selected`].

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use adash_core::config::UiConfig;
use adash_core::{Document, Notification, Order, User};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use tracing;

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct RecordTableState {
    /// Absolute index into the filtered rows of the highlighted line.
    pub cursor: usize,
    /// Number of rows hidden above the window (0 = top).
    pub scroll_offset: usize,
    /// Cached from the last render so `handle()` can do cursor-aware
    /// scrolling against the current filtered length.
    last_height: Cell<usize>,
    last_len: Cell<usize>,
}

impl Default for RecordTableState {
    fn default() -> Self {
        Self {
            cursor: 0,
            scroll_offset: 0,
            last_height: Cell::new(40),
            last_len: Cell::new(0),
        }
    }
}

impl RecordTableState {
    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Returns `(start, end)` — the exclusive range of rows currently visible.
    fn visible_range(&self) -> (usize, usize) {
        let total = self.last_len.get();
        let start = self.scroll_offset.min(total.saturating_sub(self.height()));
        let end = (start + self.height()).min(total);
        (start, end)
    }

    /// The cursor clamped against `len`, or `None` when the view is empty.
    pub fn selected(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.cursor.min(len - 1))
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.last_len.get();
        if total == 0 {
            return;
        }
        // The filtered length may have shrunk since the cursor last moved
        self.cursor = self.cursor.min(total - 1);

        match event {
            // ── Row-by-row cursor movement ─────────────────────────────────
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                let (start, _) = self.visible_range();
                if self.cursor < start {
                    self.scroll_offset = self.cursor;
                }
                tracing::debug!(
                    cursor = self.cursor,
                    scroll_offset = self.scroll_offset,
                    "table: cursor up"
                );
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
                let (_, end) = self.visible_range();
                if self.cursor >= end {
                    self.scroll_offset = self.cursor + 1 - self.height();
                }
                tracing::debug!(
                    cursor = self.cursor,
                    scroll_offset = self.scroll_offset,
                    "table: cursor down"
                );
            }

            // ── Page scrolling ─────────────────────────────────────────────
            AppEvent::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_STEP);
                let (start, end) = self.visible_range();
                self.cursor = self.cursor.clamp(start, end.saturating_sub(1));
                tracing::debug!(
                    scroll_offset = self.scroll_offset,
                    cursor = self.cursor,
                    "table: page up"
                );
            }
            AppEvent::ScrollDown => {
                self.scroll_offset = (self.scroll_offset + PAGE_STEP)
                    .min(total.saturating_sub(self.height()));
                let (start, end) = self.visible_range();
                self.cursor = self.cursor.clamp(start, end.saturating_sub(1));
                tracing::debug!(
                    scroll_offset = self.scroll_offset,
                    cursor = self.cursor,
                    "table: page down"
                );
            }

            // ── Jump to the last row ───────────────────────────────────────
            AppEvent::ScrollToEnd => {
                self.cursor = total - 1;
                self.scroll_offset = total.saturating_sub(self.height());
                tracing::debug!(cursor = self.cursor, "table: jumped to end");
            }

            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct RecordTable<'a> {
    state: &'a RecordTableState,
    focused: bool,
    theme: &'a Theme,
    title: String,
    header: Line<'static>,
    rows: Vec<Line<'static>>,
    empty_message: &'static str,
}

impl<'a> RecordTable<'a> {
    pub fn new(state: &'a RecordTableState, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            focused,
            theme,
            title: String::new(),
            header: Line::default(),
            rows: Vec::new(),
            empty_message: "no records match the current query",
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn header(mut self, header: Line<'static>) -> Self {
        self.header = header;
        self
    }

    pub fn rows(mut self, rows: Vec<Line<'static>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn empty_message(mut self, message: &'static str) -> Self {
        self.empty_message = message;
        self
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title(self.title.clone())
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        // First inner row is the header; the rest hold records.
        let content_height = (inner.height as usize).saturating_sub(1);
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(content_height);
        self.state.last_len.set(self.rows.len());

        let total = self.rows.len();

        if total == 0 {
            let mut lines = vec![self.header.clone()];
            lines.push(Line::from(Span::styled(
                self.empty_message,
                Style::default().add_modifier(Modifier::DIM),
            )));
            Paragraph::new(lines).render(inner, buf);
            return;
        }

        let (start, end) = self.state.visible_range();
        let cursor = self.state.selected(total).unwrap_or(0);

        // Which row (0-based within the visible window) holds the cursor?
        let cursor_row: Option<usize> = if self.focused && cursor >= start && cursor < end {
            Some(cursor - start)
        } else {
            None
        };

        let mut lines: Vec<Line<'static>> = vec![self.header.clone()];
        lines.extend(
            self.rows[start..end]
                .iter()
                .enumerate()
                .map(|(row, line)| {
                    let mut line = line.clone();
                    if Some(row) == cursor_row {
                        line.style = line.style.add_modifier(Modifier::REVERSED);
                    }
                    line
                }),
        );

        // Split inner into text (fill) + 1-column scrollbar strip.
        // The strip is inside the block borders so the track height exactly
        // matches the number of visible content rows, keeping the thumb
        // aligned with the rows on screen.
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            y: inner.y + 1,
            width: 1,
            height: inner.height.saturating_sub(1),
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(content_height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

/// Clip `text` to `width` display characters, padding with spaces. Longer
/// values end in `…`.
fn clip(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        let mut s = text.to_string();
        s.extend(std::iter::repeat(' ').take(width - count));
        s
    } else {
        let mut s: String = text.chars().take(width.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

/// Style `text` (already clipped) with `base`, marking the first
/// case-insensitive occurrence of `needle_lower` with `hl`.
///
/// Falls back to an unhighlighted span when lowercasing shifts byte offsets
/// (non-ASCII case folding) — the row is still correct, just unmarked.
fn highlight(text: &str, needle_lower: &str, base: Style, hl: Style) -> Vec<Span<'static>> {
    if needle_lower.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }
    let lower = text.to_lowercase();
    let aligned = lower.len() == text.len();
    match lower.find(needle_lower) {
        Some(at) if aligned => {
            let end = at + needle_lower.len();
            if text.is_char_boundary(at) && text.is_char_boundary(end) {
                return vec![
                    Span::styled(text[..at].to_string(), base),
                    Span::styled(text[at..end].to_string(), hl),
                    Span::styled(text[end..].to_string(), base),
                ];
            }
            vec![Span::styled(text.to_string(), base)]
        }
        _ => vec![Span::styled(text.to_string(), base)],
    }
}

fn date_span(date: impl std::fmt::Display, ui: &UiConfig) -> Span<'static> {
    if ui.show_dates {
        Span::styled(date.to_string(), Style::default().add_modifier(Modifier::DIM))
    } else {
        Span::raw("")
    }
}

fn header_line(columns: &[(&'static str, usize)]) -> Line<'static> {
    let text: String = columns
        .iter()
        .map(|(name, width)| clip(name, *width))
        .collect::<Vec<_>>()
        .join(" ");
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

pub fn order_header() -> Line<'static> {
    header_line(&[
        ("id", 9),
        ("customer", 22),
        ("products", 28),
        ("total", 7),
        ("status", 11),
        ("date", 10),
    ])
}

pub fn order_row(order: &Order, theme: &Theme, needle_lower: &str, ui: &UiConfig) -> Line<'static> {
    let mut spans = Vec::new();
    spans.extend(highlight(
        &clip(&order.id, 9),
        needle_lower,
        Style::default(),
        theme.search_highlight,
    ));
    spans.push(Span::raw(" "));
    spans.extend(highlight(
        &clip(&order.customer, 22),
        needle_lower,
        Style::default(),
        theme.search_highlight,
    ));
    spans.push(Span::raw(" "));

    let products = match order.lines.as_slice() {
        [] => String::new(),
        [only] => only.product.clone(),
        [first, rest @ ..] => format!("{} +{}", first.product, rest.len()),
    };
    spans.push(Span::styled(
        clip(&products, 28),
        Style::default().add_modifier(Modifier::DIM),
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::raw(clip(&format!("${}", order.total), 7)));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        clip(&order.status.to_string(), 11),
        theme.order_status_style(order.status),
    ));
    spans.push(Span::raw(" "));
    spans.push(date_span(order.created_at.format(&ui.date_format), ui));
    Line::from(spans)
}

pub fn user_header() -> Line<'static> {
    header_line(&[
        ("", 3),
        ("name", 22),
        ("email", 26),
        ("role", 10),
        ("status", 9),
        ("joined", 10),
    ])
}

/// Initials shown in place of the web avatar.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

pub fn user_row(user: &User, theme: &Theme, needle_lower: &str, ui: &UiConfig) -> Line<'static> {
    let mut spans = Vec::new();
    spans.push(Span::styled(
        clip(&initials(&user.name), 3),
        theme.avatar_style(&user.name).add_modifier(Modifier::BOLD),
    ));
    spans.extend(highlight(
        &clip(&user.name, 22),
        needle_lower,
        Style::default(),
        theme.search_highlight,
    ));
    spans.push(Span::raw(" "));
    spans.extend(highlight(
        &clip(&user.email, 26),
        needle_lower,
        Style::default().add_modifier(Modifier::DIM),
        theme.search_highlight,
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        clip(&user.role.to_string(), 10),
        theme.role_style(user.role),
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        clip(&user.status.to_string(), 9),
        theme.account_status_style(user.status),
    ));
    spans.push(Span::raw(" "));
    spans.push(date_span(user.created_at.format(&ui.date_format), ui));
    Line::from(spans)
}

pub fn document_header() -> Line<'static> {
    header_line(&[
        ("kind", 12),
        ("name", 32),
        ("size", 9),
        ("uploaded by", 22),
        ("status", 9),
        ("date", 10),
    ])
}

pub fn document_row(
    doc: &Document,
    theme: &Theme,
    needle_lower: &str,
    ui: &UiConfig,
) -> Line<'static> {
    let mut spans = Vec::new();
    spans.push(Span::styled(
        clip(&doc.kind.to_string(), 12),
        theme.doc_kind_style(doc.kind),
    ));
    spans.extend(highlight(
        &clip(&doc.name, 32),
        needle_lower,
        Style::default(),
        theme.search_highlight,
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::raw(clip(&doc.human_size(), 9)));
    spans.push(Span::raw(" "));
    spans.extend(highlight(
        &clip(&doc.uploaded_by, 22),
        needle_lower,
        Style::default().add_modifier(Modifier::DIM),
        theme.search_highlight,
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        clip(&doc.status.to_string(), 9),
        theme.doc_status_style(doc.status),
    ));
    spans.push(Span::raw(" "));
    spans.push(date_span(doc.uploaded_at.format(&ui.date_format), ui));
    Line::from(spans)
}

pub fn notification_header() -> Line<'static> {
    header_line(&[
        ("", 2),
        ("kind", 9),
        ("title", 28),
        ("message", 44),
        ("at", 16),
    ])
}

pub fn notification_row(
    notif: &Notification,
    theme: &Theme,
    needle_lower: &str,
    ui: &UiConfig,
) -> Line<'static> {
    let mut spans = Vec::new();
    let dot = if notif.read { "  " } else { "● " };
    spans.push(Span::styled(dot.to_string(), theme.badge_primary));
    spans.push(Span::styled(
        clip(&notif.kind.to_string(), 9),
        theme.notification_style(notif.kind),
    ));
    let title_style = if notif.read {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    spans.extend(highlight(
        &clip(&notif.title, 28),
        needle_lower,
        title_style,
        theme.search_highlight,
    ));
    spans.push(Span::raw(" "));
    spans.extend(highlight(
        &clip(&notif.body, 44),
        needle_lower,
        Style::default().add_modifier(Modifier::DIM),
        theme.search_highlight,
    ));
    spans.push(Span::raw(" "));
    if ui.show_dates {
        spans.push(Span::styled(
            notif.created_at.format("%Y-%m-%d %H:%M").to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
