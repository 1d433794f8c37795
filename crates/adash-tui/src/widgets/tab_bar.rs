//! Tab bar widget — renders the strip of views at the top of the screen.
//!
//! The active view is highlighted; a `●` suffix marks views with an applied
//! search or filter. The signed-in user and keybinding hints are
//! right-aligned in the same row, and transient notices (export results,
//! command feedback) render between them.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Label + filtered marker for one view.
pub struct TabEntry {
    pub label: String,
    pub filtered: bool,
}

pub struct TabBar<'a> {
    tabs: &'a [TabEntry],
    active: usize,
    _theme: &'a Theme,
    user: &'a str,
    notice: Option<&'a str>,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [TabEntry], active: usize, theme: &'a Theme, user: &'a str) -> Self {
        Self {
            tabs,
            active,
            _theme: theme,
            user,
            notice: None,
        }
    }

    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = self
            .tabs
            .iter()
            .map(|tab| {
                let filtered = if tab.filtered { " ●" } else { "" };
                Line::from(format!(" {}{} ", tab.label, filtered))
            })
            .collect();

        Tabs::new(labels)
            .select(self.active)
            .highlight_style(
                Style::default()
                    .bg(ratatui::style::Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("")
            .render(area, buf);

        // Signed-in user and keybinding hints at the right edge
        let hint = format!(" {}  q:quit  ?:help ", self.user);
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(
            hint_x,
            area.y,
            &hint,
            Style::default().add_modifier(Modifier::DIM),
        );

        // Transient notice, left of the hints
        if let Some(notice) = self.notice {
            let text = format!(" {notice} ");
            let x = hint_x.saturating_sub(text.chars().count() as u16);
            buf.set_string(
                x,
                area.y,
                &text,
                Style::default().add_modifier(Modifier::ITALIC),
            );
        }
    }
}
