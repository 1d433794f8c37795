//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use super::centered_rect;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    _theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { _theme: theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(80, 22, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" adash — keybindings (? to close) ")
            .border_style(Style::default().add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        const BINDINGS: &[(&str, &str)] = &[
            ("q  /  Ctrl+c", "Quit"),
            ("Tab", "Cycle focus: views → table → search"),
            ("1 2 3 4", "Switch view (orders/users/documents/notifications)"),
            ("/", "Focus the search bar"),
            ("Escape", "Close popup / leave the search bar"),
            ("↑ k  /  ↓ j", "Move cursor in views pane or table"),
            ("← h  /  → l", "Collapse / expand a views node"),
            ("Enter", "Apply category leaf / open record detail"),
            ("PageUp  /  Ctrl+u", "Scroll the table up"),
            ("PageDown / Ctrl+d", "Scroll the table down"),
            ("G", "Jump to the last row"),
            ("]  /  [", "Cycle the category filter"),
            ("r", "Toggle read state (notifications view)"),
            (":", "Open the command bar (:help for commands)"),
            ("?", "Toggle this help popup"),
        ];

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
