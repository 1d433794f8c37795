//! Stat cards widget — the row of count boxes above the record table.
//!
//! Counts come from `count_by` on the *unfiltered* collection, matching the
//! web dashboard's cards (which ignored the active search).

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// One labelled count.
pub struct StatCard {
    pub label: &'static str,
    pub value: usize,
    pub style: Style,
}

impl StatCard {
    pub fn new(label: &'static str, value: usize, style: Style) -> Self {
        Self { label, value, style }
    }
}

pub struct StatCards<'a> {
    cards: Vec<StatCard>,
    theme: &'a Theme,
}

impl<'a> StatCards<'a> {
    pub fn new(cards: Vec<StatCard>, theme: &'a Theme) -> Self {
        Self { cards, theme }
    }
}

impl Widget for StatCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() {
            return;
        }
        let constraints: Vec<Constraint> = self
            .cards
            .iter()
            .map(|_| Constraint::Ratio(1, self.cards.len() as u32))
            .collect();
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints(constraints)
            .split(area);

        for (card, chunk) in self.cards.iter().zip(chunks.iter()) {
            let block = Block::bordered().border_style(self.theme.border_unfocused);
            let inner = block.inner(*chunk);
            block.render(*chunk, buf);

            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", card.value),
                    card.style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(card.label, Style::default().add_modifier(Modifier::DIM)),
            ]);
            Paragraph::new(line).render(inner, buf);
        }
    }
}
