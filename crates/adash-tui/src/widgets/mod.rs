//! Ratatui widgets for the adash TUI.

pub mod command_bar;
pub mod detail;
pub mod help;
pub mod nav_tree;
pub mod record_table;
pub mod search_bar;
pub mod stat_cards;
pub mod tab_bar;

use ratatui::layout::Rect;

/// A `width`×`height` rect centred within `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
