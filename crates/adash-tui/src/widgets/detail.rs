//! Detail popup — centred overlay showing every field of the focused record.
//!
//! Opened with `Enter` on a table row; closed with `Escape` or `Enter`. The
//! line builders below flatten each record type into labelled rows.

use super::centered_rect;
use crate::theme::Theme;
use adash_core::config::UiConfig;
use adash_core::{Document, Notification, Order, User};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct DetailPopup<'a> {
    title: String,
    lines: Vec<Line<'static>>,
    theme: &'a Theme,
}

impl<'a> DetailPopup<'a> {
    pub fn new(title: impl Into<String>, lines: Vec<Line<'static>>, theme: &'a Theme) -> Self {
        Self {
            title: title.into(),
            lines,
            theme,
        }
    }
}

impl Widget for DetailPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.lines.len() as u16).saturating_add(2);
        let popup = centered_rect(64, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(format!(" {} (Esc to close) ", self.title))
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        Paragraph::new(self.lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Line builders
// ---------------------------------------------------------------------------

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {label:<12}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn badge(label: &'static str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {label:<12}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, style),
    ])
}

pub fn order_detail(order: &Order, theme: &Theme, ui: &UiConfig) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("customer", order.customer.clone()),
        field("email", order.email.clone()),
        field("phone", order.phone.clone()),
        badge(
            "status",
            order.status.to_string(),
            theme.order_status_style(order.status),
        ),
        field("payment", order.payment.to_string()),
        field("address", order.address.clone()),
        field("date", order.created_at.format(&ui.date_format).to_string()),
        Line::default(),
    ];
    for item in &order.lines {
        lines.push(field(
            "item",
            format!("{} ×{}  ${}", item.product, item.quantity, item.price),
        ));
    }
    lines.push(Line::default());
    lines.push(field("total", format!("${}", order.total)));
    lines
}

pub fn user_detail(user: &User, theme: &Theme, ui: &UiConfig) -> Vec<Line<'static>> {
    vec![
        field("name", user.name.clone()),
        field("email", user.email.clone()),
        field("phone", user.phone.clone().unwrap_or_else(|| "—".into())),
        badge("role", user.role.to_string(), theme.role_style(user.role)),
        badge(
            "status",
            user.status.to_string(),
            theme.account_status_style(user.status),
        ),
        field(
            "joined",
            user.created_at.format(&ui.date_format).to_string(),
        ),
    ]
}

pub fn document_detail(doc: &Document, theme: &Theme, ui: &UiConfig) -> Vec<Line<'static>> {
    vec![
        field("name", doc.name.clone()),
        badge("kind", doc.kind.to_string(), theme.doc_kind_style(doc.kind)),
        field("size", doc.human_size()),
        field("uploaded by", doc.uploaded_by.clone()),
        field(
            "uploaded",
            doc.uploaded_at.format(&ui.date_format).to_string(),
        ),
        badge(
            "status",
            doc.status.to_string(),
            theme.doc_status_style(doc.status),
        ),
    ]
}

pub fn notification_detail(notif: &Notification, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        field("title", notif.title.clone()),
        field("message", notif.body.clone()),
        badge(
            "kind",
            notif.kind.to_string(),
            theme.notification_style(notif.kind),
        ),
        field("state", notif.read_state().to_string()),
        field(
            "at",
            notif.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ),
    ]
}
