//! Core record types for adash.
//!
//! This module defines the four displayable business entities — [`Order`],
//! [`User`], [`Document`], and [`Notification`] — together with their
//! category enums. Each record type implements [`Searchable`] (which text
//! fields free-text search scans) and [`Categorized`] (which single
//! categorical value the status/role filter constrains).

use crate::query::{Categorized, Category, Searchable};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// A customer order with its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Stable order identifier, e.g. `ORD-001`.
    pub id: String,
    pub customer: String,
    pub email: String,
    pub phone: String,
    pub lines: Vec<OrderLine>,
    /// Order total in whole dollars, as carried by the sample data.
    pub total: u32,
    pub status: OrderStatus,
    pub payment: PaymentMethod,
    pub address: String,
    pub created_at: NaiveDate,
}

/// One product line within an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: String,
    pub quantity: u32,
    /// Unit price in whole dollars.
    pub price: u32,
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl Category for OrderStatus {
    const VALUES: &'static [Self] = &[
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Cash => write!(f, "cash"),
        }
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.customer]
    }
}

impl Categorized for Order {
    type Category = OrderStatus;

    fn category(&self) -> OrderStatus {
        self.status
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A dashboard account holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Optional — search treats a missing phone as the empty string.
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: NaiveDate,
}

/// Permission tier of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Moderator => write!(f, "moderator"),
            Role::User => write!(f, "user"),
        }
    }
}

impl Category for Role {
    const VALUES: &'static [Self] = &[Role::Admin, Role::Moderator, Role::User];
}

/// Whether an account may sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "active"),
            AccountStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.email,
            self.phone.as_deref().unwrap_or(""),
        ]
    }
}

impl Categorized for User {
    type Category = Role;

    fn category(&self) -> Role {
        self.role
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// An uploaded file tracked by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub kind: DocKind,
    /// Size in bytes; rendered through [`Document::human_size`].
    pub size: u64,
    pub uploaded_at: NaiveDate,
    pub uploaded_by: String,
    pub status: DocStatus,
}

impl Document {
    /// Human-readable size, e.g. `245 KB` or `2.4 MB`.
    pub fn human_size(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        match self.size {
            s if s >= MB => format!("{:.1} MB", s as f64 / MB as f64),
            s if s >= KB => format!("{} KB", s / KB),
            s => format!("{s} B"),
        }
    }
}

/// Broad file-type bucket used for the document icon and badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Pdf,
    Image,
    Spreadsheet,
    Other,
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocKind::Pdf => write!(f, "pdf"),
            DocKind::Image => write!(f, "image"),
            DocKind::Spreadsheet => write!(f, "spreadsheet"),
            DocKind::Other => write!(f, "other"),
        }
    }
}

/// Archival state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStatus {
    Active,
    Archived,
}

impl std::fmt::Display for DocStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocStatus::Active => write!(f, "active"),
            DocStatus::Archived => write!(f, "archived"),
        }
    }
}

impl Category for DocStatus {
    const VALUES: &'static [Self] = &[DocStatus::Active, DocStatus::Archived];
}

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.uploaded_by]
    }
}

impl Categorized for Document {
    type Category = DocStatus;

    fn category(&self) -> DocStatus {
        self.status
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// An inbox entry shown on the notifications view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

impl Notification {
    pub fn read_state(&self) -> ReadState {
        if self.read {
            ReadState::Read
        } else {
            ReadState::Unread
        }
    }
}

/// Source of a notification; drives its icon colour only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Order,
    User,
    Warning,
    Success,
    Info,
    Payment,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Order => write!(f, "order"),
            NotificationKind::User => write!(f, "user"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Payment => write!(f, "payment"),
        }
    }
}

/// The categorical axis of the notifications view — derived from the
/// `read` flag rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadState {
    Unread,
    Read,
}

impl std::fmt::Display for ReadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadState::Unread => write!(f, "unread"),
            ReadState::Read => write!(f, "read"),
        }
    }
}

impl Category for ReadState {
    const VALUES: &'static [Self] = &[ReadState::Unread, ReadState::Read];
}

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.body]
    }
}

impl Categorized for Notification {
    type Category = ReadState;

    fn category(&self) -> ReadState {
        self.read_state()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_round_trips() {
        for status in OrderStatus::VALUES {
            assert_eq!(Category::parse(&status.to_string()), Some(*status));
        }
        for role in Role::VALUES {
            assert_eq!(Category::parse(&role.to_string()), Some(*role));
        }
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("Delivered"), Some(OrderStatus::Delivered));
        assert_eq!(ReadState::parse("UNREAD"), Some(ReadState::Unread));
    }

    #[test]
    fn category_parse_rejects_unknown() {
        assert_eq!(OrderStatus::parse("misplaced"), None);
    }

    #[test]
    fn human_size_buckets() {
        let doc = |size| Document {
            id: "1".into(),
            name: "f".into(),
            kind: DocKind::Other,
            size,
            uploaded_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            uploaded_by: "admin@example.com".into(),
            status: DocStatus::Active,
        };
        assert_eq!(doc(512).human_size(), "512 B");
        assert_eq!(doc(245 * 1024).human_size(), "245 KB");
        assert_eq!(doc(2_516_582).human_size(), "2.4 MB");
    }

    #[test]
    fn read_state_derives_from_flag() {
        let notif = Notification {
            id: "1".into(),
            title: "t".into(),
            body: "b".into(),
            kind: NotificationKind::Info,
            read: false,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        };
        assert_eq!(notif.read_state(), ReadState::Unread);
    }
}
