//! Test builders — ergonomic constructors for records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use adash_core::{
    AccountStatus, DocKind, DocStatus, Document, Notification, NotificationKind, Order, OrderLine,
    OrderStatus, PaymentMethod, Role, User,
};
use chrono::NaiveDate;

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

// ---------------------------------------------------------------------------
// OrderBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Order`] test fixtures.
///
/// # Example
///
/// ```rust
/// let order = OrderBuilder::new("ORD-100", "Test Customer")
///     .status(OrderStatus::Shipped)
///     .item("Widget", 2, 10)
///     .build();
/// ```
pub struct OrderBuilder {
    id: String,
    customer: String,
    email: String,
    phone: String,
    lines: Vec<OrderLine>,
    status: OrderStatus,
    payment: PaymentMethod,
    address: String,
    created_at: NaiveDate,
}

impl OrderBuilder {
    pub fn new(id: impl Into<String>, customer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            email: "customer@example.com".to_string(),
            phone: "+998900000000".to_string(),
            lines: Vec::new(),
            status: OrderStatus::Pending,
            payment: PaymentMethod::Card,
            address: "Test address".to_string(),
            created_at: test_date(),
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn item(mut self, product: impl Into<String>, quantity: u32, price: u32) -> Self {
        self.lines.push(OrderLine {
            product: product.into(),
            quantity,
            price,
        });
        self
    }

    pub fn build(self) -> Order {
        let total = self.lines.iter().map(|l| l.quantity * l.price).sum();
        Order {
            id: self.id,
            customer: self.customer,
            email: self.email,
            phone: self.phone,
            lines: self.lines,
            total,
            status: self.status,
            payment: self.payment,
            address: self.address,
            created_at: self.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an order with just an id, customer, and status.
pub fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
    OrderBuilder::new(id, customer).status(status).build()
}

/// Build a user; `phone: None` exercises the missing-field coercion.
pub fn user(name: &str, email: &str, phone: Option<&str>, role: Role) -> User {
    User {
        id: email.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(Into::into),
        role,
        status: AccountStatus::Active,
        created_at: test_date(),
    }
}

/// Build a document with the given name and archival status.
pub fn document(id: &str, name: &str, status: DocStatus) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        kind: DocKind::Other,
        size: 1024,
        uploaded_at: test_date(),
        uploaded_by: "admin@example.com".to_string(),
        status,
    }
}

/// Build a notification with the given title and read flag.
pub fn notification(id: &str, title: &str, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        body: format!("{title} body"),
        kind: NotificationKind::Info,
        read,
        created_at: test_date().and_hms_opt(12, 0, 0).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// Build a corpus of `n` orders cycling through every status, with a handful
/// of repeating customer names.
pub fn order_corpus(n: usize) -> Vec<Order> {
    const NAMES: &[&str] = &["Alisher Karimov", "Malika Tosheva", "Jasur Rahimov", "Zarina"];
    const STATUSES: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
    (0..n)
        .map(|i| {
            OrderBuilder::new(format!("ORD-{i:03}"), NAMES[i % NAMES.len()])
                .status(STATUSES[i % STATUSES.len()])
                .build()
        })
        .collect()
}
