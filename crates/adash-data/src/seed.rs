//! Seeded sample collections.
//!
//! The rows mirror the data the dashboard shipped with: six orders, eight
//! users, six documents, and eight notifications. Ids are stable so tests and
//! exports can refer to them.

use adash_core::{
    AccountStatus, DocKind, DocStatus, Document, Notification, NotificationKind, Order, OrderLine,
    OrderStatus, PaymentMethod, Role, User,
};
use chrono::{NaiveDate, NaiveDateTime};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date literal must be valid")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d)
        .and_hms_opt(h, min, 0)
        .expect("seed time literal must be valid")
}

fn line(product: &str, quantity: u32, price: u32) -> OrderLine {
    OrderLine {
        product: product.to_string(),
        quantity,
        price,
    }
}

/// The six sample orders.
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".into(),
            customer: "Alisher Karimov".into(),
            email: "alisher@email.com".into(),
            phone: "+998901234567".into(),
            lines: vec![line("iPhone 15 Pro", 1, 1200), line("AirPods Pro", 1, 250)],
            total: 1450,
            status: OrderStatus::Delivered,
            payment: PaymentMethod::Card,
            address: "Toshkent, Chilonzor tumani, 12-uy".into(),
            created_at: date(2024, 1, 15),
        },
        Order {
            id: "ORD-002".into(),
            customer: "Malika Tosheva".into(),
            email: "malika@email.com".into(),
            phone: "+998901234568".into(),
            lines: vec![line("MacBook Air M3", 1, 1300)],
            total: 1300,
            status: OrderStatus::Processing,
            payment: PaymentMethod::Cash,
            address: "Toshkent, Yunusobod tumani, 5-uy".into(),
            created_at: date(2024, 1, 16),
        },
        Order {
            id: "ORD-003".into(),
            customer: "Jasur Rahimov".into(),
            email: "jasur@email.com".into(),
            phone: "+998901234569".into(),
            lines: vec![line("iPad Pro", 1, 800), line("Apple Pencil", 1, 130)],
            total: 930,
            status: OrderStatus::Pending,
            payment: PaymentMethod::Card,
            address: "Samarqand, Registon ko'chasi, 8-uy".into(),
            created_at: date(2024, 1, 17),
        },
        Order {
            id: "ORD-004".into(),
            customer: "Nilufar Saidova".into(),
            email: "nilufar@email.com".into(),
            phone: "+998901234570".into(),
            lines: vec![line("Apple Watch Ultra", 2, 450)],
            total: 900,
            status: OrderStatus::Shipped,
            payment: PaymentMethod::Card,
            address: "Buxoro, Markaziy ko'cha, 15-uy".into(),
            created_at: date(2024, 1, 18),
        },
        Order {
            id: "ORD-005".into(),
            customer: "Bobur Islomov".into(),
            email: "bobur@email.com".into(),
            phone: "+998901234571".into(),
            lines: vec![line("HomePod mini", 3, 100)],
            total: 300,
            status: OrderStatus::Cancelled,
            payment: PaymentMethod::Cash,
            address: "Toshkent, Mirzo Ulug'bek tumani, 22-uy".into(),
            created_at: date(2024, 1, 19),
        },
        Order {
            id: "ORD-006".into(),
            customer: "Dilnoza Qodirova".into(),
            email: "dilnoza@email.com".into(),
            phone: "+998901234572".into(),
            lines: vec![line("iPhone 15", 1, 900), line("MagSafe Charger", 1, 40)],
            total: 940,
            status: OrderStatus::Delivered,
            payment: PaymentMethod::Card,
            address: "Namangan, Mustaqillik ko'chasi, 3-uy".into(),
            created_at: date(2024, 1, 20),
        },
    ]
}

/// The eight sample users. Some carry no phone number — search treats the
/// missing value as an empty string.
pub fn users() -> Vec<User> {
    let user = |id: &str,
                name: &str,
                email: &str,
                phone: Option<&str>,
                role,
                status,
                created_at| User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.map(Into::into),
        role,
        status,
        created_at,
    };

    vec![
        user(
            "1",
            "Alisher Karimov",
            "alisher@email.com",
            Some("+998901234567"),
            Role::Admin,
            AccountStatus::Active,
            date(2024, 1, 1),
        ),
        user(
            "2",
            "Malika Tosheva",
            "malika@email.com",
            Some("+998901234568"),
            Role::Moderator,
            AccountStatus::Active,
            date(2024, 1, 5),
        ),
        user(
            "3",
            "Jasur Rahimov",
            "jasur@email.com",
            Some("+998901234569"),
            Role::User,
            AccountStatus::Active,
            date(2024, 1, 10),
        ),
        user(
            "4",
            "Nilufar Saidova",
            "nilufar@email.com",
            Some("+998901234570"),
            Role::User,
            AccountStatus::Inactive,
            date(2024, 1, 15),
        ),
        user(
            "5",
            "Bobur Islomov",
            "bobur@email.com",
            Some("+998901234571"),
            Role::User,
            AccountStatus::Active,
            date(2024, 1, 20),
        ),
        user(
            "6",
            "Dilnoza Qodirova",
            "dilnoza@email.com",
            Some("+998901234572"),
            Role::Moderator,
            AccountStatus::Active,
            date(2024, 2, 1),
        ),
        user(
            "7",
            "Sardor Tursunov",
            "sardor@email.com",
            None,
            Role::User,
            AccountStatus::Inactive,
            date(2024, 2, 5),
        ),
        user(
            "8",
            "Zarina Mirzoeva",
            "zarina@email.com",
            None,
            Role::User,
            AccountStatus::Active,
            date(2024, 2, 10),
        ),
    ]
}

/// The six sample documents. Sizes are bytes; the UI humanises them.
pub fn documents() -> Vec<Document> {
    let doc = |id: &str, name: &str, kind, size, uploaded_at, uploaded_by: &str, status| Document {
        id: id.into(),
        name: name.into(),
        kind,
        size,
        uploaded_at,
        uploaded_by: uploaded_by.into(),
        status,
    };

    vec![
        doc(
            "1",
            "Q4 financial report.pdf",
            DocKind::Pdf,
            2_516_582,
            date(2024, 1, 15),
            "admin@example.com",
            DocStatus::Active,
        ),
        doc(
            "2",
            "Product photos.zip",
            DocKind::Image,
            16_567_501,
            date(2024, 1, 14),
            "manager@example.com",
            DocStatus::Active,
        ),
        doc(
            "3",
            "Orders spreadsheet.xlsx",
            DocKind::Spreadsheet,
            1_258_291,
            date(2024, 1, 13),
            "admin@example.com",
            DocStatus::Active,
        ),
        doc(
            "4",
            "Contract template.docx",
            DocKind::Other,
            250_880,
            date(2024, 1, 12),
            "lawyer@example.com",
            DocStatus::Active,
        ),
        doc(
            "5",
            "2023 annual report.pdf",
            DocKind::Pdf,
            5_347_738,
            date(2024, 1, 10),
            "admin@example.com",
            DocStatus::Archived,
        ),
        doc(
            "6",
            "Logo and brand book.pdf",
            DocKind::Pdf,
            8_703_181,
            date(2024, 1, 8),
            "designer@example.com",
            DocStatus::Active,
        ),
    ]
}

/// The eight sample notifications — three unread, five read.
pub fn notifications() -> Vec<Notification> {
    let notif = |id: &str, title: &str, body: &str, kind, read, created_at| Notification {
        id: id.into(),
        title: title.into(),
        body: body.into(),
        kind,
        read,
        created_at,
    };

    vec![
        notif(
            "1",
            "New order received",
            "Sardor Abdullayev placed a new order worth $450",
            NotificationKind::Order,
            false,
            datetime(2024, 1, 15, 14, 30),
        ),
        notif(
            "2",
            "New user registered",
            "Nilufar Karimova signed up for an account",
            NotificationKind::User,
            false,
            datetime(2024, 1, 15, 14, 15),
        ),
        notif(
            "3",
            "Payment received",
            "Payment for order #ORD-1234 completed successfully",
            NotificationKind::Payment,
            false,
            datetime(2024, 1, 15, 13, 45),
        ),
        notif(
            "4",
            "Low stock warning",
            "iPhone 15 Pro is down to 5 units in stock",
            NotificationKind::Warning,
            true,
            datetime(2024, 1, 15, 12, 0),
        ),
        notif(
            "5",
            "Order delivered",
            "Order #ORD-1230 was delivered to the customer",
            NotificationKind::Success,
            true,
            datetime(2024, 1, 15, 10, 30),
        ),
        notif(
            "6",
            "System updated",
            "adash v2.1.0 was installed successfully",
            NotificationKind::Info,
            true,
            datetime(2024, 1, 14, 18, 0),
        ),
        notif(
            "7",
            "New order",
            "Jasur Rahimov placed an order worth $320",
            NotificationKind::Order,
            true,
            datetime(2024, 1, 14, 15, 20),
        ),
        notif(
            "8",
            "Report ready",
            "The monthly financial report is ready to download",
            NotificationKind::Info,
            true,
            datetime(2024, 1, 14, 9, 0),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_sizes_match_the_sample_data() {
        assert_eq!(orders().len(), 6);
        assert_eq!(users().len(), 8);
        assert_eq!(documents().len(), 6);
        assert_eq!(notifications().len(), 8);
    }

    #[test]
    fn ids_are_unique_within_each_collection() {
        let order_ids: HashSet<_> = orders().into_iter().map(|o| o.id).collect();
        assert_eq!(order_ids.len(), 6);
        let user_ids: HashSet<_> = users().into_iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), 8);
    }

    #[test]
    fn totals_match_their_line_items() {
        for order in orders() {
            let sum: u32 = order.lines.iter().map(|l| l.quantity * l.price).sum();
            assert_eq!(sum, order.total, "order {} total is inconsistent", order.id);
        }
    }

    #[test]
    fn exactly_one_admin_is_seeded_and_active() {
        let admins: Vec<_> = users()
            .into_iter()
            .filter(|u| u.role == Role::Admin)
            .collect();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].email, "alisher@email.com");
        assert_eq!(admins[0].status, AccountStatus::Active);
    }

    #[test]
    fn three_notifications_start_unread() {
        let unread = notifications().iter().filter(|n| !n.read).count();
        assert_eq!(unread, 3);
    }
}
