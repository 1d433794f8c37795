//! Fixed record corpora used across harnesses.
//!
//! The seeded collections are re-exported so harnesses can filter realistic
//! data; the hand-built corpora below pin down specific edge cases.

use super::builders::{order, user, OrderBuilder};
use adash_core::{Order, OrderStatus, Role, User};

pub use adash_data::seed::{documents, notifications, orders, users};

/// Two orders, one delivered and one pending — the smallest corpus on which
/// search, category filtering, and the empty result can all be observed.
pub fn delivered_and_pending() -> Vec<Order> {
    vec![
        order("ORD-001", "Alisher Karimov", OrderStatus::Delivered),
        order("ORD-002", "Malika Tosheva", OrderStatus::Pending),
    ]
}

/// Customers whose names need real Unicode case folding.
pub fn unicode_orders() -> Vec<Order> {
    vec![
        OrderBuilder::new("ORD-010", "Šarlota Nováková").build(),
        OrderBuilder::new("ORD-011", "ÖZGÜR ÇELIK").build(),
        OrderBuilder::new("ORD-012", "plain ascii").build(),
    ]
}

/// A directory with and without phone numbers, for the missing-field policy.
pub fn mixed_phone_users() -> Vec<User> {
    vec![
        user(
            "Alisher Karimov",
            "alisher@email.com",
            Some("+998901234567"),
            Role::Admin,
        ),
        user("Sardor Tursunov", "sardor@email.com", None, Role::User),
    ]
}
