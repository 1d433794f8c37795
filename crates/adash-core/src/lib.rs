//! adash-core — record model and query core for adash.
//!
//! This crate carries everything below the presentation layer: the record
//! types, the collection query utility every view shares, and the small core
//! services (export, session, configuration).
//!
//! # Architecture
//!
//! ```text
//! Data ──► Query ──► UI
//!   │        │
//!   └────────┴──► Export
//! ```
//!
//! Evaluation is single-threaded and synchronous: the query is a pure
//! function of its inputs, recomputed whenever the needle or filter changes.

pub mod config;
pub mod export;
pub mod query;
pub mod session;
pub mod types;

pub use query::{count_by, filter_records, Categorized, Category, CategoryFilter, Query, Searchable};
pub use types::{
    AccountStatus, DocKind, DocStatus, Document, Notification, NotificationKind, Order, OrderLine,
    OrderStatus, PaymentMethod, ReadState, Role, User,
};
