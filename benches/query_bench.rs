//! Query throughput bench.
//!
//! The query is re-evaluated on every keystroke, so one pass over a
//! dashboard-scale collection has to stay comfortably inside a frame budget.
//! Benchmarked against 10 000 synthetic orders: the identity query, a hot
//! needle, a rare needle, and a pure category pass.

use adash_core::{filter_records, CategoryFilter, Order, OrderLine, OrderStatus, PaymentMethod};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn synthetic_orders(n: usize) -> Vec<Order> {
    const NAMES: &[&str] = &[
        "Alisher Karimov",
        "Malika Tosheva",
        "Jasur Rahimov",
        "Nilufar Saidova",
        "Bobur Islomov",
        "Dilnoza Qodirova",
    ];
    const STATUSES: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid bench date");

    (0..n)
        .map(|i| Order {
            id: format!("ORD-{i:05}"),
            customer: NAMES[i % NAMES.len()].to_string(),
            email: format!("customer{i}@example.com"),
            phone: format!("+9989012{i:05}"),
            lines: vec![OrderLine {
                product: "Widget".to_string(),
                quantity: 1,
                price: 10,
            }],
            total: 10,
            status: STATUSES[i % STATUSES.len()],
            payment: PaymentMethod::Card,
            address: "Bench address".to_string(),
            created_at: date,
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let records = synthetic_orders(10_000);

    let mut group = c.benchmark_group("query");

    group.bench_function("identity_10k", |b| {
        b.iter(|| black_box(filter_records(&records, "", CategoryFilter::All)))
    });

    group.bench_function("hot_needle_10k", |b| {
        b.iter(|| black_box(filter_records(&records, "mali", CategoryFilter::All)))
    });

    group.bench_function("rare_needle_10k", |b| {
        b.iter(|| black_box(filter_records(&records, "ord-00042", CategoryFilter::All)))
    });

    group.bench_function("category_only_10k", |b| {
        b.iter(|| {
            black_box(filter_records(
                &records,
                "",
                CategoryFilter::Only(OrderStatus::Delivered),
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
