//! Domain-specific assertions for adash harnesses.
//!
//! Failure messages name *which* query invariant was violated rather than
//! dumping two record lists to diff by eye.

// ---------------------------------------------------------------------------
// Result-set assertion macros
// ---------------------------------------------------------------------------

/// Assert that every record in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |o| o.status == OrderStatus::Delivered);
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results = &$results;
        let pred = $pred;
        let failing = results.iter().filter(|r| !pred(*r)).count();
        if failing > 0 {
            panic!(
                "assert_results_all! failed: {} of {} records did not satisfy the predicate.",
                failing,
                results.len()
            );
        }
    }};
}

/// Assert that a result set contains at least one record matching a predicate.
///
/// ```rust
/// assert_results_contain!(results, |o| o.id == "ORD-002");
/// ```
#[macro_export]
macro_rules! assert_results_contain {
    ($results:expr, $pred:expr) => {{
        let results = &$results;
        let pred = $pred;
        if !results.iter().any(|r| pred(r)) {
            panic!(
                "assert_results_contain! failed: no record matched the predicate.\n  {} records checked.",
                results.len()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Order-preservation helper
// ---------------------------------------------------------------------------

/// Assert that `result` is an order-preserving subset of `input` — i.e. the
/// filter kept a subsequence, never re-sorted or fabricated records.
pub fn assert_preserves_order<T: PartialEq + std::fmt::Debug>(input: &[T], result: &[&T]) {
    let mut pos = 0usize;
    for (i, record) in result.iter().enumerate() {
        match input[pos..].iter().position(|candidate| candidate == *record) {
            Some(offset) => pos += offset + 1,
            None => panic!(
                "assert_preserves_order failed: result[{i}] = {record:?} is out of order \
                 (or absent) relative to the input"
            ),
        }
    }
}
