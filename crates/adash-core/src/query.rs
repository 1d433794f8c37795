//! Collection query utility — free-text search combined with a categorical
//! filter, shared by every record view.
//!
//! Each dashboard view used to carry its own ad-hoc filter closure with a
//! hand-picked field list. This module is that logic exactly once: records
//! expose their searchable text through [`Searchable`] and their categorical
//! value through [`Categorized`], and [`Query`] evaluates both constraints in
//! a single stable pass.
//!
//! # Matching rules
//!
//! A record matches when BOTH hold:
//!
//! 1. the [`CategoryFilter`] is [`All`](CategoryFilter::All), or the record's
//!    category equals the filtered value, and
//! 2. the needle is empty, or at least one search field contains it as a
//!    case-insensitive substring.
//!
//! The needle is used exactly as typed: a whitespace-only needle is a literal
//! substring search, not a blank one. Filtering never mutates the collection,
//! never fails (missing field values surface as `""`), and preserves input
//! order. Cost is O(n·k) over n records and k search fields — re-evaluated on
//! every keystroke, comfortably inside a frame at dashboard scale.

use std::fmt;

// ---------------------------------------------------------------------------
// Capability traits
// ---------------------------------------------------------------------------

/// A record that free-text search can scan.
pub trait Searchable {
    /// The text fields scanned by the needle, in display order.
    ///
    /// Implementations substitute `""` for missing (`Option`) values so the
    /// query stays total — no field access can fail.
    fn search_fields(&self) -> Vec<&str>;
}

/// A record carrying one categorical value (status, role, kind, read-state).
pub trait Categorized {
    type Category: Category;

    fn category(&self) -> Self::Category;
}

/// A closed categorical axis: a fixed, ordered set of values with stable
/// display forms.
pub trait Category: Copy + Eq + fmt::Display + 'static {
    /// Every value of the category, in display order.
    const VALUES: &'static [Self];

    /// Parse a display form back into a value (case-insensitive).
    fn parse(s: &str) -> Option<Self> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.to_string().eq_ignore_ascii_case(s))
    }
}

// ---------------------------------------------------------------------------
// CategoryFilter
// ---------------------------------------------------------------------------

/// Categorical constraint with an `all` sentinel meaning unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    /// The categorical test is disabled; every record passes it.
    #[default]
    All,
    /// Only records whose category equals the value pass.
    Only(C),
}

impl<C: Category> CategoryFilter<C> {
    pub fn matches(&self, value: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Parse `"all"` or any category display form. `None` when unknown.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            Some(CategoryFilter::All)
        } else {
            C::parse(s).map(CategoryFilter::Only)
        }
    }

    /// Step forward through `all → v₀ → v₁ → … → all`.
    pub fn next(self) -> Self {
        match self {
            CategoryFilter::All => match C::VALUES.first() {
                Some(first) => CategoryFilter::Only(*first),
                None => CategoryFilter::All,
            },
            CategoryFilter::Only(c) => {
                let idx = C::VALUES.iter().position(|v| *v == c);
                match idx.map(|i| i + 1).and_then(|i| C::VALUES.get(i)) {
                    Some(nxt) => CategoryFilter::Only(*nxt),
                    None => CategoryFilter::All,
                }
            }
        }
    }

    /// Step backward through `all → … → v₁ → v₀ → all`.
    pub fn prev(self) -> Self {
        match self {
            CategoryFilter::All => match C::VALUES.last() {
                Some(last) => CategoryFilter::Only(*last),
                None => CategoryFilter::All,
            },
            CategoryFilter::Only(c) => {
                let idx = C::VALUES.iter().position(|v| *v == c);
                match idx.filter(|i| *i > 0).map(|i| C::VALUES[i - 1]) {
                    Some(prv) => CategoryFilter::Only(prv),
                    None => CategoryFilter::All,
                }
            }
        }
    }
}

impl<C: Category> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A free-text needle plus a categorical constraint, evaluated together.
///
/// The needle is lowercased once at construction so per-record matching only
/// lowercases the fields it scans.
#[derive(Debug, Clone)]
pub struct Query<C> {
    needle: String,
    needle_lower: String,
    pub category: CategoryFilter<C>,
}

impl<C: Category> Query<C> {
    pub fn new(needle: impl Into<String>, category: CategoryFilter<C>) -> Self {
        let needle = needle.into();
        let needle_lower = needle.to_lowercase();
        Self {
            needle,
            needle_lower,
            category,
        }
    }

    /// The needle exactly as typed (whitespace included).
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Does a single record satisfy both constraints?
    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Searchable + Categorized<Category = C>,
    {
        if !self.category.matches(record.category()) {
            return false;
        }
        if self.needle_lower.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle_lower))
    }

    /// The matching subset of `records`, in input order.
    pub fn filter<'a, T>(&self, records: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable + Categorized<Category = C>,
    {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// Number of matching records, without collecting them.
    pub fn count<T>(&self, records: &[T]) -> usize
    where
        T: Searchable + Categorized<Category = C>,
    {
        records.iter().filter(|r| self.matches(*r)).count()
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// One-shot form of [`Query::filter`] for callers that don't hold a query.
pub fn filter_records<'a, T>(
    records: &'a [T],
    needle: &str,
    category: CategoryFilter<T::Category>,
) -> Vec<&'a T>
where
    T: Searchable + Categorized,
{
    Query::new(needle, category).filter(records)
}

/// How many records carry the given category value (stat cards, nav counts).
pub fn count_by<T: Categorized>(records: &[T], value: T::Category) -> usize {
    records.iter().filter(|r| r.category() == value).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Colour {
        Red,
        Blue,
    }

    impl fmt::Display for Colour {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Colour::Red => write!(f, "red"),
                Colour::Blue => write!(f, "blue"),
            }
        }
    }

    impl Category for Colour {
        const VALUES: &'static [Self] = &[Colour::Red, Colour::Blue];
    }

    struct Item {
        name: &'static str,
        note: Option<&'static str>,
        colour: Colour,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.note.unwrap_or("")]
        }
    }

    impl Categorized for Item {
        type Category = Colour;

        fn category(&self) -> Colour {
            self.colour
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Alpha Widget", note: Some("first"), colour: Colour::Red },
            Item { name: "beta widget", note: None, colour: Colour::Blue },
            Item { name: "Gamma", note: Some("two spaced  note"), colour: Colour::Red },
        ]
    }

    #[test]
    fn empty_needle_and_all_filter_is_identity() {
        let all = items();
        let out = filter_records(&all, "", CategoryFilter::All);
        assert_eq!(out.len(), all.len());
    }

    #[test]
    fn needle_matches_case_insensitively_across_fields() {
        let all = items();
        let out = filter_records(&all, "WIDGET", CategoryFilter::All);
        assert_eq!(out.len(), 2);
        // Note field is searched too
        let out = filter_records(&all, "first", CategoryFilter::All);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Alpha Widget");
    }

    #[test]
    fn category_only_restricts_exactly() {
        let all = items();
        let out = filter_records(&all, "", CategoryFilter::Only(Colour::Red));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|i| i.colour == Colour::Red));
    }

    #[test]
    fn both_constraints_combine() {
        let all = items();
        let out = filter_records(&all, "widget", CategoryFilter::Only(Colour::Blue));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "beta widget");
    }

    #[test]
    fn missing_field_is_empty_string_never_a_match() {
        let all = items();
        // "beta widget" has no note; a needle only present in notes skips it
        let out = filter_records(&all, "note", CategoryFilter::All);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Gamma");
    }

    #[test]
    fn whitespace_needle_is_a_literal_search() {
        let all = items();
        // Two consecutive spaces only occur in Gamma's note
        let out = filter_records(&all, "  ", CategoryFilter::All);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Gamma");
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let none: Vec<Item> = Vec::new();
        assert!(filter_records(&none, "anything", CategoryFilter::All).is_empty());
    }

    #[test]
    fn filter_cycles_through_all_values_and_back() {
        let mut f: CategoryFilter<Colour> = CategoryFilter::All;
        f = f.next();
        assert_eq!(f, CategoryFilter::Only(Colour::Red));
        f = f.next();
        assert_eq!(f, CategoryFilter::Only(Colour::Blue));
        f = f.next();
        assert_eq!(f, CategoryFilter::All);
        assert_eq!(f.prev(), CategoryFilter::Only(Colour::Blue));
    }

    #[test]
    fn filter_parse_accepts_all_sentinel() {
        assert_eq!(
            CategoryFilter::<Colour>::parse("all"),
            Some(CategoryFilter::All)
        );
        assert_eq!(
            CategoryFilter::<Colour>::parse("Red"),
            Some(CategoryFilter::Only(Colour::Red))
        );
        assert_eq!(CategoryFilter::<Colour>::parse("green"), None);
    }

    #[test]
    fn count_by_partitions_the_collection() {
        let all = items();
        assert_eq!(count_by(&all, Colour::Red), 2);
        assert_eq!(count_by(&all, Colour::Blue), 1);
    }
}
