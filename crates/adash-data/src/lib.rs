//! adash-data — sample collections and dataset loading for adash.
//!
//! The dashboard's collections are supplied externally: either the seeded
//! sample data compiled into this crate, or a JSON file on disk with the same
//! shape. The query layer only ever sees plain slices — this crate does all
//! the I/O there is.

use adash_core::{Document, Notification, Order, User};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod seed;

/// The four record collections a dashboard session operates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub users: Vec<User>,
    pub documents: Vec<Document>,
    pub notifications: Vec<Notification>,
}

impl Dataset {
    /// The built-in sample data.
    pub fn seed() -> Self {
        Self {
            orders: seed::orders(),
            users: seed::users(),
            documents: seed::documents(),
            notifications: seed::notifications(),
        }
    }

    /// Load a dataset from a JSON file with the same shape as
    /// [`Dataset::seed`] serialised.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse dataset file {}", path.display()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn seed_round_trips_through_a_json_file() {
        let dataset = Dataset::seed();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&dataset).unwrap().as_bytes())
            .unwrap();

        let loaded = Dataset::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.orders, dataset.orders);
        assert_eq!(loaded.users, dataset.users);
        assert_eq!(loaded.documents, dataset.documents);
        assert_eq!(loaded.notifications, dataset.notifications);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = Dataset::from_json_file("/nonexistent/adash.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/adash.json"));
    }
}
