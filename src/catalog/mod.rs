//! Destination image catalogs.
//!
//! A [`Catalog`] answers one question: which existing images carry a given
//! name, optionally restricted to a set of owners. Two backends ship with the
//! crate:
//!
//! - [`InMemoryCatalog`] - records held in memory or loaded from a YAML/JSON file
//! - [`HttpCatalog`] - a JSON catalog service reached over HTTP
//!
//! # Example
//!
//! ```
//! use imagegate::catalog::{Catalog, ImageQuery, ImageRecord, InMemoryCatalog};
//!
//! let catalog = InMemoryCatalog::new(vec![
//!     ImageRecord::new("ami-abc123", "my-image-v3").with_owner("111"),
//! ]);
//!
//! let query = ImageQuery::by_name("my-image-v3").with_owners(&["111".to_string()]);
//! let found = catalog.query(&query).unwrap();
//! assert_eq!(found[0].id, "ami-abc123");
//! ```

pub mod http;
pub mod memory;

pub use http::HttpCatalog;
pub use memory::InMemoryCatalog;

use serde::{Deserialize, Serialize};

/// A previously built image registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Catalog identifier (e.g. `ami-abc123`).
    pub id: String,

    /// Registered image name.
    pub name: String,

    /// Owning account, if the catalog reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl ImageRecord {
    /// Create a record without owner information.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: None,
        }
    }

    /// Attach an owner to the record.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// Filter sent to a catalog.
///
/// `name` is an exact match. `owners`, when present, further restricts the
/// match to images owned by one of the listed accounts. An absent owner
/// filter and an empty one are different things, so an empty list is never
/// stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageQuery {
    /// Exact image name to look up.
    pub name: String,

    /// Owner restriction, in caller order.
    pub owners: Option<Vec<String>>,
}

impl ImageQuery {
    /// Query for an exact name with no owner restriction.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owners: None,
        }
    }

    /// Restrict the query to the given owners.
    ///
    /// An empty slice leaves the query unrestricted.
    pub fn with_owners(mut self, owners: &[String]) -> Self {
        self.owners = if owners.is_empty() {
            None
        } else {
            Some(owners.to_vec())
        };
        self
    }

    /// Check whether a record satisfies this query.
    pub fn matches(&self, record: &ImageRecord) -> bool {
        if record.name != self.name {
            return false;
        }

        match &self.owners {
            None => true,
            Some(owners) => record
                .owner
                .as_ref()
                .is_some_and(|owner| owners.contains(owner)),
        }
    }
}

/// Read access to a destination image catalog.
///
/// Implementations perform a single lookup per call and do not retry.
pub trait Catalog {
    /// Return every image matching the query, in catalog order.
    fn query(&self, query: &ImageQuery) -> anyhow::Result<Vec<ImageRecord>>;
}
