pub mod filter;
pub mod metrics;
mod seed;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::models::Listing;

pub use filter::{filter_by_category, CategoryTab, ALL_CATEGORIES};
pub use metrics::{total_calls, total_earnings, DashboardSummary};

#[derive(Debug)]
pub enum CatalogError {
    DuplicateId(String),
    UnknownCategory { id: String, category: String },
    InvalidPrice { id: String, price: f64 },
    InvalidRating { id: String, rating: f64 },
    ReservedCategory(String),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => write!(f, "Duplicate listing id: {id}"),
            CatalogError::UnknownCategory { id, category } => {
                write!(f, "Listing {id} has unknown category '{category}'")
            }
            CatalogError::InvalidPrice { id, price } => {
                write!(f, "Listing {id} has invalid price {price}")
            }
            CatalogError::InvalidRating { id, rating } => {
                write!(f, "Listing {id} has rating {rating} outside 0.0..=5.0")
            }
            CatalogError::ReservedCategory(c) => {
                write!(f, "Category '{c}' is reserved for the unfiltered view")
            }
            CatalogError::Io(err) => write!(f, "Failed to read catalog: {err}"),
            CatalogError::Parse(err) => write!(f, "Failed to parse catalog: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// Immutable set of listings and the categories they are grouped by.
///
/// Built once at startup and shared by reference; clones share the same data.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogData>,
}

#[derive(Debug)]
struct CatalogData {
    listings: Vec<Listing>,
    categories: Vec<String>,
}

impl Catalog {
    /// Validate and freeze a catalog. Every listing needs a unique id, a
    /// category from `categories`, a finite non-negative price and a rating
    /// within 0.0..=5.0.
    pub fn new(listings: Vec<Listing>, categories: Vec<String>) -> Result<Self, CatalogError> {
        if let Some(reserved) = categories.iter().find(|c| *c == ALL_CATEGORIES) {
            return Err(CatalogError::ReservedCategory(reserved.clone()));
        }

        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
            if !categories.contains(&listing.category) {
                return Err(CatalogError::UnknownCategory {
                    id: listing.id.clone(),
                    category: listing.category.clone(),
                });
            }
            if !listing.price.is_finite() || listing.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: listing.id.clone(),
                    price: listing.price,
                });
            }
            if !(0.0..=5.0).contains(&listing.rating) {
                return Err(CatalogError::InvalidRating {
                    id: listing.id.clone(),
                    rating: listing.rating,
                });
            }
        }

        Ok(Self {
            inner: Arc::new(CatalogData {
                listings,
                categories,
            }),
        })
    }

    /// The built-in marketplace catalog.
    pub fn seed() -> Self {
        Self {
            inner: Arc::new(CatalogData {
                listings: seed::listings(),
                categories: seed::categories(),
            }),
        }
    }

    /// Load listings from a JSON array file, validated against the built-in
    /// category set.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read(path)?;
        let listings: Vec<Listing> = serde_json::from_slice(&raw)?;
        Self::new(listings, seed::categories())
    }

    pub fn list_all(&self) -> &[Listing] {
        &self.inner.listings
    }

    /// Category labels, starting with the "All" sentinel.
    pub fn list_categories(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.inner.categories.iter().map(String::as_str))
            .collect()
    }

    /// Category labels a listing may belong to (no sentinel).
    pub fn domain_categories(&self) -> &[String] {
        &self.inner.categories
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.inner.listings.iter().find(|l| l.id == id)
    }

    /// Listings owned by any of `providers`, in catalog order.
    pub fn by_providers<S: AsRef<str>>(&self, providers: &[S]) -> Vec<&Listing> {
        self.inner
            .listings
            .iter()
            .filter(|l| providers.iter().any(|p| p.as_ref() == l.provider))
            .collect()
    }
}
