use serde::{Deserialize, Serialize};

/// One catalog entry: a monetizable API priced per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub currency: String,
    pub provider: String,
    pub rating: f64,
    pub total_calls: u64,
    pub endpoint: String,
    pub status: ListingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Inactive,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Listing {
    /// Earnings accrued by this listing: calls served times the per-call price.
    pub fn earned(&self) -> f64 {
        self.total_calls as f64 * self.price
    }

    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }
}
