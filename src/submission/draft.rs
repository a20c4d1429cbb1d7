use serde::{Deserialize, Serialize};

/// Currencies a listing can be priced in.
pub const CURRENCIES: [&str; 3] = ["ETH", "USDC", "USDT"];

/// In-progress state of the "List Your API" form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub price: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "ETH".to_string()
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: String::new(),
            endpoint: String::new(),
            price: String::new(),
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    Empty,
    Editing,
    Submitted,
}

impl ListingDraft {
    /// Names of required fields left blank. Only presence is checked.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("endpoint", &self.endpoint),
            ("price", &self.price),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// A draft is empty until any field other than the preselected currency
    /// holds text.
    pub fn state(&self) -> DraftState {
        let untouched = [
            &self.name,
            &self.description,
            &self.category,
            &self.endpoint,
            &self.price,
        ]
        .iter()
        .all(|v| v.is_empty());

        if untouched {
            DraftState::Empty
        } else {
            DraftState::Editing
        }
    }
}
