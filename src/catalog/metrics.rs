use serde::Serialize;

use crate::models::Listing;

/// Σ total_calls × price over `listings`.
pub fn total_earnings<'a, I>(listings: I) -> f64
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings.into_iter().map(Listing::earned).sum()
}

/// Σ total_calls over `listings`, saturating at `u64::MAX`.
pub fn total_calls<'a, I>(listings: I) -> u64
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .fold(0u64, |acc, l| acc.saturating_add(l.total_calls))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyTotal {
    pub currency: String,
    pub amount: f64,
}

/// Earnings grouped by currency, in order of first appearance.
pub fn earnings_by_currency<'a, I>(listings: I) -> Vec<CurrencyTotal>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut totals: Vec<CurrencyTotal> = Vec::new();
    for listing in listings {
        match totals.iter_mut().find(|t| t.currency == listing.currency) {
            Some(total) => total.amount += listing.earned(),
            None => totals.push(CurrencyTotal {
                currency: listing.currency.clone(),
                amount: listing.earned(),
            }),
        }
    }
    totals
}

/// Provider dashboard aggregates, recomputed on every render.
///
/// `total_earnings` adds raw amounts across currencies; `earnings_by_currency`
/// keeps them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_earnings: f64,
    pub earnings_by_currency: Vec<CurrencyTotal>,
    pub total_calls: u64,
    pub active_listings: usize,
}

impl DashboardSummary {
    pub fn from_listings(listings: &[&Listing]) -> Self {
        Self {
            total_earnings: total_earnings(listings.iter().copied()),
            earnings_by_currency: earnings_by_currency(listings.iter().copied()),
            total_calls: total_calls(listings.iter().copied()),
            active_listings: listings.iter().filter(|l| l.is_active()).count(),
        }
    }
}

/// Format a count with comma thousands separators (`43770` -> `43,770`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
