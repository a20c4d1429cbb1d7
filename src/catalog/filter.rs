use crate::models::Listing;

/// Sentinel category that selects every listing.
pub const ALL_CATEGORIES: &str = "All";

/// Listings whose category equals `selected`, in their original order.
/// `"All"` returns the whole input; a category nobody uses returns nothing.
pub fn filter_by_category<'a>(listings: &'a [Listing], selected: &str) -> Vec<&'a Listing> {
    if selected == ALL_CATEGORIES {
        return listings.iter().collect();
    }
    listings.iter().filter(|l| l.category == selected).collect()
}

/// A category button on the browse page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub label: String,
    pub active: bool,
}

impl CategoryTab {
    pub fn build(categories: &[&str], selected: &str) -> Vec<CategoryTab> {
        categories
            .iter()
            .map(|c| CategoryTab {
                label: c.to_string(),
                active: *c == selected,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::ListingStatus;

    fn listing(id: &str, category: &str) -> Listing {
        Listing {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category: category.to_string(),
            price: 0.0,
            currency: "ETH".to_string(),
            provider: "0x0".to_string(),
            rating: 0.0,
            total_calls: 0,
            endpoint: String::new(),
            status: ListingStatus::Active,
        }
    }

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn all_returns_input_unchanged() {
        let catalog = Catalog::seed();
        let filtered = filter_by_category(catalog.list_all(), "All");
        let expected: Vec<&Listing> = catalog.list_all().iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn category_returns_order_preserving_subsequence() {
        let listings = vec![
            listing("w", "Weather"),
            listing("f", "Finance"),
            listing("a1", "AI/ML"),
            listing("a2", "AI/ML"),
        ];
        assert_eq!(ids(&filter_by_category(&listings, "AI/ML")), vec!["a1", "a2"]);
        assert_eq!(ids(&filter_by_category(&listings, "Finance")), vec!["f"]);
    }

    #[test]
    fn every_category_matches_manual_subsequence() {
        let catalog = Catalog::seed();
        for category in catalog.domain_categories() {
            let expected: Vec<&Listing> = catalog
                .list_all()
                .iter()
                .filter(|l| &l.category == category)
                .collect();
            assert_eq!(filter_by_category(catalog.list_all(), category), expected);
        }
    }

    #[test]
    fn unmatched_category_is_empty() {
        let catalog = Catalog::seed();
        assert!(filter_by_category(catalog.list_all(), "Gaming").is_empty());
        assert!(filter_by_category(catalog.list_all(), "no-such-category").is_empty());
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let catalog = Catalog::seed();
        assert!(filter_by_category(catalog.list_all(), "weather").is_empty());
        assert!(filter_by_category(catalog.list_all(), "all").is_empty());
    }

    #[test]
    fn tabs_mark_selected_category() {
        let tabs = CategoryTab::build(&["All", "Weather", "Finance"], "Weather");
        let active: Vec<&str> = tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(tabs.len(), 3);
        assert_eq!(active, vec!["Weather"]);
    }
}
