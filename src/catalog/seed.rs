use crate::models::{Listing, ListingStatus};

const CATEGORIES: [&str; 6] = ["Weather", "Finance", "AI/ML", "Social", "Gaming", "IoT"];

pub(super) fn categories() -> Vec<String> {
    CATEGORIES.iter().map(|c| c.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    provider: &str,
    rating: f64,
    total_calls: u64,
    endpoint: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        currency: "ETH".to_string(),
        provider: provider.to_string(),
        rating,
        total_calls,
        endpoint: endpoint.to_string(),
        status: ListingStatus::Active,
    }
}

pub(super) fn listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Weather Data API",
            "Real-time weather data for any location worldwide",
            "Weather",
            0.001,
            "0x1234...5678",
            4.8,
            15420,
            "https://api.weather.com/v1/current",
        ),
        listing(
            "2",
            "Crypto Price Feed",
            "Live cryptocurrency prices and market data",
            "Finance",
            0.0005,
            "0xabcd...efgh",
            4.9,
            28350,
            "https://api.crypto.com/v1/prices",
        ),
        listing(
            "3",
            "AI Text Generator",
            "Generate human-like text using advanced AI models",
            "AI/ML",
            0.01,
            "0x9876...5432",
            4.7,
            8920,
            "https://api.aitext.com/v1/generate",
        ),
        listing(
            "4",
            "Image Recognition API",
            "Identify objects, faces, and text in images",
            "AI/ML",
            0.002,
            "0xdef0...1234",
            4.6,
            12100,
            "https://api.vision.com/v1/analyze",
        ),
    ]
}
