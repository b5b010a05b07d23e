// src/market.rs

/// Simulated comparable-listing lookups for the market research page.
///
/// Real listing feeds are out of scope here. The generator stamps a fixed
/// set of regional sample listings with the requested vehicle so the
/// sourcing workflow (save the dealer, draft an inquiry) can be exercised
/// end to end.

/// Search input from the market research form.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketQuery {
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Zero or negative means no price cap.
    pub max_price: f64,
}

/// One comparable listing. `source` is the dealership carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparableListing {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub mileage: u32,
    pub price: f64,
    pub location: String,
    pub source: String,
    pub phone: String,
}

// (mileage, price, location, dealership, phone)
const SAMPLE_LISTINGS: [(u32, f64, &str, &str, &str); 6] = [
    (85_000, 6200.0, "California - Los Angeles", "Auto Town LA", "213-555-0123"),
    (102_000, 5800.0, "California - San Diego", "Pacific Auto Center", "619-555-0198"),
    (96_000, 6000.0, "California - Riverside", "Riverside Auto Sales", "951-555-0456"),
    (88_000, 6350.0, "USA - National Average", "National AutoMart", "800-555-2300"),
    (92_000, 6100.0, "Arizona - Phoenix", "Desert Cars Phoenix", "602-555-8765"),
    (110_000, 5700.0, "Nevada - Las Vegas", "Vegas Value Motors", "702-555-3456"),
];

/// Returns the sample listings matching the query, in their fixed regional
/// order. Deterministic: the same query always returns the same rows.
pub fn comparable_listings(query: &MarketQuery) -> Vec<ComparableListing> {
    SAMPLE_LISTINGS
        .iter()
        .filter(|(_, price, ..)| query.max_price <= 0.0 || *price <= query.max_price)
        .map(|&(mileage, price, location, source, phone)| ComparableListing {
            year: query.year,
            make: query.make.clone(),
            model: query.model.clone(),
            mileage,
            price,
            location: location.to_string(),
            source: source.to_string(),
            phone: phone.to_string(),
        })
        .collect()
}
