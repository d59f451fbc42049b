use serde::{Deserialize, Serialize};

use crate::domain::normalize;

/// Read-only catalog entry. Field names follow the persisted catalog
/// format; prices are whole rupees per 100 bags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub price_per_100_bags_inr: u64,
    pub delivery_days: u32,
    pub in_stock: bool,
    pub category: String,
}

impl Vendor {
    pub fn supplies(&self, material: &str) -> bool {
        normalize(&self.category) == normalize(material)
    }
}

#[cfg(test)]
mod tests {
    use super::Vendor;

    #[test]
    fn category_match_ignores_case_and_whitespace() {
        let vendor = Vendor {
            id: "badrock".to_string(),
            name: "BadRock Cements".to_string(),
            price_per_100_bags_inr: 35_000,
            delivery_days: 7,
            in_stock: true,
            category: "cement".to_string(),
        };
        assert!(vendor.supplies("CEMENT"));
        assert!(vendor.supplies("  cement "));
        assert!(!vendor.supplies("steel"));
    }
}
