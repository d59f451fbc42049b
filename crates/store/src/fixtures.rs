//! Deterministic demo catalog used by `procura seed` and the
//! end-to-end tests. The cement trio covers every pipeline path:
//! blacklist a vendor, keep one over budget, leave one as the cheapest
//! escalation candidate.

use std::fs;
use std::path::Path;

use procura_core::store::StoreError;
use procura_core::Vendor;

use crate::catalog::CatalogFile;

pub fn demo_vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "badrock".to_string(),
            name: "BadRock Cements".to_string(),
            price_per_100_bags_inr: 35_000,
            delivery_days: 7,
            in_stock: true,
            category: "cement".to_string(),
        },
        Vendor {
            id: "goodrock".to_string(),
            name: "GoodRock Cements".to_string(),
            price_per_100_bags_inr: 45_000,
            delivery_days: 2,
            in_stock: true,
            category: "cement".to_string(),
        },
        Vendor {
            id: "slowrock".to_string(),
            name: "SlowRock Cements".to_string(),
            price_per_100_bags_inr: 39_000,
            delivery_days: 14,
            in_stock: true,
            category: "cement".to_string(),
        },
        Vendor {
            id: "ironhold".to_string(),
            name: "IronHold Steel".to_string(),
            price_per_100_bags_inr: 82_000,
            delivery_days: 10,
            in_stock: true,
            category: "steel".to_string(),
        },
        Vendor {
            id: "spansteel".to_string(),
            name: "SpanSteel Traders".to_string(),
            price_per_100_bags_inr: 78_500,
            delivery_days: 21,
            in_stock: false,
            category: "steel".to_string(),
        },
    ]
}

/// Write (or overwrite) the demo catalog at `path`. Idempotent: two
/// runs produce the same bytes.
pub fn write_demo_catalog(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| StoreError::Write { path: path.to_path_buf(), source })?;
    }
    let payload = serde_json::to_string_pretty(&CatalogFile { vendors: demo_vendors() })?;
    fs::write(path, payload)
        .map_err(|source| StoreError::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use procura_core::VendorCatalog;

    use super::{demo_vendors, write_demo_catalog};
    use crate::JsonVendorCatalog;

    #[test]
    fn demo_catalog_round_trips_through_the_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("vendors.json");

        write_demo_catalog(&path).expect("write catalog");
        let vendors = JsonVendorCatalog::new(path).vendors();
        assert_eq!(vendors, demo_vendors());
    }

    #[test]
    fn seeding_twice_is_idempotent() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("vendors.json");

        write_demo_catalog(&path).expect("first write");
        let first = fs::read_to_string(&path).expect("read");
        write_demo_catalog(&path).expect("second write");
        let second = fs::read_to_string(&path).expect("read");
        assert_eq!(first, second);
    }

    #[test]
    fn cement_trio_covers_the_demo_scenario() {
        let cement: Vec<_> =
            demo_vendors().into_iter().filter(|v| v.category == "cement").collect();
        assert_eq!(cement.len(), 3);
        let prices: Vec<u64> = cement.iter().map(|v| v.price_per_100_bags_inr).collect();
        assert_eq!(prices, vec![35_000, 45_000, 39_000]);
    }
}
