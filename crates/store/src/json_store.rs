use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use procura_core::store::{ProcurementStore, StoreError};
use procura_core::{Order, SiteRules};

/// On-disk shape: site rules keyed by site name, with the append-only
/// orders list under its own key.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    sites: BTreeMap<String, SiteRules>,
    #[serde(default)]
    orders: Vec<Order>,
}

/// Single-JSON-file store. Reads treat a missing or malformed file as
/// empty, so a rules lookup against a corrupt file degrades to
/// not-found instead of failing the pipeline. Writes rewrite the file
/// wholesale; there is no locking, matching the single-session
/// assumption of the design.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> StoreFile {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return StoreFile::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn write(&self, state: &StoreFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;
        }
        let payload = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, payload)
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })
    }
}

impl ProcurementStore for JsonFileStore {
    fn put_site_rules(&self, site_name: &str, rules: &SiteRules) -> Result<(), StoreError> {
        let mut state = self.read();
        state.sites.insert(site_name.to_string(), rules.clone());
        self.write(&state)
    }

    fn site_rules(&self, site_name: &str) -> Result<Option<SiteRules>, StoreError> {
        Ok(self.read().sites.get(site_name).cloned())
    }

    fn append_order(&self, order: &Order) -> Result<(), StoreError> {
        let mut state = self.read();
        state.orders.push(order.clone());
        self.write(&state)
    }

    fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.read().orders)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use procura_core::store::ProcurementStore;
    use procura_core::{Order, OrderStatus, SiteRules};

    use super::JsonFileStore;

    fn order(vendor: &str) -> Order {
        Order {
            site_name: "Delhi-Site-7".to_string(),
            vendor_name: vendor.to_string(),
            material: "cement".to_string(),
            quantity: 500,
            price_inr: 39_000,
            status: OrderStatus::ConfirmedWithApproval,
        }
    }

    #[test]
    fn rules_round_trip_through_the_file() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("procurement_store.json"));

        let rules = SiteRules::new(38_000, vec!["BadRock Cements".to_string()]);
        store.put_site_rules("Delhi-Site-7", &rules).expect("put rules");

        let loaded = store.site_rules("Delhi-Site-7").expect("read rules");
        assert_eq!(loaded, Some(rules));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("procurement_store.json"));

        assert_eq!(store.site_rules("Anywhere").expect("read"), None);
        assert!(store.orders().expect("orders").is_empty());
    }

    #[test]
    fn malformed_file_reads_as_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("procurement_store.json");
        fs::write(&path, "{not json").expect("write junk");

        let store = JsonFileStore::new(path);
        assert_eq!(store.site_rules("Delhi-Site-7").expect("read"), None);
    }

    #[test]
    fn re_store_overwrites_while_orders_survive() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("procurement_store.json"));

        store
            .put_site_rules("Site-A", &SiteRules::new(10_000, vec!["V1".to_string()]))
            .expect("first put");
        store.append_order(&order("SlowRock Cements")).expect("append");
        store.put_site_rules("Site-A", &SiteRules::new(20_000, vec![])).expect("second put");

        let rules = store.site_rules("Site-A").expect("read").expect("present");
        assert_eq!(rules.approval_limit, 20_000);
        assert_eq!(store.orders().expect("orders").len(), 1);
    }

    #[test]
    fn orders_append_in_write_order() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("procurement_store.json"));

        store.append_order(&order("First")).expect("append");
        store.append_order(&order("Second")).expect("append");

        let orders = store.orders().expect("orders");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].vendor_name, "First");
        assert_eq!(orders[1].vendor_name, "Second");
    }

    #[test]
    fn writes_create_missing_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("nested/deeper/store.json"));

        store.put_site_rules("Site-A", &SiteRules::new(1_000, vec![])).expect("put");
        assert!(store.site_rules("Site-A").expect("read").is_some());
    }
}
