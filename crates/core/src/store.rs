use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::domain::order::Order;
use crate::domain::rules::SiteRules;
use crate::domain::vendor::Vendor;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file write error ({path}): {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("file read error ({path}): {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence seam for site rules and the append-only orders list.
///
/// The store is a shared resource accessed without locking or
/// transactions; the design assumes a single-process, single-session
/// caller. Two writers racing on the same underlying store can
/// interleave read-modify-write non-atomically.
pub trait ProcurementStore: Send + Sync {
    /// Overwrites any existing rules for the site wholesale.
    fn put_site_rules(&self, site_name: &str, rules: &SiteRules) -> Result<(), StoreError>;

    fn site_rules(&self, site_name: &str) -> Result<Option<SiteRules>, StoreError>;

    /// Orders grow monotonically; there is no update or delete.
    fn append_order(&self, order: &Order) -> Result<(), StoreError>;

    fn orders(&self) -> Result<Vec<Order>, StoreError>;
}

/// Read-only vendor catalog. Category filtering is a pure read-filter
/// done by the service, so implementations only hand back the full
/// list; a missing or malformed catalog reads as empty.
pub trait VendorCatalog: Send + Sync {
    fn vendors(&self) -> Vec<Vendor>;
}

#[derive(Clone, Debug, Default)]
struct StoreState {
    sites: BTreeMap<String, SiteRules>,
    orders: Vec<Order>,
}

/// Test double and offline-mode store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    fn with_state<T>(&self, f: impl FnOnce(&mut StoreState) -> T) -> T {
        match self.state.lock() {
            Ok(mut state) => f(&mut state),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl ProcurementStore for InMemoryStore {
    fn put_site_rules(&self, site_name: &str, rules: &SiteRules) -> Result<(), StoreError> {
        self.with_state(|state| {
            state.sites.insert(site_name.to_string(), rules.clone());
        });
        Ok(())
    }

    fn site_rules(&self, site_name: &str) -> Result<Option<SiteRules>, StoreError> {
        Ok(self.with_state(|state| state.sites.get(site_name).cloned()))
    }

    fn append_order(&self, order: &Order) -> Result<(), StoreError> {
        self.with_state(|state| state.orders.push(order.clone()));
        Ok(())
    }

    fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.with_state(|state| state.orders.clone()))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    vendors: Vec<Vendor>,
}

impl InMemoryCatalog {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }
}

impl VendorCatalog for InMemoryCatalog {
    fn vendors(&self) -> Vec<Vendor> {
        self.vendors.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryStore, ProcurementStore};
    use crate::domain::order::{Order, OrderStatus};
    use crate::domain::rules::SiteRules;

    #[test]
    fn rules_round_trip_through_in_memory_store() {
        let store = InMemoryStore::default();
        let rules = SiteRules::new(38_000, vec!["BadRock Cements".to_string()]);

        store.put_site_rules("Delhi-Site-7", &rules).expect("store rules");
        let loaded = store.site_rules("Delhi-Site-7").expect("load rules");
        assert_eq!(loaded, Some(rules));
        assert_eq!(store.site_rules("Unknown-Site").expect("load"), None);
    }

    #[test]
    fn storing_rules_twice_overwrites_rather_than_accumulates() {
        let store = InMemoryStore::default();
        store
            .put_site_rules("Site-A", &SiteRules::new(10_000, vec!["V1".to_string()]))
            .expect("first store");
        store.put_site_rules("Site-A", &SiteRules::new(20_000, vec![])).expect("second store");

        let loaded = store.site_rules("Site-A").expect("load").expect("present");
        assert_eq!(loaded.approval_limit, 20_000);
        assert!(loaded.vendor_blacklist.is_empty());
    }

    #[test]
    fn orders_accumulate_in_append_order() {
        let store = InMemoryStore::default();
        for (vendor, price) in [("A", 1_000), ("B", 2_000)] {
            store
                .append_order(&Order {
                    site_name: "Site-A".to_string(),
                    vendor_name: vendor.to_string(),
                    material: "cement".to_string(),
                    quantity: 100,
                    price_inr: price,
                    status: OrderStatus::Confirmed,
                })
                .expect("append");
        }

        let orders = store.orders().expect("orders");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].vendor_name, "A");
        assert_eq!(orders[1].vendor_name, "B");
    }
}
