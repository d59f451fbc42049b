use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use procura_core::{Vendor, VendorCatalog};

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(default)]
    pub(crate) vendors: Vec<Vendor>,
}

/// Read-only vendor catalog backed by a JSON file. A missing or
/// malformed catalog is indistinguishable from an empty one, which
/// keeps catalog trouble on the same path as a genuinely unknown
/// material.
#[derive(Clone, Debug)]
pub struct JsonVendorCatalog {
    path: PathBuf,
}

impl JsonVendorCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VendorCatalog for JsonVendorCatalog {
    fn vendors(&self) -> Vec<Vendor> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str::<CatalogFile>(&raw) {
            Ok(catalog) => catalog.vendors,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "vendor catalog is malformed");
                Vec::new()
            }
        }
    }
}
