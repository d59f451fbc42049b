//! Flat-file persistence for the procurement pipeline.
//!
//! Three files under one data directory:
//!
//! * `procurement_store.json` — site rules and confirmed orders
//! * `vendors.json`           — vendor catalog (read-only)
//! * `audit_log.jsonl`        — append-only decision audit trail
//!
//! No business logic lives here, only read/write/append behind the
//! collaborator traits defined in `procura-core`.

pub mod audit_log;
pub mod catalog;
pub mod fixtures;
pub mod json_store;

use std::path::{Path, PathBuf};

pub use audit_log::JsonlAuditLog;
pub use catalog::JsonVendorCatalog;
pub use json_store::JsonFileStore;

/// File layout under the configured data directory.
#[derive(Clone, Debug)]
pub struct StorePaths {
    data_dir: PathBuf,
}

impl StorePaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join("procurement_store.json")
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("vendors.json")
    }

    pub fn audit_file(&self) -> PathBuf {
        self.data_dir.join("audit_log.jsonl")
    }
}
