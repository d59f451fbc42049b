pub mod audit;
pub mod config;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod gate;
pub mod money;
pub mod service;
pub mod store;

pub use audit::{AuditEvent, AuditEventType, AuditSink, InMemoryAuditSink};
pub use domain::order::{Order, OrderRequest, OrderStatus};
pub use domain::rules::SiteRules;
pub use domain::vendor::Vendor;
pub use errors::ProcurementError;
pub use filter::{FilterOutcome, FilteredVendor};
pub use gate::{Disposition, Escalation};
pub use service::ProcurementService;
pub use store::{InMemoryCatalog, InMemoryStore, ProcurementStore, StoreError, VendorCatalog};
