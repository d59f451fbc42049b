use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::audit::{AuditEvent, AuditEventType, AuditSink};
use crate::domain::normalize;
use crate::domain::order::{OrderRequest, OrderStatus};
use crate::domain::rules::SiteRules;
use crate::domain::vendor::Vendor;
use crate::errors::ProcurementError;
use crate::filter::{self, FilterOutcome};
use crate::gate::{auto_confirmation_text, human_confirmation_text, Disposition, Escalation};
use crate::money::format_inr;
use crate::store::{ProcurementStore, VendorCatalog};

/// Facade over the six boundary operations, wiring the injected
/// collaborators (rule/order store, vendor catalog, audit sink)
/// through the filter → gate → confirm pipeline.
pub struct ProcurementService<S, C, A> {
    store: S,
    catalog: C,
    audit: A,
}

impl<S, C, A> ProcurementService<S, C, A>
where
    S: ProcurementStore,
    C: VendorCatalog,
    A: AuditSink,
{
    pub fn new(store: S, catalog: C, audit: A) -> Self {
        Self { store, catalog, audit }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist procurement rules for a site, overwriting any previous
    /// entry wholesale. Returns the confirmation text.
    pub fn store_site_rules(
        &self,
        site_name: &str,
        approval_limit: u64,
        vendor_blacklist: &[String],
    ) -> Result<String, ProcurementError> {
        let site_key = site_name.trim();
        if site_key.is_empty() {
            return Err(ProcurementError::EmptySiteName);
        }

        let rules = SiteRules::new(approval_limit, vendor_blacklist.to_vec());
        self.store.put_site_rules(site_key, &rules)?;
        debug!(site = site_key, approval_limit, "site rules stored");

        self.audit.emit(
            AuditEvent::new(AuditEventType::RulesStored, site_key)
                .with_detail("approval_limit", approval_limit)
                .with_detail("vendor_blacklist", Value::from(rules.vendor_blacklist.clone())),
        );

        let blacklist_display = if rules.vendor_blacklist.is_empty() {
            "(none)".to_string()
        } else {
            rules.vendor_blacklist.join(", ")
        };
        Ok(format!(
            "Rules stored for site '{site_key}': approval_limit={}, \
             vendor_blacklist=[{blacklist_display}].",
            format_inr(approval_limit)
        ))
    }

    pub fn retrieve_site_rules(&self, site_name: &str) -> Result<SiteRules, ProcurementError> {
        let site_key = site_name.trim();
        if site_key.is_empty() {
            return Err(ProcurementError::EmptySiteName);
        }

        self.store
            .site_rules(site_key)?
            .ok_or_else(|| ProcurementError::RulesNotFound { site: site_key.to_string() })
    }

    /// All catalog vendors whose category matches the material,
    /// case-insensitively. A miss emits one audit event listing the
    /// available categories so the caller can self-correct.
    pub fn fetch_vendors(&self, material: &str) -> Vec<Vendor> {
        let all = self.catalog.vendors();
        let matched: Vec<Vendor> =
            all.iter().filter(|vendor| vendor.supplies(material)).cloned().collect();

        if matched.is_empty() {
            let available: BTreeSet<String> =
                all.iter().map(|vendor| normalize(&vendor.category)).collect();
            self.audit.emit(
                AuditEvent::new(AuditEventType::VendorRejected, "")
                    .with_detail("reason", format!("No vendors found for material '{material}'"))
                    .with_detail(
                        "available_categories",
                        Value::from(available.into_iter().collect::<Vec<_>>()),
                    ),
            );
        }

        matched
    }

    pub fn filter_vendors(
        &self,
        vendors: &[Vendor],
        blacklist: &[String],
        budget: u64,
        site_name: &str,
    ) -> FilterOutcome {
        filter::filter_vendors(vendors, blacklist, budget, site_name, &self.audit)
    }

    /// Gate stage. Within the limit (inclusive) the order is persisted
    /// and auto-confirmed; over the limit an escalation is returned and
    /// nothing is written.
    pub fn place_order(
        &self,
        request: &OrderRequest,
        approval_limit: u64,
    ) -> Result<Disposition, ProcurementError> {
        // Selection is recorded regardless of the outcome.
        self.audit.emit(
            AuditEvent::new(AuditEventType::VendorSelected, request.site_name.clone())
                .with_detail("vendor", request.vendor_name.clone())
                .with_detail("price", request.price_inr)
                .with_detail("quantity", request.quantity)
                .with_detail("material", request.material.clone()),
        );

        if request.price_inr <= approval_limit {
            let order = request.clone().into_order(OrderStatus::Confirmed);
            self.store.append_order(&order)?;
            self.audit.emit(
                AuditEvent::new(AuditEventType::OrderPlaced, request.site_name.clone())
                    .with_detail("vendor", request.vendor_name.clone())
                    .with_detail("price", request.price_inr)
                    .with_detail("quantity", request.quantity)
                    .with_detail("material", request.material.clone())
                    .with_detail("approval", "auto"),
            );
            let confirmation = auto_confirmation_text(
                request.quantity,
                &request.material,
                &request.vendor_name,
                request.price_inr,
                approval_limit,
            );
            return Ok(Disposition::Confirmed { order, confirmation });
        }

        let escalation =
            Escalation::new(request.vendor_name.clone(), request.price_inr, approval_limit);
        debug!(
            site = request.site_name.as_str(),
            vendor = request.vendor_name.as_str(),
            overage = escalation.overage,
            "order exceeds approval limit, escalating"
        );
        self.audit.emit(
            AuditEvent::new(AuditEventType::ApprovalRequested, request.site_name.clone())
                .with_detail("vendor", request.vendor_name.clone())
                .with_detail("price", request.price_inr)
                .with_detail("approval_limit", approval_limit)
                .with_detail("overage", escalation.overage)
                .with_detail("overage_pct", escalation.overage_pct.to_string()),
        );
        Ok(Disposition::ApprovalRequired(escalation))
    }

    /// Confirmation stage: terminal step of the two-phase gate. No
    /// budget re-check happens here; the caller vouches that a human
    /// approved the escalation out of band.
    pub fn confirm_order(&self, request: &OrderRequest) -> Result<String, ProcurementError> {
        let order = request.clone().into_order(OrderStatus::ConfirmedWithApproval);
        self.store.append_order(&order)?;
        self.audit.emit(
            AuditEvent::new(AuditEventType::OrderPlaced, request.site_name.clone())
                .with_detail("vendor", request.vendor_name.clone())
                .with_detail("price", request.price_inr)
                .with_detail("quantity", request.quantity)
                .with_detail("material", request.material.clone())
                .with_detail("approval", "human"),
        );
        Ok(human_confirmation_text(
            request.quantity,
            &request.material,
            &request.vendor_name,
            request.price_inr,
        ))
    }
}
