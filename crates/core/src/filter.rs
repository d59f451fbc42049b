use serde::{Deserialize, Serialize};

use crate::audit::{AuditEvent, AuditEventType, AuditSink};
use crate::domain::normalize;
use crate::domain::vendor::Vendor;
use crate::money::format_inr;

/// A vendor excluded by the blacklist or budget check, with the reason
/// recorded for the caller and the audit trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredVendor {
    pub vendor: String,
    pub reason: String,
    pub price: u64,
}

/// Output of the filtering stage. Every input vendor lands in exactly
/// one of the three buckets; `eligible` is sorted ascending by price
/// (stable, so ties keep input order). `message` is present only when
/// no vendor survived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub eligible: Vec<Vendor>,
    pub rejected: Vec<FilteredVendor>,
    pub over_budget: Vec<FilteredVendor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FilterOutcome {
    pub fn cheapest_eligible(&self) -> Option<&Vendor> {
        self.eligible.first()
    }

    pub fn cheapest_over_budget(&self) -> Option<&FilteredVendor> {
        self.over_budget.iter().min_by_key(|entry| entry.price)
    }
}

/// Partition a vendor list by blacklist and budget.
///
/// Order matters and defines precedence: the blacklist check runs
/// first, so a vendor that is both blacklisted and over budget lands
/// in `rejected`, never `over_budget`. One audit event is emitted per
/// excluded vendor; eligible vendors are not logged here (selection is
/// logged by the gate stage).
pub fn filter_vendors(
    vendors: &[Vendor],
    blacklist: &[String],
    budget: u64,
    site_name: &str,
    audit: &dyn AuditSink,
) -> FilterOutcome {
    let blacklist_normalized: Vec<String> = blacklist.iter().map(|name| normalize(name)).collect();

    let mut eligible = Vec::new();
    let mut rejected = Vec::new();
    let mut over_budget = Vec::new();

    for vendor in vendors {
        let price = vendor.price_per_100_bags_inr;

        if blacklist_normalized.contains(&normalize(&vendor.name)) {
            let reason = "Blacklisted for this site".to_string();
            audit.emit(
                AuditEvent::new(AuditEventType::VendorRejected, site_name)
                    .with_detail("vendor", vendor.name.clone())
                    .with_detail("price", price)
                    .with_detail("reason", reason.clone()),
            );
            rejected.push(FilteredVendor { vendor: vendor.name.clone(), reason, price });
            continue;
        }

        if price > budget {
            let reason =
                format!("Price {} exceeds budget {}", format_inr(price), format_inr(budget));
            audit.emit(
                AuditEvent::new(AuditEventType::VendorRejected, site_name)
                    .with_detail("vendor", vendor.name.clone())
                    .with_detail("price", price)
                    .with_detail("reason", reason.clone()),
            );
            over_budget.push(FilteredVendor { vendor: vendor.name.clone(), reason, price });
            continue;
        }

        eligible.push(vendor.clone());
    }

    // Cheapest-first; stable so equal prices keep input order.
    eligible.sort_by_key(|vendor| vendor.price_per_100_bags_inr);

    let message = diagnostic_message(&eligible, &rejected, &over_budget, budget);

    FilterOutcome { eligible, rejected, over_budget, message }
}

fn diagnostic_message(
    eligible: &[Vendor],
    rejected: &[FilteredVendor],
    over_budget: &[FilteredVendor],
    budget: u64,
) -> Option<String> {
    if !eligible.is_empty() {
        return None;
    }

    if over_budget.is_empty() {
        if rejected.is_empty() {
            return None;
        }
        return Some(format!(
            "All {} vendor(s) are blacklisted for this site. No order can be placed. \
             Update the blacklist or add new vendors.",
            rejected.len()
        ));
    }

    over_budget.iter().min_by_key(|entry| entry.price).map(|cheapest| {
        format!(
            "All non-blacklisted vendors exceed the budget of {}. Cheapest option: {} at {}. \
             Request a budget increase or approve the over-budget order.",
            format_inr(budget),
            cheapest.vendor,
            format_inr(cheapest.price)
        )
    })
}
