use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::Order;
use crate::money::{format_inr, overage_pct};

/// Marker token opening every success text. The display layer keys on
/// it, so it is part of the contract.
pub const CONFIRMED_MARKER: &str = "ORDER_CONFIRMED";

/// Marker token opening every escalation text, distinct from the
/// success marker.
pub const APPROVAL_MARKER: &str = "APPROVAL_REQUIRED";

/// An order that exceeded the approval limit and needs a human before
/// it may be persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    pub vendor_name: String,
    pub price_inr: u64,
    pub approval_limit: u64,
    pub overage: u64,
    pub overage_pct: Decimal,
}

impl Escalation {
    pub fn new(vendor_name: impl Into<String>, price_inr: u64, approval_limit: u64) -> Self {
        let overage = price_inr.saturating_sub(approval_limit);
        Self {
            vendor_name: vendor_name.into(),
            price_inr,
            approval_limit,
            overage,
            overage_pct: overage_pct(overage, approval_limit),
        }
    }

    /// Line-oriented block parsable by the display layer: marker line,
    /// then one `key: value` line per field.
    pub fn render(&self) -> String {
        format!(
            "{APPROVAL_MARKER}\n\
             Order Details:\n\
             \x20 Vendor: {}\n\
             \x20 Cost: {}\n\
             \x20 Limit: {}\n\
             \x20 Overage: {} ({}%)\n\
             \n\
             Approve this order?",
            self.vendor_name,
            format_inr(self.price_inr),
            format_inr(self.approval_limit),
            format_inr(self.overage),
            self.overage_pct,
        )
    }
}

/// Gate stage verdict: either the order was persisted and confirmed,
/// or it escalated and nothing was written.
#[derive(Clone, Debug, PartialEq)]
pub enum Disposition {
    Confirmed { order: Order, confirmation: String },
    ApprovalRequired(Escalation),
}

impl Disposition {
    /// The caller-facing text for either branch.
    pub fn text(&self) -> String {
        match self {
            Self::Confirmed { confirmation, .. } => confirmation.clone(),
            Self::ApprovalRequired(escalation) => escalation.render(),
        }
    }
}

pub(crate) fn auto_confirmation_text(
    quantity: u32,
    material: &str,
    vendor_name: &str,
    price_inr: u64,
    approval_limit: u64,
) -> String {
    format!(
        "{CONFIRMED_MARKER}: Order placed: {quantity} bags {material} from {vendor_name} at {}. \
         Within approval limit of {}.",
        format_inr(price_inr),
        format_inr(approval_limit)
    )
}

pub(crate) fn human_confirmation_text(
    quantity: u32,
    material: &str,
    vendor_name: &str,
    price_inr: u64,
) -> String {
    format!(
        "{CONFIRMED_MARKER}: Order placed: {quantity} bags {material} from {vendor_name} at {}. \
         (Human-approved over-budget order.)",
        format_inr(price_inr)
    )
}
