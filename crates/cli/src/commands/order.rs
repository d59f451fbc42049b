use procura_core::config::LoadOptions;
use procura_core::{Disposition, OrderRequest};

use crate::commands::{open_service, CommandResult};

/// The full pipeline: rules -> vendors -> filter -> budget gate. The
/// cheapest eligible vendor wins; with none eligible the cheapest
/// over-budget vendor is escalated instead of silently dropped.
pub fn run(options: LoadOptions, site: &str, material: &str, quantity: u32) -> CommandResult {
    let (_config, service) = match open_service("order", options) {
        Ok(parts) => parts,
        Err(result) => return result,
    };

    let rules = match service.retrieve_site_rules(site) {
        Ok(rules) => rules,
        Err(error) => {
            return CommandResult::failure("order", "rules_lookup", error.user_message(), 3);
        }
    };

    let vendors = service.fetch_vendors(material);
    if vendors.is_empty() {
        return CommandResult::failure(
            "order",
            "no_vendors",
            format!("No vendors found for material '{material}'."),
            4,
        );
    }

    let outcome =
        service.filter_vendors(&vendors, &rules.vendor_blacklist, rules.approval_limit, site);

    let candidate = outcome
        .cheapest_eligible()
        .map(|vendor| (vendor.name.clone(), vendor.price_per_100_bags_inr))
        .or_else(|| {
            outcome.cheapest_over_budget().map(|entry| (entry.vendor.clone(), entry.price))
        });

    let Some((vendor_name, price)) = candidate else {
        let message = outcome
            .message
            .unwrap_or_else(|| "No vendor is available for this order.".to_string());
        return CommandResult::failure("order", "no_eligible_vendor", message, 4);
    };

    let request = OrderRequest {
        site_name: site.trim().to_string(),
        vendor_name,
        material: material.trim().to_string(),
        quantity,
        price_inr: price,
    };

    match service.place_order(&request, rules.approval_limit) {
        Ok(Disposition::Confirmed { confirmation, .. }) => {
            CommandResult::success("order", confirmation)
        }
        Ok(Disposition::ApprovalRequired(escalation)) => CommandResult::success(
            "order",
            format!(
                "{}\n\nTo finalize, run: procura confirm '{}' '{}' --price {} --quantity {} --material {}",
                escalation.render(),
                site.trim(),
                escalation.vendor_name,
                escalation.price_inr,
                quantity,
                material.trim()
            ),
        ),
        Err(error) => CommandResult::failure("order", "order_placement", error.user_message(), 5),
    }
}
