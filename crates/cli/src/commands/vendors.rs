use procura_core::config::LoadOptions;
use procura_core::money::format_inr;

use crate::commands::{open_service, CommandResult};

pub fn run(options: LoadOptions, material: &str) -> CommandResult {
    let (_config, service) = match open_service("vendors", options) {
        Ok(parts) => parts,
        Err(result) => return result,
    };

    let vendors = service.fetch_vendors(material);
    if vendors.is_empty() {
        return CommandResult::failure(
            "vendors",
            "no_vendors",
            format!("No vendors found for material '{material}'."),
            4,
        );
    }

    let lines: Vec<String> = vendors
        .iter()
        .map(|vendor| {
            format!(
                "  - {} ({}/100 bags, {} days, {})",
                vendor.name,
                format_inr(vendor.price_per_100_bags_inr),
                vendor.delivery_days,
                if vendor.in_stock { "in stock" } else { "out of stock" }
            )
        })
        .collect();

    CommandResult::success(
        "vendors",
        format!("{} vendor(s) supply {}:\n{}", vendors.len(), material.trim(), lines.join("\n")),
    )
}
