use procura_core::config::LoadOptions;
use procura_core::OrderRequest;

use crate::commands::{open_service, CommandResult};

/// Finalize an escalated order after a human approved it. Persists
/// with approval recorded; the budget gate is not re-run.
pub fn run(
    options: LoadOptions,
    site: &str,
    vendor: &str,
    price: u64,
    quantity: u32,
    material: &str,
) -> CommandResult {
    let (_config, service) = match open_service("confirm", options) {
        Ok(parts) => parts,
        Err(result) => return result,
    };

    let request = OrderRequest {
        site_name: site.trim().to_string(),
        vendor_name: vendor.trim().to_string(),
        material: material.trim().to_string(),
        quantity,
        price_inr: price,
    };

    match service.confirm_order(&request) {
        Ok(confirmation) => CommandResult::success("confirm", confirmation),
        Err(error) => {
            CommandResult::failure("confirm", "order_confirmation", error.user_message(), 5)
        }
    }
}
