use procura_core::config::LoadOptions;
use procura_core::money::format_inr;

use crate::commands::{open_service, CommandResult};

pub fn set(options: LoadOptions, site: &str, limit: u64, blacklist: &[String]) -> CommandResult {
    let (_config, service) = match open_service("rules.set", options) {
        Ok(parts) => parts,
        Err(result) => return result,
    };

    match service.store_site_rules(site, limit, blacklist) {
        Ok(confirmation) => CommandResult::success("rules.set", confirmation),
        Err(error) => CommandResult::failure("rules.set", "rules_store", error.user_message(), 3),
    }
}

pub fn show(options: LoadOptions, site: &str) -> CommandResult {
    let (_config, service) = match open_service("rules.show", options) {
        Ok(parts) => parts,
        Err(result) => return result,
    };

    match service.retrieve_site_rules(site) {
        Ok(rules) => {
            let blacklist = if rules.vendor_blacklist.is_empty() {
                "(none)".to_string()
            } else {
                rules.vendor_blacklist.join(", ")
            };
            CommandResult::success(
                "rules.show",
                format!(
                    "Site '{}': approval_limit={}, vendor_blacklist=[{}]",
                    site.trim(),
                    format_inr(rules.approval_limit),
                    blacklist
                ),
            )
        }
        Err(error) => CommandResult::failure("rules.show", "rules_lookup", error.user_message(), 3),
    }
}
