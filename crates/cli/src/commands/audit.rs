use procura_core::config::LoadOptions;
use procura_store::{JsonlAuditLog, StorePaths};

use crate::commands::{open_service, CommandResult};

pub fn run(options: LoadOptions, site: Option<&str>) -> CommandResult {
    let (config, _service) = match open_service("audit", options) {
        Ok(parts) => parts,
        Err(result) => return result,
    };

    let log = JsonlAuditLog::new(StorePaths::new(config.storage.data_dir).audit_file());
    let mut entries = log.entries();
    if let Some(site) = site {
        let site = site.trim();
        entries.retain(|event| event.site_name == site);
    }

    if entries.is_empty() {
        return CommandResult::success("audit", "No audit events recorded.");
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|event| serde_json::to_string(event).unwrap_or_else(|error| error.to_string()))
        .collect();

    CommandResult::success(
        "audit",
        format!("{} audit event(s):\n{}", entries.len(), lines.join("\n")),
    )
}
