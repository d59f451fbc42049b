pub mod audit;
pub mod config;
pub mod confirm;
pub mod order;
pub mod rules;
pub mod seed;
pub mod vendors;

use serde::Serialize;

use procura_core::config::{AppConfig, LoadOptions};
use procura_core::ProcurementService;
use procura_store::{JsonFileStore, JsonVendorCatalog, JsonlAuditLog, StorePaths};

pub type FileService = ProcurementService<JsonFileStore, JsonVendorCatalog, JsonlAuditLog>;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Load config and assemble the flat-file service. Every command
/// starts here; a config problem maps to exit code 2.
pub(crate) fn open_service(
    command: &str,
    options: LoadOptions,
) -> Result<(AppConfig, FileService), CommandResult> {
    let config = AppConfig::load(options).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            2,
        )
    })?;

    let paths = StorePaths::new(config.storage.data_dir.clone());
    let service = ProcurementService::new(
        JsonFileStore::new(paths.store_file()),
        JsonVendorCatalog::new(paths.catalog_file()),
        JsonlAuditLog::new(paths.audit_file()),
    );

    Ok((config, service))
}
