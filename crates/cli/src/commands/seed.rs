use procura_core::config::LoadOptions;
use procura_store::fixtures::{demo_vendors, write_demo_catalog};
use procura_store::StorePaths;

use crate::commands::{open_service, CommandResult};

pub fn run(options: LoadOptions) -> CommandResult {
    let (config, _service) = match open_service("seed", options) {
        Ok(parts) => parts,
        Err(result) => return result,
    };

    let path = StorePaths::new(config.storage.data_dir).catalog_file();
    match write_demo_catalog(&path) {
        Ok(()) => CommandResult::success(
            "seed",
            format!(
                "Wrote demo catalog with {} vendor(s) to {}",
                demo_vendors().len(),
                path.display()
            ),
        ),
        Err(error) => {
            CommandResult::failure("seed", "seed_write", format!("seed failed: {error}"), 4)
        }
    }
}
