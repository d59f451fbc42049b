pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use procura_core::config::{AppConfig, ConfigOverrides, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "procura",
    about = "Procura operator CLI",
    long_about = "Operate the procurement pipeline: site rules, vendor lookup, order placement, \
                  escalation confirmation, and audit inspection.",
    after_help = "Examples:\n  procura seed\n  procura rules set Delhi-Site-7 --limit 38000 --blacklist \"BadRock Cements\"\n  procura order Delhi-Site-7 cement 500\n  procura audit --site Delhi-Site-7"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a procura.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Directory holding the store, catalog, and audit files")]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand, about = "Store or inspect per-site procurement rules")]
    Rules(RulesCommand),
    #[command(about = "List catalog vendors supplying a material")]
    Vendors {
        material: String,
    },
    #[command(about = "Run the full order pipeline for a site (cheapest vendor wins)")]
    Order {
        site: String,
        material: String,
        quantity: u32,
    },
    #[command(about = "Finalize a previously escalated over-budget order")]
    Confirm {
        site: String,
        vendor: String,
        #[arg(long, help = "Agreed price in INR")]
        price: u64,
        #[arg(long)]
        quantity: u32,
        #[arg(long)]
        material: String,
    },
    #[command(about = "Show the append-only audit trail, newest last")]
    Audit {
        #[arg(long, help = "Only show events for this site")]
        site: Option<String>,
    },
    #[command(about = "Write the deterministic demo vendor catalog into the data directory")]
    Seed,
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
}

#[derive(Debug, Subcommand)]
enum RulesCommand {
    #[command(about = "Store rules for a site, replacing any previous entry")]
    Set {
        site: String,
        #[arg(long, help = "Auto-approval limit in INR")]
        limit: u64,
        #[arg(long, value_delimiter = ',', help = "Comma-separated vendor names to exclude")]
        blacklist: Vec<String>,
    },
    #[command(about = "Show the stored rules for a site")]
    Show {
        site: String,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        require_file: false,
        overrides: ConfigOverrides { data_dir: cli.data_dir, ..ConfigOverrides::default() },
    };

    if let Ok(config) = AppConfig::load(options.clone()) {
        logging::init(&config.logging);
    }

    let result = match cli.command {
        Command::Rules(RulesCommand::Set { site, limit, blacklist }) => {
            commands::rules::set(options, &site, limit, &blacklist)
        }
        Command::Rules(RulesCommand::Show { site }) => commands::rules::show(options, &site),
        Command::Vendors { material } => commands::vendors::run(options, &material),
        Command::Order { site, material, quantity } => {
            commands::order::run(options, &site, &material, quantity)
        }
        Command::Confirm { site, vendor, price, quantity, material } => {
            commands::confirm::run(options, &site, &vendor, price, quantity, &material)
        }
        Command::Audit { site } => commands::audit::run(options, site.as_deref()),
        Command::Seed => commands::seed::run(options),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run(options) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
