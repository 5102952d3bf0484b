//! Lexicon CLI - user dictionary maintenance and folder synchronization.

mod tracing_setup;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lexicon_core::models::{MergeReport, SyncReport, UpgradeOutcome};
use lexicon_core::{LexiconConfig, UserId};
use lexicon_sync::UserDictManager;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "lexicon")]
#[command(about = "Back up, restore, export, import and synchronize user dictionaries")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "LEXICON_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the local user dictionaries
    #[arg(long)]
    user_data_dir: Option<PathBuf>,

    /// Shared sync root
    #[arg(long)]
    sync_dir: Option<PathBuf>,

    /// Identity of this device
    #[arg(long, env = "LEXICON_USER_ID")]
    user_id: Option<String>,

    /// Log level, overridden by LEXICON_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List local user dictionaries
    List,
    /// Synchronize one dictionary, or all of them
    Sync {
        /// Dictionary name
        dict: Option<String>,
    },
    /// Write a snapshot into this device's sync folder
    Backup {
        /// Dictionary name
        dict: String,
    },
    /// Merge a snapshot file into the local dictionary it names
    Restore {
        /// Snapshot file
        snapshot: PathBuf,
    },
    /// Export a dictionary to a text file
    Export {
        /// Dictionary name
        dict: String,
        /// Output file
        file: PathBuf,
    },
    /// Import a text file into a dictionary
    Import {
        /// Dictionary name
        dict: String,
        /// Input file
        file: PathBuf,
    },
    /// Rebuild a dictionary written with the legacy key format
    Upgrade {
        /// Dictionary name
        dict: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_setup::init_tracing(&args.log_level, args.json_logs);

    let config = load_config(&args)?;
    let session = resolve_identity(&args, &config);
    let manager = UserDictManager::from_config(&config);
    info!(
        user_data_dir = %config.user_data_dir().display(),
        sync_dir = %manager.sync_dir().display(),
        user_id = %session,
        "lexicon ready"
    );

    match args.command {
        Commands::List => {
            let dicts = manager.user_dict_list()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&dicts)?);
            } else if dicts.is_empty() {
                println!("No user dictionaries found");
            } else {
                for dict in dicts {
                    println!("{dict}");
                }
            }
        }
        Commands::Sync { dict: Some(dict) } => {
            let report = manager.synchronize(&dict, &session)?;
            print_sync_reports(std::slice::from_ref(&report), args.json)?;
            if !report.is_success() {
                bail!(
                    "synchronization of '{}' finished with {} failure(s)",
                    dict,
                    report.failure_count()
                );
            }
        }
        Commands::Sync { dict: None } => {
            let reports = manager.synchronize_all(&session)?;
            print_sync_reports(&reports, args.json)?;
        }
        Commands::Backup { dict } => {
            let snapshot = manager.backup(&dict, &session)?;
            println!("{}", snapshot.display());
        }
        Commands::Restore { snapshot } => {
            let report = manager
                .restore(&snapshot, &session)
                .with_context(|| format!("restoring {}", snapshot.display()))?;
            print_merge_report(&report, args.json)?;
        }
        Commands::Export { dict, file } => {
            let rows = manager.export(&dict, &file)?;
            println!("{rows} entries exported to {}", file.display());
        }
        Commands::Import { dict, file } => {
            let entries = manager.import(&dict, &file, &session)?;
            println!("{entries} entries imported into {dict}");
        }
        Commands::Upgrade { dict } => match manager.upgrade_user_dict(&dict, &session)? {
            UpgradeOutcome::Current => println!("{dict} is up to date"),
            UpgradeOutcome::Upgraded(report) => print_merge_report(&report, args.json)?,
        },
    }
    Ok(())
}

/// File config, then command line overrides.
fn load_config(args: &Args) -> Result<LexiconConfig> {
    let mut config = match &args.config {
        Some(path) => LexiconConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LexiconConfig::default(),
    };
    if let Some(dir) = &args.user_data_dir {
        config.storage.user_data_dir = dir.display().to_string();
    }
    if let Some(dir) = &args.sync_dir {
        config.sync.sync_dir = dir.display().to_string();
    }
    if let Some(user_id) = &args.user_id {
        config.identity.user_id = Some(user_id.clone());
    }
    Ok(config)
}

fn resolve_identity(args: &Args, config: &LexiconConfig) -> UserId {
    match config.identity.user_id.as_deref() {
        Some(id) if !id.trim().is_empty() => UserId::new(id.trim()),
        _ => {
            let id = UserId::generate();
            if !matches!(args.command, Commands::List | Commands::Export { .. }) {
                warn!(user_id = %id, "no user id configured; using a generated one for this run");
            }
            id
        }
    }
}

fn print_merge_report(report: &MergeReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    println!(
        "{}: {} entries merged from {} (tick {})",
        report.db_name, report.entries_merged, report.source_user_id, report.tick
    );
    if report.keys_repaired > 0 || report.keys_skipped > 0 {
        println!(
            "  {} keys repaired, {} skipped",
            report.keys_repaired, report.keys_skipped
        );
    }
    Ok(())
}

fn print_sync_reports(reports: &[SyncReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }
    println!("{:<24} {:>8} {:>8}  {}", "DICTIONARY", "MERGED", "FAILED", "SNAPSHOT");
    println!("{}", "-".repeat(72));
    for report in reports {
        println!(
            "{:<24} {:>8} {:>8}  {}",
            report.dict_name,
            report.entries_merged(),
            report.failure_count(),
            report
                .backup
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        for failure in &report.failures {
            println!("  ! {}: {}", failure.snapshot.display(), failure.reason);
        }
        if let Some(reason) = &report.backup_error {
            println!("  ! backup: {reason}");
        }
    }
    Ok(())
}
