//! Swapr CLI application entry point
//!
//! This is the main executable for the swapr catalog toolkit. It loads the
//! configured catalog snapshot, runs one catalog query or moderation action,
//! and renders the result.
//!
//! # Features
//!
//! - **Browse Mode**: category-driven browsing with breadcrumbs (default)
//! - **Search**: free-text search over title, owner, and category name
//! - **Moderation**: admin queues plus approve/reject/feature actions
//! - **Catalog Management**: configure and manage multiple snapshot files
//! - **Quiet Mode**: suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (default command)
//! swapr
//! swapr browse -c men/shirts
//!
//! # Search approved listings
//! swapr search jacket
//! swapr search jacket --sort newest --format json
//!
//! # Moderation
//! swapr admin listings --status pending
//! swapr admin approve listing l-003
//! swapr admin reject user u-005 --force
//!
//! # Quiet mode (only output results)
//! swapr -q search jacket
//! ```
//!
//! # Configuration
//!
//! On first run, swapr will prompt for initial setup. Configuration is
//! stored in the user's config directory (`~/.config/swapr/config.toml` on
//! Linux).

use swapr::{
    SwaprError,
    cli::{AdminCommands, CatalogCommands, Cli, Commands, ConfigCommands},
    commands,
    config::SwaprConfig,
    moderation::Decision,
    store::CatalogSnapshot,
};

type Result<T> = std::result::Result<T, SwaprError>;

/// Handle the catalog command - manage registered snapshot files
///
/// # Arguments
/// * `config` - Application configuration
/// * `command` - Specific catalog subcommand to execute
/// * `quiet` - If true, suppress informational output
///
/// # Errors
///
/// Returns `SwaprError` if the catalog operation is invalid (e.g. duplicate
/// name, non-existent catalog), configuration save fails, or filesystem
/// operations fail.
fn handle_catalog_command(
    mut config: SwaprConfig,
    command: &CatalogCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        CatalogCommands::Add { name, path, sample } => {
            if config.get_catalog(name).is_some() {
                if !quiet {
                    eprintln!("Error: Catalog '{name}' already exists");
                }
                return Err(SwaprError::InvalidInput(format!(
                    "Catalog '{name}' already exists"
                )));
            }

            let resolved_path = if path.components().count() == 1 {
                let data_dir = dirs::data_local_dir().ok_or_else(|| {
                    SwaprError::InvalidInput("Could not determine data directory".into())
                })?;
                data_dir.join("swapr").join(path)
            } else {
                path.clone()
            };

            if *sample && !resolved_path.exists() {
                CatalogSnapshot::sample().save(&resolved_path)?;
                if !quiet {
                    println!("Sample catalog written to {}", resolved_path.display());
                }
            } else if !resolved_path.exists() && !quiet {
                println!(
                    "Note: snapshot file {} does not exist yet",
                    resolved_path.display()
                );
            }

            config.add_catalog(name.clone(), resolved_path.clone())?;

            if !quiet {
                println!("Catalog '{name}' added at {}", resolved_path.display());
            }

            if config.catalogs.len() == 1 {
                config.set_default_catalog(name.clone())?;
                if !quiet {
                    println!("Set '{name}' as default catalog");
                }
            }
        }
        CatalogCommands::List => {
            if config.catalogs.is_empty() {
                if !quiet {
                    println!("No catalogs configured.");
                    println!("Add one with: swapr catalog add <name> <path>");
                }
                return Ok(());
            }

            if !quiet {
                println!("Configured catalogs:");
            }

            let default_catalog = config.get_default_catalog();
            let mut names: Vec<_> = config.list_catalogs();
            names.sort();

            for name in names {
                if let Some(path) = config.get_catalog(name) {
                    let is_default = default_catalog == Some(name);
                    let marker = if is_default { " (default)" } else { "" };

                    if quiet {
                        println!("{name}");
                    } else {
                        println!("  {} -> {}{}", name, path.display(), marker);
                    }
                }
            }
        }
        CatalogCommands::Remove { name, delete_file } => {
            if config.get_catalog(name).is_none() {
                if !quiet {
                    eprintln!("Error: Catalog '{name}' does not exist");
                }
                return Err(SwaprError::InvalidInput(format!(
                    "Catalog '{name}' does not exist"
                )));
            }

            let is_default = config.get_default_catalog() == Some(name);
            if is_default && !quiet {
                println!("Warning: Removing the default catalog. You'll need to set a new default.");
            }

            let removed_path = config.remove_catalog(name)?;

            if let Some(path) = removed_path {
                if !quiet {
                    println!("Catalog '{name}' removed from configuration");
                }

                if *delete_file {
                    if path.exists() {
                        match std::fs::remove_file(&path) {
                            Ok(()) => {
                                if !quiet {
                                    println!("Snapshot file deleted from {}", path.display());
                                }
                            }
                            Err(e) => {
                                if !quiet {
                                    eprintln!("Warning: Failed to delete snapshot file: {e}");
                                }
                            }
                        }
                    } else if !quiet {
                        println!(
                            "Snapshot file at {} does not exist (already deleted)",
                            path.display()
                        );
                    }
                } else if !quiet {
                    println!("Note: Snapshot file at {} was NOT deleted", path.display());
                }
            }

            if is_default {
                config.default_catalog = None;
                config.save()?;
            }
        }
        CatalogCommands::SetDefault { name } => {
            if config.get_catalog(name).is_none() {
                if !quiet {
                    eprintln!("Error: Catalog '{name}' does not exist");
                }
                return Err(SwaprError::InvalidInput(format!(
                    "Catalog '{name}' does not exist"
                )));
            }

            config.set_default_catalog(name.clone())?;

            if !quiet {
                println!("Set '{name}' as default catalog");
            }
        }
    }
    Ok(())
}

/// Handle the config command - manage application settings
///
/// # Arguments
/// * `config` - Application configuration
/// * `command` - Specific config subcommand to execute
/// * `quiet` - If true, suppress informational output
///
/// # Errors
///
/// Returns `SwaprError` if the configuration key is invalid, value parsing
/// fails, or configuration save fails.
fn handle_config_command(
    mut config: SwaprConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let parts: Vec<&str> = setting.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(SwaprError::InvalidInput(
                    "Invalid format. Use: swapr config set key=value".into(),
                ));
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "quiet" => {
                    let new_value = value.parse::<bool>().map_err(|_| {
                        SwaprError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                    config.quiet = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set quiet = {new_value}");
                    }
                }
                "page_size" => {
                    let new_value = value.parse::<usize>().map_err(|_| {
                        SwaprError::InvalidInput(format!(
                            "Invalid value for page_size: '{value}'. Use a positive number"
                        ))
                    })?;
                    if new_value == 0 {
                        return Err(SwaprError::InvalidInput(
                            "page_size must be at least 1".into(),
                        ));
                    }
                    config.page_size = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set page_size = {new_value}");
                    }
                }
                _ => {
                    return Err(SwaprError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: quiet, page_size"
                    )));
                }
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "quiet" => {
                println!("{}", config.quiet);
            }
            "page_size" => {
                println!("{}", config.page_size);
            }
            _ => {
                return Err(SwaprError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: quiet, page_size"
                )));
            }
        },
    }
    Ok(())
}

/// Main entry point for the swapr application
///
/// Loads configuration, parses command-line arguments, and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `SwaprError` if configuration loading fails, the snapshot cannot
/// be read, or any command handler returns an error.
fn main() -> Result<()> {
    let config = SwaprConfig::load_or_setup()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    if let Commands::Catalog { command } = &command {
        handle_catalog_command(config, command, quiet)?;
    } else if let Commands::Config { command } = &command {
        handle_config_command(config, command, quiet)?;
    } else {
        let catalog_name = command
            .catalog_name()
            .or_else(|| config.get_default_catalog().cloned())
            .ok_or_else(|| {
                SwaprError::InvalidInput(
                    "No default catalog set. Use 'swapr catalog add <name> <path>' to create one, or specify --catalog <name>.".into(),
                )
            })?;

        let snapshot_path = config
            .get_catalog(&catalog_name)
            .cloned()
            .ok_or_else(|| {
                SwaprError::InvalidInput(format!(
                    "Catalog '{catalog_name}' not found in configuration"
                ))
            })?;

        let mut snapshot = CatalogSnapshot::load(&snapshot_path)?;
        let page_size = |requested: Option<usize>| requested.unwrap_or(config.page_size);

        match &command {
            Commands::Browse {
                category,
                search,
                status,
                page_args,
                ..
            } => {
                commands::browse(
                    &snapshot,
                    category.clone(),
                    search.clone(),
                    *status,
                    page_args.page,
                    page_size(page_args.page_size),
                    quiet,
                )?;
            }
            Commands::Search {
                term,
                status,
                owner,
                sort,
                format,
                page_args,
                ..
            } => {
                commands::search(
                    &snapshot,
                    term.clone(),
                    *status,
                    owner.clone(),
                    *sort,
                    *format,
                    page_args.page,
                    page_size(page_args.page_size),
                    quiet,
                )?;
            }
            Commands::Featured { limit, .. } => {
                commands::featured(&snapshot, *limit, quiet)?;
            }
            Commands::Similar { id, limit, .. } => {
                commands::similar(&snapshot, id, *limit, quiet)?;
            }
            Commands::Categories { .. } => {
                commands::categories(&snapshot, quiet)?;
            }
            Commands::Admin { command } => match command {
                AdminCommands::Users {
                    search,
                    status,
                    page_args,
                    ..
                } => {
                    commands::admin::users(
                        &snapshot,
                        search.clone(),
                        *status,
                        page_args.page,
                        page_size(page_args.page_size),
                        quiet,
                    )?;
                }
                AdminCommands::Listings {
                    search,
                    status,
                    category,
                    page_args,
                    ..
                } => {
                    commands::admin::listings(
                        &snapshot,
                        search.clone(),
                        *status,
                        category.clone(),
                        page_args.page,
                        page_size(page_args.page_size),
                        quiet,
                    )?;
                }
                AdminCommands::Approve { target, id, .. } => {
                    commands::admin::review(
                        &mut snapshot,
                        &snapshot_path,
                        *target,
                        id,
                        Decision::Approve,
                        true,
                        quiet,
                    )?;
                }
                AdminCommands::Reject {
                    target, id, force, ..
                } => {
                    commands::admin::review(
                        &mut snapshot,
                        &snapshot_path,
                        *target,
                        id,
                        Decision::Reject,
                        *force,
                        quiet,
                    )?;
                }
                AdminCommands::Feature { id, .. } => {
                    commands::admin::feature(&mut snapshot, &snapshot_path, id, true, quiet)?;
                }
                AdminCommands::Unfeature { id, .. } => {
                    commands::admin::feature(&mut snapshot, &snapshot_path, id, false, quiet)?;
                }
            },
            Commands::Catalog { .. } | Commands::Config { .. } => unreachable!(),
        }
    }

    Ok(())
}
