//! CLI entry point for gym-manager
//!
//! Provides a command-line interface for the front-desk basics (stats,
//! check-ins, member search, backups) and launches the GTK4 GUI.

use chrono::Local;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use gym_manager::store::{settings::DEFAULT_DATA_DIR, GymStore, JsonStore, Settings};
use gym_manager::ui::App;

#[derive(Parser)]
#[command(name = "gym-manager")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the data file (defaults to the settings file's choice)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GTK4 interface (default)
    Gui,

    /// Show today's dashboard numbers
    Stats,

    /// Record a check-in for a member
    CheckIn {
        /// Member id
        member_id: u32,
    },

    /// List members, optionally filtered by name, phone or id
    Members {
        /// Search query
        query: Option<String>,
    },

    /// List available backups, newest first
    Backups,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(data) = cli.data {
        settings.data_file = expand_path(&data)?;
    }

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            let app = App::new(settings).map_err(|e| anyhow::anyhow!(e))?;
            app.run();
        }
        Commands::Stats => show_stats(&settings)?,
        Commands::CheckIn { member_id } => check_in(&settings, member_id)?,
        Commands::Members { query } => list_members(&settings, query.as_deref().unwrap_or(""))?,
        Commands::Backups => list_backups(&settings)?,
    }

    Ok(())
}

/// Settings live next to the data files in the default directory
fn load_settings() -> Settings {
    let dir = PathBuf::from(shellexpand::tilde(DEFAULT_DATA_DIR).as_ref());
    Settings::load_or_default(&dir.join("settings.json"))
}

fn expand_path(path: &PathBuf) -> anyhow::Result<PathBuf> {
    let raw = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Print the dashboard numbers
fn show_stats(settings: &Settings) -> anyhow::Result<()> {
    let store = JsonStore::open(settings.data_file.clone())?;
    let stats = store.get_dashboard_stats();

    println!(
        "{}",
        format!("{} — {}", settings.gym_name, Local::now().format("%Y-%m-%d")).bold()
    );
    println!();
    println!("  {:<22} {}", "Members:", stats.total_members.to_string().cyan());
    println!(
        "  {:<22} {}",
        "Active subscriptions:",
        stats.active_subscriptions.to_string().green()
    );
    println!(
        "  {:<22} {}",
        "Check-ins today:",
        stats.todays_checkins.to_string().cyan()
    );
    println!(
        "  {:<22} {}",
        "Revenue this month:",
        format!("{:.2} {}", stats.monthly_revenue, settings.currency).green()
    );

    Ok(())
}

/// Record a check-in from the command line
fn check_in(settings: &Settings, member_id: u32) -> anyhow::Result<()> {
    let mut store = JsonStore::open(settings.data_file.clone())?;

    let member = store
        .get_member(member_id)
        .ok_or_else(|| anyhow::anyhow!("Member #{} not found", member_id))?;

    match store.check_in(member_id) {
        Ok(record) => {
            println!(
                "{} {} checked in at {}",
                "✓".green().bold(),
                member.name.bold(),
                record.checked_in_at.format("%H:%M").to_string().cyan()
            );
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// List members matching the query (all members for an empty query)
fn list_members(settings: &Settings, query: &str) -> anyhow::Result<()> {
    let store = JsonStore::open(settings.data_file.clone())?;
    let members = store.search_members(query);

    if members.is_empty() {
        println!("{}", "No members found".yellow());
        return Ok(());
    }

    let total = members.len();

    for member in members {
        let status = match member.status {
            gym_manager::MemberStatus::Active => member.status.to_string().green(),
            gym_manager::MemberStatus::Expired => member.status.to_string().red(),
            gym_manager::MemberStatus::Suspended => member.status.to_string().yellow(),
        };

        println!(
            "{:>4}  {}  {}  [{}]",
            member.id.to_string().dimmed(),
            member.name.bold(),
            member.phone,
            status
        );
    }

    println!("\n{} Total: {} members", "✓".green(), total);

    Ok(())
}

/// List backup files, newest first
fn list_backups(settings: &Settings) -> anyhow::Result<()> {
    let store = JsonStore::open(settings.data_file.clone())?;
    let backups = store.list_backups()?;

    if backups.is_empty() {
        println!("{}", "No backups yet".yellow());
        return Ok(());
    }

    println!("{}", format!("Backups for {}\n", settings.data_file.display()).bold());

    let total = backups.len();
    for backup in backups {
        if let Some(name) = backup.file_name().and_then(|n| n.to_str()) {
            println!("  {}", name.cyan());
        }
    }

    println!("\n{} Total: {} backups", "✓".green(), total);

    Ok(())
}
