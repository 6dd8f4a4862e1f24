//! CLI administration tool for events-dashboard.
//!
//! Inspects the view catalog and runs views against the database without
//! going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List views and their charts
//! cargo run --bin admin -- views
//!
//! # Print the tables behind a view
//! cargo run --bin admin -- show event
//!
//! # Pick the view interactively
//! cargo run --bin admin -- show
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_NAME` (and optional `DB_PORT`)
//! for every command that touches the database.

use events_dashboard::application::services::DashboardService;
use events_dashboard::config;
use events_dashboard::domain::chart::ChartSpec;
use events_dashboard::domain::view::{ViewCatalog, ViewId};
use events_dashboard::infrastructure::persistence::PgEventRepository;
use events_dashboard::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Select;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting events-dashboard.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List views and their charts
    Views,

    /// Resolve a view and print each chart's data
    Show {
        /// View path (product, event, category); prompts when omitted
        view: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Views => list_views(&ViewCatalog::standard()),
        Commands::Show { view } => {
            let view = match view {
                Some(path) => ViewId::from_path(&path),
                None => pick_view()?,
            };
            if view == ViewId::Home {
                println!(
                    "{}",
                    "⚠️  Unknown view; expected product, event or category".yellow()
                );
                return Ok(());
            }
            let pool = connect().await?;
            show_view(pool, view).await?;
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let config = config::load_from_env().context("Invalid configuration")?;
    connect_pool(&config).await
}

/// Prints every view with its route and chart titles.
fn list_views(catalog: &ViewCatalog) {
    println!("{}", "📋 Views".bright_blue().bold());
    println!();

    for view in catalog.iter() {
        println!(
            "  {} {}",
            view.route().bright_cyan().bold(),
            format!("({})", view.heading).bright_black()
        );
        for panel in &view.panels {
            println!("    • {}", panel.title);
        }
    }
    println!();
}

/// Prompts for one of the navigable views.
fn pick_view() -> Result<ViewId> {
    let labels: Vec<&str> = ViewId::NAVIGABLE.iter().map(|v| v.label()).collect();

    let selection = Select::new()
        .with_prompt("View")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ViewId::NAVIGABLE[selection])
}

/// Resolves a view and prints the data behind each chart.
async fn show_view(pool: PgPool, view: ViewId) -> Result<()> {
    let repository = Arc::new(PgEventRepository::new(Arc::new(pool)));
    let service = DashboardService::new(repository, ViewCatalog::standard());

    let page = service
        .resolve(view)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve view: {}", e))?;

    println!(
        "{}",
        format!("📊 {}", page.heading().unwrap_or_default())
            .bright_blue()
            .bold()
    );

    for (id, chart) in page.charts() {
        println!();
        print_chart(id, chart);
    }
    println!();

    Ok(())
}

fn print_chart(id: &str, chart: &ChartSpec) {
    println!(
        "{} {} {}",
        chart.title().bright_white().bold(),
        format!("[{id}]").bright_black(),
        format!("{:?}", chart.kind()).to_lowercase().cyan()
    );

    let data = chart.data();
    if data.is_empty() {
        println!("  {}", "(no rows)".bright_black());
        return;
    }

    println!(
        "  {:<20} {:>10} {:>14}",
        chart.category_column().bold(),
        "cantidad".bold(),
        "total".bold()
    );
    for row in data.rows() {
        let total = row
            .total
            .map(|t| format!("{t:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<20} {:>10} {:>14}",
            row.key,
            row.count.to_string().bright_green(),
            total
        );
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ecommerce_events")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Events:     {}", events.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
