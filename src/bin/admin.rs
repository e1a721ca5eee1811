//! CLI administration tool for the bookstore.
//!
//! Provides commands for inspecting the catalog, orders and open carts, and
//! for database maintenance, without going through the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection and table sizes
//! cargo run --bin admin -- db check
//!
//! # Replace the catalog with the fixture (embedded or CATALOG_PATH)
//! cargo run --bin admin -- db reseed
//!
//! # List the catalog
//! cargo run --bin admin -- catalog
//!
//! # List orders, or show one order
//! cargo run --bin admin -- orders list
//! cargo run --bin admin -- orders show 3
//!
//! # List carts holding lines, or empty one
//! cargo run --bin admin -- carts list
//! cargo run --bin admin -- carts clear <cart-key>
//! ```
//!
//! # Environment Variables
//!
//! Uses the same variables as the server (`DATABASE_URL`, `CATALOG_PATH`,
//! pool settings); see `paperback_collections::config`.

use paperback_collections::config::{self, Config};
use paperback_collections::domain::entities::Order;
use paperback_collections::infrastructure::db::{self, DbPool};
use paperback_collections::infrastructure::persistence::SqliteProductRepository;
use paperback_collections::infrastructure::seed::{load_catalog, refresh_catalog};
use paperback_collections::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing the bookstore.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// List the catalog
    Catalog,

    /// Inspect placed orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Inspect and clean up carts
    Carts {
        #[command(subcommand)]
        action: CartAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and show row counts
    Check,

    /// Replace the catalog with the fixture and drop pending cart lines
    Reseed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Order inspection subcommands.
#[derive(Subcommand)]
enum OrderAction {
    /// List all orders, newest first
    List,

    /// Show one order with its lines
    Show {
        /// Order ID
        id: i64,
    },
}

/// Cart subcommands.
#[derive(Subcommand)]
enum CartAction {
    /// List carts that hold lines
    List,

    /// Remove every line of a cart
    Clear {
        /// Cart key (value of the `cart_id` cookie)
        key: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = db::connect_with_settings(
        &config.database_url,
        config.pool_size(),
        config.db_connect_timeout,
    )
    .await
    .context("Failed to connect to database")?;

    db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let state = AppState::new(pool.clone(), config.cookie_secure);

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config, pool).await?,
        Commands::Catalog => list_catalog(&state).await?,
        Commands::Orders { action } => handle_order_action(action, &state).await?,
        Commands::Carts { action } => handle_cart_action(action, &state).await?,
    }

    Ok(())
}

/// Handles database maintenance commands.
async fn handle_db_action(action: DbAction, config: &Config, pool: Arc<DbPool>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool.as_ref()).await?;

            println!("{}", "Database connection OK".green().bold());
            println!();

            for table in ["products", "cart_lines", "orders", "order_lines"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool.as_ref())
                    .await?;
                println!(
                    "  {:<12} {}",
                    table,
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
        DbAction::Reseed { yes } => {
            println!("{}", "Reseed catalog".bright_blue().bold());
            println!();

            let products = load_catalog(config.catalog_path.as_deref())?;

            match &config.catalog_path {
                Some(path) => println!("  Source:   {}", path.display().to_string().cyan()),
                None => println!("  Source:   {}", "embedded catalog".cyan()),
            }
            println!("  Products: {}", products.len().to_string().cyan());
            println!();
            println!(
                "{}",
                "Pending cart lines will be removed. Orders are kept.".yellow()
            );
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Replace the catalog?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            let repository = SqliteProductRepository::new(pool);
            let inserted = refresh_catalog(&repository, products).await?;

            println!();
            println!(
                "{}",
                format!("Catalog replaced: {inserted} products").green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Lists the catalog.
///
/// # Output Format
///
/// ```text
/// Catalog
///
///   ID   Title                                    Category          Price
///   ───────────────────────────────────────────────────────────────────────
///   1    The Maid                                 Fiction           $14.99
/// ```
async fn list_catalog(state: &AppState) -> Result<()> {
    println!("{}", "Catalog".bright_blue().bold());
    println!();

    let products = state
        .catalog_service
        .list_products()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list products: {}", e))?;

    if products.is_empty() {
        println!("{}", "  Catalog is empty".yellow());
        println!();
        println!(
            "  Seed it with: {} admin -- db reseed",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<40} {:<17} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Category".bright_white().bold(),
        "Price".bright_white().bold()
    );
    println!("  {}", "─".repeat(71).bright_black());

    for product in &products {
        println!(
            "  {:<4} {:<40} {:<17} {}",
            product.id.to_string().bright_black(),
            truncate(&product.title, 40).cyan(),
            product.category,
            product.display_price().bright_green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        products.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Dispatches order inspection commands.
async fn handle_order_action(action: OrderAction, state: &AppState) -> Result<()> {
    match action {
        OrderAction::List => {
            println!("{}", "Orders".bright_blue().bold());
            println!();

            let orders = state
                .checkout_service
                .list_orders()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list orders: {}", e))?;

            if orders.is_empty() {
                println!("{}", "  No orders yet".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<25} {:<30} {:<17} {:>6} {:>10}",
                "ID".bright_white().bold(),
                "Customer".bright_white().bold(),
                "Email".bright_white().bold(),
                "Placed".bright_white().bold(),
                "Items".bright_white().bold(),
                "Total".bright_white().bold()
            );
            println!("  {}", "─".repeat(98).bright_black());

            for order in &orders {
                println!(
                    "  {:<5} {:<25} {:<30} {:<17} {:>6} {:>10}",
                    order.id.to_string().bright_black(),
                    truncate(&order.customer.name, 25).cyan(),
                    truncate(&order.customer.email, 30),
                    order
                        .created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    order.item_count(),
                    order.display_total().bright_green()
                );
            }

            println!();
            println!("  Total: {}", orders.len().to_string().bright_white().bold());
            println!();
        }
        OrderAction::Show { id } => {
            let order = state
                .checkout_service
                .get_order(id)
                .await
                .map_err(|e| anyhow::anyhow!("{} (order {})", e, id))?;

            print_order(&order);
        }
    }

    Ok(())
}

fn print_order(order: &Order) {
    println!(
        "{}",
        format!("Order #{}", order.id).bright_blue().bold()
    );
    println!();
    println!("  Name:    {}", order.customer.name.cyan());
    println!("  Email:   {}", order.customer.email);
    println!("  Address: {}", order.customer.address.replace('\n', ", "));
    println!(
        "  Placed:  {}",
        order.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    for line in &order.lines {
        println!(
            "  {:>3} x {:<40} {:>10} {:>10}",
            line.quantity,
            truncate(&line.title, 40),
            line.display_unit_price(),
            line.display_total().bright_green()
        );
    }

    println!("  {}", "─".repeat(68).bright_black());
    println!(
        "  {:>68}",
        order.display_total().bright_white().bold().to_string()
    );
    println!();
}

/// Dispatches cart commands.
async fn handle_cart_action(action: CartAction, state: &AppState) -> Result<()> {
    match action {
        CartAction::List => {
            println!("{}", "Open carts".bright_blue().bold());
            println!();

            let carts = state
                .cart_service
                .open_carts()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list carts: {}", e))?;

            if carts.is_empty() {
                println!("{}", "  No open carts".yellow());
                return Ok(());
            }

            for (key, lines) in &carts {
                println!("  {}  {} line(s)", key.cyan(), lines);
            }
            println!();
        }
        CartAction::Clear { key, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Empty cart {key}?"))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            let removed = state
                .cart_service
                .clear(&key)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to clear cart: {}", e))?;

            println!(
                "{}",
                format!("Removed {removed} line(s)").green().bold()
            );
        }
    }

    Ok(())
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
