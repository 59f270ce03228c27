//! Vikoshiya Electricals CLI - drive the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! vik catalog list
//! vik catalog categories
//!
//! # Work the cart
//! vik cart add "9W LED Bulb Cool Daylight (Pack of 2)" -q 2
//! vik cart list
//! vik cart set-quantity 0 -q 5
//! vik cart remove 0
//!
//! # Place an order
//! vik checkout --first-name Asha --last-name Iyer \
//!   --email asha@example.com --phone 9876543210 \
//!   --address "12 Gandhi Road" --city Coimbatore --state TN \
//!   --pincode 641001 --payment-method cod
//!
//! # Accounts and favorites
//! vik auth register -n Asha -e asha@example.com -p 'Str0ng!pass'
//! vik favorites toggle "9W LED Bulb Cool Daylight (Pack of 2)"
//! ```
//!
//! # Commands
//!
//! - `catalog` - Browse products and categories
//! - `cart` - Add, edit, and clear cart lines
//! - `checkout` - Validate the form and place an order
//! - `orders` - List placed orders
//! - `auth` - Register, log in, log out
//! - `favorites` - Toggle and list favorites

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vik")]
#[command(author, version, about = "Vikoshiya Electricals storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for the current cart
    Checkout(commands::checkout::CheckoutArgs),
    /// List placed orders
    Orders,
    /// Manage the signed-in account
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Manage the favorites list
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List {
        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List categories with product counts
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a catalog product to the cart
    Add {
        /// Exact product title
        title: String,

        /// Quantity to add; anything unparseable counts as 1
        #[arg(short, long, default_value = "1")]
        quantity: String,
    },
    /// Show cart lines and totals
    List,
    /// Set the quantity of a cart line (clamped to 1-99)
    SetQuantity {
        /// Zero-based line index
        index: usize,

        /// New quantity; anything unparseable counts as 1
        #[arg(short, long)]
        quantity: String,
    },
    /// Remove a cart line
    Remove {
        /// Zero-based line index
        index: usize,
    },
    /// Remove every cart line
    Clear,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Register a new account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (min 8 chars, upper, lower, digit, symbol)
        #[arg(short, long)]
        password: String,
    },
    /// Sign in to an existing account
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show the signed-in account
    Whoami,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Flip the favorite state of a catalog product
    Toggle {
        /// Exact product title
        title: String,
    },
    /// List favorited products
    List,
}

#[tokio::main]
async fn main() {
    // Load .env before tracing init so RUST_LOG from the file applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category } => commands::catalog::list(category.as_deref())?,
            CatalogAction::Categories => commands::catalog::categories()?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add { title, quantity } => {
                commands::cart::add(&title, commands::parse_quantity(&quantity))?;
            }
            CartAction::List => commands::cart::list()?,
            CartAction::SetQuantity { index, quantity } => {
                commands::cart::set_quantity(index, commands::parse_quantity(&quantity))?;
            }
            CartAction::Remove { index } => commands::cart::remove(index)?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Checkout(args) => commands::checkout::place_order(args).await?,
        Commands::Orders => commands::checkout::list_orders()?,
        Commands::Auth { action } => match action {
            AuthAction::Register {
                name,
                email,
                password,
            } => commands::auth::register(&name, &email, &password)?,
            AuthAction::Login { email, password } => commands::auth::login(&email, &password)?,
            AuthAction::Logout => commands::auth::logout()?,
            AuthAction::Whoami => commands::auth::whoami()?,
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::Toggle { title } => commands::favorites::toggle(&title)?,
            FavoritesAction::List => commands::favorites::list()?,
        },
    }
    Ok(())
}
