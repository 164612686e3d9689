//! Thrift Haven CLI - The shop front for your terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! thrift-haven shop
//!
//! # Show the cart page
//! thrift-haven cart
//!
//! # Add a product, by the id shown in `shop`
//! thrift-haven cart add denim-jacket
//!
//! # Nudge a quantity, or drop the line
//! thrift-haven cart plus denim-jacket
//! thrift-haven cart minus denim-jacket
//! thrift-haven cart remove denim-jacket
//!
//! # The cart count badge number
//! thrift-haven cart count
//!
//! # Place the order
//! thrift-haven cart buy
//!
//! # Send the shop a message
//! thrift-haven contact -n "Margot" -e margot@example.com -m "Do you ship abroad?"
//! ```
//!
//! # Commands
//!
//! - `shop` - List the product catalog
//! - `cart` - Show the cart, or mutate it via a subcommand
//! - `contact` - Send a contact message

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "thrift-haven")]
#[command(author, version, about = "Thrift Haven storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Shop,
    /// Show the cart, or mutate it
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Send a message to the shop
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your email address
        #[arg(short, long)]
        email: String,

        /// The message body
        #[arg(short, long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product to the cart
    Add {
        /// Product id, as listed by `shop`
        product_id: String,
    },
    /// Increase a cart line's quantity by one
    Plus {
        /// Product id of the cart line
        product_id: String,
    },
    /// Decrease a cart line's quantity by one (never below one)
    Minus {
        /// Product id of the cart line
        product_id: String,
    },
    /// Remove a cart line entirely
    Remove {
        /// Product id of the cart line
        product_id: String,
    },
    /// Print the cart count badge number
    Count,
    /// Place the order and empty the cart
    Buy,
    /// Empty the cart
    Clear,
}

fn main() {
    // Logs go to stderr so command output stays pipeable
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("thrift_haven=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> thrift_haven_storefront::error::Result<()> {
    match cli.command {
        Commands::Shop => commands::shop::list()?,
        Commands::Cart { action } => match action {
            None => commands::cart::show()?,
            Some(CartAction::Add { product_id }) => commands::cart::add(&product_id)?,
            Some(CartAction::Plus { product_id }) => commands::cart::adjust(&product_id, 1)?,
            Some(CartAction::Minus { product_id }) => commands::cart::adjust(&product_id, -1)?,
            Some(CartAction::Remove { product_id }) => commands::cart::remove(&product_id)?,
            Some(CartAction::Count) => commands::cart::count()?,
            Some(CartAction::Buy) => commands::cart::buy()?,
            Some(CartAction::Clear) => commands::cart::clear()?,
        },
        Commands::Contact {
            name,
            email,
            message,
        } => commands::contact::send(name, email, message)?,
    }
    Ok(())
}
