use clap::{Args, Parser, Subcommand};
use costcalc::interfaces::cli::prompt::DEFAULT_MAX_ATTEMPTS;
use costcalc::interfaces::cli::quote::{Quote, run_quote};
use costcalc::interfaces::cli::session::{SessionConfig, run_session};
use costcalc::interfaces::currency::CurrencyFormat;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Currency symbol printed in front of every amount
    #[arg(long, global = true, default_value = "Rs")]
    currency_symbol: String,

    /// Print amounts without a space after the currency symbol
    #[arg(long, global = true)]
    no_symbol_space: bool,

    /// How many invalid answers a prompt accepts before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Price a single item without prompting
    Quote(QuoteArgs),
}

#[derive(Args)]
struct QuoteArgs {
    /// Item name (defaults to "Item")
    #[arg(long)]
    name: Option<String>,

    /// Cost per item
    #[arg(long)]
    cost: Decimal,

    /// Number of items
    #[arg(long)]
    quantity: u32,

    /// Delivery charge
    #[arg(long, default_value_t = Decimal::ZERO)]
    delivery: Decimal,

    /// Tax percentage (defaults to 8)
    #[arg(long)]
    tax: Option<Decimal>,

    /// Discount percentage
    #[arg(long)]
    discount: Option<Decimal>,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let currency = CurrencyFormat {
        symbol: cli.currency_symbol,
        symbol_spacing: !cli.no_symbol_space,
        ..CurrencyFormat::default()
    };

    match cli.command {
        Some(Command::Quote(args)) => {
            let quote = Quote {
                name: args.name,
                cost_per_item: args.cost,
                quantity: args.quantity,
                delivery_cost: args.delivery,
                tax_percent: args.tax,
                discount_percent: args.discount,
            };
            run_quote(&quote, currency, args.json, io::stdout().lock()).into_diagnostic()?;
        }
        None => {
            let config = SessionConfig {
                max_attempts: cli.max_attempts,
                currency,
            };
            let _stdout =
                run_session(io::stdin().lock(), io::stdout().lock(), &config).into_diagnostic()?;
        }
    }

    Ok(())
}
