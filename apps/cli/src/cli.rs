use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "sitefolio",
    version,
    about = "Financial reports for websites, expenses and investments",
    long_about = "Reads a JSON snapshot of websites, categories, monthly entries, \
                  expenses, investments and assets, and prints dashboard, \
                  portfolio, cashflow or investment reports as JSON."
)]
pub struct Cli {
    /// Path to the snapshot JSON file
    pub snapshot: PathBuf,

    /// User whose rows are read (defaults to SITEFOLIO_USER_ID)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Reporting year (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// First month of the period (1-12)
    #[arg(long, default_value_t = 1)]
    pub start_month: u32,

    /// Last month of the period (1-12)
    #[arg(long, default_value_t = 12)]
    pub end_month: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Totals, monthly trend, per-website P&L and category charts
    Dashboard,
    /// Drill-down of a single website
    Website {
        /// Website ID
        id: String,
    },
    /// Asset valuation, income and allocation in BDT
    Portfolio,
    /// Personal income and expense ledger summary
    Cashflow,
    /// Dividend yield per investment
    Investments,
}
