use clap::{Args, Parser, Subcommand};
use price_breakdown::{Fulfillment, PriceBreakdownInput};
use std::path::PathBuf;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "PRICE_BREAKDOWN_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "price-breakdown", version, about = "Order price breakdown")]
pub struct Cli {
    /// Configuration file path (optional; defaults apply when absent)
    #[arg(
        short,
        long,
        env = CONFIG_PATH_ENV,
        default_value = "price-breakdown.toml",
        global = true
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute a breakdown from command-line amounts
    Compute(ComputeArgs),

    /// Compute a breakdown from a JSON input file
    File {
        /// Path to a JSON document with productPrice, shippingCost,
        /// estimatedTax, fee, totalCost and fulfilledBy
        path: PathBuf,

        /// Print the computed breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information (default)
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct ComputeArgs {
    /// Item price
    #[arg(long)]
    pub product_price: f64,

    /// Shipping & handling
    #[arg(long)]
    pub shipping_cost: f64,

    /// Estimated tax
    #[arg(long, default_value = "0")]
    pub estimated_tax: f64,

    /// Fee
    #[arg(long, default_value = "0")]
    pub fee: f64,

    /// Total per recipient
    #[arg(long)]
    pub total_cost: f64,

    /// Who fulfills the order: amazon, dreamship or manual
    #[arg(long)]
    pub fulfilled_by: Fulfillment,

    /// Print the computed breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

impl ComputeArgs {
    pub fn to_input(&self) -> PriceBreakdownInput {
        PriceBreakdownInput {
            product_price: self.product_price,
            shipping_cost: self.shipping_cost,
            estimated_tax: self.estimated_tax,
            fee: self.fee,
            total_cost: self.total_cost,
            fulfilled_by: self.fulfilled_by,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Version if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Version)
    }
}
