use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpad", bin_name = "stockpad", version)]
#[command(about = "File-backed inventory manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the catalog and config (defaults to ./data)
    #[arg(
        short,
        long,
        global = true,
        env = "STOCKPAD_HOME",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Use the per-user data directory instead of ./data
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    #[command(display_order = 1)]
    Menu,

    /// List all products
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Add a product
    #[command(alias = "n", display_order = 3)]
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product category
        #[arg(long, default_value = "")]
        category: String,

        /// Unit price
        #[arg(long, allow_hyphen_values = true)]
        price: String,

        /// Units in stock
        #[arg(long, allow_hyphen_values = true)]
        quantity: String,
    },

    /// Set the stock quantity of a product
    #[command(alias = "u", display_order = 4)]
    Update {
        /// Product id
        id: u32,

        /// New quantity
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Delete a product
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Product id
        id: u32,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Search products by name
    #[command(display_order = 6)]
    Search {
        /// Case-insensitive substring of the product name
        keyword: String,
    },

    /// Sort the catalog by price or quantity
    #[command(display_order = 7)]
    Sort {
        /// "price" or "quantity"
        criterion: String,
    },

    /// List products in a price range (inclusive)
    #[command(display_order = 8)]
    Filter {
        /// Lowest price
        #[arg(allow_negative_numbers = true)]
        min: f64,

        /// Highest price
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Create the data directory
    #[command(display_order = 9)]
    Init,

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (currency, file-name)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
