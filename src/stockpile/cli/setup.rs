use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockpile::theme::ThemeMode;
use stockpile::view::{SortDir, SortKey};

#[derive(Parser, Debug)]
#[command(
    name = "stockpile",
    bin_name = "stockpile",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A small, persistent inventory list editor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Price,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Price => SortKey::Price,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirArg {
    Asc,
    Desc,
}

impl From<DirArg> for SortDir {
    fn from(arg: DirArg) -> Self {
        match arg {
            DirArg::Asc => SortDir::Asc,
            DirArg::Desc => SortDir::Desc,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Toggle,
    Dark,
    Light,
}

impl ThemeArg {
    /// The explicit mode requested, `None` for toggle.
    pub fn mode(self) -> Option<ThemeMode> {
        match self {
            ThemeArg::Toggle => None,
            ThemeArg::Dark => Some(ThemeMode::Dark),
            ThemeArg::Light => Some(ThemeMode::Light),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products in the current view (default)
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Case-insensitive search over name and category
        #[arg(short, long)]
        search: Option<String>,

        /// Show only this category ("all" clears the filter)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort column
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Sort direction
        #[arg(long, value_enum)]
        dir: Option<DirArg>,
    },

    /// Add a product
    #[command(alias = "new", display_order = 2)]
    Add {
        name: String,
        category: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Edit one field of a product
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Row number in the current view, or an id prefix
        row: String,

        /// name, category, price or quantity
        field: String,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Delete products (rows or id prefixes)
    #[command(alias = "rm", display_order = 4)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        rows: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Sort by a column; repeating the active column flips the direction
    #[command(display_order = 10)]
    Sort {
        #[arg(value_enum)]
        key: SortArg,
    },

    /// Clear search, category filter and sort order
    #[command(display_order = 11)]
    Clear,

    /// Show inventory totals
    #[command(display_order = 12)]
    Stats,

    /// List the category choices
    #[command(display_order = 13)]
    Categories,

    /// Export the inventory as JSON
    #[command(display_order = 20)]
    Export {
        /// Output file (defaults to the export_file config value)
        #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Replace the inventory with products from a JSON file
    #[command(display_order = 21)]
    Import {
        path: PathBuf,

        /// Reject the whole file if any row is invalid
        #[arg(long)]
        strict: bool,
    },

    /// Restore the sample inventory
    #[command(display_order = 22)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show or change the color theme
    #[command(display_order = 30)]
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeArg>,
    },

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (e.g., import_policy)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
