use crate::core::backup::ArchiveFormat;
use crate::export::ExportFormat;
use crate::models::MealSlot;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDietTracker
/// CLI application to follow the 21-day diet plan with SQLite
#[derive(Parser)]
#[command(
    name = "rdiettracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Follow the 21-day soy, egg & chicken diet: weekly menu, meal check-offs, weight and costs",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB).
    /// Relative paths are taken from the current directory.
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show progress: day, meals done, weights and costs
    #[command(alias = "status")]
    Dashboard,

    /// Show the meals of one week of the rotation
    Menu {
        /// Week of the rotation (1-3); defaults to the week of the current day
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=3))]
        week: Option<u8>,
    },

    /// Mark a meal as done, or back to pending
    Toggle {
        /// Week of the rotation (1-3)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        week: u8,

        /// Meal slot
        #[arg(value_enum)]
        slot: MealSlot,
    },

    /// Show or set the initial / current weight (kg)
    Weight {
        #[arg(long = "initial", help = "Initial weight in kg (empty string clears it)")]
        initial: Option<String>,

        #[arg(long = "current", help = "Current weight in kg (empty string clears it)")]
        current: Option<String>,
    },

    /// Show or change the plan day counter
    Day {
        #[arg(
            long = "set",
            conflicts_with = "next",
            help = "Set the current day (1-21)"
        )]
        set: Option<u8>,

        #[arg(long = "next", help = "Move to the next day")]
        next: bool,
    },

    /// Start a new cycle with portions reduced by 30%
    Cycle {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Allowed seasonings, preparation methods and tips
    Tips,

    /// How to repeat the plan with 30% smaller portions
    Reduction,

    /// Estimated costs and shopping lists
    Costs {
        #[arg(long = "shopping", help = "Also print weekly and 21-day shopping lists")]
        shopping: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, value_enum, default_value = "zip", help = "Archive format used with --compress")]
        archive: ArchiveFormat,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export the meal progress
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
