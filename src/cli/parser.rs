use crate::config::Language;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for geotimelog
/// CLI application to turn location history into a monthly presence log
#[derive(Parser)]
#[command(
    name = "geotimelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn location history into a monthly presence log with work durations and calendar notes",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests or several workplaces)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Geofence and clustering overrides shared by `report` and `intervals`.
#[derive(Args, Debug, Clone, Default)]
pub struct FenceArgs {
    /// Latitude of the reference location (decimal degrees)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the reference location (decimal degrees)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Geofence radius in meters
    #[arg(long)]
    pub radius: Option<f64>,

    /// Minimum presence length in minutes (fractions allowed, e.g. 0.5)
    #[arg(long = "min-cluster")]
    pub min_cluster: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Add missing fields with default values and report unknown ones"
        )]
        check: bool,

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

    /// Convert a location-history export (Records.json) into the points CSV
    Convert {
        /// Location-history JSON file (default: `location_history` from config)
        #[arg(long, value_name = "FILE")]
        input: Option<String>,

        /// Points CSV to write (default: `points_csv` from config)
        #[arg(long, value_name = "FILE")]
        output: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Build the presence log for one month and write it as a table
    Report {
        /// Month to analyse (YYYY-MM). Defaults to the current month.
        #[arg(long, short = 'p', value_name = "YYYY-MM")]
        period: Option<String>,

        /// Points file: `.json` location history or points CSV (default: `points_csv` from config)
        #[arg(long, value_name = "FILE")]
        points: Option<String>,

        /// Calendar file (.ics) (default: `calendar_file` from config)
        #[arg(long, value_name = "FILE", conflicts_with = "no_calendar")]
        calendar: Option<String>,

        /// Build the log without calendar notes
        #[arg(long = "no-calendar")]
        no_calendar: bool,

        /// Output file (default: <output_dir>/work_hours_<YEAR>_<MONTH>.<format>)
        #[arg(long, value_name = "FILE")]
        output: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Hours added to entry and exit before formatting
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Language of the column labels
        #[arg(long, value_enum)]
        language: Option<Language>,

        #[command(flatten)]
        fence: FenceArgs,

        /// Also print the table to the terminal
        #[arg(long)]
        print: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the raw presence intervals detected for one month
    Intervals {
        /// Month to analyse (YYYY-MM). Defaults to the current month.
        #[arg(long, short = 'p', value_name = "YYYY-MM")]
        period: Option<String>,

        /// Points file: `.json` location history or points CSV
        #[arg(long, value_name = "FILE")]
        points: Option<String>,

        #[command(flatten)]
        fence: FenceArgs,
    },
}
