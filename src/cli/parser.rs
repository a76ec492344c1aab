use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal punch clock: punch in/out, track earnings and see your month at a glance",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a second profile)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file is written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty data file
    Init,

    /// Punch in when idle, punch out when a session is open
    Punch,

    /// Show whether a session is open, the time worked and the money earned so far
    Status {
        #[arg(
            long = "until",
            value_name = "HH:MM",
            help = "Project earnings if the session ends at this local time"
        )]
        until: Option<String>,
    },

    /// Show a month calendar with worked days highlighted
    Calendar {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(
            long,
            allow_hyphen_values = true,
            default_value_t = 0,
            help = "Move the shown month by N months (e.g. -1 for the previous month)"
        )]
        offset: i32,
    },

    /// List recorded sessions, newest first
    History {
        #[arg(long, short, value_name = "YYYY-MM", help = "Only sessions of this month")]
        month: Option<String>,
    },

    /// Show the sessions recorded on a given date
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Show or change the hourly rates used for the next punch-in
    Rates {
        #[arg(long, help = "Gross hourly rate")]
        gross: Option<f64>,

        #[arg(long, help = "Net hourly rate")]
        net: Option<f64>,
    },

    /// Export the history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_name = "YYYY-MM", help = "Only export this month")]
        month: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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
}
