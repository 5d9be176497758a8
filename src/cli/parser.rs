use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for sitecrew
/// CLI dashboard for contractor crews, attendance and payments
#[derive(Parser, Debug)]
#[command(
    name = "sitecrew",
    version = env!("CARGO_PKG_VERSION"),
    about = "A site dashboard: track contractor crews, daily attendance and payments",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-site setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Evaluate the dashboard as of this date (YYYY-MM-DD) instead of today
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    /// Select a contractor before running the command
    #[arg(global = true, long = "contractor", value_name = "ID")]
    pub contractor: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Run in test mode (predictable ids for new records)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show totals, risk flags and suggested actions for the selection
    Dashboard {
        /// Also print leave/standby counts and crew ids
        #[arg(long)]
        details: bool,
    },

    /// List the crew of the selected contractor (all workers if none)
    Crew,

    /// List contractors with budget and remaining days
    Contractors,

    /// List, log or correct attendance records
    Attendance {
        /// Log a new attendance record (requires --worker)
        #[arg(long, requires = "worker")]
        add: bool,

        /// Worker id
        #[arg(long)]
        worker: Option<String>,

        /// Hours worked (default 8)
        #[arg(long, allow_negative_numbers = true)]
        hours: Option<f64>,

        /// Presence: present, absent, leave, standby (default present)
        #[arg(long)]
        presence: Option<String>,

        /// Site name (default: configured site)
        #[arg(long)]
        site: Option<String>,

        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text remarks
        #[arg(long)]
        remarks: Option<String>,

        /// Correct the presence of an existing record
        #[arg(
            long = "set-presence",
            num_args = 2,
            value_names = ["ID", "PRESENCE"],
            conflicts_with = "add"
        )]
        set_presence: Option<Vec<String>>,
    },

    /// List or record payments
    Payments {
        /// Record a new payment (requires --worker, --amount, --category)
        #[arg(long, requires_all = ["worker", "amount", "category"])]
        add: bool,

        /// Worker id
        #[arg(long)]
        worker: Option<String>,

        /// Amount
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,

        /// Category: advance, material, bonus, deduction
        #[arg(long)]
        category: Option<String>,

        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Add a worker or change a worker's status
    Worker {
        /// Add a new worker (requires --name, --trade, --rate, --assign-to)
        #[arg(long, requires_all = ["name", "trade", "rate", "assign_to"])]
        add: bool,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        trade: Option<String>,

        /// Daily rate
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,

        /// Contractor the worker belongs to
        #[arg(long = "assign-to", value_name = "CONTRACTOR")]
        assign_to: Option<String>,

        /// Initial status for --add (default present)
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Change the status of an existing worker
        #[arg(
            long = "set-status",
            num_args = 2,
            value_names = ["ID", "STATUS"],
            conflicts_with = "add"
        )]
        set_status: Option<Vec<String>>,
    },

    /// Print the coordination brief for the selection
    Brief,

    /// Interactive session: read commands from stdin, one per line
    Session {
        /// Do not print the refreshed summary after each change
        #[arg(long)]
        quiet: bool,
    },

    /// Print the internal log of this run
    Log {
        /// Print the entries of the internal log
        #[arg(long = "print", help = "Print the internal log")]
        print: bool,
    },

    /// Export crew, attendance, payments or the dashboard
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// What to export (scoped to the selected contractor)
        #[arg(long, value_enum, default_value = "dashboard")]
        what: ExportTarget,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
