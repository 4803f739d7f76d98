use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeClock
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A single-device time clock: staff clock in/out, owners review hours and wages",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current moment is "YYYY-MM-DD HH:MM"
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Clock an employee in
    In {
        /// Employee id or name
        employee: String,
    },

    /// Clock an employee out of the open shift
    Out {
        /// Employee id or name
        employee: String,
    },

    /// PIN pad: clock out if working, clock in otherwise
    Punch {
        pin: String,
    },

    /// Correct the times of a time entry
    Edit {
        /// Time entry id
        entry: String,

        #[arg(long = "in", help = "New clock-in time (HH:MM)")]
        clock_in: Option<String>,

        #[arg(
            long = "out",
            conflicts_with = "reopen",
            help = "New clock-out time (HH:MM)"
        )]
        clock_out: Option<String>,

        #[arg(long = "reopen", help = "Clear the clock-out, marking the shift in progress")]
        reopen: bool,
    },

    /// Show today's status of every employee
    Today,

    /// List time entries in a range
    List {
        #[arg(
            long,
            short,
            help = "week, month, last-month, YYYY-MM, YYYY-MM-DD or FROM:TO"
        )]
        range: Option<String>,

        #[arg(long = "employee", short = 'e', help = "Only entries of this employee")]
        employee: Option<String>,
    },

    /// Hours and wages per employee over a range
    Summary {
        #[arg(
            long,
            short,
            help = "week, month, last-month, YYYY-MM, YYYY-MM-DD or FROM:TO"
        )]
        range: Option<String>,
    },

    /// Print a shareable wage report
    Report {
        #[arg(
            long,
            short,
            help = "week, month, last-month, YYYY-MM, YYYY-MM-DD or FROM:TO"
        )]
        range: Option<String>,
    },

    /// Export wages (or raw entries) to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "week, month, last-month, YYYY-MM, YYYY-MM-DD or FROM:TO"
        )]
        range: Option<String>,

        #[arg(long = "entries", help = "Export time entries instead of the wage summary")]
        entries: bool,

        #[arg(long, short = 'f', help = "Overwrite the file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee
    Add {
        name: String,

        /// Hourly wage rate
        rate: String,

        #[arg(long = "pin", help = "Numeric PIN for the PIN pad (4-6 digits)")]
        pin: Option<String>,
    },

    /// Change name, rate or PIN of an employee
    Edit {
        /// Employee id or name
        employee: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "rate")]
        rate: Option<String>,

        #[arg(long = "pin", conflicts_with = "clear_pin")]
        pin: Option<String>,

        #[arg(long = "clear-pin", help = "Remove the PIN")]
        clear_pin: bool,
    },

    /// Delete an employee and all of their time entries
    Del {
        /// Employee id or name
        employee: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List employees
    List,
}
