use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for SampleTrack
#[derive(Parser)]
#[command(
    name = "sampletrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Passive mercury sampling-kit tracking: grid API server and admin tools",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.sampletrack/sampletrack.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory holding the databases
    #[arg(global = true, long = "server", value_name = "DIR")]
    pub server: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and both databases
    Init,

    /// Run the HTTP API for the grid client
    Serve {
        #[arg(long = "listen", help = "Address to bind, e.g. 0.0.0.0:8080")]
        listen: Option<String>,
    },

    /// Dump the whole pas_tracking table to CSV
    Export {
        #[arg(
            long,
            value_name = "PATH",
            help = "Output file or directory (default: timestamped file in the working directory)"
        )]
        file: Option<PathBuf>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// List sample rows, optionally the way the Update dialog finds them
    List {
        #[arg(long, value_name = "EC-####", conflicts_with_all = ["sampler", "location"])]
        kit: Option<String>,

        #[arg(
            long,
            value_name = "ECCC####",
            help = "Rows of the most recent kit holding this sampler",
            conflicts_with = "location"
        )]
        sampler: Option<String>,

        #[arg(long, help = "Rows shipped to this location (case-insensitive)")]
        location: Option<String>,
    },

    /// Show or add reference sites of the configured project
    Sites {
        #[arg(long = "add", value_name = "SITEID", requires = "description")]
        add: Option<String>,

        #[arg(long = "description", help = "Site description (used with --add)")]
        description: Option<String>,
    },

    /// Inspect the resolved configuration
    Config {
        #[arg(long = "print", help = "Print the resolved configuration (passwords masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing values")]
        check: bool,
    },

    /// Manage the databases (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "dump", value_name = "TABLE", help = "Print a whole table as JSON")]
        dump: Option<String>,

        #[arg(long = "reference", help = "Use the reference database for --dump")]
        reference: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
