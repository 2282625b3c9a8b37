//! CLI command definitions.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Validate payload files
    Validate {
        /// JSON files holding a payload, an array of payloads or a list envelope
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Check against this object type instead of each payload's own `object`
        #[arg(short, long)]
        object: Option<String>,

        /// With --object, check against the deleted stub
        #[arg(long, requires = "object")]
        deleted: bool,

        /// Treat unknown-field warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Print the JSON Schema of an object type
    Schema {
        /// Object literal, e.g. `customer` or `checkout.session`
        object: String,

        /// Schema of the deleted stub
        #[arg(long)]
        deleted: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write the JSON Schema of every object type
    Export {
        /// Target directory (defaults to the configured schema_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// List known object types
    Objects {
        /// Render as a markdown table
        #[arg(long)]
        markdown: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Key
        key: String,

        /// Value
        value: String,
    },
}
