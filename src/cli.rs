//! Command line: `serve` runs the HTTP server, `init-db` resets the schema.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quill", version, about = "A small blog with session login")]
pub struct Cli {
    /// Instance folder holding config.toml and the database.
    #[arg(long, global = true, env = "QUILL_INSTANCE_PATH", default_value = "instance")]
    pub instance: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the blog over HTTP.
    Serve {
        /// Listen address; overrides the `bind` setting.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Clear the existing data and create new tables.
    #[command(name = "init-db")]
    InitDb,
}
