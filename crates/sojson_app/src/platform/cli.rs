use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sojson_core::{IndentSize, OperationKind};

use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "sojson")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Format, unescape and validate JSON through a SoJSON service", long_about = None)]
#[command(after_help = "Without a command, the interactive shell starts.")]
pub struct Cli {
    /// Service base url (overrides the config file and SOJSON_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Indentation sent with each request: 0, 2, 4 or 8
    #[arg(long, global = true)]
    pub indent: Option<IndentSize>,

    /// RON config file (default: ./sojson.ron when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory receiving downloaded results
    #[arg(long, global = true)]
    pub download_dir: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, global = true, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log everything down to trace level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive shell over a text buffer
    ///
    /// Plain lines are appended to the buffer, `:`-prefixed lines are
    /// commands. See `:help` inside the shell.
    Shell {
        /// Keep the buffer in this file so an editor can work on it
        #[arg(long)]
        file: Option<PathBuf>,

        /// Operation selected at start
        #[arg(long)]
        operation: Option<OperationKind>,
    },

    /// Process input once and print the result
    ///
    /// Reads the file given with --input, or stdin. Exits non-zero when the
    /// service reports an error or the JSON is invalid.
    #[command(after_help = "Examples:\n  sojson run format --indent 4 < data.json\n  sojson run validate --input data.json\n  sojson run unescape --input log.txt --in-place")]
    Run {
        /// process, format, unescape or validate
        operation: OperationKind,

        /// Input file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Write the result back into the input file instead of stdout
        #[arg(long, requires = "input")]
        in_place: bool,
    },
}
