mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "prt7")]
#[command(about = "PRT-7 - Rotating-substitution line protocol decoder", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a PRT-7 transcript into the hidden message
    Decode {
        /// Input transcript: a file path, a serial device node, or "-" for stdin
        #[arg(short, long)]
        input: String,

        /// Write the decoded message (or JSON events) to this file
        #[arg(short, long)]
        output: Option<String>,

        /// Emit events as JSON lines instead of console text
        #[arg(long)]
        json: bool,

        /// Print only the final message
        #[arg(short, long)]
        quiet: bool,
    },

    /// Classify transcript lines without interpreting them
    Trace {
        /// Input transcript file, or "-" for stdin
        #[arg(short, long)]
        input: String,

        /// Emit per-line records as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Compose a transcript that decodes to a given message
    Compose {
        /// The plaintext message to hide
        #[arg(short, long)]
        message: String,

        /// Output transcript file, or "-" for stdout
        #[arg(short, long)]
        output: String,

        /// Rotation schedule, e.g. "3,-1,5"; cycled over the message
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        schedule: Vec<i32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Decode {
            input,
            output,
            json,
            quiet,
        } => commands::decode::execute(&input, output.as_deref(), json, quiet),

        Commands::Trace { input, json } => commands::trace::execute(&input, json),

        Commands::Compose {
            message,
            output,
            schedule,
        } => commands::compose::execute(&message, &output, &schedule),
    }
}
