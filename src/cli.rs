//! Command-line interface for strictly_guessing.

use clap::{Parser, Subcommand};

/// Strictly Guessing - find the secret number in seven tries
#[derive(Parser, Debug)]
#[command(name = "strictly_guessing")]
#[command(about = "Number guessing game with terminal and HTTP front ends", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Run the HTTP game server
    Http {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
