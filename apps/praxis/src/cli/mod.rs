//! # Praxis CLI Module
//!
//! This module implements the CLI interface for Praxis.
//!
//! ## Available Commands
//!
//! - `serve` - Start the HTTP server
//! - `doctors` - List doctors filtered by speciality
//! - `doctor` - Look up a single doctor by id
//! - `calc` - Fold operator tokens over two operands
//! - `closest-color` - Match a color against the reference palette

mod commands;

use clap::{Parser, Subcommand};
use praxis_core::{DirectoryStore, PraxisError};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Praxis - Directory Query Server
///
/// A typed query layer over small in-memory datasets: doctor
/// filtering and lookup, chained arithmetic, nearest-color matching.
#[derive(Parser, Debug)]
#[command(name = "praxis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Serve {
        /// Host to bind to (overrides the config file)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List doctors filtered by speciality
    Doctors {
        /// Comma-separated speciality filter (PSYCHOLOGIST,OPHTHALMOLOGIST)
        #[arg(short, long)]
        specialities: Option<String>,

        /// Include the derived address field
        #[arg(short, long)]
        addresses: bool,
    },

    /// Look up a single doctor by id
    Doctor {
        /// Doctor identifier
        #[arg(short, long)]
        id: String,

        /// Include the derived address field
        #[arg(short, long)]
        address: bool,
    },

    /// Fold a sequence of operator tokens over two operands
    Calc {
        /// Starting value (the accumulator)
        #[arg(short, long)]
        a: f64,

        /// Fixed right operand applied at every step
        #[arg(short, long)]
        b: f64,

        /// Comma-separated tokens (ADD,SUBTRACT,MULTIPLY,DIVIDE);
        /// unknown tokens fold as no-ops
        #[arg(short, long)]
        operations: String,
    },

    /// Match a color against the reference palette
    ClosestColor {
        /// Color in #RRGGBB form
        #[arg(long)]
        hex: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PraxisError> {
    let store = DirectoryStore::with_defaults();
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Serve { host, port, config }) => {
            cmd_serve(store, host, port, config.as_deref()).await
        }
        Some(Commands::Doctors {
            specialities,
            addresses,
        }) => cmd_doctors(&store, json_mode, specialities.as_deref(), addresses),
        Some(Commands::Doctor { id, address }) => cmd_doctor(&store, json_mode, &id, address),
        Some(Commands::Calc { a, b, operations }) => cmd_calc(json_mode, a, b, &operations),
        Some(Commands::ClosestColor { hex }) => cmd_color(&store, json_mode, &hex),
        None => {
            // No subcommand - print the whole directory by default
            cmd_doctors(
                &store,
                json_mode,
                Some("PSYCHOLOGIST,OPHTHALMOLOGIST"),
                false,
            )
        }
    }
}
