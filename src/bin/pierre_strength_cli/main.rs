// ABOUTME: Pierre Strength CLI - next-session weight recommendations from a JSON training log
// ABOUTME: Recommends single exercises, plans routine days, and reports personal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recommend the next working weight for one routine exercise
//! pierre-strength recommend --log training-log.json --exercise bench
//!
//! # Plan every exercise of the routine day
//! pierre-strength plan --log training-log.json
//!
//! # Personal-record dashboard
//! pierre-strength prs --log training-log.json
//!
//! # Estimated one-rep max for a single set
//! pierre-strength e1rm --weight 100 --reps 8
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pierre_strength::{errors::AppResult, logging::LoggingConfig};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "pierre-strength",
    about = "Pierre Strength Recommendation CLI",
    long_about = "Next-session weight, rep, and set recommendations computed from a JSON training log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend one exercise of the routine
    Recommend {
        /// Training log file (JSON)
        #[arg(long)]
        log: PathBuf,

        /// Exercise id from the routine
        #[arg(long)]
        exercise: String,
    },

    /// Recommend every exercise of the routine
    Plan {
        /// Training log file (JSON)
        #[arg(long)]
        log: PathBuf,
    },

    /// Show the personal-record dashboard
    Prs {
        /// Training log file (JSON)
        #[arg(long)]
        log: PathBuf,
    },

    /// Estimate a one-rep max with the Epley formula
    E1rm {
        /// Weight lifted
        #[arg(long)]
        weight: f64,

        /// Repetitions completed
        #[arg(long)]
        reps: u32,
    },
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Recommend { log, exercise } => commands::recommend::recommend(&log, &exercise),
        Command::Plan { log } => commands::recommend::plan(&log),
        Command::Prs { log } => commands::analysis::prs(&log),
        Command::E1rm { weight, reps } => commands::analysis::e1rm(weight, reps),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;
    info!("Pierre Strength CLI");

    match run(cli.command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!(code = ?e.code, resource = ?e.context.resource_id, "{e}");
            eprintln!("Error: {e}");
            Ok(ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1)))
        }
    }
}
