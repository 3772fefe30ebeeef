// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `rsvp` checks reservation requests without saving them.
//!
//! Each subcommand reads one JSON request body from a file (or stdin when
//! the path is `-`), runs it through the same normalization and validation
//! as the save controller, and prints a JSON report to stdout. Logs go to
//! stderr. The exit status is 1 when the request is rejected.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod check;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::Result;
use rsvp_core::UserSession;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::check::{Check, Report, check_request, read_input};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let report: Report = args.run()?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.valid {
        std::process::exit(1);
    }
    Ok(())
}

/// Check reservation requests before they are saved
#[derive(Debug, Parser)]
#[command(name = "rsvp", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Id of the user the request is made as
    #[arg(long, global = true, default_value_t = 1)]
    user_id: i64,

    /// IANA timezone the request's wall-clock times are read in
    #[arg(long, global = true, default_value = "UTC")]
    timezone: String,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn run(self) -> Result<Report> {
        let session: UserSession = UserSession::new(self.user_id, &self.timezone)?;

        match self.command {
            Command::CheckCreate { input } => {
                let body: String = read_input(&input)?;
                check_request(&body, &session, &Check::Create)
            }
            Command::CheckUpdate {
                reference_number,
                scope,
                input,
            } => {
                let body: String = read_input(&input)?;
                let check: Check<'_> = Check::Update {
                    reference_number: reference_number.as_deref(),
                    scope: scope.as_deref(),
                };
                check_request(&body, &session, &check)
            }
        }
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Check a request that creates a reservation or series
    #[command(visible_alias = "c")]
    CheckCreate {
        /// JSON request body, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Check a request that updates an existing reservation or series
    #[command(visible_alias = "u")]
    CheckUpdate {
        /// Reference number of the reservation being updated
        #[arg(long)]
        reference_number: Option<String>,

        /// Occurrences to update: this, future or full (default full)
        #[arg(long)]
        scope: Option<String>,

        /// JSON request body, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}
