// ABOUTME: RogerBox CLI - command-line access to goal suggestions, the catalog and local state
// ABOUTME: Runs the engine offline and can persist onboarding into the local state directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox
//!
//! Usage:
//! ```bash
//! # Suggest a goal for a profile
//! rogerbox-cli suggest --height 170 --weight 90 --gender female
//!
//! # Suggest with goals, print JSON and save the onboarding locally
//! rogerbox-cli suggest --height 180 --weight 75 --goal gain_muscle --json --save
//!
//! # List courses and check recommendation coverage
//! rogerbox-cli catalog list
//! rogerbox-cli catalog verify
//!
//! # Progress of a course bought on a given day
//! rogerbox-cli progress --purchased-on 2025-06-01 --lessons 36 --completed 10
//!
//! # Inspect or wipe the saved state
//! rogerbox-cli state show
//! rogerbox-cli state reset
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rogerbox::logging::LoggingConfig;
use rogerbox::models::{Gender, GoalTag};
use rogerbox::store::FileKeyValueStore;
use rogerbox_intelligence::DeadlinePolicy;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "rogerbox-cli",
    about = "RogerBox command-line tool",
    long_about = "Goal suggestions, course catalog checks, progress math and local state for RogerBox."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// State directory override (defaults to ROGERBOX_STATE_DIR or the platform data dir)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Suggest a goal and a course for a profile
    Suggest {
        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Name used in the motivation text
        #[arg(long, default_value = "Estudiante")]
        name: String,

        /// Gender (male, female, other)
        #[arg(long, default_value = "other")]
        gender: Gender,

        /// Goal tag; repeat for several (lose_weight, tone, gain_muscle, endurance, flexibility, strength)
        #[arg(long = "goal")]
        goals: Vec<GoalTag>,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,

        /// How the deadline is derived (legacy_phrases, week_count)
        #[arg(long, default_value = "legacy_phrases")]
        deadline_policy: DeadlinePolicy,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Save the profile and suggestion as a completed onboarding
        #[arg(long)]
        save: bool,
    },

    /// Course catalog commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Progress summary for one purchased course
    Progress {
        /// Purchase date (YYYY-MM-DD)
        #[arg(long)]
        purchased_on: NaiveDate,

        /// Lessons in the course
        #[arg(long)]
        lessons: u32,

        /// Lessons already completed
        #[arg(long, default_value = "0")]
        completed: u32,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Saved state commands
    State {
        #[command(subcommand)]
        action: StateCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// List every course with price and length
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check that every course the engine recommends is in the catalog
    Verify,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum StateCommand {
    /// Print the saved state as JSON
    Show,

    /// Delete the saved state
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("RogerBox CLI");

    let today_or_now = |today: Option<NaiveDate>| today.unwrap_or_else(helpers::local_today);
    let storage = || FileKeyValueStore::new(helpers::resolve_state_dir(cli.state_dir.clone()));

    match cli.command {
        Command::Suggest {
            height,
            weight,
            name,
            gender,
            goals,
            today,
            deadline_policy,
            json,
            save,
        } => {
            let args = commands::suggest::SuggestArgs {
                name,
                height,
                weight,
                gender,
                goals,
                today: today_or_now(today),
                deadline_policy,
                json,
            };
            let storage = save.then(storage);
            commands::suggest::run(args, storage).await?;
        }
        Command::Catalog { action } => match action {
            CatalogCommand::List { json } => commands::catalog::list(json)?,
            CatalogCommand::Verify => commands::catalog::verify()?,
        },
        Command::Progress {
            purchased_on,
            lessons,
            completed,
            today,
        } => {
            commands::progress::run(purchased_on, lessons, completed, today_or_now(today))?;
        }
        Command::State { action } => match action {
            StateCommand::Show => commands::state::show(storage()).await?,
            StateCommand::Reset => commands::state::reset(storage()).await?,
        },
    }

    Ok(())
}
