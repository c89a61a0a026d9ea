// ABOUTME: Plateful CLI - developer tool for exercising the nutrition engine from a shell
// ABOUTME: Unit lookup, validation, conversion, recalculation, goal and progress calculation as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful
//!
//! Usage:
//! ```bash
//! # Units offered for a food
//! plateful-cli units "Apple"
//!
//! # Check a unit before offering it
//! plateful-cli validate "Orange Juice" slice
//!
//! # Convert 2 medium apples to grams
//! plateful-cli convert 2 medium g --food Apple
//!
//! # Rescale nutrition from 1 medium to 2 medium
//! plateful-cli recalc --food Apple --base-quantity 1 --base-unit medium \
//!     --quantity 2 --unit medium \
//!     --nutrition '{"calories":95,"proteins":0.5,"carbs":25,"fats":0.3}'
//!
//! # Daily goals for a profile
//! plateful-cli goals --weight 70 --height 175 --age 30 --gender male --activity moderate
//!
//! # Progress for a day's records against a profile's goals
//! plateful-cli progress --records '[{"calories":95,"proteins":0.5,"carbs":25,"fats":0.3}]' \
//!     --weight 70 --height 175 --age 30 --gender male --activity moderate
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use plateful::logging::LoggingConfig;
use plateful::models::{ActivityLevel, Gender, UserProfile, WeightGoal};
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "plateful-cli",
    about = "Plateful nutrition engine CLI",
    long_about = "Developer tool for the Plateful nutrition engine: unit tables, conversions, nutrition recalculation and goal calculation. Results are printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging (stderr)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the inferred category and unit table for a food
    Units {
        /// Food name (empty for a generic food)
        #[arg(default_value = "")]
        food: String,
    },

    /// Check whether a unit applies to a food
    Validate {
        /// Food name
        food: String,
        /// Unit to check
        unit: String,
    },

    /// Convert a quantity between units for a food
    Convert {
        /// Quantity in the source unit
        quantity: f64,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
        /// Food name
        #[arg(long, default_value = "")]
        food: String,
        /// Grams in one serving, overriding the table
        #[arg(long)]
        grams_override: Option<f64>,
    },

    /// Rescale a nutrition record to a new serving
    Recalc {
        /// Nutrition record as JSON, reported at the base serving
        #[arg(long)]
        nutrition: String,
        /// Base serving quantity
        #[arg(long)]
        base_quantity: f64,
        /// Base serving unit
        #[arg(long)]
        base_unit: String,
        /// New serving quantity
        #[arg(long)]
        quantity: f64,
        /// New serving unit
        #[arg(long)]
        unit: String,
        /// Food name
        #[arg(long, default_value = "")]
        food: String,
        /// Grams in one serving, overriding the table
        #[arg(long)]
        grams_override: Option<f64>,
        /// Round values for display
        #[arg(long)]
        round: bool,
    },

    /// Calculate daily nutrition goals from profile attributes
    Goals {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the fixed fallback goals instead
        #[arg(long)]
        default: bool,
    },

    /// Sum a day's records and compare them with the profile's goals
    Progress {
        /// JSON array of already-scaled nutrition records
        #[arg(long)]
        records: String,

        #[command(flatten)]
        profile: ProfileArgs,
    },
}

/// Profile attributes accepted by goal-related commands
#[derive(Args)]
struct ProfileArgs {
    /// User id attached to log events
    #[arg(long)]
    user_id: Option<Uuid>,
    /// Body weight (kg)
    #[arg(long)]
    weight: Option<f64>,
    /// Height (cm)
    #[arg(long)]
    height: Option<f64>,
    /// Age (years)
    #[arg(long)]
    age: Option<u32>,
    /// Date of birth (YYYY-MM-DD), used when --age is absent
    #[arg(long)]
    date_of_birth: Option<NaiveDate>,
    /// male, female or other
    #[arg(long)]
    gender: Option<Gender>,
    /// sedentary, light, moderate, active or very_active
    #[arg(long)]
    activity: Option<ActivityLevel>,
    /// Weight goal (lose_1 .. gain_0_5, legacy names accepted)
    #[arg(long)]
    goal: Option<WeightGoal>,
    /// Custom daily calorie target
    #[arg(long)]
    target: Option<u32>,
}

impl From<ProfileArgs> for UserProfile {
    fn from(args: ProfileArgs) -> Self {
        Self {
            user_id: args.user_id,
            weight_kg: args.weight,
            height_cm: args.height,
            age: args.age,
            date_of_birth: args.date_of_birth,
            gender: args.gender,
            activity_level: args.activity,
            weight_goal: args.goal,
            daily_calorie_target: args.target,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;
    debug!("Plateful CLI starting");

    let output = match cli.command {
        Command::Units { food } => commands::units::units(&food)?,
        Command::Validate { food, unit } => commands::units::validate(&food, &unit),
        Command::Convert {
            quantity,
            from,
            to,
            food,
            grams_override,
        } => commands::units::convert(quantity, &from, &to, &food, grams_override)?,
        Command::Recalc {
            nutrition,
            base_quantity,
            base_unit,
            quantity,
            unit,
            food,
            grams_override,
            round,
        } => commands::nutrition::recalc(
            &nutrition,
            commands::nutrition::Servings {
                base_quantity,
                base_unit,
                quantity,
                unit,
            },
            &food,
            grams_override,
            round,
        )?,
        Command::Goals { profile, default } => commands::goals::goals(&profile.into(), default)?,
        Command::Progress { records, profile } => {
            commands::goals::progress(&records, &profile.into())?
        }
    };

    helpers::display::print_json(&output, cli.pretty)?;
    Ok(())
}
