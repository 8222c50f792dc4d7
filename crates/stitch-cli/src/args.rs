use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};
use stitch_core::params::{ScenarioQuery, ScheduleSpec};

/// Main command-line interface for the Stitch delivery scheduler
///
/// Stitch plans delivery schedules for made-to-order plush toy runs. An
/// order moves through sample confirmation, optional revision rounds, and
/// production, and Stitch enumerates every way those stages can be combined
/// so a delivery date can be checked against an event deadline. It provides
/// a command-line interface for one-shot scheduling queries and an MCP
/// (Model Context Protocol) server mode for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "stitch")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stitch CLI
///
/// - `scenarios`: enumerate delivery scenarios for an order date
/// - `schedule`: project the delivery schedule for one chosen plan
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// List delivery scenarios for an order date
    #[command(alias = "ls")]
    Scenarios(ScenariosArgs),
    /// Project the delivery schedule for a scenario or a manual stage mix
    #[command(alias = "s")]
    Schedule(ScheduleArgs),
    /// Start the MCP server
    Serve,
}

/// List delivery scenarios
///
/// Without an order date the list is empty and a hint is printed instead;
/// completion dates can only be projected from a known starting point. The
/// speed filter narrows the listing to one production speed while keeping
/// the scenario numbering of the full list.
#[derive(clap::Args)]
pub struct ScenariosArgs {
    /// Order date in YYYY-MM-DD format
    #[arg(long)]
    pub order_date: Option<String>,

    /// Only list scenarios using this production speed
    #[arg(long)]
    pub speed: Option<SpeedArg>,
}

impl From<ScenariosArgs> for ScenarioQuery {
    fn from(val: ScenariosArgs) -> Self {
        ScenarioQuery {
            order_date: val.order_date,
            speed: val.speed.map(|speed| speed.to_string()),
        }
    }
}

/// Project a delivery schedule
///
/// Either pick a scenario by id (as printed by `scenarios`) or compose the
/// stages by hand with `--initial-sample`, repeated `--revision` flags, and
/// `--production-speed`. The two styles are mutually exclusive; with
/// neither, the recommended scenario is scheduled.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Order date in YYYY-MM-DD format
    #[arg(long)]
    pub order_date: String,

    /// Event date the delivery must arrive before, in YYYY-MM-DD format
    #[arg(long)]
    pub event_date: Option<String>,

    /// Scenario id to schedule, e.g. photo-1-physical-normal
    #[arg(
        long,
        conflicts_with_all = ["initial_sample", "revision", "production_speed"]
    )]
    pub scenario: Option<String>,

    /// Confirmation method for the initial sample stage
    #[arg(long)]
    pub initial_sample: Option<MethodArg>,

    /// Confirmation method for one revision round; repeat for more rounds
    #[arg(long)]
    pub revision: Vec<MethodArg>,

    /// Production speed
    #[arg(long)]
    pub production_speed: Option<SpeedArg>,
}

impl From<ScheduleArgs> for ScheduleSpec {
    fn from(val: ScheduleArgs) -> Self {
        ScheduleSpec {
            order_date: val.order_date,
            event_date: val.event_date,
            scenario_id: val.scenario,
            initial_sample: val.initial_sample.map(|method| method.to_string()),
            revisions: val
                .revision
                .into_iter()
                .map(|method| method.to_string())
                .collect(),
            production_speed: val.production_speed.map(|speed| speed.to_string()),
        }
    }
}

/// Sample confirmation method accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MethodArg {
    /// Confirm from photos of the sample
    Photo,
    /// Ship the physical sample for confirmation
    Physical,
}

impl fmt::Display for MethodArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodArg::Photo => write!(f, "photo"),
            MethodArg::Physical => write!(f, "physical"),
        }
    }
}

/// Production speed accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SpeedArg {
    /// Standard production run
    Normal,
    /// Rush production at a premium
    Express,
}

impl fmt::Display for SpeedArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedArg::Normal => write!(f, "normal"),
            SpeedArg::Express => write!(f, "express"),
        }
    }
}
