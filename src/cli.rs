use crate::core::model::BerthKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand)]
pub enum CliCommand {
    CalculateFare(CalculateFareArgs),
    MaterializeDistances(MaterializeDistancesArgs),

    #[command(subcommand)]
    Tariff(CliTariffCommand),
}

#[derive(Subcommand)]
pub enum CliTariffCommand {
    AddDistanceFare(AddDistanceFareArgs),
    AddAcFare(AddAcFareArgs),
    AddBerthFee(AddBerthFeeArgs),
}

/// Calculate the fare for a journey on a train between two stations
#[derive(Args, Debug)]
pub struct CalculateFareArgs {
    /// Path to fare dataset file
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Id of the train
    #[arg(short, long)]
    pub train: u32,

    /// Id of the boarding station
    #[arg(short, long)]
    pub from_station: u32,

    /// Id of the alighting station
    #[arg(long)]
    pub to_station: u32,

    /// Id of the coach to travel in
    #[arg(short, long)]
    pub coach: u32,

    /// Berth kind for sleeper coaches (upper, lower or single)
    #[arg(short, long)]
    pub berth: Option<BerthKind>,
}

/// Precompute station-to-station distances and store them in the dataset
#[derive(Args, Debug)]
pub struct MaterializeDistancesArgs {
    /// Path to fare dataset file
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Only materialize distances for this train instead of all active trains
    #[arg(short, long)]
    pub train: Option<u32>,

    /// Number of worker threads for the batch run
    #[arg(short, long, default_value_t = 4)]
    pub workers: usize,

    /// Abort the batch run after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Path where to write the updated dataset, defaults to the input path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Add a distance fare range to a fare table
#[derive(Args, Debug)]
pub struct AddDistanceFareArgs {
    /// Path to fare dataset file
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Id of the fare table
    #[arg(long)]
    pub table: u32,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Add an AC surcharge range to a coach
#[derive(Args, Debug)]
pub struct AddAcFareArgs {
    /// Path to fare dataset file
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Id of the coach
    #[arg(short, long)]
    pub coach: u32,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Add a berth fee range to a sleeper coach
#[derive(Args, Debug)]
pub struct AddBerthFeeArgs {
    /// Path to fare dataset file
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Id of the coach
    #[arg(short, long)]
    pub coach: u32,

    /// Berth kind the fee applies to (upper, lower or single)
    #[arg(short, long)]
    pub berth: BerthKind,

    #[command(flatten)]
    pub range: RangeArgs,
}

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Inclusive lower bound of the range in km
    #[arg(long)]
    pub min_km: f64,

    /// Exclusive upper bound of the range in km, omit for an open-ended range
    #[arg(long)]
    pub max_km: Option<f64>,

    /// Amount charged for distances inside the range
    #[arg(short, long)]
    pub amount: u32,
}
