use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use train_fare_engine::cli::{
    AddAcFareArgs, AddBerthFeeArgs, AddDistanceFareArgs, CalculateFareArgs, Cli, CliCommand,
    CliTariffCommand, MaterializeDistancesArgs, RangeArgs,
};
use train_fare_engine::core::data_access::FareData;
use train_fare_engine::core::fare::calculate_fare;
use train_fare_engine::core::interval::Interval;
use train_fare_engine::core::model::{CoachId, FareRequest, FareTableId, StationId, TrainId};
use train_fare_engine::core::route_distance::{
    materialize_all, materialize_for_train, MaterializeOptions,
};
use train_fare_engine::core::tariff_store::TariffStore;
use train_fare_engine::input::fare_dataset::{
    AcFareTableRow, BerthFeeTableRow, FareDataset, FareRangeRow, RouteDistanceRow,
};
use train_fare_engine::input::in_memory::InMemoryFareData;

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        CliCommand::CalculateFare(args) => run_calculate_fare(args),
        CliCommand::MaterializeDistances(args) => run_materialize_distances(args),
        CliCommand::Tariff(command) => match command {
            CliTariffCommand::AddDistanceFare(args) => run_add_distance_fare(args),
            CliTariffCommand::AddAcFare(args) => run_add_ac_fare(args),
            CliTariffCommand::AddBerthFee(args) => run_add_berth_fee(args),
        },
    }
}

fn load_dataset<P: AsRef<Path>>(path: P) -> Result<(FareDataset, InMemoryFareData), String> {
    let dataset = FareDataset::from_xml_file(path)
        .map_err(|error| format!("Couldn't read the dataset file: {error}"))?;
    let data = InMemoryFareData::try_from(dataset.clone())
        .map_err(|error| format!("Invalid dataset: {error}"))?;
    Ok((dataset, data))
}

fn write_dataset(dataset: &FareDataset, input: PathBuf, output: Option<PathBuf>) -> Result<(), String> {
    dataset
        .to_xml_file(output.unwrap_or(input))
        .map_err(|error| format!("Couldn't write the dataset file: {error}"))
}

fn run_calculate_fare(args: CalculateFareArgs) -> Result<(), String> {
    let (_, data) = load_dataset(&args.dataset)?;
    let tariffs = TariffStore::load(&data).map_err(|error| format!("Invalid tariff configuration: {error}"))?;

    let request = FareRequest {
        train_id: TrainId(args.train),
        from_station_id: StationId(args.from_station),
        to_station_id: StationId(args.to_station),
        coach_id: CoachId(args.coach),
        berth_kind: args.berth,
    };
    let breakdown = calculate_fare(&data, &tariffs, &request).map_err(|error| format!("{error}"))?;

    println!("Distance: {} km", breakdown.distance_km);
    println!("Base fare: {}", breakdown.base_fare);
    println!("Distance fare: {}", breakdown.distance_fare);
    if let Some(ac_surcharge) = breakdown.ac_surcharge {
        println!("AC surcharge: {ac_surcharge}");
    }
    if let Some(berth_fee) = breakdown.berth_fee {
        println!("Berth fee: {berth_fee}");
    }
    println!("Total fare: {}", breakdown.total_fare);
    Ok(())
}

fn run_materialize_distances(args: MaterializeDistancesArgs) -> Result<(), String> {
    let (mut dataset, data) = load_dataset(&args.dataset)?;

    match args.train {
        Some(train) => {
            let outcome = materialize_for_train(&data, TrainId(train)).map_err(|error| format!("{error}"))?;
            println!("Calculated {} stop pairs, saved {} distances", outcome.calculated, outcome.saved);
        }
        None => {
            let options = MaterializeOptions {
                workers: args.workers,
                deadline: args.timeout_secs.map(Duration::from_secs),
            };
            let report = materialize_all(&data, options);
            println!("Processed {} trains, saved {} distances", report.processed, report.total_distances);
            if report.is_success() {
                println!("Status: success");
            } else {
                println!("Status: completed with errors");
                for failure in &report.errors {
                    println!("  {}", failure.reason);
                }
            }
        }
    }

    dataset.route_distances = data
        .route_distance_rows()
        .into_iter()
        .map(|distance| RouteDistanceRow {
            train_id: distance.train_id,
            from_station_id: distance.from_station_id,
            to_station_id: distance.to_station_id,
            distance_km: distance.distance_km,
        })
        .collect();
    write_dataset(&dataset, args.dataset, args.output)
}

fn fare_range_row(range: &RangeArgs) -> FareRangeRow {
    FareRangeRow { min_km: range.min_km, max_km: range.max_km, amount: range.amount }
}

fn checked_interval(range: &RangeArgs) -> Result<Interval, String> {
    Interval::new(range.min_km, range.max_km).map_err(|error| format!("{error}"))
}

fn run_add_distance_fare(args: AddDistanceFareArgs) -> Result<(), String> {
    let (mut dataset, data) = load_dataset(&args.dataset)?;
    let tariffs = TariffStore::load(&data).map_err(|error| format!("Invalid tariff configuration: {error}"))?;

    let table_id = FareTableId(args.table);
    let Some(table) = dataset.distance_fare_tables.iter_mut().find(|table| table.id == table_id) else {
        return Err(format!("fare table {table_id} does not exist"));
    };

    let id = tariffs
        .add_distance_fare_range(table_id, checked_interval(&args.range)?, args.range.amount)
        .map_err(|error| format!("{error}"))?;
    table.ranges.push(fare_range_row(&args.range));
    write_dataset(&dataset, args.dataset, None)?;

    println!("Added distance fare range {id} to fare table {table_id}");
    Ok(())
}

fn run_add_ac_fare(args: AddAcFareArgs) -> Result<(), String> {
    let (mut dataset, data) = load_dataset(&args.dataset)?;
    let tariffs = TariffStore::load(&data).map_err(|error| format!("Invalid tariff configuration: {error}"))?;

    let coach_id = CoachId(args.coach);
    if data.get_coach(coach_id).is_none() {
        return Err(format!("coach {coach_id} does not exist"));
    }

    let id = tariffs
        .add_ac_fare_range(coach_id, checked_interval(&args.range)?, args.range.amount)
        .map_err(|error| format!("{error}"))?;
    match dataset.ac_fare_tables.iter_mut().find(|table| table.coach_id == coach_id) {
        Some(table) => table.ranges.push(fare_range_row(&args.range)),
        None => dataset
            .ac_fare_tables
            .push(AcFareTableRow { coach_id, ranges: vec![fare_range_row(&args.range)] }),
    }
    write_dataset(&dataset, args.dataset, None)?;

    println!("Added AC fare range {id} to coach {coach_id}");
    Ok(())
}

fn run_add_berth_fee(args: AddBerthFeeArgs) -> Result<(), String> {
    let (mut dataset, data) = load_dataset(&args.dataset)?;
    let tariffs = TariffStore::load(&data).map_err(|error| format!("Invalid tariff configuration: {error}"))?;

    let coach_id = CoachId(args.coach);
    if data.get_coach(coach_id).is_none() {
        return Err(format!("coach {coach_id} does not exist"));
    }

    let id = tariffs
        .add_berth_fee_range(coach_id, args.berth, checked_interval(&args.range)?, args.range.amount)
        .map_err(|error| format!("{error}"))?;
    let existing = dataset
        .berth_fee_tables
        .iter_mut()
        .find(|table| table.coach_id == coach_id && table.berth_kind == args.berth);
    match existing {
        Some(table) => table.ranges.push(fare_range_row(&args.range)),
        None => dataset.berth_fee_tables.push(BerthFeeTableRow {
            coach_id,
            berth_kind: args.berth,
            ranges: vec![fare_range_row(&args.range)],
        }),
    }
    write_dataset(&dataset, args.dataset, None)?;

    println!("Added berth fee range {id} to coach {coach_id} ({} berth)", args.berth);
    Ok(())
}
