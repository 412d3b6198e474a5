use crate::core::data_access::FareData;
use crate::core::model::{RouteDistance, StationId, Stop, TrainId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistanceError {
    #[error("train {train_id} does not exist")]
    TrainNotFound { train_id: TrainId },

    #[error("station {station_id} is not on the route of train {train_id}")]
    StopNotOnRoute { train_id: TrainId, station_id: StationId },
}

/// Distance travelled between two stops of a train's route, derived from the
/// cumulative distances of the ordered stop list. Direction does not matter.
pub fn distance_between<D: FareData>(
    data: &D,
    train_id: TrainId,
    from: StationId,
    to: StationId,
) -> Result<f64, DistanceError> {
    if data.get_train(train_id).is_none() {
        return Err(DistanceError::TrainNotFound { train_id });
    }
    let stops = data.list_stops(train_id);
    let from_km = cumulative_km(&stops, train_id, from)?;
    let to_km = cumulative_km(&stops, train_id, to)?;
    Ok((to_km - from_km).abs())
}

fn cumulative_km(stops: &[Stop], train_id: TrainId, station_id: StationId) -> Result<f64, DistanceError> {
    stops
        .iter()
        .find(|stop| stop.station_id == station_id)
        .map(|stop| stop.distance_from_origin_km)
        .ok_or(DistanceError::StopNotOnRoute { train_id, station_id })
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterializeTrainError {
    #[error("train {train_id} does not exist")]
    TrainNotFound { train_id: TrainId },

    #[error("train {train_id} has {stop_count} stops, at least 2 are needed")]
    InsufficientStops { train_id: TrainId, stop_count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeOutcome {
    /// Unordered stop pairs the distance was computed for.
    pub calculated: usize,
    /// Distance records written, both orderings of every pair.
    pub saved: usize,
}

/// Computes the distance for every stop pair of the train and swaps the
/// train's materialized distance set in one atomic replace.
pub fn materialize_for_train<D: FareData>(
    data: &D,
    train_id: TrainId,
) -> Result<MaterializeOutcome, MaterializeTrainError> {
    if data.get_train(train_id).is_none() {
        return Err(MaterializeTrainError::TrainNotFound { train_id });
    }
    let stops = data.list_stops(train_id);
    if stops.len() < 2 {
        return Err(MaterializeTrainError::InsufficientStops { train_id, stop_count: stops.len() });
    }

    let mut calculated = 0;
    let mut distances = Vec::with_capacity(stops.len() * (stops.len() - 1));
    for (index, from) in stops.iter().enumerate() {
        for to in &stops[index + 1..] {
            let distance_km = (to.distance_from_origin_km - from.distance_from_origin_km).abs();
            calculated += 1;
            distances.push(RouteDistance {
                train_id,
                from_station_id: from.station_id,
                to_station_id: to.station_id,
                distance_km,
            });
            distances.push(RouteDistance {
                train_id,
                from_station_id: to.station_id,
                to_station_id: from.station_id,
                distance_km,
            });
        }
    }

    let saved = distances.len();
    data.replace_route_distances(train_id, distances);
    Ok(MaterializeOutcome { calculated, saved })
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainFailure {
    pub train_id: TrainId,
    pub reason: MaterializeTrainError,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterializeReport {
    /// Trains the batch attempted, whatever their outcome.
    pub processed: usize,
    /// Distance records written across all successful trains.
    pub total_distances: usize,
    pub errors: Vec<TrainFailure>,
}

impl MaterializeReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterializeOptions {
    pub workers: usize,
    /// Overall budget for the batch. Trains not yet started when it runs out
    /// are left alone; finished trains keep their results.
    pub deadline: Option<Duration>,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        MaterializeOptions { workers: 4, deadline: None }
    }
}

/// Materializes distances for every active train. One train failing is that
/// train's problem: its error is collected and the batch carries on. Trains
/// are fanned out over a bounded worker pool and every worker's results are
/// funneled through a channel into a single accumulator.
pub fn materialize_all<D: FareData + Sync>(data: &D, options: MaterializeOptions) -> MaterializeReport {
    let train_ids = data.list_active_trains();
    let started = Instant::now();
    let cursor = AtomicUsize::new(0);
    let workers = options.workers.clamp(1, train_ids.len().max(1));
    let (sender, receiver) = mpsc::channel();

    thread::scope(|scope| {
        for _ in 0..workers {
            let sender = sender.clone();
            let cursor = &cursor;
            let train_ids = &train_ids;
            scope.spawn(move || loop {
                if let Some(deadline) = options.deadline {
                    if started.elapsed() >= deadline {
                        break;
                    }
                }
                let Some(&train_id) = train_ids.get(cursor.fetch_add(1, Ordering::Relaxed)) else {
                    break;
                };
                if sender.send((train_id, materialize_for_train(data, train_id))).is_err() {
                    break;
                }
            });
        }
    });
    drop(sender);

    let mut report = MaterializeReport::default();
    for (train_id, outcome) in receiver {
        report.processed += 1;
        match outcome {
            Ok(outcome) => report.total_distances += outcome.saved,
            Err(reason) => report.errors.push(TrainFailure { train_id, reason }),
        }
    }
    report.errors.sort_by_key(|failure| failure.train_id);
    report
}
