use crate::core::data_access::FareData;
use crate::core::model::{
    BaseFare, BerthKind, Coach, CoachId, FareTable, FareTableId, RouteDistance, StationId, Stop,
    TariffRange, TrainId, Train, TrainTypeId,
};
use crate::input::fare_dataset::{FareDataset, FareRangeRow};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("train {train_id} is defined more than once")]
    DuplicateTrain { train_id: TrainId },

    #[error("coach {coach_id} is defined more than once")]
    DuplicateCoach { coach_id: CoachId },

    #[error("train {train_id} references unknown train type {train_type_id}")]
    UnknownTrainType { train_id: TrainId, train_type_id: TrainTypeId },

    #[error("train {train_id} stops at unknown station {station_id}")]
    UnknownStation { train_id: TrainId, station_id: StationId },

    #[error("train {train_id} stops at station {station_id} more than once")]
    DuplicateStop { train_id: TrainId, station_id: StationId },

    #[error("train {train_id}: distance from origin decreases at station {station_id}")]
    NonMonotonicRoute { train_id: TrainId, station_id: StationId },

    #[error("a tariff table references unknown coach {coach_id}")]
    UnknownCoach { coach_id: CoachId },
}

/// In-memory [`FareData`] implementation backed by a validated fare dataset
/// document. Route distances live behind a mutex in a per-train map, so the
/// batch job's per-train replace swaps a whole train at once.
#[derive(Debug)]
pub struct InMemoryFareData {
    trains: HashMap<TrainId, Train>,
    stops: HashMap<TrainId, Vec<Stop>>,
    coaches: HashMap<CoachId, Coach>,
    base_fares: Vec<BaseFare>,
    fare_tables: Vec<FareTable>,
    distance_fare_ranges: HashMap<FareTableId, Vec<TariffRange>>,
    ac_fare_ranges: HashMap<CoachId, Vec<TariffRange>>,
    berth_fee_ranges: HashMap<(CoachId, BerthKind), Vec<TariffRange>>,
    route_distances: Mutex<HashMap<TrainId, HashMap<(StationId, StationId), f64>>>,
}

fn tariff_ranges(rows: &[FareRangeRow]) -> Vec<TariffRange> {
    rows.iter()
        .map(|row| TariffRange { min_km: row.min_km, max_km: row.max_km, amount: row.amount })
        .collect()
}

impl TryFrom<FareDataset> for InMemoryFareData {
    type Error = DatasetError;

    fn try_from(dataset: FareDataset) -> Result<Self, DatasetError> {
        let station_ids: HashSet<StationId> = dataset.stations.iter().map(|station| station.id).collect();
        let train_type_ids: HashSet<TrainTypeId> =
            dataset.train_types.iter().map(|train_type| train_type.id).collect();

        let mut trains = HashMap::new();
        let mut stops = HashMap::new();
        for train in &dataset.trains {
            if !train_type_ids.contains(&train.train_type_id) {
                return Err(DatasetError::UnknownTrainType {
                    train_id: train.id,
                    train_type_id: train.train_type_id,
                });
            }
            let entry = Train { id: train.id, train_type_id: train.train_type_id, active: train.active };
            if trains.insert(train.id, entry).is_some() {
                return Err(DatasetError::DuplicateTrain { train_id: train.id });
            }

            let mut route = Vec::with_capacity(train.stops.len());
            let mut visited = HashSet::new();
            let mut previous_km = 0.0;
            for stop in &train.stops {
                if !station_ids.contains(&stop.station_id) {
                    return Err(DatasetError::UnknownStation { train_id: train.id, station_id: stop.station_id });
                }
                if !visited.insert(stop.station_id) {
                    return Err(DatasetError::DuplicateStop { train_id: train.id, station_id: stop.station_id });
                }
                if stop.distance_from_origin_km < previous_km {
                    return Err(DatasetError::NonMonotonicRoute { train_id: train.id, station_id: stop.station_id });
                }
                previous_km = stop.distance_from_origin_km;
                route.push(Stop {
                    station_id: stop.station_id,
                    distance_from_origin_km: stop.distance_from_origin_km,
                });
            }
            stops.insert(train.id, route);
        }

        let mut coaches = HashMap::new();
        for coach in &dataset.coaches {
            let entry = Coach { id: coach.id, travel_class: coach.travel_class, kind: coach.kind };
            if coaches.insert(coach.id, entry).is_some() {
                return Err(DatasetError::DuplicateCoach { coach_id: coach.id });
            }
        }

        let base_fares = dataset
            .base_fares
            .iter()
            .map(|row| BaseFare {
                train_type_id: row.train_type_id,
                travel_class: row.travel_class,
                amount: row.amount,
            })
            .collect();

        let fare_tables = dataset
            .distance_fare_tables
            .iter()
            .map(|table| FareTable { id: table.id, travel_class: table.travel_class })
            .collect();
        let mut distance_fare_ranges: HashMap<FareTableId, Vec<TariffRange>> = HashMap::new();
        for table in &dataset.distance_fare_tables {
            distance_fare_ranges.entry(table.id).or_default().extend(tariff_ranges(&table.ranges));
        }

        let mut ac_fare_ranges: HashMap<CoachId, Vec<TariffRange>> = HashMap::new();
        for table in &dataset.ac_fare_tables {
            if !coaches.contains_key(&table.coach_id) {
                return Err(DatasetError::UnknownCoach { coach_id: table.coach_id });
            }
            ac_fare_ranges.entry(table.coach_id).or_default().extend(tariff_ranges(&table.ranges));
        }

        let mut berth_fee_ranges: HashMap<(CoachId, BerthKind), Vec<TariffRange>> = HashMap::new();
        for table in &dataset.berth_fee_tables {
            if !coaches.contains_key(&table.coach_id) {
                return Err(DatasetError::UnknownCoach { coach_id: table.coach_id });
            }
            berth_fee_ranges
                .entry((table.coach_id, table.berth_kind))
                .or_default()
                .extend(tariff_ranges(&table.ranges));
        }

        let mut route_distances: HashMap<TrainId, HashMap<(StationId, StationId), f64>> = HashMap::new();
        for row in &dataset.route_distances {
            route_distances
                .entry(row.train_id)
                .or_default()
                .insert((row.from_station_id, row.to_station_id), row.distance_km);
        }

        Ok(InMemoryFareData {
            trains,
            stops,
            coaches,
            base_fares,
            fare_tables,
            distance_fare_ranges,
            ac_fare_ranges,
            berth_fee_ranges,
            route_distances: Mutex::new(route_distances),
        })
    }
}

impl InMemoryFareData {
    /// All materialized distances in a stable order, for writing back into a
    /// dataset document.
    pub fn route_distance_rows(&self) -> Vec<RouteDistance> {
        let guard = self.route_distances.lock().unwrap();
        let mut rows = Vec::new();
        for (train_id, distances) in guard.iter() {
            for ((from, to), distance_km) in distances {
                rows.push(RouteDistance {
                    train_id: *train_id,
                    from_station_id: *from,
                    to_station_id: *to,
                    distance_km: *distance_km,
                });
            }
        }
        rows.sort_by(|a, b| {
            (a.train_id, a.from_station_id, a.to_station_id)
                .cmp(&(b.train_id, b.from_station_id, b.to_station_id))
        });
        rows
    }
}

impl FareData for InMemoryFareData {
    fn get_train(&self, train_id: TrainId) -> Option<Train> {
        self.trains.get(&train_id).copied()
    }

    fn list_active_trains(&self) -> Vec<TrainId> {
        let mut train_ids: Vec<TrainId> =
            self.trains.values().filter(|train| train.active).map(|train| train.id).collect();
        train_ids.sort();
        train_ids
    }

    fn list_stops(&self, train_id: TrainId) -> Vec<Stop> {
        self.stops.get(&train_id).cloned().unwrap_or_default()
    }

    fn get_coach(&self, coach_id: CoachId) -> Option<Coach> {
        self.coaches.get(&coach_id).copied()
    }

    fn list_coaches(&self) -> Vec<Coach> {
        let mut coaches: Vec<Coach> = self.coaches.values().copied().collect();
        coaches.sort_by_key(|coach| coach.id);
        coaches
    }

    fn list_base_fares(&self) -> Vec<BaseFare> {
        self.base_fares.clone()
    }

    fn list_fare_tables(&self) -> Vec<FareTable> {
        self.fare_tables.clone()
    }

    fn list_distance_fare_ranges(&self, table_id: FareTableId) -> Vec<TariffRange> {
        self.distance_fare_ranges.get(&table_id).cloned().unwrap_or_default()
    }

    fn list_ac_fare_ranges(&self, coach_id: CoachId) -> Vec<TariffRange> {
        self.ac_fare_ranges.get(&coach_id).cloned().unwrap_or_default()
    }

    fn list_berth_fee_ranges(&self, coach_id: CoachId, berth_kind: BerthKind) -> Vec<TariffRange> {
        self.berth_fee_ranges.get(&(coach_id, berth_kind)).cloned().unwrap_or_default()
    }

    fn get_route_distance(&self, train_id: TrainId, from: StationId, to: StationId) -> Option<f64> {
        self.route_distances.lock().unwrap().get(&train_id)?.get(&(from, to)).copied()
    }

    fn replace_route_distances(&self, train_id: TrainId, distances: Vec<RouteDistance>) {
        let mut replacement = HashMap::with_capacity(distances.len());
        for distance in distances {
            replacement.insert((distance.from_station_id, distance.to_station_id), distance.distance_km);
        }
        // one insert under one lock, so readers see the old set or the new one
        self.route_distances.lock().unwrap().insert(train_id, replacement);
    }
}
