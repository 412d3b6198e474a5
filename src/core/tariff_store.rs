use crate::core::data_access::FareData;
use crate::core::interval::{Interval, InvalidInterval};
use crate::core::interval_set::{IntervalSet, RangeId, RangeOverlap};
use crate::core::model::{Amount, BerthKind, CoachId, FareTableId, TrainTypeId, TravelClass};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TableScope(FareTableId);

impl Display for TableScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "fare table {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AcScope(CoachId);

impl Display for AcScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "coach {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BerthScope {
    coach_id: CoachId,
    berth_kind: BerthKind,
}

impl Display for BerthScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "coach {} ({} berth)", self.coach_id, self.berth_kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TariffStoreError {
    #[error("more than one base fare for train type {train_type_id}, {travel_class}")]
    DuplicateBaseFare {
        train_type_id: TrainTypeId,
        travel_class: TravelClass,
    },

    #[error("{travel_class} has more than one distance fare table")]
    DuplicateFareTable { travel_class: TravelClass },

    #[error("invalid range in {scope}: {error}")]
    InvalidRange { scope: String, error: InvalidInterval },

    #[error(transparent)]
    Overlap(#[from] RangeOverlap),
}

/// All tariff data of the system: flat base fares plus three range sets,
/// one per tariff flavor. Lookups are pure; every mutation goes through the
/// interval sets, whose mutex makes the overlap check and the insert atomic
/// with respect to concurrent inserts.
#[derive(Debug)]
pub struct TariffStore {
    base_fares: HashMap<(TrainTypeId, TravelClass), Amount>,
    fare_tables: HashMap<TravelClass, FareTableId>,
    distance_fares: Mutex<IntervalSet<TableScope, Amount>>,
    ac_fares: Mutex<IntervalSet<AcScope, Amount>>,
    berth_fees: Mutex<IntervalSet<BerthScope, Amount>>,
}

impl TariffStore {
    /// Builds the store from the data access layer. Every persisted range is
    /// replayed through [`IntervalSet::insert`], so configuration that
    /// violates the non-overlap invariant is rejected here instead of
    /// producing ambiguous lookups later.
    pub fn load<D: FareData>(data: &D) -> Result<Self, TariffStoreError> {
        let mut base_fares = HashMap::new();
        for base_fare in data.list_base_fares() {
            let key = (base_fare.train_type_id, base_fare.travel_class);
            if base_fares.insert(key, base_fare.amount).is_some() {
                return Err(TariffStoreError::DuplicateBaseFare {
                    train_type_id: base_fare.train_type_id,
                    travel_class: base_fare.travel_class,
                });
            }
        }

        let mut fare_tables = HashMap::new();
        let mut distance_fares = IntervalSet::new();
        for table in data.list_fare_tables() {
            if fare_tables.insert(table.travel_class, table.id).is_some() {
                return Err(TariffStoreError::DuplicateFareTable { travel_class: table.travel_class });
            }
            for row in data.list_distance_fare_ranges(table.id) {
                let scope = TableScope(table.id);
                let interval = interval_for(scope, row.min_km, row.max_km)?;
                distance_fares.insert(scope, interval, row.amount)?;
            }
        }

        let mut ac_fares = IntervalSet::new();
        let mut berth_fees = IntervalSet::new();
        for coach in data.list_coaches() {
            for row in data.list_ac_fare_ranges(coach.id) {
                let scope = AcScope(coach.id);
                let interval = interval_for(scope, row.min_km, row.max_km)?;
                ac_fares.insert(scope, interval, row.amount)?;
            }
            for berth_kind in BerthKind::ALL {
                for row in data.list_berth_fee_ranges(coach.id, berth_kind) {
                    let scope = BerthScope { coach_id: coach.id, berth_kind };
                    let interval = interval_for(scope, row.min_km, row.max_km)?;
                    berth_fees.insert(scope, interval, row.amount)?;
                }
            }
        }

        Ok(TariffStore {
            base_fares,
            fare_tables,
            distance_fares: Mutex::new(distance_fares),
            ac_fares: Mutex::new(ac_fares),
            berth_fees: Mutex::new(berth_fees),
        })
    }

    pub fn base_fare(&self, train_type_id: TrainTypeId, travel_class: TravelClass) -> Option<Amount> {
        self.base_fares.get(&(train_type_id, travel_class)).copied()
    }

    pub fn fare_table(&self, travel_class: TravelClass) -> Option<FareTableId> {
        self.fare_tables.get(&travel_class).copied()
    }

    pub fn distance_fare(&self, travel_class: TravelClass, distance_km: f64) -> Option<Amount> {
        let table_id = self.fare_table(travel_class)?;
        self.distance_fares
            .lock()
            .unwrap()
            .lookup(TableScope(table_id), distance_km)
            .map(|range| range.value)
    }

    pub fn ac_surcharge(&self, coach_id: CoachId, distance_km: f64) -> Option<Amount> {
        self.ac_fares
            .lock()
            .unwrap()
            .lookup(AcScope(coach_id), distance_km)
            .map(|range| range.value)
    }

    pub fn berth_fee(&self, coach_id: CoachId, berth_kind: BerthKind, distance_km: f64) -> Option<Amount> {
        self.berth_fees
            .lock()
            .unwrap()
            .lookup(BerthScope { coach_id, berth_kind }, distance_km)
            .map(|range| range.value)
    }

    pub fn add_distance_fare_range(
        &self,
        table_id: FareTableId,
        interval: Interval,
        amount: Amount,
    ) -> Result<RangeId, RangeOverlap> {
        self.distance_fares.lock().unwrap().insert(TableScope(table_id), interval, amount)
    }

    pub fn remove_distance_fare_range(&self, table_id: FareTableId, id: RangeId) -> bool {
        self.distance_fares.lock().unwrap().remove(TableScope(table_id), id)
    }

    pub fn add_ac_fare_range(
        &self,
        coach_id: CoachId,
        interval: Interval,
        amount: Amount,
    ) -> Result<RangeId, RangeOverlap> {
        self.ac_fares.lock().unwrap().insert(AcScope(coach_id), interval, amount)
    }

    pub fn remove_ac_fare_range(&self, coach_id: CoachId, id: RangeId) -> bool {
        self.ac_fares.lock().unwrap().remove(AcScope(coach_id), id)
    }

    pub fn add_berth_fee_range(
        &self,
        coach_id: CoachId,
        berth_kind: BerthKind,
        interval: Interval,
        amount: Amount,
    ) -> Result<RangeId, RangeOverlap> {
        self.berth_fees.lock().unwrap().insert(BerthScope { coach_id, berth_kind }, interval, amount)
    }

    pub fn remove_berth_fee_range(&self, coach_id: CoachId, berth_kind: BerthKind, id: RangeId) -> bool {
        self.berth_fees.lock().unwrap().remove(BerthScope { coach_id, berth_kind }, id)
    }
}

fn interval_for<S: Display>(scope: S, min_km: f64, max_km: Option<f64>) -> Result<Interval, TariffStoreError> {
    Interval::new(min_km, max_km).map_err(|error| TariffStoreError::InvalidRange {
        scope: scope.to_string(),
        error,
    })
}
