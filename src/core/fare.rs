use crate::core::data_access::FareData;
use crate::core::model::{CoachId, CoachKind, FareBreakdown, FareRequest, StationId, TrainId};
use crate::core::route_distance::{distance_between, DistanceError};
use crate::core::tariff_store::TariffStore;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareComponent {
    BaseFare,
    DistanceFare,
    AcFare,
    BerthFee,
}

impl Display for FareComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FareComponent::BaseFare => write!(f, "base fare"),
            FareComponent::DistanceFare => write!(f, "distance fare"),
            FareComponent::AcFare => write!(f, "AC fare"),
            FareComponent::BerthFee => write!(f, "berth fee"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FareError {
    #[error("boarding and alighting station are identical")]
    IdenticalStations,

    #[error("coach {coach_id} is a sleeper, a berth kind is required")]
    MissingBerthKind { coach_id: CoachId },

    #[error("train {train_id} does not exist")]
    TrainNotFound { train_id: TrainId },

    #[error("coach {coach_id} does not exist")]
    CoachNotFound { coach_id: CoachId },

    #[error("station {station_id} is not on the route of train {train_id}")]
    StopNotOnRoute { train_id: TrainId, station_id: StationId },

    #[error("no {component} is configured for this journey")]
    PricingNotConfigured { component: FareComponent },
}

impl From<DistanceError> for FareError {
    fn from(error: DistanceError) -> Self {
        match error {
            DistanceError::TrainNotFound { train_id } => FareError::TrainNotFound { train_id },
            DistanceError::StopNotOnRoute { train_id, station_id } => {
                FareError::StopNotOnRoute { train_id, station_id }
            }
        }
    }
}

/// Prices one journey. Every step fails fast with the one specific reason;
/// a missing tariff is a configuration gap for the operator to fix, so there
/// are no retries and no partial breakdowns.
pub fn calculate_fare<D: FareData>(
    data: &D,
    tariffs: &TariffStore,
    request: &FareRequest,
) -> Result<FareBreakdown, FareError> {
    if request.from_station_id == request.to_station_id {
        return Err(FareError::IdenticalStations);
    }

    let distance_km = resolve_distance(data, request)?;

    let coach = data
        .get_coach(request.coach_id)
        .ok_or(FareError::CoachNotFound { coach_id: request.coach_id })?;
    let train = data
        .get_train(request.train_id)
        .ok_or(FareError::TrainNotFound { train_id: request.train_id })?;

    let base_fare = tariffs
        .base_fare(train.train_type_id, coach.travel_class)
        .ok_or(FareError::PricingNotConfigured { component: FareComponent::BaseFare })?;
    let distance_fare = tariffs
        .distance_fare(coach.travel_class, distance_km)
        .ok_or(FareError::PricingNotConfigured { component: FareComponent::DistanceFare })?;

    let ac_surcharge = match coach.kind {
        CoachKind::Standard => None,
        CoachKind::AirConditioned | CoachKind::SleeperAc => Some(
            tariffs
                .ac_surcharge(coach.id, distance_km)
                .ok_or(FareError::PricingNotConfigured { component: FareComponent::AcFare })?,
        ),
    };

    // a berth kind supplied for a non-sleeper coach is ignored
    let berth_fee = match coach.kind {
        CoachKind::SleeperAc => {
            let berth_kind = request
                .berth_kind
                .ok_or(FareError::MissingBerthKind { coach_id: coach.id })?;
            Some(
                tariffs
                    .berth_fee(coach.id, berth_kind, distance_km)
                    .ok_or(FareError::PricingNotConfigured { component: FareComponent::BerthFee })?,
            )
        }
        CoachKind::Standard | CoachKind::AirConditioned => None,
    };

    let total_fare = base_fare + distance_fare + ac_surcharge.unwrap_or(0) + berth_fee.unwrap_or(0);

    Ok(FareBreakdown {
        distance_km,
        base_fare,
        distance_fare,
        ac_surcharge,
        berth_fee,
        total_fare,
    })
}

/// The materialized distance is preferred; a cache miss falls back to
/// deriving the distance from the stop list.
fn resolve_distance<D: FareData>(data: &D, request: &FareRequest) -> Result<f64, FareError> {
    match data.get_route_distance(request.train_id, request.from_station_id, request.to_station_id) {
        Some(distance_km) => Ok(distance_km),
        None => Ok(distance_between(data, request.train_id, request.from_station_id, request.to_station_id)?),
    }
}
