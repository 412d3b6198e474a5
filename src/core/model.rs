use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Fare amounts in whole currency units.
pub type Amount = u32;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone, Copy)]
        pub struct $name(pub u32);

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(StationId);
id_type!(TrainId);
id_type!(TrainTypeId);
id_type!(CoachId);
id_type!(FareTableId);

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone, Copy)]
pub struct TravelClass(pub u8);

impl Display for TravelClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.0)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum BerthKind {
    Upper,
    Lower,
    Single,
}

impl BerthKind {
    pub const ALL: [BerthKind; 3] = [BerthKind::Upper, BerthKind::Lower, BerthKind::Single];
}

impl Display for BerthKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BerthKind::Upper => write!(f, "upper"),
            BerthKind::Lower => write!(f, "lower"),
            BerthKind::Single => write!(f, "single"),
        }
    }
}

impl FromStr for BerthKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "upper" => Ok(BerthKind::Upper),
            "lower" => Ok(BerthKind::Lower),
            "single" => Ok(BerthKind::Single),
            other => Err(format!("unknown berth kind '{other}', expected upper, lower or single")),
        }
    }
}

/// A sleeper coach without air conditioning does not exist in the fleet, so
/// it is not representable here either.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum CoachKind {
    Standard,
    AirConditioned,
    SleeperAc,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Coach {
    pub id: CoachId,
    pub travel_class: TravelClass,
    pub kind: CoachKind,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Train {
    pub id: TrainId,
    pub train_type_id: TrainTypeId,
    pub active: bool,
}

/// One entry of a train's route, in sequence order. The distance is
/// cumulative from the route's origin and non-decreasing along the route.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Stop {
    pub station_id: StationId,
    pub distance_from_origin_km: f64,
}

/// A materialized distance fact. Derived data, rebuildable from stops at any
/// time.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct RouteDistance {
    pub train_id: TrainId,
    pub from_station_id: StationId,
    pub to_station_id: StationId,
    pub distance_km: f64,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct BaseFare {
    pub train_type_id: TrainTypeId,
    pub travel_class: TravelClass,
    pub amount: Amount,
}

/// A distance fare table; each travel class has at most one.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct FareTable {
    pub id: FareTableId,
    pub travel_class: TravelClass,
}

/// A raw tariff row as stored by the data access layer, not yet validated
/// against the non-overlap invariant.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct TariffRange {
    pub min_km: f64,
    pub max_km: Option<f64>,
    pub amount: Amount,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct FareRequest {
    pub train_id: TrainId,
    pub from_station_id: StationId,
    pub to_station_id: StationId,
    pub coach_id: CoachId,
    pub berth_kind: Option<BerthKind>,
}

/// The itemized result of a fare calculation. Never persisted, recomputed
/// per request.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct FareBreakdown {
    pub distance_km: f64,
    pub base_fare: Amount,
    pub distance_fare: Amount,
    pub ac_surcharge: Option<Amount>,
    pub berth_fee: Option<Amount>,
    pub total_fare: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_berth_kind_from_str() {
        assert_eq!("upper".parse(), Ok(BerthKind::Upper));
        assert_eq!("Lower".parse(), Ok(BerthKind::Lower));
        assert_eq!("SINGLE".parse(), Ok(BerthKind::Single));
        assert_eq!(
            "side".parse::<BerthKind>(),
            Err("unknown berth kind 'side', expected upper, lower or single".into()),
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TrainId(17)), "17");
        assert_eq!(format!("{}", TravelClass(2)), "class 2");
        assert_eq!(format!("{}", BerthKind::Lower), "lower");
    }
}
