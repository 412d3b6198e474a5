use crate::core::model::{
    Amount, BerthKind, CoachId, CoachKind, FareTableId, StationId, TrainId, TrainTypeId, TravelClass,
};
use crate::xml::{from_xml_file, to_xml_file, ReadXMLFileError, WriteXMLFileError};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

/// The fare dataset document: the whole world the engine prices against,
/// including materialized route distances written back by the batch job.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(deny_unknown_fields, rename = "FareDataset")]
pub struct FareDataset {
    #[serde(rename = "Station", default, skip_serializing_if = "Vec::is_empty")]
    pub stations: Vec<StationRow>,

    #[serde(rename = "TrainType", default, skip_serializing_if = "Vec::is_empty")]
    pub train_types: Vec<TrainTypeRow>,

    #[serde(rename = "Train", default, skip_serializing_if = "Vec::is_empty")]
    pub trains: Vec<TrainRow>,

    #[serde(rename = "Coach", default, skip_serializing_if = "Vec::is_empty")]
    pub coaches: Vec<CoachRow>,

    #[serde(rename = "BaseFare", default, skip_serializing_if = "Vec::is_empty")]
    pub base_fares: Vec<BaseFareRow>,

    #[serde(rename = "DistanceFareTable", default, skip_serializing_if = "Vec::is_empty")]
    pub distance_fare_tables: Vec<DistanceFareTableRow>,

    #[serde(rename = "AcFareTable", default, skip_serializing_if = "Vec::is_empty")]
    pub ac_fare_tables: Vec<AcFareTableRow>,

    #[serde(rename = "BerthFeeTable", default, skip_serializing_if = "Vec::is_empty")]
    pub berth_fee_tables: Vec<BerthFeeTableRow>,

    #[serde(rename = "RouteDistance", default, skip_serializing_if = "Vec::is_empty")]
    pub route_distances: Vec<RouteDistanceRow>,
}

impl FareDataset {
    pub fn from_xml_file<P: AsRef<Path>>(path: P) -> Result<Self, ReadXMLFileError> {
        from_xml_file(path)
    }

    pub fn to_xml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteXMLFileError> {
        to_xml_file(self, path)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct StationRow {
    #[serde(rename = "@id")]
    pub id: StationId,

    #[serde(rename = "@name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct TrainTypeRow {
    #[serde(rename = "@id")]
    pub id: TrainTypeId,

    #[serde(rename = "@name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct TrainRow {
    #[serde(rename = "@id")]
    pub id: TrainId,

    #[serde(rename = "@trainTypeId")]
    pub train_type_id: TrainTypeId,

    #[serde(rename = "@name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(rename = "@active", default = "default_true")]
    pub active: bool,

    /// Route of the train, in sequence order.
    #[serde(rename = "Stop", default, skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<StopRow>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct StopRow {
    #[serde(rename = "@stationId")]
    pub station_id: StationId,

    #[serde(rename = "@distanceFromOriginKm")]
    pub distance_from_origin_km: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CoachRow {
    #[serde(rename = "@id")]
    pub id: CoachId,

    #[serde(rename = "@travelClass")]
    pub travel_class: TravelClass,

    #[serde(rename = "@kind")]
    pub kind: CoachKind,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BaseFareRow {
    #[serde(rename = "@trainTypeId")]
    pub train_type_id: TrainTypeId,

    #[serde(rename = "@travelClass")]
    pub travel_class: TravelClass,

    #[serde(rename = "@amount")]
    pub amount: Amount,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct DistanceFareTableRow {
    #[serde(rename = "@id")]
    pub id: FareTableId,

    #[serde(rename = "@travelClass")]
    pub travel_class: TravelClass,

    #[serde(rename = "Range", default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<FareRangeRow>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct AcFareTableRow {
    #[serde(rename = "@coachId")]
    pub coach_id: CoachId,

    #[serde(rename = "Range", default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<FareRangeRow>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BerthFeeTableRow {
    #[serde(rename = "@coachId")]
    pub coach_id: CoachId,

    #[serde(rename = "@berthKind")]
    pub berth_kind: BerthKind,

    #[serde(rename = "Range", default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<FareRangeRow>,
}

/// A tariff tier. `maxKm` is exclusive; leaving it out makes the range open
/// upwards.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FareRangeRow {
    #[serde(rename = "@minKm")]
    pub min_km: f64,

    #[serde(rename = "@maxKm", default, skip_serializing_if = "Option::is_none")]
    pub max_km: Option<f64>,

    #[serde(rename = "@amount")]
    pub amount: Amount,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RouteDistanceRow {
    #[serde(rename = "@trainId")]
    pub train_id: TrainId,

    #[serde(rename = "@fromStationId")]
    pub from_station_id: StationId,

    #[serde(rename = "@toStationId")]
    pub to_station_id: StationId,

    #[serde(rename = "@distanceKm")]
    pub distance_km: f64,
}
