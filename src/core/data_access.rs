use crate::core::model::{
    BaseFare, BerthKind, Coach, CoachId, FareTable, FareTableId, RouteDistance, StationId, Stop,
    TariffRange, TrainId, Train,
};

/// Everything the pricing core pulls from the surrounding application. The
/// handle is passed by reference into each call; opening and closing the
/// underlying store is the host's business, not the core's.
///
/// Contract: `list_stops` returns a train's route in sequence order with
/// non-decreasing cumulative distances and each station at most once.
/// `replace_route_distances` swaps a train's whole materialized distance set
/// in one atomic step, so readers never observe a half-written train.
pub trait FareData {
    fn get_train(&self, train_id: TrainId) -> Option<Train>;

    fn list_active_trains(&self) -> Vec<TrainId>;

    fn list_stops(&self, train_id: TrainId) -> Vec<Stop>;

    fn get_coach(&self, coach_id: CoachId) -> Option<Coach>;

    fn list_coaches(&self) -> Vec<Coach>;

    fn list_base_fares(&self) -> Vec<BaseFare>;

    fn list_fare_tables(&self) -> Vec<FareTable>;

    fn list_distance_fare_ranges(&self, table_id: FareTableId) -> Vec<TariffRange>;

    fn list_ac_fare_ranges(&self, coach_id: CoachId) -> Vec<TariffRange>;

    fn list_berth_fee_ranges(&self, coach_id: CoachId, berth_kind: BerthKind) -> Vec<TariffRange>;

    fn get_route_distance(&self, train_id: TrainId, from: StationId, to: StationId) -> Option<f64>;

    fn replace_route_distances(&self, train_id: TrainId, distances: Vec<RouteDistance>);
}
