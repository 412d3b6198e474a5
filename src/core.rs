pub mod data_access;
pub mod fare;
pub mod interval;
pub mod interval_set;
pub mod model;
pub mod route_distance;
pub mod tariff_store;
