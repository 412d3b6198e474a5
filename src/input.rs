pub mod fare_dataset;
pub mod in_memory;
