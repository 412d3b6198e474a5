pub mod cli;
pub mod core;
pub mod input;
pub mod test_utils;
pub mod xml;
