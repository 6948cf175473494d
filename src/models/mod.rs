pub mod geo;
pub mod risk;
pub mod schedule;
