pub mod config;
pub mod goal;
pub mod schedule;
pub mod stats;
pub mod timer;
pub mod usage;
