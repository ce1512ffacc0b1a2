pub mod config;
pub mod extract;
pub mod report;
pub mod roster;
