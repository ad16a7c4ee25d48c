pub mod cli;
pub mod currency;
pub mod report;
