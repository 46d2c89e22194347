pub mod cli;
pub mod convert;
pub mod error;
pub mod models;
pub mod readers;
pub mod reports;
pub mod stats;

pub use error::{Result, WeatherError};
