pub mod reading;

pub use reading::{DailyReading, WeatherTable};
