pub mod date;
pub mod temperature;

pub use date::convert_date;
pub use temperature::{fahrenheit_to_celsius, format_temperature, round_to_tenth};
