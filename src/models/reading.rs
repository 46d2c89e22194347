use crate::convert::fahrenheit_to_celsius;

/// One day of observations as loaded from the input file.
///
/// The date stays in its source ISO-8601 form; it is only turned into a
/// display string when a report is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReading {
    pub date: String,
    pub low_fahrenheit: i32,
    pub high_fahrenheit: i32,
}

/// Ordered sequence of readings for one reporting period, in file order.
pub type WeatherTable = Vec<DailyReading>;

impl DailyReading {
    pub fn new(date: String, low_fahrenheit: i32, high_fahrenheit: i32) -> Self {
        Self {
            date,
            low_fahrenheit,
            high_fahrenheit,
        }
    }

    /// Overnight low in Celsius, rounded to one decimal place.
    pub fn low_celsius(&self) -> f64 {
        fahrenheit_to_celsius(f64::from(self.low_fahrenheit))
    }

    /// Daytime high in Celsius, rounded to one decimal place.
    pub fn high_celsius(&self) -> f64 {
        fahrenheit_to_celsius(f64::from(self.high_fahrenheit))
    }
}
