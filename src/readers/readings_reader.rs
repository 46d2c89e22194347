use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Result, WeatherError};
use crate::models::{DailyReading, WeatherTable};

/// Fields expected in every data row: date, low, high.
const FIELDS_PER_ROW: usize = 3;

/// Reads daily temperature readings from a CSV file.
pub struct ReadingsReader {
    has_header: bool,
}

impl ReadingsReader {
    pub fn new() -> Self {
        Self { has_header: true }
    }

    pub fn with_header(has_header: bool) -> Self {
        Self { has_header }
    }

    /// Read every data row of a readings file into a weather table.
    ///
    /// The header row is discarded regardless of its content, fields are
    /// trimmed of surrounding whitespace, and blank lines are skipped. Rows
    /// are returned in file order.
    pub fn read_table(&self, path: &Path) -> Result<WeatherTable> {
        let file = File::open(path)?;
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(self.has_header)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        let mut table = WeatherTable::new();
        for record in csv_reader.records() {
            table.push(Self::parse_record(&record?)?);
        }

        debug!(rows = table.len(), path = %path.display(), "loaded weather table");
        Ok(table)
    }

    /// Parse a single data row into a reading.
    fn parse_record(record: &StringRecord) -> Result<DailyReading> {
        if record.len() != FIELDS_PER_ROW {
            return Err(WeatherError::InvalidFormat(format!(
                "Expected {} fields per row, found {}",
                FIELDS_PER_ROW,
                record.len()
            )));
        }

        let date = record[0].to_string();
        let low_fahrenheit = Self::parse_temperature(&record[1])?;
        let high_fahrenheit = Self::parse_temperature(&record[2])?;

        Ok(DailyReading::new(date, low_fahrenheit, high_fahrenheit))
    }

    fn parse_temperature(field: &str) -> Result<i32> {
        field.parse::<i32>().map_err(|_| {
            WeatherError::InvalidFormat(format!("Invalid temperature reading: '{}'", field))
        })
    }
}

impl Default for ReadingsReader {
    fn default() -> Self {
        Self::new()
    }
}
