use crate::convert::{convert_date, format_temperature, round_to_tenth};
use crate::error::Result;
use crate::models::DailyReading;
use crate::stats::{find_min, mean, Extremum};

/// Returned by `generate_summary` when the table holds no readings.
const NO_DATA_MESSAGE: &str = "No weather data available.\n";

/// Render the multi-day overview report.
///
/// Names the coldest and warmest day of the period together with the
/// average low and high, all in Celsius. An empty table produces a fixed
/// no-data message rather than an error.
pub fn generate_summary(readings: &[DailyReading]) -> Result<String> {
    let lows: Vec<f64> = readings.iter().map(DailyReading::low_celsius).collect();
    let highs: Vec<f64> = readings.iter().map(DailyReading::high_celsius).collect();

    // An absent minimum means there are no readings at all.
    let coldest = match find_min(&lows) {
        Some(extremum) => extremum,
        None => return Ok(String::from(NO_DATA_MESSAGE)),
    };
    let coldest_day = convert_date(&readings[coldest.index].date)?;

    // Direct forward max: ties keep the earliest day here, while the
    // coldest-day lookup above keeps the latest tied day.
    let mut warmest = Extremum {
        value: highs[0],
        index: 0,
    };
    for (index, &value) in highs.iter().enumerate().skip(1) {
        if value > warmest.value {
            warmest = Extremum { value, index };
        }
    }
    let warmest_day = convert_date(&readings[warmest.index].date)?;

    let average_low = round_to_tenth(mean(&lows)?);
    let average_high = round_to_tenth(mean(&highs)?);

    Ok(format!(
        "{} Day Overview\n  \
         The lowest temperature will be {}, and will occur on {}.\n  \
         The highest temperature will be {}, and will occur on {}.\n  \
         The average low this week is {}.\n  \
         The average high this week is {}.\n",
        readings.len(),
        format_temperature(coldest.value),
        coldest_day,
        format_temperature(warmest.value),
        warmest_day,
        format_temperature(average_low),
        format_temperature(average_high),
    ))
}

/// Render the day-by-day breakdown report.
///
/// Emits one block per reading with the display date and the formatted
/// low/high temperatures, blocks separated by blank lines, and the whole
/// report terminated with a newline.
pub fn generate_daily_summary(readings: &[DailyReading]) -> Result<String> {
    let mut blocks = Vec::with_capacity(readings.len());

    for reading in readings {
        let date = convert_date(&reading.date)?;
        let low = format_temperature(reading.low_celsius());
        let high = format_temperature(reading.high_celsius());

        // The closing line of every block holds a single space.
        blocks.push(format!(
            "---- {} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n \n",
            date, low, high
        ));
    }

    let mut report = blocks.join("\n");
    report.push('\n');
    Ok(report)
}
