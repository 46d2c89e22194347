/// Convert a Fahrenheit reading to Celsius, rounded to one decimal place.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    round_to_tenth((fahrenheit - 32.0) * 5.0 / 9.0)
}

/// Round a value to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render a Celsius value for display, e.g. `36.5°C`.
///
/// Values are shown with exactly one decimal digit; report temperatures are
/// already rounded to one decimal place, so no precision is lost here.
pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}°C", celsius)
}
