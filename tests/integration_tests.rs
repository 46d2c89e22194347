use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use weather_report::readers::ReadingsReader;
use weather_report::reports::{generate_daily_summary, generate_summary};
use weather_report::WeatherError;

fn write_fixture(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("readings.csv");
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[test]
fn test_summary_report_from_csv_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(
        &temp_dir,
        "date,min,max\n\
         2021-07-02T07:00:00+08:00,49,67\n\
         2021-07-03T07:00:00+08:00,57,68\n\
         2021-07-04T07:00:00+08:00,56,62\n\
         2021-07-05T07:00:00+08:00,55,61\n\
         2021-07-06T07:00:00+08:00,53,62\n",
    );

    let table = ReadingsReader::new().read_table(&path).unwrap();
    let report = generate_summary(&table).unwrap();

    let expected = concat!(
        "5 Day Overview\n",
        "  The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.\n",
        "  The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.\n",
        "  The average low this week is 12.2°C.\n",
        "  The average high this week is 17.8°C.\n",
    );
    assert_eq!(report, expected);
}

#[test]
fn test_daily_report_from_csv_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(
        &temp_dir,
        "date,min,max\n\
         2021-07-02T07:00:00+08:00,49,67\n\
         2021-07-03T07:00:00+08:00,57,68\n",
    );

    let table = ReadingsReader::new().read_table(&path).unwrap();
    let report = generate_daily_summary(&table).unwrap();

    let expected = concat!(
        "---- Friday 02 July 2021 ----\n",
        "  Minimum Temperature: 9.4°C\n",
        "  Maximum Temperature: 19.4°C\n",
        " \n",
        "\n",
        "---- Saturday 03 July 2021 ----\n",
        "  Minimum Temperature: 13.9°C\n",
        "  Maximum Temperature: 20.0°C\n",
        " \n",
        "\n",
    );
    assert_eq!(report, expected);
}

#[test]
fn test_reports_accept_zulu_timestamps() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(
        &temp_dir,
        "date,min,max\n\
         2021-07-02T07:00:00Z,49,67\n\
         2021-07-03T07:00:00Z,57,68\n",
    );

    let table = ReadingsReader::new().read_table(&path).unwrap();
    let report = generate_daily_summary(&table).unwrap();

    assert!(report.contains("---- Friday 02 July 2021 ----"));
    assert!(report.contains("---- Saturday 03 July 2021 ----"));
}

#[test]
fn test_summary_of_header_only_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(&temp_dir, "date,min,max\n");

    let table = ReadingsReader::new().read_table(&path).unwrap();

    assert!(table.is_empty());
    assert_eq!(
        generate_summary(&table).unwrap(),
        "No weather data available.\n"
    );
    assert_eq!(generate_daily_summary(&table).unwrap(), "\n");
}

#[test]
fn test_headerless_file_with_reader_option() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(&temp_dir, "2021-07-05T07:00:00+08:00,55,61\n");

    let table = ReadingsReader::with_header(false)
        .read_table(&path)
        .unwrap();
    let report = generate_daily_summary(&table).unwrap();

    let expected = concat!(
        "---- Monday 05 July 2021 ----\n",
        "  Minimum Temperature: 12.8°C\n",
        "  Maximum Temperature: 16.1°C\n",
        " \n",
        "\n",
    );
    assert_eq!(report, expected);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = ReadingsReader::new().read_table(PathBuf::from("no-such-file.csv").as_path());

    assert!(matches!(result, Err(WeatherError::Io(_))));
}

#[test]
fn test_non_numeric_temperature_is_a_format_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(
        &temp_dir,
        "date,min,max\n\
         2021-07-02T07:00:00+08:00,cold,67\n",
    );

    let result = ReadingsReader::new().read_table(&path);

    assert!(matches!(result, Err(WeatherError::InvalidFormat(_))));
}
