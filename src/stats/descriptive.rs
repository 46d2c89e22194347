use crate::error::{Result, WeatherError};

/// A minimum or maximum value paired with the position where it occurs.
///
/// When the extreme value appears more than once, `index` is the position
/// of its last occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}

/// Arithmetic mean of a sequence of values.
///
/// Fails on an empty sequence rather than returning 0 or NaN.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(WeatherError::EmptySequence { operation: "mean" });
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest value in the sequence and where it last occurs.
///
/// Returns `None` for empty input instead of an error; `mean` is the one
/// statistic that refuses an empty sequence.
pub fn find_min(values: &[f64]) -> Option<Extremum> {
    let mut smallest: Option<Extremum> = None;

    for (index, &value) in values.iter().enumerate() {
        let replace = match smallest {
            // <= keeps scanning forward through ties, so the last one wins
            Some(current) => value <= current.value,
            None => true,
        };
        if replace {
            smallest = Some(Extremum { value, index });
        }
    }

    smallest
}

/// Largest value in the sequence and where it last occurs.
///
/// Returns `None` for empty input instead of an error.
pub fn find_max(values: &[f64]) -> Option<Extremum> {
    let mut largest: Option<Extremum> = None;

    for (index, &value) in values.iter().enumerate() {
        let replace = match largest {
            Some(current) => value >= current.value,
            None => true,
        };
        if replace {
            largest = Some(Extremum { value, index });
        }
    }

    largest
}
