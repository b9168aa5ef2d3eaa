//! Parsers for the two configuration fields. Both run on every input event.

use crate::config::RECOMMENDED_MAX_PRIZES;
use crate::error::WinRateError;

/// One prize per non-blank line, trimmed, order and duplicates kept.
pub fn parse_prizes(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn parse_win_rate(text: &str) -> Result<f64, WinRateError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| WinRateError::NotANumber(trimmed.to_owned()))?;
    // "inf" and "NaN" parse as f64 but are not usable rates
    if !value.is_finite() {
        return Err(WinRateError::NotANumber(trimmed.to_owned()));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(WinRateError::OutOfRange(value));
    }
    Ok(value)
}

pub fn exceeds_recommended(count: usize) -> bool {
    count > RECOMMENDED_MAX_PRIZES
}
