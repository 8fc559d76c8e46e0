//! Metric value formatting and change-delta presentation.
//!
//! Plain and currency values are rounded to at most
//! [`MAX_FRACTION_DIGITS`] fractional digits (nearest, decided on the exact
//! binary value) with trailing zeros dropped. Percentages use the shortest
//! decimal text that round-trips, without exponent notation.

use std::fmt;

use crate::error::{DashboardError, DashboardResult};
use crate::models::DisplayFormat;


/// Maximum fractional digits kept for plain and currency values.
pub const MAX_FRACTION_DIGITS: usize = 3;


/// Direction of a change indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}


impl Direction {
    /// Arrow glyph used by the terminal renderers.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }
}


/// Style class paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaStyle {
    Positive,
    Negative,
}


/// Presentation of a signed percentage change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    /// Absolute change, e.g. `2.1%`
    pub text: String,
    pub direction: Direction,
    pub style: DeltaStyle,
}


impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction.arrow(), self.text)
    }
}


/// Format a metric value for display.
pub fn format_value(value: f64, format: DisplayFormat) -> DashboardResult<String> {
    if !value.is_finite() {
        return Err(DashboardError::InvalidValue(value));
    }

    Ok(match format {
        DisplayFormat::Plain => group_thousands(value),
        DisplayFormat::Currency => format!("${}", group_thousands(value)),
        DisplayFormat::Percentage => format!("{}%", shortest(value)),
    })
}


/// Build the delta indicator for a signed change.
///
/// `Up`/`Positive` strictly for `change > 0`; zero counts as `Down`.
pub fn format_change(change: f64) -> DashboardResult<Delta> {
    if !change.is_finite() {
        return Err(DashboardError::InvalidValue(change));
    }

    let direction = if change > 0.0 { Direction::Up } else { Direction::Down };
    let style = match direction {
        Direction::Up => DeltaStyle::Positive,
        Direction::Down => DeltaStyle::Negative,
    };

    Ok(Delta {
        text: format!("{}%", shortest(change.abs())),
        direction,
        style,
    })
}


/// Percentage change from `previous` to `current`.
///
/// Rounded to one decimal. `None` when there is no baseline to compare with.
pub fn period_change(current: f64, previous: f64) -> Option<f64> {
    if !current.is_finite() || !previous.is_finite() || previous == 0.0 {
        return None;
    }

    let change = (current - previous) / previous.abs() * 100.0;
    Some((change * 10.0).round() / 10.0)
}


/// Group the integer part with `,` and keep up to three fractional digits.
fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let negative = int_part.starts_with('-');
    let digits = int_part.trim_start_matches('-');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // Values that round to zero lose their sign.
    let sign = if negative && (digits != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}


/// Shortest round-trip text of a finite value, `-0` printed as `0`.
fn shortest(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
