use crate::postings::domain::NEGOTIABLE_MARKER;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{error, warn};

static DIGIT_RUNS: OnceLock<Option<Regex>> = OnceLock::new();

/// Lower and upper salary bound parsed from free text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl SalaryBounds {
    const ABSENT: Self = Self {
        min: None,
        max: None,
    };

    fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn average(&self) -> Option<f64> {
        average_salary(self.min, self.max)
    }
}

/// Parse salary text such as `200-300/天`.
///
/// The first two runs of digits become the bounds; a single run is used for both. ASCII
/// and full-width digits (`２００`) are read. Text marked negotiable, text without digits
/// and runs that cannot be read as an `i64` all yield absent bounds.
pub fn parse_salary(text: Option<&str>) -> SalaryBounds {
    let Some(text) = text else {
        return SalaryBounds::ABSENT;
    };
    if text.contains(NEGOTIABLE_MARKER) {
        return SalaryBounds::ABSENT;
    }
    let Some(pattern) = digit_runs() else {
        return SalaryBounds::ABSENT;
    };

    let mut runs = pattern.find_iter(text).map(|run| run.as_str());
    let first = runs.next();
    let second = runs.next();

    let parsed = match (first, second) {
        (Some(low), Some(high)) => parse_run(low)
            .zip(parse_run(high))
            .map(|(low, high)| SalaryBounds::new(low, high)),
        (Some(only), None) => parse_run(only).map(|value| SalaryBounds::new(value, value)),
        _ => None,
    };

    parsed.unwrap_or(SalaryBounds::ABSENT)
}

/// Mean of the present bounds; a single present bound is its own mean.
pub fn average_salary(min: Option<i64>, max: Option<i64>) -> Option<f64> {
    match (min, max) {
        (Some(min), Some(max)) => Some((min as f64 + max as f64) / 2.0),
        (Some(value), None) | (None, Some(value)) => Some(value as f64),
        (None, None) => None,
    }
}

fn parse_run(run: &str) -> Option<i64> {
    let parsed = run.chars().try_fold(0i64, |value, ch| {
        let digit = decimal_digit(ch)?;
        value.checked_mul(10)?.checked_add(digit)
    });
    if parsed.is_none() {
        warn!(run, "discarding salary digits that do not parse");
    }
    parsed
}

fn decimal_digit(ch: char) -> Option<i64> {
    let value = match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        '０'..='９' => ch as u32 - '０' as u32,
        _ => return None,
    };
    Some(i64::from(value))
}

fn digit_runs() -> Option<&'static Regex> {
    DIGIT_RUNS
        .get_or_init(|| match Regex::new(r"\d+") {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                error!(%err, "salary digit pattern failed to compile");
                None
            }
        })
        .as_ref()
}
