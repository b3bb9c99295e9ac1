use chrono::{Duration, NaiveTime};
use shared_types::{ShiftInput, ShiftResult};

use crate::error::ShiftError;
use crate::forms::parse_time_of_day;

/// Length of the standard workday, lunch excluded
pub const WORKDAY_MINUTES: i64 = 8 * 60;

/// Computes the clock-out time from the entry and lunch times.
///
/// All three times are anchored to the same day. The clock-out time wraps
/// past midnight; `ShiftResult::next_day` reports when that happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCalculator {
    workday: Duration,
}

impl Default for ShiftCalculator {
    fn default() -> Self {
        Self {
            workday: Duration::minutes(WORKDAY_MINUTES),
        }
    }
}

impl ShiftCalculator {
    pub fn with_workday(workday: Duration) -> Self {
        Self { workday }
    }

    pub fn workday(&self) -> Duration {
        self.workday
    }

    pub fn compute(
        &self,
        entry: Option<NaiveTime>,
        lunch_start: Option<NaiveTime>,
        lunch_end: Option<NaiveTime>,
    ) -> Result<ShiftResult, ShiftError> {
        let (Some(entry), Some(lunch_start), Some(lunch_end)) = (entry, lunch_start, lunch_end)
        else {
            return Err(ShiftError::MissingInput);
        };

        let lunch = lunch_end - lunch_start;
        if lunch < Duration::zero() {
            return Err(ShiftError::InvalidRange);
        }

        let (exit, wrapped_secs) = entry.overflowing_add_signed(self.workday + lunch);

        Ok(ShiftResult {
            exit_time: exit.format("%H:%M").to_string(),
            next_day: wrapped_secs > 0,
            lunch_minutes: lunch.num_minutes(),
        })
    }

    /// Same as [`compute`](Self::compute), starting from the raw form fields.
    /// Blank or absent fields count as missing.
    pub fn compute_input(&self, input: &ShiftInput) -> Result<ShiftResult, ShiftError> {
        let entry = parse_field(input.entry.as_deref())?;
        let lunch_start = parse_field(input.lunch_start.as_deref())?;
        let lunch_end = parse_field(input.lunch_end.as_deref())?;

        self.compute(entry, lunch_start, lunch_end)
    }
}

fn parse_field(field: Option<&str>) -> Result<Option<NaiveTime>, ShiftError> {
    match field {
        Some(text) => parse_time_of_day(text),
        None => Ok(None),
    }
}
