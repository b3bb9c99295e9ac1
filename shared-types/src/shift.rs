use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clock-in and lunch times as typed into the time-clock form (`HH:MM`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShiftInput {
    pub entry: Option<String>,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResult {
    /// Clock-out time, 24-hour `HH:MM`
    pub exit_time: String,
    /// Set when the clock-out time falls on the day after the entry
    pub next_day: bool,
    pub lunch_minutes: i64,
}
