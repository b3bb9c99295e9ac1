use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry of the free-text work journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: String,
    pub title: String,
    pub project: String,
    pub responsible: String,
    pub time_spent: String,
    pub details: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
}

/// Request to record a new activity. `date` defaults to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityLogRequest {
    pub title: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub responsible: String,
    #[serde(default)]
    pub time_spent: String,
    pub details: String,
    #[ts(type = "string | null")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityLogRequest {
    pub title: Option<String>,
    pub project: Option<String>,
    pub responsible: Option<String>,
    pub time_spent: Option<String>,
    pub details: Option<String>,
    #[ts(type = "string | null")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityLogsResponse {
    pub logs: Vec<ActivityLogEntry>,
}
