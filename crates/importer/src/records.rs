use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ImporterError, Result};
use crate::profile::{ImportOptions, SchedulePlaceholder};
use crate::sources::frc::ApiEvent;

/// A stored event record. Profile-dependent fields stay `None` so they are
/// absent from the serialized record rather than null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub name: String,
    pub start: String,
    pub end: String,
    pub event_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qual_matches: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_qual_schedule: Option<bool>,
}

impl EventRecord {
    /// Build the record written for `event` under the given options.
    /// `name`, `start`, `end` and the event code are copied verbatim.
    pub fn from_api(event: &ApiEvent, options: &ImportOptions) -> Result<Self> {
        let (start_ms, end_ms) = if options.include_ms_timestamps {
            (
                Some(iso_date_to_epoch_ms(&event.date_start)?),
                Some(iso_date_to_epoch_ms(&event.date_end)?),
            )
        } else {
            (None, None)
        };

        let mut record = Self {
            name: event.name.clone(),
            start: event.date_start.clone(),
            end: event.date_end.clone(),
            event_code: event.code.clone(),
            start_ms,
            end_ms,
            matches: None,
            qual_matches: None,
            has_qual_schedule: None,
        };

        match options.placeholder {
            SchedulePlaceholder::Matches => record.matches = Some(Vec::new()),
            SchedulePlaceholder::QualMatches => record.qual_matches = Some(Vec::new()),
            SchedulePlaceholder::QualScheduleFlag => record.has_qual_schedule = Some(false),
        }

        Ok(record)
    }
}

/// Epoch milliseconds of an ISO-8601 date or date-time, read as UTC.
/// Date-only values count from midnight.
pub fn iso_date_to_epoch_ms(value: &str) -> Result<i64> {
    let datetime = match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(datetime) => datetime,
        Err(_) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|source| ImporterError::InvalidDate {
                value: value.to_string(),
                source,
            })?
            .and_time(NaiveTime::MIN),
    };
    Ok(datetime.and_utc().timestamp_millis())
}
