//! Date arithmetic for preparatory-task generation
//!
//! Pure functions mapping event proximity to due dates and priority bands.
//! Events outside the 1-7 day window are outside every band; callers treat
//! that as a per-event skip, not a batch failure.

use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::domain::PriorityLevel;

/// Errors from timestamp parsing and band lookup
#[derive(Debug, Error)]
pub enum TemporalError {
    #[error("Unparsable timestamp '{0}'")]
    BadTimestamp(String),

    #[error("Event {0} days away is outside the 1-7 day preparation window")]
    OutsideWindow(i64),
}

/// Parse an event timestamp
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`, or a bare date (taken as
/// midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TemporalError> {
    debug!(%raw, "parse_timestamp: called");
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    Err(TemporalError::BadTimestamp(raw.to_string()))
}

/// Parse a calendar date, tolerating full timestamps
pub fn parse_date(raw: &str) -> Result<NaiveDate, TemporalError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_timestamp(raw).map(|dt| dt.date_naive())
}

/// Whole-day difference between two timestamps, truncated toward zero
pub fn days_until(reference: DateTime<Utc>, target: DateTime<Utc>) -> i64 {
    (target - reference).num_days()
}

/// Due date for a prep task, offset back from the event by proximity band
///
/// 1-2 days out: due 1 day before. 3-5 days: 2 days before. 6-7 days:
/// 3 days before.
pub fn prep_due_date(event: DateTime<Utc>, days_until_event: i64) -> Result<NaiveDate, TemporalError> {
    debug!(days_until_event, "prep_due_date: called");
    let offset = match days_until_event {
        1..=2 => 1,
        3..=5 => 2,
        6..=7 => 3,
        other => return Err(TemporalError::OutsideWindow(other)),
    };
    Ok((event - Duration::days(offset)).date_naive())
}

/// Priority band for a prep task by event proximity
///
/// Returns the level together with the legal score range so callers can clamp
/// a generated score into it.
pub fn prep_priority_band(
    days_until_event: i64,
) -> Result<(PriorityLevel, RangeInclusive<u8>), TemporalError> {
    debug!(days_until_event, "prep_priority_band: called");
    match days_until_event {
        1..=2 => Ok((PriorityLevel::High, 80..=100)),
        3..=4 => Ok((PriorityLevel::High, 60..=79)),
        5..=7 => Ok((PriorityLevel::Medium, 40..=59)),
        other => Err(TemporalError::OutsideWindow(other)),
    }
}
