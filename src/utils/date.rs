use chrono::NaiveDateTime;

use crate::consts::DB_TIME_FORMAT;
use crate::error::AppError;

/// Render a timestamp in the database layout. Sub-second precision is dropped.
pub fn format_db_time(dt: &NaiveDateTime) -> String {
    dt.format(DB_TIME_FORMAT).to_string()
}

pub fn parse_db_time(s: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(s.trim(), DB_TIME_FORMAT).map_err(|_| {
        AppError::InvalidDbTime {
            input: s.to_string(),
        }
    })
}
