/// Timestamp layout of stored sensor readings, in chrono strftime form: "09.09.2017 14:05:03"
pub const DB_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Same layout as [`DB_TIME_FORMAT`] in `dd.MM.yyyy` pattern notation,
/// as written by the mobile app.
pub const DB_TIME_PATTERN: &str = "dd.MM.yyyy HH:mm:ss";
