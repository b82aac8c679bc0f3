//! Helpers shared by Ruuvi station data handling: a numeric-string check
//! and the timestamp layout used for stored sensor readings.

mod consts;
mod error;
mod utils;

pub use consts::{DB_TIME_FORMAT, DB_TIME_PATTERN};
pub use error::AppError;
pub use utils::serde_db_time;
pub use utils::{format_db_time, is_numeric, is_numeric_str, parse_db_time, parse_numeric};
