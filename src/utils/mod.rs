pub(crate) mod date;
pub(crate) mod numeric;
pub mod serde_db_time;

pub use date::{format_db_time, parse_db_time};
pub use numeric::{is_numeric, is_numeric_str, parse_numeric};
