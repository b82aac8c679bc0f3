//! Serde adapters for timestamps stored in the database layout.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Reading {
//!     #[serde(with = "ruuvi_util::serde_db_time")]
//!     created_at: NaiveDateTime,
//!     #[serde(with = "ruuvi_util::serde_db_time::option", default)]
//!     updated_at: Option<NaiveDateTime>,
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer, de};

use super::date::{format_db_time, parse_db_time};

pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_db_time(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_db_time(&raw).map_err(de::Error::custom)
}

/// Same as the parent module for `Option<NaiveDateTime>`; `None` maps to `null`.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use crate::utils::date::{format_db_time, parse_db_time};

    pub fn serialize<S>(dt: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&format_db_time(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_db_time(&raw).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
