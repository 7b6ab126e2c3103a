use std::fmt::{self, Display, Formatter};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::DiffError;

/// POSIX time in whole seconds.
///
/// Deserializes from either an integer or a float; fractional seconds are
/// floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn secs(self) -> i64 {
        self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Seconds(i64),
    Fractional(f64),
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Seconds(secs) => Ok(Self(secs)),
            RawTimestamp::Fractional(value) => {
                let floored = value.floor();
                if !floored.is_finite() || floored < i64::MIN as f64 || floored > i64::MAX as f64
                {
                    return Err(D::Error::custom(format!(
                        "timestamp {value} is not a representable POSIX time"
                    )));
                }
                Ok(Self(floored as i64))
            }
        }
    }
}

/// Format a POSIX time as `YYYY-MM-DDTHH:MM:SSZ` in UTC.
pub fn iso_time(timestamp: Timestamp) -> Result<String, DiffError> {
    let at = OffsetDateTime::from_unix_timestamp(timestamp.secs())
        .map_err(|_| DiffError::Timestamp(timestamp.secs()))?;
    Ok(at.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
    ))?)
}
