use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| Error::InvalidArgument(format!("Timestamp {} is out of range", millis)))
}
