//! Time source for the store and conversion between `time` and the chrono
//! types SeaORM binds for `TIMESTAMPTZ` columns.

use std::fmt::Debug;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::DbErr;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

/// Source of "now" for every timestamp the store writes or compares against.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock that only moves when told to. Useful for exercising TTL
/// boundaries without sleeping.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<OffsetDateTime>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jumps to `now`, forwards or backwards.
    pub fn set(&self, now: OffsetDateTime) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Drops sub-microsecond precision, matching what Postgres stores.
pub(crate) fn truncate_to_micros(time: OffsetDateTime) -> OffsetDateTime {
    let micros = time.nanosecond() / 1_000 * 1_000;
    time.replace_nanosecond(micros).unwrap_or(time)
}

pub(crate) fn to_db_timestamp(time: OffsetDateTime) -> DateTimeWithTimeZone {
    // chrono's representable range is a superset of `time`'s
    DateTime::from_timestamp(time.unix_timestamp(), time.nanosecond())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
        .fixed_offset()
}

pub(crate) fn from_db_timestamp(value: DateTimeWithTimeZone) -> Result<OffsetDateTime, DbErr> {
    let seconds = OffsetDateTime::from_unix_timestamp(value.timestamp())
        .map_err(|e| DbErr::Type(format!("timestamp out of range: {e}")))?;
    Ok(seconds + Duration::nanoseconds(i64::from(value.timestamp_subsec_nanos())))
}

pub(crate) fn to_rfc3339(time: OffsetDateTime) -> String {
    time.format(&Rfc3339)
        .unwrap_or_else(|_| time.unix_timestamp().to_string())
}
