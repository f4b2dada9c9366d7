//! Reading the current time in a region.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

use liuren_base::Region;

use crate::error::TimeError;
use crate::local_time::LocalTime;

/// Source of the current local time for a region.
pub trait RegionClock {
    fn now(&self, region: Region) -> Result<LocalTime, TimeError>;
}

/// System clock read in the region's timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl RegionClock for SystemClock {
    fn now(&self, region: Region) -> Result<LocalTime, TimeError> {
        local_time_at(Utc::now(), region)
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock {
    pub instant: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl RegionClock for FrozenClock {
    fn now(&self, region: Region) -> Result<LocalTime, TimeError> {
        local_time_at(self.instant, region)
    }
}

/// IANA zone of a region.
pub fn region_timezone(region: Region) -> Result<Tz, TimeError> {
    let name = region.timezone();
    name.parse::<Tz>().map_err(|_| TimeError::UnknownTimezone(name))
}

/// Convert a UTC instant to the region's local wall-clock time.
pub fn local_time_at(instant: DateTime<Utc>, region: Region) -> Result<LocalTime, TimeError> {
    let tz = region_timezone(region)?;
    let local = instant.with_timezone(&tz);
    let time = LocalTime {
        region,
        year: local.year(),
        month: local.month(),
        day: local.day(),
        hour: local.hour(),
        minute: local.minute(),
    };
    debug!(%region, utc = %instant, local = %time, "clock read");
    Ok(time)
}
