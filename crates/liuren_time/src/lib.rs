//! Region-local wall clock for the divination engine.
//!
//! This crate provides:
//! - Local hour → hour-block index mapping
//! - A `LocalTime` wall-clock reading
//! - The `RegionClock` trait with a live and a frozen implementation
//!
//! Local time comes from each region's IANA zone, daylight saving
//! included.

pub mod clock;
pub mod error;
pub mod local_time;

pub use clock::{FrozenClock, RegionClock, SystemClock, local_time_at, region_timezone};
pub use error::TimeError;
pub use local_time::LocalTime;

/// Map a local hour to its two-hour block index (Zi = 0).
///
/// 23:00 and 00:00 both fall in Zi. Hours past 23 wrap rather than
/// panic; use [`checked_hour_block_index`] to reject them.
pub const fn hour_block_index(hour: u32) -> u8 {
    (((hour % 24 + 1) / 2) % 12) as u8
}

/// Like [`hour_block_index`], but rejects hours outside 0..=23.
pub fn checked_hour_block_index(hour: u32) -> Result<u8, TimeError> {
    if hour > 23 {
        return Err(TimeError::HourOutOfRange(hour));
    }
    Ok(hour_block_index(hour))
}
