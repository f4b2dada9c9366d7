//! Wall-clock reading in a region's local time.

use serde::Serialize;

use liuren_base::{CalendarDate, HourBlock, Region};

use crate::hour_block_index;

/// Local calendar date and time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalTime {
    pub region: Region,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalTime {
    pub fn hour_block_index(&self) -> u8 {
        hour_block_index(self.hour)
    }

    pub fn hour_block(&self) -> HourBlock {
        HourBlock::from_index(self.hour_block_index())
    }

    /// Pair this reading's hour block with an externally converted lunar
    /// month and day.
    pub fn calendar_date(&self, lunar_month: u8, lunar_day: u8) -> CalendarDate {
        CalendarDate::new(lunar_month, lunar_day, self.hour_block_index())
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02} ({})",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.region.timezone()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hour: u32) -> LocalTime {
        LocalTime {
            region: Region::Japan,
            year: 2024,
            month: 9,
            day: 17,
            hour,
            minute: 5,
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(sample(7).to_string(), "2024-09-17 07:05 (Asia/Tokyo)");
    }

    #[test]
    fn late_evening_is_zi() {
        assert_eq!(sample(23).hour_block(), HourBlock::Zi);
    }

    #[test]
    fn calendar_date_carries_block() {
        let d = sample(12).calendar_date(8, 15);
        assert_eq!(d, CalendarDate::new(8, 15, 6));
    }
}
