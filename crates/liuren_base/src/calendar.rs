//! Lunar calendar input and the twelve two-hour blocks.
//!
//! The lunar month and day come from an external Gregorian to lunar
//! converter. This module only carries them.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::LiurenError;

/// The twelve two-hour blocks (shi chen), named by earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HourBlock {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve blocks in order (index 0 = Zi, 23:00-01:00).
pub const ALL_HOUR_BLOCKS: [HourBlock; 12] = [
    HourBlock::Zi,
    HourBlock::Chou,
    HourBlock::Yin,
    HourBlock::Mao,
    HourBlock::Chen,
    HourBlock::Si,
    HourBlock::Wu,
    HourBlock::Wei,
    HourBlock::Shen,
    HourBlock::You,
    HourBlock::Xu,
    HourBlock::Hai,
];

const BRANCH_CHINESE: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl HourBlock {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Block at an index, reduced modulo 12.
    pub const fn from_index(index: u8) -> HourBlock {
        ALL_HOUR_BLOCKS[(index % 12) as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    pub const fn chinese(self) -> &'static str {
        BRANCH_CHINESE[self.index() as usize]
    }

    /// Local hour the block starts at (Zi starts at 23 the previous day).
    pub const fn start_hour(self) -> u8 {
        (self.index() * 2 + 23) % 24
    }

    /// Local hour the block ends at (exclusive).
    pub const fn end_hour(self) -> u8 {
        (self.index() * 2 + 1) % 24
    }

    /// 1-based ordinal used when counting the hour step.
    pub const fn ordinal(self) -> u32 {
        self.index() as u32 + 1
    }
}

impl Display for HourBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:00-{:02}:00",
            self.pinyin(),
            self.start_hour(),
            self.end_hour()
        )
    }
}

/// A lunar calendar date plus the hour block of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    /// Lunar month (1-12).
    pub lunar_month: u8,
    /// Lunar day (1-30).
    pub lunar_day: u8,
    /// Hour-block index (0-11, 0 = 23:00-01:00).
    pub hour_block_index: u8,
}

impl CalendarDate {
    /// Build a date without validation. Out-of-range values still resolve
    /// (all counting is modular) but carry no meaning.
    pub const fn new(lunar_month: u8, lunar_day: u8, hour_block_index: u8) -> Self {
        Self {
            lunar_month,
            lunar_day,
            hour_block_index,
        }
    }

    /// Build a date, rejecting out-of-range components.
    pub fn checked(lunar_month: u8, lunar_day: u8, hour_block_index: u8) -> Result<Self, LiurenError> {
        if !(1..=12).contains(&lunar_month) {
            return Err(LiurenError::InvalidDate("lunar month must be 1-12"));
        }
        if !(1..=30).contains(&lunar_day) {
            return Err(LiurenError::InvalidDate("lunar day must be 1-30"));
        }
        if hour_block_index > 11 {
            return Err(LiurenError::InvalidDate("hour block index must be 0-11"));
        }
        Ok(Self::new(lunar_month, lunar_day, hour_block_index))
    }

    /// Same month and day at a different hour block.
    pub const fn with_hour_block(self, hour_block_index: u8) -> Self {
        Self {
            hour_block_index,
            ..self
        }
    }

    pub const fn hour_block(self) -> HourBlock {
        HourBlock::from_index(self.hour_block_index)
    }
}
