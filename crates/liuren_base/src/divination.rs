//! Month, day, hour chained resolution.
//!
//! Each step starts where the previous one landed: the month is counted
//! from the region's starting position, the day from the month state,
//! and the hour block from the day state. The chaining is what makes a
//! result depend on all three inputs.

use serde::Serialize;
use tracing::debug;

use crate::calendar::CalendarDate;
use crate::counter::step;
use crate::region::Region;
use crate::six_state::SixState;

/// One full resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DivinationResult {
    pub region: Region,
    pub date: CalendarDate,
    /// State after counting the lunar month.
    pub month_state: SixState,
    /// State after counting the lunar day from the month state.
    pub day_state: SixState,
    /// State after counting the hour block from the day state.
    pub hour_state: SixState,
}

impl DivinationResult {
    /// The hour state, which is the answer for the query.
    pub const fn answer(&self) -> SixState {
        self.hour_state
    }

    /// The derivation chain `[month, day, hour]`.
    pub const fn chain(&self) -> [SixState; 3] {
        [self.month_state, self.day_state, self.hour_state]
    }
}

/// Positions after the month and day steps. Shared by every hour block of
/// the same day.
fn month_day_positions(date: CalendarDate, region: Region) -> (u8, u8) {
    let start = region.starting_position();
    let month = step(start, date.lunar_month as u32);
    let day = step(month, date.lunar_day as u32);
    (month, day)
}

/// Resolve the state for a lunar date and hour block in a region.
pub fn resolve(date: CalendarDate, region: Region) -> DivinationResult {
    let (month, day) = month_day_positions(date, region);
    // hour blocks are 0-based; counting is 1-based like month and day
    let hour = step(day, date.hour_block_index as u32 + 1);

    let result = DivinationResult {
        region,
        date,
        month_state: SixState::from_index(month),
        day_state: SixState::from_index(day),
        hour_state: SixState::from_index(hour),
    };
    debug!(
        region = region.name(),
        month = date.lunar_month,
        day = date.lunar_day,
        hour_block = date.hour_block_index,
        month_state = result.month_state.pinyin(),
        day_state = result.day_state.pinyin(),
        hour_state = result.hour_state.pinyin(),
        "resolved divination chain"
    );
    result
}

/// Hour states for all twelve blocks of the date's day.
///
/// Entry `i` equals `resolve(date.with_hour_block(i), region).hour_state`.
/// The hour block already set on `date` is ignored.
pub fn resolve_all_hours(date: CalendarDate, region: Region) -> [SixState; 12] {
    let (_, day) = month_day_positions(date, region);
    std::array::from_fn(|i| SixState::from_index(step(day, i as u32 + 1)))
}
