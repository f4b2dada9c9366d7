//! Cyclic counting on the six-position ring.
//!
//! Counting is 1-based: the start position itself is count 1, so one
//! step lands on the start, six steps land one position behind it and
//! seven come back around to it.

use crate::six_state::SixState;

/// Number of positions on the ring.
pub const RING_SIZE: u8 = 6;

/// Count `count` positions around the ring from `start`.
///
/// Returns `(start + count - 1) mod 6`. `count` is a calendar ordinal
/// (month 1-12, day 1-30, hour 1-12) and is not validated; a count of 0
/// still yields a ring position.
pub const fn step(start: u8, count: u32) -> u8 {
    (start as i64 + count as i64 - 1).rem_euclid(RING_SIZE as i64) as u8
}

/// [`step`] over states instead of raw positions.
pub const fn step_state(start: SixState, count: u32) -> SixState {
    SixState::from_index(step(start.index(), count))
}
