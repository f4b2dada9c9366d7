//! Xiao Liu Ren (small six-ren) divination engine.
//!
//! This crate provides:
//! - The six-state ring and its 1-based cyclic counter
//! - Month/day/hour chained resolution with the hemisphere adjustment
//! - Five-element relations between states and zodiac signs
//! - Zodiac resolution across the Lunar New Year boundary
//! - Cosmetic hint selection from an injected random source
//! - Phenology energy months for the reversed hemisphere
//!
//! Everything here is pure and synchronous. The lunar month and day are
//! inputs; converting a Gregorian date to the lunar calendar is left to
//! the caller.

pub mod calendar;
pub mod counter;
pub mod direction;
pub mod divination;
pub mod element;
pub mod error;
pub mod hint;
pub mod new_year;
pub mod phenology;
pub mod region;
pub mod six_state;
pub mod util;
pub mod zodiac;

pub use calendar::{ALL_HOUR_BLOCKS, CalendarDate, HourBlock};
pub use counter::{RING_SIZE, step, step_state};
pub use direction::Direction;
pub use divination::{DivinationResult, resolve, resolve_all_hours};
pub use element::{
    ALL_ELEMENTS, Classification, Element, ElementRelation, Favorability, NEUTRAL_RELATION,
    NEUTRAL_SCORE, classify, relate,
};
pub use error::LiurenError;
pub use hint::{HintBucket, hint_bucket, render_template, zodiac_hint};
pub use new_year::{
    FIRST_COVERED_YEAR, LAST_COVERED_YEAR, NewYearBoundary, is_year_covered, lunar_new_year,
};
pub use phenology::{EnergyMonth, MELBOURNE_ENERGY_MONTHS, energy_month};
pub use region::{ALL_REGIONS, Hemisphere, Region};
pub use six_state::{ALL_SIX_STATES, Luck, SixState};
pub use zodiac::{
    ALL_ZODIAC_SIGNS, BirthDate, ZodiacResult, ZodiacSign, relationship_table, resolve_birth_date,
    resolve_zodiac,
};
