//! Integration tests for region clocks feeding the divination chain.

use chrono::{TimeZone, Utc};
use liuren_base::{ALL_REGIONS, HourBlock, Region, resolve};
use liuren_time::{FrozenClock, RegionClock, TimeError, checked_hour_block_index, local_time_at};

// ---------------------------------------------------------------------------
// Zones and daylight saving
// ---------------------------------------------------------------------------

#[test]
fn melbourne_summer_rolls_to_next_day() {
    // AEDT, UTC+11
    let t = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 0).unwrap();
    let local = local_time_at(t, Region::Australia).unwrap();
    assert_eq!((local.year, local.month, local.day, local.hour), (2025, 1, 1, 7));
    assert_eq!(local.hour_block(), HourBlock::Chen);
}

#[test]
fn melbourne_summer_late_evening_is_zi() {
    let t = Utc.with_ymd_and_hms(2024, 1, 10, 12, 30, 0).unwrap();
    let local = local_time_at(t, Region::Australia).unwrap();
    assert_eq!((local.day, local.hour, local.minute), (10, 23, 30));
    assert_eq!(local.hour_block(), HourBlock::Zi);
}

#[test]
fn melbourne_winter_is_standard_time() {
    // AEST, UTC+10
    let t = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    assert_eq!(local_time_at(t, Region::Australia).unwrap().hour, 10);
}

#[test]
fn berlin_summer_shifts_block() {
    let t = Utc.with_ymd_and_hms(2024, 7, 1, 11, 30, 0).unwrap();
    let local = local_time_at(t, Region::Germany).unwrap();
    assert_eq!(local.hour, 13);
    assert_eq!(local.hour_block(), HourBlock::Wei);
}

#[test]
fn offset_is_standard_or_one_hour_ahead() {
    for month in 1..=12 {
        let t = Utc.with_ymd_and_hms(2024, month, 15, 12, 0, 0).unwrap();
        for region in ALL_REGIONS {
            let local = local_time_at(t, region).unwrap();
            let standard = (12 + region.standard_utc_offset_hours()).rem_euclid(24) as u32;
            assert!(
                local.hour == standard || local.hour == (standard + 1) % 24,
                "{region} month {month}: {}",
                local.hour
            );
            assert_eq!(local.region, region);
        }
    }
}

#[test]
fn asian_regions_have_no_daylight_saving() {
    let t = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    assert_eq!(local_time_at(t, Region::China).unwrap().hour, 8);
    assert_eq!(local_time_at(t, Region::Japan).unwrap().hour, 9);
}

// ---------------------------------------------------------------------------
// Clock → engine
// ---------------------------------------------------------------------------

#[test]
fn frozen_clock_drives_resolution() {
    // 04:00 UTC = 12:00 Shanghai, Wu block
    let clock = FrozenClock::new(Utc.with_ymd_and_hms(2024, 9, 17, 4, 0, 0).unwrap());
    let local = clock.now(Region::China).unwrap();
    let r = resolve(local.calendar_date(8, 15), Region::China);
    assert_eq!(r.date.hour_block_index, 6);
    assert_eq!(r.hour_state.index(), 3);
}

#[test]
fn checked_hour_bounds() {
    for h in 0..24 {
        assert!(checked_hour_block_index(h).is_ok());
    }
    assert!(matches!(
        checked_hour_block_index(99),
        Err(TimeError::HourOutOfRange(99))
    ));
}
