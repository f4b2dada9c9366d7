//! Gregorian dates of the Lunar New Year, 1920 through 2030.
//!
//! Source: Hong Kong Observatory Gregorian-lunar conversion tables.

/// First Gregorian year covered by the table.
pub const FIRST_COVERED_YEAR: i32 = 1920;
/// Last Gregorian year covered by the table.
pub const LAST_COVERED_YEAR: i32 = 2030;

/// Gregorian date on which a lunar year begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewYearBoundary {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl NewYearBoundary {
    /// Whether a Gregorian (month, day) in the same year falls strictly
    /// before this boundary.
    pub const fn follows(&self, month: u8, day: u8) -> bool {
        month < self.month || (month == self.month && day < self.day)
    }
}

/// (month, day) of the Lunar New Year, indexed by `year - FIRST_COVERED_YEAR`.
#[rustfmt::skip]
const BOUNDARIES: [(u8, u8); 111] = [
    // 1920-1929
    (2, 20), (2, 8), (1, 28), (2, 16), (2, 5), (1, 24), (2, 13), (2, 2), (1, 23), (2, 10),
    // 1930-1939
    (1, 30), (2, 17), (2, 6), (1, 26), (2, 14), (2, 4), (1, 24), (2, 11), (1, 31), (2, 19),
    // 1940-1949
    (2, 8), (1, 27), (2, 15), (2, 5), (1, 25), (2, 13), (2, 2), (1, 22), (2, 10), (1, 29),
    // 1950-1959
    (2, 17), (2, 6), (1, 27), (2, 14), (2, 3), (1, 24), (2, 12), (1, 31), (2, 18), (2, 8),
    // 1960-1969; 1961 is Feb 15, not the Jan 15 some tables carry
    (1, 28), (2, 15), (2, 5), (1, 25), (2, 13), (2, 2), (1, 21), (2, 9), (1, 30), (2, 17),
    // 1970-1979; 1972 is Feb 15, not Jan 16
    (2, 6), (1, 27), (2, 15), (2, 3), (1, 23), (2, 11), (1, 31), (2, 18), (2, 7), (1, 28),
    // 1980-1989
    (2, 16), (2, 5), (1, 25), (2, 13), (2, 2), (2, 20), (2, 9), (1, 29), (2, 17), (2, 6),
    // 1990-1999
    (1, 27), (2, 15), (2, 4), (1, 23), (2, 10), (1, 31), (2, 19), (2, 7), (1, 28), (2, 16),
    // 2000-2009
    (2, 5), (1, 24), (2, 12), (2, 1), (1, 22), (2, 9), (1, 29), (2, 18), (2, 7), (1, 26),
    // 2010-2019
    (2, 14), (2, 3), (1, 23), (2, 10), (1, 31), (2, 19), (2, 8), (1, 28), (2, 16), (2, 5),
    // 2020-2029
    (1, 25), (2, 12), (2, 1), (1, 22), (2, 10), (1, 29), (2, 17), (2, 6), (1, 26), (2, 13),
    // 2030
    (2, 3),
];

/// Lunar New Year boundary for a Gregorian year, or `None` outside
/// [`FIRST_COVERED_YEAR`]..=[`LAST_COVERED_YEAR`].
pub fn lunar_new_year(year: i32) -> Option<NewYearBoundary> {
    let offset = usize::try_from(year.checked_sub(FIRST_COVERED_YEAR)?).ok()?;
    let &(month, day) = BOUNDARIES.get(offset)?;
    Some(NewYearBoundary { year, month, day })
}

/// Whether the table covers `year`. Zodiac resolution for uncovered
/// years ignores the New Year date entirely.
pub fn is_year_covered(year: i32) -> bool {
    (FIRST_COVERED_YEAR..=LAST_COVERED_YEAR).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_spans_declared_range() {
        assert_eq!(
            BOUNDARIES.len() as i32,
            LAST_COVERED_YEAR - FIRST_COVERED_YEAR + 1
        );
    }

    #[test]
    fn boundaries_fall_in_window() {
        // The Lunar New Year always lands between Jan 21 and Feb 20.
        for (i, &(m, d)) in BOUNDARIES.iter().enumerate() {
            let year = FIRST_COVERED_YEAR + i as i32;
            let ok = (m == 1 && d >= 21) || (m == 2 && d <= 20);
            assert!(ok, "{year}: {m}-{d}");
        }
    }

    #[test]
    fn known_dates() {
        let b = lunar_new_year(2024).unwrap();
        assert_eq!((b.month, b.day), (2, 10));
        let b = lunar_new_year(1920).unwrap();
        assert_eq!((b.month, b.day), (2, 20));
        let b = lunar_new_year(2025).unwrap();
        assert_eq!((b.month, b.day), (1, 29));
    }

    #[test]
    fn corrected_february_entries() {
        for year in [1961, 1972] {
            let b = lunar_new_year(year).unwrap();
            assert_eq!((b.month, b.day), (2, 15), "{year}");
        }
    }

    #[test]
    fn outside_range_is_none() {
        assert_eq!(lunar_new_year(1919), None);
        assert_eq!(lunar_new_year(2031), None);
        assert_eq!(lunar_new_year(i32::MIN), None);
        assert!(!is_year_covered(1800));
        assert!(is_year_covered(1990));
    }

    #[test]
    fn strictly_before() {
        let b = lunar_new_year(2024).unwrap();
        assert!(b.follows(1, 15));
        assert!(b.follows(2, 9));
        assert!(!b.follows(2, 10));
        assert!(!b.follows(3, 1));
    }
}
