//! Chinese zodiac signs and birth-date resolution.
//!
//! A Gregorian birth date belongs to the previous zodiac year when it
//! falls before that year's Lunar New Year. The New Year dates come from
//! [`crate::new_year`]; outside the table's range the plain `year mod 12`
//! cycle is used.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::element::{Element, ElementRelation, relate};
use crate::error::LiurenError;
use crate::new_year::lunar_new_year;
use crate::six_state::SixState;
use crate::util::normalize_name;

/// The twelve zodiac signs, in traditional order from the Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 signs in traditional order (index 0 = Rat).
pub const ALL_ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Rat,
    ZodiacSign::Ox,
    ZodiacSign::Tiger,
    ZodiacSign::Rabbit,
    ZodiacSign::Dragon,
    ZodiacSign::Snake,
    ZodiacSign::Horse,
    ZodiacSign::Goat,
    ZodiacSign::Monkey,
    ZodiacSign::Rooster,
    ZodiacSign::Dog,
    ZodiacSign::Pig,
];

/// Sign by `year mod 12`. Years divisible by 12 are Monkey years
/// (2016, 2028), which puts the Rat at remainder 4 (2020).
const YEAR_CYCLE: [ZodiacSign; 12] = [
    ZodiacSign::Monkey,
    ZodiacSign::Rooster,
    ZodiacSign::Dog,
    ZodiacSign::Pig,
    ZodiacSign::Rat,
    ZodiacSign::Ox,
    ZodiacSign::Tiger,
    ZodiacSign::Rabbit,
    ZodiacSign::Dragon,
    ZodiacSign::Snake,
    ZodiacSign::Horse,
    ZodiacSign::Goat,
];

impl ZodiacSign {
    /// 0-based index in traditional order (Rat=0 .. Pig=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Rat | Self::Pig => Element::Water,
            Self::Ox | Self::Dragon | Self::Goat | Self::Dog => Element::Earth,
            Self::Tiger | Self::Rabbit => Element::Wood,
            Self::Snake | Self::Horse => Element::Fire,
            Self::Monkey | Self::Rooster => Element::Metal,
        }
    }

    /// Sign of a lunar year by the plain 12-year cycle.
    pub const fn for_lunar_year(year: i32) -> ZodiacSign {
        YEAR_CYCLE[year.rem_euclid(12) as usize]
    }

    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_ZODIAC_SIGNS
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = LiurenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_name(s);
        ALL_ZODIAC_SIGNS
            .iter()
            .copied()
            .find(|z| key == z.name().to_ascii_lowercase() || key == z.chinese())
            .or(match key.as_str() {
                "sheep" | "ram" => Some(Self::Goat),
                "chicken" => Some(Self::Rooster),
                "buffalo" => Some(Self::Ox),
                "boar" => Some(Self::Pig),
                _ => None,
            })
            .ok_or_else(|| LiurenError::unknown("zodiac sign", s))
    }
}

// ---------------------------------------------------------------------------
// Birth-date resolution
// ---------------------------------------------------------------------------

/// A Gregorian birth date as plain integers. Not validated against the
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl BirthDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BirthDate {
    type Err = LiurenError;

    /// Parse `YYYY-MM-DD`. Only the shape and the month (1-12) and day
    /// (1-31) ranges are checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LiurenError::MalformedBirthDate(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let year: i32 = y.parse().map_err(|_| malformed())?;
        let month: u8 = m.parse().map_err(|_| malformed())?;
        let day: u8 = d.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(malformed());
        }
        Ok(Self::new(year, month, day))
    }
}

/// Zodiac resolution for a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacResult {
    pub sign: ZodiacSign,
    /// Gregorian year in which the birth's lunar year began.
    pub lunar_year: i32,
    /// True when the birth date precedes its Gregorian year's Lunar New
    /// Year, so `lunar_year` is one less than the Gregorian year.
    pub is_before_new_year: bool,
}

impl ZodiacResult {
    pub const fn element(&self) -> Element {
        self.sign.element()
    }
}

/// Resolve the zodiac sign of a Gregorian birth date.
///
/// Years outside the Lunar New Year table fall back to
/// `year mod 12` with `is_before_new_year = false`. That fallback ignores
/// the New Year boundary, so January and early February births in those
/// years may get the following year's sign. Use
/// [`crate::new_year::is_year_covered`] to detect it.
pub fn resolve_zodiac(year: i32, month: u8, day: u8) -> ZodiacResult {
    let Some(boundary) = lunar_new_year(year) else {
        debug!(year, "birth year outside new-year table, using plain cycle");
        return ZodiacResult {
            sign: ZodiacSign::for_lunar_year(year),
            lunar_year: year,
            is_before_new_year: false,
        };
    };

    if boundary.follows(month, day) {
        ZodiacResult {
            sign: ZodiacSign::for_lunar_year(year - 1),
            lunar_year: year - 1,
            is_before_new_year: true,
        }
    } else {
        ZodiacResult {
            sign: ZodiacSign::for_lunar_year(year),
            lunar_year: year,
            is_before_new_year: false,
        }
    }
}

/// [`resolve_zodiac`] on a [`BirthDate`].
pub fn resolve_birth_date(date: BirthDate) -> ZodiacResult {
    resolve_zodiac(date.year, date.month, date.day)
}

/// Relation of one state to every sign, in traditional sign order.
pub fn relationship_table(state: SixState) -> [(ZodiacSign, ElementRelation); 12] {
    let element = state.relation_element();
    ALL_ZODIAC_SIGNS.map(|sign| (sign, relate(element, sign.element())))
}
