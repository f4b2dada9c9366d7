//! Supported regions and the hemisphere adjustment.
//!
//! Reference-hemisphere regions start counting at Great Peace. The
//! reversed hemisphere rotates the start half a season around the ring
//! (six steps from Great Peace, landing on the void state) and swaps
//! North and South for display.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::counter::step;
use crate::direction::Direction;
use crate::error::LiurenError;
use crate::six_state::SixState;
use crate::util::normalize_name;

/// Which way the seasonal axis runs relative to the lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hemisphere {
    Reference,
    Reversed,
}

impl Hemisphere {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Reversed => "reversed",
        }
    }
}

/// A supported region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    China,
    Japan,
    Germany,
    Australia,
}

/// All supported regions.
pub const ALL_REGIONS: [Region; 4] = [
    Region::China,
    Region::Japan,
    Region::Germany,
    Region::Australia,
];

impl Region {
    pub const fn name(self) -> &'static str {
        match self {
            Self::China => "China",
            Self::Japan => "Japan",
            Self::Germany => "Germany",
            Self::Australia => "Australia",
        }
    }

    /// IANA timezone identifier for the region's clock.
    pub const fn timezone(self) -> &'static str {
        match self {
            Self::China => "Asia/Shanghai",
            Self::Japan => "Asia/Tokyo",
            Self::Germany => "Europe/Berlin",
            Self::Australia => "Australia/Melbourne",
        }
    }

    /// Standard (non-daylight-saving) UTC offset in hours, shown in the
    /// regions listing. Clock reads go through the IANA zone instead.
    pub const fn standard_utc_offset_hours(self) -> i32 {
        match self {
            Self::China => 8,
            Self::Japan => 9,
            Self::Germany => 1,
            Self::Australia => 10,
        }
    }

    pub const fn hemisphere(self) -> Hemisphere {
        match self {
            Self::Australia => Hemisphere::Reversed,
            Self::China | Self::Japan | Self::Germany => Hemisphere::Reference,
        }
    }

    /// Ring position the month count starts from.
    pub const fn starting_position(self) -> u8 {
        match self.hemisphere() {
            Hemisphere::Reference => 0,
            Hemisphere::Reversed => step(0, 6),
        }
    }

    /// [`Region::starting_position`] as a state.
    pub const fn starting_state(self) -> SixState {
        SixState::from_index(self.starting_position())
    }

    /// Swap North and South in the reversed hemisphere. Display only.
    pub const fn reverse_direction_if_needed(self, direction: Direction) -> Direction {
        match self.hemisphere() {
            Hemisphere::Reversed => direction.flip_north_south(),
            Hemisphere::Reference => direction,
        }
    }

    /// Lunar month as shown to the user. The reversed hemisphere shows the
    /// month half a year ahead; counting always uses the true month.
    pub const fn display_month(self, lunar_month: u8) -> u8 {
        match self.hemisphere() {
            Hemisphere::Reversed => ((lunar_month as u16 + 6 - 1) % 12) as u8 + 1,
            Hemisphere::Reference => lunar_month,
        }
    }

    pub const fn all() -> &'static [Region; 4] {
        &ALL_REGIONS
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = LiurenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "china" | "cn" => Ok(Self::China),
            "japan" | "jp" => Ok(Self::Japan),
            "germany" | "de" => Ok(Self::Germany),
            "australia" | "au" => Ok(Self::Australia),
            _ => Err(LiurenError::unknown("region", s)),
        }
    }
}
