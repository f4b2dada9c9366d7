//! Compass directions attached to the six states.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LiurenError;
use crate::util::normalize_name;

/// A compass direction, plus the two non-directional placements used by
/// the states: the center and the four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    East,
    South,
    West,
    North,
    Center,
    Corners,
}

impl Direction {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
            Self::North => "North",
            Self::Center => "Center",
            Self::Corners => "Corners",
        }
    }

    /// Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::East => "东",
            Self::South => "南",
            Self::West => "西",
            Self::North => "北",
            Self::Center => "中央",
            Self::Corners => "四隅",
        }
    }

    /// Compass bearing in degrees (North = 0), or `None` for the
    /// center and corners.
    pub const fn bearing_deg(self) -> Option<u16> {
        match self {
            Self::North => Some(0),
            Self::East => Some(90),
            Self::South => Some(180),
            Self::West => Some(270),
            Self::Center | Self::Corners => None,
        }
    }

    /// Swap North and South; every other direction is returned unchanged.
    pub const fn flip_north_south(self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            other => other,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = LiurenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "east" | "e" | "东" => Ok(Self::East),
            "south" | "s" | "南" => Ok(Self::South),
            "west" | "w" | "西" => Ok(Self::West),
            "north" | "n" | "北" => Ok(Self::North),
            "center" | "centre" | "中" | "中央" => Ok(Self::Center),
            "corners" | "四隅" => Ok(Self::Corners),
            _ => Err(LiurenError::unknown("direction", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_only_touches_north_south() {
        assert_eq!(Direction::North.flip_north_south(), Direction::South);
        assert_eq!(Direction::South.flip_north_south(), Direction::North);
        for d in [
            Direction::East,
            Direction::West,
            Direction::Center,
            Direction::Corners,
        ] {
            assert_eq!(d.flip_north_south(), d);
        }
    }

    #[test]
    fn bearings() {
        assert_eq!(Direction::South.bearing_deg(), Some(180));
        assert_eq!(Direction::Center.bearing_deg(), None);
    }
}
