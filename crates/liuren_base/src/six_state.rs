//! The six states (liu shen) of the Xiao Liu Ren ring.
//!
//! Positions 0..=5 in fixed order starting from Great Peace. Each state
//! carries an element, a primary and alternate direction, a display
//! heading, and a luck tag. The void state (Kong Wang) has no display
//! element but relates to other elements as Earth.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::element::Element;
use crate::error::LiurenError;
use crate::util::normalize_name;

/// The six states in ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SixState {
    /// Da An 大安.
    GreatPeace,
    /// Liu Lian 留连.
    Lingering,
    /// Su Xi 速喜.
    SwiftJoy,
    /// Chi Kou 赤口.
    RedMouth,
    /// Xiao Ji 小吉.
    MinorFortune,
    /// Kong Wang 空亡.
    Void,
}

/// All six states in ring order (index 0 = Great Peace, 5 = Void).
pub const ALL_SIX_STATES: [SixState; 6] = [
    SixState::GreatPeace,
    SixState::Lingering,
    SixState::SwiftJoy,
    SixState::RedMouth,
    SixState::MinorFortune,
    SixState::Void,
];

/// Luck tag of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Luck {
    Favorable,
    Mixed,
    Unfavorable,
}

impl Luck {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Favorable => "Favorable",
            Self::Mixed => "Mixed",
            Self::Unfavorable => "Unfavorable",
        }
    }
}

impl SixState {
    /// Ring position (GreatPeace=0 .. Void=5).
    pub const fn index(self) -> u8 {
        match self {
            Self::GreatPeace => 0,
            Self::Lingering => 1,
            Self::SwiftJoy => 2,
            Self::RedMouth => 3,
            Self::MinorFortune => 4,
            Self::Void => 5,
        }
    }

    /// State at a ring position, reduced modulo 6.
    pub const fn from_index(position: u8) -> SixState {
        ALL_SIX_STATES[(position % 6) as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::GreatPeace => "Great Peace",
            Self::Lingering => "Lingering",
            Self::SwiftJoy => "Swift Joy",
            Self::RedMouth => "Red Mouth",
            Self::MinorFortune => "Minor Fortune",
            Self::Void => "The Void",
        }
    }

    /// Pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::GreatPeace => "Da An",
            Self::Lingering => "Liu Lian",
            Self::SwiftJoy => "Su Xi",
            Self::RedMouth => "Chi Kou",
            Self::MinorFortune => "Xiao Ji",
            Self::Void => "Kong Wang",
        }
    }

    /// Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::GreatPeace => "大安",
            Self::Lingering => "留连",
            Self::SwiftJoy => "速喜",
            Self::RedMouth => "赤口",
            Self::MinorFortune => "小吉",
            Self::Void => "空亡",
        }
    }

    /// Display element. `None` for the void state.
    pub const fn element(self) -> Option<Element> {
        match self {
            Self::GreatPeace => Some(Element::Wood),
            Self::Lingering => Some(Element::Earth),
            Self::SwiftJoy => Some(Element::Fire),
            Self::RedMouth => Some(Element::Metal),
            Self::MinorFortune => Some(Element::Water),
            Self::Void => None,
        }
    }

    /// Element used when relating this state to a zodiac sign.
    ///
    /// Same as [`SixState::element`] except that the void state counts
    /// as Earth.
    pub const fn relation_element(self) -> Element {
        match self.element() {
            Some(e) => e,
            None => Element::Earth,
        }
    }

    /// Primary direction, substituted into hints as `{direction}`.
    pub const fn primary_direction(self) -> Direction {
        match self {
            Self::GreatPeace => Direction::East,
            Self::Lingering => Direction::Center,
            Self::SwiftJoy => Direction::South,
            Self::RedMouth => Direction::West,
            Self::MinorFortune => Direction::North,
            Self::Void => Direction::Center,
        }
    }

    /// Alternate direction, substituted into hints as `{alt_direction}`.
    pub const fn alternate_direction(self) -> Direction {
        match self {
            Self::GreatPeace => Direction::North,
            Self::Lingering => Direction::South,
            Self::SwiftJoy => Direction::East,
            Self::RedMouth => Direction::Center,
            Self::MinorFortune => Direction::West,
            Self::Void => Direction::East,
        }
    }

    /// Heading shown next to the state; the void state points to the
    /// four corners.
    pub const fn heading(self) -> Direction {
        match self {
            Self::Void => Direction::Corners,
            other => other.primary_direction(),
        }
    }

    pub const fn luck(self) -> Luck {
        match self {
            Self::GreatPeace | Self::SwiftJoy | Self::MinorFortune => Luck::Favorable,
            Self::Lingering => Luck::Mixed,
            Self::RedMouth | Self::Void => Luck::Unfavorable,
        }
    }

    /// Short traditional reading.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::GreatPeace => "Stability, success",
            Self::Lingering => "Waiting, patience",
            Self::SwiftJoy => "Speed, good news",
            Self::RedMouth => "Disputes, tension",
            Self::MinorFortune => "Small gains, assistance",
            Self::Void => "Emptiness, uncertainty",
        }
    }

    /// Traditional color.
    pub const fn color(self) -> &'static str {
        match self {
            Self::GreatPeace => "Cyan/Green",
            Self::Lingering => "Yellow",
            Self::SwiftJoy => "Red",
            Self::RedMouth => "White",
            Self::MinorFortune => "Black/Blue",
            Self::Void => "Gray",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::GreatPeace => "The energy suggests stillness and harmony",
            Self::Lingering => "The energy suggests delay and contemplation",
            Self::SwiftJoy => "The energy suggests swift, favorable movement",
            Self::RedMouth => "The energy suggests friction and discord",
            Self::MinorFortune => "The energy suggests gentle blessing and support",
            Self::Void => "The energy suggests absence and ambiguity",
        }
    }

    /// Modern reading of the state as practical advice.
    pub const fn advice(self) -> &'static str {
        match self {
            Self::GreatPeace => "Environments aligned: calm, stable, grounded spaces",
            Self::Lingering => "Patience is required; revisit later",
            Self::SwiftJoy => "Decisive and swift actions are supported",
            Self::RedMouth => "Avoid confrontations; practice caution with words",
            Self::MinorFortune => "Subtle opportunities; seek quiet, reflective spaces",
            Self::Void => "Unfavorable timing; consider postponing",
        }
    }

    /// All six states in ring order.
    pub const fn all() -> &'static [SixState; 6] {
        &ALL_SIX_STATES
    }
}

impl Display for SixState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.pinyin(), self.name())
    }
}

impl FromStr for SixState {
    type Err = LiurenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_name(s);
        if let Ok(pos) = key.parse::<u8>() {
            if pos < 6 {
                return Ok(Self::from_index(pos));
            }
        }
        match key.as_str() {
            "daan" | "greatpeace" | "大安" => Ok(Self::GreatPeace),
            "liulian" | "lingering" | "留连" => Ok(Self::Lingering),
            "suxi" | "swiftjoy" | "速喜" => Ok(Self::SwiftJoy),
            "chikou" | "redmouth" | "conflict" | "赤口" => Ok(Self::RedMouth),
            "xiaoji" | "minorfortune" | "小吉" => Ok(Self::MinorFortune),
            "kongwang" | "void" | "thevoid" | "空亡" => Ok(Self::Void),
            _ => Err(LiurenError::unknown("state", s)),
        }
    }
}
