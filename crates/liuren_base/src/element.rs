//! Five elements (wu xing) and the pairwise relation between them.
//!
//! Classification is derived from the two traditional cycles:
//! - generation: Wood → Fire → Earth → Metal → Water → Wood
//! - control: Wood → Earth → Water → Fire → Metal → Wood
//!
//! Favorability and score are weighted per ordered pair. The weighting is
//! not uniform within a classification (Wood feeding Fire scores 120, Fire
//! feeding Earth only 85), so it lives in an explicit table.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LiurenError;
use crate::util::normalize_name;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generation order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (feeds).
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls. Control skips one step along the
    /// generation cycle.
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// All five elements in generation order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = LiurenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "wood" | "mu" | "木" => Ok(Self::Wood),
            "fire" | "huo" | "火" => Ok(Self::Fire),
            "earth" | "tu" | "土" => Ok(Self::Earth),
            "metal" | "jin" | "金" => Ok(Self::Metal),
            "water" | "shui" | "水" => Ok(Self::Water),
            _ => Err(LiurenError::unknown("element", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// How the first element of an ordered pair relates to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Same element (bi he).
    Identical,
    /// First feeds second.
    Generates,
    /// Second feeds first.
    GeneratedBy,
    /// First controls second.
    Controls,
    /// Second controls first.
    ControlledBy,
    /// No table entry for the pair.
    Neutral,
}

impl Classification {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::Generates => "generates",
            Self::GeneratedBy => "generated by",
            Self::Controls => "controls",
            Self::ControlledBy => "controlled by",
            Self::Neutral => "neutral",
        }
    }
}

/// Classify the ordered pair `(a, b)` from the two cycles.
///
/// With five elements every pair lands in exactly one non-neutral bucket.
pub const fn classify(a: Element, b: Element) -> Classification {
    let (ai, bi) = (a.index(), b.index());
    if ai == bi {
        Classification::Identical
    } else if a.generates().index() == bi {
        Classification::Generates
    } else if b.generates().index() == ai {
        Classification::GeneratedBy
    } else if a.controls().index() == bi {
        Classification::Controls
    } else if b.controls().index() == ai {
        Classification::ControlledBy
    } else {
        Classification::Neutral
    }
}

// ---------------------------------------------------------------------------
// Weighted relation
// ---------------------------------------------------------------------------

/// Directional favorability of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Favorability {
    Good,
    Bad,
    Neutral,
}

impl Favorability {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
        }
    }
}

/// Full relation of one element to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementRelation {
    pub classification: Classification,
    pub favorability: Favorability,
    /// Compatibility score; 75 is neutral, the table spans 55..=120.
    pub score: u16,
    /// Short English description, e.g. "Wood feeds Fire (Lucky)".
    pub label: &'static str,
}

/// Score assigned to a pair with no table entry.
pub const NEUTRAL_SCORE: u16 = 75;

/// Result for any pair missing from the weight table.
pub const NEUTRAL_RELATION: ElementRelation = ElementRelation {
    classification: Classification::Neutral,
    favorability: Favorability::Neutral,
    score: NEUTRAL_SCORE,
    label: "Neutral",
};

struct PairWeight {
    a: Element,
    b: Element,
    favorability: Favorability,
    score: u16,
    label: &'static str,
}

const fn w(
    a: Element,
    b: Element,
    favorability: Favorability,
    score: u16,
    label: &'static str,
) -> PairWeight {
    PairWeight {
        a,
        b,
        favorability,
        score,
        label,
    }
}

const HARMONY: &str = "Harmony (Very Lucky)";

#[rustfmt::skip]
const PAIR_WEIGHTS: [PairWeight; 25] = {
    use Favorability::{Bad, Good};
    use Element::*;
    [
        w(Wood, Wood, Good, 100, HARMONY),
        w(Wood, Fire, Good, 120, "Wood feeds Fire (Lucky)"),
        w(Wood, Earth, Bad, 60, "Wood controls Earth (Unlucky)"),
        w(Wood, Metal, Bad, 55, "Metal controls Wood (Unlucky)"),
        w(Wood, Water, Good, 110, "Water feeds Wood (Lucky)"),

        w(Fire, Wood, Good, 120, "Wood feeds Fire (Lucky)"),
        w(Fire, Fire, Good, 115, HARMONY),
        w(Fire, Earth, Good, 85, "Fire feeds Earth (Lucky)"),
        w(Fire, Metal, Bad, 55, "Fire controls Metal (Unlucky)"),
        w(Fire, Water, Bad, 70, "Water controls Fire (Unlucky)"),

        w(Earth, Wood, Bad, 60, "Wood controls Earth (Unlucky)"),
        w(Earth, Fire, Good, 90, "Fire feeds Earth (Lucky)"),
        w(Earth, Earth, Good, 100, HARMONY),
        w(Earth, Metal, Good, 85, "Earth feeds Metal (Lucky)"),
        w(Earth, Water, Bad, 65, "Earth controls Water (Unlucky)"),

        w(Metal, Wood, Bad, 55, "Metal controls Wood (Unlucky)"),
        w(Metal, Fire, Bad, 55, "Fire controls Metal (Unlucky)"),
        w(Metal, Earth, Good, 80, "Earth feeds Metal (Lucky)"),
        w(Metal, Metal, Good, 100, HARMONY),
        w(Metal, Water, Good, 85, "Metal feeds Water (Lucky)"),

        w(Water, Wood, Good, 110, "Water feeds Wood (Lucky)"),
        w(Water, Fire, Bad, 70, "Water controls Fire (Unlucky)"),
        w(Water, Earth, Bad, 65, "Earth controls Water (Unlucky)"),
        w(Water, Metal, Good, 80, "Metal feeds Water (Lucky)"),
        w(Water, Water, Good, 100, HARMONY),
    ]
};

/// Relate element `a` (the state side) to element `b` (the sign side).
///
/// Pairs without a weight entry fall back to [`NEUTRAL_RELATION`] rather
/// than failing.
pub fn relate(a: Element, b: Element) -> ElementRelation {
    match PAIR_WEIGHTS.iter().find(|p| p.a == a && p.b == b) {
        Some(p) => ElementRelation {
            classification: classify(a, b),
            favorability: p.favorability,
            score: p.score,
            label: p.label,
        },
        None => NEUTRAL_RELATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generation_is_single_cycle() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        for a in ALL_ELEMENTS {
            let fed_by: Vec<_> = ALL_ELEMENTS.iter().filter(|b| b.generates() == a).collect();
            assert_eq!(fed_by.len(), 1, "{a} must be generated by exactly one element");
        }
    }

    #[test]
    fn control_is_distinct_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
        for a in ALL_ELEMENTS {
            assert_ne!(a.controls(), a.generates());
        }
    }

    #[test]
    fn classification_inverts_with_order() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let expected = match classify(a, b) {
                    Classification::Generates => Classification::GeneratedBy,
                    Classification::GeneratedBy => Classification::Generates,
                    Classification::Controls => Classification::ControlledBy,
                    Classification::ControlledBy => Classification::Controls,
                    other => other,
                };
                assert_eq!(classify(b, a), expected, "{a} / {b}");
            }
        }
    }

    #[test]
    fn good_favorability_never_on_control() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let r = relate(a, b);
                match r.classification {
                    Classification::Controls | Classification::ControlledBy => {
                        assert_eq!(r.favorability, Favorability::Bad, "{a} / {b}")
                    }
                    _ => assert_eq!(r.favorability, Favorability::Good, "{a} / {b}"),
                }
            }
        }
    }

    #[test]
    fn fire_harmony_is_weighted_higher() {
        assert_eq!(relate(Element::Fire, Element::Fire).score, 115);
        assert_eq!(relate(Element::Wood, Element::Wood).score, 100);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Metal".parse::<Element>().unwrap(), Element::Metal);
        assert_eq!("水".parse::<Element>().unwrap(), Element::Water);
        assert!("aether".parse::<Element>().is_err());
    }
}
