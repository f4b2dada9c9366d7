//! Phenology energy months for the reversed hemisphere.
//!
//! In the reversed hemisphere the plain half-year shift can be refined by
//! reading local seasonal signs: each Gregorian month in Melbourne maps to
//! the lunar "energy month" whose season it resembles, with a state to
//! lean on and a short action tip.

use serde::Serialize;

use crate::element::Element;
use crate::region::{Hemisphere, Region};
use crate::six_state::SixState;

/// One row of the energy-month table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnergyMonth {
    /// Gregorian month (1-12).
    pub gregorian_month: u8,
    /// Seasonal signs observed in that month.
    pub phenology: &'static str,
    /// Lunar month whose energy the season matches.
    pub energy_month: u8,
    pub element: Element,
    /// State the tip is drawn from.
    pub tip_state: SixState,
    pub tip: &'static str,
}

const fn row(
    gregorian_month: u8,
    phenology: &'static str,
    energy_month: u8,
    element: Element,
    tip_state: SixState,
    tip: &'static str,
) -> EnergyMonth {
    EnergyMonth {
        gregorian_month,
        phenology,
        energy_month,
        element,
        tip_state,
        tip,
    }
}

/// Melbourne energy months, January first.
#[rustfmt::skip]
pub const MELBOURNE_ENERGY_MONTHS: [EnergyMonth; 12] = [
    row(1,  "Eucalyptus bark shedding, asphalt melting",             5,  Element::Fire,  SixState::SwiftJoy,     "seek heat/light"),
    row(2,  "Lawns brown like carpet",                               5,  Element::Fire,  SixState::RedMouth,     "avoid west sun"),
    row(3,  "Maple leaves turning red, 20-25°C",                     1,  Element::Wood,  SixState::GreatPeace,   "stay centered"),
    row(4,  "Oak leaves blocking roads, morning fog",                8,  Element::Metal, SixState::RedMouth,     "check sharp objects"),
    row(5,  "First frost whitens Dandenong",                         11, Element::Water, SixState::MinorFortune, "seek dark/damp"),
    row(6,  "Winter begins, frequent rain, rare frost in city",      11, Element::Water, SixState::MinorFortune, "check bathroom/kitchen sink"),
    row(7,  "Severe cold and rain, mountain snow, city morning frost", 11, Element::Water, SixState::Void,       "high closet/unused coat pockets"),
    row(8,  "Camellias blooming through frost",                      1,  Element::Wood,  SixState::MinorFortune, "look near new growth"),
    row(9,  "Pollen clouds over city",                               1,  Element::Wood,  SixState::GreatPeace,   "check usual places"),
    row(10, "Roses sprouting, sudden spring rain",                   1,  Element::Wood,  SixState::Lingering,    "check wet clothes"),
    row(11, "Plane tree fluff, sudden heatwave",                     5,  Element::Fire,  SixState::SwiftJoy,     "check vents"),
    row(12, "Extreme UV, eucalyptus leaves curling",                 5,  Element::Fire,  SixState::RedMouth,     "avoid metal structures"),
];

/// Energy month for a Gregorian month in `region`.
///
/// `None` in the reference hemisphere, where lunar months already match
/// the seasons, and for months outside 1..=12.
pub fn energy_month(region: Region, gregorian_month: u32) -> Option<&'static EnergyMonth> {
    match region.hemisphere() {
        Hemisphere::Reference => None,
        Hemisphere::Reversed => match gregorian_month {
            1..=12 => Some(&MELBOURNE_ENERGY_MONTHS[gregorian_month as usize - 1]),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::ALL_REGIONS;

    fn season_element(lunar_month: u8) -> Element {
        match (lunar_month - 1) / 3 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Metal,
            _ => Element::Water,
        }
    }

    #[test]
    fn table_is_in_month_order() {
        for (i, m) in MELBOURNE_ENERGY_MONTHS.iter().enumerate() {
            assert_eq!(m.gregorian_month as usize, i + 1);
            assert!((1..=12).contains(&m.energy_month));
        }
    }

    #[test]
    fn element_matches_energy_month_season() {
        for m in &MELBOURNE_ENERGY_MONTHS {
            assert_eq!(m.element, season_element(m.energy_month), "month {}", m.gregorian_month);
        }
    }

    #[test]
    fn reference_regions_have_no_energy_month() {
        for region in ALL_REGIONS {
            let got = energy_month(region, 6);
            match region.hemisphere() {
                Hemisphere::Reference => assert!(got.is_none(), "{region}"),
                Hemisphere::Reversed => assert!(got.is_some(), "{region}"),
            }
        }
    }

    #[test]
    fn melbourne_midwinter_is_water() {
        let july = energy_month(Region::Australia, 7).unwrap();
        assert_eq!(july.energy_month, 11);
        assert_eq!(july.element, Element::Water);
        assert_eq!(july.tip_state, SixState::Void);
    }

    #[test]
    fn out_of_range_month_is_none() {
        assert!(energy_month(Region::Australia, 0).is_none());
        assert!(energy_month(Region::Australia, 13).is_none());
    }
}
