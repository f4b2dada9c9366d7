//! Short hints for a state read against a zodiac sign.
//!
//! The element relation between the state and the sign picks one of three
//! template buckets; a template is then drawn uniformly from the bucket
//! using a caller-supplied random source and filled with the state's
//! directions.

use rand::Rng;
use serde::Serialize;

use crate::element::{Classification, relate};
use crate::six_state::SixState;
use crate::zodiac::ZodiacSign;

/// Template bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintBucket {
    /// Generation in either direction.
    Generate,
    /// Control in either direction.
    Restrain,
    /// Same element, or no relation.
    Same,
}

const GENERATE_TEMPLATES: [&str; 4] = [
    "Timing is right, {direction} direction may bring assistance",
    "Energy aligns well, seek opportunities in the {direction}",
    "Go with the flow, {direction} is favorable",
    "Fortune favors you, pay attention to the {direction}",
];

const RESTRAIN_TEMPLATES: [&str; 4] = [
    "Patience advised, {alt_direction} may offer alternatives",
    "Take it slow, observe the {alt_direction} first",
    "Stillness is wisdom now, {alt_direction} holds other chances",
    "Step back for now, {alt_direction} is more stable",
];

const SAME_TEMPLATES: [&str; 3] = [
    "Steady as it goes, proceed normally",
    "Neither rush nor delay, let nature take its course",
    "Balance is key, act from your center",
];

impl HintBucket {
    pub const fn from_classification(c: Classification) -> HintBucket {
        match c {
            Classification::Generates | Classification::GeneratedBy => Self::Generate,
            Classification::Controls | Classification::ControlledBy => Self::Restrain,
            Classification::Identical | Classification::Neutral => Self::Same,
        }
    }

    /// Raw templates, with `{direction}` and `{alt_direction}` placeholders.
    pub const fn templates(self) -> &'static [&'static str] {
        match self {
            Self::Generate => &GENERATE_TEMPLATES,
            Self::Restrain => &RESTRAIN_TEMPLATES,
            Self::Same => &SAME_TEMPLATES,
        }
    }
}

/// Bucket for a state read against a sign.
pub fn hint_bucket(state: SixState, sign: ZodiacSign) -> HintBucket {
    HintBucket::from_classification(relate(state.relation_element(), sign.element()).classification)
}

/// Fill a template with the state's primary and alternate directions.
pub fn render_template(template: &str, state: SixState) -> String {
    template
        .replace("{direction}", state.primary_direction().name())
        .replace("{alt_direction}", state.alternate_direction().name())
}

/// Draw a hint for `state` read against `sign`.
pub fn zodiac_hint<R: Rng + ?Sized>(state: SixState, sign: ZodiacSign, rng: &mut R) -> String {
    let templates = hint_bucket(state, sign).templates();
    let template = templates[rng.gen_range(0..templates.len())];
    render_template(template, state)
}
