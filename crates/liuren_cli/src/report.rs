//! Command output: one serializable report per command, printed as text
//! or as JSON.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use liuren_base::{
    ALL_HOUR_BLOCKS, BirthDate, Direction, DivinationResult, Element, ElementRelation,
    EnergyMonth, HintBucket, HourBlock, Luck, MELBOURNE_ENERGY_MONTHS, Region, SixState,
    ZodiacResult, ZodiacSign, energy_month, relationship_table,
};
use liuren_time::LocalTime;

use crate::error::CliError;

/// Print a report to stdout.
pub fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// One state as shown in a region.
#[derive(Debug, Clone, Serialize)]
pub struct StateCard {
    pub state: SixState,
    pub chinese: &'static str,
    pub element: Option<Element>,
    pub direction: Direction,
    pub luck: Luck,
    pub meaning: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub advice: &'static str,
}

impl StateCard {
    pub fn new(state: SixState, region: Region) -> Self {
        Self {
            state,
            chinese: state.chinese(),
            element: state.element(),
            direction: region.reverse_direction_if_needed(state.primary_direction()),
            luck: state.luck(),
            meaning: state.meaning(),
            color: state.color(),
            description: state.description(),
            advice: state.advice(),
        }
    }
}

impl Display for StateCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let element = self.element.map_or("none", Element::name);
        write!(
            f,
            "{} {} | {} | {} | {}",
            self.state,
            self.chinese,
            element,
            self.direction,
            self.luck.name()
        )
    }
}

// ---------------------------------------------------------------------------
// divine / hours
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DivineReport {
    pub region: Region,
    pub local_time: Option<LocalTime>,
    pub lunar_month: u8,
    pub display_month: u8,
    pub lunar_day: u8,
    pub hour_block: HourBlock,
    pub month: StateCard,
    pub day: StateCard,
    pub hour: StateCard,
    /// Seasonal refinement, when the region has one and the local date is known.
    pub energy_month: Option<&'static EnergyMonth>,
}

impl DivineReport {
    pub fn new(result: &DivinationResult, local_time: Option<LocalTime>) -> Self {
        let region = result.region;
        Self {
            region,
            local_time,
            lunar_month: result.date.lunar_month,
            display_month: region.display_month(result.date.lunar_month),
            lunar_day: result.date.lunar_day,
            hour_block: result.date.hour_block(),
            month: StateCard::new(result.month_state, region),
            day: StateCard::new(result.day_state, region),
            hour: StateCard::new(result.hour_state, region),
            energy_month: local_time.and_then(|t| energy_month(region, t.month)),
        }
    }
}

impl Display for DivineReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Region:     {} ({} hemisphere)",
            self.region,
            self.region.hemisphere().name()
        )?;
        if let Some(t) = &self.local_time {
            writeln!(f, "Local time: {t}")?;
        }
        writeln!(
            f,
            "Lunar date: month {}, day {}, {}",
            self.display_month, self.lunar_day, self.hour_block
        )?;
        writeln!(f, "Month:      {}", self.month)?;
        writeln!(f, "Day:        {}", self.day)?;
        writeln!(f, "Hour:       {}", self.hour)?;
        writeln!(f, "Answer:     {}", self.hour.meaning)?;
        writeln!(f, "            {}", self.hour.description)?;
        writeln!(f, "Advice:     {}", self.hour.advice)?;
        if let Some(m) = self.energy_month {
            writeln!(
                f,
                "Season:     {} -> energy month {} ({}), {}: {}",
                m.phenology,
                m.energy_month,
                m.element,
                m.tip_state.pinyin(),
                m.tip
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct HourRow {
    pub block: HourBlock,
    pub state: SixState,
    pub luck: Luck,
}

#[derive(Debug, Serialize)]
pub struct HoursReport {
    pub region: Region,
    pub lunar_month: u8,
    pub lunar_day: u8,
    pub hours: Vec<HourRow>,
}

impl HoursReport {
    pub fn new(region: Region, lunar_month: u8, lunar_day: u8, states: [SixState; 12]) -> Self {
        let hours = ALL_HOUR_BLOCKS
            .iter()
            .zip(states)
            .map(|(&block, state)| HourRow {
                block,
                state,
                luck: state.luck(),
            })
            .collect();
        Self {
            region,
            lunar_month,
            lunar_day,
            hours,
        }
    }
}

impl Display for HoursReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} lunar {}/{}",
            self.region,
            self.region.display_month(self.lunar_month),
            self.lunar_day
        )?;
        for row in &self.hours {
            writeln!(
                f,
                "  {:<20} {:<28} {}",
                row.block.to_string(),
                row.state.to_string(),
                row.luck.name()
            )?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// zodiac / relate / table / hint
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ZodiacReport {
    pub birth: BirthDate,
    pub sign: ZodiacSign,
    pub element: Element,
    pub lunar_year: i32,
    pub is_before_new_year: bool,
    /// False when the year is outside the New Year table.
    pub boundary_checked: bool,
}

impl ZodiacReport {
    pub fn new(birth: BirthDate, result: ZodiacResult, boundary_checked: bool) -> Self {
        Self {
            birth,
            sign: result.sign,
            element: result.element(),
            lunar_year: result.lunar_year,
            is_before_new_year: result.is_before_new_year,
            boundary_checked,
        }
    }
}

impl Display for ZodiacReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}: {} ({}), {}, lunar year {}",
            self.birth,
            self.sign,
            self.sign.chinese(),
            self.element,
            self.lunar_year
        )?;
        if self.is_before_new_year {
            writeln!(f, "  born before that year's Lunar New Year")?;
        }
        if !self.boundary_checked {
            writeln!(f, "  note: year outside New Year table, boundary not applied")?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RelateReport {
    pub from: Element,
    pub to: Element,
    pub relation: ElementRelation,
}

impl Display for RelateReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} -> {}: {} ({}, score {}) {}",
            self.from,
            self.to,
            self.relation.classification.name(),
            self.relation.favorability.name(),
            self.relation.score,
            self.relation.label
        )
    }
}

#[derive(Debug, Serialize)]
pub struct TableRow {
    pub sign: ZodiacSign,
    pub sign_element: Element,
    pub relation: ElementRelation,
}

#[derive(Debug, Serialize)]
pub struct TableReport {
    pub state: SixState,
    pub element: Element,
    pub rows: Vec<TableRow>,
}

impl TableReport {
    pub fn new(state: SixState) -> Self {
        let rows = relationship_table(state)
            .into_iter()
            .map(|(sign, relation)| TableRow {
                sign,
                sign_element: sign.element(),
                relation,
            })
            .collect();
        Self {
            state,
            element: state.relation_element(),
            rows,
        }
    }
}

impl Display for TableReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} as {}", self.state, self.element)?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:<8} {:<6} {:>4}  {}",
                row.sign.name(),
                row.sign_element.name(),
                row.relation.score,
                row.relation.label
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct HintReport {
    pub state: SixState,
    pub sign: ZodiacSign,
    pub bucket: HintBucket,
    pub seed: Option<u64>,
    pub hint: String,
}

impl Display for HintReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.hint)
    }
}

// ---------------------------------------------------------------------------
// phenology
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PhenologyReport {
    pub months: Vec<&'static EnergyMonth>,
}

impl PhenologyReport {
    /// One month, or the whole year when `month` is `None`.
    pub fn new(month: Option<u8>) -> Self {
        let months = MELBOURNE_ENERGY_MONTHS
            .iter()
            .filter(|m| month.is_none_or(|wanted| m.gregorian_month == wanted))
            .collect();
        Self { months }
    }
}

impl Display for PhenologyReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for m in &self.months {
            writeln!(
                f,
                "{:>2}  {:<56} {:>2} {:<6} {} - {}",
                m.gregorian_month,
                m.phenology,
                m.energy_month,
                m.element.name(),
                m.tip_state.pinyin(),
                m.tip
            )?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// regions
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RegionRow {
    pub region: Region,
    pub timezone: &'static str,
    pub utc_offset_hours: i32,
    pub hemisphere: &'static str,
    pub starting_state: SixState,
}

#[derive(Debug, Serialize)]
pub struct RegionsReport {
    pub regions: Vec<RegionRow>,
}

impl RegionsReport {
    pub fn all() -> Self {
        let regions = Region::all()
            .iter()
            .map(|&region| RegionRow {
                region,
                timezone: region.timezone(),
                utc_offset_hours: region.standard_utc_offset_hours(),
                hemisphere: region.hemisphere().name(),
                starting_state: region.starting_state(),
            })
            .collect();
        Self { regions }
    }
}

impl Display for RegionsReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.regions {
            writeln!(
                f,
                "{:<10} {:<20} UTC{:+03}  {:<9} starts at {}",
                row.region.name(),
                row.timezone,
                row.utc_offset_hours,
                row.hemisphere,
                row.starting_state
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liuren_base::{CalendarDate, resolve, resolve_all_hours};

    #[test]
    fn divine_report_flips_direction_in_reversed_region() {
        // month 1 from 5 → 5, day 1 → 5, block 3 (count 4) → 2 (Swift Joy, South)
        let r = resolve(CalendarDate::new(1, 1, 3), Region::Australia);
        let report = DivineReport::new(&r, None);
        assert_eq!(report.hour.state, SixState::SwiftJoy);
        assert_eq!(report.hour.direction, Direction::North);
        assert_eq!(report.display_month, 7);
    }

    #[test]
    fn divine_report_json_shape() {
        let r = resolve(CalendarDate::new(8, 15, 6), Region::China);
        let value = serde_json::to_value(DivineReport::new(&r, None)).unwrap();
        assert_eq!(value["region"], "china");
        assert_eq!(value["hour_block"], "wu");
        assert_eq!(value["hour"]["state"], "red_mouth");
        assert_eq!(value["local_time"], serde_json::Value::Null);
    }

    #[test]
    fn hours_report_pairs_blocks_in_order() {
        let states = resolve_all_hours(CalendarDate::new(3, 5, 0), Region::Japan);
        let report = HoursReport::new(Region::Japan, 3, 5, states);
        assert_eq!(report.hours.len(), 12);
        assert_eq!(report.hours[0].block, HourBlock::Zi);
        assert_eq!(report.hours[11].block, HourBlock::Hai);
        assert_eq!(report.hours[4].state, states[4]);
    }

    #[test]
    fn table_report_for_void() {
        let report = TableReport::new(SixState::Void);
        assert_eq!(report.element, Element::Earth);
        assert_eq!(report.rows.len(), 12);
        assert_eq!(report.rows[0].sign, ZodiacSign::Rat);
    }

    #[test]
    fn state_card_carries_color_and_advice() {
        let card = StateCard::new(SixState::MinorFortune, Region::China);
        assert_eq!(card.color, "Black/Blue");
        assert_eq!(card.advice, SixState::MinorFortune.advice());
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["color"], "Black/Blue");
    }

    #[test]
    fn divine_report_adds_season_for_reversed_region() {
        let local = LocalTime {
            region: Region::Australia,
            year: 2024,
            month: 7,
            day: 1,
            hour: 10,
            minute: 0,
        };
        let r = resolve(CalendarDate::new(5, 26, 5), Region::Australia);
        let report = DivineReport::new(&r, Some(local));
        let season = report.energy_month.unwrap();
        assert_eq!(season.energy_month, 11);
        assert!(report.to_string().contains("energy month 11"));

        let r = resolve(CalendarDate::new(5, 26, 5), Region::China);
        let report = DivineReport::new(&r, Some(LocalTime { region: Region::China, ..local }));
        assert!(report.energy_month.is_none());
    }

    #[test]
    fn divine_report_without_clock_has_no_season() {
        let r = resolve(CalendarDate::new(5, 26, 5), Region::Australia);
        assert!(DivineReport::new(&r, None).energy_month.is_none());
    }

    #[test]
    fn phenology_report_filters_month() {
        assert_eq!(PhenologyReport::new(None).months.len(), 12);
        let one = PhenologyReport::new(Some(3));
        assert_eq!(one.months.len(), 1);
        assert_eq!(one.months[0].tip_state, SixState::GreatPeace);
        assert!(PhenologyReport::new(Some(13)).months.is_empty());
    }

    #[test]
    fn regions_text_lists_all() {
        let text = RegionsReport::all().to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("Australia/Melbourne"));
        assert!(text.contains("UTC+10"));
    }
}
