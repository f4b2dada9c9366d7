mod config;
mod error;
mod report;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use liuren_base::{
    BirthDate, CalendarDate, Element, Region, SixState, ZodiacSign, hint_bucket, is_year_covered,
    relate, resolve, resolve_all_hours, resolve_birth_date, zodiac_hint,
};
use liuren_time::{FrozenClock, LocalTime, RegionClock, SystemClock, checked_hour_block_index};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use error::CliError;
use report::{
    DivineReport, HintReport, HoursReport, PhenologyReport, RegionsReport, RelateReport,
    TableReport, ZodiacReport, emit,
};

#[derive(Parser)]
#[command(name = "liuren", about = "Xiao Liu Ren divination CLI")]
struct Cli {
    /// TOML file with default region, seed and log filter
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Month, day and hour states for a lunar date
    Divine {
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
        /// Hour-block index (0-11, 0 = 23:00-01:00)
        #[arg(long, conflicts_with_all = ["hour", "at"])]
        hour_block: Option<u8>,
        /// Local clock hour (0-23)
        #[arg(long, conflicts_with = "at")]
        hour: Option<u32>,
        /// UTC instant to read the region clock at (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        /// Region name (china, japan, germany, australia)
        #[arg(long)]
        region: Option<Region>,
    },
    /// Hour state for each of the twelve blocks of a lunar date
    Hours {
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
        /// Region name
        #[arg(long)]
        region: Option<Region>,
    },
    /// Zodiac sign for a Gregorian birth date
    Zodiac {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: BirthDate,
    },
    /// Relation of one element to another
    Relate {
        /// Source element
        from: Element,
        /// Target element
        to: Element,
    },
    /// Relation of a state to all twelve signs
    Table {
        /// State name or ring position (0-5)
        #[arg(long)]
        state: SixState,
    },
    /// Short hint for a state read against a sign
    Hint {
        /// State name or ring position (0-5)
        #[arg(long)]
        state: SixState,
        /// Zodiac sign
        #[arg(long)]
        sign: ZodiacSign,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Melbourne phenology energy-month table
    Phenology {
        /// Gregorian month (1-12); all months when omitted
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: Option<u8>,
    },
    /// List supported regions
    Regions,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    init_tracing(cli.verbose, config.log_filter.as_deref());
    debug!(?config, "config loaded");

    match cli.command {
        Commands::Divine {
            month,
            day,
            hour_block,
            hour,
            at,
            region,
        } => {
            let region = config.region(region);
            let (block, local_time) =
                select_hour_block(&SystemClock, region, hour_block, hour, at)?;
            let date = CalendarDate::checked(month, day, block)?;
            let result = resolve(date, region);
            emit(&DivineReport::new(&result, local_time), cli.json)
        }

        Commands::Hours { month, day, region } => {
            let region = config.region(region);
            let date = CalendarDate::checked(month, day, 0)?;
            let states = resolve_all_hours(date, region);
            emit(&HoursReport::new(region, month, day, states), cli.json)
        }

        Commands::Zodiac { birth } => {
            let result = resolve_birth_date(birth);
            let report = ZodiacReport::new(birth, result, is_year_covered(birth.year));
            emit(&report, cli.json)
        }

        Commands::Relate { from, to } => {
            let report = RelateReport {
                from,
                to,
                relation: relate(from, to),
            };
            emit(&report, cli.json)
        }

        Commands::Table { state } => emit(&TableReport::new(state), cli.json),

        Commands::Hint { state, sign, seed } => {
            let seed = config.seed(seed);
            let mut rng = match seed {
                Some(s) => ChaCha8Rng::seed_from_u64(s),
                None => ChaCha8Rng::seed_from_u64(rand::random()),
            };
            let report = HintReport {
                state,
                sign,
                bucket: hint_bucket(state, sign),
                seed,
                hint: zodiac_hint(state, sign, &mut rng),
            };
            emit(&report, cli.json)
        }

        Commands::Phenology { month } => emit(&PhenologyReport::new(month), cli.json),

        Commands::Regions => emit(&RegionsReport::all(), cli.json),
    }
}

/// Hour block for `divine`: an explicit block wins, then a clock hour,
/// then the region clock read at `at` or, failing that, from `clock`.
fn select_hour_block(
    clock: &dyn RegionClock,
    region: Region,
    hour_block: Option<u8>,
    hour: Option<u32>,
    at: Option<DateTime<Utc>>,
) -> Result<(u8, Option<LocalTime>), CliError> {
    if let Some(block) = hour_block {
        return Ok((block, None));
    }
    if let Some(h) = hour {
        return Ok((checked_hour_block_index(h)?, None));
    }
    let now = match at {
        Some(instant) => FrozenClock::new(instant).now(region)?,
        None => clock.now(region)?,
    };
    Ok((now.hour_block_index(), Some(now)))
}

/// `-v` forces debug; otherwise `RUST_LOG`, then the config filter, then `warn`.
fn init_tracing(verbose: bool, configured: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or("warn")))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::CommandFactory;
    use liuren_time::TimeError;

    fn frozen(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> FrozenClock {
        FrozenClock::new(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn divine_parses_names() {
        let cli = Cli::try_parse_from([
            "liuren", "divine", "--month", "8", "--day", "15", "--hour-block", "6", "--region",
            "au",
        ])
        .unwrap();
        match cli.command {
            Commands::Divine {
                month,
                day,
                hour_block,
                region,
                ..
            } => {
                assert_eq!((month, day, hour_block), (8, 15, Some(6)));
                assert_eq!(region, Some(Region::Australia));
            }
            _ => panic!("expected divine"),
        }
    }

    #[test]
    fn hour_flags_conflict() {
        let res = Cli::try_parse_from([
            "liuren", "divine", "--month", "1", "--day", "1", "--hour-block", "2", "--hour", "3",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn unknown_region_rejected() {
        let res = Cli::try_parse_from([
            "liuren", "hours", "--month", "1", "--day", "1", "--region", "mars",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["liuren", "regions", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn relate_and_hint_parse() {
        let cli = Cli::try_parse_from(["liuren", "relate", "wood", "火"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Relate {
                from: Element::Wood,
                to: Element::Fire
            }
        ));
        let cli = Cli::try_parse_from([
            "liuren", "hint", "--state", "0", "--sign", "horse", "--seed", "3",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Hint {
                state: SixState::GreatPeace,
                sign: ZodiacSign::Horse,
                seed: Some(3)
            }
        ));
    }

    #[test]
    fn phenology_month_is_range_checked() {
        let cli = Cli::try_parse_from(["liuren", "phenology", "--month", "7"]).unwrap();
        assert!(matches!(cli.command, Commands::Phenology { month: Some(7) }));
        assert!(Cli::try_parse_from(["liuren", "phenology", "--month", "13"]).is_err());
        let cli = Cli::try_parse_from(["liuren", "phenology"]).unwrap();
        assert!(matches!(cli.command, Commands::Phenology { month: None }));
    }

    #[test]
    fn birth_date_parsed_by_clap() {
        let cli = Cli::try_parse_from(["liuren", "zodiac", "--birth", "2024-01-15"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Zodiac { birth } if birth == BirthDate::new(2024, 1, 15)
        ));
        assert!(Cli::try_parse_from(["liuren", "zodiac", "--birth", "2024/01/15"]).is_err());
    }

    // ---------------------------------------------------------------------------
    // Hour-block selection
    // ---------------------------------------------------------------------------

    #[test]
    fn explicit_block_ignores_clock() {
        let clock = frozen(2024, 7, 1, 11, 30);
        let (block, local) =
            select_hour_block(&clock, Region::Germany, Some(3), None, None).unwrap();
        assert_eq!(block, 3);
        assert!(local.is_none());
    }

    #[test]
    fn clock_hour_maps_to_block() {
        let clock = frozen(2024, 7, 1, 0, 0);
        let (block, local) =
            select_hour_block(&clock, Region::China, None, Some(13), None).unwrap();
        assert_eq!(block, 7);
        assert!(local.is_none());

        let err = select_hour_block(&clock, Region::China, None, Some(24), None).unwrap_err();
        assert!(matches!(err, CliError::Time(TimeError::HourOutOfRange(24))));
    }

    #[test]
    fn at_instant_reads_zone_with_daylight_saving() {
        // the passed clock is ignored when an instant is given
        let clock = frozen(2000, 1, 1, 0, 0);
        let at = Utc.with_ymd_and_hms(2024, 7, 1, 11, 30, 0).unwrap();
        let (block, local) =
            select_hour_block(&clock, Region::Germany, None, None, Some(at)).unwrap();
        let local = local.unwrap();
        assert_eq!((local.hour, local.minute), (13, 30));
        assert_eq!(block, 7);
    }

    #[test]
    fn no_flags_read_region_clock() {
        // 23:30 AEDT in Melbourne
        let clock = frozen(2024, 1, 10, 12, 30);
        let (block, local) =
            select_hour_block(&clock, Region::Australia, None, None, None).unwrap();
        assert_eq!(block, 0);
        assert_eq!(local.unwrap().hour, 23);
    }
}
