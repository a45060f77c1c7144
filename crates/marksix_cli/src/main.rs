mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use marksix_base::{
    ALL_CATEGORY_KINDS, ALL_ELEMENTS, ALL_WAVES, ALL_ZODIAC_GROUPS, ALL_ZODIACS, Classifier,
    ClassifierConfig, Label, Locale, NumberProfile, Selector, category_values, checked_digit_root,
    element_numbers,
};
use tracing_subscriber::EnvFilter;

use crate::config::{FileConfig, Overrides};

#[derive(Parser)]
#[command(name = "marksix", about = "Mark Six number classification CLI", version)]
struct Cli {
    /// Config file (TOML); defaults to ./marksix.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Zodiac of the lunar year whose table is used (e.g. rabbit, 龙)
    #[arg(long, global = true)]
    year_zodiac: Option<String>,
    /// Lunar year (CE numbering) whose zodiac table is used
    #[arg(long, global = true)]
    year: Option<i32>,
    /// Label language: en or zh
    #[arg(long, global = true)]
    locale: Option<String>,
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Colour, zodiac and element of a number
    Classify {
        /// Ball number (1-49)
        #[arg(allow_negative_numbers = true)]
        number: i64,
        /// Print the full profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Digit root of a non-negative integer
    DigitRoot {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Numbers matching a category value, ascending
    Match {
        /// Category: element, wave, parity, size, combo, combined, tail,
        /// zodiac, zodiac-type, head, sum, code
        category: String,
        /// Value within the category (English key or Chinese label)
        value: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Fail on an unknown category or value instead of matching nothing
        #[arg(long)]
        strict: bool,
    },
    /// Profiles of all 49 numbers
    Grid {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one lookup table
    Table {
        #[arg(value_enum)]
        table: TableKind,
    },
    /// List categories and their values
    Categories,
}

#[derive(Clone, Copy, ValueEnum)]
enum TableKind {
    Zodiac,
    Element,
    Wave,
    Group,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn format_numbers(nums: &[u8]) -> String {
    nums.iter()
        .map(|n| format!("{n:02}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_profile(p: &NumberProfile, locale: Locale) -> String {
    format!(
        "{:02}  {:<6} {:<8} {:<6} {:<5} {:<6} head {}  tail {}  root {}  {}",
        p.number,
        p.color.label(locale),
        p.zodiac.label(locale),
        p.element.label(locale),
        p.parity.label(locale),
        p.size.label(locale),
        p.head,
        p.tail,
        p.digit_root,
        p.code.label(locale),
    )
}

fn print_table(classifier: &Classifier, table: TableKind, locale: Locale) {
    match table {
        TableKind::Zodiac => {
            let zodiacs = classifier.zodiac_table();
            for z in ALL_ZODIACS {
                println!("{}: {}", z.label(locale), format_numbers(&zodiacs.numbers_of(z)));
            }
        }
        TableKind::Element => {
            for e in ALL_ELEMENTS {
                println!("{}: {}", e.label(locale), format_numbers(&element_numbers(e)));
            }
        }
        TableKind::Wave => {
            let waves = classifier.wave_table();
            for w in ALL_WAVES {
                println!("{}: {}", w.label(locale), format_numbers(&waves.numbers_of(w)));
            }
        }
        TableKind::Group => {
            for g in ALL_ZODIAC_GROUPS {
                let members: Vec<&str> = g.members().iter().map(|z| z.label(locale)).collect();
                println!("{}: {}", g.label(locale), members.join(" "));
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let overrides = Overrides {
        year_zodiac: cli.year_zodiac,
        year: cli.year,
        locale: cli.locale,
    };
    let config: ClassifierConfig = config::resolve(&file, &overrides)?;
    let classifier = Classifier::from_config(&config);
    let locale = config.locale;

    match cli.command {
        Commands::Classify { number, json } => {
            let p = classifier
                .profile(number)
                .with_context(|| format!("cannot classify {number}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&p)?);
            } else {
                println!("number:  {:02}", p.number);
                println!("color:   {}", p.color.label(locale));
                println!("zodiac:  {}", p.zodiac.label(locale));
                println!("element: {}", p.element.label(locale));
            }
        }

        Commands::DigitRoot { number } => {
            println!("{}", checked_digit_root(number)?);
        }

        Commands::Match {
            category,
            value,
            json,
            strict,
        } => {
            let nums = if strict {
                classifier.select(&Selector::try_parse_str(&category, &value)?)
            } else {
                classifier.matching_numbers_str(&category, &value)
            };
            tracing::info!(%category, %value, count = nums.len(), "matched");
            if json {
                let out = serde_json::json!({
                    "category": category,
                    "value": value,
                    "numbers": nums,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if !nums.is_empty() {
                println!("{}", format_numbers(&nums));
            }
        }

        Commands::Grid { json } => {
            let grid = classifier.grid();
            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                for p in &grid {
                    println!("{}", format_profile(p, locale));
                }
            }
        }

        Commands::Table { table } => print_table(&classifier, table, locale),

        Commands::Categories => {
            for kind in ALL_CATEGORY_KINDS {
                println!("{}: {}", kind.name(), category_values(kind).join(" "));
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
