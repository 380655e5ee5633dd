//! CLI frontend for the area damage calculator.

mod calculate;
mod logging;
mod render;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use sd_mechanics::{Ability, BuffSource, MechError};

#[derive(Parser)]
#[command(
    name = "spell-dmg",
    about = "Roll saving throws for a roster of creatures caught in an area spell",
    version,
    after_help = "Examples:\n  spell-dmg DEX -dc 15 --dmg 13 17 --bless\n  spell-dmg WIS -dc 17 --dmg 2 --evade"
)]
struct Cli {
    /// Ability used for the save: STR, DEX, CON, INT, WIS or CHA
    #[arg(value_parser = parse_ability)]
    stat: Ability,

    /// Difficulty class, the same for every creature (also accepted as -dc)
    #[arg(long = "dc", default_value_t = 10, allow_negative_numbers = true)]
    dc: i32,

    /// Space-delimited damage amounts, one save each
    #[arg(long = "dmg", visible_alias = "damage", num_args = 1.., required = true)]
    dmg: Vec<u32>,

    /// Creatures take no damage on a successful save instead of half
    #[arg(short, long, conflicts_with = "success_factor")]
    evade: bool,

    /// Fraction of damage taken on a successful save (0.0 to 1.0)
    #[arg(long)]
    success_factor: Option<f64>,

    /// Every creature has bless (+d4 to saves)
    #[arg(short, long)]
    bless: bool,

    /// Every creature has bane (-d4 to saves)
    #[arg(short = 'n', long)]
    bane: bool,

    /// Which flags apply bless/bane: either, run, or creature
    #[arg(long, default_value = "either", value_parser = parse_buff_source)]
    buff_source: BuffSource,

    /// Roster file (YAML, or JSON with a .json extension)
    #[arg(short, long, default_value = "monsters.yaml")]
    roster: PathBuf,

    /// RNG seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Fixed-width columns of totals and rolls
    Table,
    /// Boxed table with save markers and a summary line
    Pretty,
    /// Machine-readable JSON
    Json,
}

fn parse_ability(s: &str) -> Result<Ability, String> {
    s.parse().map_err(|e: MechError| e.to_string())
}

fn parse_buff_source(s: &str) -> Result<BuffSource, String> {
    s.parse().map_err(|e: MechError| e.to_string())
}

/// Rewrite the single-dash `-dc` spelling into clap's `--dc`.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let rewritten = arg
                .to_str()
                .filter(|s| *s == "-dc" || s.starts_with("-dc="))
                .map(|s| format!("-{s}"));
            rewritten.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    logging::init(cli.verbose);

    if let Err(e) = calculate::run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
