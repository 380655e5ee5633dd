use sd_mechanics::{RngRoller, Roster, SaveRequest, format_report, resolve_all};

use crate::{Cli, OutputFormat, render};

/// Load the roster, roll every creature's saves and print the result.
///
/// Everything is validated before the first line is printed.
pub fn run(cli: Cli) -> Result<(), String> {
    let success_factor = if cli.evade {
        SaveRequest::EVADE
    } else {
        cli.success_factor.unwrap_or(SaveRequest::HALF_DAMAGE)
    };

    let request = SaveRequest::new(cli.stat, cli.dc, cli.dmg)
        .and_then(|r| r.with_success_factor(success_factor))
        .map_err(|e| e.to_string())?
        .with_bless(cli.bless)
        .with_bane(cli.bane)
        .with_buff_source(cli.buff_source);

    let roster = Roster::load(&cli.roster).map_err(|e| e.to_string())?;

    let mut roller = match cli.seed {
        Some(seed) => RngRoller::seeded(seed),
        None => RngRoller::from_entropy(),
    };
    let outcomes = resolve_all(roster.creatures(), &request, &mut roller);
    tracing::debug!(
        creatures = outcomes.len(),
        seed = ?cli.seed,
        "all saves resolved"
    );

    match cli.format {
        OutputFormat::Table => print!("{}", format_report(request.damage(), &outcomes)),
        OutputFormat::Pretty => render::pretty(&request, &outcomes),
        OutputFormat::Json => println!("{}", render::json(&request, &outcomes)?),
    }

    Ok(())
}
