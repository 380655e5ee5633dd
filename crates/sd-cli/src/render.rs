use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use sd_mechanics::{SaveEntry, SaveOutcome, SaveRequest};

/// Print a boxed table with one row per creature and a summary line.
pub fn pretty(request: &SaveRequest, outcomes: &[SaveOutcome]) {
    println!(
        "  {} {} save vs DC {} {}",
        "Area damage".bold(),
        request.ability(),
        request.dc(),
        format!("(success factor {})", request.success_factor()).dimmed()
    );
    println!();

    let mut header = vec!["Creature".to_string(), "Total".to_string()];
    header.extend(request.damage().iter().map(|d| format!("{d} dmg")));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);

    for outcome in outcomes {
        let mut row = vec![outcome.creature.clone(), outcome.total_damage.to_string()];
        row.extend(outcome.entries.iter().map(format_entry));
        table.add_row(row);
    }

    for column in table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");
    println!();

    let total: u64 = outcomes.iter().map(|o| o.total_damage).sum();
    let made: usize = outcomes.iter().map(SaveOutcome::saves_made).sum();
    let attempted: usize = outcomes.iter().map(|o| o.entries.len()).sum();
    println!(
        "  {total} damage dealt to {} creatures, {made}/{attempted} saves made",
        outcomes.len()
    );
}

fn format_entry(entry: &SaveEntry) -> String {
    let mark = if entry.saved { "saved" } else { "failed" };
    format!("{} {mark} ({})", entry.roll, entry.damage_taken)
}

/// Serialize the run parameters and every outcome as pretty JSON.
pub fn json(request: &SaveRequest, outcomes: &[SaveOutcome]) -> Result<String, String> {
    let doc = serde_json::json!({
        "ability": request.ability(),
        "dc": request.dc(),
        "damage": request.damage(),
        "success_factor": request.success_factor(),
        "outcomes": outcomes,
    });
    serde_json::to_string_pretty(&doc).map_err(|e| format!("failed to encode JSON: {e}"))
}
