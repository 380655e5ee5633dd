//! Fixed-width text report of save outcomes.
//!
//! ```text
//!                     13    17
//! Goblin Boss   23    22     3
//! Goblin        21     9    17
//! ```
//!
//! The header row lists the damage amounts over blank name and total
//! columns. Each creature row holds its name, total damage taken and the
//! save roll made against each damage amount.

use crate::save::SaveOutcome;

const SPACER: &str = "   ";
const MIN_ROLL_WIDTH: usize = 3;

/// Column widths for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    /// Width of the name column (longest name).
    pub name_width: usize,
    /// Width of the total damage column (longest total).
    pub total_width: usize,
    /// Width of each damage/roll column.
    pub roll_widths: Vec<usize>,
}

impl ReportLayout {
    /// Size every column to the widest value it has to show.
    pub fn measure(damage: &[u32], outcomes: &[SaveOutcome]) -> Self {
        let name_width = outcomes
            .iter()
            .map(|o| o.creature.chars().count())
            .max()
            .unwrap_or(0);
        let total_width = outcomes
            .iter()
            .map(|o| o.total_damage.to_string().len())
            .max()
            .unwrap_or(0);
        let roll_widths = damage
            .iter()
            .enumerate()
            .map(|(i, d)| {
                outcomes
                    .iter()
                    .filter_map(|o| o.entries.get(i))
                    .map(|e| e.roll.to_string().len())
                    .fold(d.to_string().len().max(MIN_ROLL_WIDTH), usize::max)
            })
            .collect();
        Self {
            name_width,
            total_width,
            roll_widths,
        }
    }
}

/// Render the report as newline-terminated lines.
pub fn format_report(damage: &[u32], outcomes: &[SaveOutcome]) -> String {
    let layout = ReportLayout::measure(damage, outcomes);
    let mut out = String::new();

    let mut line = format!(
        "{:<nw$}{SPACER}{:>tw$}",
        "",
        "",
        nw = layout.name_width,
        tw = layout.total_width
    );
    for (d, &w) in damage.iter().zip(&layout.roll_widths) {
        line.push_str(&format!("{SPACER}{d:>w$}"));
    }
    out.push_str(&line);
    out.push('\n');

    for outcome in outcomes {
        let mut line = format!(
            "{:<nw$}{SPACER}{:>tw$}",
            outcome.creature,
            outcome.total_damage,
            nw = layout.name_width,
            tw = layout.total_width
        );
        for (entry, &w) in outcome.entries.iter().zip(&layout.roll_widths) {
            line.push_str(&format!("{SPACER}{:>w$}", entry.roll));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}
