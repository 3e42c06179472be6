// Text and JSON-lines output for recommendations

use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::PlannerError;
use crate::advisor::Recommendation;

pub const EMPTY_STATE_MESSAGE: &str =
    "Nothing to farm. Track some weapons to get dungeon recommendations.";

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Include dungeons where no tracked weapon forms a scheme
    pub show_empty_schemes: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_empty_schemes: true,
        }
    }
}

/// Render recommendations as a plain-text report.
pub fn render_text<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    options: ReportOptions,
) -> Result<(), PlannerError> {
    write_report(out, recommendations, options)
        .map_err(|e| PlannerError::ReportWriteError { source: e })
}

fn write_report<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    options: ReportOptions,
) -> std::io::Result<()> {
    let shown = recommendations
        .iter()
        .filter(|r| options.show_empty_schemes || !r.schemes.is_empty())
        .collect_vec();

    if shown.is_empty() {
        return writeln!(out, "{}", EMPTY_STATE_MESSAGE);
    }

    for recommendation in shown {
        writeln!(
            out,
            "== {} ({} weapons)",
            recommendation.location.name,
            recommendation.member_count()
        )?;
        for member in &recommendation.members {
            writeln!(
                out,
                "   {:<28} {:<14} {}★",
                member.weapon.name, member.weapon.category, member.weapon.rarity
            )?;
        }

        for scheme in &recommendation.schemes {
            writeln!(out, "   -- scheme {} [score {}]", scheme.id, scheme.score)?;
            writeln!(out, "      lock:  {}", scheme.locked_advanced.iter().join(" / "))?;
            if !scheme.locked_base.is_empty() {
                writeln!(out, "      base:  {}", scheme.locked_base.iter().join(", "))?;
            }
            writeln!(out, "      farms: {}", scheme.member_names().join(", "))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Write one JSON object per recommendation.
pub fn write_json_lines(path: &Path, recommendations: &[Recommendation]) -> Result<(), PlannerError> {
    serde_jsonlines::write_json_lines(path, recommendations)
        .map_err(|e| PlannerError::ReportWriteError { source: e })?;
    info!(
        "Wrote {} recommendations to {:?}",
        recommendations.len(),
        path
    );
    Ok(())
}
