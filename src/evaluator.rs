// Scores a single rolled drop against one weapon's wanted stats

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::Weapon;
use crate::errors::PlannerError;
use crate::taxonomy::StatTaxonomy;

const PERFECT_SCORE: u32 = 100;
const EXCELLENT_SCORE: u32 = 60;

/// Outcome of comparing a drop with a weapon's targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Not enough stats entered yet to judge
    Pending,
    /// Every slot holds a wanted stat
    Perfect,
    /// Most slots hold wanted stats
    Excellent,
    Reject,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pending => write!(f, "PENDING"),
            Verdict::Perfect => write!(f, "PERFECT"),
            Verdict::Excellent => write!(f, "EXCELLENT"),
            Verdict::Reject => write!(f, "REJECT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Number of stat slots a drop has for this weapon
    pub slot_limit: usize,
    /// Rolled stats the weapon wants
    pub matches: usize,
    /// Percentage of slots matched, `None` while pending
    pub score: Option<u32>,
    pub verdict: Verdict,
}

/// Three-star weapons roll two stats, everything else rolls three.
pub fn slot_limit(weapon: &Weapon) -> usize {
    if weapon.rarity == 3 { 2 } else { 3 }
}

/// Score a rolled set of stats against a weapon.
///
/// The rolled stats must be distinct, known to the taxonomy and no more than
/// the weapon's slot limit.
pub fn evaluate(
    weapon: &Weapon,
    rolled: &[String],
    taxonomy: &StatTaxonomy,
) -> Result<Evaluation, PlannerError> {
    let limit = slot_limit(weapon);

    if rolled.len() > limit {
        return Err(PlannerError::InvalidUserInput {
            field: "stats".to_string(),
            reason: format!("{} accepts at most {} stats", weapon.name, limit),
        });
    }

    let mut seen = HashSet::new();
    for stat in rolled {
        taxonomy.tier_of(stat)?;
        if !seen.insert(stat.as_str()) {
            return Err(PlannerError::InvalidUserInput {
                field: "stats".to_string(),
                reason: format!("{} entered more than once", stat),
            });
        }
    }

    let matches = rolled
        .iter()
        .filter(|stat| weapon.target_stats.contains(stat))
        .count();

    if rolled.len() < limit {
        return Ok(Evaluation {
            slot_limit: limit,
            matches,
            score: None,
            verdict: Verdict::Pending,
        });
    }

    let score = ((matches as f64 / limit as f64) * 100.0).round() as u32;
    let verdict = if score >= PERFECT_SCORE {
        Verdict::Perfect
    } else if score >= EXCELLENT_SCORE {
        Verdict::Excellent
    } else {
        Verdict::Reject
    };

    Ok(Evaluation {
        slot_limit: limit,
        matches,
        score: Some(score),
        verdict,
    })
}
