use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dataset::StatDatabase;
use crate::errors::PlannerError;

/// Classification of a stat identifier.
///
/// Attribute and skill stats are the "advanced" tiers: they are what a
/// dungeon can be chosen for. Base stats are assumed to drop everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatTier {
    Base,
    Attribute,
    Skill,
}

impl StatTier {
    pub fn is_advanced(&self) -> bool {
        matches!(self, StatTier::Attribute | StatTier::Skill)
    }
}

impl std::fmt::Display for StatTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatTier::Base => write!(f, "Base"),
            StatTier::Attribute => write!(f, "Attribute"),
            StatTier::Skill => write!(f, "Skill"),
        }
    }
}

/// Static lookup from stat identifier to its tier.
#[derive(Debug, Clone, Default)]
pub struct StatTaxonomy {
    tiers: HashMap<String, StatTier>,
}

impl StatTaxonomy {
    /// Build the taxonomy from the three dataset categories.
    ///
    /// Tier sets must be disjoint: a stat listed in two categories is
    /// rejected with [`PlannerError::DuplicateStat`]. A stat repeated inside
    /// the same category is tolerated.
    pub fn from_database(database: &StatDatabase) -> Result<Self, PlannerError> {
        let mut tiers = HashMap::new();
        let categories = [
            (&database.base, StatTier::Base),
            (&database.attrs, StatTier::Attribute),
            (&database.skills, StatTier::Skill),
        ];

        for (category, tier) in categories {
            for stat in &category.stats {
                match tiers.insert(stat.clone(), tier) {
                    Some(previous) if previous != tier => {
                        return Err(PlannerError::DuplicateStat { stat: stat.clone() });
                    }
                    _ => {}
                }
            }
        }

        Ok(Self { tiers })
    }

    /// Tier of a stat, or [`PlannerError::UnclassifiedStat`] for anything
    /// outside the declared universe.
    pub fn tier_of(&self, stat: &str) -> Result<StatTier, PlannerError> {
        self.tiers
            .get(stat)
            .copied()
            .ok_or_else(|| PlannerError::UnclassifiedStat {
                stat: stat.to_string(),
            })
    }

    pub fn contains(&self, stat: &str) -> bool {
        self.tiers.contains_key(stat)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
