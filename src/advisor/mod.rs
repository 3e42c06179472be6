use log::debug;
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Dungeon, Weapon};
use crate::errors::PlannerError;
use crate::taxonomy::StatTaxonomy;
use crate::tracking::TrackedSet;

pub mod catalog;
pub mod matcher;
pub mod schemes;


pub use catalog::resolve;
pub use matcher::match_weapon;
pub use schemes::{LOCKED_BASE_SLOTS, Scheme, build_schemes, rank_base_stats};

/// How a weapon's advanced targets gate which dungeons can supply it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatePolicy {
    /// Only the first attribute target and the first skill target must drop
    #[default]
    FirstOccurrence,
    /// Every attribute and skill target must drop
    AllAdvanced,
}

impl std::fmt::Display for GatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatePolicy::FirstOccurrence => write!(f, "first"),
            GatePolicy::AllAdvanced => write!(f, "all"),
        }
    }
}

/// A tracked weapon that can be farmed at a given dungeon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedItem {
    pub weapon: Weapon,
    /// Targets that drop at this dungeon, in target order
    pub matched_stats: Vec<String>,
    /// Base-tier targets, in target order
    pub base_advice: Vec<String>,
    /// Attribute and skill targets, in target order
    pub advanced_advice: Vec<String>,
}

/// Everything the advisor found for one dungeon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub location: Dungeon,
    /// Every tracked weapon obtainable here, in catalog order
    pub members: Vec<MatchedItem>,
    /// Schemes sorted by descending score
    pub schemes: Vec<Scheme>,
}

impl Recommendation {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Computes farming recommendations over a loaded dataset.
///
/// Holds no state between calls: every [`FarmingAdvisor::recommend`] builds
/// its result from scratch out of the dataset and the given tracked set.
pub struct FarmingAdvisor<'a> {
    dataset: &'a Dataset,
    taxonomy: StatTaxonomy,
    policy: GatePolicy,
}

impl<'a> FarmingAdvisor<'a> {
    /// Build the taxonomy and check that every stat a dungeon drops is
    /// classified.
    pub fn new(dataset: &'a Dataset) -> Result<Self, PlannerError> {
        let taxonomy = StatTaxonomy::from_database(&dataset.database)?;
        for dungeon in &dataset.dungeons {
            for stat in dungeon.attribute_stats.iter().chain(&dungeon.skill_stats) {
                taxonomy.tier_of(stat)?;
            }
        }

        Ok(Self {
            dataset,
            taxonomy,
            policy: GatePolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    pub fn taxonomy(&self) -> &StatTaxonomy {
        &self.taxonomy
    }

    /// Match the tracked weapons against every dungeon and group them into
    /// schemes.
    ///
    /// Dungeons with no obtainable weapon are left out. The rest are ordered
    /// by descending member count, ties in dataset order. An empty tracked
    /// set yields an empty result.
    pub fn recommend(&self, tracked: &TrackedSet) -> Result<Vec<Recommendation>, PlannerError> {
        if tracked.is_empty() {
            return Ok(Vec::new());
        }

        let weapons = resolve(tracked, &self.dataset.weapons);
        let mut recommendations = Vec::new();

        for dungeon in &self.dataset.dungeons {
            let members = weapons
                .iter()
                .filter_map(|weapon| {
                    match_weapon(weapon, dungeon, &self.taxonomy, self.policy).transpose()
                })
                .collect::<Result<Vec<_>, _>>()?;

            if members.is_empty() {
                continue;
            }

            let schemes = build_schemes(&dungeon.name, &members);
            debug!(
                "{}: {} matched weapons, {} schemes",
                dungeon.name,
                members.len(),
                schemes.len()
            );
            recommendations.push(Recommendation {
                location: dungeon.clone(),
                members,
                schemes,
            });
        }

        rank_locations(&mut recommendations);
        Ok(recommendations)
    }
}

/// Order dungeons by descending member count, keeping input order on ties.
pub fn rank_locations(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| b.member_count().cmp(&a.member_count()));
}

/// One-shot recommendation without keeping an advisor around.
pub fn recommend(
    dataset: &Dataset,
    tracked: &TrackedSet,
    policy: GatePolicy,
) -> Result<Vec<Recommendation>, PlannerError> {
    FarmingAdvisor::new(dataset)?
        .with_policy(policy)
        .recommend(tracked)
}
