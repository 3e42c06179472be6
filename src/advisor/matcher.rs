use crate::advisor::{GatePolicy, MatchedItem};
use crate::dataset::{Dungeon, Weapon};
use crate::errors::PlannerError;
use crate::taxonomy::{StatTaxonomy, StatTier};

/// Decide whether a weapon's advanced targets can drop in a dungeon.
///
/// Every target stat is classified first, so an unclassified stat fails the
/// whole computation even when the weapon would not have matched. Returns
/// `None` when the dungeon cannot supply the weapon.
pub fn match_weapon(
    weapon: &Weapon,
    dungeon: &Dungeon,
    taxonomy: &StatTaxonomy,
    policy: GatePolicy,
) -> Result<Option<MatchedItem>, PlannerError> {
    let mut target_attributes = Vec::new();
    let mut target_skills = Vec::new();
    let mut base_advice = Vec::new();
    let mut advanced_advice = Vec::new();

    for stat in &weapon.target_stats {
        match taxonomy.tier_of(stat)? {
            StatTier::Base => base_advice.push(stat.clone()),
            StatTier::Attribute => {
                target_attributes.push(stat.as_str());
                advanced_advice.push(stat.clone());
            }
            StatTier::Skill => {
                target_skills.push(stat.as_str());
                advanced_advice.push(stat.clone());
            }
        }
    }

    let obtainable = match policy {
        GatePolicy::FirstOccurrence => {
            target_attributes
                .first()
                .is_none_or(|stat| dungeon.has_attribute(stat))
                && target_skills
                    .first()
                    .is_none_or(|stat| dungeon.has_skill(stat))
        }
        GatePolicy::AllAdvanced => {
            target_attributes
                .iter()
                .all(|stat| dungeon.has_attribute(stat))
                && target_skills.iter().all(|stat| dungeon.has_skill(stat))
        }
    };

    if !obtainable {
        return Ok(None);
    }

    let matched_stats = weapon
        .target_stats
        .iter()
        .filter(|stat| dungeon.drops(stat))
        .cloned()
        .collect();

    Ok(Some(MatchedItem {
        weapon: weapon.clone(),
        matched_stats,
        base_advice,
        advanced_advice,
    }))
}
