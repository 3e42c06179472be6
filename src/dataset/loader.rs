// Loading and validation of the dataset document

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::dataset::types::Dataset;
use crate::errors::PlannerError;
use crate::taxonomy::{StatTaxonomy, StatTier};

/// Loader for the JSON dataset document.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Read, parse and validate a dataset file.
    pub fn load(path: &Path) -> Result<Dataset, PlannerError> {
        debug!("Loading dataset from {:?}", path);
        let content =
            fs::read_to_string(path).map_err(|e| PlannerError::DatasetIOError { source: e })?;
        let dataset = Self::from_json(&content)?;
        info!(
            "Loaded dataset {} ({} weapons, {} dungeons)",
            dataset.app_version,
            dataset.weapons.len(),
            dataset.dungeons.len()
        );
        Ok(dataset)
    }

    /// Parse and validate a dataset from a JSON string.
    pub fn from_json(content: &str) -> Result<Dataset, PlannerError> {
        let dataset: Dataset = serde_json::from_str(content)
            .map_err(|e| PlannerError::DatasetParseError { source: e })?;
        Self::validate(&dataset)?;
        Ok(dataset)
    }

    /// Check the integrity rules the advisor relies on.
    ///
    /// Duplicate names and unclassified stats are errors. A dungeon listing
    /// a stat under the wrong tier is only warned about, since it can still
    /// never satisfy the gate for that stat.
    pub fn validate(dataset: &Dataset) -> Result<(), PlannerError> {
        let taxonomy = StatTaxonomy::from_database(&dataset.database)?;

        let mut weapon_names = HashSet::new();
        for weapon in &dataset.weapons {
            if !weapon_names.insert(weapon.name.as_str()) {
                return Err(PlannerError::DuplicateWeapon {
                    name: weapon.name.clone(),
                });
            }
            for stat in &weapon.target_stats {
                taxonomy.tier_of(stat)?;
            }
        }

        let mut dungeon_names = HashSet::new();
        for dungeon in &dataset.dungeons {
            if !dungeon_names.insert(dungeon.name.as_str()) {
                return Err(PlannerError::DuplicateDungeon {
                    name: dungeon.name.clone(),
                });
            }
            for stat in &dungeon.attribute_stats {
                if taxonomy.tier_of(stat)? != StatTier::Attribute {
                    warn!(
                        "Dungeon {} lists {} as an attribute stat but it is not one",
                        dungeon.name, stat
                    );
                }
            }
            for stat in &dungeon.skill_stats {
                if taxonomy.tier_of(stat)? != StatTier::Skill {
                    warn!(
                        "Dungeon {} lists {} as a skill stat but it is not one",
                        dungeon.name, stat
                    );
                }
            }
        }

        Ok(())
    }
}
