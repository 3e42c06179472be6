// Entities of the static game dataset

use serde::{Deserialize, Serialize};

/// A named group of stat identifiers belonging to one tier.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StatCategory {
    /// Display name of the category (e.g., "Base Stats")
    pub name: String,
    /// Stat identifiers in dataset order
    pub stats: Vec<String>,
}

/// The three stat categories of the taxonomy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StatDatabase {
    pub base: StatCategory,
    pub attrs: StatCategory,
    pub skills: StatCategory,
}

/// A weapon the player may want to farm upgrade materials for.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Weapon {
    /// Unique weapon name
    pub name: String,
    /// Rarity tier (number of stars)
    pub rarity: u32,
    /// Weapon category (sword, polearm, ...)
    #[serde(rename = "type")]
    pub category: String,
    /// Stats this weapon wants, in priority order
    #[serde(rename = "targets")]
    pub target_stats: Vec<String>,
}

/// A farming location and the advanced stats it can drop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    /// Unique dungeon name
    pub name: String,
    /// Attribute-tier stats obtainable here
    #[serde(rename = "attrs")]
    pub attribute_stats: Vec<String>,
    /// Skill-tier stats obtainable here
    #[serde(rename = "skills")]
    pub skill_stats: Vec<String>,
}

impl Dungeon {
    pub fn has_attribute(&self, stat: &str) -> bool {
        self.attribute_stats.iter().any(|s| s == stat)
    }

    pub fn has_skill(&self, stat: &str) -> bool {
        self.skill_stats.iter().any(|s| s == stat)
    }

    /// Whether the stat drops here in either advanced tier.
    pub fn drops(&self, stat: &str) -> bool {
        self.has_attribute(stat) || self.has_skill(stat)
    }
}

/// The full static dataset document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Dataset {
    #[serde(rename = "APP_VERSION", default)]
    pub app_version: String,
    #[serde(rename = "LAST_UPDATE", default)]
    pub last_update: String,
    #[serde(rename = "DATABASE")]
    pub database: StatDatabase,
    #[serde(rename = "WEAPONS")]
    pub weapons: Vec<Weapon>,
    #[serde(rename = "DUNGEONS")]
    pub dungeons: Vec<Dungeon>,
}

impl Dataset {
    /// Find a weapon by its exact name.
    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }
}
