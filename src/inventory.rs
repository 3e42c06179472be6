// Browsing filters over the weapon catalog

use itertools::Itertools;

use crate::dataset::Weapon;

/// Narrows the catalog by name, rarity and category.
///
/// Empty rarity or category lists accept every value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeaponFilter {
    pub search: String,
    pub rarities: Vec<u32>,
    pub categories: Vec<String>,
}

impl WeaponFilter {
    pub fn matches(&self, weapon: &Weapon) -> bool {
        weapon.name.contains(&self.search)
            && (self.rarities.is_empty() || self.rarities.contains(&weapon.rarity))
            && (self.categories.is_empty() || self.categories.contains(&weapon.category))
    }

    /// Weapons passing the filter, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a [Weapon]) -> Vec<&'a Weapon> {
        catalog.iter().filter(|w| self.matches(w)).collect()
    }
}

/// Distinct weapon categories in first-seen order.
pub fn weapon_categories(catalog: &[Weapon]) -> Vec<&str> {
    catalog.iter().map(|w| w.category.as_str()).unique().collect()
}

/// Distinct rarity tiers, highest first.
pub fn rarity_tiers(catalog: &[Weapon]) -> Vec<u32> {
    catalog
        .iter()
        .map(|w| w.rarity)
        .unique()
        .sorted_by(|a, b| b.cmp(a))
        .collect()
}
