use log::debug;

use crate::dataset::Weapon;
use crate::tracking::TrackedSet;

/// Resolve tracked names to catalog weapons, in catalog order.
///
/// Names that match nothing in the catalog are dropped silently.
pub fn resolve<'a>(tracked: &TrackedSet, catalog: &'a [Weapon]) -> Vec<&'a Weapon> {
    let resolved: Vec<&Weapon> = catalog
        .iter()
        .filter(|weapon| tracked.contains(&weapon.name))
        .collect();

    if resolved.len() < tracked.len() {
        for name in tracked
            .iter()
            .filter(|name| !catalog.iter().any(|w| w.name == *name))
        {
            debug!("Ignoring tracked weapon not in catalog: {}", name);
        }
    }

    resolved
}
