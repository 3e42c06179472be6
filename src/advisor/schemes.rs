use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::advisor::MatchedItem;

/// Number of base stat slots a scheme recommends locking.
pub const LOCKED_BASE_SLOTS: usize = 3;

/// A group of weapons at one dungeon that share a lockable advanced stat.
///
/// `locked_advanced` holds every candidate lock whose group was exactly
/// `members`; `locked_base` is an advisory ranking of the base stats most
/// often wanted by those members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    /// Stable identity derived from the dungeon and the sorted member names
    pub id: String,
    /// Up to [`LOCKED_BASE_SLOTS`] base stats, most wanted first
    pub locked_base: Vec<String>,
    /// Advanced stats that each select exactly this member set
    pub locked_advanced: Vec<String>,
    /// Weapons farmed by this scheme, in catalog order
    pub members: Vec<MatchedItem>,
    /// Member count at creation time
    pub score: usize,
}

impl Scheme {
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.weapon.name.as_str())
    }
}

/// Group the matched weapons of one dungeon into schemes.
///
/// Each distinct advanced stat is tried as a lock, in first-seen order. A
/// lock whose member set equals an existing scheme's is folded into that
/// scheme instead of creating a new one. The result is sorted by descending
/// score; ties keep discovery order.
pub fn build_schemes(location: &str, matched: &[MatchedItem]) -> Vec<Scheme> {
    let advanced: Vec<&MatchedItem> = matched
        .iter()
        .filter(|m| !m.advanced_advice.is_empty())
        .collect();

    let candidate_locks = advanced
        .iter()
        .flat_map(|m| m.advanced_advice.iter())
        .unique();

    let mut schemes: Vec<Scheme> = Vec::new();
    let mut scheme_by_key: HashMap<Vec<&str>, usize> = HashMap::new();

    for lock in candidate_locks {
        let group: Vec<&MatchedItem> = advanced
            .iter()
            .copied()
            .filter(|m| m.advanced_advice.contains(lock))
            .collect();
        if group.is_empty() {
            continue;
        }

        let key: Vec<&str> = group
            .iter()
            .map(|m| m.weapon.name.as_str())
            .sorted()
            .collect();

        if let Some(&index) = scheme_by_key.get(&key) {
            let scheme = &mut schemes[index];
            if !scheme.locked_advanced.contains(lock) {
                debug!("{}: folding {} into scheme {}", location, lock, scheme.id);
                scheme.locked_advanced.push(lock.clone());
            }
            continue;
        }

        let scheme = Scheme {
            id: scheme_id(location, &key),
            locked_base: rank_base_stats(&group),
            locked_advanced: vec![lock.clone()],
            score: group.len(),
            members: group.into_iter().cloned().collect(),
        };
        scheme_by_key.insert(key, schemes.len());
        schemes.push(scheme);
    }

    schemes.sort_by(|a, b| b.score.cmp(&a.score));
    schemes
}

/// `<location>::<names joined by '+'>`, with `\` and `+` inside a name
/// escaped so that distinct member sets never share an id.
fn scheme_id(location: &str, sorted_names: &[&str]) -> String {
    let members = sorted_names
        .iter()
        .map(|name| name.replace('\\', "\\\\").replace('+', "\\+"))
        .join("+");
    format!("{}::{}", location, members)
}

/// Rank base stats by how often the group wants them.
///
/// Ties keep first-seen order. At most [`LOCKED_BASE_SLOTS`] are returned.
pub fn rank_base_stats(group: &[&MatchedItem]) -> Vec<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for stat in group.iter().flat_map(|m| m.base_advice.iter()) {
        match tally.iter_mut().find(|(seen, _)| *seen == stat.as_str()) {
            Some((_, count)) => *count += 1,
            None => tally.push((stat.as_str(), 1)),
        }
    }

    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .take(LOCKED_BASE_SLOTS)
        .map(|(stat, _)| stat.to_string())
        .collect()
}
