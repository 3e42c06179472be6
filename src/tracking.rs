// The user's tracked weapon list and its persistence

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::dataset::Weapon;
use crate::errors::PlannerError;

const TRACKED_FILE_NAME: &str = "tracked.json";

/// Set of weapon names the user wants to farm for.
///
/// Serializes as a plain JSON array of names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedSet {
    names: BTreeSet<String>,
}

impl TrackedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns false if it was already tracked.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Remove a name. Returns false if it was not tracked.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    /// Track the name if absent, untrack it if present. Returns whether the
    /// name is tracked afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Drop names that are not in the catalog, returning the removed names.
    pub fn retain_known(&mut self, catalog: &[Weapon]) -> Vec<String> {
        let (known, unknown): (BTreeSet<String>, BTreeSet<String>) = std::mem::take(&mut self.names)
            .into_iter()
            .partition(|name| catalog.iter().any(|w| &w.name == name));
        self.names = known;
        unknown.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TrackedSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Trait defining the interface for tracked set persistence
pub trait TrackedSetStorage {
    /// Load the persisted tracked set, empty if nothing was saved yet
    fn load(&self) -> Result<TrackedSet, PlannerError>;

    /// Persist the tracked set, replacing any previous state
    fn save(&mut self, tracked: &TrackedSet) -> Result<(), PlannerError>;
}

/// JSON file implementation of tracked set persistence
pub struct FileTrackedSetStorage {
    path: PathBuf,
}

impl FileTrackedSetStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage in the default application data directory
    pub fn new_default() -> Result<Self, PlannerError> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf, PlannerError> {
        let data_dir = dirs::data_dir().ok_or(PlannerError::NoConfigDir)?;
        Ok(data_dir.join("farming-advisor").join(TRACKED_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrackedSetStorage for FileTrackedSetStorage {
    fn load(&self) -> Result<TrackedSet, PlannerError> {
        if !self.path.exists() {
            debug!("No tracked weapons file at {:?}, starting empty", self.path);
            return Ok(TrackedSet::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| PlannerError::TrackedSetIOError { source: e })?;
        serde_json::from_str(&content)
            .map_err(|e| PlannerError::TrackedSetSerializeError { source: e })
    }

    fn save(&mut self, tracked: &TrackedSet) -> Result<(), PlannerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| PlannerError::TrackedSetIOError { source: e })?;
            }
        }

        let content = serde_json::to_string_pretty(tracked)
            .map_err(|e| PlannerError::TrackedSetSerializeError { source: e })?;
        fs::write(&self.path, content).map_err(|e| PlannerError::TrackedSetIOError { source: e })?;
        info!("Saved {} tracked weapons to {:?}", tracked.len(), self.path);
        Ok(())
    }
}
