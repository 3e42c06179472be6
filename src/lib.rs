// Library interface for farming-advisor
// This allows integration tests to access internal modules

pub mod advisor;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod evaluator;
pub mod inventory;
pub mod report;
pub mod taxonomy;
pub mod tracking;

// Re-export commonly used types
pub use advisor::{FarmingAdvisor, GatePolicy, MatchedItem, Recommendation, Scheme};
pub use dataset::{Dataset, DatasetLoader, Dungeon, Weapon};
pub use errors::PlannerError;
pub use taxonomy::{StatTaxonomy, StatTier};
pub use tracking::{FileTrackedSetStorage, TrackedSet, TrackedSetStorage};
