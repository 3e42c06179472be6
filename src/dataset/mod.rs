// Static game dataset: stat categories, weapon catalog and dungeon list

pub mod loader;
pub mod types;

pub use loader::DatasetLoader;
pub use types::{Dataset, Dungeon, StatCategory, StatDatabase, Weapon};
