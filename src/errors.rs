// Error types for farming-advisor

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum PlannerError {
    // Stat taxonomy integrity errors
    #[snafu(display("Stat {stat} is not classified as base, attribute or skill"))]
    UnclassifiedStat { stat: String },
    #[snafu(display("Stat {stat} is declared in more than one tier"))]
    DuplicateStat { stat: String },

    // Dataset loading and validation errors
    #[snafu(display("Weapon {name} appears more than once in the dataset"))]
    DuplicateWeapon { name: String },
    #[snafu(display("Dungeon {name} appears more than once in the dataset"))]
    DuplicateDungeon { name: String },
    #[snafu(display("Error reading dataset file"))]
    DatasetIOError { source: io::Error },
    #[snafu(display("Error parsing dataset file: {source}"))]
    DatasetParseError { source: serde_json::Error },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file: {source}"))]
    ConfigSerializeError { source: serde_json::Error },

    // Tracked set persistence errors
    #[snafu(display("Error reading or writing tracked weapons file"))]
    TrackedSetIOError { source: io::Error },
    #[snafu(display("Error serializing tracked weapons file: {source}"))]
    TrackedSetSerializeError { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },
    #[snafu(display("Unknown weapon: {name}"))]
    UnknownWeapon { name: String },

    // Report output errors
    #[snafu(display("Error writing recommendation report"))]
    ReportWriteError { source: io::Error },
}
