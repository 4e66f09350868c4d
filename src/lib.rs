mod cache;
mod config;
mod db;
mod device_detector;
mod device_prefilter;
mod error;
pub mod families;
mod helpers;
mod inference;
mod parser;
mod parser_data;
mod substitution;
pub mod tables;
mod types;
mod version;

pub use cache::Cache;
pub use config::DetectorConfig;
pub use db::{
    BotEntry, BotProducerEntry, ClientEntry, DeviceBrandEntry, DeviceBrandMap, EngineEntry,
    EngineRef, ModelEntry, OsEntry, RuleSet, RuleSource, VendorFragmentMap, YamlDir,
};
pub use device_detector::DeviceDetector;
pub use error::{Error, Result};
pub use parser::{CapturedMatch, PatternOptions, Rule};
pub use substitution::UNKNOWN_NAME;
pub use types::*;
pub use version::VersionTruncation;
