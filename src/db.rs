use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Bots  (regexes/bots.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct BotEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub producer: Option<BotProducerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotProducerEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Operating Systems  (regexes/oss.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct OsEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// Clients  (regexes/client/*.yml)
//
// Every client file shares the browser schema; only browsers carry `engine`.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ClientEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub engine: Option<EngineRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineRef {
    #[serde(default)]
    pub default: Option<String>,
    /// Minimum browser version → engine name, in file order.
    #[serde(default)]
    pub versions: Option<IndexMap<String, String>>,
}

// ---------------------------------------------------------------------------
// Browser Engines  (regexes/client/browser_engine.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct EngineEntry {
    pub regex: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Device files  (regexes/device/*.yml)
//
// Format: top-level mapping  brand_name → DeviceBrandEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceBrandEntry {
    pub regex: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub models: Option<Vec<ModelEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    pub regex: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

/// Brand name → brand rules, in file order (first match wins).
pub type DeviceBrandMap = IndexMap<String, DeviceBrandEntry>;

// ---------------------------------------------------------------------------
// Vendor Fragments  (regexes/vendorfragments.yml)
//
// Format: top-level mapping  brand_name → [fragment, ...]
// ---------------------------------------------------------------------------

/// Brand name → literal UA fragments, in file order (first brand wins).
pub type VendorFragmentMap = IndexMap<String, Vec<String>>;

// ---------------------------------------------------------------------------
// RuleSet / RuleSource
// ---------------------------------------------------------------------------

/// Every rule category a detector is built from, already deserialized.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub bots: Vec<BotEntry>,
    pub oss: Vec<OsEntry>,
    pub browsers: Vec<ClientEntry>,
    pub browser_engines: Vec<EngineEntry>,
    pub feed_readers: Vec<ClientEntry>,
    pub mobile_apps: Vec<ClientEntry>,
    pub media_players: Vec<ClientEntry>,
    pub pims: Vec<ClientEntry>,
    pub libraries: Vec<ClientEntry>,
    pub televisions: DeviceBrandMap,
    pub consoles: DeviceBrandMap,
    pub car_browsers: DeviceBrandMap,
    pub cameras: DeviceBrandMap,
    pub portable_media_players: DeviceBrandMap,
    pub mobiles: DeviceBrandMap,
    pub vendor_fragments: VendorFragmentMap,
}

/// Where a detector's rules come from.
pub trait RuleSource {
    fn load(&self) -> Result<RuleSet>;
}

impl RuleSource for RuleSet {
    fn load(&self) -> Result<RuleSet> {
        Ok(self.clone())
    }
}

/// The `regexes/` directory of a Matomo device-detector checkout.
///
/// Expected layout: `bots.yml`, `oss.yml`, `vendorfragments.yml`, and the
/// `client/` and `device/` subdirectories. Every file is required.
#[derive(Debug, Clone)]
pub struct YamlDir {
    root: PathBuf,
}

impl YamlDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RuleSource for YamlDir {
    fn load(&self) -> Result<RuleSet> {
        let dir = &self.root;
        let client_dir = dir.join("client");
        let device_dir = dir.join("device");

        Ok(RuleSet {
            bots: load_yaml(&dir.join("bots.yml"))?,
            oss: load_yaml(&dir.join("oss.yml"))?,
            browsers: load_yaml(&client_dir.join("browsers.yml"))?,
            browser_engines: load_yaml(&client_dir.join("browser_engine.yml"))?,
            feed_readers: load_yaml(&client_dir.join("feed_readers.yml"))?,
            mobile_apps: load_yaml(&client_dir.join("mobile_apps.yml"))?,
            media_players: load_yaml(&client_dir.join("mediaplayers.yml"))?,
            pims: load_yaml(&client_dir.join("pim.yml"))?,
            libraries: load_yaml(&client_dir.join("libraries.yml"))?,
            televisions: load_yaml(&device_dir.join("televisions.yml"))?,
            consoles: load_yaml(&device_dir.join("consoles.yml"))?,
            car_browsers: load_yaml(&device_dir.join("car_browsers.yml"))?,
            cameras: load_yaml(&device_dir.join("cameras.yml"))?,
            portable_media_players: load_yaml(&device_dir.join("portable_media_player.yml"))?,
            mobiles: load_yaml(&device_dir.join("mobiles.yml"))?,
            vendor_fragments: load_yaml(&dir.join("vendorfragments.yml"))?,
        })
    }
}

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
        path: path.to_owned(),
        source,
    })
}
