use crate::parser::Rule;
use crate::types::{BotProducer, ClientType, DeviceType};
use crate::version::version_ge;

#[derive(Debug)]
pub(crate) struct BotData {
    pub name: String,
    pub category: Option<String>,
    pub url: Option<String>,
    pub producer: Option<BotProducer>,
}

#[derive(Debug)]
pub(crate) struct OsData {
    pub name: String,
    pub version_template: Option<String>,
}

#[derive(Debug)]
pub(crate) struct ClientData {
    pub kind: ClientType,
    pub name: String,
    pub version_template: Option<String>,
    pub engine: Option<EngineHint>,
}

/// Engine named by a browser rule: a default plus `(min version, engine)`
/// thresholds in file order.
#[derive(Debug, Default)]
pub(crate) struct EngineHint {
    pub default: Option<String>,
    pub thresholds: Vec<(String, String)>,
}

impl EngineHint {
    /// Engine for `browser_version`; the last threshold reached wins. Empty
    /// when neither the default nor any threshold applies.
    pub fn pick(&self, browser_version: &str) -> &str {
        let reached = if browser_version.is_empty() {
            None
        } else {
            self.thresholds
                .iter()
                .rev()
                .find(|(min, _)| version_ge(browser_version, min))
        };
        reached
            .map(|(_, engine)| engine.as_str())
            .or(self.default.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug)]
pub(crate) struct EngineData {
    pub name: String,
    /// Extracts the engine version from the UA once the engine is known.
    pub version_rule: Rule,
}

#[derive(Debug)]
pub(crate) struct DeviceBrandData {
    /// Short code, or the verbatim name for brands outside the brand table.
    pub brand: String,
    pub model_template: Option<String>,
    pub device_type: Option<DeviceType>,
    /// Tried in order once the brand rule matched.
    pub models: Vec<Rule<DeviceModelData>>,
}

#[derive(Debug)]
pub(crate) struct DeviceModelData {
    pub brand: Option<String>,
    pub model_template: Option<String>,
    pub device_type: Option<DeviceType>,
}
