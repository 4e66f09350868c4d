use serde::{Serialize, Serializer};

use super::{ClientType, DeviceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Arm,
    X64,
    X86,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arm => "ARM",
            Self::X64 => "x64",
            Self::X86 => "x86",
        }
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsMatchResult {
    pub name: String,
    /// Unique short code (`AND`, `WIN`, ...), `UNK` for names outside the OS table.
    pub short_name: String,
    pub version: String,
    pub platform: Option<Platform>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientMatchResult {
    #[serde(rename = "type")]
    pub kind: ClientType,
    pub name: String,
    /// Browser short code; empty for non-browser clients.
    pub short_name: String,
    pub version: String,
    pub engine: String,
    pub engine_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceMatchResult {
    #[serde(rename = "type")]
    pub kind: Option<DeviceType>,
    /// Two-letter brand code (see [`crate::tables::brand_name`]).
    pub brand: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotMatchResult {
    pub name: String,
    pub category: Option<String>,
    pub url: Option<String>,
    pub producer: Option<BotProducer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotProducer {
    pub name: Option<String>,
    pub url: Option<String>,
}
