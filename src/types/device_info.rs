use serde::Serialize;

use super::{BotMatchResult, ClientMatchResult, ClientType, DeviceMatchResult, DeviceType, OsMatchResult};
use crate::tables;

/// Everything known about one UA.
///
/// Produced by [`DeviceDetector::parse`](crate::DeviceDetector::parse) and
/// immutable afterwards; this is also the unit stored in the result cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceInfo {
    user_agent: String,
    bot: Option<BotMatchResult>,
    os: Option<OsMatchResult>,
    client: Option<ClientMatchResult>,
    device: DeviceMatchResult,
    #[serde(skip)]
    signals: UaSignals,
}

impl DeviceInfo {
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn bot(&self) -> Option<&BotMatchResult> {
        self.bot.as_ref()
    }

    pub fn os(&self) -> Option<&OsMatchResult> {
        self.os.as_ref()
    }

    pub fn client(&self) -> Option<&ClientMatchResult> {
        self.client.as_ref()
    }

    pub fn device(&self) -> &DeviceMatchResult {
        &self.device
    }

    pub fn device_type(&self) -> Option<DeviceType> {
        self.device.kind
    }

    /// Two-letter brand code, empty when unknown.
    pub fn brand(&self) -> &str {
        &self.device.brand
    }

    /// Full brand name, empty when unknown.
    pub fn brand_name(&self) -> &str {
        tables::brand_name(&self.device.brand).unwrap_or(self.device.brand.as_str())
    }

    pub fn model(&self) -> &str {
        &self.device.model
    }

    pub fn os_family(&self) -> Option<&'static str> {
        self.os.as_ref().and_then(|os| tables::os_family(&os.short_name))
    }

    pub fn browser_family(&self) -> Option<&'static str> {
        self.client
            .as_ref()
            .filter(|c| c.kind == ClientType::Browser)
            .and_then(|c| tables::browser_family(&c.short_name))
    }

    pub fn is_bot(&self) -> bool {
        self.bot.is_some()
    }

    pub fn is_touch_enabled(&self) -> bool {
        self.signals.touch
    }

    pub fn has_android_mobile_fragment(&self) -> bool {
        self.signals.android_mobile
    }

    pub fn has_android_tablet_fragment(&self) -> bool {
        self.signals.android_tablet
    }

    pub fn is_desktop(&self) -> bool {
        is_desktop(self.os.as_ref(), self.client.as_ref())
    }

    pub fn is_mobile(&self) -> bool {
        if let Some(kind) = self.device.kind {
            if kind.is_mobile_kind() {
                return true;
            }
            if kind.is_stationary_kind() {
                return false;
            }
        }
        if uses_mobile_browser(self.client.as_ref()) {
            return true;
        }
        if !os_is_known(self.os.as_ref()) {
            return false;
        }
        !self.is_bot() && !self.is_desktop()
    }
}

fn os_is_known(os: Option<&OsMatchResult>) -> bool {
    os.is_some_and(|os| !os.short_name.is_empty() && os.short_name != tables::UNKNOWN_SHORT)
}

fn uses_mobile_browser(client: Option<&ClientMatchResult>) -> bool {
    client.is_some_and(|c| {
        c.kind == ClientType::Browser && tables::is_mobile_only_browser(&c.short_name)
    })
}

/// A known desktop OS family, unless the client is a mobile-only browser.
pub(crate) fn is_desktop(os: Option<&OsMatchResult>, client: Option<&ClientMatchResult>) -> bool {
    if !os_is_known(os) || uses_mobile_browser(client) {
        return false;
    }
    os.and_then(|os| tables::os_family(&os.short_name))
        .is_some_and(tables::is_desktop_os_family)
}

/// Raw-text facts about the UA that do not come from any rule family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct UaSignals {
    pub touch: bool,
    pub android_mobile: bool,
    pub android_tablet: bool,
}

/// In-flight result, mutated only while a single detection runs.
#[derive(Debug)]
pub(crate) struct DeviceInfoBuilder {
    pub user_agent: String,
    pub bot: Option<BotMatchResult>,
    pub os: Option<OsMatchResult>,
    pub client: Option<ClientMatchResult>,
    pub device: DeviceMatchResult,
    pub signals: UaSignals,
}

impl DeviceInfoBuilder {
    pub fn new(user_agent: &str, signals: UaSignals) -> Self {
        Self {
            user_agent: user_agent.to_owned(),
            bot: None,
            os: None,
            client: None,
            device: DeviceMatchResult::default(),
            signals,
        }
    }

    pub fn build(self) -> DeviceInfo {
        DeviceInfo {
            user_agent: self.user_agent,
            bot: self.bot,
            os: self.os,
            client: self.client,
            device: self.device,
            signals: self.signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(short: &str) -> OsMatchResult {
        OsMatchResult {
            name: tables::os_name(short).unwrap_or("").to_owned(),
            short_name: short.to_owned(),
            version: String::new(),
            platform: None,
        }
    }

    fn browser(short: &str) -> ClientMatchResult {
        ClientMatchResult {
            kind: ClientType::Browser,
            name: String::new(),
            short_name: short.to_owned(),
            version: String::new(),
            engine: String::new(),
            engine_version: String::new(),
        }
    }

    fn info(os: Option<OsMatchResult>, client: Option<ClientMatchResult>, kind: Option<DeviceType>) -> DeviceInfo {
        let mut builder = DeviceInfoBuilder::new("ua", UaSignals::default());
        builder.os = os;
        builder.client = client;
        builder.device.kind = kind;
        builder.build()
    }

    #[test]
    fn desktop_os_is_desktop() {
        let i = info(Some(os("WIN")), Some(browser("IE")), None);
        assert!(i.is_desktop());
        assert!(!i.is_mobile());
    }

    #[test]
    fn mobile_only_browser_wins_over_desktop_os() {
        let i = info(Some(os("MAC")), Some(browser("SK")), None);
        assert!(!i.is_desktop());
        assert!(i.is_mobile());
    }

    #[test]
    fn device_type_decides_first() {
        assert!(info(Some(os("WIN")), None, Some(DeviceType::Tablet)).is_mobile());
        assert!(!info(Some(os("AND")), None, Some(DeviceType::Tv)).is_mobile());
    }

    #[test]
    fn unknown_os_is_neither() {
        let i = info(None, None, None);
        assert!(!i.is_mobile());
        assert!(!i.is_desktop());
        let i = info(Some(os("UNK")), None, None);
        assert!(!i.is_mobile());
    }

    #[test]
    fn non_desktop_os_is_mobile() {
        assert!(info(Some(os("AND")), None, None).is_mobile());
    }

    #[test]
    fn brand_name_falls_back_to_code() {
        let mut builder = DeviceInfoBuilder::new("ua", UaSignals::default());
        builder.device.brand = "AP".to_owned();
        assert_eq!(builder.build().brand_name(), "Apple");

        let mut builder = DeviceInfoBuilder::new("ua", UaSignals::default());
        builder.device.brand = "Acme Phones".to_owned();
        assert_eq!(builder.build().brand_name(), "Acme Phones");
    }
}
