use crate::error::Result;
use crate::parser::{PatternOptions, Rule};
use crate::tables;
use crate::types::{is_desktop, ClientMatchResult, ClientType, DeviceType, OsMatchResult, UaSignals};
use crate::version::{version_ge, version_lt};

/// Raw-text checks used by device-type inference, compiled once per detector.
pub(crate) struct HeuristicRegexes {
    android_mobile: Rule,
    android_tablet: Rule,
    touch: Rule,
    chrome_mobile: Rule,
    chrome_tablet: Rule,
    opera_tablet: Rule,
    opera_tv: Rule,
}

impl HeuristicRegexes {
    pub fn compile(options: PatternOptions) -> Result<Self> {
        let mk = |pattern: &str| -> Result<Rule> {
            let rule = Rule::new(pattern, ()).with_options(options);
            rule.compile()?;
            Ok(rule)
        };
        Ok(Self {
            android_mobile: mk(r"Android( [\.0-9]+)?; Mobile;")?,
            android_tablet: mk(r"Android( [\.0-9]+)?; Tablet;")?,
            touch: mk("Touch")?,
            chrome_mobile: mk(r"Chrome/[\.0-9]* Mobile")?,
            chrome_tablet: mk(r"Chrome/[\.0-9]* (?!Mobile)")?,
            opera_tablet: mk("Opera Tablet")?,
            opera_tv: mk("Opera TV Store")?,
        })
    }

    pub fn signals(&self, ua: &str) -> UaSignals {
        UaSignals {
            touch: self.touch.is_match(ua),
            android_mobile: self.android_mobile.is_match(ua),
            android_tablet: self.android_tablet.is_match(ua),
        }
    }
}

/// Everything inference reads; the brand is updated in place.
pub(crate) struct InferenceInput<'a> {
    pub ua: &'a str,
    pub os: Option<&'a OsMatchResult>,
    pub client: Option<&'a ClientMatchResult>,
    pub signals: UaSignals,
}

/// Settle the final device type. Returns `None` when no step resolved one, in
/// which case the device parser's own type stands.
pub(crate) fn infer_device_type(
    hr: &HeuristicRegexes,
    input: &InferenceInput<'_>,
    current: Option<DeviceType>,
    brand: &mut String,
) -> Option<DeviceType> {
    let ua = input.ua;
    let os_short = input.os.map_or("", |os| os.short_name.as_str());
    let os_version = input.os.map_or("", |os| os.version.as_str());
    let os_family = tables::os_family(os_short);
    let is_android = os_family == Some("Android");

    if brand.is_empty() && matches!(os_short, "ATV" | "IOS" | "MAC") {
        *brand = "AP".to_owned();
    }

    let mut device_type = current;

    // Chrome on Android marks phones with "Mobile".
    if device_type.is_none() && is_android {
        let chrome_family = input.client.is_some_and(|c| {
            c.kind == ClientType::Browser && tables::browser_family(&c.short_name) == Some("Chrome")
        });
        if chrome_family {
            if hr.chrome_mobile.is_match(ua) {
                device_type = Some(DeviceType::Smartphone);
            } else if hr.chrome_tablet.is_match(ua) {
                device_type = Some(DeviceType::Tablet);
            }
        }
    }

    // The mobile fragment is checked twice; the second branch cannot fire.
    if device_type.is_none() {
        if input.signals.android_mobile {
            device_type = Some(DeviceType::Tablet);
        } else if hr.opera_tablet.is_match(ua) {
            device_type = Some(DeviceType::Tablet);
        } else if input.signals.android_mobile {
            device_type = Some(DeviceType::Smartphone);
        } else if os_short == "AND" && !os_version.is_empty() {
            if version_lt(os_version, "2.0") {
                device_type = Some(DeviceType::Smartphone);
            } else if version_ge(os_version, "3.0") && version_lt(os_version, "4.0") {
                device_type = Some(DeviceType::Tablet);
            }
        }
    }

    if device_type == Some(DeviceType::FeaturePhone) && is_android {
        device_type = Some(DeviceType::Smartphone);
    }

    if device_type.is_none()
        && (os_short == "WRT" || (os_short == "WIN" && version_ge(os_version, "8")))
        && input.signals.touch
    {
        device_type = Some(DeviceType::Tablet);
    }

    if hr.opera_tv.is_match(ua) {
        device_type = Some(DeviceType::Tv);
    }

    if device_type.is_none() {
        let client_name = input.client.map_or("", |c| c.name.as_str());
        if matches!(client_name, "Kylo" | "Espial TV Browser") {
            device_type = Some(DeviceType::Tv);
        } else if is_desktop(input.os, input.client) {
            device_type = Some(DeviceType::Desktop);
        }
    }

    device_type
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hr() -> HeuristicRegexes {
        HeuristicRegexes::compile(PatternOptions::default()).unwrap()
    }

    fn os(short: &str, version: &str) -> OsMatchResult {
        OsMatchResult {
            name: tables::os_name(short).unwrap_or("").to_owned(),
            short_name: short.to_owned(),
            version: version.to_owned(),
            platform: None,
        }
    }

    fn browser(short: &str) -> ClientMatchResult {
        ClientMatchResult {
            kind: ClientType::Browser,
            name: tables::browser_name(short).unwrap_or("").to_owned(),
            short_name: short.to_owned(),
            version: String::new(),
            engine: String::new(),
            engine_version: String::new(),
        }
    }

    fn infer(ua: &str, os: Option<&OsMatchResult>, client: Option<&ClientMatchResult>) -> (Option<DeviceType>, String) {
        let hr = hr();
        let input = InferenceInput {
            ua,
            os,
            client,
            signals: hr.signals(ua),
        };
        let mut brand = String::new();
        let kind = infer_device_type(&hr, &input, None, &mut brand);
        (kind, brand)
    }

    #[test]
    fn apple_os_sets_brand() {
        let (_, brand) = infer("Mozilla/5.0 (Macintosh)", Some(&os("MAC", "10.9")), None);
        assert_eq!(brand, "AP");

        let hr = hr();
        let mac = os("MAC", "");
        let input = InferenceInput {
            ua: "x",
            os: Some(&mac),
            client: None,
            signals: UaSignals::default(),
        };
        let mut brand = "XI".to_owned();
        infer_device_type(&hr, &input, None, &mut brand);
        assert_eq!(brand, "XI");
    }

    #[test]
    fn chrome_on_android() {
        let ua = "Mozilla/5.0 (Linux; Android 4.4.2; Nexus 5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/37.0.2062.117 Mobile Safari/537.36";
        let (kind, _) = infer(ua, Some(&os("AND", "4.4.2")), Some(&browser("CM")));
        assert_eq!(kind, Some(DeviceType::Smartphone));

        let ua = "Mozilla/5.0 (Linux; Android 4.4.2; Nexus 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/37.0.2062.117 Safari/537.36";
        let (kind, _) = infer(ua, Some(&os("AND", "4.4.2")), Some(&browser("CH")));
        assert_eq!(kind, Some(DeviceType::Tablet));
    }

    #[test]
    fn android_mobile_fragment_means_tablet() {
        let ua = "Mozilla/5.0 (Android 4.4; Mobile; rv:41.0) Gecko/41.0 Firefox/41.0";
        let (kind, _) = infer(ua, Some(&os("AND", "4.4")), Some(&browser("FM")));
        assert_eq!(kind, Some(DeviceType::Tablet));
    }

    #[test]
    fn android_version_ranges() {
        let ua = "Mozilla/5.0 (Linux; U; Android 3.2; en-us) AppleWebKit/534.13 (KHTML, like Gecko) Version/4.0 Safari/534.13";
        assert_eq!(infer(ua, Some(&os("AND", "3.2")), Some(&browser("AN"))).0, Some(DeviceType::Tablet));
        assert_eq!(infer(ua, Some(&os("AND", "1.6")), Some(&browser("AN"))).0, Some(DeviceType::Smartphone));
        assert_eq!(infer(ua, Some(&os("AND", "2.3")), Some(&browser("AN"))).0, None);
        assert_eq!(infer(ua, Some(&os("AND", "")), Some(&browser("AN"))).0, None);
    }

    #[test]
    fn android_feature_phone_is_smartphone() {
        let hr = hr();
        let android = os("AND", "4.0");
        let input = InferenceInput {
            ua: "Android",
            os: Some(&android),
            client: None,
            signals: UaSignals::default(),
        };
        let mut brand = String::new();
        let kind = infer_device_type(&hr, &input, Some(DeviceType::FeaturePhone), &mut brand);
        assert_eq!(kind, Some(DeviceType::Smartphone));
    }

    #[test]
    fn windows_touch_is_tablet() {
        let ua = "Mozilla/5.0 (Windows NT 6.2; ARM; Trident/7.0; Touch; rv:11.0) like Gecko";
        assert_eq!(infer(ua, Some(&os("WRT", "")), None).0, Some(DeviceType::Tablet));

        let ua = "Mozilla/5.0 (Windows NT 6.2; Trident/7.0; Touch; rv:11.0) like Gecko";
        assert_eq!(infer(ua, Some(&os("WIN", "8")), None).0, Some(DeviceType::Tablet));
        assert_eq!(infer(ua, Some(&os("WIN", "7")), None).0, Some(DeviceType::Desktop));
    }

    #[test]
    fn opera_tv_store_overrides_everything() {
        let hr = hr();
        let ua = "Opera/9.80 (Linux mips; U; Opera TV Store/4.2; en) Presto/2.9.167 Version/11.50";
        let input = InferenceInput {
            ua,
            os: None,
            client: None,
            signals: hr.signals(ua),
        };
        let mut brand = String::new();
        let kind = infer_device_type(&hr, &input, Some(DeviceType::Smartphone), &mut brand);
        assert_eq!(kind, Some(DeviceType::Tv));
    }

    #[test]
    fn tv_browsers_and_desktops() {
        let ua = "Mozilla/5.0 (Windows NT 6.1) Kylo/0.8.4.74873";
        assert_eq!(infer(ua, Some(&os("WIN", "7")), Some(&browser("KY"))).0, Some(DeviceType::Tv));
        let ua = "Mozilla/5.0 (X11; Linux x86_64) Firefox/30.0";
        assert_eq!(infer(ua, Some(&os("LIN", "")), Some(&browser("FF"))).0, Some(DeviceType::Desktop));
        // Mobile-only browsers are never on a desktop.
        let ua = "Mozilla/5.0 (Macintosh) Skyfire/6DE";
        assert_eq!(infer(ua, Some(&os("MAC", "")), Some(&browser("SK"))).0, None);
    }

    #[test]
    fn nothing_known_stays_unset() {
        assert_eq!(infer("Something/1.0", None, None), (None, String::new()));
    }
}
