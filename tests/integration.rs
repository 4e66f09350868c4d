use device_detector::{DeviceDetector, DeviceInfo};
use fixtures::fixtures;
use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Case files use `[]` or `null` for "no value" on struct fields.
/// Accept either a struct `T`, an empty sequence, or null → None.
fn empty_array_as_none<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::de::DeserializeOwned,
    D: serde::Deserializer<'de>,
{
    let value: serde_yaml::Value = serde_yaml::Value::deserialize(deserializer)?;
    match &value {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::Sequence(seq) if seq.is_empty() => Ok(None),
        _ => serde_yaml::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// Global DeviceDetector instance that is initialized once
static DETECTOR_INSTANCE: OnceLock<Arc<DeviceDetector>> = OnceLock::new();

fn make_detector() -> Arc<DeviceDetector> {
    DETECTOR_INSTANCE
        .get_or_init(|| {
            let t = std::time::Instant::now();
            let path = Path::new("tests/fixtures/regexes");
            assert!(path.exists(), "regexes dir not found at {:?}", path);
            let dd = DeviceDetector::from_dir(path).expect("failed to build DeviceDetector");
            eprintln!("detector loaded in {:?}", t.elapsed());
            Arc::new(dd)
        })
        .clone()
}

fn parse(dd: &DeviceDetector, ua: &str) -> Arc<DeviceInfo> {
    dd.parse(ua)
        .unwrap_or_else(|| panic!("expected a result for UA: {}", ua))
}

// ---------------------------------------------------------------------------
// Bot cases
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct BotCase {
    user_agent: String,
    bot: BotCaseData,
}

#[derive(Debug, Deserialize)]
struct BotCaseData {
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    producer: Option<BotCaseProducer>,
}

#[derive(Debug, Deserialize)]
struct BotCaseProducer {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[fixtures(["tests/fixtures/cases/bots.yml"])]
#[test]
fn test_bot_cases(path: &std::path::Path) {
    let dd = make_detector();
    let content = std::fs::read_to_string(path).unwrap();
    let cases: Vec<BotCase> = serde_yaml::from_str(&content).unwrap();

    for c in &cases {
        let result = parse(&dd, &c.user_agent);
        assert!(result.is_bot(), "expected bot for UA: {}", c.user_agent);

        let bot = result.bot().unwrap();
        assert_eq!(bot.name, c.bot.name, "bot name mismatch for UA: {}", c.user_agent);
        assert_eq!(bot.category, c.bot.category, "bot category for UA: {}", c.user_agent);
        assert_eq!(bot.url, c.bot.url, "bot url for UA: {}", c.user_agent);
        assert_eq!(
            bot.producer.as_ref().and_then(|p| p.name.as_deref()),
            c.bot.producer.as_ref().and_then(|p| p.name.as_deref()),
            "bot producer for UA: {}",
            c.user_agent
        );
        assert_eq!(
            bot.producer.as_ref().and_then(|p| p.url.as_deref()),
            c.bot.producer.as_ref().and_then(|p| p.url.as_deref()),
            "bot producer url for UA: {}",
            c.user_agent
        );

        // Bots short-circuit everything else.
        assert!(result.os().is_none(), "bot UA has an os: {}", c.user_agent);
        assert!(result.client().is_none(), "bot UA has a client: {}", c.user_agent);
        assert!(!result.is_mobile());
        assert!(!result.is_desktop());
    }
}

// ---------------------------------------------------------------------------
// Device cases
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DeviceCase {
    user_agent: String,
    #[serde(default, deserialize_with = "empty_array_as_none")]
    os: Option<OsCase>,
    #[serde(default, deserialize_with = "empty_array_as_none")]
    client: Option<ClientCase>,
    device: DeviceCaseData,
    #[serde(default)]
    brand_name: Option<String>,
    #[serde(default)]
    os_family: Option<String>,
    #[serde(default)]
    browser_family: Option<String>,
    #[serde(default)]
    touch: Option<bool>,
    #[serde(default)]
    is_mobile: Option<bool>,
    #[serde(default)]
    is_desktop: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct OsCase {
    name: String,
    short_name: String,
    version: String,
    #[serde(default)]
    platform: String,
}

#[derive(Debug, Deserialize)]
struct ClientCase {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    short_name: String,
    version: String,
    #[serde(default)]
    engine: String,
    #[serde(default)]
    engine_version: String,
}

#[derive(Debug, Deserialize)]
struct DeviceCaseData {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    model: String,
}

fn check_os(result: &DeviceInfo, expected: Option<&OsCase>) {
    let ua = result.user_agent();
    let Some(expected) = expected else {
        assert!(result.os().is_none(), "unexpected os {:?} for UA: {}", result.os(), ua);
        return;
    };
    let os = result
        .os()
        .unwrap_or_else(|| panic!("expected os for UA: {}", ua));
    assert_eq!(os.name, expected.name, "os name for UA: {}", ua);
    assert_eq!(os.short_name, expected.short_name, "os short name for UA: {}", ua);
    assert_eq!(os.version, expected.version, "os version for UA: {}", ua);
    assert_eq!(
        os.platform.map_or("", |p| p.as_str()),
        expected.platform,
        "os platform for UA: {}",
        ua
    );
}

fn check_client(result: &DeviceInfo, expected: Option<&ClientCase>) {
    let ua = result.user_agent();
    let Some(expected) = expected else {
        assert!(
            result.client().is_none(),
            "unexpected client {:?} for UA: {}",
            result.client(),
            ua
        );
        return;
    };
    let client = result
        .client()
        .unwrap_or_else(|| panic!("expected client for UA: {}", ua));
    assert_eq!(client.kind.as_str(), expected.kind, "client type for UA: {}", ua);
    assert_eq!(client.name, expected.name, "client name for UA: {}", ua);
    assert_eq!(client.short_name, expected.short_name, "client short name for UA: {}", ua);
    assert_eq!(client.version, expected.version, "client version for UA: {}", ua);
    assert_eq!(client.engine, expected.engine, "engine for UA: {}", ua);
    assert_eq!(
        client.engine_version, expected.engine_version,
        "engine version for UA: {}",
        ua
    );
}

#[fixtures([
    "tests/fixtures/cases/clients.yml",
    "tests/fixtures/cases/desktop.yml",
    "tests/fixtures/cases/devices.yml",
    "tests/fixtures/cases/smartphone.yml",
    "tests/fixtures/cases/tablet.yml",
    "tests/fixtures/cases/tv.yml",
])]
#[test]
fn test_device_cases(path: &std::path::Path) {
    let dd = make_detector();
    let content = std::fs::read_to_string(path).unwrap();
    let cases: Vec<DeviceCase> = serde_yaml::from_str(&content).unwrap();

    for c in &cases {
        let ua = c.user_agent.as_str();
        let result = parse(&dd, ua);
        assert!(!result.is_bot(), "unexpected bot for UA: {}", ua);

        check_os(&result, c.os.as_ref());
        check_client(&result, c.client.as_ref());

        assert_eq!(
            result.device_type().map_or("", |t| t.as_str()),
            c.device.kind,
            "device type for UA: {}",
            ua
        );
        assert_eq!(result.brand(), c.device.brand, "device brand for UA: {}", ua);
        assert_eq!(result.model(), c.device.model, "device model for UA: {}", ua);

        if let Some(expected) = &c.brand_name {
            assert_eq!(result.brand_name(), expected, "brand name for UA: {}", ua);
        }
        if let Some(expected) = &c.os_family {
            assert_eq!(result.os_family(), Some(expected.as_str()), "os family for UA: {}", ua);
        }
        if let Some(expected) = &c.browser_family {
            assert_eq!(
                result.browser_family(),
                Some(expected.as_str()),
                "browser family for UA: {}",
                ua
            );
        }
        if let Some(expected) = c.touch {
            assert_eq!(result.is_touch_enabled(), expected, "touch for UA: {}", ua);
        }
        if let Some(expected) = c.is_mobile {
            assert_eq!(result.is_mobile(), expected, "is_mobile for UA: {}", ua);
        }
        if let Some(expected) = c.is_desktop {
            assert_eq!(result.is_desktop(), expected, "is_desktop for UA: {}", ua);
        }
    }
}
