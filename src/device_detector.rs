use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::cache::Cache;
use crate::config::DetectorConfig;
use crate::db::{RuleSet, RuleSource, YamlDir};
use crate::error::Result;
use crate::families::{
    BotParser, BotParsers, Bots, ClientFamily, ClientParser, ClientParsers, DeviceFamily,
    DeviceParser, DeviceParsers, Engines, OperatingSystems, OsParser, OsParsers, VendorFragments,
};
use crate::helpers::contains_letter;
use crate::inference::{infer_device_type, HeuristicRegexes, InferenceInput};
use crate::types::*;
use crate::version::VersionTruncation;

/// Classifies UA strings into bot, OS, client and device facts.
///
/// Rules are compiled once at construction and shared read-only by every
/// [`parse`](Self::parse) call, so a detector can be used from many threads at
/// once (`DeviceDetector: Send + Sync`). Settings that change the shape of
/// results take `&mut self` and purge the cache.
pub struct DeviceDetector {
    config: DetectorConfig,
    cache: Option<Cache>,
    bot_parsers: BotParsers,
    os_parsers: OsParsers,
    client_parsers: ClientParsers,
    device_parsers: DeviceParsers,
    vendor_fragments: VendorFragments,
    /// Pre-compiled heuristic regexes for device-type inference.
    heuristic_regexes: HeuristicRegexes,
}

impl DeviceDetector {
    /// Load all Matomo YAML regex files from `dir` and build a detector with
    /// the default configuration.
    ///
    /// `dir` should point to the `regexes/` directory of a Matomo device-detector
    /// checkout (containing `bots.yml`, `oss.yml`, `client/`, `device/`, etc.).
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(&YamlDir::new(dir.as_ref()), DetectorConfig::default())
    }

    /// Build a detector from any rule source. Every rule is compiled here; the
    /// first broken pattern fails construction.
    pub fn new(source: &impl RuleSource, config: DetectorConfig) -> Result<Self> {
        let started = Instant::now();
        let RuleSet {
            bots,
            oss,
            browsers,
            browser_engines,
            feed_readers,
            mobile_apps,
            media_players,
            pims,
            libraries,
            televisions,
            consoles,
            car_browsers,
            cameras,
            portable_media_players,
            mobiles,
            vendor_fragments,
        } = source.load()?;
        let options = config.pattern_options();

        // Flat-list families and device families compile concurrently.
        let (flat_result, device_result) = rayon::join(
            || -> Result<_> {
                let bots = Bots::new(bots, options)?;
                let oss = OperatingSystems::new(oss, options)?;
                let engines = Engines::new(browser_engines, options)?;
                tracing::debug!(
                    bots = bots.len(),
                    oss = oss.len(),
                    engines = engines.len(),
                    "compiled bot, os and engine rules"
                );

                // Client priority: feed reader, mobile app, media player, PIM,
                // browser, library.
                let clients = vec![
                    ClientFamily::new(ClientType::FeedReader, feed_readers, options)?,
                    ClientFamily::new(ClientType::MobileApp, mobile_apps, options)?,
                    ClientFamily::new(ClientType::MediaPlayer, media_players, options)?,
                    ClientFamily::new(ClientType::Pim, pims, options)?,
                    ClientFamily::browsers(browsers, engines, options)?,
                    ClientFamily::new(ClientType::Library, libraries, options)?,
                ];
                for family in &clients {
                    tracing::debug!(family = family.name(), rules = family.len(), "compiled client rules");
                }

                let vendor_fragments = VendorFragments::new(vendor_fragments)?;
                tracing::debug!(brands = vendor_fragments.len(), "built vendor fragment matcher");

                Ok((bots, oss, clients, vendor_fragments))
            },
            || -> Result<_> {
                let devices = vec![
                    DeviceFamily::hbbtv(televisions, options)?,
                    DeviceFamily::consoles(consoles, options)?,
                    DeviceFamily::car_browsers(car_browsers, options)?,
                    DeviceFamily::cameras(cameras, options)?,
                    DeviceFamily::portable_media_players(portable_media_players, options)?,
                    DeviceFamily::mobiles(mobiles, options)?,
                ];
                for family in &devices {
                    tracing::debug!(family = family.name(), brands = family.len(), "compiled device rules");
                }
                Ok(devices)
            },
        );

        let (bots, oss, clients, vendor_fragments) = flat_result?;
        let devices = device_result?;
        let heuristic_regexes = HeuristicRegexes::compile(options)?;

        let bots = Box::new(bots) as Box<dyn BotParser>;
        bots.set_discard_details(config.discard_bot_information);

        let detector = Self {
            cache: config.enable_cache.then(Cache::new),
            config,
            bot_parsers: std::iter::once(bots).collect(),
            os_parsers: std::iter::once(Box::new(oss) as Box<dyn OsParser>).collect(),
            client_parsers: clients
                .into_iter()
                .map(|family| Box::new(family) as Box<dyn ClientParser>)
                .collect(),
            device_parsers: devices
                .into_iter()
                .map(|family| Box::new(family) as Box<dyn DeviceParser>)
                .collect(),
            vendor_fragments,
            heuristic_regexes,
        };
        tracing::debug!(elapsed = ?started.elapsed(), "device detector ready");
        Ok(detector)
    }

    // -----------------------------------------------------------------------
    // Detection
    // -----------------------------------------------------------------------

    /// Classify `ua`. Returns `None` iff `ua` contains no letter.
    ///
    /// With the cache enabled, repeated calls for the same UA return the same
    /// `Arc` until [`purge_cache`](Self::purge_cache).
    pub fn parse(&self, ua: &str) -> Option<Arc<DeviceInfo>> {
        if !contains_letter(ua) {
            return None;
        }

        if let Some(cache) = &self.cache {
            if let Some(info) = cache.lookup(ua) {
                tracing::trace!(ua, "cache hit");
                return Some(info);
            }
            tracing::trace!(ua, "cache miss");
        }

        let info = Arc::new(self.detect(ua));
        Some(match &self.cache {
            Some(cache) => cache.add(ua, info),
            None => info,
        })
    }

    fn detect(&self, ua: &str) -> DeviceInfo {
        let mut info = DeviceInfoBuilder::new(ua, self.heuristic_regexes.signals(ua));

        info.bot = self.parse_bot(ua);
        if info.bot.is_some() {
            tracing::trace!(ua, "bot detected, skipping os, client and device");
            return info.build();
        }

        info.os = self.parse_os(ua);
        info.client = self.parse_client(ua);
        self.detect_device(&mut info);
        info.build()
    }

    fn detect_device(&self, info: &mut DeviceInfoBuilder) {
        let ua = info.user_agent.as_str();
        let DeviceMatchResult {
            kind,
            mut brand,
            model,
        } = self.parse_device(ua).unwrap_or_default();

        if brand.is_empty() {
            if let Some(vendor) = self.vendor_fragments.parse(ua) {
                brand = vendor.to_owned();
            }
        }

        let input = InferenceInput {
            ua,
            os: info.os.as_ref(),
            client: info.client.as_ref(),
            signals: info.signals,
        };
        let kind = infer_device_type(&self.heuristic_regexes, &input, kind, &mut brand);

        info.device = DeviceMatchResult { kind, brand, model };
    }

    /// First bot match, or `None` when bot detection is skipped.
    pub fn parse_bot(&self, ua: &str) -> Option<BotMatchResult> {
        if self.config.skip_bot_detection {
            return None;
        }
        self.bot_parsers.parse(ua)
    }

    /// First OS match, version truncated per the detector setting.
    pub fn parse_os(&self, ua: &str) -> Option<OsMatchResult> {
        self.os_parsers.parse(ua).map(|mut os| {
            os.version = self.config.version_truncation.truncate(&os.version);
            os
        })
    }

    /// First client match in priority order, version truncated per the
    /// detector setting.
    pub fn parse_client(&self, ua: &str) -> Option<ClientMatchResult> {
        self.client_parsers.parse(ua).map(|mut client| {
            client.version = self.config.version_truncation.truncate(&client.version);
            client
        })
    }

    /// First device family result, before vendor fallback and inference.
    pub fn parse_device(&self, ua: &str) -> Option<DeviceMatchResult> {
        self.device_parsers.parse(ua)
    }

    pub fn purge_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.purge();
        }
    }

    /// Number of cached results; zero when the cache is disabled.
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, Cache::len)
    }

    // -----------------------------------------------------------------------
    // Parser lists
    // -----------------------------------------------------------------------

    /// Append a client parser after the built-in families.
    pub fn add_client_parser(&mut self, parser: Box<dyn ClientParser>) {
        self.client_parsers.push(parser);
    }

    /// Insert a client parser ahead of every other one.
    pub fn prepend_client_parser(&mut self, parser: Box<dyn ClientParser>) {
        self.client_parsers.prepend(parser);
    }

    pub fn client_parsers(&self) -> &[Box<dyn ClientParser>] {
        self.client_parsers.as_slice()
    }

    pub fn add_device_parser(&mut self, parser: Box<dyn DeviceParser>) {
        self.device_parsers.push(parser);
    }

    pub fn prepend_device_parser(&mut self, parser: Box<dyn DeviceParser>) {
        self.device_parsers.prepend(parser);
    }

    pub fn device_parsers(&self) -> &[Box<dyn DeviceParser>] {
        self.device_parsers.as_slice()
    }

    pub fn add_bot_parser(&mut self, parser: Box<dyn BotParser>) {
        parser.set_discard_details(self.config.discard_bot_information);
        self.bot_parsers.push(parser);
    }

    pub fn prepend_bot_parser(&mut self, parser: Box<dyn BotParser>) {
        parser.set_discard_details(self.config.discard_bot_information);
        self.bot_parsers.prepend(parser);
    }

    pub fn bot_parsers(&self) -> &[Box<dyn BotParser>] {
        self.bot_parsers.as_slice()
    }

    pub fn os_parsers(&self) -> &[Box<dyn OsParser>] {
        self.os_parsers.as_slice()
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn version_truncation(&self) -> VersionTruncation {
        self.config.version_truncation
    }

    /// Applies to every OS and client version reported from now on.
    pub fn set_version_truncation(&mut self, truncation: VersionTruncation) {
        if self.config.version_truncation != truncation {
            self.config.version_truncation = truncation;
            self.purge_cache();
        }
    }

    pub fn discard_bot_information(&self) -> bool {
        self.config.discard_bot_information
    }

    pub fn set_discard_bot_information(&mut self, discard: bool) {
        if self.config.discard_bot_information != discard {
            self.config.discard_bot_information = discard;
            self.bot_parsers.set_discard_details(discard);
            self.purge_cache();
        }
    }

    pub fn skip_bot_detection(&self) -> bool {
        self.config.skip_bot_detection
    }

    pub fn set_skip_bot_detection(&mut self, skip: bool) {
        if self.config.skip_bot_detection != skip {
            self.config.skip_bot_detection = skip;
            self.purge_cache();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{BotEntry, ClientEntry, OsEntry};

    fn rules() -> RuleSet {
        RuleSet {
            bots: vec![BotEntry {
                regex: "Googlebot".into(),
                name: "Googlebot".into(),
                category: Some("Search bot".into()),
                url: None,
                producer: None,
            }],
            oss: vec![OsEntry {
                regex: r"Windows NT 6\.1".into(),
                name: "Windows".into(),
                version: Some("7".into()),
            }],
            libraries: vec![ClientEntry {
                regex: r"curl(?:/(\d+[\.\d]+))?".into(),
                name: "curl".into(),
                version: Some("$1".into()),
                engine: None,
            }],
            ..RuleSet::default()
        }
    }

    #[test]
    fn detector_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DeviceDetector>();
    }

    #[test]
    fn builds_from_in_memory_rules() {
        let dd = DeviceDetector::new(&rules(), DetectorConfig::default()).unwrap();
        assert_eq!(dd.client_parsers().len(), 6);
        assert_eq!(dd.device_parsers().len(), 6);
        let names: Vec<_> = dd.client_parsers().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["feed reader", "mobile app", "mediaplayer", "pim", "browser", "library"]);
        let names: Vec<_> = dd.device_parsers().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            ["hbbtv", "console", "car browser", "camera", "portable media player", "mobile"]
        );
    }

    #[test]
    fn broken_pattern_fails_construction() {
        let mut set = rules();
        set.oss.push(OsEntry {
            regex: "Broken (".into(),
            name: "Broken".into(),
            version: None,
        });
        assert!(matches!(
            DeviceDetector::new(&set, DetectorConfig::default()),
            Err(crate::Error::Pattern { .. })
        ));
    }

    #[test]
    fn windows_7_desktop() {
        let dd = DeviceDetector::new(&rules(), DetectorConfig::default()).unwrap();
        let info = dd.parse("Mozilla/5.0 (Windows NT 6.1; WOW64)").unwrap();
        assert_eq!(info.os().unwrap().short_name, "WIN");
        assert_eq!(info.os().unwrap().platform, Some(Platform::X64));
        assert_eq!(info.device_type(), Some(DeviceType::Desktop));
        assert!(info.is_desktop());
    }

    #[test]
    fn settings_purge_the_cache() {
        let mut dd = DeviceDetector::new(&rules(), DetectorConfig::default()).unwrap();
        let ua = "curl/7.64.1";
        let before = dd.parse(ua).unwrap();
        assert_eq!(dd.cached_len(), 1);
        assert_eq!(before.client().unwrap().version, "7.64.1");

        dd.set_version_truncation(VersionTruncation::Minor);
        assert_eq!(dd.cached_len(), 0);
        assert_eq!(dd.parse(ua).unwrap().client().unwrap().version, "7.64");
        assert_eq!(dd.parse_client(ua).unwrap().version, "7.64");

        dd.set_skip_bot_detection(true);
        assert_eq!(dd.cached_len(), 0);
    }

    #[test]
    fn discard_flag_reaches_bot_parsers() {
        let mut dd = DeviceDetector::new(&rules(), DetectorConfig::default()).unwrap();
        let ua = "Googlebot/2.1";
        assert!(dd.parse_bot(ua).unwrap().category.is_some());
        dd.set_discard_bot_information(true);
        assert!(dd.parse_bot(ua).unwrap().category.is_none());
        assert!(dd.parse(ua).unwrap().bot().unwrap().category.is_none());
    }
}
