use std::collections::HashMap;

use rayon::prelude::*;

use super::ClientParser;
use crate::db::{ClientEntry, EngineEntry};
use crate::error::Result;
use crate::helpers::{capture_or_empty, escape_pattern};
use crate::parser::{PatternOptions, Rule, RuleList};
use crate::parser_data::{ClientData, EngineData, EngineHint};
use crate::substitution::{build_name, build_version};
use crate::tables;
use crate::types::{ClientMatchResult, ClientType};

fn engine_version_pattern(engine: &str) -> String {
    format!(
        r"{}\s*/?\s*((?:(?=\d+\.\d)\d+[.\d]*|\d{{1,7}}(?=(?:\D|$))))",
        escape_pattern(engine)
    )
}

/// Browser engines from `client/browser_engine.yml`.
pub struct Engines {
    rules: RuleList<EngineData>,
    options: PatternOptions,
    /// Version rules for engines that browser rules name but no engine rule
    /// covers. Keyed by lowercase name.
    hinted: HashMap<String, Rule>,
}

impl Engines {
    pub fn new(entries: Vec<EngineEntry>, options: PatternOptions) -> Result<Self> {
        let rules = RuleList::new(
            entries.into_iter().map(|e| {
                let version_rule =
                    Rule::unbounded(engine_version_pattern(&e.name), ()).with_options(options);
                (
                    e.regex,
                    EngineData {
                        name: e.name,
                        version_rule,
                    },
                )
            }),
            options,
        );
        rules.compile_all()?;
        rules
            .rules()
            .par_iter()
            .try_for_each(|rule| rule.data().version_rule.compile().map(|_| ()))?;
        Ok(Self {
            rules,
            options,
            hinted: HashMap::new(),
        })
    }

    /// Compile version rules for engine names that have no engine rule.
    fn register_hinted<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for name in names {
            let key = name.to_ascii_lowercase();
            if self.hinted.contains_key(&key) || self.known(name).is_some() {
                continue;
            }
            let rule = Rule::unbounded(engine_version_pattern(name), ()).with_options(self.options);
            rule.compile()?;
            self.hinted.insert(key, rule);
        }
        Ok(())
    }

    fn known(&self, engine: &str) -> Option<&EngineData> {
        self.rules
            .rules()
            .iter()
            .map(|rule| rule.data())
            .find(|data| data.name.eq_ignore_ascii_case(engine))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.len() == 0
    }

    /// Name of the first engine whose rule matches.
    pub fn parse(&self, ua: &str) -> Option<&str> {
        self.rules.match_first(ua).map(|m| m.data.name.as_str())
    }

    /// Version number following the engine name in the UA. Empty if absent
    /// or if `engine` is neither an engine rule nor named by a browser rule.
    pub fn version(&self, ua: &str, engine: &str) -> String {
        let rule = match self.known(engine) {
            Some(data) => &data.version_rule,
            None => match self.hinted.get(&engine.to_ascii_lowercase()) {
                Some(rule) => rule,
                None => return String::new(),
            },
        };
        rule.captures(ua)
            .map(|caps| capture_or_empty(&caps, 1))
            .unwrap_or_default()
    }

    fn resolve(&self, ua: &str, client: &ClientData, browser_version: &str) -> (String, String) {
        let mut engine = client
            .engine
            .as_ref()
            .map(|hint| hint.pick(browser_version).to_owned())
            .unwrap_or_default();
        if engine.is_empty() {
            match self.parse(ua) {
                Some(name) => engine = name.to_owned(),
                None => return (String::new(), String::new()),
            }
        }
        let version = self.version(ua, &engine);
        (engine, version)
    }
}

/// One client category: browsers, feed readers, mobile apps, media players,
/// PIM tools or libraries.
pub struct ClientFamily {
    kind: ClientType,
    rules: RuleList<ClientData>,
    engines: Option<Engines>,
}

impl ClientFamily {
    pub fn new(kind: ClientType, entries: Vec<ClientEntry>, options: PatternOptions) -> Result<Self> {
        let rules = RuleList::new(
            entries.into_iter().map(|e| {
                let engine = e.engine.map(|engine| EngineHint {
                    default: engine.default.filter(|name| !name.is_empty()),
                    thresholds: engine.versions.unwrap_or_default().into_iter().collect(),
                });
                (
                    e.regex,
                    ClientData {
                        kind,
                        name: e.name,
                        version_template: e.version,
                        engine,
                    },
                )
            }),
            options,
        );
        rules.compile_all()?;
        Ok(Self {
            kind,
            rules,
            engines: None,
        })
    }

    /// Browsers, with engine resolution.
    pub fn browsers(entries: Vec<ClientEntry>, mut engines: Engines, options: PatternOptions) -> Result<Self> {
        let mut family = Self::new(ClientType::Browser, entries, options)?;
        let hinted = family
            .rules
            .rules()
            .iter()
            .filter_map(|rule| rule.data().engine.as_ref())
            .flat_map(|hint| {
                hint.default
                    .iter()
                    .chain(hint.thresholds.iter().map(|(_, engine)| engine))
                    .map(String::as_str)
            });
        engines.register_hinted(hinted)?;
        family.engines = Some(engines);
        Ok(family)
    }

    pub fn kind(&self) -> ClientType {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.len() == 0
    }
}

impl ClientParser for ClientFamily {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn parse(&self, ua: &str) -> Option<ClientMatchResult> {
        let m = self.rules.match_first(ua)?;
        let name = build_name(&m.data.name, &m.captures);
        let version = match &m.data.version_template {
            Some(tpl) => build_version(tpl, &m.captures),
            None => capture_or_empty(&m.captures, 1),
        };

        if m.data.kind != ClientType::Browser {
            return Some(ClientMatchResult {
                kind: m.data.kind,
                name,
                short_name: String::new(),
                version,
                engine: String::new(),
                engine_version: String::new(),
            });
        }

        let (short_name, name) = match tables::browser_short_code(&name) {
            Some((code, canonical)) => (code.to_owned(), canonical.to_owned()),
            None => (tables::UNKNOWN_SHORT.to_owned(), name),
        };
        let (engine, engine_version) = match &self.engines {
            Some(engines) => engines.resolve(ua, m.data, &version),
            None => (String::new(), String::new()),
        };
        Some(ClientMatchResult {
            kind: ClientType::Browser,
            name,
            short_name,
            version,
            engine,
            engine_version,
        })
    }

    fn pre_match(&self, ua: &str) -> bool {
        self.rules.pre_match(ua)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::db::EngineRef;

    const ARCHOS: &str = "Mozilla/5.0 (Linux; Android 4.2.2; ARCHOS 101 PLATINUM Build/JDQ39) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/34.0.1847.114 Safari/537.36";

    fn engines() -> Engines {
        let entry = |regex: &str, name: &str| EngineEntry {
            regex: regex.into(),
            name: name.into(),
        };
        Engines::new(
            vec![
                entry("Trident", "Trident"),
                entry("(?<!like )Gecko", "Gecko"),
                entry("(?:Apple)?WebKit", "WebKit"),
            ],
            PatternOptions::default(),
        )
        .unwrap()
    }

    fn client(regex: &str, name: &str, version: &str, engine: Option<EngineRef>) -> ClientEntry {
        ClientEntry {
            regex: regex.into(),
            name: name.into(),
            version: Some(version.into()),
            engine,
        }
    }

    fn browsers() -> ClientFamily {
        let mut versions = IndexMap::new();
        versions.insert("28".to_owned(), "Blink".to_owned());
        ClientFamily::browsers(
            vec![
                client(
                    r"Chrome(?:/(\d+[\.\d]+))?",
                    "chrome",
                    "$1",
                    Some(EngineRef {
                        default: Some("WebKit".into()),
                        versions: Some(versions),
                    }),
                ),
                client(r"MSIE (\d+[\.\d]+)", "Internet Explorer", "$1", None),
                client(r"Firefox(?:/(\d+[\.\d]+))?", "Firefox", "$1", None),
                client(r"Konqi(?:/(\d+))?", "Konqi", "$1", None),
            ],
            engines(),
            PatternOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn engine_version_threshold() {
        let c = browsers().parse(ARCHOS).unwrap();
        assert_eq!(c.kind, ClientType::Browser);
        assert_eq!((c.name.as_str(), c.short_name.as_str()), ("Chrome", "CH"));
        assert_eq!(c.version, "34.0.1847.114");
        assert_eq!(c.engine, "Blink");
        assert_eq!(c.engine_version, "");
    }

    #[test]
    fn hinted_engine_without_engine_rule() {
        let family = browsers();
        let engines = family.engines.as_ref().unwrap();
        assert_eq!(engines.hinted.len(), 1);
        assert!(engines.hinted.contains_key("blink"));

        let c = family.parse("Mozilla/5.0 Chrome/40.0.2214.89 Blink/1.2").unwrap();
        assert_eq!(c.engine, "Blink");
        assert_eq!(c.engine_version, "1.2");
        assert_eq!(engines.version("Presto/2.12.388", "Presto"), "");
    }

    #[test]
    fn engine_default_below_threshold() {
        let c = browsers()
            .parse("Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.11 (KHTML, like Gecko) Chrome/23.0.1271.97 Safari/537.11")
            .unwrap();
        assert_eq!(c.engine, "WebKit");
        assert_eq!(c.engine_version, "537.11");
    }

    #[test]
    fn engine_from_engine_rules() {
        let c = browsers()
            .parse("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)")
            .unwrap();
        assert_eq!(c.short_name, "IE");
        assert_eq!(c.engine, "Trident");
        assert_eq!(c.engine_version, "6.0");

        let c = browsers()
            .parse("Mozilla/5.0 (Windows NT 6.1; rv:21.0) Gecko/20100101 Firefox/21.0")
            .unwrap();
        assert_eq!(c.engine, "Gecko");
    }

    #[test]
    fn unknown_browser_name_gets_unk() {
        let c = browsers().parse("Konqi/4").unwrap();
        assert_eq!(c.short_name, tables::UNKNOWN_SHORT);
        assert_eq!(c.version, "4");
        assert_eq!(c.engine, "");
    }

    #[test]
    fn non_browsers_have_no_short_name() {
        let libs = ClientFamily::new(
            ClientType::Library,
            vec![client(r"Wget(?:/(\d+[\.\d]+))?", "Wget", "$1", None)],
            PatternOptions::default(),
        )
        .unwrap();
        let c = libs.parse("Wget/1.12 (linux-gnu)").unwrap();
        assert_eq!(c.kind, ClientType::Library);
        assert_eq!(c.name, "Wget");
        assert_eq!(c.short_name, "");
        assert_eq!(c.version, "1.12");
        assert_eq!(libs.name(), "library");
    }
}
