use super::OsParser;
use crate::db::OsEntry;
use crate::error::Result;
use crate::helpers::capture_or_empty;
use crate::parser::{PatternOptions, Rule, RuleList};
use crate::parser_data::OsData;
use crate::substitution::{build_name, build_version};
use crate::tables;
use crate::types::{OsMatchResult, Platform};

/// Operating systems from `oss.yml`, plus CPU platform detection.
pub struct OperatingSystems {
    rules: RuleList<OsData>,
    platforms: Vec<Rule<Platform>>,
}

impl OperatingSystems {
    pub fn new(entries: Vec<OsEntry>, options: PatternOptions) -> Result<Self> {
        let rules = RuleList::new(
            entries.into_iter().map(|o| {
                (
                    o.regex,
                    OsData {
                        name: o.name,
                        version_template: o.version,
                    },
                )
            }),
            options,
        );
        rules.compile_all()?;

        let platforms = vec![
            Rule::new("arm", Platform::Arm),
            Rule::new("WOW64|x64|win64|amd64|x86_64", Platform::X64),
            Rule::new("i[0-9]86|i86pc", Platform::X86),
        ];
        for rule in &platforms {
            rule.compile()?;
        }

        Ok(Self { rules, platforms })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.len() == 0
    }

    pub fn parse_platform(&self, ua: &str) -> Option<Platform> {
        self.platforms
            .iter()
            .find(|rule| rule.is_match(ua))
            .map(|rule| *rule.data())
    }
}

impl OsParser for OperatingSystems {
    fn name(&self) -> &str {
        "os"
    }

    fn parse(&self, ua: &str) -> Option<OsMatchResult> {
        let m = self.rules.match_first(ua)?;
        let name = build_name(&m.data.name, &m.captures);
        let (short_name, name) = match tables::os_short_code(&name) {
            Some((code, canonical)) => (code.to_owned(), canonical.to_owned()),
            None => (tables::UNKNOWN_SHORT.to_owned(), name),
        };
        let version = match &m.data.version_template {
            Some(tpl) => build_version(tpl, &m.captures),
            None => capture_or_empty(&m.captures, 1),
        };
        Some(OsMatchResult {
            name,
            short_name,
            version,
            platform: self.parse_platform(ua),
        })
    }

    fn pre_match(&self, ua: &str) -> bool {
        self.rules.pre_match(ua)
    }
}
