use std::sync::atomic::{AtomicBool, Ordering};

use super::BotParser;
use crate::db::BotEntry;
use crate::error::Result;
use crate::parser::{PatternOptions, RuleList};
use crate::parser_data::BotData;
use crate::substitution::build_name;
use crate::types::{BotMatchResult, BotProducer};

/// Bot signatures from `bots.yml`.
pub struct Bots {
    rules: RuleList<BotData>,
    discard_details: AtomicBool,
}

impl Bots {
    pub fn new(entries: Vec<BotEntry>, options: PatternOptions) -> Result<Self> {
        let rules = RuleList::new(
            entries.into_iter().map(|b| {
                (
                    b.regex,
                    BotData {
                        name: b.name,
                        category: b.category,
                        url: b.url,
                        producer: b.producer.map(|p| BotProducer {
                            name: p.name,
                            url: p.url,
                        }),
                    },
                )
            }),
            options,
        );
        rules.compile_all()?;
        Ok(Self {
            rules,
            discard_details: AtomicBool::new(false),
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.len() == 0
    }
}

impl BotParser for Bots {
    fn name(&self) -> &str {
        "bot"
    }

    fn parse(&self, ua: &str) -> Option<BotMatchResult> {
        let m = self.rules.match_first(ua)?;
        let name = build_name(&m.data.name, &m.captures);
        if self.discard_details.load(Ordering::Relaxed) {
            return Some(BotMatchResult {
                name,
                category: None,
                url: None,
                producer: None,
            });
        }
        Some(BotMatchResult {
            name,
            category: m.data.category.clone(),
            url: m.data.url.clone(),
            producer: m.data.producer.clone(),
        })
    }

    fn pre_match(&self, ua: &str) -> bool {
        self.rules.pre_match(ua)
    }

    fn set_discard_details(&self, discard: bool) {
        self.discard_details.store(discard, Ordering::Relaxed);
    }
}
