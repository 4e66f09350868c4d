use std::fmt;
use std::sync::OnceLock;

use fancy_regex::{Regex, RegexBuilder};
use rayon::prelude::*;

use crate::error::{Error, Result};

/// Boundary applied in front of every rule pattern: a rule only matches at the
/// start of the UA or right after a character that is not alphanumeric, `_` or `-`.
const BOUNDARY_PREFIX: &str = r"(?:^|[^A-Z0-9_\-])";

/// fancy-regex's own default; kept explicit so the budget is visible in config.
pub(crate) const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Build the full boundary-prefixed, case-insensitive regex string.
pub(crate) fn full_pattern(pattern: &str) -> String {
    format!("(?i){}(?:{})", BOUNDARY_PREFIX, pattern)
}

fn compile_regex(source: &str, full: &str, options: PatternOptions) -> Result<Regex> {
    RegexBuilder::new(full)
        .backtrack_limit(options.backtrack_limit)
        .build()
        .map_err(|err| Error::Pattern {
            pattern: source.to_owned(),
            source: Box::new(err),
        })
}

/// Knobs applied when a rule pattern is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOptions {
    /// Maximum number of backtracking steps a single evaluation may take before
    /// it is abandoned and reported as "no match".
    pub backtrack_limit: usize,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

// ---------------------------------------------------------------------------
// CapturedMatch
// ---------------------------------------------------------------------------

/// Capture groups of one successful rule evaluation.
///
/// Group 0 is the whole match (including the boundary character, if any),
/// groups 1..n are the rule's own groups.
#[derive(Debug)]
pub struct CapturedMatch<'u>(fancy_regex::Captures<'u>);

impl<'u> CapturedMatch<'u> {
    /// Text of group `i`, or `None` if the group did not participate.
    pub fn get(&self, i: usize) -> Option<&'u str> {
        self.0.get(i).map(|m| m.as_str())
    }

    /// Number of groups, group 0 included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One pattern plus the data it yields on a match.
///
/// The pattern is compiled on first use (or by an explicit [`Rule::compile`])
/// and the compiled form is shared by every later evaluation.
pub struct Rule<T = ()> {
    pattern: String,
    data: T,
    bounded: bool,
    options: PatternOptions,
    compiled: OnceLock<Regex>,
}

impl<T> Rule<T> {
    /// A boundary-anchored, case-insensitive rule.
    pub fn new(pattern: impl Into<String>, data: T) -> Self {
        Self {
            pattern: pattern.into(),
            data,
            bounded: true,
            options: PatternOptions::default(),
            compiled: OnceLock::new(),
        }
    }

    /// A case-insensitive rule that may match in the middle of a word.
    pub fn unbounded(pattern: impl Into<String>, data: T) -> Self {
        Self {
            bounded: false,
            ..Self::new(pattern, data)
        }
    }

    pub fn with_options(mut self, options: PatternOptions) -> Self {
        self.options = options;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Compile the pattern if it has not been compiled yet. Idempotent.
    pub fn compile(&self) -> Result<&Regex> {
        if let Some(re) = self.compiled.get() {
            return Ok(re);
        }
        let full = if self.bounded {
            full_pattern(&self.pattern)
        } else {
            format!("(?i){}", self.pattern)
        };
        let re = compile_regex(&self.pattern, &full, self.options)?;
        // A concurrent caller may have won the race; either result is identical.
        Ok(self.compiled.get_or_init(|| re))
    }

    /// Evaluate the rule and extract its capture groups.
    pub fn captures<'u>(&self, ua: &'u str) -> Option<CapturedMatch<'u>> {
        let re = self.compiled_or_warn()?;
        match re.captures(ua) {
            Ok(caps) => caps.map(CapturedMatch),
            Err(err) => {
                tracing::warn!(pattern = %self.pattern, error = %err, "rule evaluation aborted, treating as no match");
                None
            }
        }
    }

    /// Evaluate the rule without extracting captures.
    pub fn is_match(&self, ua: &str) -> bool {
        let Some(re) = self.compiled_or_warn() else {
            return false;
        };
        match re.is_match(ua) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(pattern = %self.pattern, error = %err, "rule evaluation aborted, treating as no match");
                false
            }
        }
    }

    fn compiled_or_warn(&self) -> Option<&Regex> {
        match self.compile() {
            Ok(re) => Some(re),
            Err(err) => {
                tracing::warn!(error = %err, "skipping rule that failed to compile");
                None
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("data", &self.data)
            .field("bounded", &self.bounded)
            .field("compiled", &self.compiled.get().is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RuleList: ordered, first match wins
// ---------------------------------------------------------------------------

/// Result of a successful match.
pub(crate) struct MatchResult<'a, 'u, T> {
    pub data: &'a T,
    pub captures: CapturedMatch<'u>,
}

/// An ordered list of rules for one category.
///
/// Evaluation order is the declaration order; the first matching rule wins and
/// no later rule is tried.
pub(crate) struct RuleList<T> {
    rules: Vec<Rule<T>>,
    options: PatternOptions,
    /// Every pattern OR'd into one regex, built on the first `pre_match`.
    /// `None` when the combined pattern does not compile or a rule uses a
    /// backreference.
    overall: OnceLock<Option<Regex>>,
}

impl<T: Sync> RuleList<T> {
    pub fn new(items: impl IntoIterator<Item = (String, T)>, options: PatternOptions) -> Self {
        let rules = items
            .into_iter()
            .map(|(pattern, data)| Rule::new(pattern, data).with_options(options))
            .collect();
        Self {
            rules,
            options,
            overall: OnceLock::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Compile every rule in parallel; the first failure is returned.
    pub fn compile_all(&self) -> Result<()> {
        self.rules
            .par_iter()
            .try_for_each(|rule| rule.compile().map(|_| ()))
    }

    /// Find the first matching rule, preserving declaration order.
    pub fn match_first<'a, 'u>(&'a self, ua: &'u str) -> Option<MatchResult<'a, 'u, T>> {
        self.rules.iter().find_map(|rule| {
            rule.captures(ua).map(|captures| MatchResult {
                data: &rule.data,
                captures,
            })
        })
    }

    /// Cheap test: can any rule of this list match `ua`?
    pub fn pre_match(&self, ua: &str) -> bool {
        if self.rules.is_empty() {
            return false;
        }
        let overall = self.overall.get_or_init(|| self.build_overall());
        match overall.as_ref().map(|re| re.is_match(ua)) {
            Some(Ok(matched)) => matched,
            _ => self.rules.iter().any(|rule| rule.is_match(ua)),
        }
    }

    fn build_overall(&self) -> Option<Regex> {
        // Group numbers shift once patterns are joined, so backreferences
        // would point at another rule's groups.
        if self.rules.iter().any(|rule| has_backreference(rule.pattern())) {
            tracing::debug!(rules = self.rules.len(), "backreference in rule list, testing rules one by one");
            return None;
        }
        let combined = self
            .rules
            .iter()
            .map(|rule| format!("(?:{})", rule.pattern()))
            .collect::<Vec<_>>()
            .join("|");
        match compile_regex(&combined, &full_pattern(&combined), self.options) {
            Ok(re) => Some(re),
            Err(err) => {
                tracing::warn!(rules = self.rules.len(), error = %err, "combined pre-match pattern unavailable, testing rules one by one");
                None
            }
        }
    }
}

/// Numbered (`\1`..`\9`) or named (`\k<name>`, `(?P=name)`) backreference.
fn has_backreference(pattern: &str) -> bool {
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some('1'..='9' | 'k') = chars.next() {
                return true;
            }
        }
    }
    pattern.contains("(?P=")
}
