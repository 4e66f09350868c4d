//! Static lookup tables: canonical names, short codes and families.
//!
//! Name lookups are case-insensitive; code lookups are exact.

use std::collections::HashMap;
use std::sync::LazyLock;

mod brands;
mod browsers;
mod os;

/// Short code reported for an OS or browser name that is not in its table.
pub const UNKNOWN_SHORT: &str = "UNK";

struct Table {
    by_code: HashMap<&'static str, &'static str>,
    by_name: HashMap<String, (&'static str, &'static str)>,
}

impl Table {
    fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut by_code = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        for &(code, name) in entries {
            by_code.insert(code, name);
            by_name.entry(name.to_lowercase()).or_insert((code, name));
        }
        Self { by_code, by_name }
    }

    fn name(&self, code: &str) -> Option<&'static str> {
        self.by_code.get(code).copied()
    }

    fn lookup(&self, name: &str) -> Option<(&'static str, &'static str)> {
        self.by_name.get(&name.to_lowercase()).copied()
    }
}

fn families(entries: &'static [(&'static str, &'static [&'static str])]) -> HashMap<&'static str, &'static str> {
    entries
        .iter()
        .flat_map(|&(family, codes)| codes.iter().map(move |&code| (code, family)))
        .collect()
}

static OS: LazyLock<Table> = LazyLock::new(|| Table::new(os::OPERATING_SYSTEMS));
static OS_FAMILY: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| families(os::OS_FAMILIES));
static BROWSER: LazyLock<Table> = LazyLock::new(|| Table::new(browsers::BROWSERS));
static BROWSER_FAMILY: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| families(browsers::BROWSER_FAMILIES));
static BRAND: LazyLock<Table> = LazyLock::new(|| Table::new(brands::BRANDS));

/// `(short code, canonical name)` of a known OS name.
pub fn os_short_code(name: &str) -> Option<(&'static str, &'static str)> {
    OS.lookup(name)
}

pub fn os_name(code: &str) -> Option<&'static str> {
    OS.name(code)
}

pub fn os_family(code: &str) -> Option<&'static str> {
    OS_FAMILY.get(code).copied()
}

pub fn is_desktop_os_family(family: &str) -> bool {
    os::DESKTOP_OS_FAMILIES.contains(&family)
}

/// `(short code, canonical name)` of a known browser name.
pub fn browser_short_code(name: &str) -> Option<(&'static str, &'static str)> {
    BROWSER.lookup(name)
}

pub fn browser_name(code: &str) -> Option<&'static str> {
    BROWSER.name(code)
}

pub fn browser_family(code: &str) -> Option<&'static str> {
    BROWSER_FAMILY.get(code).copied()
}

pub fn is_mobile_only_browser(code: &str) -> bool {
    browsers::MOBILE_ONLY_BROWSERS.contains(&code)
}

pub fn brand_code(name: &str) -> Option<&'static str> {
    BRAND.lookup(name).map(|(code, _)| code)
}

pub fn brand_name(code: &str) -> Option<&'static str> {
    BRAND.name(code)
}

/// Brand code stored in results for a brand name taken from a rule file.
///
/// `Unknown` resolves to the empty string; a name missing from the brand
/// table is kept as is.
pub fn resolve_brand(name: &str) -> String {
    if name.eq_ignore_ascii_case("unknown") {
        return String::new();
    }
    brand_code(name).unwrap_or(name).to_owned()
}
