use crate::parser::{PatternOptions, Rule};

/// Marker a UA must carry before the HbbTV family runs at all.
const HBBTV_MARKER: &str = r"HbbTV/([1-9]{1}(?:\.[0-9]{1}){1,2})";

/// Gate applied before a device family runs its brand rules.
#[derive(Debug)]
pub(crate) enum DevicePrefilter {
    /// Always run (mobiles, custom families).
    None,
    /// UA must match this rule to proceed (HbbTV).
    Marker(Rule),
    /// UA must match the family's combined brand pattern
    /// (consoles, car browsers, cameras, portable media players).
    OverallMatch,
}

impl DevicePrefilter {
    pub fn hbbtv(options: PatternOptions) -> Self {
        Self::Marker(Rule::new(HBBTV_MARKER, ()).with_options(options))
    }

    pub fn compile(&self) -> crate::Result<()> {
        match self {
            Self::Marker(rule) => rule.compile().map(|_| ()),
            Self::None | Self::OverallMatch => Ok(()),
        }
    }

    /// `overall` is the family's own pre-match over its brand rules.
    pub fn matches(&self, ua: &str, overall: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Self::None => true,
            Self::Marker(rule) => rule.is_match(ua),
            Self::OverallMatch => overall(ua),
        }
    }
}
