use serde::{Deserialize, Serialize};

/// How many dot-separated segments of an OS or client version are reported.
///
/// This is detector-wide configuration: every OS and client version produced
/// by a [`DeviceDetector`](crate::DeviceDetector) is truncated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionTruncation {
    /// Keep the version as built.
    #[default]
    None,
    /// Keep four segments (`34.0.1847.114`).
    Build,
    /// Keep three segments (`34.0.1847`).
    Patch,
    /// Keep two segments (`34.0`).
    Minor,
    /// Keep one segment (`34`).
    Major,
}

impl VersionTruncation {
    fn max_segments(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Build => Some(4),
            Self::Patch => Some(3),
            Self::Minor => Some(2),
            Self::Major => Some(1),
        }
    }

    pub fn truncate(self, version: &str) -> String {
        match self.max_segments() {
            Some(keep) if version.split('.').count() > keep => {
                version.split('.').take(keep).collect::<Vec<_>>().join(".")
            }
            _ => version.to_owned(),
        }
    }
}

/// Simple semver-ish comparison: is `a < b`?  Compares dot-separated numeric
/// components left to right (missing components treated as 0).
pub(crate) fn version_lt(a: &str, b: &str) -> bool {
    let mut ai = a.split('.');
    let mut bi = b.split('.');
    loop {
        match (ai.next(), bi.next()) {
            (None, None) => return false,
            (None, Some(bv)) => return bv.parse::<u32>().unwrap_or(0) > 0,
            (Some(_), None) => return false,
            (Some(av), Some(bv)) => {
                let an = av.parse::<u32>().unwrap_or(0);
                let bn = bv.parse::<u32>().unwrap_or(0);
                if an < bn {
                    return true;
                }
                if an > bn {
                    return false;
                }
            }
        }
    }
}

/// Simple semver-ish comparison: is `a >= b`?
pub(crate) fn version_ge(a: &str, b: &str) -> bool {
    !version_lt(a, b)
}
