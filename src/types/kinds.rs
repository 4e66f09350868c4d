use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Unit enum whose variants carry the lowercase label used in rule files and
/// in serialized results. Extra labels after `|` are accepted when parsing
/// only.
macro_rules! labeled_enum {
    (
        $(#[$m:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$var_meta:meta])* $var:ident => $label:literal $(| $alias:literal)* ),* $(,)?
        }
    ) => {
        $(#[$m])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$var_meta])* $var ),*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$var),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$var => $label ),*
                }
            }

            /// Case-insensitive label lookup.
            pub fn from_label(label: &str) -> Option<Self> {
                let label = label.trim().to_ascii_lowercase();
                match label.as_str() {
                    $( $label $(| $alias)* => Some(Self::$var), )*
                    _ => None,
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| UnknownLabel(s.to_owned()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// A label that names no known client or device type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type label {0:?}")]
pub struct UnknownLabel(pub String);

labeled_enum! {
    /// Client category; also the order-independent name of each client family.
    pub enum ClientType {
        Browser => "browser",
        FeedReader => "feed reader",
        MobileApp => "mobile app",
        Pim => "pim",
        Library => "library",
        MediaPlayer => "mediaplayer" | "media player",
    }
}

labeled_enum! {
    pub enum DeviceType {
        Desktop => "desktop",
        Smartphone => "smartphone",
        Tablet => "tablet",
        Phablet => "phablet",
        FeaturePhone => "feature phone",
        Console => "console",
        Tv => "tv" | "television",
        CarBrowser => "car browser",
        Camera => "camera",
        PortableMediaPlayer => "portable media player",
        Notebook => "notebook",
        SmartDisplay => "smart display",
        SmartSpeaker => "smart speaker",
        Wearable => "wearable",
        Peripheral => "peripheral",
    }
}

impl DeviceType {
    /// Device types that are mobile regardless of OS or client.
    pub fn is_mobile_kind(&self) -> bool {
        matches!(
            self,
            Self::FeaturePhone
                | Self::Smartphone
                | Self::Tablet
                | Self::Phablet
                | Self::Camera
                | Self::PortableMediaPlayer
        )
    }

    /// Device types that are never mobile.
    pub fn is_stationary_kind(&self) -> bool {
        matches!(self, Self::Tv | Self::SmartDisplay | Self::Console)
    }
}
