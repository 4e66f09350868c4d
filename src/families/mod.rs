//! Family parsers and the ordered chains that aggregate them.
//!
//! A family owns one ordered rule list for its category and reports the first
//! matching rule's result. A chain asks its families in order and reports the
//! first family that produced anything.

mod bot;
mod client;
mod device;
mod os;
mod vendor_fragment;

pub use bot::Bots;
pub use client::{ClientFamily, Engines};
pub use device::DeviceFamily;
pub use os::OperatingSystems;
pub use vendor_fragment::VendorFragments;

use crate::types::{BotMatchResult, ClientMatchResult, DeviceMatchResult, OsMatchResult};

pub trait BotParser: Send + Sync {
    fn name(&self) -> &str;

    fn parse(&self, ua: &str) -> Option<BotMatchResult>;

    /// Cheap test; `false` means `parse` cannot match. Custom parsers that
    /// cannot tell keep the default.
    fn pre_match(&self, _ua: &str) -> bool {
        true
    }

    /// Report only the bot name from now on.
    fn set_discard_details(&self, _discard: bool) {}
}

pub trait OsParser: Send + Sync {
    fn name(&self) -> &str;

    fn parse(&self, ua: &str) -> Option<OsMatchResult>;

    fn pre_match(&self, _ua: &str) -> bool {
        true
    }
}

pub trait ClientParser: Send + Sync {
    fn name(&self) -> &str;

    fn parse(&self, ua: &str) -> Option<ClientMatchResult>;

    fn pre_match(&self, _ua: &str) -> bool {
        true
    }
}

pub trait DeviceParser: Send + Sync {
    fn name(&self) -> &str;

    fn parse(&self, ua: &str) -> Option<DeviceMatchResult>;

    fn pre_match(&self, _ua: &str) -> bool {
        true
    }
}

/// Parsers of one kind, asked in order; the first result wins.
pub struct ParserChain<P: ?Sized> {
    parsers: Vec<Box<P>>,
}

pub type BotParsers = ParserChain<dyn BotParser>;
pub type OsParsers = ParserChain<dyn OsParser>;
pub type ClientParsers = ParserChain<dyn ClientParser>;
pub type DeviceParsers = ParserChain<dyn DeviceParser>;

impl<P: ?Sized> ParserChain<P> {
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Append at the lowest priority.
    pub fn push(&mut self, parser: Box<P>) {
        self.parsers.push(parser);
    }

    /// Insert at the highest priority.
    pub fn prepend(&mut self, parser: Box<P>) {
        self.parsers.insert(0, parser);
    }

    pub fn as_slice(&self) -> &[Box<P>] {
        &self.parsers
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl<P: ?Sized> Default for ParserChain<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> FromIterator<Box<P>> for ParserChain<P> {
    fn from_iter<I: IntoIterator<Item = Box<P>>>(iter: I) -> Self {
        Self {
            parsers: iter.into_iter().collect(),
        }
    }
}

impl ParserChain<dyn BotParser> {
    pub fn parse(&self, ua: &str) -> Option<BotMatchResult> {
        self.parsers.iter().find_map(|p| p.parse(ua))
    }

    pub fn set_discard_details(&self, discard: bool) {
        for parser in &self.parsers {
            parser.set_discard_details(discard);
        }
    }
}

impl ParserChain<dyn OsParser> {
    pub fn parse(&self, ua: &str) -> Option<OsMatchResult> {
        self.parsers.iter().find_map(|p| p.parse(ua))
    }
}

impl ParserChain<dyn ClientParser> {
    pub fn parse(&self, ua: &str) -> Option<ClientMatchResult> {
        self.parsers.iter().find_map(|p| p.parse(ua))
    }
}

impl ParserChain<dyn DeviceParser> {
    pub fn parse(&self, ua: &str) -> Option<DeviceMatchResult> {
        self.parsers.iter().find_map(|p| p.parse(ua))
    }
}
