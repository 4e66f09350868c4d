use rayon::prelude::*;

use super::DeviceParser;
use crate::db::DeviceBrandMap;
use crate::device_prefilter::DevicePrefilter;
use crate::error::Result;
use crate::parser::{MatchResult, PatternOptions, Rule, RuleList};
use crate::parser_data::{DeviceBrandData, DeviceModelData};
use crate::substitution::build_model;
use crate::tables;
use crate::types::{DeviceMatchResult, DeviceType};

/// One device category from `device/*.yml`: brand rules in file order, each
/// with optional model sub-rules.
pub struct DeviceFamily {
    name: String,
    default_type: Option<DeviceType>,
    prefilter: DevicePrefilter,
    /// The family reports `default_type` whenever its prefilter passes, with
    /// or without a brand match.
    claims_type: bool,
    brands: RuleList<DeviceBrandData>,
}

impl DeviceFamily {
    /// An ungated family; `default_type` applies when neither the brand nor
    /// the model rule names a type.
    pub fn new(
        name: impl Into<String>,
        default_type: Option<DeviceType>,
        brands: DeviceBrandMap,
        options: PatternOptions,
    ) -> Result<Self> {
        Self::build(name.into(), default_type, DevicePrefilter::None, false, brands, options)
    }

    /// Runs only for `HbbTV/x.y` UAs and always reports a tv.
    pub fn hbbtv(brands: DeviceBrandMap, options: PatternOptions) -> Result<Self> {
        let gate = DevicePrefilter::hbbtv(options);
        Self::build("hbbtv".into(), Some(DeviceType::Tv), gate, true, brands, options)
    }

    pub fn consoles(brands: DeviceBrandMap, options: PatternOptions) -> Result<Self> {
        Self::gated("console", DeviceType::Console, brands, options)
    }

    pub fn car_browsers(brands: DeviceBrandMap, options: PatternOptions) -> Result<Self> {
        Self::gated("car browser", DeviceType::CarBrowser, brands, options)
    }

    pub fn cameras(brands: DeviceBrandMap, options: PatternOptions) -> Result<Self> {
        Self::gated("camera", DeviceType::Camera, brands, options)
    }

    pub fn portable_media_players(brands: DeviceBrandMap, options: PatternOptions) -> Result<Self> {
        Self::gated(
            "portable media player",
            DeviceType::PortableMediaPlayer,
            brands,
            options,
        )
    }

    /// Always runs; the type comes from the brand or model rule only.
    pub fn mobiles(brands: DeviceBrandMap, options: PatternOptions) -> Result<Self> {
        Self::new("mobile", None, brands, options)
    }

    fn gated(
        name: &str,
        default_type: DeviceType,
        brands: DeviceBrandMap,
        options: PatternOptions,
    ) -> Result<Self> {
        Self::build(
            name.into(),
            Some(default_type),
            DevicePrefilter::OverallMatch,
            false,
            brands,
            options,
        )
    }

    fn build(
        name: String,
        default_type: Option<DeviceType>,
        prefilter: DevicePrefilter,
        claims_type: bool,
        brands: DeviceBrandMap,
        options: PatternOptions,
    ) -> Result<Self> {
        // Brands without a regex cannot match and are dropped, order preserved.
        let brands = RuleList::new(
            brands.into_iter().filter_map(|(brand_name, entry)| {
                let regex = entry.regex?;
                let models = entry
                    .models
                    .unwrap_or_default()
                    .into_iter()
                    .map(|model| {
                        Rule::new(
                            model.regex,
                            DeviceModelData {
                                brand: model.brand.as_deref().map(tables::resolve_brand),
                                model_template: model.model,
                                device_type: model.device.as_deref().and_then(DeviceType::from_label),
                            },
                        )
                        .with_options(options)
                    })
                    .collect();
                Some((
                    regex,
                    DeviceBrandData {
                        brand: tables::resolve_brand(&brand_name),
                        model_template: entry.model,
                        device_type: entry.device.as_deref().and_then(DeviceType::from_label),
                        models,
                    },
                ))
            }),
            options,
        );

        prefilter.compile()?;
        brands.compile_all()?;
        brands.rules().par_iter().try_for_each(|brand| {
            brand
                .data()
                .models
                .par_iter()
                .try_for_each(|model| model.compile().map(|_| ()))
        })?;

        Ok(Self {
            name,
            default_type,
            prefilter,
            claims_type,
            brands,
        })
    }

    pub fn default_type(&self) -> Option<DeviceType> {
        self.default_type
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.len() == 0
    }

    fn resolve(&self, ua: &str, m: MatchResult<'_, '_, DeviceBrandData>) -> DeviceMatchResult {
        let brand = m.data;
        let model_match = brand
            .models
            .iter()
            .find_map(|rule| rule.captures(ua).map(|captures| (rule.data(), captures)));

        match model_match {
            Some((model, captures)) => DeviceMatchResult {
                kind: model.device_type.or(brand.device_type).or(self.default_type),
                brand: model.brand.clone().unwrap_or_else(|| brand.brand.clone()),
                model: model
                    .model_template
                    .as_deref()
                    .map(|tpl| build_model(tpl, &captures))
                    .unwrap_or_default(),
            },
            None => DeviceMatchResult {
                kind: brand.device_type.or(self.default_type),
                brand: brand.brand.clone(),
                model: brand
                    .model_template
                    .as_deref()
                    .map(|tpl| build_model(tpl, &m.captures))
                    .unwrap_or_default(),
            },
        }
    }
}

impl DeviceParser for DeviceFamily {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, ua: &str) -> Option<DeviceMatchResult> {
        if !self.prefilter.matches(ua, |ua| self.brands.pre_match(ua)) {
            return None;
        }
        match self.brands.match_first(ua) {
            Some(m) => {
                let mut device = self.resolve(ua, m);
                if self.claims_type {
                    device.kind = self.default_type;
                }
                Some(device)
            }
            None if self.claims_type => Some(DeviceMatchResult {
                kind: self.default_type,
                ..DeviceMatchResult::default()
            }),
            None => None,
        }
    }

    fn pre_match(&self, ua: &str) -> bool {
        self.prefilter.matches(ua, |ua| self.brands.pre_match(ua))
    }
}
