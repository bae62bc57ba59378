//! App Configuration
//!
//! Defaults are compiled in; `app.toml` (embedded at build time) may override them.

use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{Item, ItemId, Quantity};

const EMBEDDED: &str = include_str!("../app.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedItem {
    pub description: String,
    #[serde(default)]
    pub quantity: Quantity,
    #[serde(default)]
    pub packed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub log_level: String,
    /// Choices offered by the quantity select, first one is the default
    pub quantity_options: Vec<Quantity>,
    pub seed_items: Vec<SeedItem>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let seed = |description: &str, n| SeedItem {
            description: description.to_string(),
            quantity: Quantity::try_from(n).unwrap_or_default(),
            packed: false,
        };
        Self {
            title: "My Travel List".to_string(),
            log_level: "info".to_string(),
            quantity_options: [1, 2, 3].into_iter().filter_map(|n| Quantity::try_from(n).ok()).collect(),
            seed_items: vec![seed("Shirt", 5), seed("Pants", 2)],
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        if config.quantity_options.is_empty() {
            return Err(ConfigError::NoQuantityOptions);
        }
        config.seed()?;
        Ok(config)
    }

    /// The config compiled into the app
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::INFO)
    }

    pub fn default_quantity(&self) -> Quantity {
        self.quantity_options.first().copied().unwrap_or_default()
    }

    /// Starting items, numbered from 1 in file order
    pub fn seed(&self) -> Result<Vec<Item>, ConfigError> {
        self.seed_items
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let mut item = Item::new(ItemId(index as u64 + 1), s.description.clone(), s.quantity)
                    .map_err(|source| ConfigError::SeedItem { index, source })?;
                item.packed = s.packed;
                Ok(item)
            })
            .collect()
    }
}
