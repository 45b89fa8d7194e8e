//! Name-keyed wish catalog and random selection.

use anyhow::{Context, Result};
use rand::{seq::index, Rng};
use serde::Deserialize;
use std::collections::HashMap;

/// Catalog key used when a name has no wishes of its own.
pub const DEFAULT_KEY: &str = "default";

/// Prefix put in front of every displayed wish.
pub const WISH_BULLET: &str = "✨ ";

const BUILTIN_WISHES: [&str; 3] = [
    "Wishing you a colorful new year!",
    "New year, new luck!",
    "Health and happiness, that is my wish for you!",
];

#[derive(Deserialize)]
struct WishesFile {
    wishes: HashMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WishCatalog {
    wishes: HashMap<String, Vec<String>>,
}

impl WishCatalog {
    pub fn new(wishes: HashMap<String, Vec<String>>) -> Self {
        Self { wishes }
    }

    /// The fallback catalog used when `wishes.json` can't be loaded.
    pub fn builtin() -> Self {
        let defaults = BUILTIN_WISHES.iter().map(|s| s.to_string()).collect();
        Self::new(HashMap::from([(DEFAULT_KEY.to_string(), defaults)]))
    }

    /// Parse a `{"wishes": {"<name>": [...]}}` document.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: WishesFile =
            serde_json::from_str(text).context("failed to parse wishes document")?;
        let catalog = Self::new(file.wishes);
        if catalog.entries(DEFAULT_KEY).is_empty() {
            log::warn!("wishes document has no \"{}\" entries", DEFAULT_KEY);
        }
        Ok(catalog)
    }

    /// Like [`WishCatalog::from_json`], substituting [`WishCatalog::builtin`] on error.
    pub fn from_json_or_builtin(text: &str) -> Self {
        Self::from_json(text).unwrap_or_else(|e| {
            log::warn!("using builtin wishes: {:#}", e);
            Self::builtin()
        })
    }

    /// Wishes for `name`, falling back to the default entry. Empty lists count as missing.
    pub fn entries(&self, name: &str) -> &[String] {
        [name, DEFAULT_KEY]
            .into_iter()
            .filter_map(|key| self.wishes.get(key))
            .find(|list| !list.is_empty())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Up to `limit` wishes for `name`, each index drawn at most once.
    pub fn pick_many<R: Rng + ?Sized>(&self, name: &str, limit: usize, rng: &mut R) -> Vec<&str> {
        let list = self.entries(name);
        let amount = limit.min(list.len());
        index::sample(rng, list.len(), amount)
            .into_iter()
            .map(|i| list[i].as_str())
            .collect()
    }

    /// A single random wish, or a generic congratulation when none exist.
    pub fn pick_one<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> String {
        let list = self.entries(name);
        if list.is_empty() {
            return fallback_wish(name);
        }
        list[rng.random_range(0..list.len())].clone()
    }
}

pub fn fallback_wish(name: &str) -> String {
    format!("Congratulations, {}!", name)
}

/// Text shown for one wish in the wishes list.
pub fn format_wish(wish: &str) -> String {
    format!("{}{}", WISH_BULLET, wish)
}
