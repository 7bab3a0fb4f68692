//! Application-level configuration loading, including the chip catalog definitions.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::state::catalog::{ChipCatalog, ChipDefinition, ChipKind};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/catalog.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "CHIP_LOCKED_BACK_CONFIG_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    catalog: ChipCatalog,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the baked-in chip set.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => match ChipCatalog::try_from(raw) {
                    Ok(catalog) => {
                        info!(
                            path = %path.display(),
                            count = catalog.len(),
                            "loaded chip catalog from config"
                        );
                        Self { catalog }
                    }
                    Err(err) => {
                        warn!(
                            path = %path.display(),
                            error = %err,
                            "invalid chip catalog; falling back to defaults"
                        );
                        Self::default()
                    }
                },
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Hand the loaded catalog over to the application state.
    pub fn into_catalog(self) -> ChipCatalog {
        self.catalog
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
        }
    }
}

#[derive(Debug, Error)]
enum CatalogConfigError {
    #[error("catalog declares no chips")]
    Empty,
    #[error("chip entry without a name")]
    UnnamedChip,
    #[error("duplicate chip name `{0}`")]
    DuplicateChip(String),
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    chips: Vec<RawChip>,
}

#[derive(Debug, Deserialize)]
/// JSON representation of a single chip entry inside the configuration file.
struct RawChip {
    name: String,
    kind: ChipKind,
    #[serde(default)]
    description: String,
}

impl TryFrom<RawConfig> for ChipCatalog {
    type Error = CatalogConfigError;

    fn try_from(value: RawConfig) -> Result<Self, Self::Error> {
        if value.chips.is_empty() {
            return Err(CatalogConfigError::Empty);
        }

        let mut chips = IndexMap::with_capacity(value.chips.len());
        for chip in value.chips {
            let name = chip.name.trim().to_owned();
            if name.is_empty() {
                return Err(CatalogConfigError::UnnamedChip);
            }

            let definition = ChipDefinition {
                kind: chip.kind,
                description: chip.description,
            };
            if chips.insert(name.clone(), definition).is_some() {
                return Err(CatalogConfigError::DuplicateChip(name));
            }
        }

        Ok(ChipCatalog::new(chips))
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in chip set shipped with the binary.
fn default_catalog() -> ChipCatalog {
    let chips = [
        ("Ace Chip", ChipKind::Good, "Hole out directly from the tee."),
        ("Eagle Chip", ChipKind::Good, "Finish a hole two under par."),
        ("Birdie Chip", ChipKind::Good, "Finish a hole one under par."),
        ("Throw-in Chip", ChipKind::Good, "Hole out from outside the putting green."),
        ("Big Putter Chip", ChipKind::Good, "Sink the longest made putt of the card."),
        ("Stroke Chip", ChipKind::Good, "Win a hole outright against the whole card."),
        ("Drop-in Chip", ChipKind::Good, "Finish a hole with a tap-in from under the basket."),
        (
            "Rescue Ranger Chip",
            ChipKind::Good,
            "Save your score with an escape throw from deep trouble.",
        ),
        ("Scramble Chip", ChipKind::Good, "Save par from outside Circle 2 after an errant drive."),
        ("Pured Chip", ChipKind::Good, "Throw the cleanest drive of the card on a hole."),
        ("Bogey Chip", ChipKind::Bad, "Finish a hole one over par."),
        ("Double Chip", ChipKind::Bad, "Finish a hole two over par."),
        ("Triple+ Chip", ChipKind::Bad, "Finish a hole three or more over par."),
        ("Air Ball Chip", ChipKind::Bad, "Miss the basket entirely from the putting green."),
        ("Tree Chip", ChipKind::Bad, "Smack a tree with your drive."),
        ("Penalty Stroke Chip", ChipKind::Bad, "Take a penalty stroke anywhere on the hole."),
        ("Dethroned Chip", ChipKind::Bad, "Lose a held chip to the player who just out-did you."),
        ("Bonus Chip", ChipKind::Good, "Awarded by the card for anything remarkable."),
    ]
    .into_iter()
    .map(|(name, kind, description)| {
        (
            name.to_owned(),
            ChipDefinition {
                kind,
                description: description.to_owned(),
            },
        )
    })
    .collect::<IndexMap<_, _>>();

    ChipCatalog::new(chips)
}
