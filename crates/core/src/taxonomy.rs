//! Feature taxonomy definitions used to seed an empty database.
//!
//! Definitions come from an optional YAML file:
//!
//! ```yaml
//! features:
//!   - name: Fire
//!     color: "#ef4444"
//!     types:
//!       light: Ember
//!       middle: Flame
//!       dark: Inferno
//! ```
//!
//! Any shade left out (or blank) is named `"<Feature> <Shade>"`, e.g.
//! `"Fire Light"`. When the file is missing, unreadable, invalid or lists no
//! features, [`resolve`] falls back to [`builtin_features`].

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::shade::Shade;

/// `#rgb` or `#rrggbb`.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

/// Built-in features, in display order.
const BUILTIN: [(&str, &str); 5] = [
    ("Fire", "#ef4444"),
    ("Earth", "#eab308"),
    ("Metal", "#f5f5f5"),
    ("Water", "#1e40af"),
    ("Life", "#22c55e"),
];

/// Optional per-shade type names of a feature definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShadeNames {
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub middle: Option<String>,
    #[serde(default)]
    pub dark: Option<String>,
}

impl ShadeNames {
    fn get(&self, shade: Shade) -> Option<&str> {
        match shade {
            Shade::Light => self.light.as_deref(),
            Shade::Middle => self.middle.as_deref(),
            Shade::Dark => self.dark.as_deref(),
        }
    }
}

/// One top-level feature and the names of its three shade types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureDefinition {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub types: ShadeNames,
}

impl FeatureDefinition {
    /// Name to give the feature type for `shade`.
    ///
    /// Uses the configured name when present and non-blank, otherwise
    /// `"<Feature> <Shade>"`.
    pub fn type_name(&self, shade: Shade) -> String {
        match self.types.get(shade).map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{} {}", self.name, shade.label()),
        }
    }

    /// `(shade, name)` pairs for the three feature types, in display order.
    pub fn planned_types(&self) -> [(Shade, String); 3] {
        Shade::ALL.map(|shade| (shade, self.type_name(shade)))
    }

    fn validate(&self, index: usize) -> Result<(), TaxonomyError> {
        if self.name.trim().is_empty() {
            return Err(TaxonomyError::Invalid(format!(
                "feature #{} has an empty name",
                index + 1
            )));
        }
        if !is_hex_color(&self.color) {
            return Err(TaxonomyError::Invalid(format!(
                "feature '{}' has color '{}', expected #rgb or #rrggbb",
                self.name, self.color
            )));
        }
        Ok(())
    }
}

/// Top-level shape of the taxonomy YAML file.
#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(default)]
    features: Vec<FeatureDefinition>,
}

/// Why a taxonomy file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("taxonomy file {0} does not exist")]
    Missing(PathBuf),

    #[error("failed to read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse taxonomy file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid taxonomy: {0}")]
    Invalid(String),

    #[error("taxonomy file lists no features")]
    Empty,
}

/// Where the seeded definitions came from.
#[derive(Debug)]
pub enum TaxonomySource {
    /// Loaded from the given YAML file.
    Config(PathBuf),
    /// Built-in defaults, with the reason the file was not used.
    Builtin(TaxonomyError),
}

/// The definitions to seed, in order, plus their provenance.
#[derive(Debug)]
pub struct ResolvedTaxonomy {
    pub source: TaxonomySource,
    pub features: Vec<FeatureDefinition>,
}

/// Whether `color` is a `#rgb` or `#rrggbb` hex string.
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// The five built-in features: Fire, Earth, Metal, Water, Life.
pub fn builtin_features() -> Vec<FeatureDefinition> {
    BUILTIN
        .iter()
        .map(|(name, color)| FeatureDefinition {
            name: (*name).to_string(),
            color: (*color).to_string(),
            types: ShadeNames::default(),
        })
        .collect()
}

/// Parse taxonomy YAML. Fails when the document is malformed, invalid, or empty.
pub fn parse_definitions(yaml: &str) -> Result<Vec<FeatureDefinition>, TaxonomyError> {
    let file: TaxonomyFile = serde_yaml::from_str(yaml)?;
    if file.features.is_empty() {
        return Err(TaxonomyError::Empty);
    }
    for (index, feature) in file.features.iter().enumerate() {
        feature.validate(index)?;
    }
    Ok(file.features)
}

/// Read and parse the taxonomy file at `path`.
pub fn load_definitions(path: &Path) -> Result<Vec<FeatureDefinition>, TaxonomyError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TaxonomyError::Missing(path.to_path_buf())
        } else {
            TaxonomyError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_definitions(&contents)
}

/// Load definitions from `path`, falling back to the built-in list on any failure.
pub fn resolve(path: &Path) -> ResolvedTaxonomy {
    match load_definitions(path) {
        Ok(features) => ResolvedTaxonomy {
            source: TaxonomySource::Config(path.to_path_buf()),
            features,
        },
        Err(reason) => ResolvedTaxonomy {
            source: TaxonomySource::Builtin(reason),
            features: builtin_features(),
        },
    }
}
