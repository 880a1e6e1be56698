//! Configuration system for quill.
//!
//! Configuration is written in TOML and has two sections, both optional:
//!
//! ```toml
//! # Advisory host queries used while resolving doc-block context.
//! [features]
//! scope-detection = true
//! declaration-lookup = true
//!
//! # Per-language comment formats, layered over the built-in catalog.
//! [languages.rust]
//! start = "///"
//! prefix = "/// "
//! inline = "//"
//! multi-line = false
//! ```
//!
//! Unknown feature keys are collected in [`QuillConfig::warnings`] rather than
//! rejected. Malformed language overrides are errors.

pub mod error;

use std::collections::BTreeMap;
use std::path::Path;

pub use error::{ConfigError, ConfigWarning, Result};
use serde::Deserialize;

/// Feature toggle keys recognized in the `[features]` table.
const FEATURE_KEYS: &[&str] = &["scope-detection", "declaration-lookup"];

/// Minimum similarity for an unknown key to get a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Loaded configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuillConfig {
	/// Which advisory host queries are enabled.
	pub features: FeatureToggles,
	/// Comment format overrides keyed by language identifier.
	pub languages: BTreeMap<String, FormatOverride>,
	/// Non-fatal problems found while parsing.
	pub warnings: Vec<ConfigWarning>,
}

/// Switches for the optional host queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureToggles {
	/// Ask the host for semantic scopes before falling back to text matching.
	pub scope_detection: bool,
	/// Ask the host for the declaration a doc block documents.
	pub declaration_lookup: bool,
}

impl Default for FeatureToggles {
	fn default() -> Self {
		Self {
			scope_detection: true,
			declaration_lookup: true,
		}
	}
}

/// A user-supplied comment format for one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FormatOverride {
	/// Marker opening a doc block.
	pub start: String,
	/// Marker prefixed to interior lines.
	#[serde(default)]
	pub prefix: String,
	/// Marker closing a doc block, if the dialect has one.
	#[serde(default)]
	pub end: Option<String>,
	/// Marker for ordinary line comments.
	#[serde(default)]
	pub inline: Option<String>,
	/// Whether the dialect has separate start/content/end lines.
	///
	/// Defaults to true exactly when an end marker is given.
	#[serde(default)]
	pub multi_line: Option<bool>,
}

impl FormatOverride {
	/// Resolved multi-line flag.
	pub fn is_multi_line(&self) -> bool {
		self.multi_line.unwrap_or(self.end.is_some())
	}

	fn validate(&self, language: &str) -> Result<()> {
		let invalid = |reason| ConfigError::InvalidFormat {
			language: language.to_string(),
			reason,
		};

		if self.start.is_empty() {
			return Err(invalid("start marker must not be empty"));
		}
		if self.end.as_deref().is_some_and(str::is_empty) {
			return Err(invalid("end marker must not be empty when present"));
		}
		if !self.is_multi_line() && self.end.is_some() {
			return Err(invalid("single-line doc dialects cannot have an end marker"));
		}
		Ok(())
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
	features: toml::Table,
	languages: BTreeMap<String, FormatOverride>,
}

impl QuillConfig {
	/// Parses configuration from TOML text.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;

		let mut warnings = Vec::new();
		let features = parse_features(&raw.features, &mut warnings)?;

		for (language, format) in &raw.languages {
			format.validate(language)?;
		}

		for warning in &warnings {
			tracing::warn!(%warning, "config warning");
		}

		Ok(Self {
			features,
			languages: raw.languages,
			warnings,
		})
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&content)?;
		tracing::debug!(
			path = %path.display(),
			languages = config.languages.len(),
			"loaded quill config"
		);
		Ok(config)
	}
}

fn parse_features(table: &toml::Table, warnings: &mut Vec<ConfigWarning>) -> Result<FeatureToggles> {
	let mut toggles = FeatureToggles::default();

	for (key, value) in table {
		let slot = match key.as_str() {
			"scope-detection" => &mut toggles.scope_detection,
			"declaration-lookup" => &mut toggles.declaration_lookup,
			_ => {
				warnings.push(ConfigWarning::UnknownFeature {
					key: key.clone(),
					suggestion: suggest_feature(key),
				});
				continue;
			}
		};

		*slot = value.as_bool().ok_or_else(|| ConfigError::OptionTypeMismatch {
			option: key.clone(),
			expected: "boolean",
			got: value.type_str(),
		})?;
	}

	Ok(toggles)
}

fn suggest_feature(key: &str) -> Option<String> {
	FEATURE_KEYS
		.iter()
		.map(|candidate| (candidate, strsim::jaro_winkler(key, candidate)))
		.filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
		.max_by(|a, b| a.1.total_cmp(&b.1))
		.map(|(candidate, _)| candidate.to_string())
}
