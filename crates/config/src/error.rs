//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A language override describes an unusable comment format.
	#[error("invalid comment format for language '{language}': {reason}")]
	InvalidFormat {
		/// Language identifier of the override.
		language: String,
		/// What is wrong with it.
		reason: &'static str,
	},

	/// A feature toggle has the wrong type.
	#[error("type mismatch for feature '{option}': expected {expected}, got {got}")]
	OptionTypeMismatch {
		/// The toggle's TOML key.
		option: String,
		/// The expected type name.
		expected: &'static str,
		/// The actual type name.
		got: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal warning during configuration parsing.
///
/// These warnings are collected during parsing and reported to the user,
/// but do not prevent the configuration from being loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// An unrecognized key inside the `[features]` table.
	UnknownFeature {
		/// The unrecognized key.
		key: String,
		/// A suggested alternative, if one is close enough.
		suggestion: Option<String>,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownFeature { key, suggestion } => {
				write!(f, "unknown feature '{key}' will be ignored")?;
				if let Some(s) = suggestion {
					write!(f, " (did you mean '{s}'?)")?;
				}
				Ok(())
			}
		}
	}
}
