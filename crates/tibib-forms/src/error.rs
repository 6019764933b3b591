use std::path::PathBuf;

/// Errors raised while loading or validating [`RegistrationSettings`](crate::RegistrationSettings).
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("Invalid TOML settings: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("Invalid JSON settings: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Unsupported settings format: {0}")]
	UnsupportedFormat(PathBuf),
	#[error("Invalid setting {key}: {reason}")]
	Invalid { key: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
