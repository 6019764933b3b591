//! Registration page settings
//!
//! Every field has a default that matches the stock registration template, so
//! an empty TOML or JSON document yields a working configuration.
//!
//! ## Example
//!
//! ```
//! use tibib_forms::RegistrationSettings;
//!
//! let settings = RegistrationSettings::from_toml_str(
//!     r#"
//!     valid_class = "is-valid"
//!
//!     [elements]
//!     form = "signup"
//!
//!     [password]
//!     min_length = 10
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.elements.form, "signup");
//! assert_eq!(settings.elements.password, "password");
//! assert_eq!(settings.password.min_length, 10);
//! ```

use crate::error::{SettingsError, SettingsResult};
use crate::masks::{CardNumberFormat, InputMask, MAX_CARD_DIGITS};
use crate::password::{PasswordPolicy, PasswordRule};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Message shown when a submission is blocked by failing password rules.
pub const DEFAULT_REJECTION_MESSAGE: &str =
	"Please make sure your password meets all requirements.";

/// Class toggled on indicator elements whose rule passes.
pub const DEFAULT_VALID_CLASS: &str = "valid";

/// Ids of the password rule indicator elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorIds {
	pub length: String,
	pub uppercase: String,
	pub lowercase: String,
	pub number: String,
	pub special: String,
}

impl Default for IndicatorIds {
	fn default() -> Self {
		Self {
			length: PasswordRule::Length.indicator_id().to_string(),
			uppercase: PasswordRule::Uppercase.indicator_id().to_string(),
			lowercase: PasswordRule::Lowercase.indicator_id().to_string(),
			number: PasswordRule::Number.indicator_id().to_string(),
			special: PasswordRule::Special.indicator_id().to_string(),
		}
	}
}

impl IndicatorIds {
	/// Indicator id for `rule`.
	pub fn get(&self, rule: PasswordRule) -> &str {
		match rule {
			PasswordRule::Length => &self.length,
			PasswordRule::Uppercase => &self.uppercase,
			PasswordRule::Lowercase => &self.lowercase,
			PasswordRule::Number => &self.number,
			PasswordRule::Special => &self.special,
		}
	}
}

/// Ids of the form and its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
	pub card_number: String,
	pub password: String,
	pub form: String,
	pub phone_number: String,
	pub country_code: String,
	pub indicators: IndicatorIds,
}

impl Default for ElementIds {
	fn default() -> Self {
		Self {
			card_number: "card_number".to_string(),
			password: "password".to_string(),
			form: "registerForm".to_string(),
			phone_number: "phone_number".to_string(),
			country_code: "country_code".to_string(),
			indicators: IndicatorIds::default(),
		}
	}
}

/// Settings for the registration page behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSettings {
	pub elements: ElementIds,
	pub valid_class: String,
	pub rejection_message: String,
	pub card: CardNumberFormat,
	pub password: PasswordPolicy,
}

impl Default for RegistrationSettings {
	fn default() -> Self {
		Self {
			elements: ElementIds::default(),
			valid_class: DEFAULT_VALID_CLASS.to_string(),
			rejection_message: DEFAULT_REJECTION_MESSAGE.to_string(),
			card: CardNumberFormat::default(),
			password: PasswordPolicy::default(),
		}
	}
}

impl RegistrationSettings {
	/// Parses and validates settings from TOML.
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Parses and validates settings from JSON.
	pub fn from_json_str(source: &str) -> SettingsResult<Self> {
		let settings: Self = serde_json::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a `.toml` or `.json` file.
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		match path.extension().and_then(|ext| ext.to_str()) {
			Some("toml") => Self::from_toml_str(&source),
			Some("json") => Self::from_json_str(&source),
			_ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
		}
	}

	/// Checks values that deserialization alone cannot rule out.
	pub fn validate(&self) -> SettingsResult<()> {
		if self.card.group_size == 0 {
			return Err(invalid("card.group_size", "must be greater than zero"));
		}
		if self.card.max_digits == 0 {
			return Err(invalid("card.max_digits", "must be greater than zero"));
		}
		if self.card.max_digits > MAX_CARD_DIGITS {
			return Err(SettingsError::Invalid {
				key: "card.max_digits",
				reason: format!("must be at most {MAX_CARD_DIGITS}"),
			});
		}
		if self.password.min_length == 0 {
			return Err(invalid("password.min_length", "must be greater than zero"));
		}
		if self.valid_class.trim().is_empty() {
			return Err(invalid("valid_class", "must not be empty"));
		}
		if self.valid_class.contains(char::is_whitespace) {
			return Err(invalid("valid_class", "must be a single class name"));
		}

		let elements = &self.elements;
		let ids = [
			("elements.card_number", &elements.card_number),
			("elements.password", &elements.password),
			("elements.form", &elements.form),
			("elements.phone_number", &elements.phone_number),
			("elements.country_code", &elements.country_code),
			("elements.indicators.length", &elements.indicators.length),
			("elements.indicators.uppercase", &elements.indicators.uppercase),
			("elements.indicators.lowercase", &elements.indicators.lowercase),
			("elements.indicators.number", &elements.indicators.number),
			("elements.indicators.special", &elements.indicators.special),
		];
		for (key, id) in ids {
			if id.trim().is_empty() {
				return Err(invalid(key, "element id must not be empty"));
			}
		}

		Ok(())
	}

	/// Each input mask paired with the id of the field it is bound to.
	pub fn masks(&self) -> [(InputMask, &str); 3] {
		[
			(InputMask::CardNumber(self.card), self.elements.card_number.as_str()),
			(InputMask::PhoneNumber, self.elements.phone_number.as_str()),
			(InputMask::CountryCode, self.elements.country_code.as_str()),
		]
	}
}

fn invalid(key: &'static str, reason: &str) -> SettingsError {
	SettingsError::Invalid {
		key,
		reason: reason.to_string(),
	}
}
