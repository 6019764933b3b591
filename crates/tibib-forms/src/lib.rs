//! Registration form rules for tibib
//!
//! This crate holds the target-independent half of the registration page:
//! - Input masks for the card-number, phone-number and country-code fields
//! - The password rule table and its evaluation report
//! - Page settings (element ids, marker class, messages) loadable from TOML or JSON
//!
//! Nothing here touches the DOM. `tibib-pages` binds these rules to a document.
//!
//! ## Example
//!
//! ```
//! use tibib_forms::{evaluate, format_card_number, normalize_country_code};
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(normalize_country_code("62"), "+62");
//! assert!(evaluate("Abcdef1!").all_ok());
//! ```

pub mod error;
pub mod masks;
pub mod password;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use masks::{
	CardNumberFormat, InputMask, MAX_CARD_DIGITS, digits_only, format_card_number,
	normalize_country_code,
};
pub use password::{
	PasswordPolicy, PasswordReport, PasswordRule, RULES, SPECIAL_CHARACTERS, evaluate,
};
pub use settings::{
	DEFAULT_REJECTION_MESSAGE, DEFAULT_VALID_CLASS, ElementIds, IndicatorIds,
	RegistrationSettings,
};
