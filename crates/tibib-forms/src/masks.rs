//! Input masks for registration form fields
//!
//! Each mask is a pure function from whatever the user typed to the value the
//! field should display. The page layer runs the mask on every `input` event
//! and writes the result back into the field.
//!
//! Rewriting the value moves the caret to the end of the field in most
//! browsers. Masks do not try to preserve the caret position.

use serde::{Deserialize, Serialize};

/// Default number of digits kept in a card number.
pub const DEFAULT_CARD_MAX_DIGITS: usize = 16;

/// Default number of digits per card-number group.
pub const DEFAULT_CARD_GROUP_SIZE: usize = 4;

/// Largest `max_digits` accepted by settings validation.
pub const MAX_CARD_DIGITS: usize = 32;

/// Grouping parameters for the card-number mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardNumberFormat {
	/// Digits beyond this count are dropped.
	pub max_digits: usize,
	/// A single space is inserted before every `group_size`-th digit.
	pub group_size: usize,
}

impl Default for CardNumberFormat {
	fn default() -> Self {
		Self {
			max_digits: DEFAULT_CARD_MAX_DIGITS,
			group_size: DEFAULT_CARD_GROUP_SIZE,
		}
	}
}

impl CardNumberFormat {
	/// Formats `raw` into space-separated digit groups.
	///
	/// # Examples
	///
	/// ```
	/// use tibib_forms::masks::CardNumberFormat;
	///
	/// let format = CardNumberFormat::default();
	/// assert_eq!(format.apply("4111-1111-1111-1111-99"), "4111 1111 1111 1111");
	/// assert_eq!(format.apply("12345"), "1234 5");
	/// ```
	pub fn apply(&self, raw: &str) -> String {
		// A zero group size is rejected by settings validation; treat it as "no grouping".
		let group_size = self.group_size.max(1);
		let digits = raw.len().min(self.max_digits);
		let mut formatted = String::with_capacity(digits + digits / group_size);

		for (i, digit) in raw
			.chars()
			.filter(char::is_ascii_digit)
			.take(self.max_digits)
			.enumerate()
		{
			if i > 0 && i % group_size == 0 {
				formatted.push(' ');
			}
			formatted.push(digit);
		}

		formatted
	}
}

/// Formats a card number with the default `XXXX XXXX XXXX XXXX` layout.
///
/// # Examples
///
/// ```
/// use tibib_forms::format_card_number;
///
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("abc"), "");
/// ```
pub fn format_card_number(raw: &str) -> String {
	CardNumberFormat::default().apply(raw)
}

/// Keeps only ASCII digits. Used for the phone-number field.
///
/// # Examples
///
/// ```
/// use tibib_forms::digits_only;
///
/// assert_eq!(digits_only("(0812) 345-678"), "0812345678");
/// ```
pub fn digits_only(raw: &str) -> String {
	raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes a dialling prefix such as `+62`.
///
/// Everything except ASCII digits and `+` is removed. When the remaining
/// value does not start with `+`, all `+` signs are dropped and a single
/// leading `+` is added. A value that already starts with `+` keeps any
/// later `+` signs as typed.
///
/// # Examples
///
/// ```
/// use tibib_forms::normalize_country_code;
///
/// assert_eq!(normalize_country_code("62"), "+62");
/// assert_eq!(normalize_country_code("6+2"), "+62");
/// assert_eq!(normalize_country_code("+6+2"), "+6+2");
/// assert_eq!(normalize_country_code(""), "+");
/// ```
pub fn normalize_country_code(raw: &str) -> String {
	let filtered: String = raw
		.chars()
		.filter(|c| c.is_ascii_digit() || *c == '+')
		.collect();

	if filtered.starts_with('+') {
		return filtered;
	}

	let mut normalized = String::with_capacity(filtered.len() + 1);
	normalized.push('+');
	normalized.extend(filtered.chars().filter(|c| *c != '+'));
	normalized
}

/// The masks bound to registration form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMask {
	/// Card number grouped into blocks of digits.
	CardNumber(CardNumberFormat),
	/// Digits only, unbounded.
	PhoneNumber,
	/// Digits with exactly one leading `+`.
	CountryCode,
}

impl InputMask {
	/// Runs the mask over a raw field value.
	pub fn apply(&self, raw: &str) -> String {
		match self {
			Self::CardNumber(format) => format.apply(raw),
			Self::PhoneNumber => digits_only(raw),
			Self::CountryCode => normalize_country_code(raw),
		}
	}

	/// Element id the mask is bound to on the stock registration page.
	pub fn default_element_id(&self) -> &'static str {
		match self {
			Self::CardNumber(_) => "card_number",
			Self::PhoneNumber => "phone_number",
			Self::CountryCode => "country_code",
		}
	}

	/// Short name used in log output.
	pub fn name(&self) -> &'static str {
		match self {
			Self::CardNumber(_) => "card number",
			Self::PhoneNumber => "phone number",
			Self::CountryCode => "country code",
		}
	}
}
