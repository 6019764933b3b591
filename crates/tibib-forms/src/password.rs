//! Password strength rules
//!
//! The registration page checks a password against five independent rules.
//! Rules are kept in a declarative table ([`RULES`]) so callers can iterate
//! them, render one indicator per rule, and test them generically.
//!
//! Every evaluation starts from scratch on the full password string; no state
//! is carried between calls.
//!
//! ## Security Note
//!
//! These rules drive client-side feedback only. The server re-validates the
//! password when the form is submitted.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

static UPPERCASE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[A-Z]").expect("UPPERCASE_REGEX: invalid regex pattern"));

static LOWERCASE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[a-z]").expect("LOWERCASE_REGEX: invalid regex pattern"));

static NUMBER_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[0-9]").expect("NUMBER_REGEX: invalid regex pattern"));

static SPECIAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"[!@#$%\^&*(),.?":{}|<>]"#).expect("SPECIAL_REGEX: invalid regex pattern")
});

/// Tunable part of the password rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
	/// Minimum length, counted in UTF-16 code units like a browser's `value.length`.
	pub min_length: usize,
}

impl Default for PasswordPolicy {
	fn default() -> Self {
		Self {
			min_length: DEFAULT_MIN_LENGTH,
		}
	}
}

impl PasswordPolicy {
	/// Creates a policy with a custom minimum length.
	pub fn with_min_length(min_length: usize) -> Self {
		Self { min_length }
	}

	/// Evaluates every rule against `password`.
	///
	/// # Examples
	///
	/// ```
	/// use tibib_forms::PasswordPolicy;
	///
	/// let report = PasswordPolicy::default().evaluate("Abcdef1!");
	/// assert!(report.all_ok());
	/// ```
	pub fn evaluate(&self, password: &str) -> PasswordReport {
		let mut report = PasswordReport::default();
		for (rule, check) in RULES {
			report.set(rule, check(self, password));
		}
		report
	}
}

/// A single password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
	/// At least `min_length` characters.
	Length,
	/// At least one `A-Z`.
	Uppercase,
	/// At least one `a-z`.
	Lowercase,
	/// At least one `0-9`.
	Number,
	/// At least one of [`SPECIAL_CHARACTERS`].
	Special,
}

type RulePredicate = fn(&PasswordPolicy, &str) -> bool;

/// Rule table in indicator order.
pub const RULES: [(PasswordRule, RulePredicate); 5] = [
	(PasswordRule::Length, |policy, password| {
		password.encode_utf16().count() >= policy.min_length
	}),
	(PasswordRule::Uppercase, |_, password| {
		UPPERCASE_REGEX.is_match(password)
	}),
	(PasswordRule::Lowercase, |_, password| {
		LOWERCASE_REGEX.is_match(password)
	}),
	(PasswordRule::Number, |_, password| NUMBER_REGEX.is_match(password)),
	(PasswordRule::Special, |_, password| {
		SPECIAL_REGEX.is_match(password)
	}),
];

impl PasswordRule {
	/// All rules, in indicator order.
	pub const ALL: [PasswordRule; 5] = [
		PasswordRule::Length,
		PasswordRule::Uppercase,
		PasswordRule::Lowercase,
		PasswordRule::Number,
		PasswordRule::Special,
	];

	/// Checks this rule alone.
	pub fn check(&self, policy: &PasswordPolicy, password: &str) -> bool {
		RULES
			.iter()
			.find(|(rule, _)| rule == self)
			.is_some_and(|(_, check)| check(policy, password))
	}

	/// Id of the indicator element on the stock registration page.
	pub fn indicator_id(&self) -> &'static str {
		match self {
			Self::Length => "length",
			Self::Uppercase => "uppercase",
			Self::Lowercase => "lowercase",
			Self::Number => "number",
			Self::Special => "special",
		}
	}

	/// Requirement text for this rule.
	pub fn requirement(&self, policy: &PasswordPolicy) -> String {
		match self {
			Self::Length => format!(
				"Password must be at least {} characters long.",
				policy.min_length
			),
			Self::Uppercase => "Password must contain at least one uppercase letter.".to_string(),
			Self::Lowercase => "Password must contain at least one lowercase letter.".to_string(),
			Self::Number => "Password must contain at least one number.".to_string(),
			Self::Special => "Password must contain at least one special character.".to_string(),
		}
	}
}

/// Result of evaluating a password against every rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReport {
	pub length_ok: bool,
	pub upper_ok: bool,
	pub lower_ok: bool,
	pub number_ok: bool,
	pub special_ok: bool,
}

impl PasswordReport {
	/// Whether a single rule passed.
	pub fn passed(&self, rule: PasswordRule) -> bool {
		match rule {
			PasswordRule::Length => self.length_ok,
			PasswordRule::Uppercase => self.upper_ok,
			PasswordRule::Lowercase => self.lower_ok,
			PasswordRule::Number => self.number_ok,
			PasswordRule::Special => self.special_ok,
		}
	}

	fn set(&mut self, rule: PasswordRule, ok: bool) {
		match rule {
			PasswordRule::Length => self.length_ok = ok,
			PasswordRule::Uppercase => self.upper_ok = ok,
			PasswordRule::Lowercase => self.lower_ok = ok,
			PasswordRule::Number => self.number_ok = ok,
			PasswordRule::Special => self.special_ok = ok,
		}
	}

	/// True when every rule passed.
	pub fn all_ok(&self) -> bool {
		PasswordRule::ALL.iter().all(|rule| self.passed(*rule))
	}

	/// Each rule with its outcome, in indicator order.
	pub fn iter(&self) -> impl Iterator<Item = (PasswordRule, bool)> + '_ {
		PasswordRule::ALL
			.into_iter()
			.map(move |rule| (rule, self.passed(rule)))
	}

	/// Rules that did not pass.
	pub fn failing(&self) -> Vec<PasswordRule> {
		self.iter()
			.filter(|(_, ok)| !ok)
			.map(|(rule, _)| rule)
			.collect()
	}

	/// JSON view of the report, including the overall `all_ok` flag.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::json!({
			"length_ok": self.length_ok,
			"upper_ok": self.upper_ok,
			"lower_ok": self.lower_ok,
			"number_ok": self.number_ok,
			"special_ok": self.special_ok,
			"all_ok": self.all_ok(),
		})
	}
}

/// Evaluates `password` with the default policy.
///
/// # Examples
///
/// ```
/// use tibib_forms::evaluate;
///
/// let report = evaluate("Abc12345");
/// assert!(!report.special_ok);
/// assert!(!report.all_ok());
/// ```
pub fn evaluate(password: &str) -> PasswordReport {
	PasswordPolicy::default().evaluate(password)
}
