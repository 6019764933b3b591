//! Property-based tests for input masks and password rules
//!
//! Category: Property
//! Verifies the formatting invariants of every mask for arbitrary input, and
//! that password evaluation is a pure function of its input.

use proptest::prelude::*;
use rstest::*;
use tibib_forms::{
	CardNumberFormat, PasswordPolicy, PasswordRule, digits_only, evaluate, format_card_number,
	normalize_country_code,
};

fn filtered_country_code(raw: &str) -> String {
	raw.chars()
		.filter(|c| c.is_ascii_digit() || *c == '+')
		.collect()
}

// ============================================================================
// Card number
// ============================================================================

proptest! {
	/// Test: formatting an already formatted card number changes nothing
	#[rstest]
	fn prop_card_number_idempotent(raw in ".{0,40}") {
		let once = format_card_number(&raw);
		let twice = format_card_number(&once);
		prop_assert_eq!(once, twice);
	}

	/// Test: card number output shape
	///
	/// At most 16 digits, single-space separators, full groups of 4 except the last.
	#[rstest]
	fn prop_card_number_grouping(raw in "[0-9 a-z\\-]{0,40}") {
		let formatted = format_card_number(&raw);
		let digits = formatted.chars().filter(char::is_ascii_digit).count();
		prop_assert!(digits <= 16);
		prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == ' '));
		prop_assert!(!formatted.starts_with(' '));
		prop_assert!(!formatted.ends_with(' '));
		prop_assert!(!formatted.contains("  "));

		if !formatted.is_empty() {
			let groups: Vec<&str> = formatted.split(' ').collect();
			let (last, full) = groups.split_last().unwrap();
			for group in full {
				prop_assert_eq!(group.len(), 4);
			}
			prop_assert!((1..=4).contains(&last.len()));
		}
	}

	/// Test: card number keeps the leading digits in order
	#[rstest]
	fn prop_card_number_preserves_digit_prefix(raw in ".{0,40}") {
		let expected: String = digits_only(&raw).chars().take(16).collect();
		let actual: String = format_card_number(&raw).chars().filter(|c| *c != ' ').collect();
		prop_assert_eq!(actual, expected);
	}

	/// Test: custom grouping honours its own parameters
	#[rstest]
	fn prop_card_number_custom_format(
		raw in "[0-9]{0,30}",
		max_digits in 1usize..24,
		group_size in 1usize..8,
	) {
		let format = CardNumberFormat { max_digits, group_size };
		let formatted = format.apply(&raw);
		let digits = formatted.chars().filter(char::is_ascii_digit).count();
		prop_assert_eq!(digits, raw.len().min(max_digits));
		for group in formatted.split(' ').filter(|g| !g.is_empty()) {
			prop_assert!(group.len() <= group_size);
		}
	}
}

// ============================================================================
// Phone number and country code
// ============================================================================

proptest! {
	/// Test: phone number output is digits only and keeps every digit
	#[rstest]
	fn prop_phone_number_digits_only(raw in ".{0,40}") {
		let output = digits_only(&raw);
		prop_assert!(output.chars().all(|c| c.is_ascii_digit()));
		prop_assert_eq!(output.len(), raw.chars().filter(char::is_ascii_digit).count());
	}

	/// Test: country code always starts with a plus sign
	#[rstest]
	fn prop_country_code_leading_plus(raw in ".{0,20}") {
		prop_assert!(normalize_country_code(&raw).starts_with('+'));
	}

	/// Test: a single plus for values typed without a leading plus
	#[rstest]
	fn prop_country_code_single_plus(raw in "[0-9+a-z ]{0,20}") {
		prop_assume!(!filtered_country_code(&raw).starts_with('+'));
		let output = normalize_country_code(&raw);
		prop_assert_eq!(output.matches('+').count(), 1);
		prop_assert!(output[1..].chars().all(|c| c.is_ascii_digit()));
	}

	/// Test: values that already start with a plus are only filtered
	#[rstest]
	fn prop_country_code_leading_plus_kept_as_typed(raw in "\\+[0-9+ ]{0,20}") {
		prop_assert_eq!(normalize_country_code(&raw), filtered_country_code(&raw));
	}

	/// Test: country code normalization is idempotent
	#[rstest]
	fn prop_country_code_idempotent(raw in ".{0,20}") {
		let once = normalize_country_code(&raw);
		prop_assert_eq!(normalize_country_code(&once), once.clone());
	}
}

// ============================================================================
// Password rules
// ============================================================================

proptest! {
	/// Test: evaluation has no hidden state
	#[rstest]
	fn prop_evaluate_pure(password in ".{0,24}") {
		prop_assert_eq!(evaluate(&password), evaluate(&password));
	}

	/// Test: all_ok is the conjunction of the five rules
	#[rstest]
	fn prop_all_ok_is_conjunction(password in ".{0,24}") {
		let policy = PasswordPolicy::default();
		let report = policy.evaluate(&password);
		let expected = PasswordRule::ALL.iter().all(|rule| rule.check(&policy, &password));
		prop_assert_eq!(report.all_ok(), expected);
	}

	/// Test: appending characters never breaks a passing rule
	#[rstest]
	fn prop_rules_monotonic_under_append(password in ".{0,16}", suffix in ".{0,8}") {
		let before = evaluate(&password);
		let after = evaluate(&format!("{password}{suffix}"));
		for rule in PasswordRule::ALL {
			prop_assert!(!before.passed(rule) || after.passed(rule));
		}
	}
}
