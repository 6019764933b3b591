//! Password indicator rendering
//!
//! Each password rule has an indicator element. After every keystroke the
//! indicator of a passing rule carries the valid marker class and the
//! indicator of a failing rule does not.

use crate::dom::{Document, Element, EventType, FormEvent, event_handler};
use crate::error::PagesError;
use crate::{debug_log, warn_log};
use std::rc::Rc;
use tibib_forms::{PasswordPolicy, PasswordReport, PasswordRule, RegistrationSettings};

/// The indicator elements for the password rules.
///
/// Rules without an indicator are still evaluated; they just have nothing to render.
#[derive(Debug, Clone)]
pub struct PasswordIndicators<E> {
	indicators: Vec<(PasswordRule, E)>,
	valid_class: String,
}

impl<E: Element> PasswordIndicators<E> {
	/// Creates an empty set using `valid_class` as the marker.
	pub fn new(valid_class: impl Into<String>) -> Self {
		Self {
			indicators: Vec::new(),
			valid_class: valid_class.into(),
		}
	}

	/// Sets the indicator for `rule`, replacing any previous one.
	pub fn with(mut self, rule: PasswordRule, element: E) -> Self {
		self.indicators.retain(|(existing, _)| *existing != rule);
		self.indicators.push((rule, element));
		self
	}

	/// Looks up every indicator configured in `settings`.
	pub fn lookup<D>(document: &D, settings: &RegistrationSettings) -> Self
	where
		D: Document<Element = E>,
	{
		let mut indicators = Self::new(settings.valid_class.clone());
		for rule in PasswordRule::ALL {
			let id = settings.elements.indicators.get(rule);
			match document.get_element_by_id(id) {
				Some(element) => indicators = indicators.with(rule, element),
				None => warn_log!("Password indicator #{} not found; {:?} will not be shown", id, rule),
			}
		}
		indicators
	}

	/// The indicator for `rule`.
	pub fn get(&self, rule: PasswordRule) -> Option<&E> {
		self.indicators
			.iter()
			.find(|(existing, _)| *existing == rule)
			.map(|(_, element)| element)
	}

	/// The marker class.
	pub fn valid_class(&self) -> &str {
		&self.valid_class
	}

	/// Number of indicators present.
	pub fn len(&self) -> usize {
		self.indicators.len()
	}

	/// True when no indicator is present.
	pub fn is_empty(&self) -> bool {
		self.indicators.is_empty()
	}

	/// Sets each indicator's marker from `report`.
	pub fn render(&self, report: &PasswordReport) {
		for (rule, element) in &self.indicators {
			element.toggle_class(&self.valid_class, report.passed(*rule));
		}
	}
}

/// Evaluates `password`, renders the result and returns whether every rule passed.
pub fn validate_password<E: Element>(
	indicators: &PasswordIndicators<E>,
	policy: &PasswordPolicy,
	password: &str,
) -> bool {
	let report = policy.evaluate(password);
	debug_log!("Password report: {:?}", report);
	indicators.render(&report);
	report.all_ok()
}

/// Re-validates the password on every `input` event of `field`.
pub fn bind_password_input<D: Document>(
	document: &D,
	field: &D::Element,
	indicators: Rc<PasswordIndicators<D::Element>>,
	policy: PasswordPolicy,
) -> Result<D::Listener, PagesError> {
	let target = field.clone();
	document.add_event_listener(
		field,
		EventType::Input,
		event_handler(move |_event: &FormEvent| {
			validate_password(&indicators, &policy, &target.value());
		}),
	)
}
