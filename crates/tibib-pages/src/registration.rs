//! Registration page setup
//!
//! [`RegistrationPage::mount`] is the single entry point that wires the page:
//!
//! ```text
//! card_number   --input-->  card-number mask
//! phone_number  --input-->  digits-only mask
//! country_code  --input-->  country-code mask
//! password      --input-->  indicator rendering
//! registerForm  --submit--> SubmitGuard (cancel + alert unless all rules pass)
//! ```
//!
//! Elements missing from the page are skipped. The returned [`MountedPage`]
//! owns every listener; dropping it detaches them, [`MountedPage::forget`]
//! keeps them for the lifetime of the page.

use crate::dom::{Document, Element, EventType, FormEvent, event_handler};
use crate::error::PagesError;
use crate::masking::bind_mask;
use crate::password::{PasswordIndicators, bind_password_input, validate_password};
use crate::{debug_log, info_log, warn_log};
use std::fmt;
use std::rc::Rc;
use tibib_forms::{InputMask, PasswordPolicy, RegistrationSettings};

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Native submission continues.
	Allowed,
	/// Default action cancelled and the user alerted.
	Rejected,
}

/// Blocks form submission while the password fails any rule.
pub struct SubmitGuard<D: Document> {
	document: D,
	password: D::Element,
	indicators: Rc<PasswordIndicators<D::Element>>,
	policy: PasswordPolicy,
	message: String,
}

impl<D: Document> SubmitGuard<D> {
	/// Creates a guard reading `password` and reporting through `document`.
	pub fn new(
		document: D,
		password: D::Element,
		indicators: Rc<PasswordIndicators<D::Element>>,
		policy: PasswordPolicy,
		message: impl Into<String>,
	) -> Self {
		Self {
			document,
			password,
			indicators,
			policy,
			message: message.into(),
		}
	}

	/// Re-validates the live password and cancels `event` when it fails.
	pub fn check(&self, event: &FormEvent) -> SubmitOutcome {
		let password = self.password.value();
		if validate_password(&self.indicators, &self.policy, &password) {
			debug_log!("Password accepted, letting the form submit");
			return SubmitOutcome::Allowed;
		}

		event.prevent_default();
		self.document.alert(&self.message);
		info_log!(
			"Registration submit blocked: {}",
			self.unmet_requirements().join(" ")
		);
		SubmitOutcome::Rejected
	}

	/// Requirement text of every rule the live password fails, in indicator order.
	pub fn unmet_requirements(&self) -> Vec<String> {
		self.policy
			.evaluate(&self.password.value())
			.failing()
			.into_iter()
			.map(|rule| rule.requirement(&self.policy))
			.collect()
	}
}

/// Features that ended up bound on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
	/// An input mask on its field.
	Mask(InputMask),
	/// Indicator rendering on the password field.
	PasswordIndicators,
	/// The submit guard on the form.
	SubmitGuard,
}

/// Listeners attached by [`RegistrationPage::mount`].
pub struct MountedPage<D: Document> {
	listeners: Vec<D::Listener>,
	bindings: Vec<Binding>,
}

impl<D: Document> MountedPage<D> {
	/// Bound features, in binding order.
	pub fn bindings(&self) -> &[Binding] {
		&self.bindings
	}

	/// Whether `binding` was bound.
	pub fn is_bound(&self, binding: Binding) -> bool {
		self.bindings.contains(&binding)
	}

	/// Number of attached listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	/// Leaves every listener attached for the rest of the page lifetime.
	pub fn forget(self) {
		std::mem::forget(self.listeners);
	}
}

impl<D: Document> fmt::Debug for MountedPage<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MountedPage")
			.field("bindings", &self.bindings)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}

/// The registration page behaviour.
pub struct RegistrationPage;

impl RegistrationPage {
	/// Binds masks, password indicators and the submit guard on `document`.
	pub fn mount<D: Document>(
		document: &D,
		settings: &RegistrationSettings,
	) -> Result<MountedPage<D>, PagesError> {
		settings.validate()?;

		let mut mounted = MountedPage {
			listeners: Vec::new(),
			bindings: Vec::new(),
		};

		for (mask, id) in settings.masks() {
			match document.get_element_by_id(id) {
				Some(field) => {
					mounted.listeners.push(bind_mask(document, &field, mask)?);
					mounted.bindings.push(Binding::Mask(mask));
				}
				None => debug_log!("#{} not found, {} mask skipped", id, mask.name()),
			}
		}

		let elements = &settings.elements;
		let password = document.get_element_by_id(&elements.password);
		let indicators = Rc::new(PasswordIndicators::lookup(document, settings));

		match &password {
			Some(field) => {
				mounted.listeners.push(bind_password_input(
					document,
					field,
					Rc::clone(&indicators),
					settings.password,
				)?);
				mounted.bindings.push(Binding::PasswordIndicators);
			}
			None => debug_log!("#{} not found, password indicators skipped", elements.password),
		}

		match (document.get_element_by_id(&elements.form), password) {
			(Some(form), Some(password)) => {
				let guard = SubmitGuard::new(
					document.clone(),
					password,
					indicators,
					settings.password,
					settings.rejection_message.clone(),
				);
				let listener = document.add_event_listener(
					&form,
					EventType::Submit,
					event_handler(move |event: &FormEvent| {
						guard.check(event);
					}),
				)?;
				mounted.listeners.push(listener);
				mounted.bindings.push(Binding::SubmitGuard);
			}
			(Some(form), None) => warn_log!(
				"#{} has no #{} field; submissions are not guarded",
				form.id(),
				elements.password
			),
			(None, _) => debug_log!("#{} not found, submit guard skipped", elements.form),
		}

		info_log!(
			"Registration page mounted with {} listener(s)",
			mounted.listener_count()
		);
		Ok(mounted)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::MemoryDocument;
	use rstest::rstest;
	use tibib_forms::{CardNumberFormat, SettingsError};

	fn guard_for(document: &MemoryDocument) -> SubmitGuard<MemoryDocument> {
		let settings = RegistrationSettings::default();
		let password = document.get_element_by_id("password").unwrap();
		let indicators = Rc::new(PasswordIndicators::lookup(document, &settings));
		SubmitGuard::new(
			document.clone(),
			password,
			indicators,
			settings.password,
			settings.rejection_message,
		)
	}

	#[rstest]
	fn test_guard_rejects_weak_password() {
		let document = MemoryDocument::registration_form(&RegistrationSettings::default());
		document.get_element_by_id("password").unwrap().set_value("Abc12345");
		let guard = guard_for(&document);

		let event = FormEvent::new(EventType::Submit);
		assert_eq!(guard.check(&event), SubmitOutcome::Rejected);
		assert!(event.default_prevented());
		assert_eq!(
			document.alerts(),
			vec!["Please make sure your password meets all requirements.".to_string()]
		);
	}

	#[rstest]
	fn test_guard_allows_strong_password() {
		let document = MemoryDocument::registration_form(&RegistrationSettings::default());
		document.get_element_by_id("password").unwrap().set_value("Abcdef1!");
		let guard = guard_for(&document);

		let event = FormEvent::new(EventType::Submit);
		assert_eq!(guard.check(&event), SubmitOutcome::Allowed);
		assert!(!event.default_prevented());
		assert!(document.alerts().is_empty());
	}

	#[rstest]
	fn test_guard_lists_unmet_requirements() {
		let document = MemoryDocument::registration_form(&RegistrationSettings::default());
		let password = document.get_element_by_id("password").unwrap();
		let guard = guard_for(&document);

		password.set_value("abc1");
		assert_eq!(
			guard.unmet_requirements(),
			vec![
				"Password must be at least 8 characters long.".to_string(),
				"Password must contain at least one uppercase letter.".to_string(),
				"Password must contain at least one special character.".to_string(),
			]
		);

		password.set_value("Abcdef1!");
		assert!(guard.unmet_requirements().is_empty());
	}

	#[rstest]
	fn test_guard_refreshes_indicators() {
		let document = MemoryDocument::registration_form(&RegistrationSettings::default());
		let password = document.get_element_by_id("password").unwrap();
		let guard = guard_for(&document);

		// Value changed without an input event, e.g. by browser autofill
		password.set_value("Abcdef1!");
		guard.check(&FormEvent::new(EventType::Submit));
		assert!(document.get_element_by_id("special").unwrap().has_class("valid"));
	}

	#[rstest]
	fn test_mount_binds_everything_on_full_page() {
		let settings = RegistrationSettings::default();
		let document = MemoryDocument::registration_form(&settings);
		let page = RegistrationPage::mount(&document, &settings).unwrap();

		assert_eq!(
			page.bindings(),
			&[
				Binding::Mask(InputMask::CardNumber(CardNumberFormat::default())),
				Binding::Mask(InputMask::PhoneNumber),
				Binding::Mask(InputMask::CountryCode),
				Binding::PasswordIndicators,
				Binding::SubmitGuard,
			]
		);
		assert_eq!(page.listener_count(), 5);
		assert_eq!(document.listener_count("registerForm", EventType::Submit), 1);
		assert_eq!(document.listener_count("password", EventType::Input), 1);
	}

	#[rstest]
	fn test_mount_on_empty_page_binds_nothing() {
		let document = MemoryDocument::new();
		let page = RegistrationPage::mount(&document, &RegistrationSettings::default()).unwrap();
		assert!(page.bindings().is_empty());
		assert_eq!(document.total_listeners(), 0);
	}

	#[rstest]
	#[case("card_number")]
	#[case("phone_number")]
	#[case("country_code")]
	fn test_mount_skips_missing_mask_field(#[case] missing: &str) {
		let settings = RegistrationSettings::default();
		let document = MemoryDocument::registration_form(&settings);
		document.remove(missing);

		let page = RegistrationPage::mount(&document, &settings).unwrap();
		assert_eq!(page.listener_count(), 4);
		assert!(
			!page
				.bindings()
				.iter()
				.any(|binding| matches!(binding, Binding::Mask(mask) if mask.default_element_id() == missing))
		);
		assert!(page.is_bound(Binding::SubmitGuard));
	}

	#[rstest]
	fn test_mount_without_password_field_leaves_form_unguarded() {
		let settings = RegistrationSettings::default();
		let document = MemoryDocument::registration_form(&settings);
		document.remove("password");

		let page = RegistrationPage::mount(&document, &settings).unwrap();
		assert!(!page.is_bound(Binding::PasswordIndicators));
		assert!(!page.is_bound(Binding::SubmitGuard));

		let event = document.submit("registerForm");
		assert!(!event.default_prevented());
	}

	#[rstest]
	fn test_mount_without_form_still_renders_indicators() {
		let settings = RegistrationSettings::default();
		let document = MemoryDocument::registration_form(&settings);
		document.remove("registerForm");

		let page = RegistrationPage::mount(&document, &settings).unwrap();
		assert!(page.is_bound(Binding::PasswordIndicators));
		assert!(!page.is_bound(Binding::SubmitGuard));
	}

	#[rstest]
	fn test_mount_rejects_invalid_settings() {
		let mut settings = RegistrationSettings::default();
		settings.card.group_size = 0;
		let document = MemoryDocument::registration_form(&settings);

		let err = RegistrationPage::mount(&document, &settings).unwrap_err();
		assert!(matches!(
			err,
			PagesError::Settings(SettingsError::Invalid { key: "card.group_size", .. })
		));
		assert_eq!(document.total_listeners(), 0);
	}

	#[rstest]
	fn test_dropping_mounted_page_detaches_listeners() {
		let settings = RegistrationSettings::default();
		let document = MemoryDocument::registration_form(&settings);
		let page = RegistrationPage::mount(&document, &settings).unwrap();
		assert_eq!(document.total_listeners(), 5);

		drop(page);
		assert_eq!(document.total_listeners(), 0);
		document.type_into("phone_number", "12-34");
		assert_eq!(document.value_of("phone_number").unwrap(), "12-34");
	}

	#[rstest]
	fn test_forget_keeps_listeners() {
		let settings = RegistrationSettings::default();
		let document = MemoryDocument::registration_form(&settings);
		RegistrationPage::mount(&document, &settings).unwrap().forget();

		assert_eq!(document.total_listeners(), 5);
		document.type_into("phone_number", "12-34");
		assert_eq!(document.value_of("phone_number").unwrap(), "1234");
	}
}
