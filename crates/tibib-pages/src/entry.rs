//! WASM entry points

use crate::dom::WebDocument;
use crate::info_log;
use crate::registration::RegistrationPage;
use tibib_forms::RegistrationSettings;
use wasm_bindgen::prelude::*;

/// Mounts the registration behaviour on the current document with default settings.
///
/// Call once the DOM is ready. Listeners stay attached for the page lifetime.
#[wasm_bindgen(js_name = mountRegistrationForm)]
pub fn mount_registration_form() -> Result<(), JsValue> {
	mount_with(&RegistrationSettings::default())
}

/// Like [`mount_registration_form`], with settings given as a JSON string.
#[wasm_bindgen(js_name = mountRegistrationFormWith)]
pub fn mount_registration_form_with(settings_json: &str) -> Result<(), JsValue> {
	let settings =
		RegistrationSettings::from_json_str(settings_json).map_err(crate::PagesError::from)?;
	mount_with(&settings)
}

/// Evaluates `password` against the default policy and returns the report as JSON.
#[wasm_bindgen(js_name = evaluatePassword)]
pub fn evaluate_password(password: &str) -> String {
	tibib_forms::evaluate(password).to_json().to_string()
}

fn mount_with(settings: &RegistrationSettings) -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = WebDocument::from_window()?;
	let page = RegistrationPage::mount(&document, settings)?;
	info_log!("Registration form ready: {:?}", page);
	page.forget();
	Ok(())
}
