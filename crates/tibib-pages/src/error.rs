use tibib_forms::SettingsError;

/// Errors raised while mounting the registration page.
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
	#[error("Failed to attach '{event_type}' event to #{element_id}: {reason}")]
	EventAttach {
		event_type: &'static str,
		element_id: String,
		reason: String,
	},
	#[error("No document available: {0}")]
	NoDocument(String),
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

#[cfg(target_arch = "wasm32")]
impl From<PagesError> for wasm_bindgen::JsValue {
	fn from(err: PagesError) -> Self {
		wasm_bindgen::JsValue::from_str(&err.to_string())
	}
}
