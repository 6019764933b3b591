//! tibib Pages - registration form behaviour for the browser
//!
//! Binds the rules from `tibib-forms` to a live document:
//!
//! - [`masking`]: input masks rewriting field values on every keystroke
//! - [`password`]: per-rule indicator rendering for the password field
//! - [`registration`]: page setup and the submit guard
//! - [`dom`]: the document capability traits the above are written against
//! - [`testing`]: an in-memory document for native tests
//!
//! On `wasm32` the [`dom::WebDocument`] implementation drives the real DOM and
//! `mountRegistrationForm` is exported to JavaScript.
//!
//! ## Example
//!
//! ```
//! use tibib_forms::RegistrationSettings;
//! use tibib_pages::RegistrationPage;
//! use tibib_pages::testing::MemoryDocument;
//!
//! let settings = RegistrationSettings::default();
//! let document = MemoryDocument::registration_form(&settings);
//! let _page = RegistrationPage::mount(&document, &settings).unwrap();
//!
//! document.type_into("password", "weak");
//! let event = document.submit("registerForm");
//! assert!(event.default_prevented());
//! assert_eq!(document.alerts().len(), 1);
//! ```
//!
//! ## Features
//!
//! - `console_error_panic_hook`: readable panics in the browser console
//! - `debug-hooks`: enables `debug_log!` output in debug builds

pub mod dom;
pub mod error;
pub mod logging;
pub mod masking;
pub mod password;
pub mod registration;
pub mod testing;

#[cfg(target_arch = "wasm32")]
pub mod entry;

// Used by the logging macros
#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}

pub use dom::{Document, Element, EventHandler, EventType, FormEvent, event_handler};
pub use error::PagesError;
pub use masking::{apply_mask, bind_mask};
pub use password::{PasswordIndicators, bind_password_input, validate_password};
pub use registration::{Binding, MountedPage, RegistrationPage, SubmitGuard, SubmitOutcome};

#[cfg(target_arch = "wasm32")]
pub use dom::{WebDocument, WebElement, WebListener};
#[cfg(target_arch = "wasm32")]
pub use entry::{evaluate_password, mount_registration_form, mount_registration_form_with};
