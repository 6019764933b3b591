//! # tibib
//!
//! Client-side behaviour for the tibib registration page.
//!
//! The page has a registration form with card-number, phone-number,
//! country-code and password fields. This crate keeps those fields in shape
//! while the user types and refuses to submit the form until the password
//! meets every rule.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `forms` - Masks, password rules and settings (no DOM)
//! - `pages` - DOM bindings and the WASM entry points
//! - `console_error_panic_hook` - Readable panics in the browser console
//! - `debug-hooks` - `debug_log!` output in debug builds
//!
//! ## Quick Example
//!
//! ```rust
//! use tibib::forms::RegistrationSettings;
//! use tibib::pages::RegistrationPage;
//! use tibib::pages::testing::MemoryDocument;
//!
//! let settings = RegistrationSettings::default();
//! let document = MemoryDocument::registration_form(&settings);
//! let _page = RegistrationPage::mount(&document, &settings).unwrap();
//!
//! document.type_into("password", "Abcdef1!");
//! assert!(!document.submit("registerForm").default_prevented());
//! ```
//!
//! In the browser, call `mountRegistrationForm()` from JavaScript once the DOM
//! is ready.

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "forms")]
pub use tibib_forms::{PasswordReport, RegistrationSettings, SettingsError, evaluate};
#[cfg(feature = "pages")]
pub use tibib_pages::{MountedPage, PagesError, RegistrationPage};
