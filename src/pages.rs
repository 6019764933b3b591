//! Registration form DOM bindings
//!
//! This module provides access to tibib-pages, which wires the registration
//! rules to a document.
//!
//! ## Architecture
//!
//! - **Input Masks**: Card-number, phone-number and country-code fields rewritten on input
//! - **Password Indicators**: One marker element per rule, toggled on every keystroke
//! - **Submit Guard**: Cancels the form submission while any rule fails
//! - **Document Traits**: `web_sys` on WASM, an in-memory document for native tests
//!
//! ## Example
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
//! document.type_into("country_code", "62");
//! assert_eq!(document.value_of("country_code").unwrap(), "+62");
//! ```

// Re-export all tibib-pages functionality
pub use tibib_pages::*;
