//! Registration form rules
//!
//! Input masks, the password rule table and page settings. Nothing in this
//! module touches the DOM, so it is usable on any target.
//!
//! ## Example
//!
//! ```rust
//! use tibib::forms::{PasswordRule, evaluate, format_card_number};
//!
//! assert_eq!(format_card_number("41111111"), "4111 1111");
//!
//! let report = evaluate("Abcdefgh");
//! assert_eq!(report.failing(), vec![PasswordRule::Number, PasswordRule::Special]);
//! ```

// Re-export all tibib-forms functionality
pub use tibib_forms::*;
