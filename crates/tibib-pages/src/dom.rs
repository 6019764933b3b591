//! Document capability traits
//!
//! Page behaviour is written against [`Document`] and [`Element`] instead of
//! `web_sys` directly. The browser implementation lives in [`web`] (WASM only);
//! [`crate::testing::MemoryDocument`] implements the same traits in memory so
//! handlers can be exercised on native targets.
//!
//! Everything here is single-threaded. Handlers are `Rc`-shared closures that
//! run to completion on the UI thread.

use crate::error::PagesError;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{WebDocument, WebElement, WebListener};

/// Events the registration page listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Fired on every edit of a text field.
	Input,
	/// Fired when a form is submitted.
	Submit,
}

impl EventType {
	/// DOM event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Input => "input",
			Self::Submit => "submit",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The event passed to handlers.
///
/// Cancelling is recorded locally and, in the browser, forwarded to the
/// underlying `web_sys::Event`.
pub struct FormEvent {
	event_type: EventType,
	default_prevented: Cell<bool>,
	#[cfg(target_arch = "wasm32")]
	raw: Option<web_sys::Event>,
}

impl FormEvent {
	/// Creates a synthetic event.
	pub fn new(event_type: EventType) -> Self {
		Self {
			event_type,
			default_prevented: Cell::new(false),
			#[cfg(target_arch = "wasm32")]
			raw: None,
		}
	}

	/// Wraps a browser event.
	#[cfg(target_arch = "wasm32")]
	pub fn from_web(event_type: EventType, raw: web_sys::Event) -> Self {
		Self {
			event_type,
			default_prevented: Cell::new(false),
			raw: Some(raw),
		}
	}

	/// The event type.
	pub fn event_type(&self) -> EventType {
		self.event_type
	}

	/// Cancels the default action (for `submit`, the native form submission).
	pub fn prevent_default(&self) {
		self.default_prevented.set(true);
		#[cfg(target_arch = "wasm32")]
		if let Some(raw) = &self.raw {
			raw.prevent_default();
		}
	}

	/// Whether [`prevent_default`](Self::prevent_default) was called.
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

impl fmt::Debug for FormEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormEvent")
			.field("event_type", &self.event_type)
			.field("default_prevented", &self.default_prevented.get())
			.finish()
	}
}

/// Handler attached to an element.
pub type EventHandler = Rc<dyn Fn(&FormEvent)>;

/// Wraps a closure as an [`EventHandler`].
pub fn event_handler<F>(f: F) -> EventHandler
where
	F: Fn(&FormEvent) + 'static,
{
	Rc::new(f)
}

/// An element handle.
///
/// Handles are cheap to clone and refer to the same underlying node.
pub trait Element: Clone + 'static {
	/// The element's `id` attribute.
	fn id(&self) -> String;

	/// Current value of a form control. Non-controls report an empty string.
	fn value(&self) -> String;

	/// Replaces the value of a form control. Ignored for non-controls.
	fn set_value(&self, value: &str);

	/// Adds `class` to the element's class list.
	fn add_class(&self, class: &str);

	/// Removes `class` from the element's class list.
	fn remove_class(&self, class: &str);

	/// Whether the class list contains `class`.
	fn has_class(&self, class: &str) -> bool;

	/// Adds `class` when `on` is true, removes it otherwise.
	fn toggle_class(&self, class: &str, on: bool) {
		if on {
			self.add_class(class);
		} else {
			self.remove_class(class);
		}
	}
}

/// A document handle: element lookup, event binding and user alerts.
pub trait Document: Clone + 'static {
	/// Element handle type.
	type Element: Element;

	/// Keeps a listener attached while alive.
	type Listener;

	/// Looks up an element by id.
	fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

	/// Attaches `handler` for `event_type` on `target`.
	fn add_event_listener(
		&self,
		target: &Self::Element,
		event_type: EventType,
		handler: EventHandler,
	) -> Result<Self::Listener, PagesError>;

	/// Shows a blocking message to the user.
	fn alert(&self, message: &str);
}
