//! Browser implementation of the document traits
//!
//! Only compiled for `wasm32`. Listener closures are owned by [`WebListener`]
//! and detached from their target when it is dropped.

use super::{Document, Element, EventHandler, EventType, FormEvent};
use crate::error::PagesError;
use crate::{error_log, warn_log};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

/// Handle to `window.document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
	window: web_sys::Window,
	document: web_sys::Document,
}

impl WebDocument {
	/// Gets the document of the current window.
	pub fn from_window() -> Result<Self, PagesError> {
		let window =
			web_sys::window().ok_or_else(|| PagesError::NoDocument("no global window".into()))?;
		let document = window
			.document()
			.ok_or_else(|| PagesError::NoDocument("window has no document".into()))?;
		Ok(Self { window, document })
	}
}

/// Handle to a DOM element.
#[derive(Debug, Clone)]
pub struct WebElement {
	element: web_sys::Element,
}

impl WebElement {
	/// The wrapped `web_sys::Element`.
	pub fn as_web_sys(&self) -> &web_sys::Element {
		&self.element
	}
}

impl Element for WebElement {
	fn id(&self) -> String {
		self.element.id()
	}

	fn value(&self) -> String {
		if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
			input.value()
		} else if let Some(textarea) = self.element.dyn_ref::<HtmlTextAreaElement>() {
			textarea.value()
		} else {
			String::new()
		}
	}

	fn set_value(&self, value: &str) {
		if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
			input.set_value(value);
		} else if let Some(textarea) = self.element.dyn_ref::<HtmlTextAreaElement>() {
			textarea.set_value(value);
		} else {
			warn_log!("#{} has no value to set", self.element.id());
		}
	}

	fn add_class(&self, class: &str) {
		if let Err(err) = self.element.class_list().add_1(class) {
			error_log!("Failed to add class '{}' to #{}: {:?}", class, self.element.id(), err);
		}
	}

	fn remove_class(&self, class: &str) {
		if let Err(err) = self.element.class_list().remove_1(class) {
			error_log!(
				"Failed to remove class '{}' from #{}: {:?}",
				class,
				self.element.id(),
				err
			);
		}
	}

	fn has_class(&self, class: &str) -> bool {
		self.element.class_list().contains(class)
	}
}

/// An attached browser listener. Dropping it removes the listener.
pub struct WebListener {
	target: web_sys::EventTarget,
	event_type: EventType,
	closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for WebListener {
	fn drop(&mut self) {
		if let Err(err) = self.target.remove_event_listener_with_callback(
			self.event_type.as_str(),
			self.closure.as_ref().unchecked_ref(),
		) {
			error_log!("Failed to detach '{}' listener: {:?}", self.event_type, err);
		}
	}
}

impl Document for WebDocument {
	type Element = WebElement;
	type Listener = WebListener;

	fn get_element_by_id(&self, id: &str) -> Option<WebElement> {
		self.document
			.get_element_by_id(id)
			.map(|element| WebElement { element })
	}

	fn add_event_listener(
		&self,
		target: &WebElement,
		event_type: EventType,
		handler: EventHandler,
	) -> Result<WebListener, PagesError> {
		let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
			let event = FormEvent::from_web(event_type, raw);
			handler(&event);
		});

		let target: web_sys::EventTarget = target.element.clone().into();
		target
			.add_event_listener_with_callback(event_type.as_str(), closure.as_ref().unchecked_ref())
			.map_err(|err| PagesError::EventAttach {
				event_type: event_type.as_str(),
				element_id: target
					.dyn_ref::<web_sys::Element>()
					.map(web_sys::Element::id)
					.unwrap_or_default(),
				reason: format!("{:?}", err),
			})?;

		Ok(WebListener {
			target,
			event_type,
			closure,
		})
	}

	fn alert(&self, message: &str) {
		if let Err(err) = self.window.alert_with_message(message) {
			error_log!("Failed to show alert: {:?}", err);
		}
	}
}
