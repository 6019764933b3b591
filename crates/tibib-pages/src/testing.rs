//! In-memory document for tests
//!
//! [`MemoryDocument`] implements [`Document`] without a browser. Elements keep
//! a value and a class list, listeners are recorded per element, and alerts are
//! collected instead of shown. Dispatch helpers stand in for the browser's
//! event loop.
//!
//! ```
//! use tibib_pages::testing::MemoryDocument;
//! use tibib_pages::RegistrationPage;
//! use tibib_forms::RegistrationSettings;
//!
//! let settings = RegistrationSettings::default();
//! let document = MemoryDocument::registration_form(&settings);
//! let _page = RegistrationPage::mount(&document, &settings).unwrap();
//!
//! document.type_into("card_number", "4111111111111111");
//! assert_eq!(document.value_of("card_number").unwrap(), "4111 1111 1111 1111");
//! ```

use crate::dom::{Document, Element, EventHandler, EventType, FormEvent};
use crate::error::PagesError;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};
use tibib_forms::{PasswordRule, RegistrationSettings};

/// Kind of node, which decides whether it carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// `<input>` / `<textarea>`: has a value.
	Control,
	/// Any other element: value reads are empty and writes are ignored.
	Plain,
}

#[derive(Debug)]
struct ElementState {
	id: String,
	kind: NodeKind,
	value: String,
	classes: BTreeSet<String>,
	writes: usize,
}

/// An element stored in a [`MemoryDocument`].
#[derive(Clone)]
pub struct MemoryElement {
	state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
	/// Creates a detached element.
	pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
		Self {
			state: Rc::new(RefCell::new(ElementState {
				id: id.into(),
				kind,
				value: String::new(),
				classes: BTreeSet::new(),
				writes: 0,
			})),
		}
	}

	/// Node kind.
	pub fn kind(&self) -> NodeKind {
		self.state.borrow().kind
	}

	/// Sorted class list.
	pub fn classes(&self) -> Vec<String> {
		self.state.borrow().classes.iter().cloned().collect()
	}

	/// Number of `set_value` calls that reached a control.
	pub fn value_writes(&self) -> usize {
		self.state.borrow().writes
	}

	/// Sets the value as if the user typed it, without firing any event.
	fn set_raw_value(&self, value: &str) {
		let mut state = self.state.borrow_mut();
		if state.kind == NodeKind::Control {
			state.value = value.to_string();
		}
	}
}

impl fmt::Debug for MemoryElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("MemoryElement")
			.field("id", &state.id)
			.field("kind", &state.kind)
			.field("value", &state.value)
			.field("classes", &state.classes)
			.finish()
	}
}

impl Element for MemoryElement {
	fn id(&self) -> String {
		self.state.borrow().id.clone()
	}

	fn value(&self) -> String {
		self.state.borrow().value.clone()
	}

	fn set_value(&self, value: &str) {
		let mut state = self.state.borrow_mut();
		if state.kind == NodeKind::Control {
			state.value = value.to_string();
			state.writes += 1;
		}
	}

	fn add_class(&self, class: &str) {
		self.state.borrow_mut().classes.insert(class.to_string());
	}

	fn remove_class(&self, class: &str) {
		self.state.borrow_mut().classes.remove(class);
	}

	fn has_class(&self, class: &str) -> bool {
		self.state.borrow().classes.contains(class)
	}
}

struct Listener {
	key: usize,
	element_id: String,
	event_type: EventType,
	handler: EventHandler,
}

#[derive(Default)]
struct DocumentState {
	elements: HashMap<String, MemoryElement>,
	listeners: Vec<Listener>,
	next_key: usize,
	alerts: Vec<String>,
}

/// In-memory [`Document`].
///
/// Clones share the same state.
#[derive(Clone, Default)]
pub struct MemoryDocument {
	state: Rc<RefCell<DocumentState>>,
}

/// Listener registration in a [`MemoryDocument`]. Dropping it detaches the handler.
pub struct MemoryListener {
	document: Weak<RefCell<DocumentState>>,
	key: usize,
}

impl Drop for MemoryListener {
	fn drop(&mut self) {
		if let Some(state) = self.document.upgrade() {
			state
				.borrow_mut()
				.listeners
				.retain(|listener| listener.key != self.key);
		}
	}
}

impl fmt::Debug for MemoryListener {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryListener")
			.field("key", &self.key)
			.finish()
	}
}

impl MemoryDocument {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a document with every element the registration template renders.
	pub fn registration_form(settings: &RegistrationSettings) -> Self {
		let document = Self::new();
		let elements = &settings.elements;
		document.add_control(&elements.card_number);
		document.add_control(&elements.password);
		document.add_control(&elements.phone_number);
		document.add_control(&elements.country_code);
		document.add_plain(&elements.form);
		for rule in PasswordRule::ALL {
			document.add_plain(elements.indicators.get(rule));
		}
		document
	}

	/// Adds a form control, replacing any element with the same id.
	pub fn add_control(&self, id: &str) -> MemoryElement {
		self.insert(MemoryElement::new(id, NodeKind::Control))
	}

	/// Adds a non-control element, replacing any element with the same id.
	pub fn add_plain(&self, id: &str) -> MemoryElement {
		self.insert(MemoryElement::new(id, NodeKind::Plain))
	}

	/// Inserts an element under its id.
	pub fn insert(&self, element: MemoryElement) -> MemoryElement {
		self.state
			.borrow_mut()
			.elements
			.insert(element.id(), element.clone());
		element
	}

	/// Removes an element. Listeners already attached to it stay registered.
	pub fn remove(&self, id: &str) -> Option<MemoryElement> {
		self.state.borrow_mut().elements.remove(id)
	}

	/// Fires `event_type` on the element `id`, running handlers in attach order.
	pub fn dispatch(&self, id: &str, event_type: EventType) -> FormEvent {
		// Collect first so handlers can touch the document while running
		let handlers: Vec<EventHandler> = self
			.state
			.borrow()
			.listeners
			.iter()
			.filter(|listener| listener.element_id == id && listener.event_type == event_type)
			.map(|listener| Rc::clone(&listener.handler))
			.collect();

		let event = FormEvent::new(event_type);
		for handler in handlers {
			handler(&event);
		}
		event
	}

	/// Replaces the value of `id` as a keystroke would, then fires `input`.
	pub fn type_into(&self, id: &str, value: &str) -> FormEvent {
		if let Some(element) = self.get_element_by_id(id) {
			element.set_raw_value(value);
		}
		self.dispatch(id, EventType::Input)
	}

	/// Fires `submit` on the form `id`.
	pub fn submit(&self, id: &str) -> FormEvent {
		self.dispatch(id, EventType::Submit)
	}

	/// Current value of `id`, if present.
	pub fn value_of(&self, id: &str) -> Option<String> {
		self.get_element_by_id(id).map(|element| element.value())
	}

	/// Messages passed to [`Document::alert`], oldest first.
	pub fn alerts(&self) -> Vec<String> {
		self.state.borrow().alerts.clone()
	}

	/// Number of attached listeners for `id` and `event_type`.
	pub fn listener_count(&self, id: &str, event_type: EventType) -> usize {
		self.state
			.borrow()
			.listeners
			.iter()
			.filter(|listener| listener.element_id == id && listener.event_type == event_type)
			.count()
	}

	/// Total number of attached listeners.
	pub fn total_listeners(&self) -> usize {
		self.state.borrow().listeners.len()
	}
}

impl fmt::Debug for MemoryDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.borrow();
		let mut ids: Vec<_> = state.elements.keys().collect();
		ids.sort();
		f.debug_struct("MemoryDocument")
			.field("elements", &ids)
			.field("listeners", &state.listeners.len())
			.field("alerts", &state.alerts)
			.finish()
	}
}

impl Document for MemoryDocument {
	type Element = MemoryElement;
	type Listener = MemoryListener;

	fn get_element_by_id(&self, id: &str) -> Option<MemoryElement> {
		self.state.borrow().elements.get(id).cloned()
	}

	fn add_event_listener(
		&self,
		target: &MemoryElement,
		event_type: EventType,
		handler: EventHandler,
	) -> Result<MemoryListener, PagesError> {
		let mut state = self.state.borrow_mut();
		let key = state.next_key;
		state.next_key += 1;
		state.listeners.push(Listener {
			key,
			element_id: target.id(),
			event_type,
			handler,
		});

		Ok(MemoryListener {
			document: Rc::downgrade(&self.state),
			key,
		})
	}

	fn alert(&self, message: &str) {
		self.state.borrow_mut().alerts.push(message.to_string());
	}
}
