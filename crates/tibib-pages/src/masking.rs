//! Input mask binding
//!
//! Binds an [`InputMask`] to a field so that every `input` event rewrites the
//! field value through the mask.

use crate::debug_log;
use crate::dom::{Document, Element, EventType, FormEvent, event_handler};
use crate::error::PagesError;
use tibib_forms::InputMask;

/// Runs `mask` over the current value of `element`.
///
/// The value is written back only when the mask changed it. Returns whether a
/// write happened.
pub fn apply_mask<E: Element>(element: &E, mask: &InputMask) -> bool {
	let raw = element.value();
	let masked = mask.apply(&raw);
	if masked == raw {
		return false;
	}

	debug_log!("{} mask rewrote #{}: {:?} -> {:?}", mask.name(), element.id(), raw, masked);
	element.set_value(&masked);
	true
}

/// Attaches `mask` to the `input` event of `element`.
pub fn bind_mask<D: Document>(
	document: &D,
	element: &D::Element,
	mask: InputMask,
) -> Result<D::Listener, PagesError> {
	let target = element.clone();
	document.add_event_listener(
		element,
		EventType::Input,
		event_handler(move |_event: &FormEvent| {
			apply_mask(&target, &mask);
		}),
	)
}
