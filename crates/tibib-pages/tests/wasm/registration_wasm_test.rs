//! Registration page tests against a real browser DOM
//!
//! Run with `wasm-pack test --headless --chrome crates/tibib-pages`.

#![cfg(target_arch = "wasm32")]

use tibib_forms::RegistrationSettings;
use tibib_pages::{RegistrationPage, WebDocument};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const TEMPLATE_IDS: [(&str, &str); 10] = [
	("form", "registerForm"),
	("input", "card_number"),
	("input", "password"),
	("input", "phone_number"),
	("input", "country_code"),
	("li", "length"),
	("li", "uppercase"),
	("li", "lowercase"),
	("li", "number"),
	("li", "special"),
];

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn render_template() {
	let document = document();
	let body = document.body().unwrap();
	for (tag, id) in TEMPLATE_IDS {
		if let Some(existing) = document.get_element_by_id(id) {
			existing.remove();
		}
		let element = document.create_element(tag).unwrap();
		element.set_id(id);
		body.append_child(&element).unwrap();
	}
}

fn input(id: &str) -> HtmlInputElement {
	document()
		.get_element_by_id(id)
		.unwrap()
		.dyn_into::<HtmlInputElement>()
		.unwrap()
}

fn fire(id: &str, event_type: &str) -> Event {
	let init = EventInit::new();
	init.set_cancelable(true);
	let event = Event::new_with_event_init_dict(event_type, &init).unwrap();
	document()
		.get_element_by_id(id)
		.unwrap()
		.dispatch_event(&event)
		.unwrap();
	event
}

fn type_into(id: &str, value: &str) {
	input(id).set_value(value);
	fire(id, "input");
}

#[wasm_bindgen_test]
fn test_card_number_is_grouped_in_browser() {
	render_template();
	let settings = RegistrationSettings::default();
	let document = WebDocument::from_window().unwrap();
	let _page = RegistrationPage::mount(&document, &settings).unwrap();

	type_into("card_number", "4111111111111111");
	assert_eq!(input("card_number").value(), "4111 1111 1111 1111");

	type_into("country_code", "62");
	assert_eq!(input("country_code").value(), "+62");
}

#[wasm_bindgen_test]
fn test_indicator_classes_in_browser() {
	render_template();
	let settings = RegistrationSettings::default();
	let document = WebDocument::from_window().unwrap();
	let _page = RegistrationPage::mount(&document, &settings).unwrap();

	type_into("password", "Abcdef1!");
	let special = self::document().get_element_by_id("special").unwrap();
	assert!(special.class_list().contains("valid"));

	type_into("password", "Abcdef1");
	assert!(!special.class_list().contains("valid"));
}

#[wasm_bindgen_test]
fn test_strong_password_submit_is_not_cancelled() {
	render_template();
	let settings = RegistrationSettings::default();
	let document = WebDocument::from_window().unwrap();
	let _page = RegistrationPage::mount(&document, &settings).unwrap();

	type_into("password", "Abcdef1!");
	let event = fire("registerForm", "submit");
	assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
fn test_dropped_page_stops_masking() {
	render_template();
	let settings = RegistrationSettings::default();
	let document = WebDocument::from_window().unwrap();
	drop(RegistrationPage::mount(&document, &settings).unwrap());

	type_into("phone_number", "12-34");
	assert_eq!(input("phone_number").value(), "12-34");
}
