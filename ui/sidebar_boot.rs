use crate::icon::icon_class;
use crate::navigation::find_entry;
use crate::sidebar::{
	LinkView, SidebarController, SidebarProps, ToggleView, ACTIVE_CLASS, LINK_TEXT_CLASS,
	OPENED_CLASS,
};
use crate::sidebar_state::{SidebarAction, SidebarState};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

#[derive(Debug, Error)]
pub enum BootError {
	#[error("no global window")]
	MissingWindow,
	#[error("window has no document")]
	MissingDocument,
	#[error("no html element with id {0:?}")]
	MissingElement(String),
	#[error("element {0:?} has no data-props attribute")]
	MissingProps(String),
	#[error("invalid sidebar props: {0}")]
	InvalidProps(#[from] serde_json::Error),
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for BootError {
	fn from(value: JsValue) -> BootError {
		BootError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

fn mount_element(id: &str) -> Result<web_sys::HtmlElement, BootError> {
	let window = web_sys::window().ok_or(BootError::MissingWindow)?;
	let document = window.document().ok_or(BootError::MissingDocument)?;
	document
		.get_element_by_id(id)
		.and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
		.ok_or_else(|| BootError::MissingElement(id.to_owned()))
}

/// Reads the props that `sidebar_mount` serialized into the mount element.
pub fn read_sidebar_props(id: &str) -> Result<SidebarProps, BootError> {
	let element = mount_element(id)?;
	let props = element
		.dataset()
		.get("props")
		.ok_or_else(|| BootError::MissingProps(id.to_owned()))?;
	Ok(serde_json::from_str(&props)?)
}

const TOGGLE_ATTRIBUTE: &str = "data-sidebar-toggle";
const PATH_ATTRIBUTE: &str = "data-path";

/// Maps a click to an action. `closest` returns the value of the named attribute on the nearest
/// element carrying it, starting at the click target and walking up.
fn click_action<F>(closest: F) -> Result<Option<SidebarAction>, BootError>
where
	F: Fn(&str) -> Result<Option<String>, BootError>,
{
	if closest(TOGGLE_ATTRIBUTE)?.is_some() {
		return Ok(Some(SidebarAction::Toggle));
	}
	Ok(closest(PATH_ATTRIBUTE)?.map(SidebarAction::Select))
}

fn closest_attribute(target: &web_sys::Element, name: &str) -> Result<Option<String>, BootError> {
	let element = target.closest(&format!("[{}]", name))?;
	Ok(element.and_then(|element| element.get_attribute(name)))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ClickModifiers {
	button: i16,
	alt: bool,
	ctrl: bool,
	meta: bool,
	shift: bool,
}

impl ClickModifiers {
	fn from_event(event: &web_sys::Event) -> ClickModifiers {
		match event.dyn_ref::<web_sys::MouseEvent>() {
			Some(event) => ClickModifiers {
				button: event.button(),
				alt: event.alt_key(),
				ctrl: event.ctrl_key(),
				meta: event.meta_key(),
				shift: event.shift_key(),
			},
			None => ClickModifiers::default(),
		}
	}

	/// Modified or non-primary clicks open the link in a new tab or window, which the browser
	/// handles on its own.
	fn opens_elsewhere(&self) -> bool {
		self.button != 0 || self.alt || self.ctrl || self.meta || self.shift
	}
}

fn set_optional_attribute(
	element: &web_sys::Element,
	name: &str,
	value: Option<&str>,
) -> Result<(), BootError> {
	match value {
		Some(value) => element.set_attribute(name, value)?,
		None => element.remove_attribute(name)?,
	}
	Ok(())
}

fn update_link(link: &web_sys::Element, view: &LinkView) -> Result<(), BootError> {
	link.class_list().toggle_with_force(ACTIVE_CLASS, view.active)?;
	set_optional_attribute(link, "aria-current", view.aria_current)?;
	set_optional_attribute(link, "title", view.tooltip)?;
	let text = link.query_selector(&format!(".{}", LINK_TEXT_CLASS))?;
	match (text, view.label) {
		(None, Some(label)) => {
			let document = link.owner_document().ok_or(BootError::MissingDocument)?;
			let span = document.create_element("span")?;
			span.set_class_name(LINK_TEXT_CLASS);
			span.set_text_content(Some(label));
			link.append_child(&span)?;
		}
		(Some(text), None) => text.remove(),
		_ => {}
	}
	Ok(())
}

/// Brings the rendered sidebar in line with `state` by editing the existing elements, so the
/// width transition plays and focus stays where it was.
fn update_sidebar(root: &web_sys::Element, state: &SidebarState) -> Result<(), BootError> {
	let sidebar = root
		.query_selector(".sidebar")?
		.ok_or_else(|| BootError::MissingElement(".sidebar".to_owned()))?;
	sidebar
		.class_list()
		.toggle_with_force(OPENED_CLASS, state.is_opened)?;
	let toggle = ToggleView::new(state.is_opened);
	if let Some(button) = sidebar.query_selector(&format!("[{}]", TOGGLE_ATTRIBUTE))? {
		button.set_attribute("aria-expanded", toggle.expanded)?;
		button.set_attribute("aria-label", toggle.label)?;
		if let Some(icon) = button.query_selector("i")? {
			icon.set_class_name(&icon_class(toggle.icon, None));
		}
	}
	let links = sidebar.query_selector_all(&format!("[{}]", PATH_ATTRIBUTE))?;
	for index in 0..links.length() {
		let link = match links
			.item(index)
			.and_then(|node| node.dyn_into::<web_sys::Element>().ok())
		{
			Some(link) => link,
			None => continue,
		};
		let entry = match link
			.get_attribute(PATH_ATTRIBUTE)
			.and_then(|path| find_entry(&path))
		{
			Some(entry) => entry,
			None => continue,
		};
		update_link(&link, &LinkView::new(entry, state))?;
	}
	Ok(())
}

/// Boots the sidebar rendered into the element with the given id, rendering it first if the
/// element is empty, and keeps it in sync with clicks on the toggle button and the entries.
pub fn boot_sidebar(id: &str, controller: SidebarController) -> Result<(), BootError> {
	let root = mount_element(id)?;
	if root.query_selector(".sidebar")?.is_none() {
		root.set_inner_html(&controller.render_to_string());
	}
	let controller = Rc::new(RefCell::new(controller));
	let handler_root = root.clone();
	let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
		let target = match event
			.target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
		{
			Some(target) => target,
			None => return,
		};
		let action = match click_action(|name| closest_attribute(&target, name)) {
			Ok(Some(action)) => action,
			Ok(None) => return,
			Err(error) => {
				console::error_1(&error.to_string().into());
				return;
			}
		};
		if let SidebarAction::Select(_) = action {
			if ClickModifiers::from_event(&event).opens_elsewhere() {
				return;
			}
			event.prevent_default();
		}
		let mut controller = controller.borrow_mut();
		controller.dispatch(action);
		if let Err(error) = update_sidebar(&handler_root, controller.state()) {
			console::error_1(&error.to_string().into());
		}
	}));
	root.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}

#[test]
fn test_boot_error_messages() {
	assert_eq!(
		BootError::MissingElement("sidebar".to_owned()).to_string(),
		r#"no html element with id "sidebar""#
	);
	let error = serde_json::from_str::<SidebarProps>("{").unwrap_err();
	assert!(BootError::from(error)
		.to_string()
		.starts_with("invalid sidebar props: "));
}

#[cfg(test)]
fn action_for(ancestors: &[&[(&str, &str)]]) -> Option<SidebarAction> {
	click_action(|name| {
		Ok(ancestors.iter().find_map(|attributes| {
			attributes
				.iter()
				.find(|(key, _)| *key == name)
				.map(|(_, value)| value.to_string())
		}))
	})
	.unwrap()
}

#[test]
fn test_click_on_toggle_icon_toggles() {
	let ancestors: &[&[(&str, &str)]] = &[
		&[("class", "fa-solid fa-angle-right")],
		&[("type", "button"), ("data-sidebar-toggle", "")],
		&[("class", "sidebar-head")],
	];
	assert_eq!(action_for(ancestors), Some(SidebarAction::Toggle));
}

#[test]
fn test_click_on_link_label_selects_path() {
	let ancestors: &[&[(&str, &str)]] = &[
		&[("class", "sidebar-link-text")],
		&[("class", "sidebar-link"), ("href", "/sales"), ("data-path", "/sales")],
		&[("class", "sidebar-body")],
	];
	assert_eq!(
		action_for(ancestors),
		Some(SidebarAction::Select("/sales".to_owned()))
	);
}

#[test]
fn test_toggle_wins_over_path() {
	let ancestors: &[&[(&str, &str)]] = &[&[("data-sidebar-toggle", "")], &[("data-path", "/")]];
	assert_eq!(action_for(ancestors), Some(SidebarAction::Toggle));
}

#[test]
fn test_click_outside_entries_does_nothing() {
	let ancestors: &[&[(&str, &str)]] = &[&[("class", "sidebar-body")], &[("class", "sidebar")]];
	assert_eq!(action_for(ancestors), None);
}

#[test]
fn test_modified_clicks_open_elsewhere() {
	assert!(!ClickModifiers::default().opens_elsewhere());
	let ctrl = ClickModifiers {
		ctrl: true,
		..Default::default()
	};
	let meta = ClickModifiers {
		meta: true,
		..Default::default()
	};
	let middle = ClickModifiers {
		button: 1,
		..Default::default()
	};
	assert!(ctrl.opens_elsewhere());
	assert!(meta.opens_elsewhere());
	assert!(middle.opens_elsewhere());
}
