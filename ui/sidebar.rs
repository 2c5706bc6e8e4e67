use crate::icon::Icon;
use crate::navigation::{NavigationEntry, PRIMARY_ENTRIES, SECONDARY_ENTRIES};
use crate::sidebar_state::{Navigator, SidebarAction, SidebarState};
use crate::theme::resolve_theme;
use html::{classes, component, html};
use serde::{Deserialize, Serialize};

pub const SIDEBAR_CSS: &str = include_str!("sidebar.css");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarProps {
	/// Theme identifier. `None` selects the default theme.
	pub color: Option<String>,
	pub company_name: String,
	pub logo_url: String,
	pub logo_alt: String,
}

impl Default for SidebarProps {
	fn default() -> SidebarProps {
		SidebarProps {
			color: None,
			company_name: "TensorFlow".to_owned(),
			logo_url: "/assets/logo.png".to_owned(),
			logo_alt: "TensorFlow logo".to_owned(),
		}
	}
}

pub(crate) const OPENED_CLASS: &str = "opened";
pub(crate) const ACTIVE_CLASS: &str = "active";
pub(crate) const LINK_TEXT_CLASS: &str = "sidebar-link-text";

/// The toggle button's state dependent attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleView {
	pub icon: &'static str,
	pub label: &'static str,
	pub expanded: &'static str,
}

impl ToggleView {
	pub fn new(is_opened: bool) -> ToggleView {
		if is_opened {
			ToggleView {
				icon: "angle-left",
				label: "Collapse sidebar",
				expanded: "true",
			}
		} else {
			ToggleView {
				icon: "angle-right",
				label: "Expand sidebar",
				expanded: "false",
			}
		}
	}
}

/// A link's state dependent attributes, shared by the server render and the client update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkView {
	pub active: bool,
	pub aria_current: Option<&'static str>,
	/// Closed sidebars show icons only, so the title moves to the tooltip.
	pub tooltip: Option<&'static str>,
	pub label: Option<&'static str>,
}

impl LinkView {
	pub fn new(entry: &NavigationEntry, state: &SidebarState) -> LinkView {
		let active = state.is_active(entry);
		LinkView {
			active,
			aria_current: if active { Some("page") } else { None },
			tooltip: if state.is_opened { None } else { Some(entry.title) },
			label: if state.is_opened { Some(entry.title) } else { None },
		}
	}
}

#[component]
pub fn Sidebar(props: SidebarProps, state: SidebarState) {
	let style = resolve_theme(props.color.as_deref());
	let class_name = classes!(
		"sidebar",
		if state.is_opened { Some(OPENED_CLASS) } else { None }
	);
	let toggle = ToggleView::new(state.is_opened);
	let links = |entries: &'static [NavigationEntry]| {
		entries
			.iter()
			.map(|entry| {
				html! {
					<SidebarLink entry={*entry} view={LinkView::new(entry, &state)} />
				}
			})
			.collect::<Vec<_>>()
	};
	html! {
		<aside class={class_name} style={style.inline_style()} data-theme={style.token.to_string()}>
			<div class="sidebar-head">
				<img class="sidebar-logo" src={props.logo_url} alt={props.logo_alt} />
				<span class="sidebar-company-name">{props.company_name}</span>
				<button
					class="sidebar-toggle-button"
					type="button"
					aria-expanded={toggle.expanded}
					aria-label={toggle.label}
					data-sidebar-toggle
				>
					<Icon name={toggle.icon} class_name={None} />
				</button>
			</div>
			<nav class="sidebar-body">
				{links(PRIMARY_ENTRIES)}
			</nav>
			<div class="sidebar-bottom">
				{links(SECONDARY_ENTRIES)}
			</div>
		</aside>
	}
}

#[component]
fn SidebarLink(entry: NavigationEntry, view: LinkView) {
	let class_name = classes!(
		"sidebar-link",
		if view.active { Some(ACTIVE_CLASS) } else { None }
	);
	html! {
		<a
			class={class_name}
			href={entry.path}
			data-path={entry.path}
			aria-current={view.aria_current}
			title={view.tooltip}
		>
			<Icon name={entry.icon} class_name={Some("sidebar-icon")} />
			{view.label.map(|label| html! { <span class={LINK_TEXT_CLASS}>{label}</span> })}
		</a>
	}
}

/// One sidebar instance: its props, its local state, and the navigator notified on selection.
pub struct SidebarController {
	props: SidebarProps,
	state: SidebarState,
	navigator: Option<Box<dyn Navigator>>,
}

impl SidebarController {
	pub fn new(props: SidebarProps) -> SidebarController {
		SidebarController {
			props,
			state: SidebarState::default(),
			navigator: None,
		}
	}

	pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> SidebarController {
		self.navigator = Some(Box::new(navigator));
		self
	}

	pub fn state(&self) -> &SidebarState {
		&self.state
	}

	pub fn dispatch(&mut self, action: SidebarAction) {
		let selected = match &action {
			SidebarAction::Select(path) => Some(path.clone()),
			SidebarAction::Toggle => None,
		};
		self.state.apply(action);
		if let (Some(path), Some(navigator)) = (selected, self.navigator.as_ref()) {
			navigator.navigate(&path);
		}
	}

	pub fn toggle_sidebar(&mut self) {
		self.dispatch(SidebarAction::Toggle);
	}

	pub fn select_entry(&mut self, path: impl Into<String>) {
		self.dispatch(SidebarAction::Select(path.into()));
	}

	pub fn render(&self) -> html::Node {
		html! {
			<Sidebar props={self.props.clone()} state={self.state.clone()} />
		}
	}

	pub fn render_to_string(&self) -> String {
		self.render().render_to_string()
	}
}

/// Renders the element the client boots the sidebar into, with its props serialized for the
/// client to read back.
pub fn sidebar_mount(id: String, props: SidebarProps) -> Result<html::Node, serde_json::Error> {
	let props_json = serde_json::to_string(&props)?;
	let sidebar = SidebarController::new(props).render();
	Ok(html! {
		<div id={id} class="sidebar-mount" data-props={props_json}>
			{sidebar}
		</div>
	})
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::navigation::{all_entries, find_entry};
	use std::cell::RefCell;
	use std::rc::Rc;

	const ACTIVE_LINK: &str = r#"class="sidebar-link active""#;

	fn active_link(path: &str) -> String {
		format!(r#"class="sidebar-link active" href="{}""#, path)
	}

	#[test]
	fn test_initial_render() {
		let sidebar = SidebarController::new(SidebarProps::default());
		assert_eq!(sidebar.state(), &SidebarState::default());
		let html = sidebar.render_to_string();
		assert!(html.starts_with(r#"<aside class="sidebar" style="#));
		assert_eq!(html.matches(ACTIVE_LINK).count(), 1);
		assert!(html.contains(&active_link("/")));
		assert!(html.contains(r#"<i class="fa-solid fa-angle-right" aria-hidden="true"></i>"#));
		assert!(html.contains(r#"<span class="sidebar-company-name">TensorFlow</span>"#));
		assert!(!html.contains("sidebar-link-text"));
	}

	#[test]
	fn test_click_sales() {
		let mut sidebar = SidebarController::new(SidebarProps::default());
		sidebar.select_entry("/sales");
		let html = sidebar.render_to_string();
		assert_eq!(html.matches(ACTIVE_LINK).count(), 1);
		assert!(html.contains(&active_link("/sales")));
		assert!(!html.contains(&active_link("/")));
		assert!(html.contains(r#"<a class="sidebar-link" href="/" data-path="/""#));
	}

	#[test]
	fn test_every_entry_can_be_activated() {
		let mut sidebar = SidebarController::new(SidebarProps::default());
		for entry in all_entries() {
			sidebar.select_entry(entry.path);
			let html = sidebar.render_to_string();
			assert_eq!(html.matches(ACTIVE_LINK).count(), 1);
			assert!(html.contains(&active_link(entry.path)));
		}
	}

	#[test]
	fn test_unknown_path_deactivates_all_entries() {
		let mut sidebar = SidebarController::new(SidebarProps::default());
		sidebar.select_entry("/does-not-exist");
		let html = sidebar.render_to_string();
		assert_eq!(sidebar.state().current_path, "/does-not-exist");
		assert_eq!(html.matches(ACTIVE_LINK).count(), 0);
	}

	#[test]
	fn test_toggle_twice_returns_to_closed() {
		let mut sidebar = SidebarController::new(SidebarProps::default());
		sidebar.toggle_sidebar();
		let opened = sidebar.render_to_string();
		assert!(opened.starts_with(r#"<aside class="sidebar opened""#));
		assert!(opened.contains(r#"<span class="sidebar-link-text">Sales</span>"#));
		assert!(opened.contains(r#"aria-expanded="true""#));
		assert!(opened.contains("fa-angle-left"));
		sidebar.toggle_sidebar();
		let closed = sidebar.render_to_string();
		assert!(!sidebar.state().is_opened);
		assert!(closed.starts_with(r#"<aside class="sidebar""#));
		assert!(!closed.contains("sidebar-link-text"));
		assert!(closed.contains(r#"aria-expanded="false""#));
		assert!(closed.contains(r#"title="Sales""#));
	}

	#[test]
	fn test_render_without_color() {
		let sidebar = SidebarController::new(SidebarProps {
			color: None,
			..Default::default()
		});
		let html = sidebar.render_to_string();
		assert!(html.contains(r#"data-theme="default""#));
		assert!(html.contains("--sidebar-background: var(--color-sidebar-background-default-default);"));
	}

	#[test]
	fn test_render_with_color() {
		let sidebar = SidebarController::new(SidebarProps {
			color: Some("dark".to_owned()),
			..Default::default()
		});
		let html = sidebar.render_to_string();
		assert!(html.contains(r#"data-theme="dark""#));
		assert!(html.contains("--sidebar-text-active: var(--color-text-dark-active);"));
	}

	#[test]
	fn test_navigator_is_notified_on_selection() {
		let calls = Rc::new(RefCell::new(Vec::new()));
		let recorded = calls.clone();
		let mut sidebar = SidebarController::new(SidebarProps::default())
			.with_navigator(move |path: &str| recorded.borrow_mut().push(path.to_owned()));
		sidebar.toggle_sidebar();
		sidebar.select_entry("/payments");
		sidebar.select_entry("/unknown");
		assert_eq!(*calls.borrow(), vec!["/payments".to_owned(), "/unknown".to_owned()]);
	}

	#[test]
	fn test_instances_do_not_share_state() {
		let mut first = SidebarController::new(SidebarProps::default());
		let second = SidebarController::new(SidebarProps::default());
		first.toggle_sidebar();
		first.select_entry("/messages");
		assert_eq!(second.state(), &SidebarState::default());
	}

	#[test]
	fn test_sidebar_mount() {
		let props = SidebarProps {
			color: Some("light".to_owned()),
			..Default::default()
		};
		let html = sidebar_mount("sidebar".to_owned(), props).unwrap().render_to_string();
		assert!(html.starts_with(
			r#"<div id="sidebar" class="sidebar-mount" data-props="{&quot;color&quot;:&quot;light&quot;,"#
		));
		assert!(html.ends_with("</aside></div>"));
	}

	#[test]
	fn test_props_defaults_apply_to_partial_json() {
		let props: SidebarProps = serde_json::from_str(r#"{"color":"dark"}"#).unwrap();
		assert_eq!(props.color.as_deref(), Some("dark"));
		assert_eq!(props.company_name, "TensorFlow");
		let props: SidebarProps = serde_json::from_str("{}").unwrap();
		assert_eq!(props, SidebarProps::default());
	}

	#[test]
	fn test_stylesheet_consumes_theme_properties() {
		let style = resolve_theme(None).inline_style().unwrap();
		for declaration in style.split(';').filter(|declaration| !declaration.trim().is_empty()) {
			let name = declaration.split(':').next().unwrap().trim();
			assert!(SIDEBAR_CSS.contains(&format!("var({})", name)), "{} is unused", name);
		}
		assert!(SIDEBAR_CSS.contains("width: 225px;"));
	}

	#[test]
	fn test_link_view_follows_state() {
		let sales = find_entry("/sales").unwrap();
		let mut state = SidebarState::default();
		assert_eq!(
			LinkView::new(sales, &state),
			LinkView {
				active: false,
				aria_current: None,
				tooltip: Some("Sales"),
				label: None,
			}
		);
		state.apply(SidebarAction::Select("/sales".to_owned()));
		state.apply(SidebarAction::Toggle);
		assert_eq!(
			LinkView::new(sales, &state),
			LinkView {
				active: true,
				aria_current: Some("page"),
				tooltip: None,
				label: Some("Sales"),
			}
		);
		assert_eq!(ToggleView::new(true).icon, "angle-left");
		assert_eq!(ToggleView::new(false).expanded, "false");
	}
}
