use html::{classes, component, html};

pub fn icon_class(name: &str, class_name: Option<&str>) -> String {
	classes!("fa-solid", format!("fa-{}", name), class_name)
}

/// A Font Awesome glyph. The icon library's stylesheet resolves the name to a glyph.
#[component]
pub fn Icon(name: &'static str, class_name: Option<&'static str>) {
	let class_name = icon_class(name, class_name);
	html! {
		<i class={class_name} aria-hidden="true"></i>
	}
}

#[test]
fn test_icon() {
	let html = html!(<Icon name="chart-line" class_name={None} />).render_to_string();
	assert_eq!(html, r#"<i class="fa-solid fa-chart-line" aria-hidden="true"></i>"#);
	let html = html!(<Icon name="wallet" class_name={Some("sidebar-icon")} />).render_to_string();
	assert_eq!(
		html,
		r#"<i class="fa-solid fa-wallet sidebar-icon" aria-hidden="true"></i>"#
	);
}
