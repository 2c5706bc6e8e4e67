// Block attributes and children must expand without redundant braces.
#![deny(unused_braces)]

use html::{component, html};

#[component]
fn Test() {
	return html!(
	  <div>{"Hello World"}</div>
	);
}

#[component]
fn Wrapper(class_name: String, hidden: Option<bool>) {
	html! {
		<section class={class_name} hidden={hidden}>
			{children}
		</section>
	}
}

#[test]
fn test() {
	let html = html!(<Test />).render_to_string();
	assert_eq!(html, "<div>Hello World</div>");
}

#[test]
fn test_hyphenated_and_shorthand_attributes() {
	let html = html! {
		<button type="button" aria-label="Toggle" data-sidebar-toggle>
			{"x"}
		</button>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<button type="button" aria-label="Toggle" data-sidebar-toggle>x</button>"#
	);
}

#[test]
fn test_component_children() {
	let html = html! {
		<Wrapper class_name="outer" hidden={None}>
			<Test />
			{"<escaped>"}
		</Wrapper>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<section class="outer"><div>Hello World</div>&lt;escaped&gt;</section>"#
	);
}

#[test]
fn test_self_closing_and_optional_children() {
	let label: Option<String> = None;
	let html = html! {
		<>
			<img src="/logo.png" />
			{label}
			<span hidden={true}>{Some("shown")}</span>
		</>
	}
	.render_to_string();
	assert_eq!(html, r#"<img src="/logo.png" /><span hidden>shown</span>"#);
}

#[test]
fn test_block_attributes_and_children() {
	let class_name = "link".to_owned();
	let current: Option<&'static str> = Some("page");
	let html = html! {
		<a class={class_name} aria-current={current} hidden={false}>
			{"Home"}
			{None::<String>}
		</a>
	}
	.render_to_string();
	assert_eq!(html, r#"<a class="link" aria-current="page">Home</a>"#);
}
