use dashboard_ui as ui;
use wasm_bindgen::prelude::*;
use web_sys::console;

const SIDEBAR_ID: &str = "sidebar";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	boot().map_err(|error| {
		let message = format!("failed to boot the sidebar: {}", error);
		console::error_1(&message.clone().into());
		JsValue::from_str(&message)
	})
}

fn boot() -> Result<(), ui::BootError> {
	let props = ui::read_sidebar_props(SIDEBAR_ID)?;
	let controller = ui::SidebarController::new(props).with_navigator(push_history);
	ui::boot_sidebar(SIDEBAR_ID, controller)
}

/// Records the selected path in the browser history. The page router listens for it.
fn push_history(path: &str) {
	let history = match web_sys::window().map(|window| window.history()) {
		Some(Ok(history)) => history,
		_ => return,
	};
	if let Err(error) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
		console::error_2(&"failed to push history state".into(), &error);
	}
}
