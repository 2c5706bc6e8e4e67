use crate::navigation::NavigationEntry;
use tracing::debug;

/// Local state of one sidebar instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarState {
	pub is_opened: bool,
	pub current_path: String,
}

impl Default for SidebarState {
	fn default() -> SidebarState {
		SidebarState {
			is_opened: false,
			current_path: "/".to_owned(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarAction {
	Toggle,
	Select(String),
}

impl SidebarState {
	pub fn apply(&mut self, action: SidebarAction) {
		match action {
			SidebarAction::Toggle => {
				self.is_opened = !self.is_opened;
				debug!(is_opened = self.is_opened, "toggled sidebar");
			}
			SidebarAction::Select(path) => {
				// Unknown paths are stored as is and leave no entry active.
				debug!(path = %path, "selected sidebar entry");
				self.current_path = path;
			}
		}
	}

	pub fn is_active(&self, entry: &NavigationEntry) -> bool {
		entry.path == self.current_path
	}
}

/// Receives the path of every selected entry. The host application supplies it to perform the
/// actual page transition.
pub trait Navigator {
	fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
	F: Fn(&str),
{
	fn navigate(&self, path: &str) {
		self(path)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::navigation::{all_entries, PRIMARY_ENTRIES};

	#[test]
	fn test_default_state() {
		let state = SidebarState::default();
		assert!(!state.is_opened);
		assert_eq!(state.current_path, "/");
		assert!(state.is_active(&PRIMARY_ENTRIES[0]));
	}

	#[test]
	fn test_toggle_parity() {
		let mut state = SidebarState::default();
		for count in 1..=9 {
			state.apply(SidebarAction::Toggle);
			assert_eq!(state.is_opened, count % 2 == 1);
		}
	}

	#[test]
	fn test_select_marks_exactly_one_entry() {
		let mut state = SidebarState::default();
		for entry in all_entries() {
			state.apply(SidebarAction::Select(entry.path.to_owned()));
			assert_eq!(state.current_path, entry.path);
			let active = all_entries()
				.filter(|entry| state.is_active(entry))
				.map(|entry| entry.title)
				.collect::<Vec<_>>();
			assert_eq!(active, vec![entry.title]);
		}
	}

	#[test]
	fn test_select_unknown_path() {
		let mut state = SidebarState::default();
		state.apply(SidebarAction::Select("/nowhere".to_owned()));
		assert_eq!(state.current_path, "/nowhere");
		assert_eq!(all_entries().filter(|entry| state.is_active(entry)).count(), 0);
	}

	#[test]
	fn test_axes_are_independent() {
		let mut state = SidebarState::default();
		state.apply(SidebarAction::Select("/costs".to_owned()));
		state.apply(SidebarAction::Toggle);
		assert_eq!(
			state,
			SidebarState {
				is_opened: true,
				current_path: "/costs".to_owned(),
			}
		);
	}
}
