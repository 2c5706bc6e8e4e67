use thiserror::Error;

/// A single destination shown in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
	pub title: &'static str,
	/// Font Awesome icon name, without the `fa-` prefix.
	pub icon: &'static str,
	pub path: &'static str,
}

pub const PRIMARY_ENTRIES: &[NavigationEntry] = &[
	NavigationEntry {
		title: "Home",
		icon: "house",
		path: "/",
	},
	NavigationEntry {
		title: "Sales",
		icon: "chart-line",
		path: "/sales",
	},
	NavigationEntry {
		title: "Costs",
		icon: "chart-column",
		path: "/costs",
	},
	NavigationEntry {
		title: "Payments",
		icon: "wallet",
		path: "/payments",
	},
	NavigationEntry {
		title: "Finances",
		icon: "chart-pie",
		path: "/finances",
	},
	NavigationEntry {
		title: "Messages",
		icon: "envelope",
		path: "/messages",
	},
];

pub const SECONDARY_ENTRIES: &[NavigationEntry] = &[
	NavigationEntry {
		title: "Settings",
		icon: "sliders",
		path: "/settings",
	},
	NavigationEntry {
		title: "Support",
		icon: "phone-volume",
		path: "/support",
	},
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
	#[error("entries {first:?} and {second:?} share the path {path:?}")]
	DuplicatePath {
		path: &'static str,
		first: &'static str,
		second: &'static str,
	},
}

/// Iterates the primary entries followed by the secondary entries.
pub fn all_entries() -> impl Iterator<Item = &'static NavigationEntry> {
	PRIMARY_ENTRIES.iter().chain(SECONDARY_ENTRIES.iter())
}

/// Checks that no two entries share a path, so at most one entry can be active.
pub fn validate_entries<'a>(
	entries: impl IntoIterator<Item = &'a NavigationEntry>,
) -> Result<(), NavigationError> {
	let mut seen: Vec<&NavigationEntry> = Vec::new();
	for entry in entries {
		if let Some(first) = seen.iter().find(|seen| seen.path == entry.path) {
			return Err(NavigationError::DuplicatePath {
				path: entry.path,
				first: first.title,
				second: entry.title,
			});
		}
		seen.push(entry);
	}
	Ok(())
}

/// Finds the entry matching `path`, if any.
pub fn find_entry(path: &str) -> Option<&'static NavigationEntry> {
	all_entries().find(|entry| entry.path == path)
}

#[test]
fn test_configured_entries_have_unique_paths() {
	assert_eq!(validate_entries(all_entries()), Ok(()));
	assert_eq!(all_entries().count(), 8);
}

#[test]
fn test_duplicate_paths_are_reported() {
	let entries = [
		NavigationEntry {
			title: "Home",
			icon: "house",
			path: "/",
		},
		NavigationEntry {
			title: "Sales",
			icon: "chart-line",
			path: "/sales",
		},
		NavigationEntry {
			title: "Dashboard",
			icon: "gauge",
			path: "/",
		},
	];
	let error = validate_entries(entries.iter()).unwrap_err();
	assert_eq!(
		error,
		NavigationError::DuplicatePath {
			path: "/",
			first: "Home",
			second: "Dashboard",
		}
	);
	assert_eq!(
		error.to_string(),
		r#"entries "Home" and "Dashboard" share the path "/""#
	);
}

#[test]
fn test_find_entry() {
	assert_eq!(find_entry("/support").map(|entry| entry.title), Some("Support"));
	assert_eq!(find_entry("/unknown"), None);
}
