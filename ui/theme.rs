//! Resolution of a theme identifier to the CSS custom properties the sidebar styles consume.
//!
//! The host stylesheet defines variables named `--color-<role>-<theme>-<state>`. This module
//! only produces references to them, so an unknown theme degrades to undefined variables.

use html::style;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeToken(String);

impl ThemeToken {
	pub const DEFAULT: &'static str = "default";

	/// Keeps the identifier as given, trimmed. Returns `None` for a blank value.
	pub fn parse(value: &str) -> Option<ThemeToken> {
		let value = value.trim();
		if value.is_empty() {
			None
		} else {
			Some(ThemeToken(value.to_owned()))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The identifier escaped for use inside a custom property name. Case and non-ASCII
	/// characters are kept, since custom property names are case-sensitive.
	pub fn css_ident(&self) -> String {
		let mut ident = String::with_capacity(self.0.len());
		for c in self.0.chars() {
			if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
				ident.push(c);
			} else if c.is_ascii_graphic() {
				ident.push('\\');
				ident.push(c);
			} else {
				// Whitespace and control characters need a hex escape terminated by a space.
				ident.push_str(&format!("\\{:x} ", c as u32));
			}
		}
		ident
	}
}

impl Default for ThemeToken {
	fn default() -> ThemeToken {
		ThemeToken(ThemeToken::DEFAULT.to_owned())
	}
}

impl fmt::Display for ThemeToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractiveValues {
	pub default: String,
	pub hover: String,
	pub active: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleValues {
	pub token: ThemeToken,
	pub sidebar_background: InteractiveValues,
	pub text: InteractiveValues,
	pub button_background: InteractiveValues,
	pub logo_text: String,
}

fn color_var(role: &str, token: &ThemeToken, state: &str) -> String {
	format!("var(--color-{}-{}-{})", role, token.css_ident(), state)
}

fn interactive(role: &str, token: &ThemeToken) -> InteractiveValues {
	InteractiveValues {
		default: color_var(role, token, "default"),
		hover: color_var(role, token, "hover"),
		active: color_var(role, token, "active"),
	}
}

/// Resolves an optional theme identifier. Absent or empty identifiers use the `default` theme.
pub fn resolve_theme(color: Option<&str>) -> StyleValues {
	let token = color.and_then(ThemeToken::parse).unwrap_or_default();
	StyleValues {
		sidebar_background: interactive("sidebar-background", &token),
		text: interactive("text", &token),
		button_background: interactive("button-background", &token),
		logo_text: color_var("text-logo", &token, "default"),
		token,
	}
}

impl StyleValues {
	/// The custom property declarations applied inline on the sidebar wrapper.
	pub fn inline_style(&self) -> Option<String> {
		style! {
			"--sidebar-background" => self.sidebar_background.default.as_str(),
			"--sidebar-background-hover" => self.sidebar_background.hover.as_str(),
			"--sidebar-background-active" => self.sidebar_background.active.as_str(),
			"--sidebar-text" => self.text.default.as_str(),
			"--sidebar-text-hover" => self.text.hover.as_str(),
			"--sidebar-text-active" => self.text.active.as_str(),
			"--sidebar-button-background" => self.button_background.default.as_str(),
			"--sidebar-button-background-active" => self.button_background.active.as_str(),
			"--sidebar-logo-text" => self.logo_text.as_str(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_resolve_named_theme() {
		let style = resolve_theme(Some("dark"));
		assert_eq!(style.token.as_str(), "dark");
		assert_eq!(
			style.sidebar_background.default,
			"var(--color-sidebar-background-dark-default)"
		);
		assert_eq!(style.text.hover, "var(--color-text-dark-hover)");
		assert_eq!(
			style.button_background.active,
			"var(--color-button-background-dark-active)"
		);
		assert_eq!(style.logo_text, "var(--color-text-logo-dark-default)");
	}

	#[test]
	fn test_missing_theme_falls_back_to_default() {
		assert_eq!(resolve_theme(None), resolve_theme(Some("default")));
		assert_eq!(resolve_theme(Some("   ")).token, ThemeToken::default());
		assert_eq!(
			resolve_theme(None).text.default,
			"var(--color-text-default-default)"
		);
	}

	#[test]
	fn test_theme_names_keep_their_case() {
		assert_eq!(
			resolve_theme(Some("DarkBlue")).text.default,
			"var(--color-text-DarkBlue-default)"
		);
		assert_eq!(
			resolve_theme(Some(" dark_blue ")).text.default,
			"var(--color-text-dark_blue-default)"
		);
		assert_ne!(resolve_theme(Some("DarkBlue")), resolve_theme(Some("darkblue")));
		assert_eq!(resolve_theme(Some("DarkBlue")).token.as_str(), "DarkBlue");
	}

	#[test]
	fn test_non_ascii_theme_is_not_replaced_by_default() {
		let style = resolve_theme(Some("тёмная"));
		assert_eq!(style.token.as_str(), "тёмная");
		assert_eq!(style.text.default, "var(--color-text-тёмная-default)");
	}

	#[test]
	fn test_theme_names_are_escaped() {
		let token = ThemeToken::parse("red);}").unwrap();
		assert_eq!(token.css_ident(), r"red\)\;\}");
		assert_eq!(token.to_string(), "red);}");
		let token = ThemeToken::parse("dark.blue theme").unwrap();
		assert_eq!(token.css_ident(), r"dark\.blue\20 theme");
		assert_eq!(ThemeToken::parse(" \t"), None);
	}

	#[test]
	fn test_inline_style() {
		let style = resolve_theme(Some("light")).inline_style().unwrap();
		assert!(style.starts_with(
			"--sidebar-background: var(--color-sidebar-background-light-default); "
		));
		assert!(style.ends_with("--sidebar-logo-text: var(--color-text-logo-light-default);"));
	}
}
