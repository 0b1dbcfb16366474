//! Asset kinds and their fixed markup fragments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an includable reference.
///
/// Each kind owns its own [`AssetList`](crate::AssetList) on a page, so the
/// same locator may appear once per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
	/// External JavaScript file.
	Script,
	/// External CSS file.
	Stylesheet,
	/// Generic `<link rel="resources">` include.
	Resource,
}

impl AssetKind {
	/// All kinds, in head render order.
	pub const HEAD_ORDER: [AssetKind; 3] =
		[AssetKind::Resource, AssetKind::Script, AssetKind::Stylesheet];

	/// Renders the include tag for `locator`.
	///
	/// The output is byte-exact and the locator is written verbatim.
	///
	/// # Examples
	///
	/// ```
	/// use widgetry_assets::AssetKind;
	///
	/// assert_eq!(
	///     AssetKind::Script.fragment("/js/app.js"),
	///     r#"<script type="text/javascript" src="/js/app.js"></script>"#
	/// );
	/// ```
	pub fn fragment(self, locator: &str) -> String {
		match self {
			AssetKind::Script => {
				format!("<script type=\"text/javascript\" src=\"{}\"></script>", locator)
			}
			AssetKind::Stylesheet => format!(
				"<link type=\"text/css\" rel=\"stylesheet\" href=\"{}\" />",
				locator
			),
			AssetKind::Resource => format!(
				"<link rel=\"resources\" href=\"{}\" type=\"text/html\" />",
				locator
			),
		}
	}

	/// Short lowercase name used in logs and error messages.
	pub fn as_str(self) -> &'static str {
		match self {
			AssetKind::Script => "script",
			AssetKind::Stylesheet => "stylesheet",
			AssetKind::Resource => "resource",
		}
	}
}

impl fmt::Display for AssetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Renders an inline `<script>` block.
pub fn inline_script(text: &str) -> String {
	format!("<script type=\"text/javascript\">{}</script>", text)
}

/// Renders an inline `<style>` block.
pub fn inline_style(text: &str) -> String {
	format!("<style type=\"text/css\">{}</style>", text)
}

/// A `(kind, locator)` pair. Two references are the same asset iff both
/// fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetReference {
	pub kind: AssetKind,
	pub locator: String,
}

impl AssetReference {
	pub fn new(kind: AssetKind, locator: impl Into<String>) -> Self {
		Self {
			kind,
			locator: locator.into(),
		}
	}

	pub fn script(locator: impl Into<String>) -> Self {
		Self::new(AssetKind::Script, locator)
	}

	pub fn stylesheet(locator: impl Into<String>) -> Self {
		Self::new(AssetKind::Stylesheet, locator)
	}

	pub fn resource(locator: impl Into<String>) -> Self {
		Self::new(AssetKind::Resource, locator)
	}

	/// Renders this reference with its kind's fixed fragment.
	pub fn to_html(&self) -> String {
		self.kind.fragment(&self.locator)
	}
}
