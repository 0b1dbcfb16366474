//! Page settings
//!
//! Settings control the document envelope and a few compatibility switches.
//! They can be built in code or loaded from a TOML file:
//!
//! ```toml
//! doctype = "<!DOCTYPE html>"
//! html_namespace = ""
//! wrapper_class = "container"
//! render_as_template = false
//! legacy_resource_before = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// XHTML 1.0 Transitional public doctype.
pub const XHTML_TRANSITIONAL_DOCTYPE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">";

/// XHTML namespace written on the root element.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("failed to read settings file: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Settings applied to a [`Page`](crate::Page) at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
	/// Initial doctype line. Can be replaced per page with `set_doctype`.
	pub doctype: String,

	/// `xmlns` on the root element; empty omits the attribute.
	pub html_namespace: String,

	/// Class of the `<div>` wrapping the body content.
	pub wrapper_class: String,

	/// Class of the `<div>` wrapping each widget created by the page.
	pub widget_class: String,

	/// Pass the assembled document through the bound render engine.
	///
	/// Has no effect unless an engine and request context are bound.
	pub render_as_template: bool,

	/// Reproduce the historical resource-link `before` lookup, which never
	/// found its target. With this on, resources declared `before` another
	/// resource fall back to their index or are appended.
	pub legacy_resource_before: bool,
}

impl Default for PageSettings {
	fn default() -> Self {
		Self {
			doctype: XHTML_TRANSITIONAL_DOCTYPE.to_string(),
			html_namespace: XHTML_NAMESPACE.to_string(),
			wrapper_class: "main_wrapper".to_string(),
			widget_class: "widget".to_string(),
			render_as_template: true,
			legacy_resource_before: false,
		}
	}
}

impl PageSettings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from TOML. Missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use widgetry_page::PageSettings;
	///
	/// let settings = PageSettings::from_toml_str("wrapper_class = \"shell\"").unwrap();
	/// assert_eq!(settings.wrapper_class, "shell");
	/// assert!(settings.render_as_template);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	pub fn doctype(mut self, doctype: impl Into<String>) -> Self {
		self.doctype = doctype.into();
		self
	}

	pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
		self.wrapper_class = class.into();
		self
	}

	pub fn widget_class(mut self, class: impl Into<String>) -> Self {
		self.widget_class = class.into();
		self
	}

	pub fn render_as_template(mut self, enabled: bool) -> Self {
		self.render_as_template = enabled;
		self
	}

	pub fn legacy_resource_before(mut self, enabled: bool) -> Self {
		self.legacy_resource_before = enabled;
		self
	}
}
