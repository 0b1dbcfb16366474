//! Placement directives for asset insertion.

use serde::{Deserialize, Serialize};

/// Where a newly declared asset should land in its list.
///
/// A directive may combine fields. Resolution order when inserting:
///
/// 1. `before`: lenient; a missing target is ignored.
/// 2. `after`: strict; a missing target is an error. Overrides `before`.
/// 3. `index`: used only if neither of the above produced a target.
/// 4. Otherwise the asset is appended.
///
/// # Examples
///
/// ```
/// use widgetry_assets::Position;
///
/// let pos = Position::before("jquery.js").with_index(0);
/// assert_eq!(pos.before.as_deref(), Some("jquery.js"));
/// assert_eq!(pos.index, Some(0));
/// assert!(Position::append().is_append());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub index: Option<usize>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub before: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub after: Option<String>,
}

impl Position {
	/// No constraint: append at the end.
	pub fn append() -> Self {
		Self::default()
	}

	pub fn index(index: usize) -> Self {
		Self::default().with_index(index)
	}

	pub fn before(locator: impl Into<String>) -> Self {
		Self::default().with_before(locator)
	}

	pub fn after(locator: impl Into<String>) -> Self {
		Self::default().with_after(locator)
	}

	pub fn with_index(mut self, index: usize) -> Self {
		self.index = Some(index);
		self
	}

	pub fn with_before(mut self, locator: impl Into<String>) -> Self {
		self.before = Some(locator.into());
		self
	}

	pub fn with_after(mut self, locator: impl Into<String>) -> Self {
		self.after = Some(locator.into());
		self
	}

	/// True when no field is set.
	pub fn is_append(&self) -> bool {
		self.index.is_none() && self.before.is_none() && self.after.is_none()
	}
}
