//! Ordered, deduplicated asset lists.
//!
//! An [`AssetList`] holds the locators of a single [`AssetKind`] in render
//! order. Components that know nothing about each other declare assets in
//! whatever order they happen to run; the list merges those declarations,
//! keeping the first placement of every locator and honouring
//! `before`/`after`/`index` constraints relative to what is already there.

use crate::{AssetError, AssetKind, AssetReference, AssetResult, Position};
use indexmap::IndexSet;

/// Ordered set of locators for one asset kind.
///
/// # Examples
///
/// ```
/// use widgetry_assets::{AssetKind, AssetList, Position};
///
/// let mut scripts = AssetList::new(AssetKind::Script);
/// scripts.insert("a.js", &Position::append()).unwrap();
/// scripts.insert("b.js", &Position::append()).unwrap();
/// scripts.insert("c.js", &Position::after("a.js")).unwrap();
///
/// assert_eq!(scripts.locators(), vec!["a.js", "c.js", "b.js"]);
/// ```
#[derive(Debug, Clone)]
pub struct AssetList {
	kind: AssetKind,
	entries: IndexSet<String>,
	match_before: bool,
}

impl AssetList {
	pub fn new(kind: AssetKind) -> Self {
		Self {
			kind,
			entries: IndexSet::new(),
			match_before: true,
		}
	}

	/// Enables or disables `before` lookups.
	///
	/// With matching disabled every `before` target is treated as absent,
	/// which reproduces the historical resource-link behaviour where the
	/// lookup never found a stored entry.
	pub fn with_before_matching(mut self, enabled: bool) -> Self {
		self.match_before = enabled;
		self
	}

	pub fn kind(&self) -> AssetKind {
		self.kind
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains(&self, locator: &str) -> bool {
		self.entries.contains(locator)
	}

	/// Current index of `locator`, if included.
	pub fn position_of(&self, locator: &str) -> Option<usize> {
		self.entries.get_index_of(locator)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(String::as_str)
	}

	pub fn locators(&self) -> Vec<&str> {
		self.iter().collect()
	}

	/// References in list order.
	pub fn references(&self) -> Vec<AssetReference> {
		self.iter()
			.map(|locator| AssetReference::new(self.kind, locator))
			.collect()
	}

	/// Inserts `locator` according to `position`.
	///
	/// Returns `Ok(true)` when the locator was added and `Ok(false)` when it
	/// was already present. An existing entry is never moved.
	///
	/// # Errors
	///
	/// Returns [`AssetError::AfterTargetNotFound`] when `position.after`
	/// names a locator that is not in the list. The list is unchanged.
	pub fn insert(&mut self, locator: impl Into<String>, position: &Position) -> AssetResult<bool> {
		let locator = locator.into();
		if self.entries.contains(&locator) {
			tracing::trace!(kind = %self.kind, %locator, "asset already included");
			return Ok(false);
		}

		let mut target = None;

		if let Some(before) = position.before.as_deref() {
			target = self.lookup_before(before);
			if target.is_none() {
				tracing::debug!(
					kind = %self.kind,
					%locator,
					before,
					"`before` target not included, ignoring"
				);
			}
		}

		if let Some(after) = position.after.as_deref() {
			match self.entries.get_index_of(after) {
				Some(idx) => target = Some(idx + 1),
				None => {
					return Err(AssetError::AfterTargetNotFound {
						kind: self.kind,
						locator,
						after: after.to_string(),
					});
				}
			}
		}

		if target.is_none() {
			target = position.index;
		}

		let index = target.map_or(self.entries.len(), |idx| idx.min(self.entries.len()));
		tracing::debug!(kind = %self.kind, %locator, index, "including asset");
		self.entries.shift_insert(index, locator);
		Ok(true)
	}

	/// Renders every entry with the kind's fixed fragment, concatenated.
	pub fn render(&self) -> String {
		self.iter().map(|locator| self.kind.fragment(locator)).collect()
	}

	fn lookup_before(&self, before: &str) -> Option<usize> {
		if self.match_before {
			self.entries.get_index_of(before)
		} else {
			None
		}
	}
}
