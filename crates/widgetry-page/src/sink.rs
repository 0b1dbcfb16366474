//! The capability shared by everything that accepts asset declarations.

use widgetry_assets::{AssetKind, AssetResult, Position};

/// A receiver of asset and inline-snippet declarations.
///
/// Implementors differ only in policy:
///
/// - [`Page`](crate::Page) writes straight into its asset lists.
/// - [`PageTemplate`](crate::PageTemplate) forwards each call immediately to
///   the page it is bound to.
/// - [`Widget`](crate::Widget) buffers declarations and replays them into a
///   sink when attached.
pub trait AssetSink {
	/// Declares an external asset of `kind`.
	///
	/// # Errors
	///
	/// Fails when `position.after` names a locator that the receiving list
	/// does not contain. Buffering sinks never fail here; the error surfaces
	/// when the buffer is flushed.
	fn declare_asset(
		&mut self,
		kind: AssetKind,
		locator: &str,
		position: &Position,
	) -> AssetResult<()>;

	fn add_inline_script(&mut self, text: &str);

	fn add_inline_style(&mut self, text: &str);

	/// Adds verbatim markup to the document head.
	fn add_head_directive(&mut self, markup: &str);

	fn add_js_file(&mut self, locator: &str, position: &Position) -> AssetResult<()> {
		self.declare_asset(AssetKind::Script, locator, position)
	}

	fn add_css_file(&mut self, locator: &str, position: &Position) -> AssetResult<()> {
		self.declare_asset(AssetKind::Stylesheet, locator, position)
	}

	fn add_resource_file(&mut self, locator: &str, position: &Position) -> AssetResult<()> {
		self.declare_asset(AssetKind::Resource, locator, position)
	}
}
