//! Widgets: self-contained fragments that carry their own requirements.
//!
//! A widget buffers everything it needs (external assets, inline script and
//! style, head markup) without knowing which page it will end up on. The
//! buffer is replayed into a sink by [`Widget::attach_to`], which is the only
//! point where a widget touches a page.
//!
//! Attaching does not drain the buffer. Attaching the same widget again
//! replays every declaration: assets are absorbed by deduplication, but
//! inline text is appended a second time. This mirrors how pages have always
//! composed widgets and is left as is; a warning is logged when it happens.

use crate::AssetSink;
use widgetry_assets::{AssetKind, AssetResult, Position};

/// An asset declaration waiting to be replayed into a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAsset {
	pub kind: AssetKind,
	pub locator: String,
	pub position: Position,
}

/// A renderable fragment that propagates its requirements on attach.
///
/// # Examples
///
/// ```
/// use widgetry_page::{Page, Widget};
/// use widgetry_assets::Position;
///
/// let mut calendar = Widget::new();
/// calendar.require_js_file("/js/calendar.js", Position::append());
/// calendar.require_css_file("/css/calendar.css", Position::append());
/// calendar.append_content("<table></table>");
///
/// let mut page = Page::new("Events");
/// page.mount_widget(&mut calendar).unwrap();
///
/// assert!(page.scripts().contains("/js/calendar.js"));
/// assert!(page.content().contains("<table></table>"));
/// ```
#[derive(Debug, Clone)]
pub struct Widget {
	name: Option<String>,
	class: String,
	content: String,
	pending: Vec<PendingAsset>,
	inline_script: String,
	inline_style: String,
	head_directives: Vec<String>,
	attach_count: usize,
}

impl Default for Widget {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget {
	pub fn new() -> Self {
		Self::with_class("widget")
	}

	/// Widget whose wrapper `<div>` uses `class`.
	pub fn with_class(class: impl Into<String>) -> Self {
		Self {
			name: None,
			class: class.into(),
			content: String::new(),
			pending: Vec::new(),
			inline_script: String::new(),
			inline_style: String::new(),
			head_directives: Vec::new(),
			attach_count: 0,
		}
	}

	/// Sets an identifier used in log output.
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	/// Buffered asset declarations, in declaration order.
	pub fn pending(&self) -> &[PendingAsset] {
		&self.pending
	}

	/// Number of times this widget has been attached.
	pub fn attach_count(&self) -> usize {
		self.attach_count
	}

	/// Buffers an asset requirement for the next attach.
	pub fn require(&mut self, kind: AssetKind, locator: impl Into<String>, position: Position) {
		self.pending.push(PendingAsset {
			kind,
			locator: locator.into(),
			position,
		});
	}

	pub fn require_js_file(&mut self, locator: impl Into<String>, position: Position) {
		self.require(AssetKind::Script, locator, position);
	}

	pub fn require_css_file(&mut self, locator: impl Into<String>, position: Position) {
		self.require(AssetKind::Stylesheet, locator, position);
	}

	pub fn require_resource_file(&mut self, locator: impl Into<String>, position: Position) {
		self.require(AssetKind::Resource, locator, position);
	}

	/// Buffers inline JavaScript.
	///
	/// All inline script declared on one widget is concatenated and flushed
	/// as a single `<script>` block.
	pub fn require_inline_js(&mut self, js: &str) {
		self.inline_script.push_str(js);
	}

	pub fn declare_inline_script(&mut self, js: &str) {
		self.require_inline_js(js);
	}

	pub fn append_content(&mut self, html: &str) {
		self.content.push_str(html);
	}

	/// Replays buffered declarations into `sink`.
	///
	/// Assets are declared in the order they were required, each with its
	/// original position. Then the concatenated inline script, the
	/// concatenated inline style and the head directives are flushed. Empty
	/// inline buffers are skipped.
	///
	/// Declarations made after this call are not propagated until the
	/// widget is attached again.
	///
	/// # Errors
	///
	/// Stops at the first asset whose `after` target is missing from the
	/// sink. Declarations replayed before the failure remain in the sink.
	pub fn attach_to<S: AssetSink + ?Sized>(&mut self, sink: &mut S) -> AssetResult<()> {
		if self.attach_count > 0 && self.has_inline_text() {
			tracing::warn!(
				widget = self.name.as_deref().unwrap_or("<unnamed>"),
				attach_count = self.attach_count,
				"re-attaching widget appends its inline script and style again"
			);
		}
		self.attach_count += 1;

		tracing::debug!(
			widget = self.name.as_deref().unwrap_or("<unnamed>"),
			assets = self.pending.len(),
			"attaching widget"
		);

		for pending in &self.pending {
			sink.declare_asset(pending.kind, &pending.locator, &pending.position)?;
		}
		if !self.inline_script.is_empty() {
			sink.add_inline_script(&self.inline_script);
		}
		if !self.inline_style.is_empty() {
			sink.add_inline_style(&self.inline_style);
		}
		for directive in &self.head_directives {
			sink.add_head_directive(directive);
		}
		Ok(())
	}

	/// Wraps the widget's own content. Does not consult any page.
	pub fn render(&self) -> String {
		format!("<div class=\"{}\">{}</div>", self.class, self.content)
	}

	fn has_inline_text(&self) -> bool {
		!self.inline_script.is_empty()
			|| !self.inline_style.is_empty()
			|| !self.head_directives.is_empty()
	}
}

impl AssetSink for Widget {
	fn declare_asset(
		&mut self,
		kind: AssetKind,
		locator: &str,
		position: &Position,
	) -> AssetResult<()> {
		self.require(kind, locator, position.clone());
		Ok(())
	}

	fn add_inline_script(&mut self, text: &str) {
		self.require_inline_js(text);
	}

	fn add_inline_style(&mut self, text: &str) {
		self.inline_style.push_str(text);
	}

	fn add_head_directive(&mut self, markup: &str) {
		self.head_directives.push(markup.to_string());
	}
}
