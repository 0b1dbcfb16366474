//! Page templates: content layers that write straight into a page.
//!
//! A [`PageTemplate`] is the building block for site layouts. It is bound to
//! a [`Page`] when created and has no asset lists of its own; every
//! declaration is forwarded to the page immediately. Its content is kept
//! separately and only lands in the page body when the template renders.

use crate::{AssetSink, Page, PageResult, Widget};
use widgetry_assets::{AssetKind, AssetResult, Position};

/// A content layer bound to a page.
///
/// # Render is not idempotent
///
/// [`PageTemplate::render`] appends the template's content to the page body
/// every time it is called, then renders the page. Rendering twice therefore
/// produces the template content twice. Callers that need the output again
/// should keep the first result.
///
/// # Examples
///
/// ```
/// use widgetry_page::{AssetSink, Page, PageTemplate};
/// use widgetry_assets::Position;
///
/// let mut page = Page::new("Blog");
/// let mut layout = PageTemplate::new(&mut page);
/// layout.add_css_file("/css/blog.css", &Position::append()).unwrap();
/// layout.append_content("<article>Post</article>");
///
/// let html = layout.render().unwrap();
/// assert!(html.contains("<article>Post</article>"));
/// assert!(page.stylesheets().contains("/css/blog.css"));
/// ```
#[derive(Debug)]
pub struct PageTemplate<'p> {
	page: &'p mut Page,
	content: String,
}

impl<'p> PageTemplate<'p> {
	pub fn new(page: &'p mut Page) -> Self {
		Self {
			page,
			content: String::new(),
		}
	}

	pub fn page(&self) -> &Page {
		self.page
	}

	/// Content accumulated since creation. Not cleared by `render`.
	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn append_content(&mut self, html: &str) {
		self.content.push_str(html);
	}

	/// Attaches `widget` to the bound page and appends its markup to this
	/// template's content.
	///
	/// # Errors
	///
	/// Propagates the widget's first `after` placement failure; nothing is
	/// appended in that case.
	pub fn add_widget(&mut self, widget: &mut Widget) -> AssetResult<()> {
		widget.attach_to(&mut *self.page)?;
		self.content.push_str(&widget.render());
		Ok(())
	}

	/// Appends this template's content to the page body and renders the
	/// page.
	pub fn render(&mut self) -> PageResult<String> {
		self.page.append_content(&self.content);
		self.page.render()
	}
}

impl AssetSink for PageTemplate<'_> {
	fn declare_asset(
		&mut self,
		kind: AssetKind,
		locator: &str,
		position: &Position,
	) -> AssetResult<()> {
		self.page.declare_asset(kind, locator, position)
	}

	fn add_inline_script(&mut self, text: &str) {
		self.page.add_inline_script(text);
	}

	fn add_inline_style(&mut self, text: &str) {
		self.page.add_inline_style(text);
	}

	fn add_head_directive(&mut self, markup: &str) {
		self.page.add_head_directive(markup);
	}
}
