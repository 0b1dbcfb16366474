//! The page: composition root and document assembler.

use crate::engine::{RenderEngine, RequestContext};
use crate::{AssetSink, PageResult, PageSettings, Widget};
use std::fmt;
use std::sync::Arc;
use widgetry_assets::{AssetKind, AssetList, AssetResult, Position, inline_script, inline_style};

struct EngineBinding {
	engine: Arc<dyn RenderEngine>,
	context: RequestContext,
}

/// An HTML document under construction.
///
/// A page owns one [`AssetList`] per asset kind, the inline script and style
/// buffers, head directives, title, doctype and body content. Widgets and
/// templates write into it through [`AssetSink`]; [`Page::render`] assembles
/// the final document.
///
/// A page is meant to live for a single response.
///
/// # Examples
///
/// ```
/// use widgetry_page::{AssetSink, Page};
/// use widgetry_assets::Position;
///
/// let mut page = Page::new("Home");
/// page.add_js_file("/js/app.js", &Position::append()).unwrap();
/// page.add_inline_style("body { margin: 0; }");
/// page.append_content("<h1>Hello</h1>");
///
/// let html = page.render().unwrap();
/// assert!(html.contains(r#"<script type="text/javascript" src="/js/app.js"></script>"#));
/// assert!(html.contains(r#"<style type="text/css">body { margin: 0; }</style>"#));
/// ```
pub struct Page {
	title: String,
	doctype: String,
	settings: PageSettings,
	scripts: AssetList,
	stylesheets: AssetList,
	resources: AssetList,
	inline_scripts: Vec<String>,
	inline_styles: Vec<String>,
	head_directives: Vec<String>,
	content: String,
	analytics: Option<String>,
	engine: Option<EngineBinding>,
}

impl Page {
	pub fn new(title: impl Into<String>) -> Self {
		Self::with_settings(title, PageSettings::default())
	}

	pub fn with_settings(title: impl Into<String>, settings: PageSettings) -> Self {
		let resources = AssetList::new(AssetKind::Resource)
			.with_before_matching(!settings.legacy_resource_before);
		Self {
			title: title.into(),
			doctype: settings.doctype.clone(),
			scripts: AssetList::new(AssetKind::Script),
			stylesheets: AssetList::new(AssetKind::Stylesheet),
			resources,
			inline_scripts: Vec::new(),
			inline_styles: Vec::new(),
			head_directives: Vec::new(),
			content: String::new(),
			analytics: None,
			engine: None,
			settings,
		}
	}

	/// Binds a render engine and the request context it renders against.
	pub fn bind_engine(&mut self, engine: Arc<dyn RenderEngine>, context: RequestContext) {
		self.engine = Some(EngineBinding { engine, context });
	}

	pub fn unbind_engine(&mut self) {
		self.engine = None;
	}

	pub fn settings(&self) -> &PageSettings {
		&self.settings
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	pub fn doctype(&self) -> &str {
		&self.doctype
	}

	pub fn set_doctype(&mut self, doctype: impl Into<String>) {
		self.doctype = doctype.into();
	}

	/// Markup emitted after the body, typically an analytics snippet.
	pub fn set_analytics(&mut self, markup: impl Into<String>) {
		self.analytics = Some(markup.into());
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn append_content(&mut self, html: &str) {
		self.content.push_str(html);
	}

	pub fn assets(&self, kind: AssetKind) -> &AssetList {
		match kind {
			AssetKind::Script => &self.scripts,
			AssetKind::Stylesheet => &self.stylesheets,
			AssetKind::Resource => &self.resources,
		}
	}

	fn assets_mut(&mut self, kind: AssetKind) -> &mut AssetList {
		match kind {
			AssetKind::Script => &mut self.scripts,
			AssetKind::Stylesheet => &mut self.stylesheets,
			AssetKind::Resource => &mut self.resources,
		}
	}

	pub fn scripts(&self) -> &AssetList {
		&self.scripts
	}

	pub fn stylesheets(&self) -> &AssetList {
		&self.stylesheets
	}

	pub fn resources(&self) -> &AssetList {
		&self.resources
	}

	pub fn inline_scripts(&self) -> &[String] {
		&self.inline_scripts
	}

	pub fn inline_styles(&self) -> &[String] {
		&self.inline_styles
	}

	pub fn head_directives(&self) -> &[String] {
		&self.head_directives
	}

	/// A fresh widget using this page's configured widget class.
	pub fn create_widget(&self) -> Widget {
		Widget::with_class(self.settings.widget_class.clone())
	}

	/// Attaches `widget`, then appends its rendered markup to the content.
	///
	/// Attachment happens first so the widget's requirements are in the
	/// asset lists before its content is captured.
	///
	/// # Errors
	///
	/// Propagates the first `after` placement failure from the widget. The
	/// widget's content is not appended in that case.
	pub fn mount_widget(&mut self, widget: &mut Widget) -> AssetResult<()> {
		widget.attach_to(self)?;
		self.append_content(&widget.render());
		Ok(())
	}

	/// The `<head>` section.
	pub fn render_head(&self) -> String {
		let mut lines = vec!["<head>".to_string(), format!("<title>{}</title>", self.title)];
		lines.extend(self.head_directives.iter().cloned());
		for kind in AssetKind::HEAD_ORDER {
			let list = self.assets(kind);
			lines.extend(list.iter().map(|locator| kind.fragment(locator)));
		}
		lines.extend(self.inline_scripts.iter().map(|text| inline_script(text)));
		lines.extend(self.inline_styles.iter().map(|text| inline_style(text)));
		lines.push("</head>".to_string());
		lines.join("\n")
	}

	/// The `<body>` section.
	pub fn render_body(&self) -> String {
		let mut lines = vec![
			"<body>".to_string(),
			format!("<div class=\"{}\">", self.settings.wrapper_class),
		];
		if !self.content.is_empty() {
			lines.push(self.content.clone());
		}
		lines.push("</div>".to_string());
		lines.push("</body>".to_string());
		lines.join("\n")
	}

	/// Builds the complete document without any render engine pass.
	pub fn assemble(&self) -> String {
		let mut lines = Vec::with_capacity(6);
		if !self.doctype.is_empty() {
			lines.push(self.doctype.clone());
		}
		if self.settings.html_namespace.is_empty() {
			lines.push("<html>".to_string());
		} else {
			lines.push(format!("<html xmlns=\"{}\">", self.settings.html_namespace));
		}
		lines.push(self.render_head());
		lines.push(self.render_body());
		if let Some(analytics) = self.analytics.as_deref().filter(|a| !a.is_empty()) {
			lines.push(analytics.to_string());
		}
		lines.push("</html>".to_string());
		lines.join("\n")
	}

	/// Assembles the document and, when an engine is bound and
	/// `render_as_template` is enabled, passes it through the engine.
	///
	/// # Errors
	///
	/// Returns [`PageError::Engine`](crate::PageError::Engine) when the bound
	/// engine fails.
	pub fn render(&self) -> PageResult<String> {
		let html = self.assemble();
		match &self.engine {
			Some(binding) if self.settings.render_as_template => {
				tracing::debug!(title = %self.title, "rendering page through engine");
				Ok(binding.engine.render(&html, &binding.context)?)
			}
			_ => Ok(html),
		}
	}
}

impl AssetSink for Page {
	fn declare_asset(
		&mut self,
		kind: AssetKind,
		locator: &str,
		position: &Position,
	) -> AssetResult<()> {
		self.assets_mut(kind).insert(locator, position)?;
		Ok(())
	}

	fn add_inline_script(&mut self, text: &str) {
		self.inline_scripts.push(text.to_string());
	}

	fn add_inline_style(&mut self, text: &str) {
		self.inline_styles.push(text.to_string());
	}

	fn add_head_directive(&mut self, markup: &str) {
		self.head_directives.push(markup.to_string());
	}
}

impl fmt::Debug for Page {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Page")
			.field("title", &self.title)
			.field("doctype", &self.doctype)
			.field("scripts", &self.scripts)
			.field("stylesheets", &self.stylesheets)
			.field("resources", &self.resources)
			.field("inline_scripts", &self.inline_scripts)
			.field("inline_styles", &self.inline_styles)
			.field("head_directives", &self.head_directives)
			.field("content", &self.content)
			.field("analytics", &self.analytics)
			.field("engine", &self.engine.as_ref().map(|_| "<engine>"))
			.finish()
	}
}
