//! Render engine integration tests
//!
//! - Unbound pages return the assembled document unchanged
//! - Bound engines receive the full document and the request context
//! - `render_as_template = false` bypasses a bound engine
//! - Tera resolves request variables inside widget content

use std::sync::{Arc, Mutex};

use rstest::*;
use widgetry_page::{
	EngineError, EngineResult, Page, PageError, PageSettings, PageTemplate, RenderEngine,
	RequestContext,
};

/// Engine that records what it was given and returns a fixed string.
#[derive(Default)]
struct RecordingEngine {
	seen: Mutex<Vec<(String, Option<String>)>>,
}

impl RenderEngine for RecordingEngine {
	fn render(&self, markup: &str, context: &RequestContext) -> EngineResult<String> {
		let path = context
			.get("REQUEST_PATH")
			.and_then(|v| v.as_str())
			.map(str::to_string);
		self.seen.lock().unwrap().push((markup.to_string(), path));
		Ok("rendered".to_string())
	}
}

#[rstest]
fn test_engine_receives_assembled_document() {
	let engine = Arc::new(RecordingEngine::default());
	let mut page = Page::new("t");
	page.append_content("body");
	page.bind_engine(engine.clone(), RequestContext::for_request("/x", "GET"));

	let out = page.render().unwrap();

	assert_eq!(out, "rendered");
	let seen = engine.seen.lock().unwrap();
	assert_eq!(seen.len(), 1);
	assert_eq!(seen[0].0, page.assemble());
	assert_eq!(seen[0].1.as_deref(), Some("/x"));
}

#[rstest]
fn test_render_as_template_off_bypasses_engine() {
	let engine = Arc::new(RecordingEngine::default());
	let settings = PageSettings::new().render_as_template(false);
	let mut page = Page::with_settings("t", settings);
	page.bind_engine(engine.clone(), RequestContext::new());

	let out = page.render().unwrap();

	assert_eq!(out, page.assemble());
	assert!(engine.seen.lock().unwrap().is_empty());
}

#[rstest]
fn test_unbind_restores_passthrough() {
	let mut page = Page::new("t");
	page.bind_engine(Arc::new(RecordingEngine::default()), RequestContext::new());

	page.unbind_engine();

	assert_eq!(page.render().unwrap(), page.assemble());
}

#[rstest]
fn test_engine_error_is_page_error() {
	let failing = |_: &str, _: &RequestContext| -> EngineResult<String> {
		Err(EngineError::Render("boom".to_string()))
	};
	let mut page = Page::new("t");
	page.bind_engine(Arc::new(failing), RequestContext::new());

	let err = page.render().unwrap_err();

	assert!(matches!(err, PageError::Engine(EngineError::Render(ref m)) if m == "boom"));
	assert_eq!(err.to_string(), "template rendering failed: boom");
}

#[rstest]
fn test_template_render_goes_through_engine() {
	let engine = Arc::new(RecordingEngine::default());
	let mut page = Page::new("t");
	page.bind_engine(engine.clone(), RequestContext::new());
	let mut template = PageTemplate::new(&mut page);
	template.append_content("<main />");

	assert_eq!(template.render().unwrap(), "rendered");
	assert!(engine.seen.lock().unwrap()[0].0.contains("<main />"));
}

#[cfg(feature = "templates")]
mod tera_rendering {
	use super::*;
	use widgetry_assets::Position;
	use widgetry_page::{AssetSink, TeraEngine};

	#[rstest]
	fn test_tera_resolves_request_variables_in_content() {
		let mut context = RequestContext::for_request("/profile", "GET");
		context.insert("user", "alice").unwrap();
		let mut page = Page::new("Profile");
		page.bind_engine(Arc::new(TeraEngine::new()), context);
		let mut widget = page.create_widget();
		widget.append_content("{% if user %}Hi {{ user }}{% endif %} @ {{ REQUEST_PATH }}");
		widget.require_js_file("/js/profile.js", Position::append());
		page.mount_widget(&mut widget).unwrap();

		let html = page.render().unwrap();

		assert!(html.contains("<div class=\"widget\">Hi alice @ /profile</div>"));
		assert!(html.contains(r#"<script type="text/javascript" src="/js/profile.js"></script>"#));
	}

	#[rstest]
	fn test_tera_leaves_plain_markup_intact() {
		let mut page = Page::new("t");
		page.add_css_file("a.css", &Position::append()).unwrap();
		page.add_inline_style("p { color: red; }");
		let expected = page.assemble();
		page.bind_engine(Arc::new(TeraEngine::new()), RequestContext::new());

		assert_eq!(page.render().unwrap(), expected);
	}

	#[rstest]
	fn test_tera_undefined_variable_is_engine_error() {
		let mut page = Page::new("t");
		page.append_content("{{ missing }}");
		page.bind_engine(Arc::new(TeraEngine::new()), RequestContext::new());

		let err = page.render().unwrap_err();

		assert!(matches!(err, PageError::Engine(EngineError::Render(_))));
	}
}
