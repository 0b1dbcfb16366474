//! PageTemplate integration tests
//!
//! - Declarations are forwarded to the bound page immediately
//! - add_widget propagates to the page and captures markup in the template
//! - render appends content to the page on every call

use rstest::*;
use widgetry_assets::Position;
use widgetry_page::{AssetSink, Page, PageTemplate, Widget};

#[rstest]
fn test_declarations_reach_page_immediately() {
	let mut page = Page::new("t");
	{
		let mut template = PageTemplate::new(&mut page);
		template.add_js_file("t.js", &Position::append()).unwrap();
		template.add_css_file("t.css", &Position::append()).unwrap();
		template.add_resource_file("t.html", &Position::append()).unwrap();
		template.add_inline_script("t();");
		template.add_inline_style("t{}");
		template.add_head_directive("<meta name=\"t\" />");

		assert!(template.page().scripts().contains("t.js"));
	}

	assert!(page.stylesheets().contains("t.css"));
	assert!(page.resources().contains("t.html"));
	assert_eq!(page.inline_scripts(), &["t();"]);
	assert_eq!(page.inline_styles(), &["t{}"]);
	assert_eq!(page.head_directives(), &["<meta name=\"t\" />"]);
}

#[rstest]
fn test_template_after_failure_propagates() {
	let mut page = Page::new("t");
	let mut template = PageTemplate::new(&mut page);

	let result = template.add_js_file("plugin.js", &Position::after("jquery.js"));

	assert!(result.is_err());
	assert!(template.page().scripts().is_empty());
}

#[rstest]
fn test_content_stays_local_until_render() {
	let mut page = Page::new("t");
	let mut template = PageTemplate::new(&mut page);

	template.append_content("<main>x</main>");

	assert_eq!(template.content(), "<main>x</main>");
	assert_eq!(template.page().content(), "");
}

#[rstest]
fn test_render_appends_content_each_time() {
	let mut page = Page::new("t");
	let mut template = PageTemplate::new(&mut page);
	template.append_content("<main>x</main>");

	let first = template.render().unwrap();
	let second = template.render().unwrap();

	assert_eq!(first.matches("<main>x</main>").count(), 1);
	assert_eq!(second.matches("<main>x</main>").count(), 2);
	assert_eq!(page.content(), "<main>x</main><main>x</main>");
}

#[rstest]
fn test_add_widget_attaches_to_page_and_keeps_markup() {
	let mut page = Page::new("t");
	let mut widget = Widget::new();
	widget.require_js_file("w.js", Position::append());
	widget.append_content("w");

	let mut template = PageTemplate::new(&mut page);
	template.append_content("<header />");
	template.add_widget(&mut widget).unwrap();

	assert!(template.page().scripts().contains("w.js"));
	assert_eq!(template.content(), "<header /><div class=\"widget\">w</div>");
	assert_eq!(template.page().content(), "");
	assert_eq!(widget.attach_count(), 1);
}

#[rstest]
fn test_template_and_page_content_order() {
	let mut page = Page::new("t");
	page.append_content("<nav />");
	let mut template = PageTemplate::new(&mut page);
	template.append_content("<main />");

	let html = template.render().unwrap();

	assert!(html.contains("<nav /><main />"));
}

#[rstest]
fn test_template_generic_over_sink() {
	fn declare_common<S: AssetSink + ?Sized>(sink: &mut S) {
		sink.add_js_file("common.js", &Position::index(0)).unwrap();
	}

	let mut page = Page::new("t");
	page.add_js_file("page.js", &Position::append()).unwrap();
	let mut template = PageTemplate::new(&mut page);

	declare_common(&mut template);

	assert_eq!(template.page().scripts().locators(), vec!["common.js", "page.js"]);
}
