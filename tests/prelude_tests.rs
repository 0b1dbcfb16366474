//! Facade integration tests
//!
//! Exercises the crate through `widgetry::prelude` the way an application
//! would: a page, a template and widgets declared in arbitrary order.

use rstest::*;
use widgetry::prelude::*;

#[fixture]
fn page() -> Page {
	let mut page = Page::new("Shop");
	page.add_js_file("/js/jquery.js", &Position::append())
		.unwrap();
	page.add_css_file("/css/site.css", &Position::append())
		.unwrap();
	page
}

#[rstest]
fn test_widgets_and_template_compose_one_document(mut page: Page) {
	// Arrange
	let mut cart = Widget::new().named("cart");
	cart.require_js_file("/js/cart.js", Position::after("/js/jquery.js"));
	cart.require_css_file("/css/reset.css", Position::before("/css/site.css"));
	cart.declare_inline_script("cart.init();");
	cart.append_content("<ul></ul>");
	let mut search = Widget::new();
	search.require_js_file("/js/jquery.js", Position::index(0));
	search.require_js_file("/js/search.js", Position::append());

	// Act
	let html = {
		let mut template = PageTemplate::new(&mut page);
		template.add_widget(&mut cart).unwrap();
		template.add_widget(&mut search).unwrap();
		template.render().unwrap()
	};

	// Assert
	assert_eq!(
		page.scripts().locators(),
		vec!["/js/jquery.js", "/js/cart.js", "/js/search.js"]
	);
	assert_eq!(
		page.stylesheets().locators(),
		vec!["/css/reset.css", "/css/site.css"]
	);
	assert_eq!(html.matches("/js/jquery.js").count(), 1);
	assert!(html.contains("<div class=\"widget\"><ul></ul></div><div class=\"widget\"></div>"));
	assert!(html.ends_with("</body>\n</html>"));
}

#[rstest]
fn test_after_failure_converts_to_page_error(mut page: Page) {
	let result: Result<(), PageError> = page
		.add_js_file("/js/plugin.js", &Position::after("/js/missing.js"))
		.map_err(PageError::from);

	assert!(matches!(
		result,
		Err(PageError::Asset(AssetError::AfterTargetNotFound { .. }))
	));
}

#[rstest]
fn test_settings_reexported_at_root() {
	let settings = widgetry::PageSettings::from_toml_str("widget_class = \"card\"").unwrap();
	let page = Page::with_settings("t", settings);

	assert_eq!(page.create_widget().render(), "<div class=\"card\"></div>");
}
