//! # Widgetry
//!
//! Server-side page assembly from self-describing widgets.
//!
//! A page is built by declaring external assets (scripts, stylesheets,
//! resources), inline script and style, head markup and body content. Widgets
//! carry their own requirements and hand them to the page when attached, so a
//! page never has to know what its widgets need up front.
//!
//! ## Crates
//!
//! - [`assets`] - ordering engine for asset locators (`widgetry-assets`)
//! - [`page`] - pages, templates and widgets (`widgetry-page`)
//!
//! ## Feature Flags
//!
//! - `templates` (default) - Tera-backed render pass over the assembled document
//! - `full` (default) - all features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use widgetry::prelude::*;
//!
//! let mut page = Page::new("Home");
//! page.add_js_file("/js/jquery.js", &Position::append())?;
//!
//! let mut menu = Widget::new();
//! menu.require_js_file("/js/menu.js", Position::after("/js/jquery.js"));
//! menu.require_inline_js("menu.init();");
//!
//! let mut template = PageTemplate::new(&mut page);
//! template.add_widget(&mut menu)?;
//! let html = template.render()?;
//!
//! assert!(html.contains("<script type=\"text/javascript\">menu.init();</script>"));
//! # Ok::<(), widgetry::PageError>(())
//! ```

pub mod assets;
pub mod page;

pub use widgetry_assets::{AssetError, AssetResult};
pub use widgetry_page::{PageError, PageResult, PageSettings, SettingsError};

/// Commonly used types
pub mod prelude {
	pub use crate::{AssetError, PageError, PageSettings};

	pub use widgetry_assets::{AssetKind, AssetList, AssetReference, Position};
	pub use widgetry_page::{AssetSink, Page, PageTemplate, RenderEngine, RequestContext, Widget};

	#[cfg(feature = "templates")]
	pub use widgetry_page::TeraEngine;
}
