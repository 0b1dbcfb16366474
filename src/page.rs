//! Page composition
//!
//! Pages collect assets declared directly, through templates, or by
//! attached widgets, and assemble them into a single XHTML document.
//!
//! ## Example
//!
//! ```rust
//! use widgetry::page::{AssetSink, Page};
//! use widgetry::assets::Position;
//!
//! let mut page = Page::new("Dashboard");
//! page.add_css_file("/css/site.css", &Position::append()).unwrap();
//!
//! let mut chart = page.create_widget();
//! chart.require_js_file("/js/chart.js", Position::append());
//! chart.append_content("<canvas></canvas>");
//! page.mount_widget(&mut chart).unwrap();
//!
//! let html = page.render().unwrap();
//! assert!(html.contains("<title>Dashboard</title>"));
//! assert!(html.contains("<div class=\"widget\"><canvas></canvas></div>"));
//! ```

// Re-export all widgetry-page functionality
pub use widgetry_page::*;
