//! # Widgetry Page
//!
//! Composes an HTML document from a [`Page`], [`PageTemplate`] layers and
//! [`Widget`]s, each of which may declare the scripts, stylesheets and
//! resources it needs.
//!
//! ## Propagation
//!
//! - A [`Page`] accepts declarations directly.
//! - A [`PageTemplate`] forwards each declaration to its page immediately.
//! - A [`Widget`] buffers declarations and replays them into a page when it
//!   is attached, via [`Widget::attach_to`] or [`Page::mount_widget`].
//!
//! All three implement [`AssetSink`]. Ordering and deduplication are handled
//! by [`widgetry_assets::AssetList`]; the final order reflects when each
//! declaration reached the page, which for a widget is the moment it is
//! attached.
//!
//! ## Example
//!
//! ```
//! use widgetry_page::{AssetSink, Page, PageTemplate};
//! use widgetry_assets::Position;
//!
//! let mut page = Page::new("Dashboard");
//! page.add_js_file("/js/jquery.js", &Position::append()).unwrap();
//!
//! let mut chart = page.create_widget();
//! chart.require_js_file("/js/chart.js", Position::after("/js/jquery.js"));
//! chart.append_content("<canvas></canvas>");
//!
//! let mut layout = PageTemplate::new(&mut page);
//! layout.add_widget(&mut chart).unwrap();
//! let html = layout.render().unwrap();
//!
//! assert!(html.contains("<canvas></canvas>"));
//! assert_eq!(page.scripts().locators(), vec!["/js/jquery.js", "/js/chart.js"]);
//! ```

pub mod engine;
pub mod error;
pub mod page;
pub mod settings;
pub mod sink;
pub mod template;
pub mod widget;

#[cfg(feature = "templates")]
pub use engine::TeraEngine;
pub use engine::{EngineError, EngineResult, RenderEngine, RequestContext};
pub use error::{PageError, PageResult};
pub use page::Page;
pub use settings::{PageSettings, SettingsError, XHTML_NAMESPACE, XHTML_TRANSITIONAL_DOCTYPE};
pub use sink::AssetSink;
pub use template::PageTemplate;
pub use widget::{PendingAsset, Widget};
