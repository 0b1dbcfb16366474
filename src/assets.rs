//! Asset ordering
//!
//! Ordered, duplicate-free lists of script, stylesheet and resource
//! locators with positional placement (`index`, `before`, `after`).
//!
//! ## Example
//!
//! ```rust
//! use widgetry::assets::{AssetKind, AssetList, Position};
//!
//! let mut scripts = AssetList::new(AssetKind::Script);
//! scripts.insert("/js/app.js", &Position::append()).unwrap();
//! scripts.insert("/js/jquery.js", &Position::before("/js/app.js")).unwrap();
//!
//! assert_eq!(scripts.locators(), vec!["/js/jquery.js", "/js/app.js"]);
//! ```

// Re-export all widgetry-assets functionality
pub use widgetry_assets::*;
