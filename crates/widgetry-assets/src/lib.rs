//! # Widgetry Assets
//!
//! The asset-inclusion ordering engine used by Widgetry pages.
//!
//! Each page keeps one [`AssetList`] per [`AssetKind`]. Declarations arrive
//! from components that are unaware of each other, in whatever order they
//! run; the list keeps the first placement of every locator and resolves
//! [`Position`] directives against what has already been included.
//!
//! ## Placement rules
//!
//! - A locator already in the list is never added twice or moved.
//! - `before` is advisory: a missing target is ignored.
//! - `after` is strict: a missing target fails with
//!   [`AssetError::AfterTargetNotFound`].
//! - `index` applies when neither `before` nor `after` resolved a target.
//! - Indices past the end clamp to an append.
//!
//! ## Example
//!
//! ```
//! use widgetry_assets::{AssetKind, AssetList, Position};
//!
//! let mut css = AssetList::new(AssetKind::Stylesheet);
//! css.insert("base.css", &Position::append()).unwrap();
//! css.insert("reset.css", &Position::before("base.css")).unwrap();
//!
//! assert_eq!(css.locators(), vec!["reset.css", "base.css"]);
//! assert!(css.insert("theme.css", &Position::after("missing.css")).is_err());
//! ```

pub mod error;
pub mod kind;
pub mod list;
pub mod position;

pub use error::{AssetError, AssetResult};
pub use kind::{AssetKind, AssetReference, inline_script, inline_style};
pub use list::AssetList;
pub use position::Position;
