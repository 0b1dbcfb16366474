//! Render collaborators
//!
//! A [`Page`](crate::Page) may be bound to a [`RenderEngine`] and a
//! [`RequestContext`]. When bound, the fully assembled document is handed to
//! the engine as template source and the engine's output is returned
//! verbatim. The page treats the engine as an opaque string-to-string
//! transform.
//!
//! ## Example
//!
//! ```
//! use widgetry_page::{EngineResult, Page, RenderEngine, RequestContext};
//! use std::sync::Arc;
//!
//! struct Shout;
//!
//! impl RenderEngine for Shout {
//!     fn render(&self, markup: &str, _context: &RequestContext) -> EngineResult<String> {
//!         Ok(markup.to_uppercase())
//!     }
//! }
//!
//! let mut page = Page::new("hi");
//! page.bind_engine(Arc::new(Shout), RequestContext::new());
//! assert!(page.render().unwrap().contains("<TITLE>HI</TITLE>"));
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised by a render collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
	/// A context value could not be converted.
	#[error("failed to build render context: {0}")]
	Context(String),

	/// The engine rejected or failed to render the markup.
	#[error("template rendering failed: {0}")]
	Render(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// External templating pass applied to an assembled document.
pub trait RenderEngine: Send + Sync {
	fn render(&self, markup: &str, context: &RequestContext) -> EngineResult<String>;
}

impl<F> RenderEngine for F
where
	F: Fn(&str, &RequestContext) -> EngineResult<String> + Send + Sync,
{
	fn render(&self, markup: &str, context: &RequestContext) -> EngineResult<String> {
		self(markup, context)
	}
}

/// Request-scoped variables made available to the render engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
	values: Map<String, Value>,
}

impl RequestContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Context pre-populated with `REQUEST_PATH` and `REQUEST_METHOD`.
	///
	/// # Examples
	///
	/// ```
	/// use widgetry_page::RequestContext;
	///
	/// let context = RequestContext::for_request("/users/1", "GET");
	/// assert_eq!(context.get("REQUEST_PATH").unwrap(), "/users/1");
	/// assert_eq!(context.get("REQUEST_METHOD").unwrap(), "GET");
	/// ```
	pub fn for_request(path: &str, method: &str) -> Self {
		let mut context = Self::new();
		context.insert_value("REQUEST_PATH", Value::String(path.to_string()));
		context.insert_value("REQUEST_METHOD", Value::String(method.to_string()));
		context
	}

	/// Inserts any serializable value under `key`.
	///
	/// # Errors
	///
	/// Returns [`EngineError::Context`] if `value` cannot be serialized.
	pub fn insert<T: Serialize + ?Sized>(
		&mut self,
		key: impl Into<String>,
		value: &T,
	) -> EngineResult<()> {
		let value =
			serde_json::to_value(value).map_err(|e| EngineError::Context(e.to_string()))?;
		self.insert_value(key, value);
		Ok(())
	}

	pub fn insert_value(&mut self, key: impl Into<String>, value: Value) {
		self.values.insert(key.into(), value);
	}

	/// Merges string variables, e.g. the output of a context processor.
	pub fn extend<I, K, V>(&mut self, vars: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		for (key, value) in vars {
			self.insert_value(key, Value::String(value.into()));
		}
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	pub fn values(&self) -> &Map<String, Value> {
		&self.values
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

#[cfg(feature = "templates")]
pub use tera_engine::TeraEngine;

#[cfg(feature = "templates")]
mod tera_engine {
	use super::{EngineError, EngineResult, RenderEngine, RequestContext};
	use tera::{Context, Tera};

	/// Renders the assembled document as a one-off Tera template.
	///
	/// Tera uses Django/Jinja2 syntax, so `{{ REQUEST_PATH }}` or
	/// `{% if user %}` inside widget content is resolved against the
	/// request context.
	#[derive(Debug, Clone, Default)]
	pub struct TeraEngine {
		autoescape: bool,
	}

	impl TeraEngine {
		pub fn new() -> Self {
			Self::default()
		}

		/// Escapes substituted values. Off by default; the document is
		/// already markup.
		pub fn autoescape(mut self, enabled: bool) -> Self {
			self.autoescape = enabled;
			self
		}
	}

	impl RenderEngine for TeraEngine {
		fn render(&self, markup: &str, context: &RequestContext) -> EngineResult<String> {
			let ctx = Context::from_serialize(context.values())
				.map_err(|e| EngineError::Context(e.to_string()))?;

			Tera::one_off(markup, &ctx, self.autoescape)
				.map_err(|e| EngineError::Render(e.to_string()))
		}
	}
}
