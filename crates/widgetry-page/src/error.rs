//! Errors surfaced by page rendering.

use crate::EngineError;
use thiserror::Error;
use widgetry_assets::AssetError;

#[derive(Debug, Error)]
pub enum PageError {
	#[error(transparent)]
	Asset(#[from] AssetError),

	#[error(transparent)]
	Engine(#[from] EngineError),
}

pub type PageResult<T> = Result<T, PageError>;
