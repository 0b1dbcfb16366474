//! Error types for asset list operations.

use crate::AssetKind;
use thiserror::Error;

/// Errors raised while placing an asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
	/// An `after` directive named a locator that is not in the list.
	///
	/// The list is left unchanged.
	#[error("cannot place {kind} `{locator}` after `{after}`: `{after}` is not included")]
	AfterTargetNotFound {
		kind: AssetKind,
		locator: String,
		after: String,
	},
}

/// Result alias for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
