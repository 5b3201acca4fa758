//! Error types for page storage

use thiserror::Error;

/// Errors raised by a [`PageStore`](crate::PageStore)
#[derive(Error, Debug)]
pub enum StoreError {
	/// No page with the given id or path
	#[error("Page not found: {0}")]
	NotFound(String),

	/// Another page is already served at this path
	#[error("A page already exists at path: {0}")]
	DuplicatePath(String),

	/// A record could not be encoded or decoded
	#[error("Page record serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
