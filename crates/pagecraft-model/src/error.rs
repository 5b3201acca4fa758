//! Error types for the content model

use thiserror::Error;

/// Errors raised while editing or decoding a page's content model.
///
/// Rendering never produces these: a section whose props are incomplete or
/// malformed still renders. Errors only surface at the editor and storage
/// boundary, where the caller asked for something that cannot be done.
#[derive(Error, Debug)]
pub enum ModelError {
	/// The layout or draft JSON could not be decoded
	#[error("Invalid content model JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// No section with the given id exists in the layout
	#[error("Section not found: {0}")]
	SectionNotFound(String),

	/// A positional editor operation referenced a slot past the end
	#[error("Section index {index} out of range for layout of {len} sections")]
	IndexOutOfRange {
		/// Requested index
		index: usize,
		/// Number of sections in the layout
		len: usize,
	},

	/// A section id was used twice in one layout
	#[error("Duplicate section id: {0}")]
	DuplicateSectionId(String),
}

/// Result type for content model operations
pub type ModelResult<T> = Result<T, ModelError>;
