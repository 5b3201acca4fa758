//! Stored pages

use crate::error::StoreResult;
use pagecraft_model::PageDraft;
use pagecraft_render::{Assembler, AssemblerSettings};
use serde::{Deserialize, Serialize};

/// A saved page: the editable draft plus its rendered HTML.
///
/// `content` is derived from the draft by [`compose`](PageRecord::compose) and
/// is never parsed back. Editing always starts again from the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
	/// Store-assigned id, `None` until the record is first created
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Bumped by the store each time the stored content changes
	#[serde(default)]
	pub revision: u64,
	/// Editable page state
	#[serde(flatten)]
	pub draft: PageDraft,
	/// Rendered HTML document
	pub content: String,
}

impl PageRecord {
	/// Render `draft` into a new, unsaved record.
	///
	/// Composing an unchanged draft with unchanged settings always yields an
	/// equal record. Root-relative URLs are kept as they are; preview
	/// absolutization is a view concern.
	pub fn compose(draft: &PageDraft, settings: &AssemblerSettings) -> Self {
		let mut draft = draft.clone();
		draft.path = normalize_path(&draft.path);
		let content = Assembler::new(settings.clone())
			.assemble(
				&draft.nav,
				draft.layout.sections(),
				&draft.footer,
				&draft.footer_link_overrides,
				&draft.title,
			)
			.into_string();
		tracing::debug!(path = %draft.path, bytes = content.len(), "page composed");
		Self {
			id: None,
			revision: 0,
			draft,
			content,
		}
	}

	/// Page title
	pub fn title(&self) -> &str {
		&self.draft.title
	}

	/// Route the page is served at
	pub fn path(&self) -> &str {
		&self.draft.path
	}

	/// Whether the page is publicly visible
	pub fn is_published(&self) -> bool {
		self.draft.published
	}

	/// True when `other` stores the same page state and HTML, ignoring the
	/// store-managed id and revision
	pub fn same_content(&self, other: &PageRecord) -> bool {
		self.draft == other.draft && self.content == other.content
	}

	/// Decode a record
	pub fn from_json(json: &str) -> StoreResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Encode a record
	pub fn to_json(&self) -> StoreResult<String> {
		Ok(serde_json::to_string(self)?)
	}
}

/// Canonical form of a route: trimmed, rooted, `/` when blank
pub fn normalize_path(path: &str) -> String {
	let path = path.trim();
	if path.is_empty() {
		"/".to_string()
	} else if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{}", path)
	}
}
