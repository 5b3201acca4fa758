//! The editor's whole-page state

use crate::chrome::{FooterConfig, LinkOverrides, NavConfig};
use crate::error::ModelResult;
use crate::layout::PageLayout;
use serde::{Deserialize, Serialize};

/// Everything the editor holds for one page before it is rendered.
///
/// A draft is the source of truth for editing. Its rendered HTML is derived
/// from it on save and never parsed back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageDraft {
	/// Page title, used for the document `<title>`
	pub title: String,
	/// Route the page is served at
	pub path: String,
	/// Navigation bar
	pub nav: NavConfig,
	/// Sections in page order
	pub layout: PageLayout,
	/// Footer
	pub footer: FooterConfig,
	/// Comma-separated footer link text per column
	pub footer_link_overrides: LinkOverrides,
	/// Whether the page is publicly visible
	pub published: bool,
}

impl PageDraft {
	/// Create an empty draft served at `path`
	pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			path: path.into(),
			..Default::default()
		}
	}

	/// Decode a draft file
	pub fn from_json(json: &str) -> ModelResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Encode as pretty JSON
	pub fn to_json_pretty(&self) -> ModelResult<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Route, with `/` substituted for a blank path
	pub fn route(&self) -> &str {
		let path = self.path.trim();
		if path.is_empty() { "/" } else { path }
	}

	/// Builder-style layout setter
	pub fn with_layout(mut self, layout: PageLayout) -> Self {
		self.layout = layout;
		self
	}

	/// Builder-style publish flag setter
	pub fn published(mut self, published: bool) -> Self {
		self.published = published;
		self
	}
}
