//! Document assembly options

use serde::{Deserialize, Serialize};

/// Options for wrapping rendered fragments into a document.
///
/// Every field has a default, so a settings file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerSettings {
	/// `lang` attribute of the `<html>` element
	pub lang: String,
	/// Declared document charset
	pub charset: String,
	/// Whether the shared base stylesheet heads the `<style>` block
	pub include_base_stylesheet: bool,
	/// Rules appended after the base and footer rules
	pub extra_css: String,
	/// Origin used to absolutize root-relative URLs for previews
	pub preview_origin: Option<String>,
}

impl Default for AssemblerSettings {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			charset: "UTF-8".to_string(),
			include_base_stylesheet: true,
			extra_css: String::new(),
			preview_origin: None,
		}
	}
}

impl AssemblerSettings {
	/// Default settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the preview origin.
	pub fn preview_origin(mut self, origin: impl Into<String>) -> Self {
		self.preview_origin = Some(origin.into());
		self
	}

	/// Appends rules after the generated stylesheet.
	pub fn extra_css(mut self, css: impl Into<String>) -> Self {
		self.extra_css = css.into();
		self
	}

	/// Omits the base stylesheet.
	pub fn without_base_stylesheet(mut self) -> Self {
		self.include_base_stylesheet = false;
		self
	}
}
