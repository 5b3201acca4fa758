//! Page builder settings
//!
//! Settings come from an optional TOML file, then environment overrides:
//!
//! ```toml
//! default_title = "Untitled page"
//!
//! [assembler]
//! lang = "en"
//! charset = "UTF-8"
//! include_base_stylesheet = true
//! extra_css = ""
//! preview_origin = "http://localhost:8000"
//! ```
//!
//! `PAGECRAFT_PREVIEW_ORIGIN` and `PAGECRAFT_LANG` replace the matching file
//! values when set to a non-blank value.

use pagecraft_render::AssemblerSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides `assembler.preview_origin`
pub const ENV_PREVIEW_ORIGIN: &str = "PAGECRAFT_PREVIEW_ORIGIN";

/// Overrides `assembler.lang`
pub const ENV_LANG: &str = "PAGECRAFT_LANG";

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
	/// The settings file could not be read
	#[error("Cannot read settings file {path}: {source}")]
	Io {
		/// File that failed
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// The settings file is not valid TOML for these settings
	#[error("Invalid settings file {path}: {source}")]
	Toml {
		/// File that failed
		path: PathBuf,
		/// Parser error
		#[source]
		source: toml::de::Error,
	},
}

/// Result type for settings loading
pub type ConfResult<T> = Result<T, ConfError>;

/// Top-level page builder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBuilderSettings {
	/// Document shell settings
	pub assembler: AssemblerSettings,
	/// Title used when a draft has none
	pub default_title: String,
}

impl Default for PageBuilderSettings {
	fn default() -> Self {
		Self {
			assembler: AssemblerSettings::default(),
			default_title: "Untitled page".to_string(),
		}
	}
}

impl PageBuilderSettings {
	/// Parse settings from TOML text; `origin` names the source in errors
	pub fn from_toml_str(content: &str, origin: &Path) -> ConfResult<Self> {
		toml::from_str(content).map_err(|source| ConfError::Toml {
			path: origin.to_path_buf(),
			source,
		})
	}

	/// Read settings from a TOML file
	pub fn from_file(path: &Path) -> ConfResult<Self> {
		let content = fs::read_to_string(path).map_err(|source| ConfError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&content, path)?;
		tracing::debug!(path = %path.display(), "settings loaded");
		Ok(settings)
	}

	/// File settings (or defaults when `path` is `None`) with the process
	/// environment applied on top
	pub fn load(path: Option<&Path>) -> ConfResult<Self> {
		let settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		Ok(settings.with_env_from(|key| std::env::var(key).ok()))
	}

	/// Apply environment overrides read through `lookup`
	pub fn with_env_from<F>(mut self, lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
		if let Some(origin) = non_blank(ENV_PREVIEW_ORIGIN) {
			tracing::debug!(origin = %origin, "preview origin from environment");
			self.assembler.preview_origin = Some(origin.trim().to_string());
		}
		if let Some(lang) = non_blank(ENV_LANG) {
			self.assembler.lang = lang.trim().to_string();
		}
		self
	}

	/// Title to render for `draft_title`, falling back to the default
	pub fn title_for<'a>(&'a self, draft_title: &'a str) -> &'a str {
		if draft_title.trim().is_empty() {
			&self.default_title
		} else {
			draft_title
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;
	use std::io::Write;

	fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |key| map.get(key).cloned()
	}

	#[rstest]
	fn test_load_from_file() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			"default_title = \"Draft\"\n\n[assembler]\nlang = \"nl\"\npreview_origin = \"http://localhost:8000\""
		)
		.unwrap();

		// Act
		let settings = PageBuilderSettings::from_file(file.path()).unwrap();

		// Assert
		assert_eq!(settings.default_title, "Draft");
		assert_eq!(settings.assembler.lang, "nl");
		assert_eq!(settings.assembler.charset, "UTF-8");
		assert!(settings.assembler.include_base_stylesheet);
		assert_eq!(
			settings.assembler.preview_origin.as_deref(),
			Some("http://localhost:8000")
		);
	}

	#[rstest]
	fn test_empty_file_gives_defaults() {
		let file = tempfile::NamedTempFile::new().unwrap();
		let settings = PageBuilderSettings::from_file(file.path()).unwrap();
		assert_eq!(settings, PageBuilderSettings::default());
	}

	#[rstest]
	fn test_missing_file_is_io_error() {
		// Arrange
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");

		// Act
		let result = PageBuilderSettings::from_file(&path);

		// Assert
		assert!(matches!(result, Err(ConfError::Io { path: p, .. }) if p == path));
	}

	#[rstest]
	fn test_malformed_file_is_toml_error() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[assembler\nlang = ").unwrap();

		// Act
		let result = PageBuilderSettings::from_file(file.path());

		// Assert
		assert!(matches!(result, Err(ConfError::Toml { .. })));
	}

	#[rstest]
	#[case(&[], "en", None)]
	#[case(&[(ENV_LANG, "ja")], "ja", None)]
	#[case(&[(ENV_PREVIEW_ORIGIN, " https://p.test ")], "en", Some("https://p.test"))]
	#[case(&[(ENV_LANG, "  "), (ENV_PREVIEW_ORIGIN, "")], "en", None)]
	fn test_env_overrides(
		#[case] pairs: &[(&str, &str)],
		#[case] lang: &str,
		#[case] origin: Option<&str>,
	) {
		// Act
		let settings = PageBuilderSettings::default().with_env_from(env(pairs));

		// Assert
		assert_eq!(settings.assembler.lang, lang);
		assert_eq!(settings.assembler.preview_origin.as_deref(), origin);
	}

	#[rstest]
	fn test_env_beats_file() {
		// Arrange
		let settings = PageBuilderSettings::from_toml_str(
			"[assembler]\nlang = \"de\"\npreview_origin = \"http://file.test\"",
			Path::new("inline.toml"),
		)
		.unwrap();

		// Act
		let settings = settings.with_env_from(env(&[(ENV_PREVIEW_ORIGIN, "http://env.test")]));

		// Assert
		assert_eq!(settings.assembler.lang, "de");
		assert_eq!(
			settings.assembler.preview_origin.as_deref(),
			Some("http://env.test")
		);
	}

	#[rstest]
	#[case("Home", "Home")]
	#[case("  ", "Untitled page")]
	fn test_title_fallback(#[case] draft: &str, #[case] expected: &str) {
		assert_eq!(PageBuilderSettings::default().title_for(draft), expected);
	}
}
