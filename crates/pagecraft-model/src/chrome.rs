//! Page chrome: navigation bar and footer configuration
//!
//! Unlike section props, chrome configuration is a fixed schema. Every field
//! is defaulted, so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Link hover treatment shared by the nav bar and the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkHoverEffect {
	/// Animated underline
	#[default]
	Underline,
	/// Background highlight
	Background,
	/// Underline and background together
	UnderlineAndBg,
	/// Text color change only
	TextColor,
}

impl LinkHoverEffect {
	/// Wire name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Underline => "underline",
			Self::Background => "background",
			Self::UnderlineAndBg => "underline-and-bg",
			Self::TextColor => "text-color",
		}
	}
}

impl From<String> for LinkHoverEffect {
	fn from(value: String) -> Self {
		match value.as_str() {
			"background" => Self::Background,
			"underline-and-bg" => Self::UnderlineAndBg,
			"text-color" => Self::TextColor,
			_ => Self::Underline,
		}
	}
}

impl From<LinkHoverEffect> for String {
	fn from(effect: LinkHoverEffect) -> Self {
		effect.as_str().to_string()
	}
}

/// Navigation link, optionally with one level of children
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavLink {
	/// Visible text
	pub label: String,
	/// Target URL
	pub href: String,
	/// Submenu entries; grandchildren are ignored
	pub children: Vec<NavLink>,
}

impl NavLink {
	/// Create a leaf link
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
			children: Vec::new(),
		}
	}

	/// Builder-style child setter
	pub fn with_children(mut self, children: Vec<NavLink>) -> Self {
		self.children = children;
		self
	}

	/// Whether this link opens a submenu
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}
}

/// Nav bar style overrides; unset fields use the chrome style defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavStyle {
	/// Bar background
	pub background_color: Option<String>,
	/// Link and brand color
	pub text_color: Option<String>,
	/// Link color while hovered
	pub hover_color: Option<String>,
	/// Link background while hovered (background effects)
	pub hover_background: Option<String>,
	/// Hover treatment
	pub hover_effect: Option<LinkHoverEffect>,
	/// Underline color (underline effects)
	pub underline_color: Option<String>,
	/// Underline thickness in pixels
	pub underline_thickness: Option<f64>,
	/// Hover transition in milliseconds
	pub transition_ms: Option<u32>,
	/// Hover transition delay in milliseconds
	pub delay_ms: Option<u32>,
	/// Whether the bar sticks to the top of the viewport
	pub sticky: Option<bool>,
	/// Link font size (CSS length)
	pub font_size: Option<String>,
	/// Bar padding (CSS shorthand)
	pub padding: Option<String>,
	/// Submenu background
	pub dropdown_background: Option<String>,
}

/// Navigation bar configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
	/// Logo image URL
	pub logo: Option<String>,
	/// Logo alt text
	pub logo_alt: Option<String>,
	/// Brand text next to the logo
	pub brand_text: Option<String>,
	/// Brand link target, `/` when unset
	pub brand_href: Option<String>,
	/// Top-level links
	pub links: Vec<NavLink>,
	/// Style overrides
	pub style: NavStyle,
}

/// Footer link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLink {
	/// Visible text
	pub label: String,
	/// Target URL
	pub href: String,
}

impl FooterLink {
	/// Create a link
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
		}
	}
}

/// Footer link column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSection {
	/// Column heading
	pub title: String,
	/// Links in order
	pub links: Vec<FooterLink>,
}

/// Footer style overrides; unset fields use the chrome style defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterStyle {
	/// Footer background
	pub background_color: Option<String>,
	/// Body text color
	pub text_color: Option<String>,
	/// Column heading color
	pub heading_color: Option<String>,
	/// Link color
	pub link_color: Option<String>,
	/// Link color while hovered
	pub link_hover_color: Option<String>,
	/// Link background while hovered (background effects)
	pub hover_background: Option<String>,
	/// Hover treatment
	pub hover_effect: Option<LinkHoverEffect>,
	/// Underline color (underline effects)
	pub underline_color: Option<String>,
	/// Underline thickness in pixels
	pub underline_thickness: Option<f64>,
	/// Hover transition in milliseconds
	pub transition_ms: Option<u32>,
	/// Hover transition delay in milliseconds
	pub delay_ms: Option<u32>,
	/// Footer padding (CSS shorthand)
	pub padding: Option<String>,
}

/// Footer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterConfig {
	/// Company name heading the first column
	pub company_name: Option<String>,
	/// Company blurb
	pub description: Option<String>,
	/// Logo image URL
	pub logo: Option<String>,
	/// Link columns after the company column
	pub footer_sections: Vec<FooterSection>,
	/// Copyright line
	pub copyright: Option<String>,
	/// Style overrides
	pub style: FooterStyle,
}

/// Per-column link text overrides keyed by footer section index.
///
/// Each value is a comma-separated list of link labels typed into the editor.
/// A column with a non-blank override renders exactly those labels instead of
/// its structured links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkOverrides(BTreeMap<usize, String>);

impl LinkOverrides {
	/// Create an empty override set
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Set the override string of a column
	pub fn set(&mut self, column: usize, text: impl Into<String>) -> &mut Self {
		self.0.insert(column, text.into());
		self
	}

	/// Override labels for a column, or `None` when no usable override exists.
	///
	/// Blank entries between commas are dropped; a whitespace-only override
	/// counts as absent so clearing the editor field restores the links.
	pub fn labels(&self, column: usize) -> Option<Vec<String>> {
		let raw = self.0.get(&column)?;
		if raw.trim().is_empty() {
			return None;
		}
		Some(
			raw.split(',')
				.map(str::trim)
				.filter(|label| !label.is_empty())
				.map(str::to_string)
				.collect(),
		)
	}

	/// Columns that carry an override
	pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
		self.0.keys().copied()
	}

	/// Whether no overrides are stored
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<(usize, String)> for LinkOverrides {
	fn from_iter<T: IntoIterator<Item = (usize, String)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_empty_nav_config_deserializes() {
		let config: NavConfig = serde_json::from_value(json!({})).unwrap();
		assert!(config.links.is_empty());
		assert_eq!(config.style.hover_effect, None);
	}

	#[rstest]
	fn test_nested_nav_links() {
		// Arrange
		let raw = json!({
			"brandText": "Acme",
			"links": [
				{ "label": "Home", "href": "/" },
				{ "label": "Services", "href": "#", "children": [ { "label": "Design", "href": "/design" } ] }
			],
			"style": { "hoverEffect": "underline-and-bg", "transitionMs": 200 }
		});

		// Act
		let config: NavConfig = serde_json::from_value(raw).unwrap();

		// Assert
		assert_eq!(config.brand_text.as_deref(), Some("Acme"));
		assert!(!config.links[0].has_children());
		assert!(config.links[1].has_children());
		assert_eq!(config.style.hover_effect, Some(LinkHoverEffect::UnderlineAndBg));
		assert_eq!(config.style.transition_ms, Some(200));
	}

	#[rstest]
	fn test_unknown_hover_effect_falls_back_to_underline() {
		let style: NavStyle = serde_json::from_value(json!({ "hoverEffect": "sparkle" })).unwrap();
		assert_eq!(style.hover_effect, Some(LinkHoverEffect::Underline));
	}

	#[rstest]
	#[case("About, Careers ,,Press", Some(vec!["About", "Careers", "Press"]))]
	#[case("   ", None)]
	#[case("Solo", Some(vec!["Solo"]))]
	fn test_link_override_labels(#[case] raw: &str, #[case] expected: Option<Vec<&str>>) {
		// Arrange
		let mut overrides = LinkOverrides::new();
		overrides.set(0, raw);

		// Act
		let labels = overrides.labels(0);

		// Assert
		assert_eq!(
			labels,
			expected.map(|v| v.into_iter().map(str::to_string).collect::<Vec<_>>())
		);
		assert_eq!(overrides.labels(1), None);
	}

	#[rstest]
	fn test_link_overrides_wire_format() {
		let overrides: LinkOverrides = serde_json::from_value(json!({ "1": "A, B" })).unwrap();
		assert_eq!(overrides.labels(1), Some(vec!["A".to_string(), "B".to_string()]));
	}
}
