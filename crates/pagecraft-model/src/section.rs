//! Sections: the typed content blocks a page is composed from

use crate::defaults::default_props;
use crate::props::Props;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Section type identifier.
///
/// Known types map to dedicated renderers. Any other string is preserved as
/// [`SectionType::Other`] so that a layout written by a newer editor still
/// loads; such sections render as a title-only fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionType {
	/// Large heading banner with calls to action
	Hero,
	/// Grid of feature cards
	Cards,
	/// Rotating slides, reviews, gallery or paged grid
	Carousel,
	/// Customer quotes
	Testimonials,
	/// Long-form article made of typed blocks
	Blog,
	/// Image next to (or above/below) a text column
	ImageTextBlock,
	/// Call-to-action banner
	Cta,
	/// Unrecognized type name, kept verbatim
	Other(String),
}

impl SectionType {
	/// Every type with a dedicated renderer
	pub const KNOWN: [SectionType; 7] = [
		SectionType::Hero,
		SectionType::Cards,
		SectionType::Carousel,
		SectionType::Testimonials,
		SectionType::Blog,
		SectionType::ImageTextBlock,
		SectionType::Cta,
	];

	/// Wire name used in layouts and `data-section-type` attributes
	pub fn as_str(&self) -> &str {
		match self {
			Self::Hero => "hero",
			Self::Cards => "cards",
			Self::Carousel => "carousel",
			Self::Testimonials => "testimonials",
			Self::Blog => "blog",
			Self::ImageTextBlock => "imagetextblock",
			Self::Cta => "cta",
			Self::Other(name) => name,
		}
	}

	/// Human-readable label used for default section titles
	pub fn label(&self) -> String {
		match self {
			Self::Hero => "Hero".to_string(),
			Self::Cards => "Cards".to_string(),
			Self::Carousel => "Carousel".to_string(),
			Self::Testimonials => "Testimonials".to_string(),
			Self::Blog => "Blog".to_string(),
			Self::ImageTextBlock => "Image Text Block".to_string(),
			Self::Cta => "CTA".to_string(),
			Self::Other(name) => {
				let mut chars = name.chars();
				match chars.next() {
					Some(first) => first.to_uppercase().chain(chars).collect(),
					None => "Untitled".to_string(),
				}
			}
		}
	}

	/// Whether a dedicated renderer exists for this type
	pub fn is_known(&self) -> bool {
		!matches!(self, Self::Other(_))
	}
}

impl From<String> for SectionType {
	fn from(name: String) -> Self {
		match name.as_str() {
			"hero" => Self::Hero,
			"cards" => Self::Cards,
			"carousel" => Self::Carousel,
			"testimonials" => Self::Testimonials,
			"blog" => Self::Blog,
			"imagetextblock" => Self::ImageTextBlock,
			"cta" => Self::Cta,
			_ => Self::Other(name),
		}
	}
}

impl From<&str> for SectionType {
	fn from(name: &str) -> Self {
		Self::from(name.to_string())
	}
}

impl From<SectionType> for String {
	fn from(section_type: SectionType) -> Self {
		section_type.as_str().to_string()
	}
}

impl fmt::Display for SectionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One content block on a page.
///
/// The type is fixed at creation; changing it means replacing the section.
/// Renderers only ever borrow a section, so rendering cannot alter it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
	/// Unique, stable identifier; also seeds the rendered DOM id
	#[serde(default)]
	pub id: String,

	#[serde(rename = "type")]
	section_type: SectionType,

	/// Optional display label
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,

	/// Type-specific properties
	#[serde(default)]
	pub props: Props,
}

impl Section {
	/// Create a section with a fresh id and the type's default props
	pub fn new(section_type: SectionType) -> Self {
		let props = default_props(&section_type);
		Self {
			id: Uuid::new_v4().to_string(),
			section_type,
			title: None,
			props,
		}
	}

	/// Create a section with an explicit id and props
	pub fn with_props(id: impl Into<String>, section_type: SectionType, props: Props) -> Self {
		Self {
			id: id.into(),
			section_type,
			title: None,
			props,
		}
	}

	/// Builder-style title setter
	pub fn titled(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// The section's type
	pub fn section_type(&self) -> &SectionType {
		&self.section_type
	}

	/// Title to display: the explicit title, or `"<Type> Section"`
	pub fn display_title(&self) -> String {
		match self.title.as_deref().map(str::trim) {
			Some(title) if !title.is_empty() => title.to_string(),
			_ => format!("{} Section", self.section_type.label()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("hero", SectionType::Hero)]
	#[case("imagetextblock", SectionType::ImageTextBlock)]
	#[case("cta", SectionType::Cta)]
	#[case("pricing", SectionType::Other("pricing".to_string()))]
	fn test_section_type_from_wire_name(#[case] name: &str, #[case] expected: SectionType) {
		assert_eq!(SectionType::from(name), expected);
		assert_eq!(SectionType::from(name).as_str(), name);
	}

	#[rstest]
	#[case(SectionType::Hero, "Hero Section")]
	#[case(SectionType::ImageTextBlock, "Image Text Block Section")]
	#[case(SectionType::Other("pricing".to_string()), "Pricing Section")]
	fn test_default_display_title(#[case] section_type: SectionType, #[case] expected: &str) {
		let section = Section::with_props("s1", section_type, Props::new());
		assert_eq!(section.display_title(), expected);
	}

	#[rstest]
	fn test_blank_title_falls_back() {
		let section = Section::with_props("s1", SectionType::Cards, Props::new()).titled("   ");
		assert_eq!(section.display_title(), "Cards Section");
	}

	#[rstest]
	fn test_new_section_has_unique_id_and_defaults() {
		// Arrange & Act
		let a = Section::new(SectionType::Hero);
		let b = Section::new(SectionType::Hero);

		// Assert
		assert_ne!(a.id, b.id);
		assert!(!a.props.is_empty());
	}

	#[rstest]
	fn test_section_wire_format() {
		// Arrange
		let raw = json!({
			"id": "abc",
			"type": "carousel",
			"title": "Gallery",
			"props": { "variant": 3, "somethingNew": "kept" }
		});

		// Act
		let section: Section = serde_json::from_value(raw.clone()).unwrap();
		let back = serde_json::to_value(&section).unwrap();

		// Assert
		assert_eq!(section.section_type(), &SectionType::Carousel);
		assert_eq!(back, raw);
	}
}
