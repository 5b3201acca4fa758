//! Image/text block props

use crate::button::ButtonStyle;
use crate::props::Props;
use crate::variant::ImageTextLayout;

/// Resolved image/text block content.
///
/// Props are grouped as `text {heading, subheading, description, buttonText,
/// buttonUrl}`, `image {url, alt}`, `style {...}` and `buttonStyle`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTextContent {
	/// Column arrangement
	pub layout: ImageTextLayout,
	/// Heading
	pub heading: String,
	/// Optional subheading
	pub subheading: Option<String>,
	/// Body text
	pub description: String,
	/// Optional button label; no button renders without one
	pub button_text: Option<String>,
	/// Button target
	pub button_url: String,
	/// Image URL; a placeholder renders when absent
	pub image_url: Option<String>,
	/// Image alt text
	pub image_alt: String,
	/// Section background
	pub background_color: String,
	/// Body text color
	pub text_color: String,
	/// Heading color
	pub heading_color: String,
	/// Section padding
	pub padding: String,
	/// Gap between the columns
	pub gap: String,
	/// Image corner radius
	pub image_radius: String,
	/// Button style
	pub button_style: ButtonStyle,
}

impl ImageTextContent {
	/// Resolve image/text props
	pub fn from_props(props: &Props) -> Self {
		let text = props.object("text");
		let image = props.object("image");
		let style = props.object("style");
		Self {
			layout: props
				.text("layout")
				.map(|l| ImageTextLayout::parse(&l))
				.unwrap_or_default(),
			heading: text.text_or("heading", "Tell Your Story"),
			subheading: text.non_empty("subheading"),
			description: text.text_or(
				"description",
				"Share what makes your product or team unique.",
			),
			button_text: text.non_empty("buttonText"),
			button_url: text.non_empty_or("buttonUrl", "#"),
			image_url: image.first_non_empty(&["url", "src"]),
			image_alt: image.text_or("alt", ""),
			background_color: style.non_empty_or("backgroundColor", "#ffffff"),
			text_color: style.non_empty_or("textColor", "#4b5563"),
			heading_color: style.non_empty_or("headingColor", "#111827"),
			padding: style.non_empty_or("padding", "64px 24px"),
			gap: style.length("gap").unwrap_or_else(|| "48px".to_string()),
			image_radius: style
				.length("imageRadius")
				.unwrap_or_else(|| "12px".to_string()),
			button_style: ButtonStyle::from_key(props, "buttonStyle"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_nested_groups_are_read() {
		// Arrange
		let props = Props::from_value(json!({
			"layout": "text-bottom",
			"text": { "heading": "About", "buttonText": "More" },
			"image": { "url": "/team.jpg", "alt": "Team" },
			"style": { "gap": 24 }
		}));

		// Act
		let content = ImageTextContent::from_props(&props);

		// Assert
		assert_eq!(content.layout, ImageTextLayout::TextBottom);
		assert_eq!(content.heading, "About");
		assert_eq!(content.button_text.as_deref(), Some("More"));
		assert_eq!(content.image_url.as_deref(), Some("/team.jpg"));
		assert_eq!(content.gap, "24px");
	}

	#[rstest]
	fn test_defaults() {
		let content = ImageTextContent::from_props(&Props::new());
		assert_eq!(content.layout, ImageTextLayout::TextLeft);
		assert!(content.button_text.is_none());
		assert!(content.image_url.is_none());
	}
}
