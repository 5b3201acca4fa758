//! Call-to-action props

use super::{CallToAction, clamp_unit};
use crate::button::ButtonStyle;
use crate::props::Props;
use crate::variant::CtaVariant;

/// Resolved call-to-action content
#[derive(Debug, Clone, PartialEq)]
pub struct CtaContent {
	/// Stored layout variant (`ctaVariant`)
	pub variant: CtaVariant,
	/// Headline
	pub headline: String,
	/// Supporting text
	pub subtext: String,
	/// Primary button
	pub primary_cta: Option<CallToAction>,
	/// Secondary button
	pub secondary_cta: Option<CallToAction>,
	/// Background color (scrim tint in the background-image layout)
	pub background_color: String,
	/// Text color
	pub text_color: String,
	/// Background image for the background layout
	pub background_image: Option<String>,
	/// Side image for the split layouts
	pub image: Option<String>,
	/// Alt text of the side image
	pub image_alt: String,
	/// Scrim opacity in `[0, 1]`
	pub overlay_opacity: f64,
	/// Primary button style
	pub primary_button: ButtonStyle,
	/// Secondary button style
	pub secondary_button: ButtonStyle,
}

impl CtaContent {
	/// Resolve call-to-action props
	pub fn from_props(props: &Props) -> Self {
		Self {
			variant: CtaVariant::from_props(props, "ctaVariant"),
			headline: props.text_or("headline", "Ready to get started?"),
			subtext: props.text_or(
				"subtext",
				"Join thousands of teams already building with us.",
			),
			primary_cta: CallToAction::from_key(props, "primaryCta", "Start Free Trial"),
			secondary_cta: CallToAction::from_key(props, "secondaryCta", "Contact Sales"),
			background_color: props.non_empty_or("backgroundColor", "#2563eb"),
			text_color: props.non_empty_or("textColor", "#ffffff"),
			background_image: props.non_empty("backgroundImage"),
			image: props.non_empty("image"),
			image_alt: props.text_or("imageAlt", ""),
			overlay_opacity: clamp_unit(props.number_or("overlayOpacity", 0.55)),
			primary_button: ButtonStyle::from_key(props, "primaryButtonStyle"),
			secondary_button: ButtonStyle::from_key(props, "secondaryButtonStyle"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_variant_key_is_cta_variant() {
		let content = CtaContent::from_props(&Props::from_value(json!({ "variant": 4, "ctaVariant": 3 })));
		assert_eq!(content.variant, CtaVariant::ImageRight);
	}

	#[rstest]
	fn test_independent_button_styles() {
		// Arrange
		let props = Props::from_value(json!({
			"primaryButtonStyle": { "backgroundColor": "#111111" },
			"secondaryButtonStyle": { "backgroundColor": "#222222", "variant": "ghost" }
		}));

		// Act
		let content = CtaContent::from_props(&props);

		// Assert
		assert_eq!(content.primary_button.background_color.as_deref(), Some("#111111"));
		assert_eq!(content.secondary_button.background_color.as_deref(), Some("#222222"));
		assert_eq!(content.primary_button.variant, None);
	}
}
