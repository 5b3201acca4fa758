//! Hero banner props

use super::{CallToAction, clamp_unit};
use crate::button::ButtonStyle;
use crate::props::Props;
use crate::variant::HeroVariant;

/// Default heading
pub const DEFAULT_HEADING: &str = "Welcome to Our Website";
/// Default subheading
pub const DEFAULT_SUBHEADING: &str = "Build something amazing with our platform";
/// Default background color, also the scrim tint for the full-bleed layout
pub const DEFAULT_BACKGROUND: &str = "#1e293b";
/// Default text color
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
/// Default scrim opacity
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.6;

/// Resolved hero section content
#[derive(Debug, Clone, PartialEq)]
pub struct HeroContent {
	/// Stored layout variant
	pub variant: HeroVariant,
	/// Main heading
	pub heading: String,
	/// Supporting line below the heading
	pub subheading: String,
	/// Primary button, hidden when its label is blanked
	pub primary_cta: Option<CallToAction>,
	/// Secondary button, hidden when its label is blanked
	pub secondary_cta: Option<CallToAction>,
	/// Flat background color (scrim tint in the full-bleed layout)
	pub background_color: String,
	/// Optional background image URL
	pub background_image: Option<String>,
	/// Text color
	pub text_color: String,
	/// Side image used by the split layouts
	pub image: Option<String>,
	/// Alt text of the side image
	pub image_alt: String,
	/// Scrim opacity in `[0, 1]`
	pub overlay_opacity: f64,
	/// Minimum banner height (CSS length)
	pub min_height: String,
	/// Style of the primary button
	pub primary_button: ButtonStyle,
	/// Style of the secondary button
	pub secondary_button: ButtonStyle,
}

impl HeroContent {
	/// Resolve hero props
	pub fn from_props(props: &Props) -> Self {
		Self {
			variant: HeroVariant::from_props(props, "variant"),
			heading: props.text_or("heading", DEFAULT_HEADING),
			subheading: props.text_or("subheading", DEFAULT_SUBHEADING),
			primary_cta: CallToAction::from_key(props, "primaryCta", "Get Started"),
			secondary_cta: CallToAction::from_key(props, "secondaryCta", "Learn More"),
			background_color: props.non_empty_or("backgroundColor", DEFAULT_BACKGROUND),
			background_image: props.non_empty("backgroundImage"),
			text_color: props.non_empty_or("textColor", DEFAULT_TEXT_COLOR),
			image: props.non_empty("image"),
			image_alt: props.text_or("imageAlt", ""),
			overlay_opacity: clamp_unit(props.number_or("overlayOpacity", DEFAULT_OVERLAY_OPACITY)),
			min_height: props.length("minHeight").unwrap_or_else(|| "520px".to_string()),
			primary_button: ButtonStyle::from_key(props, "primaryButtonStyle"),
			secondary_button: ButtonStyle::from_key(props, "secondaryButtonStyle"),
		}
	}
}
