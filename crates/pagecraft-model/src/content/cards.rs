//! Card grid props

use crate::button::ShadowLevel;
use crate::props::Props;
use crate::variant::CardsVariant;

/// Default number of columns
pub const DEFAULT_COLUMNS: u8 = 3;

/// Card skin preset, the base the free-form overrides are merged onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardStylePreset {
	/// Thin border, no shadow
	Minimal,
	/// Borderless with a soft shadow
	#[default]
	Shadow,
	/// Colored gradient background with light text
	Gradient,
	/// Accent top border with a lift on hover
	Modern,
}

impl CardStylePreset {
	/// Parse a preset name; unknown names select `shadow`
	pub fn parse(value: &str) -> Self {
		match value.trim().to_ascii_lowercase().as_str() {
			"minimal" => Self::Minimal,
			"gradient" => Self::Gradient,
			"modern" => Self::Modern,
			_ => Self::Shadow,
		}
	}

	/// Preset name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Minimal => "minimal",
			Self::Shadow => "shadow",
			Self::Gradient => "gradient",
			Self::Modern => "modern",
		}
	}
}

/// Card shadow override: a named level or raw CSS
#[derive(Debug, Clone, PartialEq)]
pub enum CardShadow {
	/// One of the shadow presets
	Level(ShadowLevel),
	/// Any other value, substituted into CSS verbatim
	Css(String),
}

impl CardShadow {
	fn parse(value: String) -> Self {
		match ShadowLevel::parse(&value) {
			Some(level) => Self::Level(level),
			None => Self::Css(value),
		}
	}
}

/// Free-form card CSS overrides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardCustomStyle {
	/// Flat background color
	pub background_color: Option<String>,
	/// Flat background color while hovered
	pub hover_background_color: Option<String>,
	/// Body text color
	pub text_color: Option<String>,
	/// Card title color
	pub heading_color: Option<String>,
	/// Border color
	pub border_color: Option<String>,
	/// Border width (CSS length)
	pub border_width: Option<String>,
	/// Corner radius (CSS length)
	pub border_radius: Option<String>,
	/// Shadow at rest
	pub shadow: Option<CardShadow>,
	/// Inner padding
	pub padding: Option<String>,
	/// Gradient start color
	pub gradient_start: Option<String>,
	/// Gradient end color
	pub gradient_end: Option<String>,
	/// Gradient direction, e.g. `135deg`
	pub gradient_direction: Option<String>,
	/// Hover lift in pixels
	pub hover_transform: Option<f64>,
}

impl CardCustomStyle {
	/// Read overrides from a props sub-object
	pub fn from_props(props: &Props) -> Self {
		Self {
			background_color: props.non_empty("backgroundColor"),
			hover_background_color: props.non_empty("hoverBackgroundColor"),
			text_color: props.non_empty("textColor"),
			heading_color: props.non_empty("headingColor"),
			border_color: props.non_empty("borderColor"),
			border_width: props.length("borderWidth"),
			border_radius: props.length("borderRadius"),
			shadow: props.non_empty("shadow").map(CardShadow::parse),
			padding: props.non_empty("padding"),
			gradient_start: props.non_empty("gradientStart"),
			gradient_end: props.non_empty("gradientEnd"),
			gradient_direction: props.non_empty("gradientDirection"),
			hover_transform: props.pixels("hoverTransform"),
		}
	}

	/// Gradient colors, only when both ends are set
	pub fn gradient(&self) -> Option<(&str, &str)> {
		match (&self.gradient_start, &self.gradient_end) {
			(Some(start), Some(end)) => Some((start, end)),
			_ => None,
		}
	}
}

/// One card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
	/// Card title
	pub title: String,
	/// Body text
	pub description: String,
	/// Optional subtitle (icon variant)
	pub subtitle: Option<String>,
	/// Optional icon glyph or emoji (icon variant)
	pub icon: Option<String>,
	/// Optional badge text (icon variant)
	pub badge: Option<String>,
	/// Optional image URL (image variant)
	pub image: Option<String>,
	/// Image alt text
	pub image_alt: String,
	/// Optional link wrapping the whole card
	pub link: Option<String>,
	/// Optional call-to-action label shown at the bottom of a linked card
	pub link_text: Option<String>,
}

impl Card {
	/// Read one card object
	pub fn from_props(props: &Props) -> Self {
		Self {
			title: props.text_or("title", "Untitled"),
			description: props.text_or("description", ""),
			subtitle: props.non_empty("subtitle"),
			icon: props.non_empty("icon"),
			badge: props.non_empty("badge"),
			image: props.first_non_empty(&["image", "imageUrl"]),
			image_alt: props.text_or("imageAlt", ""),
			link: props.first_non_empty(&["link", "url"]),
			link_text: props.non_empty("linkText"),
		}
	}
}

/// Resolved card grid content
#[derive(Debug, Clone, PartialEq)]
pub struct CardsContent {
	/// Stored layout variant
	pub variant: CardsVariant,
	/// Optional section heading
	pub heading: Option<String>,
	/// Optional section subheading
	pub subheading: Option<String>,
	/// Cards in display order
	pub cards: Vec<Card>,
	/// Columns on wide screens, within `1..=3`
	pub columns_per_row: u8,
	/// Card skin preset
	pub card_style: CardStylePreset,
	/// Free-form overrides merged onto the preset
	pub custom: CardCustomStyle,
	/// Section background
	pub background_color: String,
}

impl CardsContent {
	/// Resolve card grid props
	pub fn from_props(props: &Props) -> Self {
		let columns_per_row = props
			.number("columnsPerRow")
			.map(|n| n.round().clamp(1.0, 3.0) as u8)
			.unwrap_or(DEFAULT_COLUMNS);
		Self {
			variant: CardsVariant::from_props(props, "variant"),
			heading: props.non_empty("heading"),
			subheading: props.non_empty("subheading"),
			cards: props
				.list("cards")
				.iter()
				.map(|card| Card::from_props(&Props::from_value_ref(card)))
				.collect(),
			columns_per_row,
			card_style: props
				.text("cardStyle")
				.map(|s| CardStylePreset::parse(&s))
				.unwrap_or_default(),
			custom: CardCustomStyle::from_props(&props.object("customStyle")),
			background_color: props.non_empty_or("backgroundColor", "#ffffff"),
		}
	}
}
