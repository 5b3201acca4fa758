//! Button styling options shared by hero, CTA, image/text and blog sections

use crate::props::Props;

/// Shadow intensity preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadowLevel {
	/// No shadow
	None,
	/// Small
	Sm,
	/// Medium (default)
	Md,
	/// Large
	Lg,
	/// Extra large
	Xl,
}

impl ShadowLevel {
	/// Parse a level name; unrecognized names read as absent
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"none" => Some(Self::None),
			"sm" | "small" => Some(Self::Sm),
			"md" | "medium" => Some(Self::Md),
			"lg" | "large" => Some(Self::Lg),
			"xl" => Some(Self::Xl),
			_ => None,
		}
	}

	/// Level name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
			Self::Xl => "xl",
		}
	}

	/// The next, more intense level; `xl` stays `xl`
	pub fn intensified(&self) -> Self {
		match self {
			Self::None => Self::Sm,
			Self::Sm => Self::Md,
			Self::Md => Self::Lg,
			Self::Lg | Self::Xl => Self::Xl,
		}
	}
}

/// Visual treatment of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
	/// Filled background
	Solid,
	/// Transparent background with a colored border
	Outline,
	/// Tinted translucent background
	Ghost,
	/// Bare link-like text
	Text,
	/// Diagonal gradient between the base and hover colors
	Gradient,
}

impl ButtonVariant {
	/// Parse a variant name; unrecognized names read as absent
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"solid" | "primary" | "filled" => Some(Self::Solid),
			"outline" | "outlined" | "secondary" => Some(Self::Outline),
			"ghost" => Some(Self::Ghost),
			"text" | "link" => Some(Self::Text),
			"gradient" => Some(Self::Gradient),
			_ => None,
		}
	}

	/// Variant name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Solid => "solid",
			Self::Outline => "outline",
			Self::Ghost => "ghost",
			Self::Text => "text",
			Self::Gradient => "gradient",
		}
	}
}

/// Partially specified button style as stored by the editor.
///
/// Every field is optional; the style resolver fills the gaps with the
/// documented defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonStyle {
	/// Base background color
	pub background_color: Option<String>,
	/// Label color
	pub text_color: Option<String>,
	/// Background color while hovered
	pub hover_background_color: Option<String>,
	/// Label color while hovered
	pub hover_text_color: Option<String>,
	/// Border color
	pub border_color: Option<String>,
	/// Border width (CSS length)
	pub border_width: Option<String>,
	/// Corner radius (CSS length)
	pub border_radius: Option<String>,
	/// Padding (CSS shorthand)
	pub padding: Option<String>,
	/// Font size (CSS length)
	pub font_size: Option<String>,
	/// Font weight
	pub font_weight: Option<String>,
	/// Shadow preset
	pub shadow: Option<ShadowLevel>,
	/// Visual treatment
	pub variant: Option<ButtonVariant>,
	/// Whether the hover lift/shadow animation runs
	pub animation: Option<bool>,
	/// Hover lift in pixels
	pub hover_transform: Option<f64>,
	/// Transition duration in seconds
	pub transition_duration: Option<f64>,
}

impl ButtonStyle {
	/// Read a button style from its props sub-object
	pub fn from_props(props: &Props) -> Self {
		Self {
			background_color: props.non_empty("backgroundColor"),
			text_color: props.non_empty("textColor"),
			hover_background_color: props.non_empty("hoverBackgroundColor"),
			hover_text_color: props.non_empty("hoverTextColor"),
			border_color: props.non_empty("borderColor"),
			border_width: props.length("borderWidth"),
			border_radius: props.length("borderRadius"),
			padding: props.non_empty("padding"),
			font_size: props.length("fontSize"),
			font_weight: props.non_empty("fontWeight"),
			shadow: props.text("shadow").and_then(|s| ShadowLevel::parse(&s)),
			variant: props.text("variant").and_then(|s| ButtonVariant::parse(&s)),
			animation: props.flag("animation"),
			hover_transform: props.pixels("hoverTransform"),
			transition_duration: props.seconds("transitionDuration"),
		}
	}

	/// Read the button style nested under `key`
	pub fn from_key(props: &Props, key: &str) -> Self {
		Self::from_props(&props.object(key))
	}
}
