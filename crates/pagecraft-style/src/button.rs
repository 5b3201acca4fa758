//! Button style resolution

use crate::color::{rgb_triplet, rgba};
use crate::css::Declarations;
use crate::shadow::{hover_shadow_value, shadow_value};
use pagecraft_model::props::format_number;
use pagecraft_model::{ButtonStyle, ButtonVariant, ShadowLevel};

/// Defaults applied to every button field the editor left unset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonDefaults {
	/// Background color
	pub background_color: &'static str,
	/// Label color
	pub text_color: &'static str,
	/// Hover background color
	pub hover_background_color: &'static str,
	/// Hover label color
	pub hover_text_color: &'static str,
	/// Border color
	pub border_color: &'static str,
	/// Border width
	pub border_width: &'static str,
	/// Corner radius
	pub border_radius: &'static str,
	/// Padding
	pub padding: &'static str,
	/// Font size
	pub font_size: &'static str,
	/// Font weight
	pub font_weight: &'static str,
	/// Shadow preset
	pub shadow: ShadowLevel,
	/// Visual treatment
	pub variant: ButtonVariant,
	/// Whether the hover animation runs
	pub animation: bool,
	/// Hover lift in pixels
	pub hover_transform: f64,
	/// Transition duration in seconds
	pub transition_duration: f64,
}

/// Button defaults
pub const DEFAULT_BUTTON_STYLE: ButtonDefaults = ButtonDefaults {
	background_color: "#3b82f6",
	text_color: "#ffffff",
	hover_background_color: "#2563eb",
	hover_text_color: "#ffffff",
	border_color: "#3b82f6",
	border_width: "2px",
	border_radius: "8px",
	padding: "12px 24px",
	font_size: "16px",
	font_weight: "600",
	shadow: ShadowLevel::Md,
	variant: ButtonVariant::Solid,
	animation: true,
	hover_transform: 2.0,
	transition_duration: 0.3,
};

/// A button style with every field filled in
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedButtonStyle {
	/// Background color
	pub background_color: String,
	/// Label color
	pub text_color: String,
	/// Hover background color
	pub hover_background_color: String,
	/// Hover label color
	pub hover_text_color: String,
	/// Border color
	pub border_color: String,
	/// Border width
	pub border_width: String,
	/// Corner radius
	pub border_radius: String,
	/// Padding
	pub padding: String,
	/// Font size
	pub font_size: String,
	/// Font weight
	pub font_weight: String,
	/// Shadow preset
	pub shadow: ShadowLevel,
	/// Visual treatment
	pub variant: ButtonVariant,
	/// Whether the hover animation runs
	pub animation: bool,
	/// Hover lift in pixels
	pub hover_transform: f64,
	/// Transition duration in seconds
	pub transition_duration: f64,
}

/// Fill every unset field of `style` from [`DEFAULT_BUTTON_STYLE`]
pub fn resolve_button_style(style: &ButtonStyle) -> ResolvedButtonStyle {
	resolve_button_style_with(style, &DEFAULT_BUTTON_STYLE)
}

/// Fill every unset field of `style` from `defaults`
pub fn resolve_button_style_with(
	style: &ButtonStyle,
	defaults: &ButtonDefaults,
) -> ResolvedButtonStyle {
	let pick = |value: &Option<String>, default: &str| {
		value.clone().unwrap_or_else(|| default.to_string())
	};
	ResolvedButtonStyle {
		background_color: pick(&style.background_color, defaults.background_color),
		text_color: pick(&style.text_color, defaults.text_color),
		hover_background_color: pick(
			&style.hover_background_color,
			defaults.hover_background_color,
		),
		hover_text_color: pick(&style.hover_text_color, defaults.hover_text_color),
		border_color: pick(&style.border_color, defaults.border_color),
		border_width: pick(&style.border_width, defaults.border_width),
		border_radius: pick(&style.border_radius, defaults.border_radius),
		padding: pick(&style.padding, defaults.padding),
		font_size: pick(&style.font_size, defaults.font_size),
		font_weight: pick(&style.font_weight, defaults.font_weight),
		shadow: style.shadow.unwrap_or(defaults.shadow),
		variant: style.variant.unwrap_or(defaults.variant),
		animation: style.animation.unwrap_or(defaults.animation),
		hover_transform: style
			.hover_transform
			.filter(|n| n.is_finite())
			.map(|n| n.max(0.0))
			.unwrap_or(defaults.hover_transform),
		transition_duration: style
			.transition_duration
			.filter(|n| n.is_finite() && *n >= 0.0)
			.unwrap_or(defaults.transition_duration),
	}
}

impl ResolvedButtonStyle {
	/// Same style with a different visual treatment
	pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
		self.variant = variant;
		self
	}

	fn shadow_rgb(&self) -> String {
		match self.variant {
			ButtonVariant::Outline => rgb_triplet(&self.border_color),
			_ => rgb_triplet(&self.background_color),
		}
	}

	fn casts_shadow(&self) -> bool {
		matches!(self.variant, ButtonVariant::Solid | ButtonVariant::Gradient)
	}

	/// Declarations of the button at rest
	pub fn base_css(&self) -> Declarations {
		let mut css = Declarations::new();
		css.set("display", "inline-block")
			.set("padding", self.padding.as_str())
			.set("font-size", self.font_size.as_str())
			.set("font-weight", self.font_weight.as_str())
			.set("border-radius", self.border_radius.as_str())
			.set("text-decoration", "none")
			.set("cursor", "pointer");
		match self.variant {
			ButtonVariant::Solid => {
				css.set("background", self.background_color.as_str())
					.set("color", self.text_color.as_str())
					.set(
						"border",
						format!("{} solid {}", self.border_width, self.border_color),
					);
			}
			ButtonVariant::Outline => {
				css.set("background", "transparent")
					.set("color", self.border_color.as_str())
					.set(
						"border",
						format!("{} solid {}", self.border_width, self.border_color),
					);
			}
			ButtonVariant::Ghost => {
				css.set("background", rgba(&self.background_color, 0.1))
					.set("color", self.background_color.as_str())
					.set("border", format!("{} solid transparent", self.border_width));
			}
			ButtonVariant::Text => {
				css.set("background", "transparent")
					.set("color", self.background_color.as_str())
					.set("border", "none")
					.set("padding", "4px 0");
			}
			ButtonVariant::Gradient => {
				css.set(
					"background",
					format!(
						"linear-gradient(135deg, {}, {})",
						self.background_color, self.hover_background_color
					),
				)
				.set("color", self.text_color.as_str())
				.set("border", "none");
			}
		}
		let shadow = if self.casts_shadow() {
			shadow_value(self.shadow, &self.shadow_rgb())
		} else {
			"none".to_string()
		};
		css.set("box-shadow", shadow);
		let duration = format_number(self.transition_duration);
		css.set("transition", format!("all {}s ease", duration));
		css
	}

	/// Declarations applied on hover
	pub fn hover_css(&self) -> Declarations {
		let mut css = Declarations::new();
		match self.variant {
			ButtonVariant::Solid => {
				css.set("background", self.hover_background_color.as_str())
					.set("color", self.hover_text_color.as_str())
					.set("border-color", self.hover_background_color.as_str());
			}
			ButtonVariant::Outline => {
				css.set("background", self.hover_background_color.as_str())
					.set("color", self.hover_text_color.as_str())
					.set("border-color", self.hover_background_color.as_str());
			}
			ButtonVariant::Ghost => {
				css.set("background", rgba(&self.background_color, 0.2));
			}
			ButtonVariant::Text => {
				css.set("color", self.hover_background_color.as_str())
					.set("text-decoration", "underline");
			}
			ButtonVariant::Gradient => {
				css.set(
					"background",
					format!(
						"linear-gradient(135deg, {}, {})",
						self.hover_background_color, self.background_color
					),
				)
				.set("color", self.hover_text_color.as_str());
			}
		}
		if self.animation {
			if self.casts_shadow() {
				css.set(
					"box-shadow",
					hover_shadow_value(self.shadow, &self.shadow_rgb()),
				);
			}
			if self.hover_transform != 0.0 {
				css.set(
					"transform",
					format!("translateY(-{}px)", format_number(self.hover_transform)),
				);
			}
		}
		css
	}

	/// Rest and hover rules for `selector`
	pub fn rules(&self, selector: &str) -> String {
		let mut out = self.base_css().rule(selector);
		out.push_str(&self.hover_css().rule(&format!("{}:hover", selector)));
		out
	}
}
