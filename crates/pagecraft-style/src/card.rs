//! Card skin resolution
//!
//! A card's CSS is its preset merged with the section's free-form
//! overrides. When both gradient ends are set the gradient replaces the flat
//! background and the flat hover background is ignored.

use crate::css::Declarations;
use crate::shadow::{hover_shadow_value, shadow_value};
use pagecraft_model::ShadowLevel;
use pagecraft_model::content::{CardCustomStyle, CardShadow, CardStylePreset};
use pagecraft_model::props::format_number;

/// Resolved card CSS
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCardCss {
	/// Card container at rest
	pub base: Declarations,
	/// Card container on hover
	pub hover: Declarations,
	/// Title color
	pub heading_color: String,
	/// Body text color
	pub text_color: String,
}

impl ResolvedCardCss {
	/// Rest and hover rules for `selector`, plus title and body colors
	pub fn rules(&self, selector: &str) -> String {
		let mut out = self.base.rule(selector);
		out.push_str(&self.hover.rule(&format!("{}:hover", selector)));
		out.push_str(
			&Declarations::new()
				.with("color", self.heading_color.as_str())
				.rule(&format!("{} .pc-card-title", selector)),
		);
		out.push_str(
			&Declarations::new()
				.with("color", self.text_color.as_str())
				.rule(&format!("{} .pc-card-text", selector)),
		);
		out
	}
}

struct Preset {
	background: &'static str,
	border: &'static str,
	border_top: Option<&'static str>,
	radius: &'static str,
	shadow: ShadowLevel,
	lift: f64,
	heading_color: &'static str,
	text_color: &'static str,
}

fn preset(kind: CardStylePreset) -> Preset {
	match kind {
		CardStylePreset::Minimal => Preset {
			background: "#ffffff",
			border: "1px solid #e5e7eb",
			border_top: None,
			radius: "8px",
			shadow: ShadowLevel::None,
			lift: 0.0,
			heading_color: "#111827",
			text_color: "#4b5563",
		},
		CardStylePreset::Shadow => Preset {
			background: "#ffffff",
			border: "none",
			border_top: None,
			radius: "12px",
			shadow: ShadowLevel::Sm,
			lift: 4.0,
			heading_color: "#111827",
			text_color: "#4b5563",
		},
		CardStylePreset::Gradient => Preset {
			background: "linear-gradient(135deg, #667eea, #764ba2)",
			border: "none",
			border_top: None,
			radius: "12px",
			shadow: ShadowLevel::Md,
			lift: 4.0,
			heading_color: "#ffffff",
			text_color: "rgba(255,255,255,0.9)",
		},
		CardStylePreset::Modern => Preset {
			background: "#ffffff",
			border: "1px solid #f1f5f9",
			border_top: Some("4px solid #3b82f6"),
			radius: "8px",
			shadow: ShadowLevel::Md,
			lift: 6.0,
			heading_color: "#0f172a",
			text_color: "#475569",
		},
	}
}

/// Merge `custom` onto the `kind` preset
pub fn resolve_card_css(kind: CardStylePreset, custom: &CardCustomStyle) -> ResolvedCardCss {
	let preset = preset(kind);
	let mut base = Declarations::new();
	let mut hover = Declarations::new();

	let gradient = custom.gradient();
	match gradient {
		Some((start, end)) => {
			let direction = custom.gradient_direction.as_deref().unwrap_or("135deg");
			base.set(
				"background",
				format!("linear-gradient({}, {}, {})", direction, start, end),
			);
		}
		None => {
			base.set(
				"background",
				custom
					.background_color
					.as_deref()
					.unwrap_or(preset.background),
			);
			if let Some(hover_bg) = &custom.hover_background_color {
				hover.set("background", hover_bg.as_str());
			}
		}
	}

	if custom.border_color.is_some() || custom.border_width.is_some() {
		base.set(
			"border",
			format!(
				"{} solid {}",
				custom.border_width.as_deref().unwrap_or("1px"),
				custom.border_color.as_deref().unwrap_or("#e5e7eb")
			),
		);
	} else {
		base.set("border", preset.border);
		if let Some(top) = preset.border_top {
			base.set("border-top", top);
		}
	}

	base.set(
		"border-radius",
		custom.border_radius.as_deref().unwrap_or(preset.radius),
	);
	base.set("padding", custom.padding.as_deref().unwrap_or("24px"));

	let (rest_shadow, hover_shadow) = match &custom.shadow {
		Some(CardShadow::Level(level)) => (
			shadow_value(*level, "0,0,0"),
			hover_shadow_value(*level, "0,0,0"),
		),
		Some(CardShadow::Css(css)) => (css.clone(), css.clone()),
		None => (
			shadow_value(preset.shadow, "0,0,0"),
			hover_shadow_value(preset.shadow, "0,0,0"),
		),
	};
	base.set("box-shadow", rest_shadow);
	base.set("transition", "transform 0.3s ease, box-shadow 0.3s ease, background 0.3s ease");
	hover.set("box-shadow", hover_shadow);

	let lift = custom
		.hover_transform
		.filter(|n| n.is_finite())
		.map(|n| n.max(0.0))
		.unwrap_or(preset.lift);
	if lift != 0.0 {
		hover.set("transform", format!("translateY(-{}px)", format_number(lift)));
	}

	ResolvedCardCss {
		base,
		hover,
		heading_color: custom
			.heading_color
			.clone()
			.unwrap_or_else(|| preset.heading_color.to_string()),
		text_color: custom
			.text_color
			.clone()
			.unwrap_or_else(|| preset.text_color.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(CardStylePreset::Minimal, "#ffffff", "none")]
	#[case(CardStylePreset::Shadow, "#ffffff", "0 2px 8px rgba(0,0,0,0.2)")]
	#[case(CardStylePreset::Gradient, "linear-gradient(135deg, #667eea, #764ba2)", "0 4px 15px rgba(0,0,0,0.3)")]
	fn test_presets(#[case] kind: CardStylePreset, #[case] background: &str, #[case] shadow: &str) {
		let css = resolve_card_css(kind, &CardCustomStyle::default());
		assert_eq!(css.base.get("background"), Some(background));
		assert_eq!(css.base.get("box-shadow"), Some(shadow));
	}

	#[rstest]
	fn test_gradient_wins_over_flat_background() {
		// Arrange
		let custom = CardCustomStyle {
			background_color: Some("#ff0000".to_string()),
			hover_background_color: Some("#00ff00".to_string()),
			gradient_start: Some("#111111".to_string()),
			gradient_end: Some("#222222".to_string()),
			..Default::default()
		};

		// Act
		let css = resolve_card_css(CardStylePreset::Minimal, &custom);

		// Assert
		assert_eq!(
			css.base.get("background"),
			Some("linear-gradient(135deg, #111111, #222222)")
		);
		assert_eq!(css.hover.get("background"), None);
	}

	#[rstest]
	fn test_half_gradient_keeps_flat_background() {
		let custom = CardCustomStyle {
			background_color: Some("#ff0000".to_string()),
			hover_background_color: Some("#00ff00".to_string()),
			gradient_start: Some("#111111".to_string()),
			..Default::default()
		};
		let css = resolve_card_css(CardStylePreset::Shadow, &custom);
		assert_eq!(css.base.get("background"), Some("#ff0000"));
		assert_eq!(css.hover.get("background"), Some("#00ff00"));
	}

	#[rstest]
	fn test_custom_border_shadow_and_lift() {
		// Arrange
		let custom = CardCustomStyle {
			border_color: Some("#abcdef".to_string()),
			shadow: Some(CardShadow::Css("0 0 0 3px pink".to_string())),
			hover_transform: Some(0.0),
			..Default::default()
		};

		// Act
		let css = resolve_card_css(CardStylePreset::Modern, &custom);

		// Assert
		assert_eq!(css.base.get("border"), Some("1px solid #abcdef"));
		assert_eq!(css.base.get("border-top"), None);
		assert_eq!(css.base.get("box-shadow"), Some("0 0 0 3px pink"));
		assert_eq!(css.hover.get("transform"), None);
	}

	#[rstest]
	fn test_negative_lift_is_dropped() {
		// Arrange
		let custom = CardCustomStyle {
			hover_transform: Some(-6.0),
			..Default::default()
		};

		// Act
		let css = resolve_card_css(CardStylePreset::Shadow, &custom);

		// Assert
		assert_eq!(css.hover.get("transform"), None);
	}
}
