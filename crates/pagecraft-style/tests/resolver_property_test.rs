//! Property-based tests for the style resolvers

use pagecraft_model::content::{CardCustomStyle, CardStylePreset};
use pagecraft_model::{ButtonStyle, ButtonVariant, Props, ShadowLevel};
use pagecraft_style::{
	hex_to_rgb, resolve_button_style, resolve_card_css, rgb_triplet, shadow_value,
};
use proptest::prelude::*;
use serde_json::json;

fn arb_level() -> impl Strategy<Value = ShadowLevel> {
	prop_oneof![
		Just(ShadowLevel::None),
		Just(ShadowLevel::Sm),
		Just(ShadowLevel::Md),
		Just(ShadowLevel::Lg),
		Just(ShadowLevel::Xl),
	]
}

proptest! {
	#[test]
	fn prop_hex_round_trips_through_triplet(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
		// Arrange
		let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);

		// Act
		let triplet = rgb_triplet(&hex);

		// Assert
		prop_assert_eq!(triplet, format!("{},{},{}", r, g, b));
	}

	#[test]
	fn fuzz_color_parsing_never_panics(color in ".{0,24}") {
		let _ = hex_to_rgb(&color);
		let _ = rgb_triplet(&color);
	}

	#[test]
	fn prop_shadow_tints_with_triplet(level in arb_level(), r in any::<u8>()) {
		let rgb = format!("{},0,0", r);
		let value = shadow_value(level, &rgb);
		if level == ShadowLevel::None {
			prop_assert_eq!(value, "none");
		} else {
			let expected = format!("rgba({},", rgb);
			prop_assert!(value.contains(&expected));
		}
	}

	#[test]
	fn prop_button_resolution_is_deterministic(
		background in "#[0-9a-f]{6}",
		variant in prop_oneof!["solid", "outline", "ghost", "text", "gradient", "bogus"],
		shadow in prop_oneof!["none", "sm", "md", "lg", "xl", "huge"],
		lift in -20.0f64..20.0,
	) {
		// Arrange
		let props = Props::from_value(json!({
			"backgroundColor": background,
			"variant": variant,
			"shadow": shadow,
			"hoverTransform": lift,
		}));
		let style = ButtonStyle::from_props(&props);

		// Act
		let first = resolve_button_style(&style).rules(".b");
		let second = resolve_button_style(&style).rules(".b");

		// Assert
		prop_assert_eq!(first, second);
	}

	#[test]
	fn prop_card_gradient_requires_both_ends(start in proptest::option::of("#[0-9a-f]{6}"), end in proptest::option::of("#[0-9a-f]{6}")) {
		// Arrange
		let custom = CardCustomStyle {
			background_color: Some("#123456".to_string()),
			gradient_start: start.clone(),
			gradient_end: end.clone(),
			..Default::default()
		};

		// Act
		let css = resolve_card_css(CardStylePreset::Shadow, &custom);

		// Assert
		let background = css.base.get("background").unwrap_or_default().to_string();
		prop_assert_eq!(
			background.starts_with("linear-gradient"),
			start.is_some() && end.is_some()
		);
	}
}

#[test]
fn test_every_variant_resolves_with_all_fields() {
	for variant in [
		ButtonVariant::Solid,
		ButtonVariant::Outline,
		ButtonVariant::Ghost,
		ButtonVariant::Text,
		ButtonVariant::Gradient,
	] {
		let resolved = resolve_button_style(&ButtonStyle {
			variant: Some(variant),
			..Default::default()
		});
		let base = resolved.base_css();
		for property in ["background", "color", "padding", "border-radius", "box-shadow", "transition"] {
			assert!(base.get(property).is_some(), "{} missing for {:?}", property, variant);
		}
	}
}
