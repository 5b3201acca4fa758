//! Hero banner

use super::{button_pair, css_url, css_value, section_open, style_tag};
use crate::html::{escape_text, instance_id};
use crate::placeholder::image_or_placeholder;
use pagecraft_model::Section;
use pagecraft_model::content::HeroContent;
use pagecraft_model::variant::HeroVariant;
use pagecraft_style::translucent;

pub(super) fn render(section: &Section, hero: &HeroContent) -> String {
	let id = instance_id("hero", &section.id);
	if hero.variant.is_unknown() {
		tracing::debug!(
			id = %section.id,
			variant = hero.variant.number(),
			"unknown hero variant, using centered layout"
		);
	}
	let variant = hero.variant.effective();

	let buttons = button_pair(
		&id,
		hero.primary_cta.as_ref().map(|c| (c, &hero.primary_button)),
		hero.secondary_cta.as_ref().map(|c| (c, &hero.secondary_button)),
	);

	let mut css = format!(
		"#{id} {{ position: relative; display: flex; align-items: center; min-height: {min}; \
		 padding: 80px 24px; background-color: {bg}; color: {fg}; overflow: hidden; }}\n\
		 #{id} .pc-hero-inner {{ position: relative; z-index: 1; width: 100%; max-width: 1100px; margin: 0 auto; }}\n\
		 #{id} .pc-hero-heading {{ font-size: 48px; line-height: 1.1; margin: 0 0 16px; color: inherit; }}\n\
		 #{id} .pc-hero-sub {{ font-size: 20px; line-height: 1.5; margin: 0 0 32px; opacity: 0.9; }}\n\
		 #{id} .pc-actions {{ display: flex; flex-wrap: wrap; gap: 16px; }}\n\
		 @media (max-width: 768px) {{ #{id} .pc-hero-heading {{ font-size: 34px; }} }}\n",
		id = id,
		min = css_value(&hero.min_height),
		bg = css_value(&hero.background_color),
		fg = css_value(&hero.text_color),
	);

	let text = format!(
		"<h1 class=\"pc-hero-heading\">{}</h1><p class=\"pc-hero-sub\">{}</p>{}",
		escape_text(&hero.heading),
		escape_text(&hero.subheading),
		buttons.html
	);

	let body = match variant {
		HeroVariant::ImageLeft | HeroVariant::ImageRight => {
			css.push_str(&format!(
				"#{id} .pc-hero-split {{ display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }}\n\
				 #{id} .pc-hero-media {{ border-radius: 12px; overflow: hidden; aspect-ratio: 4 / 3; }}\n\
				 #{id} .pc-hero-media img {{ display: block; width: 100%; height: 100%; object-fit: cover; }}\n\
				 @media (max-width: 768px) {{ #{id} .pc-hero-split {{ grid-template-columns: 1fr; }} }}\n",
				id = id
			));
			let media = format!(
				"<div class=\"pc-hero-media\">{}</div>",
				image_or_placeholder(hero.image.as_deref(), &hero.image_alt, "pc-hero-image")
			);
			let copy = format!("<div class=\"pc-hero-copy\">{}</div>", text);
			let (first, second) = if variant == HeroVariant::ImageLeft {
				(media, copy)
			} else {
				(copy, media)
			};
			format!(
				"<div class=\"pc-hero-inner pc-hero-split\">{}{}</div>",
				first, second
			)
		}
		HeroVariant::FullBleed => {
			let image = hero.background_image.as_deref().or(hero.image.as_deref());
			if let Some(image) = image {
				css.push_str(&format!(
					"#{id} {{ background-image: {url}; background-size: cover; background-position: center; }}\n",
					id = id,
					url = css_url(image)
				));
			}
			let top = translucent(&hero.background_color, hero.overlay_opacity);
			let bottom = translucent(
				&hero.background_color,
				(hero.overlay_opacity + 0.2).min(1.0),
			);
			css.push_str(&format!(
				"#{id} .pc-scrim {{ position: absolute; inset: 0; background: linear-gradient(180deg, {top} 0%, {bottom} 100%); }}\n\
				 #{id} .pc-hero-inner {{ text-align: center; max-width: 800px; }}\n\
				 #{id} .pc-actions {{ justify-content: center; }}\n",
				id = id,
				top = css_value(&top),
				bottom = css_value(&bottom),
			));
			format!(
				"<div class=\"pc-scrim\" aria-hidden=\"true\"></div><div class=\"pc-hero-inner\">{}</div>",
				text
			)
		}
		HeroVariant::Centered | HeroVariant::Unknown(_) => {
			if let Some(image) = &hero.background_image {
				css.push_str(&format!(
					"#{id} {{ background-image: {url}; background-size: cover; background-position: center; }}\n",
					id = id,
					url = css_url(image)
				));
			}
			css.push_str(&format!(
				"#{id} .pc-hero-inner {{ text-align: center; max-width: 800px; }}\n\
				 #{id} .pc-actions {{ justify-content: center; }}\n",
				id = id
			));
			format!("<div class=\"pc-hero-inner\">{}</div>", text)
		}
	};

	css.push_str(&buttons.css);
	format!(
		"{}{}{}</section>",
		section_open(section, &id, ""),
		style_tag(&css),
		body
	)
}

#[cfg(test)]
mod tests {
	use crate::sections::render_section;
	use pagecraft_model::{Props, Section, SectionType};
	use rstest::rstest;
	use serde_json::json;

	fn hero(props: serde_json::Value) -> String {
		render_section(&Section::with_props(
			"hero-1",
			SectionType::Hero,
			Props::from_value(props),
		))
		.into_string()
	}

	#[rstest]
	#[case(json!({}))]
	#[case(json!({ "variant": "abc" }))]
	#[case(json!({ "variant": 9 }))]
	#[case(json!({ "variant": 1 }))]
	fn test_unknown_variants_render_like_centered(#[case] props: serde_json::Value) {
		let centered = hero(json!({ "variant": 1 }));
		assert_eq!(hero(props), centered);
	}

	#[rstest]
	fn test_split_variants_are_mirrored() {
		// Act
		let left = hero(json!({ "variant": 2, "image": "/side.png" }));
		let right = hero(json!({ "variant": 3, "image": "/side.png" }));

		// Assert
		let media_first = |html: &str| {
			html.find("pc-hero-media\"").unwrap() < html.find("pc-hero-copy\"").unwrap()
		};
		assert!(media_first(&left));
		assert!(!media_first(&right));
		assert!(left.contains("src=\"/side.png\""));
	}

	#[rstest]
	fn test_split_without_image_uses_placeholder() {
		let html = hero(json!({ "variant": 2 }));
		assert!(html.contains("<svg class=\"pc-placeholder\""));
		assert!(!html.contains("<img"));
	}

	#[rstest]
	fn test_full_bleed_scrim_uses_background_tint() {
		// Act
		let html = hero(json!({
			"variant": 4,
			"backgroundImage": "/bg.jpg",
			"backgroundColor": "#102030",
			"overlayOpacity": 0.5
		}));

		// Assert
		assert!(html.contains("background-image: url('/bg.jpg')"));
		assert!(html.contains("linear-gradient(180deg, rgba(16,32,48,0.5) 0%, rgba(16,32,48,0.7) 100%)"));
		assert!(html.contains("<div class=\"pc-scrim\""));
	}

	#[rstest]
	#[case("red", "color-mix(in srgb, red 50%, transparent) 0%, color-mix(in srgb, red 70%, transparent) 100%")]
	#[case("rgb(0, 0, 0)", "color-mix(in srgb, rgb(0, 0, 0) 50%, transparent) 0%")]
	fn test_full_bleed_scrim_keeps_alpha_for_named_colors(#[case] color: &str, #[case] expected: &str) {
		// Act
		let html = hero(json!({
			"variant": 4,
			"backgroundImage": "/bg.jpg",
			"backgroundColor": color,
			"overlayOpacity": 0.5
		}));

		// Assert
		assert!(html.contains(expected), "{}", html);
		assert!(!html.contains(&format!("linear-gradient(180deg, {} 0%", color)));
	}

	#[rstest]
	fn test_negative_button_lift_emits_valid_transform() {
		// Act
		let html = hero(json!({ "primaryButtonStyle": { "hoverTransform": -3 } }));

		// Assert
		assert!(html.contains(".pc-btn-primary:hover {"));
		assert!(!html.contains("translateY(--"));
	}

	#[rstest]
	fn test_blank_secondary_label_hides_button() {
		let html = hero(json!({ "secondaryCta": { "label": "" } }));
		assert!(html.contains("pc-btn-primary"));
		assert!(!html.contains("pc-btn-secondary"));
	}

	#[rstest]
	fn test_text_is_escaped() {
		let html = hero(json!({ "heading": "<b>Bold</b>" }));
		assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
	}
}
