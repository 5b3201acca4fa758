//! Call-to-action band

use super::{button_pair, css_url, css_value, section_open, style_tag};
use crate::html::{escape_text, instance_id};
use crate::placeholder::image_or_placeholder;
use pagecraft_model::Section;
use pagecraft_model::content::CtaContent;
use pagecraft_model::variant::CtaVariant;
use pagecraft_style::translucent;

pub(super) fn render(section: &Section, cta: &CtaContent) -> String {
	let id = instance_id("cta", &section.id);
	if cta.variant.is_unknown() {
		tracing::debug!(
			id = %section.id,
			variant = cta.variant.number(),
			"unknown cta variant, using centered layout"
		);
	}
	let variant = cta.variant.effective();

	let buttons = button_pair(
		&id,
		cta.primary_cta.as_ref().map(|c| (c, &cta.primary_button)),
		cta.secondary_cta.as_ref().map(|c| (c, &cta.secondary_button)),
	);

	let mut css = format!(
		"#{id} {{ position: relative; padding: 72px 24px; background-color: {bg}; color: {fg}; overflow: hidden; }}\n\
		 #{id} .pc-cta-inner {{ position: relative; z-index: 1; max-width: 1100px; margin: 0 auto; }}\n\
		 #{id} .pc-cta-headline {{ font-size: 38px; line-height: 1.2; margin: 0 0 12px; color: inherit; }}\n\
		 #{id} .pc-cta-subtext {{ font-size: 19px; margin: 0 0 28px; opacity: 0.9; }}\n\
		 #{id} .pc-actions {{ display: flex; flex-wrap: wrap; gap: 16px; }}\n",
		id = id,
		bg = css_value(&cta.background_color),
		fg = css_value(&cta.text_color),
	);

	let text = format!(
		"<h2 class=\"pc-cta-headline\">{}</h2><p class=\"pc-cta-subtext\">{}</p>{}",
		escape_text(&cta.headline),
		escape_text(&cta.subtext),
		buttons.html
	);

	let centered = format!(
		"#{id} .pc-cta-inner {{ text-align: center; max-width: 760px; }}\n\
		 #{id} .pc-actions {{ justify-content: center; }}\n",
		id = id
	);

	let body = match variant {
		CtaVariant::ImageLeft | CtaVariant::ImageRight => {
			css.push_str(&format!(
				"#{id} .pc-cta-split {{ display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }}\n\
				 #{id} .pc-cta-media {{ border-radius: 12px; overflow: hidden; }}\n\
				 #{id} .pc-cta-media img {{ display: block; width: 100%; height: auto; }}\n\
				 @media (max-width: 768px) {{ #{id} .pc-cta-split {{ grid-template-columns: 1fr; }} }}\n",
				id = id
			));
			let media = format!(
				"<div class=\"pc-cta-media\">{}</div>",
				image_or_placeholder(cta.image.as_deref(), &cta.image_alt, "pc-cta-image")
			);
			let copy = format!("<div class=\"pc-cta-copy\">{}</div>", text);
			let (first, second) = if variant == CtaVariant::ImageLeft {
				(media, copy)
			} else {
				(copy, media)
			};
			format!("<div class=\"pc-cta-inner pc-cta-split\">{}{}</div>", first, second)
		}
		CtaVariant::Background => {
			let image = cta.background_image.as_deref().or(cta.image.as_deref());
			if let Some(image) = image {
				css.push_str(&format!(
					"#{id} {{ background-image: {url}; background-size: cover; background-position: center; }}\n",
					id = id,
					url = css_url(image)
				));
			}
			css.push_str(&format!(
				"#{id} .pc-scrim {{ position: absolute; inset: 0; background: {tint}; }}\n",
				id = id,
				tint = css_value(&translucent(&cta.background_color, cta.overlay_opacity)),
			));
			css.push_str(&centered);
			format!(
				"<div class=\"pc-scrim\" aria-hidden=\"true\"></div><div class=\"pc-cta-inner\">{}</div>",
				text
			)
		}
		CtaVariant::Centered | CtaVariant::Unknown(_) => {
			css.push_str(&centered);
			format!("<div class=\"pc-cta-inner\">{}</div>", text)
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

	fn cta(props: serde_json::Value) -> String {
		render_section(&Section::with_props("cta-1", SectionType::Cta, Props::from_value(props)))
			.into_string()
	}

	#[rstest]
	fn test_defaults_render_two_buttons() {
		let html = cta(json!({}));
		assert!(html.contains("Ready to get started?"));
		assert!(html.contains(">Start Free Trial</a>"));
		assert!(html.contains(">Contact Sales</a>"));
	}

	#[rstest]
	fn test_unknown_variant_matches_centered() {
		assert_eq!(cta(json!({ "ctaVariant": 7 })), cta(json!({ "ctaVariant": 1 })));
	}

	#[rstest]
	fn test_variant_key_is_not_variant() {
		let html = cta(json!({ "variant": 2 }));
		assert!(!html.contains("pc-cta-split"));
	}

	#[rstest]
	#[case(2, true)]
	#[case(3, false)]
	fn test_split_order(#[case] variant: i64, #[case] media_first: bool) {
		let html = cta(json!({ "ctaVariant": variant, "image": "/cta.png" }));
		let media = html.find("pc-cta-media\"").unwrap();
		let copy = html.find("pc-cta-copy\"").unwrap();
		assert_eq!(media < copy, media_first);
	}

	#[rstest]
	fn test_background_scrim() {
		// Act
		let html = cta(json!({
			"ctaVariant": 4,
			"backgroundImage": "/bg.jpg",
			"backgroundColor": "#000000",
			"overlayOpacity": 0.4
		}));

		// Assert
		assert!(html.contains("url('/bg.jpg')"));
		assert!(html.contains("background: rgba(0,0,0,0.4);"));
	}

	#[rstest]
	fn test_background_scrim_with_named_color() {
		// Act
		let html = cta(json!({
			"ctaVariant": 4,
			"backgroundImage": "/bg.jpg",
			"backgroundColor": "navy",
			"overlayOpacity": 0.4
		}));

		// Assert
		assert!(html.contains("background: color-mix(in srgb, navy 40%, transparent);"));
		assert!(!html.contains("background: navy;"));
	}

	#[rstest]
	fn test_button_styles_are_independent() {
		// Act
		let html = cta(json!({
			"primaryButtonStyle": { "backgroundColor": "#111111" },
			"secondaryButtonStyle": { "variant": "ghost", "backgroundColor": "#222222" }
		}));

		// Assert
		assert!(html.contains("pc-btn-primary { display: inline-block;"));
		assert!(html.contains("background: #111111;"));
		assert!(html.contains("background: rgba(34,34,34,0.1);"));
	}
}
