//! Starting props for newly created sections
//!
//! These are what the editor shows when a section is first added. Renderers
//! never depend on them: every key here also has a fallback in the typed
//! views, so a section whose props were cleared still renders.

use crate::props::Props;
use crate::section::SectionType;
use serde_json::json;

/// Default props for a new section of `section_type`.
///
/// Unknown types start with empty props.
pub fn default_props(section_type: &SectionType) -> Props {
	let value = match section_type {
		SectionType::Hero => json!({
			"variant": 1,
			"heading": "Welcome to Our Website",
			"subheading": "Build something amazing with our platform",
			"primaryCta": { "label": "Get Started", "url": "#" },
			"secondaryCta": { "label": "Learn More", "url": "#" },
			"backgroundColor": "#1e293b",
			"textColor": "#ffffff",
			"primaryButtonStyle": {},
			"secondaryButtonStyle": { "variant": "outline" }
		}),
		SectionType::Cards => json!({
			"variant": 1,
			"heading": "Our Features",
			"columnsPerRow": 3,
			"cardStyle": "shadow",
			"cards": [
				{ "title": "Fast", "description": "Pages render in milliseconds." },
				{ "title": "Flexible", "description": "Mix and match sections freely." },
				{ "title": "Reliable", "description": "Output works in any browser." }
			],
			"customStyle": {}
		}),
		SectionType::Carousel => json!({
			"variant": 1,
			"autoScroll": false,
			"items": [
				{ "id": "item-1", "title": "First slide" },
				{ "id": "item-2", "title": "Second slide" }
			]
		}),
		SectionType::Testimonials => json!({
			"variant": 1,
			"heading": "What Our Clients Say",
			"hoverAnimation": "lift",
			"animationSpeed": "normal",
			"easing": "ease",
			"testimonials": [
				{ "quote": "This product changed how we work.", "author": "Jane Doe", "role": "CEO", "company": "Acme" }
			]
		}),
		SectionType::Blog => json!({
			"title": "Untitled Post",
			"blocks": [
				{ "type": "paragraph", "content": "Start writing your story here." }
			]
		}),
		SectionType::ImageTextBlock => json!({
			"layout": "text-left",
			"text": {
				"heading": "Tell Your Story",
				"description": "Share what makes your product or team unique.",
				"buttonText": "Learn More",
				"buttonUrl": "#"
			},
			"image": { "url": "", "alt": "" },
			"style": {},
			"buttonStyle": {}
		}),
		SectionType::Cta => json!({
			"ctaVariant": 1,
			"headline": "Ready to get started?",
			"subtext": "Join thousands of teams already building with us.",
			"primaryCta": { "label": "Start Free Trial", "url": "#" },
			"secondaryCta": { "label": "Contact Sales", "url": "#" },
			"backgroundColor": "#2563eb",
			"textColor": "#ffffff",
			"primaryButtonStyle": { "backgroundColor": "#ffffff", "textColor": "#2563eb" },
			"secondaryButtonStyle": { "variant": "outline", "borderColor": "#ffffff", "textColor": "#ffffff" }
		}),
		SectionType::Other(_) => json!({}),
	};
	Props::from_value(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::SectionContent;
	use crate::section::Section;
	use rstest::rstest;

	#[rstest]
	fn test_every_known_type_has_defaults() {
		for section_type in SectionType::KNOWN {
			assert!(
				!default_props(&section_type).is_empty(),
				"no defaults for {}",
				section_type
			);
		}
	}

	#[rstest]
	fn test_unknown_type_has_empty_defaults() {
		assert!(default_props(&SectionType::from("pricing")).is_empty());
	}

	#[rstest]
	fn test_defaults_agree_with_view_fallbacks() {
		// Arrange
		let with_defaults = Section::with_props("a", SectionType::Hero, default_props(&SectionType::Hero));
		let empty = Section::with_props("b", SectionType::Hero, Props::new());

		// Act
		let (SectionContent::Hero(a), SectionContent::Hero(b)) = (
			SectionContent::from_section(&with_defaults),
			SectionContent::from_section(&empty),
		) else {
			panic!("hero sections must resolve to hero content");
		};

		// Assert
		assert_eq!(a.heading, b.heading);
		assert_eq!(a.background_color, b.background_color);
		assert_eq!(a.primary_cta, b.primary_cta);
	}
}
