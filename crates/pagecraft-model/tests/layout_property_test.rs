//! Property-based tests for layouts and the lenient props readers

use pagecraft_model::content::SectionContent;
use pagecraft_model::variant::{CarouselVariant, HeroVariant};
use pagecraft_model::{PageLayout, Props, Section, SectionType};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_section_type() -> impl Strategy<Value = SectionType> {
	prop_oneof![
		Just(SectionType::Hero),
		Just(SectionType::Cards),
		Just(SectionType::Carousel),
		Just(SectionType::Testimonials),
		Just(SectionType::Blog),
		Just(SectionType::ImageTextBlock),
		Just(SectionType::Cta),
		"[a-z]{1,12}".prop_map(SectionType::from),
	]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::Bool),
		any::<i32>().prop_map(|n| json!(n)),
		(-1.0e6f64..1.0e6).prop_map(|n| json!(n)),
		".{0,16}".prop_map(Value::String),
	]
}

proptest! {
	#[test]
	fn prop_layout_json_round_trip(types in proptest::collection::vec(arb_section_type(), 0..12)) {
		// Arrange
		let sections = types
			.into_iter()
			.enumerate()
			.map(|(i, t)| Section::with_props(format!("s{}", i), t, Props::new()))
			.collect();
		let layout = PageLayout::from_sections(sections).unwrap();

		// Act
		let decoded = PageLayout::from_json(&layout.to_json().unwrap()).unwrap();

		// Assert
		prop_assert_eq!(decoded, layout);
	}

	#[test]
	fn prop_move_preserves_membership(len in 1usize..10, from_seed in any::<usize>(), to_seed in any::<usize>()) {
		// Arrange
		let mut layout = PageLayout::new();
		for _ in 0..len {
			layout.add_section(SectionType::Cards);
		}
		let mut before: Vec<String> = layout.iter().map(|s| s.id.clone()).collect();

		// Act
		layout.move_section(from_seed % len, to_seed % len).unwrap();

		// Assert
		let mut after: Vec<String> = layout.iter().map(|s| s.id.clone()).collect();
		before.sort();
		after.sort();
		prop_assert_eq!(before, after);
	}

	#[test]
	fn prop_variant_always_has_an_effective_layout(value in arb_scalar()) {
		// Arrange
		let props = Props::from_value(json!({ "variant": value }));

		// Act
		let hero = HeroVariant::from_props(&props, "variant").effective();
		let carousel = CarouselVariant::from_props(&props, "variant").effective();

		// Assert
		prop_assert!(!hero.is_unknown());
		prop_assert!(!carousel.is_unknown());
	}

	#[test]
	fn fuzz_views_accept_arbitrary_props(
		section_type in arb_section_type(),
		entries in proptest::collection::btree_map("[a-zA-Z]{1,16}", arb_scalar(), 0..12),
	) {
		// Arrange
		let map = entries.into_iter().collect::<serde_json::Map<String, Value>>();
		let section = Section::with_props("fuzz", section_type, Props::from_map(map));

		// Act & Assert - resolving never panics
		let _ = SectionContent::from_section(&section);
	}
}
