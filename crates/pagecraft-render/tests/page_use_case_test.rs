//! End-to-end page scenarios: editing, assembling, reloading and previewing

use pagecraft_model::{
	FooterConfig, FooterLink, FooterSection, LinkOverrides, NavConfig, NavLink, PageLayout,
	SectionType,
};
use pagecraft_render::{
	Assembler, AssemblerSettings, CarouselState, NavMenuState, assemble_page, render_footer,
	render_section,
};
use rstest::rstest;
use serde_json::json;

fn nav() -> NavConfig {
	NavConfig {
		brand_text: Some("Acme".to_string()),
		logo: Some("/logo.svg".to_string()),
		links: vec![
			NavLink::new("Home", "/"),
			NavLink::new("Services", "#")
				.with_children(vec![NavLink::new("Design", "/design")]),
		],
		..NavConfig::default()
	}
}

fn footer(columns: usize) -> FooterConfig {
	FooterConfig {
		company_name: Some("Acme".to_string()),
		footer_sections: (0..columns)
			.map(|i| FooterSection {
				title: format!("Column {}", i),
				links: vec![FooterLink::new("Terms", "/terms")],
			})
			.collect(),
		..FooterConfig::default()
	}
}

fn edited_layout() -> PageLayout {
	let mut layout = PageLayout::new();
	let hero = layout.add_section(SectionType::Hero);
	let carousel = layout.add_section(SectionType::Carousel);
	layout.add_section(SectionType::Testimonials);
	layout.add_section(SectionType::Blog);
	layout
		.update_props(&hero, |props| {
			props.set("variant", 4);
			props.set("backgroundImage", "/media/hero.jpg");
		})
		.unwrap();
	layout
		.update_props(&carousel, |props| {
			props.set("variant", 3);
			props.set("autoScroll", true);
			props.set(
				"items",
				json!([
					{ "image": "/media/a.jpg", "type": "nature" },
					{ "image": "/media/b.jpg", "type": "city" }
				]),
			);
		})
		.unwrap();
	layout
}

#[rstest]
fn test_reloaded_layout_renders_byte_identical_content() {
	// Arrange
	let layout = edited_layout();
	let saved = assemble_page(&nav(), layout.sections(), &footer(2), "Home");
	let stored_layout = layout.to_json().unwrap();

	// Act
	let reloaded = PageLayout::from_json(&stored_layout).unwrap();
	let rerendered = assemble_page(&nav(), reloaded.sections(), &footer(2), "Home");

	// Assert
	assert_eq!(rerendered.as_str(), saved.as_str());
}

#[rstest]
fn test_same_type_instances_get_distinct_controllers() {
	// Arrange
	let mut layout = PageLayout::new();
	for _ in 0..2 {
		let id = layout.add_section(SectionType::Carousel);
		layout
			.update_props(&id, |props| {
				props.set("items", json!([{}, {}]));
			})
			.unwrap();
	}

	// Act
	let html: Vec<String> = layout
		.iter()
		.map(|s| render_section(s).into_string())
		.collect();

	// Assert
	let controller = |h: &str| {
		let start = h.find("window.").unwrap() + "window.".len();
		h[start..].split('=').next().unwrap().to_string()
	};
	assert_ne!(controller(&html[0]), controller(&html[1]));
}

#[rstest]
#[case(1, "repeat(2, minmax(0, 1fr))", "repeat(2, minmax(0, 1fr))")]
#[case(3, "repeat(4, minmax(0, 1fr))", "repeat(3, minmax(0, 1fr))")]
fn test_footer_grid_collapses(#[case] columns: usize, #[case] wide: &str, #[case] tablet: &str) {
	// Act
	let html = render_footer(&footer(columns), &LinkOverrides::new()).into_string();

	// Assert
	assert!(html.contains(&format!("grid-template-columns: {};", wide)));
	assert!(html.contains(&format!(
		"@media (max-width: 1024px) {{ #pc-footer .pc-footer-grid {{ grid-template-columns: {}; }} }}",
		tablet
	)));
	assert!(html.contains("grid-template-columns: 1fr; text-align: center;"));
}

#[rstest]
fn test_preview_absolutizes_assets_but_not_external_links() {
	// Arrange
	let mut layout = edited_layout();
	let cards = layout.add_section(SectionType::Cards);
	layout
		.update_props(&cards, |props| {
			props.set(
				"cards",
				json!([{ "title": "Out", "link": "https://example.com/" }, { "title": "In", "link": "/pricing" }]),
			);
		})
		.unwrap();
	let assembler = Assembler::new(AssemblerSettings::new().preview_origin("https://acme.test"));
	let doc = assembler.assemble(
		&nav(),
		layout.sections(),
		&footer(1),
		&LinkOverrides::new(),
		"Preview",
	);

	// Act
	let origin = assembler.settings().preview_origin.clone().unwrap();
	let preview = doc.for_preview(&origin).into_string();

	// Assert
	assert!(preview.contains("src=\"https://acme.test/logo.svg\""));
	assert!(preview.contains("url('https://acme.test/media/hero.jpg')"));
	assert!(preview.contains("src=\"https://acme.test/media/a.jpg\""));
	assert!(preview.contains("href=\"https://acme.test/pricing\""));
	assert!(preview.contains("href=\"https://example.com/\""));
	assert!(!preview.contains("src=\"/"));
}

#[rstest]
fn test_nav_menu_click_then_outside_click_clears_everything() {
	// Arrange
	let html = pagecraft_render::render_nav(&nav()).into_string();
	let submenus = html.matches("data-has-children").count();
	let mut menu = NavMenuState::new(submenus);

	// Act
	menu.toggle();
	menu.toggle_submenu(0);
	menu.hover_submenu(0, true);
	menu.click_outside();

	// Assert
	assert_eq!(submenus, 1);
	assert!(!menu.is_open());
	assert!(!menu.submenu_visible(0));
}

#[rstest]
fn test_two_item_autoscroll_carousel_flips_then_wraps() {
	// Arrange
	let mut layout = PageLayout::new();
	let id = layout.add_section(SectionType::Carousel);
	layout
		.update_props(&id, |props| {
			props.set("variant", 1);
			props.set("autoScroll", true);
			props.set("items", json!([{ "title": "A" }, { "title": "B" }]));
		})
		.unwrap();
	let html = render_section(layout.section(&id).unwrap()).into_string();
	let slides = html.matches("data-slide=").count();
	let mut state = CarouselState::new(slides, html.contains("if(true&&count>1)"));

	// Act & Assert
	state.tick();
	assert_eq!(state.index(), Some(1));
	state.tick();
	assert_eq!(state.index(), Some(0));
}
