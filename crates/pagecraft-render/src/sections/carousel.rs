//! Carousel: slideshow, review cards, typed gallery and paged grid
//!
//! Markup is emitted in its initial state (first slide active, first page
//! shown) so the section reads correctly before its script runs.

use super::{css_url, css_value, empty_state, section_open, style_tag};
use crate::html::{controller_name, escape_attr, escape_text, instance_id};
use crate::placeholder::{image_or_placeholder, image_placeholder};
use crate::scripts::{
	CAROUSEL_SCRIPT, GALLERY_SCRIPT, ITEMS_PER_PAGE, PAGE_INTERVAL_MS, PAGED_SCRIPT,
	SLIDE_INTERVAL_MS, json_array,
};
use pagecraft_model::Section;
use pagecraft_model::content::{CarouselContent, CarouselItem};
use pagecraft_model::variant::CarouselVariant;

struct Instance {
	id: String,
	controller: String,
}

pub(super) fn render(section: &Section, content: &CarouselContent) -> String {
	let instance = Instance {
		id: instance_id("carousel", &section.id),
		controller: controller_name("carousel", &section.id),
	};
	if content.variant.is_unknown() {
		tracing::debug!(
			id = %section.id,
			variant = content.variant.number(),
			"unknown carousel variant, using simple slideshow"
		);
	}
	let variant = content.variant.effective();
	let id = &instance.id;

	let mut css = format!(
		"#{id} {{ padding: 64px 24px; background-color: {bg}; }}\n\
		 #{id} .pc-container {{ max-width: 1100px; margin: 0 auto; }}\n\
		 #{id} .pc-section-heading {{ text-align: center; font-size: 36px; margin: 0 0 32px; }}\n\
		 #{id} .pc-carousel-viewport {{ position: relative; height: {height}; border-radius: 12px; overflow: hidden; }}\n\
		 #{id} .pc-slide {{ position: absolute; inset: 0; opacity: 0; visibility: hidden; transition: opacity 0.5s ease; }}\n\
		 #{id} .pc-slide.is-active {{ opacity: 1; visibility: visible; }}\n\
		 #{id} .pc-slide img {{ display: block; width: 100%; height: 100%; object-fit: cover; }}\n\
		 #{id} .pc-slide-caption {{ position: absolute; left: 0; right: 0; bottom: 0; padding: 24px; color: #ffffff; background: linear-gradient(transparent, rgba(0,0,0,0.6)); font-size: 20px; font-weight: 600; }}\n\
		 #{id} .pc-dots {{ display: flex; justify-content: center; gap: 8px; margin-top: 16px; }}\n\
		 #{id} .pc-dot {{ width: 10px; height: 10px; padding: 0; border: none; border-radius: 50%; background: #cbd5e1; cursor: pointer; }}\n\
		 #{id} .pc-dot.is-active {{ background: {accent}; }}\n\
		 #{id} .pc-arrow {{ position: absolute; top: 50%; transform: translateY(-50%); z-index: 2; width: 40px; height: 40px; border: none; border-radius: 50%; background: rgba(255,255,255,0.85); cursor: pointer; font-size: 20px; }}\n\
		 #{id} .pc-arrow-prev {{ left: 12px; }}\n\
		 #{id} .pc-arrow-next {{ right: 12px; }}\n",
		id = id,
		bg = css_value(&content.background_color),
		height = css_value(&content.height),
		accent = css_value(&content.accent_color),
	);

	let mut body = String::from("<div class=\"pc-container\">");
	if let Some(heading) = &content.heading {
		body.push_str(&format!(
			"<h2 class=\"pc-section-heading\">{}</h2>",
			escape_text(heading)
		));
	}

	if content.items.is_empty() {
		body.push_str(&empty_state("No items"));
		body.push_str("</div>");
		return format!(
			"{}{}{}</section>",
			section_open(section, id, ""),
			style_tag(&css),
			body
		);
	}

	let (markup, script) = match variant {
		CarouselVariant::Reviews => {
			css.push_str(&review_css(id));
			slideshow(&instance, content, review_slide)
		}
		CarouselVariant::Gallery => {
			css.push_str(&format!(
				"#{id} .pc-categories {{ display: flex; flex-wrap: wrap; justify-content: center; gap: 8px; margin-bottom: 20px; }}\n\
				 #{id} .pc-category {{ padding: 6px 16px; border: 1px solid #cbd5e1; border-radius: 999px; background: #ffffff; cursor: pointer; }}\n\
				 #{id} .pc-category.is-active {{ background: {accent}; border-color: {accent}; color: #ffffff; }}\n",
				id = id,
				accent = css_value(&content.accent_color),
			));
			gallery(&instance, content)
		}
		CarouselVariant::PagedGrid => {
			css.push_str(&paged_css(id));
			paged(&instance, content)
		}
		CarouselVariant::Simple | CarouselVariant::Unknown(_) => {
			slideshow(&instance, content, simple_slide)
		}
	};
	body.push_str(&markup);
	body.push_str("</div>");

	format!(
		"{}{}{}{}</section>",
		section_open(section, id, ""),
		style_tag(&css),
		body,
		script
	)
}

fn simple_slide(item: &CarouselItem) -> String {
	let alt = item.title.as_deref().unwrap_or("");
	let mut html = image_or_placeholder(item.image.as_deref(), alt, "pc-slide-image");
	if let Some(title) = &item.title {
		html.push_str(&format!(
			"<div class=\"pc-slide-caption\">{}</div>",
			escape_text(title)
		));
	}
	html
}

fn review_css(id: &str) -> String {
	format!(
		"#{id} .pc-review {{ position: absolute; inset: 0; background-size: cover; background-position: center; }}\n\
		 #{id} .pc-review-backdrop {{ position: absolute; inset: 0; }}\n\
		 #{id} .pc-review-overlay {{ position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: center; align-items: center; gap: 16px; padding: 32px; text-align: center; color: #ffffff; background: rgba(0,0,0,0.5); }}\n\
		 #{id} .pc-stars {{ color: #facc15; font-size: 24px; letter-spacing: 4px; }}\n\
		 #{id} .pc-review-text {{ font-size: 22px; font-style: italic; max-width: 640px; margin: 0; }}\n\
		 #{id} .pc-review-author {{ font-weight: 600; }}\n",
		id = id
	)
}

fn review_slide(item: &CarouselItem) -> String {
	let background = item.background_image.as_deref().or(item.image.as_deref());
	let mut html = match background {
		Some(url) => format!(
			"<div class=\"pc-review\" style=\"background-image: {};\">",
			escape_attr(&css_url(url))
		),
		None => format!(
			"<div class=\"pc-review\"><div class=\"pc-review-backdrop\">{}</div>",
			image_placeholder("Background image")
		),
	};
	html.push_str("<div class=\"pc-review-overlay\">");
	html.push_str(&format!(
		"<div class=\"pc-stars\" aria-label=\"{n} out of 5 stars\">{stars}</div>",
		n = item.star_count(),
		stars = "★".repeat(item.star_count())
	));
	if let Some(text) = &item.text {
		html.push_str(&format!(
			"<blockquote class=\"pc-review-text\">&ldquo;{}&rdquo;</blockquote>",
			escape_text(text)
		));
	}
	if let Some(author) = &item.author {
		html.push_str(&format!(
			"<div class=\"pc-review-author\">{}</div>",
			escape_text(author)
		));
	}
	html.push_str("</div></div>");
	html
}

fn slide_markup(
	index: usize,
	item: &CarouselItem,
	inner: &str,
	extra_attrs: &str,
) -> String {
	format!(
		"<div class=\"pc-slide{active}\" data-slide=\"{index}\" data-item-id=\"{item_id}\"{extra} aria-hidden=\"{hidden}\">{inner}</div>",
		active = if index == 0 { " is-active" } else { "" },
		index = index,
		item_id = escape_attr(&item.id),
		extra = extra_attrs,
		hidden = if index == 0 { "false" } else { "true" },
		inner = inner,
	)
}

fn dots(instance: &Instance, count: usize) -> String {
	let mut html = String::from("<div class=\"pc-dots\" role=\"tablist\">");
	for i in 0..count {
		html.push_str(&format!(
			"<button type=\"button\" class=\"pc-dot{active}\" data-dot=\"{i}\" aria-label=\"Go to slide {n}\" onclick=\"{ctrl}.go({i})\"></button>",
			active = if i == 0 { " is-active" } else { "" },
			i = i,
			n = i + 1,
			ctrl = instance.controller,
		));
	}
	html.push_str("</div>");
	html
}

fn arrows(instance: &Instance, label: &str) -> String {
	format!(
		"<button type=\"button\" class=\"pc-arrow pc-arrow-prev\" aria-label=\"Previous {label}\" onclick=\"{ctrl}.prev()\">&#8249;</button>\
		 <button type=\"button\" class=\"pc-arrow pc-arrow-next\" aria-label=\"Next {label}\" onclick=\"{ctrl}.next()\">&#8250;</button>",
		label = label,
		ctrl = instance.controller,
	)
}

fn auto_flag(content: &CarouselContent) -> &'static str {
	if content.auto_scroll { "true" } else { "false" }
}

fn slideshow(
	instance: &Instance,
	content: &CarouselContent,
	slide: fn(&CarouselItem) -> String,
) -> (String, String) {
	let mut html = String::from("<div class=\"pc-carousel-viewport\" data-index=\"0\">");
	for (i, item) in content.items.iter().enumerate() {
		html.push_str(&slide_markup(i, item, &slide(item), ""));
	}
	html.push_str("</div>");
	html.push_str(&dots(instance, content.items.len()));
	let interval = SLIDE_INTERVAL_MS.to_string();
	let script = CAROUSEL_SCRIPT.tag(&[
		("ID", &instance.id),
		("CONTROLLER", &instance.controller),
		("AUTO", auto_flag(content)),
		("INTERVAL", &interval),
	]);
	(html, script)
}

fn gallery(instance: &Instance, content: &CarouselContent) -> (String, String) {
	let categories = content.categories();
	let mut html = String::from("<div class=\"pc-categories\">");
	for (i, category) in categories.iter().enumerate() {
		html.push_str(&format!(
			"<button type=\"button\" class=\"pc-category\" data-category=\"{i}\" onclick=\"{ctrl}.category({i})\">{label}</button>",
			i = i,
			ctrl = instance.controller,
			label = escape_text(category),
		));
	}
	html.push_str("</div>");
	html.push_str("<div class=\"pc-carousel-viewport\" data-index=\"0\">");
	html.push_str(&arrows(instance, "item"));
	for (i, item) in content.items.iter().enumerate() {
		let attrs = format!(" data-type=\"{}\"", escape_attr(&item.item_type));
		let inner = image_or_placeholder(
			item.image.as_deref(),
			item.title.as_deref().unwrap_or(&item.item_type),
			"pc-slide-image",
		);
		html.push_str(&slide_markup(i, item, &inner, &attrs));
	}
	html.push_str("</div>");
	html.push_str(&dots(instance, content.items.len()));

	let interval = SLIDE_INTERVAL_MS.to_string();
	let categories_json = json_array(categories.as_slice());
	let script = GALLERY_SCRIPT.tag(&[
		("ID", &instance.id),
		("CONTROLLER", &instance.controller),
		("AUTO", auto_flag(content)),
		("INTERVAL", &interval),
		("CATEGORIES", &categories_json),
	]);
	(html, script)
}

fn paged_css(id: &str) -> String {
	format!(
		"#{id} .pc-paged {{ position: relative; overflow: hidden; }}\n\
		 #{id} .pc-track {{ display: flex; transition: transform 0.5s ease; }}\n\
		 #{id} .pc-page {{ flex: 0 0 100%; display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 24px; padding: 0 56px; box-sizing: border-box; }}\n\
		 #{id} .pc-grid-item {{ background: #ffffff; border-radius: 12px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }}\n\
		 #{id} .pc-grid-media {{ aspect-ratio: 4 / 3; overflow: hidden; }}\n\
		 #{id} .pc-grid-media img {{ display: block; width: 100%; height: 100%; object-fit: cover; }}\n\
		 #{id} .pc-grid-body {{ padding: 16px; }}\n\
		 #{id} .pc-grid-body h3 {{ margin: 0 0 8px; font-size: 18px; }}\n\
		 #{id} .pc-grid-body p {{ margin: 0; color: #4b5563; }}\n\
		 @media (max-width: 768px) {{ #{id} .pc-page {{ grid-template-columns: 1fr; }} }}\n",
		id = id
	)
}

fn paged(instance: &Instance, content: &CarouselContent) -> (String, String) {
	let pages = content.items.len().div_ceil(ITEMS_PER_PAGE);
	let mut html = format!(
		"<div class=\"pc-paged\" data-page=\"0\" data-pages=\"{}\">",
		pages
	);
	if pages > 1 {
		html.push_str(&arrows(instance, "page"));
	}
	html.push_str("<div class=\"pc-track\" data-track>");
	for chunk in content.items.chunks(ITEMS_PER_PAGE) {
		html.push_str("<div class=\"pc-page\">");
		for item in chunk {
			html.push_str(&format!(
				"<div class=\"pc-grid-item\" data-item data-item-id=\"{}\"><div class=\"pc-grid-media\">{}</div><div class=\"pc-grid-body\">",
				escape_attr(&item.id),
				image_or_placeholder(
					item.image.as_deref(),
					item.title.as_deref().unwrap_or(""),
					"pc-grid-image"
				)
			));
			if let Some(title) = &item.title {
				html.push_str(&format!("<h3>{}</h3>", escape_text(title)));
			}
			if let Some(description) = &item.description {
				html.push_str(&format!("<p>{}</p>", escape_text(description)));
			}
			html.push_str("</div></div>");
		}
		html.push_str("</div>");
	}
	html.push_str("</div></div>");

	let interval = PAGE_INTERVAL_MS.to_string();
	let per_page = ITEMS_PER_PAGE.to_string();
	let script = PAGED_SCRIPT.tag(&[
		("ID", &instance.id),
		("CONTROLLER", &instance.controller),
		("AUTO", auto_flag(content)),
		("INTERVAL", &interval),
		("PER_PAGE", &per_page),
	]);
	(html, script)
}

#[cfg(test)]
mod tests {
	use crate::sections::render_section;
	use pagecraft_model::{Props, Section, SectionType};
	use rstest::rstest;
	use serde_json::json;

	fn carousel(id: &str, props: serde_json::Value) -> String {
		render_section(&Section::with_props(
			id,
			SectionType::Carousel,
			Props::from_value(props),
		))
		.into_string()
	}

	#[rstest]
	#[case(1)]
	#[case(2)]
	#[case(3)]
	#[case(4)]
	fn test_empty_items_render_no_items(#[case] variant: i64) {
		let html = carousel("c", json!({ "variant": variant, "items": [] }));
		assert!(html.contains("No items"));
		assert!(!html.contains("<script"));
	}

	#[rstest]
	fn test_simple_slideshow_markup() {
		// Act
		let html = carousel(
			"c1",
			json!({ "autoScroll": true, "items": [ { "image": "/a.jpg", "title": "A" }, { "title": "B" } ] }),
		);

		// Assert
		assert!(html.contains("class=\"pc-slide is-active\" data-slide=\"0\""));
		assert!(html.contains("class=\"pc-slide\" data-slide=\"1\""));
		assert_eq!(html.matches("data-dot=").count(), 2);
		assert!(html.contains("if(true&&count>1){setInterval(function(){show(index+1);},4000);}"));
		assert!(html.contains("pc-placeholder"));
		assert!(!html.contains("pc-arrow-prev\""));
	}

	#[rstest]
	fn test_instances_do_not_collide() {
		let a = carousel("first", json!({ "items": [{}] }));
		let b = carousel("second", json!({ "items": [{}] }));
		let id_of = |html: &str| html.split('"').nth(1).unwrap_or_default().to_string();
		assert_ne!(id_of(&a), id_of(&b));
	}

	#[rstest]
	#[case(json!(3.6), 4)]
	#[case(json!(-2), 0)]
	#[case(json!(11), 5)]
	fn test_review_stars_are_clamped(#[case] stars: serde_json::Value, #[case] expected: usize) {
		let html = carousel(
			"r",
			json!({ "variant": 2, "items": [{ "backgroundImage": "/bg.jpg", "stars": stars, "text": "Great" }] }),
		);
		let rendered = format!(">{}</div>", "★".repeat(expected));
		assert!(html.contains(&rendered));
		assert!(html.contains("&ldquo;Great&rdquo;"));
	}

	#[rstest]
	fn test_gallery_categories_and_arrows() {
		// Act
		let html = carousel(
			"g",
			json!({ "variant": 3, "items": [ { "type": "nature" }, {}, { "type": "nature" }, { "type": "</script>" } ] }),
		);

		// Assert
		assert_eq!(html.matches("class=\"pc-category\"").count(), 3);
		assert!(html.contains("data-type=\"default\""));
		assert!(html.contains("pc-arrow-prev"));
		assert!(html.contains(r#"var categories=["nature","default","<\/script>"];"#));
		assert_eq!(html.matches("</script>").count(), 1);
	}

	#[rstest]
	fn test_paged_grid_chunks_by_three() {
		// Act
		let html = carousel(
			"p",
			json!({ "variant": 4, "autoScroll": true, "items": [{}, {}, {}, {}, {}, {}, {}] }),
		);

		// Assert
		assert_eq!(html.matches("class=\"pc-page\"").count(), 3);
		assert!(html.contains("data-pages=\"3\""));
		assert!(html.contains(",5000);}"));
		assert!(!html.contains("data-dot="));
	}

	#[rstest]
	fn test_single_page_grid_has_no_arrows() {
		let html = carousel("p1", json!({ "variant": 4, "items": [{}, {}] }));
		assert!(!html.contains("pc-arrow-prev\""));
		assert!(!html.contains("onclick="));
	}
}
