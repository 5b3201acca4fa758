//! Testimonials: card grids and a scrolling strip

use super::{css_value, empty_state, escape_css_rules, section_open, style_tag};
use crate::html::{escape_attr, escape_text, instance_id};
use pagecraft_model::Section;
use pagecraft_model::content::{Testimonial, TestimonialsContent};
use pagecraft_model::variant::TestimonialsVariant;
use pagecraft_style::{rgba, testimonial_hover_css};

pub(super) fn render(section: &Section, content: &TestimonialsContent) -> String {
	let id = instance_id("testimonials", &section.id);
	let variant = content.variant.effective();
	let accent = css_value(&content.accent_color);

	let mut css = format!(
		"#{id} {{ padding: 72px 24px; background-color: {bg}; color: {fg}; }}\n\
		 #{id} .pc-container {{ max-width: 1200px; margin: 0 auto; }}\n\
		 #{id} .pc-section-heading {{ text-align: center; font-size: 36px; margin: 0 0 12px; }}\n\
		 #{id} .pc-section-sub {{ text-align: center; opacity: 0.8; margin: 0 0 40px; }}\n\
		 #{id} .pc-quote-card {{ position: relative; display: flex; flex-direction: column; gap: 16px; padding: 28px; border-radius: 12px; background: {card}; }}\n\
		 #{id} .pc-quote-mark {{ font-size: 48px; line-height: 1; color: {accent}; }}\n\
		 #{id} .pc-quote-text {{ margin: 0; font-size: 17px; line-height: 1.6; flex: 1; }}\n\
		 #{id} .pc-quote-byline {{ display: flex; align-items: center; gap: 12px; }}\n\
		 #{id} .pc-quote-photo {{ width: 48px; height: 48px; border-radius: 50%; object-fit: cover; }}\n\
		 #{id} .pc-quote-initial {{ display: flex; align-items: center; justify-content: center; width: 48px; height: 48px; border-radius: 50%; background: {accent}; color: #ffffff; font-weight: 700; }}\n\
		 #{id} .pc-quote-author {{ font-weight: 600; }}\n\
		 #{id} .pc-quote-affiliation {{ font-size: 14px; opacity: 0.75; }}\n",
		id = id,
		bg = css_value(&content.background_color),
		fg = css_value(&content.text_color),
		card = css_value(&content.card_background),
		accent = accent,
	);

	let skin = match variant {
		TestimonialsVariant::GradientGrid => format!(
			"#{id} .pc-quote-card {{ background: linear-gradient(135deg, {from} 0%, {card} 100%); }}\n",
			id = id,
			from = css_value(&rgba(&content.accent_color, 0.12)),
			card = css_value(&content.card_background),
		),
		TestimonialsVariant::BorderGrid => format!(
			"#{id} .pc-quote-card {{ border: 1px solid #e2e8f0; border-left: 4px solid {accent}; }}\n",
			id = id,
			accent = accent,
		),
		TestimonialsVariant::ShadowGrid
		| TestimonialsVariant::Strip
		| TestimonialsVariant::Unknown(_) => format!(
			"#{id} .pc-quote-card {{ box-shadow: 0 4px 12px rgba(0,0,0,0.08); }}\n",
			id = id
		),
	};
	css.push_str(&skin);

	let layout = if variant == TestimonialsVariant::Strip {
		format!(
			"#{id} .pc-quote-list {{ display: flex; gap: 24px; overflow-x: auto; scroll-snap-type: x mandatory; padding: 8px 4px 16px; -webkit-overflow-scrolling: touch; }}\n\
			 #{id} .pc-quote-list > .pc-quote-card {{ flex: 0 0 min(360px, 85%); scroll-snap-align: start; }}\n",
			id = id
		)
	} else {
		format!(
			"#{id} .pc-quote-list {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px; }}\n",
			id = id
		)
	};
	css.push_str(&layout);
	css.push_str(&escape_css_rules(&testimonial_hover_css(
		&format!("#{} .pc-quote-card", id),
		content.hover_animation,
		content.animation_speed,
		content.easing,
		&accent,
	)));

	let mut body = String::from("<div class=\"pc-container\">");
	if !content.heading.is_empty() {
		body.push_str(&format!(
			"<h2 class=\"pc-section-heading\">{}</h2>",
			escape_text(&content.heading)
		));
	}
	if let Some(sub) = &content.subheading {
		body.push_str(&format!("<p class=\"pc-section-sub\">{}</p>", escape_text(sub)));
	}
	if content.items.is_empty() {
		body.push_str(&empty_state("No items"));
	} else {
		body.push_str(&format!(
			"<div class=\"pc-quote-list\" data-layout=\"{}\">",
			if variant == TestimonialsVariant::Strip { "strip" } else { "grid" }
		));
		for item in &content.items {
			body.push_str(&quote_card(item));
		}
		body.push_str("</div>");
	}
	body.push_str("</div>");

	format!(
		"{}{}{}</section>",
		section_open(section, &id, ""),
		style_tag(&css),
		body
	)
}

fn quote_card(item: &Testimonial) -> String {
	let avatar = match &item.photo {
		Some(photo) => format!(
			"<img class=\"pc-quote-photo\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
			escape_attr(photo),
			escape_attr(&item.author)
		),
		None => format!(
			"<span class=\"pc-quote-initial\" aria-hidden=\"true\">{}</span>",
			escape_text(&initial(&item.author))
		),
	};
	let affiliation = item
		.affiliation()
		.map(|a| {
			format!(
				"<div class=\"pc-quote-affiliation\">{}</div>",
				escape_text(&a)
			)
		})
		.unwrap_or_default();
	format!(
		"<figure class=\"pc-quote-card\"><span class=\"pc-quote-mark\" aria-hidden=\"true\">&ldquo;</span>\
		 <blockquote class=\"pc-quote-text\">{quote}</blockquote>\
		 <figcaption class=\"pc-quote-byline\">{avatar}<div><div class=\"pc-quote-author\">{author}</div>{affiliation}</div></figcaption></figure>",
		quote = escape_text(&item.quote),
		avatar = avatar,
		author = escape_text(&item.author),
		affiliation = affiliation,
	)
}

fn initial(name: &str) -> String {
	name.chars()
		.find(|c| c.is_alphanumeric())
		.map(|c| c.to_uppercase().collect())
		.unwrap_or_else(|| "?".to_string())
}
