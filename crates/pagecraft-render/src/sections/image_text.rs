//! Image and text side by side, stacked, or under a full-width image

use super::{css_value, section_open, style_tag, styled_button};
use crate::html::{escape_text, instance_id};
use crate::placeholder::image_or_placeholder;
use pagecraft_model::content::{CallToAction, ImageTextContent};
use pagecraft_model::variant::ImageTextLayout;
use pagecraft_model::{ButtonVariant, Section};

pub(super) fn render(section: &Section, block: &ImageTextContent) -> String {
	let id = instance_id("imagetext", &section.id);
	let layout = block.layout;

	let direction = if layout.is_stacked() { "column" } else { "row" };
	let (text_order, image_order) = if layout.text_first() { (1, 2) } else { (2, 1) };
	let align = if layout.centers_text() { "center" } else { "left" };

	let mut css = format!(
		"#{id} {{ padding: {padding}; background-color: {bg}; color: {fg}; }}\n\
		 #{id} .pc-it-inner {{ display: flex; flex-direction: {direction}; align-items: center; gap: {gap}; max-width: 1100px; margin: 0 auto; }}\n\
		 #{id} .pc-it-text {{ order: {text_order}; text-align: {align}; }}\n\
		 #{id} .pc-it-media {{ order: {image_order}; border-radius: {radius}; overflow: hidden; }}\n\
		 #{id} .pc-it-media img {{ display: block; width: 100%; height: auto; }}\n\
		 #{id} .pc-it-heading {{ font-size: 36px; line-height: 1.2; margin: 0 0 12px; color: {heading}; }}\n\
		 #{id} .pc-it-sub {{ font-size: 20px; margin: 0 0 16px; opacity: 0.85; }}\n\
		 #{id} .pc-it-desc {{ font-size: 17px; line-height: 1.7; margin: 0 0 24px; }}\n",
		id = id,
		padding = css_value(&block.padding),
		bg = css_value(&block.background_color),
		fg = css_value(&block.text_color),
		direction = direction,
		gap = css_value(&block.gap),
		text_order = text_order,
		image_order = image_order,
		align = align,
		radius = css_value(&block.image_radius),
		heading = css_value(&block.heading_color),
	);

	let basis = match layout {
		ImageTextLayout::TextLeft | ImageTextLayout::TextRight => format!(
			"#{id} .pc-it-text, #{id} .pc-it-media {{ flex: 1 1 50%; min-width: 0; }}\n\
			 @media (max-width: 768px) {{ #{id} .pc-it-inner {{ flex-direction: column; }} #{id} .pc-it-text {{ order: 2; }} #{id} .pc-it-media {{ order: 1; }} }}\n",
			id = id
		),
		ImageTextLayout::TextTop | ImageTextLayout::TextBottom => format!(
			"#{id} .pc-it-text {{ max-width: 760px; }}\n\
			 #{id} .pc-it-media {{ width: 100%; }}\n",
			id = id
		),
		ImageTextLayout::Full => format!(
			"#{id} .pc-it-inner {{ max-width: none; }}\n\
			 #{id} .pc-it-media {{ width: 100%; border-radius: 0; }}\n\
			 #{id} .pc-it-text {{ max-width: 1100px; width: 100%; }}\n",
			id = id
		),
	};
	css.push_str(&basis);

	let mut text = format!(
		"<h2 class=\"pc-it-heading\">{}</h2>",
		escape_text(&block.heading)
	);
	if let Some(sub) = &block.subheading {
		text.push_str(&format!("<p class=\"pc-it-sub\">{}</p>", escape_text(sub)));
	}
	if !block.description.is_empty() {
		text.push_str(&format!(
			"<p class=\"pc-it-desc\">{}</p>",
			escape_text(&block.description)
		));
	}
	if let Some(label) = &block.button_text {
		let cta = CallToAction {
			label: label.clone(),
			url: block.button_url.clone(),
			variant: None,
		};
		let button = styled_button(&id, "pc-it-btn", &cta, &block.button_style, ButtonVariant::Solid);
		css.push_str(&button.css);
		text.push_str(&button.html);
	}

	let media = image_or_placeholder(block.image_url.as_deref(), &block.image_alt, "pc-it-image");
	let body = format!(
		"<div class=\"pc-it-inner\" data-layout=\"{layout}\"><div class=\"pc-it-text\">{text}</div><div class=\"pc-it-media\">{media}</div></div>",
		layout = layout.as_str(),
		text = text,
		media = media,
	);

	format!(
		"{}{}{}</section>",
		section_open(section, &id, ""),
		style_tag(&css),
		body
	)
}
