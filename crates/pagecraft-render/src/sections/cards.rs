//! Card grid

use super::{css_value, empty_state, escape_css_rules, section_open, style_tag};
use crate::html::{escape_attr, escape_text, instance_id, link_attrs};
use crate::placeholder::image_or_placeholder;
use pagecraft_model::Section;
use pagecraft_model::content::{Card, CardsContent};
use pagecraft_model::variant::CardsVariant;
use pagecraft_style::resolve_card_css;

pub(super) fn render(section: &Section, content: &CardsContent) -> String {
	let id = instance_id("cards", &section.id);
	let variant = content.variant.effective();
	let skin = resolve_card_css(content.card_style, &content.custom);
	let columns = content.columns_per_row;

	let mut css = format!(
		"#{id} {{ padding: 64px 24px; background-color: {bg}; }}\n\
		 #{id} .pc-container {{ max-width: 1200px; margin: 0 auto; }}\n\
		 #{id} .pc-section-heading {{ text-align: center; font-size: 36px; margin: 0 0 12px; }}\n\
		 #{id} .pc-section-sub {{ text-align: center; color: #6b7280; margin: 0 0 40px; }}\n\
		 #{id} .pc-card-grid {{ display: grid; grid-template-columns: repeat({columns}, minmax(0, 1fr)); gap: 24px; }}\n\
		 #{id} .pc-card-link {{ display: block; color: inherit; text-decoration: none; }}\n\
		 #{id} .pc-card-title {{ font-size: 20px; margin: 0 0 8px; }}\n\
		 #{id} .pc-card-text {{ margin: 0; line-height: 1.6; }}\n\
		 #{id} .pc-card-icon {{ font-size: 32px; margin-bottom: 12px; }}\n\
		 #{id} .pc-card-badge {{ display: inline-block; font-size: 12px; font-weight: 600; padding: 2px 10px; border-radius: 999px; background: #dbeafe; color: #1d4ed8; margin-bottom: 12px; }}\n\
		 #{id} .pc-card-subtitle {{ font-size: 14px; opacity: 0.75; margin: 0 0 8px; }}\n\
		 #{id} .pc-card-media {{ margin: -24px -24px 16px; aspect-ratio: 16 / 9; overflow: hidden; }}\n\
		 #{id} .pc-card-media img {{ display: block; width: 100%; height: 100%; object-fit: cover; }}\n\
		 #{id} .pc-card-more {{ display: inline-block; margin-top: 12px; font-weight: 600; }}\n\
		 @media (max-width: 1024px) {{ #{id} .pc-card-grid {{ grid-template-columns: repeat({tablet}, minmax(0, 1fr)); }} }}\n\
		 @media (max-width: 640px) {{ #{id} .pc-card-grid {{ grid-template-columns: 1fr; }} }}\n",
		id = id,
		bg = css_value(&content.background_color),
		columns = columns,
		tablet = columns.min(2),
	);
	css.push_str(&escape_css_rules(&skin.rules(&format!("#{} .pc-card", id))));
	if variant == CardsVariant::Image {
		css.push_str(&format!("#{} .pc-card {{ overflow: hidden; }}\n", id));
	}

	let mut body = String::from("<div class=\"pc-container\">");
	if let Some(heading) = &content.heading {
		body.push_str(&format!(
			"<h2 class=\"pc-section-heading\">{}</h2>",
			escape_text(heading)
		));
	}
	if let Some(sub) = &content.subheading {
		body.push_str(&format!("<p class=\"pc-section-sub\">{}</p>", escape_text(sub)));
	}
	if content.cards.is_empty() {
		body.push_str(&empty_state("No items"));
	} else {
		body.push_str("<div class=\"pc-card-grid\">");
		for card in &content.cards {
			body.push_str(&render_card(card, variant));
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

fn render_card(card: &Card, variant: CardsVariant) -> String {
	let mut inner = String::new();
	match variant {
		CardsVariant::Icon => {
			if let Some(icon) = &card.icon {
				inner.push_str(&format!(
					"<div class=\"pc-card-icon\" aria-hidden=\"true\">{}</div>",
					escape_text(icon)
				));
			} else if let Some(badge) = &card.badge {
				inner.push_str(&format!(
					"<span class=\"pc-card-badge\">{}</span>",
					escape_text(badge)
				));
			}
		}
		CardsVariant::Image => {
			inner.push_str(&format!(
				"<div class=\"pc-card-media\">{}</div>",
				image_or_placeholder(card.image.as_deref(), &card.image_alt, "pc-card-image")
			));
		}
		CardsVariant::Simple | CardsVariant::Unknown(_) => {}
	}
	inner.push_str(&format!(
		"<h3 class=\"pc-card-title\">{}</h3>",
		escape_text(&card.title)
	));
	if variant == CardsVariant::Icon
		&& let Some(subtitle) = &card.subtitle
	{
		inner.push_str(&format!(
			"<p class=\"pc-card-subtitle\">{}</p>",
			escape_text(subtitle)
		));
	}
	if !card.description.is_empty() {
		inner.push_str(&format!(
			"<p class=\"pc-card-text\">{}</p>",
			escape_text(&card.description)
		));
	}
	match &card.link {
		Some(link) => {
			if let Some(text) = &card.link_text {
				inner.push_str(&format!(
					"<span class=\"pc-card-more\">{} &rarr;</span>",
					escape_text(text)
				));
			}
			format!(
				"<a class=\"pc-card-link\" {} aria-label=\"{}\"><article class=\"pc-card\">{}</article></a>",
				link_attrs(link),
				escape_attr(&card.title),
				inner
			)
		}
		None => format!("<article class=\"pc-card\">{}</article>", inner),
	}
}
