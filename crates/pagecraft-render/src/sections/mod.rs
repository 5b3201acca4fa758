//! Per-type section renderers
//!
//! [`render_section`] is the single entry point. It resolves the section's
//! props into its typed view and hands the view to the renderer for that
//! type. Renderers only borrow the section and never fail.

mod blog;
mod cards;
mod carousel;
mod cta;
mod hero;
mod image_text;
mod testimonials;

use crate::html::{Fragment, escape_attr, escape_css, escape_text, instance_id, link_attrs};
use pagecraft_model::content::{CallToAction, SectionContent};
use pagecraft_model::{ButtonStyle, ButtonVariant, Section};
use pagecraft_style::resolve_button_style;

/// Render one section to a self-contained fragment
pub fn render_section(section: &Section) -> Fragment {
	let content = SectionContent::from_section(section);
	tracing::debug!(
		id = %section.id,
		section_type = %section.section_type(),
		"rendering section"
	);
	let html = match &content {
		SectionContent::Hero(hero) => hero::render(section, hero),
		SectionContent::Cards(cards) => cards::render(section, cards),
		SectionContent::Carousel(carousel) => carousel::render(section, carousel),
		SectionContent::Testimonials(t) => testimonials::render(section, t),
		SectionContent::Blog(blog) => blog::render(section, blog),
		SectionContent::ImageText(block) => image_text::render(section, block),
		SectionContent::Cta(cta) => cta::render(section, cta),
		SectionContent::Unknown { type_name } => {
			tracing::warn!(
				id = %section.id,
				section_type = %type_name,
				"no renderer for section type, rendering title only"
			);
			render_fallback(section)
		}
	};
	Fragment::new(html)
}

/// Title-only fragment for section types without a renderer
pub fn render_fallback(section: &Section) -> String {
	let id = instance_id("section", &section.id);
	format!(
		"{open}<div class=\"pc-container pc-fallback\"><h2>{title}</h2></div></section>",
		open = section_open(section, &id, ""),
		title = escape_text(&section.display_title()),
	)
}

/// Opening `<section>` tag carrying the instance id and identifying attributes
pub(crate) fn section_open(section: &Section, dom_id: &str, style: &str) -> String {
	let style_attr = if style.is_empty() {
		String::new()
	} else {
		format!(" style=\"{}\"", escape_attr(style))
	};
	format!(
		"<section id=\"{id}\" class=\"pc-section pc-{kind}\" data-section-id=\"{sid}\" data-section-type=\"{kind}\"{style}>",
		id = dom_id,
		kind = escape_attr(section.section_type().as_str()),
		sid = escape_attr(&section.id),
		style = style_attr,
	)
}

/// `<style>` element, omitted when there are no rules
pub(crate) fn style_tag(css: &str) -> String {
	if css.trim().is_empty() {
		String::new()
	} else {
		format!("<style>{}</style>", css.replace("</", "<\\/"))
	}
}

/// Explicit empty-state fragment body
pub(crate) fn empty_state(message: &str) -> String {
	format!(
		"<div class=\"pc-empty\" style=\"padding: 32px; text-align: center; color: #6b7280;\">{}</div>",
		escape_text(message)
	)
}

/// A call-to-action button with its own scoped rules
pub(crate) struct StyledButton {
	/// Rules for the button class
	pub css: String,
	/// Anchor markup
	pub html: String,
}

/// Render one call-to-action button scoped under `#scope_id`.
///
/// The call to action's own variant wins over the style's; `fallback` applies
/// when neither sets one.
pub(crate) fn styled_button(
	scope_id: &str,
	class: &str,
	cta: &CallToAction,
	style: &ButtonStyle,
	fallback: ButtonVariant,
) -> StyledButton {
	let variant = cta.variant.or(style.variant).unwrap_or(fallback);
	let resolved = resolve_button_style(style).with_variant(variant);
	let selector = format!("#{} .{}", scope_id, class);
	StyledButton {
		css: escape_css_rules(&resolved.rules(&selector)),
		html: format!(
			"<a class=\"pc-btn {}\" {}>{}</a>",
			class,
			link_attrs(&cta.url),
			escape_text(&cta.label)
		),
	}
}

/// Primary and secondary buttons side by side
pub(crate) fn button_pair(
	scope_id: &str,
	primary: Option<(&CallToAction, &ButtonStyle)>,
	secondary: Option<(&CallToAction, &ButtonStyle)>,
) -> StyledButton {
	let mut css = String::new();
	let mut html = String::new();
	if let Some((cta, style)) = primary {
		let button = styled_button(scope_id, "pc-btn-primary", cta, style, ButtonVariant::Solid);
		css.push_str(&button.css);
		html.push_str(&button.html);
	}
	if let Some((cta, style)) = secondary {
		let button =
			styled_button(scope_id, "pc-btn-secondary", cta, style, ButtonVariant::Outline);
		css.push_str(&button.css);
		html.push_str(&button.html);
	}
	if !html.is_empty() {
		html = format!("<div class=\"pc-actions\">{}</div>", html);
	}
	StyledButton { css, html }
}

/// Neutralize `</` in generated rules; values inside are already resolved
pub(crate) fn escape_css_rules(css: &str) -> String {
	css.replace("</", "<\\/")
}

/// Escape a single editor-supplied CSS value
pub(crate) fn css_value(value: &str) -> String {
	escape_css(value)
}

/// Quote a URL for `url(...)`
pub(crate) fn css_url(url: &str) -> String {
	format!("url('{}')", escape_css(url).replace('\'', "%27"))
}
