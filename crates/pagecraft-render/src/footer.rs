//! Footer
//!
//! A company column followed by one column per footer section. The grid
//! holds every column on wide screens, at most three below
//! [`FOOTER_TABLET_PX`] and a single centered column below
//! [`FOOTER_MOBILE_PX`].

use crate::html::{Fragment, escape_attr, escape_text, link_attrs};
use crate::sections::{css_value, escape_css_rules, style_tag};
use pagecraft_model::{FooterConfig, FooterLink, LinkOverrides};
use pagecraft_style::{DEFAULT_FOOTER_STYLE, ResolvedFooterStyle, resolve_footer_style};

/// DOM id of the footer root
pub const FOOTER_ID: &str = "pc-footer";

/// Width below which the grid drops to at most three columns
pub const FOOTER_TABLET_PX: u32 = 1024;

/// Width below which the grid collapses to one centered column
pub const FOOTER_MOBILE_PX: u32 = 640;

/// Render the footer, substituting override labels where a column has them
pub fn render_footer(config: &FooterConfig, overrides: &LinkOverrides) -> Fragment {
	let style = resolve_footer_style(&config.style, &DEFAULT_FOOTER_STYLE);
	let sections = &config.footer_sections;
	for column in overrides.columns() {
		if column >= sections.len() && overrides.labels(column).is_some() {
			tracing::warn!(
				column,
				columns = sections.len(),
				"footer link override targets a missing column"
			);
		}
	}

	let mut html = format!("<footer id=\"{}\" class=\"pc-footer\">", FOOTER_ID);
	html.push_str(&style_tag(&footer_css(&style, sections.len() + 1)));
	html.push_str("<div class=\"pc-footer-grid\">");
	html.push_str(&company_column(config));

	for (index, section) in sections.iter().enumerate() {
		let links: Vec<FooterLink> = match overrides.labels(index) {
			Some(labels) => labels
				.into_iter()
				.map(|label| FooterLink::new(label, "#"))
				.collect(),
			None => section.links.clone(),
		};
		html.push_str(&format!(
			"<div class=\"pc-footer-column\" data-column=\"{}\"><h4 class=\"pc-footer-heading\">{}</h4><ul class=\"pc-footer-links\">",
			index,
			escape_text(&section.title)
		));
		for link in &links {
			html.push_str(&format!(
				"<li><a class=\"pc-footer-link\" {}>{}</a></li>",
				link_attrs(&link.href),
				escape_text(&link.label)
			));
		}
		html.push_str("</ul></div>");
	}
	html.push_str("</div>");

	if let Some(line) = copyright(config) {
		html.push_str(&format!(
			"<div class=\"pc-footer-bottom\"><p>{}</p></div>",
			escape_text(&line)
		));
	}
	html.push_str("</footer>");
	Fragment::new(html)
}

fn company_column(config: &FooterConfig) -> String {
	let mut html = String::from("<div class=\"pc-footer-company\">");
	if let Some(logo) = &config.logo {
		html.push_str(&format!(
			"<img class=\"pc-footer-logo\" src=\"{}\" alt=\"{}\">",
			escape_attr(logo),
			escape_attr(config.company_name.as_deref().unwrap_or("Logo"))
		));
	}
	if let Some(name) = &config.company_name {
		html.push_str(&format!(
			"<h3 class=\"pc-footer-company-name\">{}</h3>",
			escape_text(name)
		));
	}
	if let Some(description) = &config.description {
		html.push_str(&format!(
			"<p class=\"pc-footer-description\">{}</p>",
			escape_text(description)
		));
	}
	html.push_str("</div>");
	html
}

/// Explicit copyright line, else one derived from the company name.
///
/// No year is inserted so re-rendering a stored page stays byte-identical.
fn copyright(config: &FooterConfig) -> Option<String> {
	if let Some(line) = config.copyright.as_deref().filter(|c| !c.trim().is_empty()) {
		return Some(line.to_string());
	}
	config
		.company_name
		.as_deref()
		.filter(|n| !n.trim().is_empty())
		.map(|name| format!("\u{a9} {}. All rights reserved.", name))
}

fn footer_css(style: &ResolvedFooterStyle, columns: usize) -> String {
	let id = FOOTER_ID;
	let mut css = format!(
		"#{id} {{ padding: {padding}; background-color: {bg}; color: {fg}; }}\n\
		 #{id} .pc-footer-grid {{ display: grid; grid-template-columns: repeat({columns}, minmax(0, 1fr)); gap: 32px; max-width: 1200px; margin: 0 auto; }}\n\
		 #{id} .pc-footer-logo {{ height: 36px; width: auto; margin-bottom: 12px; }}\n\
		 #{id} .pc-footer-company-name {{ margin: 0 0 12px; font-size: 20px; color: {heading}; }}\n\
		 #{id} .pc-footer-description {{ margin: 0; line-height: 1.6; }}\n\
		 #{id} .pc-footer-heading {{ margin: 0 0 16px; font-size: 14px; text-transform: uppercase; letter-spacing: 0.05em; color: {heading}; }}\n\
		 #{id} .pc-footer-links {{ list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 10px; }}\n\
		 #{id} .pc-footer-bottom {{ max-width: 1200px; margin: 40px auto 0; padding-top: 24px; border-top: 1px solid rgba(255,255,255,0.1); text-align: center; font-size: 14px; }}\n\
		 #{id} .pc-footer-bottom p {{ margin: 0; }}\n",
		id = id,
		padding = css_value(&style.padding),
		bg = css_value(&style.background_color),
		fg = css_value(&style.text_color),
		heading = css_value(&style.heading_color),
		columns = columns,
	);
	css.push_str(&escape_css_rules(
		&style.link.css(&format!("#{} .pc-footer-link", id)),
	));
	css.push_str(&format!(
		"@media (max-width: {tablet}px) {{ #{id} .pc-footer-grid {{ grid-template-columns: repeat({reduced}, minmax(0, 1fr)); }} }}\n\
		 @media (max-width: {mobile}px) {{ #{id} .pc-footer-grid {{ grid-template-columns: 1fr; text-align: center; }} #{id} .pc-footer-links {{ align-items: center; }} }}\n",
		tablet = FOOTER_TABLET_PX,
		mobile = FOOTER_MOBILE_PX,
		id = id,
		reduced = columns.min(3),
	));
	css
}
