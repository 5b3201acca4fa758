//! Navigation bar
//!
//! The bar is one `<nav>` element carrying its own rules and controller
//! script. Open state lives in the root's `data-open` attribute; each
//! child-bearing item tracks click and hover separately in `data-clicked`
//! and `data-hovered` and shows its submenu while either is set.

use crate::html::{Fragment, escape_attr, escape_text, link_attrs};
use crate::scripts::{NAV_BREAKPOINT_PX, NAV_CONTROLLER, NAV_ID, NAV_SCRIPT};
use crate::sections::{css_value, escape_css_rules, style_tag};
use pagecraft_model::{NavConfig, NavLink};
use pagecraft_style::{DEFAULT_NAV_STYLE, ResolvedNavStyle, resolve_nav_style};

/// Render the navigation bar
pub fn render_nav(config: &NavConfig) -> Fragment {
	let style = resolve_nav_style(&config.style, &DEFAULT_NAV_STYLE);
	let submenus = config.links.iter().filter(|l| l.has_children()).count();
	tracing::debug!(links = config.links.len(), submenus, "rendering nav");

	let mut html = format!(
		"<nav id=\"{id}\" class=\"pc-nav\" data-open=\"false\" aria-label=\"Main navigation\">",
		id = NAV_ID
	);
	html.push_str(&style_tag(&nav_css(&style)));
	html.push_str("<div class=\"pc-nav-inner\">");
	html.push_str(&brand(config));
	html.push_str(&format!(
		"<button type=\"button\" class=\"pc-nav-toggle\" data-nav-toggle aria-expanded=\"false\" \
		 aria-controls=\"{id}-links\" aria-label=\"Toggle navigation\" onclick=\"{ctrl}.toggle()\">\
		 <span></span><span></span><span></span></button>",
		id = NAV_ID,
		ctrl = NAV_CONTROLLER
	));
	html.push_str(&format!(
		"<ul class=\"pc-nav-links\" id=\"{}-links\">",
		NAV_ID
	));
	let mut submenu_index = 0;
	for link in &config.links {
		if link.has_children() {
			html.push_str(&parent_item(link, submenu_index));
			submenu_index += 1;
		} else {
			html.push_str(&format!(
				"<li class=\"pc-nav-item\"><a class=\"pc-nav-link\" {}>{}</a></li>",
				link_attrs(&link.href),
				escape_text(&link.label)
			));
		}
	}
	html.push_str("</ul></div>");
	html.push_str(&NAV_SCRIPT.tag(&[("ID", NAV_ID), ("CONTROLLER", NAV_CONTROLLER)]));
	html.push_str("</nav>");
	Fragment::new(html)
}

fn brand(config: &NavConfig) -> String {
	if config.logo.is_none() && config.brand_text.is_none() {
		return String::new();
	}
	let href = config
		.brand_href
		.as_deref()
		.filter(|h| !h.trim().is_empty())
		.unwrap_or("/");
	let mut html = format!("<a class=\"pc-nav-brand\" href=\"{}\">", escape_attr(href));
	if let Some(logo) = &config.logo {
		let alt = config
			.logo_alt
			.as_deref()
			.or(config.brand_text.as_deref())
			.unwrap_or("Logo");
		html.push_str(&format!(
			"<img class=\"pc-nav-logo\" src=\"{}\" alt=\"{}\">",
			escape_attr(logo),
			escape_attr(alt)
		));
	}
	if let Some(text) = &config.brand_text {
		html.push_str(&format!(
			"<span class=\"pc-nav-brand-text\">{}</span>",
			escape_text(text)
		));
	}
	html.push_str("</a>");
	html
}

fn parent_item(link: &NavLink, index: usize) -> String {
	let mut html = format!(
		"<li class=\"pc-nav-item\" data-has-children data-clicked=\"false\" data-hovered=\"false\" \
		 data-submenu-open=\"false\" onmouseenter=\"{ctrl}.hoverSub({i},true)\" onmouseleave=\"{ctrl}.hoverSub({i},false)\">\
		 <button type=\"button\" class=\"pc-nav-link pc-nav-parent\" aria-haspopup=\"true\" onclick=\"{ctrl}.toggleSub({i})\">{label}\
		 <span class=\"pc-nav-caret\" aria-hidden=\"true\">&#9662;</span></button><ul class=\"pc-nav-submenu\">",
		ctrl = NAV_CONTROLLER,
		i = index,
		label = escape_text(&link.label),
	);
	for child in &link.children {
		html.push_str(&format!(
			"<li><a class=\"pc-nav-sublink\" {}>{}</a></li>",
			link_attrs(&child.href),
			escape_text(&child.label)
		));
	}
	html.push_str("</ul></li>");
	html
}

fn nav_css(style: &ResolvedNavStyle) -> String {
	let id = NAV_ID;
	let position = if style.sticky {
		"position: sticky; top: 0; z-index: 100;"
	} else {
		"position: relative;"
	};
	let mut css = format!(
		"#{id} {{ {position} background-color: {bg}; color: {fg}; font-size: {size}; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }}\n\
		 #{id} .pc-nav-inner {{ position: relative; display: flex; align-items: center; justify-content: space-between; gap: 24px; max-width: 1200px; margin: 0 auto; padding: {padding}; }}\n\
		 #{id} .pc-nav-brand {{ display: flex; align-items: center; gap: 10px; color: inherit; text-decoration: none; font-weight: 700; font-size: 1.25em; }}\n\
		 #{id} .pc-nav-logo {{ height: 36px; width: auto; }}\n\
		 #{id} .pc-nav-links {{ display: flex; align-items: center; gap: 8px; list-style: none; margin: 0; padding: 0; }}\n\
		 #{id} .pc-nav-item {{ position: relative; }}\n\
		 #{id} .pc-nav-parent {{ background: none; border: none; font: inherit; cursor: pointer; }}\n\
		 #{id} .pc-nav-caret {{ margin-left: 4px; font-size: 0.75em; }}\n\
		 #{id} .pc-nav-submenu {{ display: none; position: absolute; top: 100%; left: 0; min-width: 200px; margin: 0; padding: 8px 0; list-style: none; background-color: {dropdown}; border-radius: 8px; box-shadow: 0 8px 24px rgba(0,0,0,0.12); z-index: 10; }}\n\
		 #{id} [data-submenu-open=\"true\"] > .pc-nav-submenu {{ display: block; }}\n\
		 #{id} .pc-nav-sublink {{ display: block; padding: 8px 16px; color: {fg}; text-decoration: none; white-space: nowrap; }}\n\
		 #{id} .pc-nav-sublink:hover {{ color: {hover}; background-color: {hover_bg}; }}\n\
		 #{id} .pc-nav-toggle {{ display: none; flex-direction: column; gap: 4px; padding: 8px; background: none; border: none; cursor: pointer; }}\n\
		 #{id} .pc-nav-toggle span {{ display: block; width: 22px; height: 2px; background-color: {fg}; }}\n",
		id = id,
		position = position,
		bg = css_value(&style.background_color),
		fg = css_value(&style.text_color),
		size = css_value(&style.font_size),
		padding = css_value(&style.padding),
		dropdown = css_value(&style.dropdown_background),
		hover = css_value(&style.link.hover_color),
		hover_bg = css_value(&style.link.hover_background),
	);
	css.push_str(&escape_css_rules(
		&style.link.css(&format!("#{} .pc-nav-link", id)),
	));
	css.push_str(&format!(
		"@media (max-width: {bp}px) {{ \
		 #{id} .pc-nav-toggle {{ display: flex; }} \
		 #{id} .pc-nav-links {{ display: none; position: absolute; top: 100%; left: 0; right: 0; flex-direction: column; align-items: stretch; padding: 8px 16px; background-color: {bg}; box-shadow: 0 8px 16px rgba(0,0,0,0.08); }} \
		 #{id}[data-open=\"true\"] .pc-nav-links {{ display: flex; }} \
		 #{id} .pc-nav-submenu {{ position: static; box-shadow: none; padding-left: 12px; }} \
		 }}\n",
		bp = NAV_BREAKPOINT_PX,
		id = id,
		bg = css_value(&style.background_color),
	));
	css
}
