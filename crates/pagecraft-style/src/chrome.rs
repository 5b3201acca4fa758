//! Nav bar and footer style defaults and resolution

use crate::hover::LinkHover;
use pagecraft_model::{FooterStyle, LinkHoverEffect, NavStyle};

/// Nav bar defaults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavStyleDefaults {
	/// Bar background
	pub background_color: &'static str,
	/// Link and brand color
	pub text_color: &'static str,
	/// Link hover color
	pub hover_color: &'static str,
	/// Link hover background
	pub hover_background: &'static str,
	/// Hover treatment
	pub hover_effect: LinkHoverEffect,
	/// Underline color
	pub underline_color: &'static str,
	/// Underline thickness in pixels
	pub underline_thickness: f64,
	/// Hover transition in milliseconds
	pub transition_ms: u32,
	/// Hover delay in milliseconds
	pub delay_ms: u32,
	/// Sticky positioning
	pub sticky: bool,
	/// Link font size
	pub font_size: &'static str,
	/// Bar padding
	pub padding: &'static str,
	/// Submenu background
	pub dropdown_background: &'static str,
}

/// Default nav bar style
pub const DEFAULT_NAV_STYLE: NavStyleDefaults = NavStyleDefaults {
	background_color: "#ffffff",
	text_color: "#1f2937",
	hover_color: "#3b82f6",
	hover_background: "#eff6ff",
	hover_effect: LinkHoverEffect::Underline,
	underline_color: "#3b82f6",
	underline_thickness: 2.0,
	transition_ms: 300,
	delay_ms: 0,
	sticky: true,
	font_size: "16px",
	padding: "16px 24px",
	dropdown_background: "#ffffff",
};

/// Footer defaults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterStyleDefaults {
	/// Footer background
	pub background_color: &'static str,
	/// Body text color
	pub text_color: &'static str,
	/// Column heading color
	pub heading_color: &'static str,
	/// Link color
	pub link_color: &'static str,
	/// Link hover color
	pub link_hover_color: &'static str,
	/// Link hover background
	pub hover_background: &'static str,
	/// Hover treatment
	pub hover_effect: LinkHoverEffect,
	/// Underline color
	pub underline_color: &'static str,
	/// Underline thickness in pixels
	pub underline_thickness: f64,
	/// Hover transition in milliseconds
	pub transition_ms: u32,
	/// Hover delay in milliseconds
	pub delay_ms: u32,
	/// Footer padding
	pub padding: &'static str,
}

/// Default footer style
pub const DEFAULT_FOOTER_STYLE: FooterStyleDefaults = FooterStyleDefaults {
	background_color: "#111827",
	text_color: "#d1d5db",
	heading_color: "#ffffff",
	link_color: "#9ca3af",
	link_hover_color: "#ffffff",
	hover_background: "rgba(255,255,255,0.08)",
	hover_effect: LinkHoverEffect::Underline,
	underline_color: "#3b82f6",
	underline_thickness: 1.0,
	transition_ms: 200,
	delay_ms: 0,
	padding: "48px 24px",
};

/// Nav bar style with every field filled in
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNavStyle {
	/// Bar background
	pub background_color: String,
	/// Link and brand color
	pub text_color: String,
	/// Sticky positioning
	pub sticky: bool,
	/// Link font size
	pub font_size: String,
	/// Bar padding
	pub padding: String,
	/// Submenu background
	pub dropdown_background: String,
	/// Link hover effect
	pub link: LinkHover,
}

/// Footer style with every field filled in
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFooterStyle {
	/// Footer background
	pub background_color: String,
	/// Body text color
	pub text_color: String,
	/// Column heading color
	pub heading_color: String,
	/// Footer padding
	pub padding: String,
	/// Link hover effect
	pub link: LinkHover,
}

fn pick(value: &Option<String>, default: &str) -> String {
	match value.as_deref().map(str::trim) {
		Some(v) if !v.is_empty() => v.to_string(),
		_ => default.to_string(),
	}
}

fn thickness(value: Option<f64>, default: f64) -> f64 {
	match value {
		Some(t) if t.is_finite() && t >= 0.0 => t,
		Some(t) => {
			tracing::debug!(
				thickness = t,
				default,
				"underline thickness out of range, using default"
			);
			default
		}
		None => default,
	}
}

/// Resolve a nav bar style against `defaults`
pub fn resolve_nav_style(style: &NavStyle, defaults: &NavStyleDefaults) -> ResolvedNavStyle {
	let text_color = pick(&style.text_color, defaults.text_color);
	ResolvedNavStyle {
		background_color: pick(&style.background_color, defaults.background_color),
		sticky: style.sticky.unwrap_or(defaults.sticky),
		font_size: pick(&style.font_size, defaults.font_size),
		padding: pick(&style.padding, defaults.padding),
		dropdown_background: pick(&style.dropdown_background, defaults.dropdown_background),
		link: LinkHover {
			effect: style.hover_effect.unwrap_or(defaults.hover_effect),
			color: text_color.clone(),
			hover_color: pick(&style.hover_color, defaults.hover_color),
			hover_background: pick(&style.hover_background, defaults.hover_background),
			underline_color: pick(&style.underline_color, defaults.underline_color),
			underline_thickness: thickness(style.underline_thickness, defaults.underline_thickness),
			transition_ms: style.transition_ms.unwrap_or(defaults.transition_ms),
			delay_ms: style.delay_ms.unwrap_or(defaults.delay_ms),
		},
		text_color,
	}
}

/// Resolve a footer style against `defaults`
pub fn resolve_footer_style(
	style: &FooterStyle,
	defaults: &FooterStyleDefaults,
) -> ResolvedFooterStyle {
	ResolvedFooterStyle {
		background_color: pick(&style.background_color, defaults.background_color),
		text_color: pick(&style.text_color, defaults.text_color),
		heading_color: pick(&style.heading_color, defaults.heading_color),
		padding: pick(&style.padding, defaults.padding),
		link: LinkHover {
			effect: style.hover_effect.unwrap_or(defaults.hover_effect),
			color: pick(&style.link_color, defaults.link_color),
			hover_color: pick(&style.link_hover_color, defaults.link_hover_color),
			hover_background: pick(&style.hover_background, defaults.hover_background),
			underline_color: pick(&style.underline_color, defaults.underline_color),
			underline_thickness: thickness(style.underline_thickness, defaults.underline_thickness),
			transition_ms: style.transition_ms.unwrap_or(defaults.transition_ms),
			delay_ms: style.delay_ms.unwrap_or(defaults.delay_ms),
		},
	}
}
