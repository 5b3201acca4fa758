//! Inline SVG placeholders for missing images

use crate::html::escape_text;

/// Inline placeholder shown where an image is missing.
///
/// The SVG scales to its container, so it drops into any slot an `<img>`
/// would have filled.
pub fn image_placeholder(label: &str) -> String {
	format!(
		concat!(
			"<svg class=\"pc-placeholder\" xmlns=\"http://www.w3.org/2000/svg\" ",
			"viewBox=\"0 0 400 300\" preserveAspectRatio=\"xMidYMid slice\" ",
			"role=\"img\" aria-label=\"{label}\" style=\"display: block; width: 100%; height: 100%;\">",
			"<rect width=\"400\" height=\"300\" fill=\"#e5e7eb\"/>",
			"<path d=\"M150 190l40-50 30 36 20-24 40 38H150z\" fill=\"#9ca3af\"/>",
			"<circle cx=\"175\" cy=\"115\" r=\"14\" fill=\"#9ca3af\"/>",
			"<text x=\"200\" y=\"240\" text-anchor=\"middle\" font-family=\"sans-serif\" ",
			"font-size=\"16\" fill=\"#6b7280\">{label}</text>",
			"</svg>"
		),
		label = escape_text(label)
	)
}

/// An `<img>` when a URL is present, otherwise the placeholder
pub fn image_or_placeholder(url: Option<&str>, alt: &str, class: &str) -> String {
	match url {
		Some(url) => format!(
			"<img class=\"{}\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
			class,
			crate::html::escape_attr(url),
			crate::html::escape_attr(alt)
		),
		None => image_placeholder(if alt.trim().is_empty() { "Image" } else { alt }),
	}
}
