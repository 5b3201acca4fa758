//! Page assembly
//!
//! Wraps the nav, the rendered sections and the footer into one HTML
//! document. The `<head>` carries a single `<style>` block: the base
//! stylesheet, then the footer's rules hoisted out of the footer fragment,
//! then any extra rules from the settings.

use crate::footer::render_footer;
use crate::html::{Fragment, escape_attr, escape_text};
use crate::nav::render_nav;
use crate::sections::render_section;
use crate::settings::AssemblerSettings;
use pagecraft_model::{FooterConfig, LinkOverrides, NavConfig, Section};
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// Rules shared by every page
pub const BASE_STYLESHEET: &str = "*, *::before, *::after { box-sizing: border-box; }\n\
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.5; color: #111827; background: #ffffff; -webkit-font-smoothing: antialiased; }\n\
img { max-width: 100%; }\n\
.pc-main { display: block; }\n\
.pc-section { position: relative; }\n\
.pc-btn { display: inline-block; text-align: center; line-height: 1.2; }\n\
.pc-placeholder { display: block; width: 100%; height: 100%; min-height: 160px; }\n\
.pc-fallback { max-width: 1100px; margin: 0 auto; padding: 48px 24px; }\n";

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?s)<style>(.*?)</style>").expect("Invalid style block regex pattern")
});

static ROOT_RELATIVE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"(\s(?:src|href|poster)=")(/(?:[^/"][^"]*)?)""#)
		.expect("Invalid root-relative attribute regex pattern")
});

static ROOT_RELATIVE_URL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"url\((['"]?)(/(?:[^/'")][^'")]*)?)(['"]?)\)"#)
		.expect("Invalid root-relative css url regex pattern")
});

/// A complete HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	html: String,
}

impl Document {
	/// Document source
	pub fn as_str(&self) -> &str {
		&self.html
	}

	/// Consume into the document source
	pub fn into_string(self) -> String {
		self.html
	}

	/// Copy with every root-relative URL made absolute against `origin`.
	///
	/// `src`, `href` and `poster` attributes and CSS `url()` values starting
	/// with a single `/` are rewritten. Absolute, protocol-relative (`//`)
	/// and relative URLs are left alone.
	pub fn for_preview(&self, origin: &str) -> Document {
		Document {
			html: absolutize(&self.html, origin),
		}
	}
}

impl fmt::Display for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.html)
	}
}

impl From<Document> for String {
	fn from(document: Document) -> Self {
		document.html
	}
}

/// Rewrite root-relative URLs in `html` against `origin`
pub fn absolutize(html: &str, origin: &str) -> String {
	let origin = origin.trim().trim_end_matches('/');
	if origin.is_empty() {
		return html.to_string();
	}
	let attr_origin = escape_attr(origin);
	let html = ROOT_RELATIVE_ATTR.replace_all(html, |caps: &Captures| {
		format!("{}{}{}\"", &caps[1], attr_origin, &caps[2])
	});
	ROOT_RELATIVE_URL
		.replace_all(&html, |caps: &Captures| {
			format!("url({}{}{}{})", &caps[1], origin, &caps[2], &caps[3])
		})
		.into_owned()
}

/// Split a fragment into its first `<style>` block's rules and the rest
fn hoist_style(fragment: &str) -> (String, String) {
	match STYLE_BLOCK.captures(fragment) {
		Some(caps) => {
			let css = caps[1].to_string();
			let rest = STYLE_BLOCK.replacen(fragment, 1, "").into_owned();
			(css, rest)
		}
		None => (String::new(), fragment.to_string()),
	}
}

/// Builds documents with fixed settings
#[derive(Debug, Clone, Default)]
pub struct Assembler {
	settings: AssemblerSettings,
}

impl Assembler {
	/// Assembler using `settings`
	pub fn new(settings: AssemblerSettings) -> Self {
		Self { settings }
	}

	/// Active settings
	pub fn settings(&self) -> &AssemblerSettings {
		&self.settings
	}

	/// Render the chrome and every section, then assemble them
	pub fn assemble(
		&self,
		nav: &NavConfig,
		sections: &[Section],
		footer: &FooterConfig,
		overrides: &LinkOverrides,
		title: &str,
	) -> Document {
		let rendered: Vec<Fragment> = sections.iter().map(render_section).collect();
		tracing::debug!(sections = rendered.len(), title, "assembling page");
		self.assemble_fragments(
			&render_nav(nav),
			&rendered,
			&render_footer(footer, overrides),
			title,
		)
	}

	/// Assemble already rendered fragments: nav, sections in order, footer
	pub fn assemble_fragments(
		&self,
		nav: &Fragment,
		sections: &[Fragment],
		footer: &Fragment,
		title: &str,
	) -> Document {
		let (footer_css, footer_html) = hoist_style(footer.as_str());

		let mut stylesheet = String::new();
		if self.settings.include_base_stylesheet {
			stylesheet.push_str(BASE_STYLESHEET);
		}
		stylesheet.push_str(&footer_css);
		if !self.settings.extra_css.trim().is_empty() {
			stylesheet.push_str(&self.settings.extra_css.replace("</", "<\\/"));
			stylesheet.push('\n');
		}

		let body_len: usize = sections.iter().map(|s| s.as_str().len()).sum();
		let mut html = String::with_capacity(body_len + nav.as_str().len() + footer_html.len() + stylesheet.len() + 512);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!(
			"<html lang=\"{}\">\n",
			escape_attr(&self.settings.lang)
		));
		html.push_str("<head>\n");
		html.push_str(&format!(
			"<meta charset=\"{}\">\n",
			escape_attr(&self.settings.charset)
		));
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		html.push_str(&format!("<title>{}</title>\n", escape_text(title)));
		html.push_str("<style>\n");
		html.push_str(&stylesheet);
		html.push_str("</style>\n");
		html.push_str("</head>\n");

		html.push_str("<body>\n");
		html.push_str(nav.as_str());
		html.push_str("\n<main class=\"pc-main\">\n");
		for section in sections {
			html.push_str(section.as_str());
			html.push('\n');
		}
		html.push_str("</main>\n");
		html.push_str(&footer_html);
		html.push_str("\n</body>\n</html>\n");

		Document { html }
	}
}

/// Assemble a page with default settings and no footer overrides
pub fn assemble_page(
	nav: &NavConfig,
	sections: &[Section],
	footer: &FooterConfig,
	title: &str,
) -> Document {
	Assembler::default().assemble(nav, sections, footer, &LinkOverrides::new(), title)
}
