//! Inline markup used inside blog paragraphs, lists and quotes
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `[text](url)` | link |
//! | `==text==` | highlight (`#fef08a`) |
//! | `==#RRGGBB\|text==` | highlight in a given color |
//! | `{#RRGGBB\|text}` | colored text |
//!
//! Paragraph lines starting with `• ` or `- `, `N. ` or a single letter and
//! `. ` become bullet, numbered and alphabetic list items. Consecutive lines
//! with the same marker kind form one list; a different kind, a blank line or
//! a plain line closes it.
//!
//! Scanning is a single left-to-right pass. At each position the constructs
//! are tried in the order link, highlight, colored span and the first that
//! matches completely wins. A delimiter that does not complete a construct is
//! kept as literal text. Highlight and colored-span bodies are parsed
//! recursively; link text is literal.

use crate::html::{escape_attr, escape_text, link_attrs};
use pagecraft_model::content::ListStyle;
use regex::Regex;
use std::sync::LazyLock;

/// Highlight color when none is given
pub const DEFAULT_HIGHLIGHT: &str = "#fef08a";

static LINK: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\[([^\[\]\n]+)\]\(([^()\s]+)\)").expect("Invalid link markup regex pattern")
});

static HIGHLIGHT: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^==(?:(#[0-9A-Fa-f]{6}|#[0-9A-Fa-f]{3})\|)?([^\n]+?)==")
		.expect("Invalid highlight markup regex pattern")
});

static COLORED: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\{(#[0-9A-Fa-f]{6}|#[0-9A-Fa-f]{3})\|([^{}\n]+)\}")
		.expect("Invalid colored span markup regex pattern")
});

static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\d+\.\s+(.*)$").expect("Invalid numbered list regex pattern")
});

static ALPHA_ITEM: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z]\.\s+(.*)$").expect("Invalid alphabetic list regex pattern")
});

/// Inline markup node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
	/// Literal text
	Text(String),
	/// `[text](url)`
	Link {
		/// Visible text
		text: String,
		/// Target URL
		url: String,
	},
	/// `==text==` or `==#RRGGBB|text==`
	Highlight {
		/// Explicit background color
		color: Option<String>,
		/// Highlighted content
		children: Vec<Inline>,
	},
	/// `{#RRGGBB|text}`
	Colored {
		/// Text color
		color: String,
		/// Colored content
		children: Vec<Inline>,
	},
}

/// List marker kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
	/// `• ` or `- `
	Bullet,
	/// `1. `
	Numbered,
	/// `a. `
	Alphabetic,
}

impl From<ListStyle> for ListKind {
	fn from(style: ListStyle) -> Self {
		match style {
			ListStyle::Bullet => Self::Bullet,
			ListStyle::Numbered => Self::Numbered,
			ListStyle::Alphabetic => Self::Alphabetic,
		}
	}
}

/// Block-level node of a paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphNode {
	/// One plain line
	Line(Vec<Inline>),
	/// A run of same-kind list lines
	List {
		/// Marker kind
		kind: ListKind,
		/// Item contents
		items: Vec<Vec<Inline>>,
	},
	/// Blank line
	Break,
}

/// Parse inline markup
pub fn parse_inline(input: &str) -> Vec<Inline> {
	let mut nodes = Vec::new();
	let mut literal = String::new();
	let mut rest = input;
	while !rest.is_empty() {
		if let Some((node, consumed)) = match_construct(rest) {
			if !literal.is_empty() {
				nodes.push(Inline::Text(std::mem::take(&mut literal)));
			}
			nodes.push(node);
			rest = &rest[consumed..];
			continue;
		}
		let mut chars = rest.chars();
		if let Some(c) = chars.next() {
			literal.push(c);
		}
		rest = chars.as_str();
	}
	if !literal.is_empty() {
		nodes.push(Inline::Text(literal));
	}
	nodes
}

fn match_construct(s: &str) -> Option<(Inline, usize)> {
	match s.as_bytes().first()? {
		b'[' => LINK.captures(s).map(|caps| {
			(
				Inline::Link {
					text: caps[1].to_string(),
					url: caps[2].to_string(),
				},
				caps[0].len(),
			)
		}),
		b'=' => HIGHLIGHT.captures(s).map(|caps| {
			(
				Inline::Highlight {
					color: caps.get(1).map(|m| m.as_str().to_string()),
					children: parse_inline(&caps[2]),
				},
				caps[0].len(),
			)
		}),
		b'{' => COLORED.captures(s).map(|caps| {
			(
				Inline::Colored {
					color: caps[1].to_string(),
					children: parse_inline(&caps[2]),
				},
				caps[0].len(),
			)
		}),
		_ => None,
	}
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
	let line = line.trim_start();
	if let Some(rest) = line.strip_prefix("• ").or_else(|| line.strip_prefix("- ")) {
		return Some((ListKind::Bullet, rest.trim_start()));
	}
	if let Some(caps) = NUMBERED_ITEM.captures(line) {
		return caps.get(1).map(|m| (ListKind::Numbered, m.as_str()));
	}
	if let Some(caps) = ALPHA_ITEM.captures(line) {
		return caps.get(1).map(|m| (ListKind::Alphabetic, m.as_str()));
	}
	None
}

/// Parse a paragraph into lines and lists
pub fn parse_paragraph(input: &str) -> Vec<ParagraphNode> {
	let mut nodes: Vec<ParagraphNode> = Vec::new();
	for line in input.lines() {
		if line.trim().is_empty() {
			nodes.push(ParagraphNode::Break);
			continue;
		}
		match list_item(line) {
			Some((kind, content)) => {
				if let Some(ParagraphNode::List {
					kind: open_kind,
					items,
				}) = nodes.last_mut()
					&& *open_kind == kind
				{
					items.push(parse_inline(content));
					continue;
				}
				nodes.push(ParagraphNode::List {
					kind,
					items: vec![parse_inline(content)],
				});
			}
			None => nodes.push(ParagraphNode::Line(parse_inline(line))),
		}
	}
	nodes
}

/// Render inline nodes to HTML
pub fn render_nodes(nodes: &[Inline]) -> String {
	let mut html = String::new();
	for node in nodes {
		match node {
			Inline::Text(text) => html.push_str(&escape_text(text)),
			Inline::Link { text, url } => html.push_str(&format!(
				"<a class=\"pc-inline-link\" {}>{}</a>",
				link_attrs(url),
				escape_text(text)
			)),
			Inline::Highlight { color, children } => html.push_str(&format!(
				"<mark style=\"background-color: {}; padding: 0 2px; border-radius: 2px;\">{}</mark>",
				escape_attr(color.as_deref().unwrap_or(DEFAULT_HIGHLIGHT)),
				render_nodes(children)
			)),
			Inline::Colored { color, children } => html.push_str(&format!(
				"<span style=\"color: {};\">{}</span>",
				escape_attr(color),
				render_nodes(children)
			)),
		}
	}
	html
}

/// Parse and render inline markup
pub fn render_inline(input: &str) -> String {
	render_nodes(&parse_inline(input))
}

/// Render a list whose items are already split
pub fn render_list<T: AsRef<str>>(kind: ListKind, items: &[T]) -> String {
	let parsed: Vec<Vec<Inline>> = items.iter().map(|i| parse_inline(i.as_ref())).collect();
	list_html(kind, &parsed)
}

fn list_html(kind: ListKind, items: &[Vec<Inline>]) -> String {
	let (open, close) = match kind {
		ListKind::Bullet => ("<ul class=\"pc-list pc-list-bullet\">", "</ul>"),
		ListKind::Numbered => ("<ol class=\"pc-list pc-list-numbered\" type=\"1\">", "</ol>"),
		ListKind::Alphabetic => ("<ol class=\"pc-list pc-list-alphabetic\" type=\"a\">", "</ol>"),
	};
	let mut html = String::from(open);
	for item in items {
		html.push_str("<li>");
		html.push_str(&render_nodes(item));
		html.push_str("</li>");
	}
	html.push_str(close);
	html
}

/// Render a paragraph block.
///
/// Consecutive plain lines share one `<p>` separated by `<br>`; blank lines
/// and lists end it.
pub fn render_paragraph(input: &str) -> String {
	let mut html = String::new();
	let mut lines: Vec<String> = Vec::new();
	let flush = |lines: &mut Vec<String>, html: &mut String| {
		if !lines.is_empty() {
			html.push_str("<p class=\"pc-blog-text\">");
			html.push_str(&lines.join("<br>"));
			html.push_str("</p>");
			lines.clear();
		}
	};
	for node in parse_paragraph(input) {
		match node {
			ParagraphNode::Line(inline) => lines.push(render_nodes(&inline)),
			ParagraphNode::Break => flush(&mut lines, &mut html),
			ParagraphNode::List { kind, items } => {
				flush(&mut lines, &mut html);
				html.push_str(&list_html(kind, &items));
			}
		}
	}
	flush(&mut lines, &mut html);
	html
}
