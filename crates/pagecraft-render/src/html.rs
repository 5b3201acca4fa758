//! Escaping and small markup helpers shared by every renderer

use std::fmt;

/// A self-contained HTML fragment.
///
/// Any `<style>` or `<script>` the fragment needs is embedded in it, scoped
/// by a DOM id derived from the owning section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
	/// Wrap rendered markup
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// The markup
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Take the markup
	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<Fragment> for String {
	fn from(fragment: Fragment) -> Self {
		fragment.0
	}
}

/// Escape text content
pub fn escape_text(s: &str) -> String {
	html_escape::encode_text(s).into_owned()
}

/// Escape a value placed inside a double-quoted attribute
pub fn escape_attr(s: &str) -> String {
	html_escape::encode_double_quoted_attribute(s).into_owned()
}

/// Escape a value substituted into a `<style>` block.
///
/// CSS values come straight from the editor; only sequences that could end
/// the style element or the declaration block are neutralized.
pub fn escape_css(s: &str) -> String {
	s.replace("</", "<\\/").replace(['{', '}'], "")
}

/// Escape JSON for embedding in a `<script>` element
pub fn escape_json_for_script(json: &str) -> String {
	json.replace("</", "<\\/")
}

/// Whether a link leaves the site and should open in a new tab
pub fn is_external(url: &str) -> bool {
	let url = url.trim().to_ascii_lowercase();
	url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

/// `href` plus, for external links, `target` and `rel` attributes
pub fn link_attrs(url: &str) -> String {
	if is_external(url) {
		format!(
			"href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"",
			escape_attr(url)
		)
	} else {
		format!("href=\"{}\"", escape_attr(url))
	}
}

/// Deterministic DOM id for a section instance, e.g. `pc-carousel-1a2b3c4d`.
///
/// The suffix is a 32-bit FNV-1a hash of the section id. Re-rendering the same
/// section always yields the same id; distinct section ids give distinct ids
/// in practice, though a hash collision is possible.
pub fn instance_id(prefix: &str, section_id: &str) -> String {
	format!("pc-{}-{}", prefix, instance_hash(section_id))
}

/// Name of the `window` controller object behind an instance's inline handlers
pub fn controller_name(prefix: &str, section_id: &str) -> String {
	let mut name = String::from("pc");
	let mut upper = true;
	for c in prefix.chars() {
		if c == '-' {
			upper = true;
			continue;
		}
		if upper {
			name.extend(c.to_uppercase());
			upper = false;
		} else {
			name.push(c);
		}
	}
	format!("{}_{}", name, instance_hash(section_id))
}

fn instance_hash(section_id: &str) -> String {
	const OFFSET: u32 = 0x811c_9dc5;
	const PRIME: u32 = 0x0100_0193;
	let hash = section_id
		.bytes()
		.fold(OFFSET, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(PRIME));
	format!("{:08x}", hash)
}
