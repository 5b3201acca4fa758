//! Blog article
//!
//! Paragraphs, list items and quotes go through the inline markup
//! renderer; every other block is plain escaped text.

use super::{css_value, section_open, style_tag, styled_button};
use crate::html::{escape_attr, escape_text, instance_id, link_attrs};
use crate::markup::{render_inline, render_list, render_paragraph};
use crate::placeholder::image_or_placeholder;
use crate::video::video_embed;
use pagecraft_model::content::{BlogBlock, BlogContent, CallToAction, ImageRef, VideoRef};
use pagecraft_model::{ButtonVariant, Section};

pub(super) fn render(section: &Section, blog: &BlogContent) -> String {
	let id = instance_id("blog", &section.id);
	let accent = css_value(&blog.accent_color);

	let mut css = format!(
		"#{id} {{ padding: 64px 24px; color: {fg}; }}\n\
		 #{id} .pc-blog-article {{ max-width: {width}; margin: 0 auto; line-height: 1.7; font-size: 18px; }}\n\
		 #{id} .pc-blog-featured {{ margin: 0 0 32px; border-radius: 12px; overflow: hidden; }}\n\
		 #{id} .pc-blog-featured img {{ display: block; width: 100%; height: auto; }}\n\
		 #{id} .pc-blog-title {{ font-size: 42px; line-height: 1.15; margin: 0 0 12px; }}\n\
		 #{id} .pc-blog-subtitle {{ font-size: 22px; opacity: 0.75; margin: 0 0 16px; }}\n\
		 #{id} .pc-blog-meta {{ font-size: 14px; opacity: 0.7; margin-bottom: 40px; }}\n\
		 #{id} .pc-blog-text {{ margin: 0 0 20px; }}\n\
		 #{id} .pc-blog-article a {{ color: {accent}; }}\n\
		 #{id} .pc-list {{ margin: 0 0 20px; padding-left: 28px; }}\n\
		 #{id} .pc-blog-quote {{ margin: 32px 0; padding: 8px 0 8px 24px; border-left: 4px solid {accent}; font-size: 22px; font-style: italic; }}\n\
		 #{id} .pc-blog-quote cite {{ display: block; margin-top: 8px; font-size: 15px; font-style: normal; opacity: 0.75; }}\n\
		 #{id} .pc-blog-divider {{ border: none; border-top: 2px solid {accent}; opacity: 0.3; margin: 40px 0; }}\n\
		 #{id} .pc-blog-figure {{ margin: 32px 0; }}\n\
		 #{id} .pc-blog-figure img {{ display: block; width: 100%; height: auto; border-radius: 8px; }}\n\
		 #{id} .pc-blog-figure figcaption {{ margin-top: 8px; font-size: 14px; text-align: center; opacity: 0.7; }}\n\
		 #{id} .pc-blog-grid {{ display: grid; gap: 16px; margin: 32px 0; }}\n\
		 #{id} .pc-blog-grid .pc-blog-figure {{ margin: 0; }}\n\
		 #{id} .pc-video {{ margin: 32px 0; }}\n\
		 #{id} .pc-blog-grid .pc-video {{ margin: 0; }}\n\
		 #{id} .pc-video-frame {{ position: relative; padding-top: 56.25%; border-radius: 8px; overflow: hidden; background: #000000; }}\n\
		 #{id} .pc-video-player {{ position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }}\n\
		 #{id} .pc-video-empty {{ padding: 48px; text-align: center; background: #f3f4f6; border-radius: 8px; color: #6b7280; }}\n\
		 #{id} .pc-blog-cta {{ margin: 32px 0; }}\n\
		 @media (max-width: 640px) {{ #{id} .pc-blog-grid {{ grid-template-columns: 1fr !important; }} #{id} .pc-blog-title {{ font-size: 32px; }} }}\n",
		id = id,
		fg = css_value(&blog.text_color),
		width = css_value(&blog.max_width),
		accent = accent,
	);

	let mut body = String::from("<article class=\"pc-blog-article\">");
	if let Some(image) = &blog.featured_image {
		body.push_str(&format!(
			"<div class=\"pc-blog-featured\"><img src=\"{}\" alt=\"{}\"></div>",
			escape_attr(image),
			escape_attr(&blog.title)
		));
	}
	body.push_str(&format!(
		"<header><h1 class=\"pc-blog-title\">{}</h1>",
		escape_text(&blog.title)
	));
	if let Some(subtitle) = &blog.subtitle {
		body.push_str(&format!(
			"<p class=\"pc-blog-subtitle\">{}</p>",
			escape_text(subtitle)
		));
	}
	let meta: Vec<String> = [&blog.author, &blog.date]
		.into_iter()
		.flatten()
		.map(|m| escape_text(m))
		.collect();
	if !meta.is_empty() {
		body.push_str(&format!(
			"<div class=\"pc-blog-meta\">{}</div>",
			meta.join(" &middot; ")
		));
	}
	body.push_str("</header>");

	for (index, block) in blog.blocks.iter().enumerate() {
		body.push_str(&render_block(section, &id, index, block, &mut css));
	}
	body.push_str("</article>");

	format!(
		"{}{}{}</section>",
		section_open(section, &id, ""),
		style_tag(&css),
		body
	)
}

fn render_block(
	section: &Section,
	scope_id: &str,
	index: usize,
	block: &BlogBlock,
	css: &mut String,
) -> String {
	match block {
		BlogBlock::Heading { text, level } => {
			format!("<h{l} class=\"pc-blog-heading\">{}</h{l}>", escape_text(text), l = level)
		}
		BlogBlock::Subheading { text } => {
			format!("<h3 class=\"pc-blog-subheading\">{}</h3>", escape_text(text))
		}
		BlogBlock::Paragraph { content } => render_paragraph(content),
		BlogBlock::Image(image) => figure(image),
		BlogBlock::ImageGrid { images, .. } if images.is_empty() => super::empty_state("No items"),
		BlogBlock::ImageGrid { images, columns } => {
			let cells: String = images.iter().map(figure).collect();
			grid(*columns, &cells)
		}
		BlogBlock::Quote { text, author } => {
			let cite = author
				.as_ref()
				.map(|a| format!("<cite>{}</cite>", escape_text(a)))
				.unwrap_or_default();
			format!(
				"<blockquote class=\"pc-blog-quote\"><p>{}</p>{}</blockquote>",
				render_inline(text),
				cite
			)
		}
		BlogBlock::Divider => "<hr class=\"pc-blog-divider\">".to_string(),
		BlogBlock::Link { text, url } => format!(
			"<p class=\"pc-blog-text\"><a class=\"pc-blog-link\" {}>{}</a></p>",
			link_attrs(url),
			escape_text(text)
		),
		BlogBlock::List { items, .. } if items.is_empty() => super::empty_state("No items"),
		BlogBlock::List { items, style } => render_list((*style).into(), items.as_slice()),
		BlogBlock::Video(video) => video_block(video),
		BlogBlock::VideoGrid { videos, .. } if videos.is_empty() => super::empty_state("No items"),
		BlogBlock::VideoGrid { videos, columns } => {
			let cells: String = videos.iter().map(video_block).collect();
			grid(*columns, &cells)
		}
		BlogBlock::CtaButton { text, url, style } => {
			let cta = CallToAction {
				label: text.clone(),
				url: url.clone(),
				variant: None,
			};
			let button = styled_button(
				scope_id,
				&format!("pc-blog-cta-{}", index),
				&cta,
				style,
				ButtonVariant::Solid,
			);
			css.push_str(&button.css);
			format!("<div class=\"pc-blog-cta\">{}</div>", button.html)
		}
		BlogBlock::Unknown { block_type } => {
			tracing::warn!(
				section = %section.id,
				block_type = %block_type,
				"skipping unknown blog block"
			);
			String::new()
		}
	}
}

fn figure(image: &ImageRef) -> String {
	let caption = image
		.caption
		.as_ref()
		.map(|c| format!("<figcaption>{}</figcaption>", escape_text(c)))
		.unwrap_or_default();
	format!(
		"<figure class=\"pc-blog-figure\">{}{}</figure>",
		image_or_placeholder(image.url.as_deref(), &image.alt, "pc-blog-image"),
		caption
	)
}

fn video_block(video: &VideoRef) -> String {
	video_embed(video.url.as_deref(), video.title.as_deref())
}

fn grid(columns: u8, cells: &str) -> String {
	format!(
		"<div class=\"pc-blog-grid\" style=\"grid-template-columns: repeat({}, minmax(0, 1fr));\">{}</div>",
		columns, cells
	)
}

#[cfg(test)]
mod tests {
	use crate::sections::render_section;
	use pagecraft_model::{Props, Section, SectionType};
	use rstest::rstest;
	use serde_json::json;

	fn blog(blocks: serde_json::Value) -> String {
		render_section(&Section::with_props(
			"post",
			SectionType::Blog,
			Props::from_value(json!({ "title": "Launch notes", "author": "Sam", "date": "2024-05-01", "blocks": blocks })),
		))
		.into_string()
	}

	#[rstest]
	fn test_header_and_meta() {
		let html = blog(json!([]));
		assert!(html.contains("<h1 class=\"pc-blog-title\">Launch notes</h1>"));
		assert!(html.contains("Sam &middot; 2024-05-01"));
	}

	#[rstest]
	#[case(json!({ "type": "image-grid", "images": [], "columns": 2 }))]
	#[case(json!({ "type": "video-grid", "videos": [] }))]
	#[case(json!({ "type": "list", "items": [] }))]
	fn test_empty_collection_block_shows_no_items(#[case] block: serde_json::Value) {
		// Act
		let html = blog(json!([block]));

		// Assert
		assert!(html.contains("<div class=\"pc-empty\""));
		assert!(html.contains(">No items</div>"));
		assert!(!html.contains("<div class=\"pc-blog-grid\""));
		assert!(!html.contains("<ul"));
	}

	#[rstest]
	fn test_paragraph_markup_is_rendered() {
		// Act
		let html = blog(json!([
			{ "type": "paragraph", "content": "See [docs](https://docs.example.com) and ==this==\n• one\n• two" }
		]));

		// Assert
		assert!(html.contains(
			"<a class=\"pc-inline-link\" href=\"https://docs.example.com\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a>"
		));
		assert!(html.contains("background-color: #fef08a"));
		assert!(html.contains("<ul class=\"pc-list pc-list-bullet\"><li>one</li><li>two</li></ul>"));
	}

	#[rstest]
	#[case("numbered", "<ol class=\"pc-list pc-list-numbered\" type=\"1\">")]
	#[case("alphabetic", "<ol class=\"pc-list pc-list-alphabetic\" type=\"a\">")]
	#[case("bullet", "<ul class=\"pc-list pc-list-bullet\">")]
	fn test_list_block_styles(#[case] style: &str, #[case] open: &str) {
		let html = blog(json!([{ "type": "list", "style": style, "items": ["a", "b"] }]));
		assert!(html.contains(open));
	}

	#[rstest]
	fn test_video_blocks() {
		// Act
		let html = blog(json!([
			{ "type": "video", "url": "https://youtu.be/dQw4w9WgXcQ" },
			{ "type": "video" },
			{ "type": "video-grid", "columns": 2, "videos": ["https://vimeo.com/76979871"] }
		]));

		// Assert
		assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
		assert!(html.contains("No video selected"));
		assert!(html.contains("https://player.vimeo.com/video/76979871"));
		assert!(html.contains("repeat(2, minmax(0, 1fr))"));
	}

	#[rstest]
	fn test_cta_buttons_are_scoped_per_block() {
		// Act
		let html = blog(json!([
			{ "type": "cta-button", "text": "Buy", "url": "/buy", "style": { "backgroundColor": "#ff0000" } },
			{ "type": "cta-button", "text": "Try", "url": "/try", "style": { "variant": "outline" } }
		]));

		// Assert
		assert!(html.contains("<a class=\"pc-btn pc-blog-cta-0\" href=\"/buy\">Buy</a>"));
		assert!(html.contains("<a class=\"pc-btn pc-blog-cta-1\" href=\"/try\">Try</a>"));
		assert!(html.contains("background: #ff0000;"));
	}

	#[rstest]
	fn test_unknown_block_is_skipped_and_quote_renders() {
		let html = blog(json!([
			{ "type": "hologram", "text": "zap" },
			{ "type": "quote", "text": "{#ff0000|Red} words", "author": "Ada" }
		]));
		assert!(!html.contains("zap"));
		assert!(html.contains("<span style=\"color: #ff0000;\">Red</span> words"));
		assert!(html.contains("<cite>Ada</cite>"));
	}
}
