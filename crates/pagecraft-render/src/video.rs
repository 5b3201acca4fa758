//! Video URL classification and embedding

use crate::html::{escape_attr, escape_text};
use regex::Regex;
use std::sync::LazyLock;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|v/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})",
	)
	.expect("Invalid YouTube URL regex pattern")
});

static VIMEO_ID: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"vimeo\.com/(?:video/|channels/[^/]+/|groups/[^/]+/videos/)?(\d+)")
		.expect("Invalid Vimeo URL regex pattern")
});

static VIDEO_HOST: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)(?:^|[/.])(?:youtube\.com|youtu\.be|vimeo\.com)(?:[/:?#]|$)")
		.expect("Invalid video host regex pattern")
});

/// Where a video URL points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
	/// YouTube video id
	YouTube(String),
	/// Vimeo video id
	Vimeo(String),
	/// Uploaded file, played with a `<video>` element
	File(String),
	/// A YouTube or Vimeo URL whose id could not be extracted; embedded as given
	Unparsed(String),
}

impl VideoSource {
	/// Classify a video URL
	pub fn parse(url: &str) -> Self {
		let url = url.trim();
		if let Some(id) = YOUTUBE_ID.captures(url).and_then(|c| c.get(1)) {
			return Self::YouTube(id.as_str().to_string());
		}
		if let Some(id) = VIMEO_ID.captures(url).and_then(|c| c.get(1)) {
			return Self::Vimeo(id.as_str().to_string());
		}
		if VIDEO_HOST.is_match(url) {
			tracing::warn!(url = %url, "video URL not recognized; embedding it as given");
			return Self::Unparsed(url.to_string());
		}
		Self::File(url.to_string())
	}

	/// URL to put in the player's `src`
	pub fn embed_url(&self) -> String {
		match self {
			Self::YouTube(id) => format!("https://www.youtube.com/embed/{}", id),
			Self::Vimeo(id) => format!("https://player.vimeo.com/video/{}", id),
			Self::File(url) | Self::Unparsed(url) => url.clone(),
		}
	}

	/// Player markup: an `<iframe>` for hosted videos, `<video>` for files
	pub fn player(&self, title: Option<&str>) -> String {
		let title = title.unwrap_or("Video");
		match self {
			Self::File(url) => format!(
				"<video class=\"pc-video-player\" src=\"{}\" controls preload=\"metadata\" title=\"{}\"></video>",
				escape_attr(url),
				escape_attr(title)
			),
			_ => format!(
				"<iframe class=\"pc-video-player\" src=\"{}\" title=\"{}\" frameborder=\"0\" \
				 allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
				 allowfullscreen></iframe>",
				escape_attr(&self.embed_url()),
				escape_attr(title)
			),
		}
	}
}

/// Responsive 16:9 player with an optional caption, or an empty-state box
pub fn video_embed(url: Option<&str>, title: Option<&str>) -> String {
	let Some(url) = url else {
		return "<div class=\"pc-video pc-video-empty\">No video selected</div>".to_string();
	};
	let source = VideoSource::parse(url);
	let mut html = String::from("<figure class=\"pc-video\"><div class=\"pc-video-frame\">");
	html.push_str(&source.player(title));
	html.push_str("</div>");
	if let Some(title) = title {
		html.push_str(&format!("<figcaption>{}</figcaption>", escape_text(title)));
	}
	html.push_str("</figure>");
	html
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", VideoSource::YouTube("dQw4w9WgXcQ".into()))]
	#[case("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ", VideoSource::YouTube("dQw4w9WgXcQ".into()))]
	#[case("https://youtu.be/dQw4w9WgXcQ?t=42", VideoSource::YouTube("dQw4w9WgXcQ".into()))]
	#[case("https://www.youtube.com/embed/dQw4w9WgXcQ", VideoSource::YouTube("dQw4w9WgXcQ".into()))]
	#[case("https://www.youtube.com/shorts/dQw4w9WgXcQ", VideoSource::YouTube("dQw4w9WgXcQ".into()))]
	#[case("https://vimeo.com/76979871", VideoSource::Vimeo("76979871".into()))]
	#[case("https://player.vimeo.com/video/76979871", VideoSource::Vimeo("76979871".into()))]
	#[case("/uploads/intro.mp4", VideoSource::File("/uploads/intro.mp4".into()))]
	#[case("https://www.youtube.com/channel/xyz", VideoSource::Unparsed("https://www.youtube.com/channel/xyz".into()))]
	fn test_parse(#[case] url: &str, #[case] expected: VideoSource) {
		assert_eq!(VideoSource::parse(url), expected);
	}

	#[rstest]
	fn test_embed_urls() {
		assert_eq!(
			VideoSource::parse("https://youtu.be/dQw4w9WgXcQ").embed_url(),
			"https://www.youtube.com/embed/dQw4w9WgXcQ"
		);
		assert_eq!(
			VideoSource::parse("https://vimeo.com/1234").embed_url(),
			"https://player.vimeo.com/video/1234"
		);
		assert_eq!(
			VideoSource::parse("https://vimeo.com/about").embed_url(),
			"https://vimeo.com/about"
		);
	}

	#[rstest]
	fn test_file_uses_video_element() {
		let html = video_embed(Some("/clip.webm"), Some("Demo"));
		assert!(html.contains("<video class=\"pc-video-player\" src=\"/clip.webm\""));
		assert!(html.contains("<figcaption>Demo</figcaption>"));
	}

	#[rstest]
	fn test_missing_url_renders_empty_state() {
		assert!(video_embed(None, None).contains("No video selected"));
	}
}
