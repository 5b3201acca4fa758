//! Blog article props

use crate::button::ButtonStyle;
use crate::props::{Props, value_text};

/// Marker style of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListStyle {
	/// Unordered, `•`
	#[default]
	Bullet,
	/// `1. 2. 3.`
	Numbered,
	/// `a. b. c.`
	Alphabetic,
}

impl ListStyle {
	/// Parse a style name; unknown names select `bullet`
	pub fn parse(value: &str) -> Self {
		match value.trim() {
			"numbered" | "number" | "ordered" | "decimal" => Self::Numbered,
			"alphabetic" | "alpha" | "letter" | "lettered" => Self::Alphabetic,
			_ => Self::Bullet,
		}
	}

	/// Style name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Bullet => "bullet",
			Self::Numbered => "numbered",
			Self::Alphabetic => "alphabetic",
		}
	}
}

/// Image inside an image grid
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
	/// Image URL; a placeholder renders when absent
	pub url: Option<String>,
	/// Alt text
	pub alt: String,
	/// Optional caption
	pub caption: Option<String>,
}

impl ImageRef {
	fn from_value(value: &serde_json::Value) -> Self {
		if let Some(url) = value.as_str() {
			return Self {
				url: Some(url.to_string()).filter(|u| !u.trim().is_empty()),
				alt: String::new(),
				caption: None,
			};
		}
		let props = Props::from_value_ref(value);
		Self {
			url: props.first_non_empty(&["url", "src", "image"]),
			alt: props.text_or("alt", ""),
			caption: props.non_empty("caption"),
		}
	}
}

/// Video inside a video grid
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRef {
	/// YouTube, Vimeo or uploaded file URL
	pub url: Option<String>,
	/// Optional title shown under the player
	pub title: Option<String>,
}

impl VideoRef {
	fn from_value(value: &serde_json::Value) -> Self {
		if let Some(url) = value.as_str() {
			return Self {
				url: Some(url.to_string()).filter(|u| !u.trim().is_empty()),
				title: None,
			};
		}
		let props = Props::from_value_ref(value);
		Self {
			url: props.first_non_empty(&["url", "src"]),
			title: props.non_empty("title"),
		}
	}
}

/// One typed article block
#[derive(Debug, Clone, PartialEq)]
pub enum BlogBlock {
	/// Section heading
	Heading {
		/// Heading text
		text: String,
		/// HTML heading level, within `2..=4`
		level: u8,
	},
	/// Smaller heading
	Subheading {
		/// Heading text
		text: String,
	},
	/// Paragraph in the inline markup language
	Paragraph {
		/// Raw markup
		content: String,
	},
	/// Single image
	Image(ImageRef),
	/// Grid of images
	ImageGrid {
		/// Images in order
		images: Vec<ImageRef>,
		/// Columns, within `1..=4`
		columns: u8,
	},
	/// Pull quote in the inline markup language
	Quote {
		/// Raw markup
		text: String,
		/// Optional attribution
		author: Option<String>,
	},
	/// Horizontal rule
	Divider,
	/// Standalone link
	Link {
		/// Visible text
		text: String,
		/// Target URL
		url: String,
	},
	/// List whose items use the inline markup language
	List {
		/// Raw item markup
		items: Vec<String>,
		/// Marker style
		style: ListStyle,
	},
	/// Button
	CtaButton {
		/// Label
		text: String,
		/// Target URL
		url: String,
		/// Button style
		style: ButtonStyle,
	},
	/// Single embedded video
	Video(VideoRef),
	/// Grid of embedded videos
	VideoGrid {
		/// Videos in order
		videos: Vec<VideoRef>,
		/// Columns, within `1..=3`
		columns: u8,
	},
	/// Block type this renderer does not know
	Unknown {
		/// The stored tag
		block_type: String,
	},
}

impl BlogBlock {
	/// Read one block object by its `type` tag
	pub fn from_props(props: &Props) -> Self {
		let block_type = props.text_or("type", "");
		match block_type.as_str() {
			"heading" => Self::Heading {
				text: props.first_non_empty(&["text", "content"]).unwrap_or_default(),
				level: props
					.number("level")
					.map(|l| l.round().clamp(2.0, 4.0) as u8)
					.unwrap_or(2),
			},
			"subheading" => Self::Subheading {
				text: props.first_non_empty(&["text", "content"]).unwrap_or_default(),
			},
			"paragraph" => Self::Paragraph {
				content: props.first_non_empty(&["content", "text"]).unwrap_or_default(),
			},
			"image" => Self::Image(ImageRef {
				url: props.first_non_empty(&["url", "src", "image"]),
				alt: props.text_or("alt", ""),
				caption: props.non_empty("caption"),
			}),
			"image-grid" => Self::ImageGrid {
				images: props.list("images").iter().map(ImageRef::from_value).collect(),
				columns: grid_columns(props, 2, 4),
			},
			"quote" => Self::Quote {
				text: props.first_non_empty(&["text", "content", "quote"]).unwrap_or_default(),
				author: props.non_empty("author"),
			},
			"divider" => Self::Divider,
			"link" => {
				let url = props.non_empty_or("url", "#");
				Self::Link {
					text: props.non_empty("text").unwrap_or_else(|| url.clone()),
					url,
				}
			}
			"list" => Self::List {
				items: props.list("items").iter().filter_map(value_text).collect(),
				style: props
					.text("style")
					.map(|s| ListStyle::parse(&s))
					.unwrap_or_default(),
			},
			"cta-button" => Self::CtaButton {
				text: props.non_empty_or("text", "Learn More"),
				url: props.non_empty_or("url", "#"),
				style: ButtonStyle::from_key(props, "style"),
			},
			"video" => Self::Video(VideoRef {
				url: props.first_non_empty(&["url", "src"]),
				title: props.non_empty("title"),
			}),
			"video-grid" => Self::VideoGrid {
				videos: props.list("videos").iter().map(VideoRef::from_value).collect(),
				columns: grid_columns(props, 2, 3),
			},
			_ => Self::Unknown { block_type },
		}
	}

	/// The block's tag
	pub fn tag(&self) -> &str {
		match self {
			Self::Heading { .. } => "heading",
			Self::Subheading { .. } => "subheading",
			Self::Paragraph { .. } => "paragraph",
			Self::Image(_) => "image",
			Self::ImageGrid { .. } => "image-grid",
			Self::Quote { .. } => "quote",
			Self::Divider => "divider",
			Self::Link { .. } => "link",
			Self::List { .. } => "list",
			Self::CtaButton { .. } => "cta-button",
			Self::Video(_) => "video",
			Self::VideoGrid { .. } => "video-grid",
			Self::Unknown { block_type } => block_type,
		}
	}
}

fn grid_columns(props: &Props, default: u8, max: u8) -> u8 {
	props
		.number("columns")
		.map(|c| c.round().clamp(1.0, f64::from(max)) as u8)
		.unwrap_or(default)
}

/// Resolved blog article content
#[derive(Debug, Clone, PartialEq)]
pub struct BlogContent {
	/// Article title
	pub title: String,
	/// Optional subtitle
	pub subtitle: Option<String>,
	/// Optional author name
	pub author: Option<String>,
	/// Optional publication date, displayed verbatim
	pub date: Option<String>,
	/// Optional header image
	pub featured_image: Option<String>,
	/// Body blocks in order
	pub blocks: Vec<BlogBlock>,
	/// Maximum content width (CSS length)
	pub max_width: String,
	/// Body text color
	pub text_color: String,
	/// Accent for links, quotes and dividers
	pub accent_color: String,
}

impl BlogContent {
	/// Resolve blog props
	pub fn from_props(props: &Props) -> Self {
		Self {
			title: props.text_or("title", "Untitled Post"),
			subtitle: props.non_empty("subtitle"),
			author: props.non_empty("author"),
			date: props.non_empty("date"),
			featured_image: props.non_empty("featuredImage"),
			blocks: props
				.list("blocks")
				.iter()
				.map(|block| BlogBlock::from_props(&Props::from_value_ref(block)))
				.collect(),
			max_width: props.length("maxWidth").unwrap_or_else(|| "760px".to_string()),
			text_color: props.non_empty_or("textColor", "#1f2937"),
			accent_color: props.non_empty_or("accentColor", "#2563eb"),
		}
	}
}
