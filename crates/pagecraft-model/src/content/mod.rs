//! Typed views over section props
//!
//! Each section type has a view struct built leniently from the section's
//! [`Props`]: every field is resolved to a concrete value, falling back to
//! the documented default when the editor left it out or stored something
//! unusable. Renderers match on [`SectionContent`] so that every known type
//! is handled exhaustively.

mod blog;
mod cards;
mod carousel;
mod cta;
mod hero;
mod image_text;
mod testimonials;

pub use blog::{BlogBlock, BlogContent, ImageRef, ListStyle, VideoRef};
pub use cards::{Card, CardCustomStyle, CardShadow, CardStylePreset, CardsContent};
pub use carousel::{CarouselContent, CarouselItem, DEFAULT_ITEM_TYPE};
pub use cta::CtaContent;
pub use hero::HeroContent;
pub use image_text::ImageTextContent;
pub use testimonials::{
	AnimationSpeed, Easing, HoverAnimation, Testimonial, TestimonialsContent,
};

use crate::button::ButtonVariant;
use crate::props::Props;
use crate::section::{Section, SectionType};

/// A section's props resolved into the typed view for its type
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
	/// Hero banner
	Hero(HeroContent),
	/// Card grid
	Cards(CardsContent),
	/// Carousel
	Carousel(CarouselContent),
	/// Testimonials
	Testimonials(TestimonialsContent),
	/// Blog article
	Blog(BlogContent),
	/// Image/text block
	ImageText(ImageTextContent),
	/// Call to action
	Cta(CtaContent),
	/// Type without a dedicated renderer
	Unknown {
		/// The stored type name
		type_name: String,
	},
}

impl SectionContent {
	/// Resolve a section into its typed view
	pub fn from_section(section: &Section) -> Self {
		let props = &section.props;
		match section.section_type() {
			SectionType::Hero => Self::Hero(HeroContent::from_props(props)),
			SectionType::Cards => Self::Cards(CardsContent::from_props(props)),
			SectionType::Carousel => Self::Carousel(CarouselContent::from_props(props)),
			SectionType::Testimonials => {
				Self::Testimonials(TestimonialsContent::from_props(props))
			}
			SectionType::Blog => Self::Blog(BlogContent::from_props(props)),
			SectionType::ImageTextBlock => Self::ImageText(ImageTextContent::from_props(props)),
			SectionType::Cta => Self::Cta(CtaContent::from_props(props)),
			SectionType::Other(name) => Self::Unknown {
				type_name: name.clone(),
			},
		}
	}
}

/// Label, target and optional variant override of a call-to-action button
#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
	/// Button label
	pub label: String,
	/// Link target
	pub url: String,
	/// Variant override taking precedence over the button style's variant
	pub variant: Option<ButtonVariant>,
}

impl CallToAction {
	/// Read a call to action from the object stored under `key`.
	///
	/// A missing object yields the defaults; an explicitly blank label hides
	/// the button.
	pub fn from_key(props: &Props, key: &str, default_label: &str) -> Option<Self> {
		let cta = props.object(key);
		let label = match cta.first_non_empty(&["label", "text"]) {
			Some(label) => label,
			None if cta.contains_key("label") || cta.contains_key("text") => return None,
			None => default_label.to_string(),
		};
		Some(Self {
			label,
			url: cta.non_empty_or("url", "#"),
			variant: cta.text("variant").and_then(|v| ButtonVariant::parse(&v)),
		})
	}
}

/// Clamp an opacity read from props into `[0, 1]`
pub(crate) fn clamp_unit(value: f64) -> f64 {
	value.clamp(0.0, 1.0)
}
