//! Numbered layout variants
//!
//! Editors store a section's visual variant as a plain number. Each section
//! type gets a closed enum here whose first member is the default: a missing
//! or non-numeric value selects it, and a number outside the known range is
//! kept as `Unknown(n)`, which [`effective`](HeroVariant::effective) maps back
//! onto variant 1. Falling back to the first layout is intentional; an
//! unexpected number must never leave a section unrendered.

use crate::props::Props;

macro_rules! numbered_variant {
	(
		$(#[$meta:meta])*
		$name:ident {
			$(#[$first_meta:meta])* $first_num:literal => $first:ident
			$(, $(#[$rest_meta:meta])* $num:literal => $variant:ident)* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$(#[$first_meta])*
			$first,
			$($(#[$rest_meta])* $variant,)*
			/// Number outside the known range; renders like variant 1
			Unknown(i64),
		}

		impl $name {
			/// Parse a variant number.
			///
			/// `None` selects variant 1. Fractional numbers are treated as
			/// out of range.
			pub fn from_number(number: Option<f64>) -> Self {
				let Some(number) = number else {
					return Self::$first;
				};
				if number.fract() != 0.0 {
					return Self::Unknown(number.trunc() as i64);
				}
				match number as i64 {
					$first_num => Self::$first,
					$($num => Self::$variant,)*
					other => Self::Unknown(other),
				}
			}

			/// Read the variant stored under `key`
			pub fn from_props(props: &Props, key: &str) -> Self {
				Self::from_number(props.number(key))
			}

			/// The stored variant number
			pub fn number(&self) -> i64 {
				match self {
					Self::$first => $first_num,
					$(Self::$variant => $num,)*
					Self::Unknown(n) => *n,
				}
			}

			/// Layout actually rendered: `Unknown` collapses onto variant 1
			pub fn effective(self) -> Self {
				match self {
					Self::Unknown(_) => Self::$first,
					known => known,
				}
			}

			/// Whether the stored number fell outside the known range
			pub fn is_unknown(&self) -> bool {
				matches!(self, Self::Unknown(_))
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::$first
			}
		}
	};
}

numbered_variant! {
	/// Hero banner layout
	HeroVariant {
		/// Centered text over a flat color or background image
		1 => Centered,
		/// Side image on the left, text on the right
		2 => ImageLeft,
		/// Text on the left, side image on the right
		3 => ImageRight,
		/// Full-bleed background image behind a tinted scrim
		4 => FullBleed,
	}
}

numbered_variant! {
	/// Card grid layout
	CardsVariant {
		/// Title and description only
		1 => Simple,
		/// Adds an icon or badge and an optional subtitle
		2 => Icon,
		/// Adds an image thumbnail
		3 => Image,
	}
}

numbered_variant! {
	/// Carousel behavior
	CarouselVariant {
		/// One slide at a time with dot navigation
		1 => Simple,
		/// Background-image review cards with star ratings
		2 => Reviews,
		/// Typed gallery with arrows, dots and category buttons
		3 => Gallery,
		/// Three items per page, paged with arrows
		4 => PagedGrid,
	}
}

numbered_variant! {
	/// Testimonials layout
	TestimonialsVariant {
		/// Auto-fit grid, shadowed cards
		1 => ShadowGrid,
		/// Auto-fit grid, gradient cards
		2 => GradientGrid,
		/// Auto-fit grid, bordered cards
		3 => BorderGrid,
		/// Horizontally scrolling strip with snap points
		4 => Strip,
	}
}

numbered_variant! {
	/// Call-to-action layout
	CtaVariant {
		/// Centered text and buttons
		1 => Centered,
		/// Image on the left, text on the right
		2 => ImageLeft,
		/// Text on the left, image on the right
		3 => ImageRight,
		/// Full background image behind a tinted scrim
		4 => Background,
	}
}

/// Arrangement of an image/text block.
///
/// Stored as a string; unknown values fall back to `text-left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageTextLayout {
	/// Text column first, image column second
	#[default]
	TextLeft,
	/// Image column first, text column second
	TextRight,
	/// Text stacked above the image
	TextTop,
	/// Text stacked below the image
	TextBottom,
	/// Edge-to-edge image with the text below
	Full,
}

impl ImageTextLayout {
	/// Parse the stored layout name
	pub fn parse(value: &str) -> Self {
		match value.trim() {
			"text-right" => Self::TextRight,
			"text-top" => Self::TextTop,
			"text-bottom" => Self::TextBottom,
			"full" => Self::Full,
			_ => Self::TextLeft,
		}
	}

	/// Wire name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::TextLeft => "text-left",
			Self::TextRight => "text-right",
			Self::TextTop => "text-top",
			Self::TextBottom => "text-bottom",
			Self::Full => "full",
		}
	}

	/// Whether the columns stack vertically
	pub fn is_stacked(&self) -> bool {
		matches!(self, Self::TextTop | Self::TextBottom | Self::Full)
	}

	/// Whether the text column comes before the image
	pub fn text_first(&self) -> bool {
		matches!(self, Self::TextLeft | Self::TextTop)
	}

	/// Whether text is centered in its column
	pub fn centers_text(&self) -> bool {
		matches!(self, Self::TextTop | Self::TextBottom)
	}
}
