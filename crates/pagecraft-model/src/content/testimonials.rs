//! Testimonials props

use crate::props::Props;
use crate::variant::TestimonialsVariant;

/// Card hover animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverAnimation {
	/// No hover effect
	None,
	/// Raise the card
	#[default]
	Lift,
	/// Grow the card slightly
	Scale,
	/// Nudge the card to the right
	SlideRight,
	/// Glow in the accent color
	Glow,
	/// Thicken the accent border
	BorderGrow,
	/// Fill the card with the accent color
	FillColor,
}

impl HoverAnimation {
	/// Parse an animation name; unknown names select `lift`
	pub fn parse(value: &str) -> Self {
		match value.trim() {
			"none" => Self::None,
			"scale" => Self::Scale,
			"slideRight" | "slide-right" => Self::SlideRight,
			"glow" => Self::Glow,
			"borderGrow" | "border-grow" => Self::BorderGrow,
			"fillColor" | "fill-color" => Self::FillColor,
			_ => Self::Lift,
		}
	}

	/// Animation name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Lift => "lift",
			Self::Scale => "scale",
			Self::SlideRight => "slideRight",
			Self::Glow => "glow",
			Self::BorderGrow => "borderGrow",
			Self::FillColor => "fillColor",
		}
	}
}

/// Hover transition speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationSpeed {
	/// 0.15s
	Fast,
	/// 0.3s
	#[default]
	Normal,
	/// 0.5s
	Slow,
}

impl AnimationSpeed {
	/// Parse a speed name; unknown names select `normal`
	pub fn parse(value: &str) -> Self {
		match value.trim() {
			"fast" => Self::Fast,
			"slow" => Self::Slow,
			_ => Self::Normal,
		}
	}

	/// Duration in seconds
	pub fn seconds(&self) -> f64 {
		match self {
			Self::Fast => 0.15,
			Self::Normal => 0.3,
			Self::Slow => 0.5,
		}
	}
}

/// Hover transition easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
	/// `ease`
	#[default]
	Ease,
	/// `ease-in`
	EaseIn,
	/// `ease-out`
	EaseOut,
	/// `ease-in-out`
	EaseInOut,
	/// `linear`
	Linear,
	/// Overshooting cubic bezier
	Bounce,
}

impl Easing {
	/// Parse an easing name; unknown names select `ease`
	pub fn parse(value: &str) -> Self {
		match value.trim() {
			"ease-in" | "easeIn" => Self::EaseIn,
			"ease-out" | "easeOut" => Self::EaseOut,
			"ease-in-out" | "easeInOut" => Self::EaseInOut,
			"linear" => Self::Linear,
			"bounce" => Self::Bounce,
			_ => Self::Ease,
		}
	}

	/// CSS timing function
	pub fn css(&self) -> &'static str {
		match self {
			Self::Ease => "ease",
			Self::EaseIn => "ease-in",
			Self::EaseOut => "ease-out",
			Self::EaseInOut => "ease-in-out",
			Self::Linear => "linear",
			Self::Bounce => "cubic-bezier(0.68, -0.55, 0.265, 1.55)",
		}
	}
}

/// One quote
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
	/// Quote text (`quote`, falling back to `body`)
	pub quote: String,
	/// Person quoted
	pub author: String,
	/// Author's company
	pub company: Option<String>,
	/// Author's role
	pub role: Option<String>,
	/// Author photo URL
	pub photo: Option<String>,
}

impl Testimonial {
	/// Read one quote object
	pub fn from_props(props: &Props) -> Self {
		Self {
			quote: props.first_non_empty(&["quote", "body"]).unwrap_or_default(),
			author: props.non_empty_or("author", "Anonymous"),
			company: props.non_empty("company"),
			role: props.non_empty("role"),
			photo: props.first_non_empty(&["photo", "avatar", "image"]),
		}
	}

	/// Role and company joined for the byline
	pub fn affiliation(&self) -> Option<String> {
		match (&self.role, &self.company) {
			(Some(role), Some(company)) => Some(format!("{}, {}", role, company)),
			(Some(one), None) | (None, Some(one)) => Some(one.clone()),
			(None, None) => None,
		}
	}
}

/// Resolved testimonials content
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialsContent {
	/// Stored layout variant
	pub variant: TestimonialsVariant,
	/// Section heading
	pub heading: String,
	/// Optional subheading
	pub subheading: Option<String>,
	/// Quotes in display order
	pub items: Vec<Testimonial>,
	/// Section background
	pub background_color: String,
	/// Card background
	pub card_background: String,
	/// Body text color
	pub text_color: String,
	/// Accent for quote marks, borders and hover effects
	pub accent_color: String,
	/// Card hover animation
	pub hover_animation: HoverAnimation,
	/// Hover transition speed
	pub animation_speed: AnimationSpeed,
	/// Hover transition easing
	pub easing: Easing,
}

impl TestimonialsContent {
	/// Resolve testimonials props
	pub fn from_props(props: &Props) -> Self {
		let items_key = if props.contains_key("testimonials") {
			"testimonials"
		} else {
			"items"
		};
		Self {
			variant: TestimonialsVariant::from_props(props, "variant"),
			heading: props.text_or("heading", "What Our Clients Say"),
			subheading: props.non_empty("subheading"),
			items: props
				.list(items_key)
				.iter()
				.map(|item| Testimonial::from_props(&Props::from_value_ref(item)))
				.collect(),
			background_color: props.non_empty_or("backgroundColor", "#f8fafc"),
			card_background: props.non_empty_or("cardBackgroundColor", "#ffffff"),
			text_color: props.non_empty_or("textColor", "#334155"),
			accent_color: props.non_empty_or("accentColor", "#3b82f6"),
			hover_animation: props
				.text("hoverAnimation")
				.map(|s| HoverAnimation::parse(&s))
				.unwrap_or_default(),
			animation_speed: props
				.text("animationSpeed")
				.map(|s| AnimationSpeed::parse(&s))
				.unwrap_or_default(),
			easing: props
				.text("easing")
				.map(|s| Easing::parse(&s))
				.unwrap_or_default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_quote_falls_back_to_body() {
		let t = Testimonial::from_props(&Props::from_value(json!({ "body": "Great", "role": "CTO" })));
		assert_eq!(t.quote, "Great");
		assert_eq!(t.author, "Anonymous");
		assert_eq!(t.affiliation().as_deref(), Some("CTO"));
	}

	#[rstest]
	fn test_affiliation_joins_role_and_company() {
		let t = Testimonial::from_props(&Props::from_value(
			json!({ "quote": "q", "role": "CTO", "company": "Acme" }),
		));
		assert_eq!(t.affiliation().as_deref(), Some("CTO, Acme"));
	}

	#[rstest]
	#[case("none", HoverAnimation::None)]
	#[case("slideRight", HoverAnimation::SlideRight)]
	#[case("border-grow", HoverAnimation::BorderGrow)]
	#[case("spin", HoverAnimation::Lift)]
	fn test_hover_animation_parse(#[case] raw: &str, #[case] expected: HoverAnimation) {
		assert_eq!(HoverAnimation::parse(raw), expected);
	}

	#[rstest]
	fn test_items_read_from_either_key() {
		let a = TestimonialsContent::from_props(&Props::from_value(json!({ "items": [{}] })));
		let b = TestimonialsContent::from_props(&Props::from_value(json!({ "testimonials": [{}, {}] })));
		assert_eq!(a.items.len(), 1);
		assert_eq!(b.items.len(), 2);
	}
}
