//! Hover effect CSS for chrome links and testimonial cards

use crate::color::rgba;
use crate::css::Declarations;
use pagecraft_model::LinkHoverEffect;
use pagecraft_model::content::{AnimationSpeed, Easing, HoverAnimation};
use pagecraft_model::props::format_number;

/// Inputs of a link hover effect
#[derive(Debug, Clone, PartialEq)]
pub struct LinkHover {
	/// Treatment
	pub effect: LinkHoverEffect,
	/// Link color at rest
	pub color: String,
	/// Link color on hover
	pub hover_color: String,
	/// Link background on hover (background treatments)
	pub hover_background: String,
	/// Underline color (underline treatments)
	pub underline_color: String,
	/// Underline thickness in pixels
	pub underline_thickness: f64,
	/// Transition duration in milliseconds
	pub transition_ms: u32,
	/// Transition delay in milliseconds
	pub delay_ms: u32,
}

impl LinkHover {
	fn timing(&self, property: &str) -> String {
		format!(
			"{} {}ms ease {}ms",
			property, self.transition_ms, self.delay_ms
		)
	}

	fn has_underline(&self) -> bool {
		matches!(
			self.effect,
			LinkHoverEffect::Underline | LinkHoverEffect::UnderlineAndBg
		)
	}

	fn has_background(&self) -> bool {
		matches!(
			self.effect,
			LinkHoverEffect::Background | LinkHoverEffect::UnderlineAndBg
		)
	}

	/// Rules styling every link matched by `selector`
	pub fn css(&self, selector: &str) -> String {
		let mut transitions = vec![self.timing("color")];
		let mut base = Declarations::new();
		base.set("color", self.color.as_str())
			.set("text-decoration", "none")
			.set("position", "relative");
		let mut hover = Declarations::new().with("color", self.hover_color.as_str());

		if self.has_background() {
			base.set("padding", "6px 10px").set("border-radius", "6px");
			hover.set("background-color", self.hover_background.as_str());
			transitions.push(self.timing("background-color"));
		}
		base.set("transition", transitions.join(", "));

		let mut out = base.rule(selector);
		out.push_str(&hover.rule(&format!("{}:hover", selector)));

		if self.has_underline() {
			let inset = if self.has_background() { "10px" } else { "0" };
			let after = Declarations::new()
				.with("content", "''")
				.with("position", "absolute")
				.with("left", inset)
				.with("right", inset)
				.with("bottom", "-2px")
				.with(
					"height",
					format!("{}px", format_number(self.underline_thickness)),
				)
				.with("background", self.underline_color.as_str())
				.with("transform", "scaleX(0)")
				.with("transform-origin", "left")
				.with("transition", self.timing("transform"));
			out.push_str(&after.rule(&format!("{}::after", selector)));
			out.push_str(
				&Declarations::new()
					.with("transform", "scaleX(1)")
					.rule(&format!("{}:hover::after", selector)),
			);
		}
		out
	}
}

/// Hover rules for a testimonial card
pub fn testimonial_hover_css(
	selector: &str,
	animation: HoverAnimation,
	speed: AnimationSpeed,
	easing: Easing,
	accent: &str,
) -> String {
	let mut base = Declarations::new();
	let mut hover = Declarations::new();
	if animation == HoverAnimation::None {
		base.set("transition", "none");
		return base.rule(selector);
	}
	base.set(
		"transition",
		format!("all {}s {}", format_number(speed.seconds()), easing.css()),
	);
	match animation {
		HoverAnimation::None => {}
		HoverAnimation::Lift => {
			hover.set("transform", "translateY(-8px)")
				.set("box-shadow", "0 12px 24px rgba(0,0,0,0.15)");
		}
		HoverAnimation::Scale => {
			hover.set("transform", "scale(1.05)");
		}
		HoverAnimation::SlideRight => {
			hover.set("transform", "translateX(8px)");
		}
		HoverAnimation::Glow => {
			hover.set("box-shadow", format!("0 0 24px {}", rgba(accent, 0.5)));
		}
		HoverAnimation::BorderGrow => {
			base.set("border", "2px solid transparent");
			hover.set("border-color", accent)
				.set("box-shadow", format!("inset 0 0 0 2px {}", accent));
		}
		HoverAnimation::FillColor => {
			hover.set("background", accent).set("color", "#ffffff");
		}
	}
	let mut out = base.rule(selector);
	out.push_str(&hover.rule(&format!("{}:hover", selector)));
	out
}
