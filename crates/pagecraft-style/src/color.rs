//! Hex color parsing
//!
//! Colors are free-form strings from the editor. Only `#rgb` and `#rrggbb`
//! (optionally followed by an alpha pair, which is ignored) are decoded;
//! anything else is passed through untouched wherever a color is substituted
//! into CSS.

use pagecraft_model::props::format_number;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
		.expect("Invalid hex color regex pattern")
});

/// Triplet used when a color cannot be decoded
pub const FALLBACK_RGB: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Decoded RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
}

impl fmt::Display for Rgb {
	/// Formats as `r,g,b` for use inside `rgba()`
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{},{}", self.r, self.g, self.b)
	}
}

/// Decode a hex color
pub fn hex_to_rgb(color: &str) -> Option<Rgb> {
	let caps = HEX_COLOR.captures(color.trim())?;
	let hex = caps.get(1)?.as_str();
	let channel = |s: &str| u8::from_str_radix(s, 16).ok();
	if hex.len() == 3 {
		let mut digits = hex.chars().map(|c| {
			let pair = format!("{c}{c}");
			channel(&pair)
		});
		return Some(Rgb {
			r: digits.next()??,
			g: digits.next()??,
			b: digits.next()??,
		});
	}
	Some(Rgb {
		r: channel(&hex[0..2])?,
		g: channel(&hex[2..4])?,
		b: channel(&hex[4..6])?,
	})
}

/// `r,g,b` triplet of a color, `0,0,0` when it cannot be decoded
pub fn rgb_triplet(color: &str) -> String {
	match hex_to_rgb(color) {
		Some(rgb) => rgb.to_string(),
		None => {
			tracing::debug!(color, "color is not hex, using black for shadow tint");
			FALLBACK_RGB.to_string()
		}
	}
}

/// `rgba()` of a hex color at `alpha`; other color strings pass through
pub fn rgba(color: &str, alpha: f64) -> String {
	match hex_to_rgb(color) {
		Some(rgb) => format!("rgba({},{})", rgb, format_number(alpha)),
		None => color.to_string(),
	}
}

/// `color` at `alpha` opacity, whatever its notation.
///
/// Hex colors become `rgba()`; any other CSS color is mixed with
/// `transparent` so the alpha still applies.
pub fn translucent(color: &str, alpha: f64) -> String {
	let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 };
	match hex_to_rgb(color) {
		Some(rgb) => format!("rgba({},{})", rgb, format_number(alpha)),
		None => {
			tracing::debug!(color, alpha, "color is not hex, mixing with transparent");
			format!(
				"color-mix(in srgb, {} {}%, transparent)",
				color.trim(),
				format_number((alpha * 100.0).round())
			)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("#3b82f6", Some(Rgb { r: 59, g: 130, b: 246 }))]
	#[case("ffffff", Some(Rgb { r: 255, g: 255, b: 255 }))]
	#[case("#fff", Some(Rgb { r: 255, g: 255, b: 255 }))]
	#[case("#0f0", Some(Rgb { r: 0, g: 255, b: 0 }))]
	#[case("#11223380", Some(Rgb { r: 17, g: 34, b: 51 }))]
	#[case("red", None)]
	#[case("#12345", None)]
	#[case("", None)]
	fn test_hex_to_rgb(#[case] input: &str, #[case] expected: Option<Rgb>) {
		assert_eq!(hex_to_rgb(input), expected);
	}

	#[rstest]
	fn test_rgb_triplet_falls_back_to_black() {
		assert_eq!(rgb_triplet("#3b82f6"), "59,130,246");
		assert_eq!(rgb_triplet("rebeccapurple"), "0,0,0");
	}

	#[rstest]
	#[case("#000000", 0.5, "rgba(0,0,0,0.5)")]
	#[case("#ffffff", 1.0, "rgba(255,255,255,1)")]
	#[case("hsl(10, 50%, 50%)", 0.3, "hsl(10, 50%, 50%)")]
	fn test_rgba(#[case] color: &str, #[case] alpha: f64, #[case] expected: &str) {
		assert_eq!(rgba(color, alpha), expected);
	}

	#[rstest]
	#[case("#000000", 0.4, "rgba(0,0,0,0.4)")]
	#[case("red", 0.4, "color-mix(in srgb, red 40%, transparent)")]
	#[case("rgb(10, 20, 30)", 0.6, "color-mix(in srgb, rgb(10, 20, 30) 60%, transparent)")]
	#[case("red", 1.5, "color-mix(in srgb, red 100%, transparent)")]
	#[case("#ffffff", -1.0, "rgba(255,255,255,0)")]
	fn test_translucent_keeps_alpha_for_any_notation(
		#[case] color: &str,
		#[case] alpha: f64,
		#[case] expected: &str,
	) {
		// Act
		let value = translucent(color, alpha);

		// Assert
		assert_eq!(value, expected);
	}
}
