//! # pagecraft-style
//!
//! Style resolvers. Each resolver takes the partial style the editor stored,
//! fills every unset field from an immutable defaults constant and returns
//! CSS declarations. Resolvers are pure: the same input always produces the
//! same string, and malformed colors are substituted verbatim rather than
//! rejected.

pub mod button;
pub mod card;
pub mod chrome;
pub mod color;
pub mod css;
pub mod hover;
pub mod shadow;

pub use button::{
	ButtonDefaults, DEFAULT_BUTTON_STYLE, ResolvedButtonStyle, resolve_button_style,
	resolve_button_style_with,
};
pub use card::{ResolvedCardCss, resolve_card_css};
pub use chrome::{
	DEFAULT_FOOTER_STYLE, DEFAULT_NAV_STYLE, FooterStyleDefaults, NavStyleDefaults,
	ResolvedFooterStyle, ResolvedNavStyle, resolve_footer_style, resolve_nav_style,
};
pub use color::{Rgb, hex_to_rgb, rgb_triplet, rgba, translucent};
pub use css::Declarations;
pub use hover::{LinkHover, testimonial_hover_css};
pub use shadow::{hover_shadow_value, shadow_value};
