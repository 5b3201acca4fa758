//! # pagecraft-model
//!
//! Content model of the pagecraft page builder.
//!
//! A page is an ordered [`PageLayout`] of [`Section`]s framed by a
//! [`NavConfig`] and a [`FooterConfig`]. Each section carries an open
//! [`Props`] bag; renderers read it through the typed views in [`content`],
//! which substitute documented defaults for anything missing or malformed.
//!
//! ## Example
//!
//! ```
//! use pagecraft_model::prelude::*;
//!
//! let mut layout = PageLayout::new();
//! let id = layout.add_section(SectionType::Hero);
//! layout.update_props(&id, |props| {
//!     props.set("heading", "Hello");
//! }).unwrap();
//!
//! let section = layout.section(&id).unwrap();
//! match SectionContent::from_section(section) {
//!     SectionContent::Hero(hero) => assert_eq!(hero.heading, "Hello"),
//!     _ => unreachable!(),
//! }
//! ```

pub mod button;
pub mod chrome;
pub mod content;
pub mod defaults;
pub mod draft;
pub mod error;
pub mod layout;
pub mod props;
pub mod section;
pub mod variant;

pub use button::{ButtonStyle, ButtonVariant, ShadowLevel};
pub use chrome::{
	FooterConfig, FooterLink, FooterSection, FooterStyle, LinkHoverEffect, LinkOverrides,
	NavConfig, NavLink, NavStyle,
};
pub use content::{CallToAction, SectionContent};
pub use defaults::default_props;
pub use draft::PageDraft;
pub use error::{ModelError, ModelResult};
pub use layout::PageLayout;
pub use props::Props;
pub use section::{Section, SectionType};
pub use variant::{
	CardsVariant, CarouselVariant, CtaVariant, HeroVariant, ImageTextLayout, TestimonialsVariant,
};

/// Commonly used types
pub mod prelude {
	pub use crate::button::{ButtonStyle, ButtonVariant, ShadowLevel};
	pub use crate::chrome::{FooterConfig, LinkOverrides, NavConfig};
	pub use crate::content::SectionContent;
	pub use crate::draft::PageDraft;
	pub use crate::error::{ModelError, ModelResult};
	pub use crate::layout::PageLayout;
	pub use crate::props::Props;
	pub use crate::section::{Section, SectionType};
}
