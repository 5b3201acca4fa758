//! # pagecraft-render
//!
//! Turns the pagecraft content model into HTML.
//!
//! - [`render_section`] maps one section to a self-contained fragment: markup
//!   plus any `<style>` and `<script>` it needs, scoped under a DOM id derived
//!   from the section id so instances never collide.
//! - [`render_nav`] and [`render_footer`] produce the page chrome.
//! - [`Assembler`] wraps everything into a document; [`Document::for_preview`]
//!   absolutizes root-relative URLs for viewing outside the site origin.
//!
//! Rendering never fails. Missing or malformed props fall back to defaults,
//! and the same input always renders to the same bytes.
//!
//! ## Example
//!
//! ```
//! use pagecraft_model::{FooterConfig, NavConfig, PageLayout, SectionType};
//! use pagecraft_render::assemble_page;
//!
//! let mut layout = PageLayout::new();
//! layout.add_section(SectionType::Hero);
//! layout.add_section(SectionType::Cta);
//!
//! let doc = assemble_page(
//!     &NavConfig::default(),
//!     layout.sections(),
//!     &FooterConfig::default(),
//!     "Home",
//! );
//! assert!(doc.as_str().starts_with("<!DOCTYPE html>"));
//! ```

pub mod assemble;
pub mod footer;
pub mod html;
pub mod markup;
pub mod nav;
pub mod placeholder;
pub mod scripts;
pub mod sections;
pub mod settings;
pub mod video;

pub use assemble::{Assembler, BASE_STYLESHEET, Document, absolutize, assemble_page};
pub use footer::render_footer;
pub use html::Fragment;
pub use markup::{Inline, ListKind, ParagraphNode, parse_inline, parse_paragraph};
pub use nav::render_nav;
pub use scripts::{CarouselState, GalleryState, NavMenuState, PagedCarousel};
pub use sections::{render_fallback, render_section};
pub use settings::AssemblerSettings;
pub use video::VideoSource;
