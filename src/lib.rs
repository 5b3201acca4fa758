//! # Pagecraft
//!
//! A page builder's rendering engine: editable sections in, a complete HTML
//! document out.
//!
//! The workspace is split by concern and re-exported here:
//!
//! - [`model`]: sections, their open props bags and typed views, nav and
//!   footer configs, the editor's [`PageLayout`](model::PageLayout) and
//!   [`PageDraft`](model::PageDraft)
//! - [`style`]: pure style resolvers for buttons, cards, shadows and link
//!   hover effects
//! - [`render`]: section, nav and footer renderers, the page
//!   [`Assembler`](render::Assembler) and preview URL rewriting
//! - [`store`]: composed [`PageRecord`](store::PageRecord)s and the
//!   [`PageStore`](store::PageStore) persistence seam
//! - [`conf`]: TOML settings with environment overrides
//!
//! ## Quick Example
//!
//! ```
//! use pagecraft::prelude::*;
//!
//! let mut draft = PageDraft::new("Home", "/");
//! let hero = draft.layout.add_section(SectionType::Hero);
//! draft
//!     .layout
//!     .update_props(&hero, |props| {
//!         props.set("heading", "Build pages fast");
//!     })
//!     .unwrap();
//!
//! let settings = PageBuilderSettings::default();
//! let record = PageRecord::compose(&draft, &settings.assembler);
//! assert!(record.content.contains("Build pages fast"));
//! ```

pub mod conf;

pub use pagecraft_model as model;
pub use pagecraft_render as render;
pub use pagecraft_store as store;
pub use pagecraft_style as style;

pub use conf::{ConfError, ConfResult, PageBuilderSettings};

/// Commonly used types across the workspace
pub mod prelude {
	pub use crate::conf::PageBuilderSettings;
	pub use pagecraft_model::prelude::*;
	pub use pagecraft_render::{Assembler, AssemblerSettings, Document, render_section};
	pub use pagecraft_store::{InMemoryPageStore, PageRecord, PageStore};
}
