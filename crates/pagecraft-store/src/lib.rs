//! # pagecraft-store
//!
//! Saved pages for the pagecraft page builder.
//!
//! A [`PageRecord`] pairs the editor's [`PageDraft`](pagecraft_model::PageDraft)
//! with the HTML rendered from it. [`PageStore`] is the persistence seam;
//! [`InMemoryPageStore`] is the bundled backend.
//!
//! ```
//! use pagecraft_model::PageDraft;
//! use pagecraft_render::AssemblerSettings;
//! use pagecraft_store::{InMemoryPageStore, PageRecord, PageStore};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = InMemoryPageStore::new();
//! let record = PageRecord::compose(&PageDraft::new("Home", "/"), &AssemblerSettings::default());
//! let saved = store.create(record).await.unwrap();
//! assert_eq!(store.get_by_path("/").await.unwrap(), saved);
//! # }
//! ```

pub mod error;
pub mod record;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use record::{PageRecord, normalize_path};
pub use store::{InMemoryPageStore, PageStore};
