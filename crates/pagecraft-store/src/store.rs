//! Page storage backends

use crate::error::{StoreError, StoreResult};
use crate::record::{PageRecord, normalize_path};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Persistence for composed pages.
///
/// Paths are unique across the store. Implementations compare paths in
/// their [normalized](crate::normalize_path) form.
#[async_trait]
pub trait PageStore: Send + Sync {
	/// Save a new page and return it with its assigned id
	async fn create(&self, record: PageRecord) -> StoreResult<PageRecord>;

	/// Replace the page stored under `id`.
	///
	/// Saving content identical to what is stored leaves the record,
	/// including its revision, untouched.
	async fn update(&self, id: &str, record: PageRecord) -> StoreResult<PageRecord>;

	/// Fetch a page by id
	async fn get(&self, id: &str) -> StoreResult<PageRecord>;

	/// Fetch the page served at `path`
	async fn get_by_path(&self, path: &str) -> StoreResult<PageRecord>;

	/// Every stored page, ordered by path
	async fn list(&self) -> StoreResult<Vec<PageRecord>>;
}

/// Process-local store, mainly for tests and the CLI.
///
/// Clones share the same pages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPageStore {
	pages: Arc<RwLock<HashMap<String, PageRecord>>>,
}

impl InMemoryPageStore {
	/// Empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored pages
	pub fn len(&self) -> usize {
		self.pages.read().len()
	}

	/// Whether the store holds no pages
	pub fn is_empty(&self) -> bool {
		self.pages.read().is_empty()
	}
}

fn path_taken(pages: &HashMap<String, PageRecord>, path: &str, except: Option<&str>) -> bool {
	pages
		.iter()
		.any(|(id, page)| Some(id.as_str()) != except && page.path() == path)
}

#[async_trait]
impl PageStore for InMemoryPageStore {
	async fn create(&self, mut record: PageRecord) -> StoreResult<PageRecord> {
		record.draft.path = normalize_path(&record.draft.path);
		let mut pages = self.pages.write();
		if path_taken(&pages, record.path(), None) {
			return Err(StoreError::DuplicatePath(record.draft.path));
		}
		let id = uuid::Uuid::new_v4().to_string();
		record.id = Some(id.clone());
		record.revision = 1;
		tracing::debug!(id = %id, path = %record.path(), "page created");
		pages.insert(id, record.clone());
		Ok(record)
	}

	async fn update(&self, id: &str, mut record: PageRecord) -> StoreResult<PageRecord> {
		record.draft.path = normalize_path(&record.draft.path);
		let mut pages = self.pages.write();
		if path_taken(&pages, record.path(), Some(id)) {
			return Err(StoreError::DuplicatePath(record.draft.path));
		}
		let stored = pages
			.get_mut(id)
			.ok_or_else(|| StoreError::NotFound(id.to_string()))?;
		if stored.same_content(&record) {
			tracing::debug!(id, "page unchanged");
			return Ok(stored.clone());
		}
		record.id = Some(id.to_string());
		record.revision = stored.revision + 1;
		tracing::debug!(id, revision = record.revision, "page updated");
		*stored = record.clone();
		Ok(record)
	}

	async fn get(&self, id: &str) -> StoreResult<PageRecord> {
		self.pages
			.read()
			.get(id)
			.cloned()
			.ok_or_else(|| StoreError::NotFound(id.to_string()))
	}

	async fn get_by_path(&self, path: &str) -> StoreResult<PageRecord> {
		let path = normalize_path(path);
		self.pages
			.read()
			.values()
			.find(|page| page.path() == path)
			.cloned()
			.ok_or(StoreError::NotFound(path))
	}

	async fn list(&self) -> StoreResult<Vec<PageRecord>> {
		let mut pages: Vec<PageRecord> = self.pages.read().values().cloned().collect();
		pages.sort_by(|a, b| a.path().cmp(b.path()));
		Ok(pages)
	}
}
