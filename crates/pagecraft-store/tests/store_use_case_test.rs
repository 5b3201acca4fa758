//! Save, edit and reload flows against the in-memory store

use pagecraft_model::{PageDraft, PageLayout, SectionType};
use pagecraft_render::AssemblerSettings;
use pagecraft_store::{InMemoryPageStore, PageRecord, PageStore, StoreError};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn draft() -> PageDraft {
	let mut layout = PageLayout::new();
	let hero = layout.add_section(SectionType::Hero);
	layout.add_section(SectionType::Testimonials);
	layout
		.update_props(&hero, |props| {
			props.set("heading", "Welcome");
		})
		.unwrap();
	PageDraft::new("Home", "/").with_layout(layout)
}

#[rstest]
#[tokio::test]
async fn test_resaving_unchanged_draft_is_idempotent(draft: PageDraft) {
	// Arrange
	let store = InMemoryPageStore::new();
	let settings = AssemblerSettings::default();
	let saved = store
		.create(PageRecord::compose(&draft, &settings))
		.await
		.unwrap();
	let id = saved.id.clone().unwrap();

	// Act
	let resaved = store
		.update(&id, PageRecord::compose(&draft, &settings))
		.await
		.unwrap();

	// Assert
	assert_eq!(resaved, saved);
	assert_eq!(resaved.revision, 1);
	assert_eq!(store.get(&id).await.unwrap().content, saved.content);
}

#[rstest]
#[tokio::test]
async fn test_edit_reload_and_recompose(draft: PageDraft) {
	// Arrange
	let store = InMemoryPageStore::new();
	let settings = AssemblerSettings::default();
	let saved = store
		.create(PageRecord::compose(&draft, &settings))
		.await
		.unwrap();
	let id = saved.id.clone().unwrap();

	// Act
	let mut editing = store.get(&id).await.unwrap().draft;
	let hero = editing.layout.sections()[0].id.clone();
	editing
		.layout
		.update_props(&hero, |props| {
			props.set("heading", "Hello again");
		})
		.unwrap();
	let updated = store
		.update(&id, PageRecord::compose(&editing, &settings))
		.await
		.unwrap();

	// Assert
	assert_eq!(updated.revision, 2);
	assert!(updated.content.contains("Hello again"));
	assert!(!updated.content.contains(">Welcome<"));
	assert_eq!(store.len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_moving_onto_taken_path_is_rejected(draft: PageDraft) {
	// Arrange
	let store = InMemoryPageStore::new();
	let settings = AssemblerSettings::default();
	store
		.create(PageRecord::compose(&draft, &settings))
		.await
		.unwrap();
	let about = store
		.create(PageRecord::compose(&PageDraft::new("About", "/about"), &settings))
		.await
		.unwrap();

	// Act
	let mut moved = about.clone();
	moved.draft.path = "/".to_string();
	let result = store.update(about.id.as_deref().unwrap(), moved).await;

	// Assert
	assert!(matches!(result, Err(StoreError::DuplicatePath(p)) if p == "/"));
	assert_eq!(store.get_by_path("/about").await.unwrap(), about);
}

#[rstest]
#[tokio::test]
async fn test_list_is_ordered_by_path() {
	// Arrange
	let store = InMemoryPageStore::new();
	let settings = AssemblerSettings::default();
	for path in ["/pricing", "/", "/about"] {
		store
			.create(PageRecord::compose(&PageDraft::new(path, path), &settings))
			.await
			.unwrap();
	}

	// Act
	let pages = store.list().await.unwrap();

	// Assert
	let paths: Vec<&str> = pages.iter().map(|p| p.path()).collect();
	assert_eq!(paths, vec!["/", "/about", "/pricing"]);
}

#[rstest]
#[tokio::test]
async fn test_store_is_usable_as_trait_object() {
	// Arrange
	let store: Arc<dyn PageStore> = Arc::new(InMemoryPageStore::new());
	let record = PageRecord::compose(
		&PageDraft::new("Blog", "/blog").published(true),
		&AssemblerSettings::default(),
	);

	// Act
	let saved = store.create(record).await.unwrap();

	// Assert
	let fetched = store.get(saved.id.as_deref().unwrap()).await.unwrap();
	assert!(fetched.is_published());
	assert!(matches!(store.get("nope").await, Err(StoreError::NotFound(_))));
}
