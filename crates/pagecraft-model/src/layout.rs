//! Ordered section list and the editor operations over it

use crate::error::{ModelError, ModelResult};
use crate::props::Props;
use crate::section::{Section, SectionType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The ordered sections of a page.
///
/// Serialized as a bare JSON array of `{id, type, title, props}` entries,
/// which is the `layout` stored next to a page's rendered content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageLayout {
	sections: Vec<Section>,
}

impl PageLayout {
	/// Create an empty layout
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a layout from sections, assigning positional ids where missing.
	///
	/// A section stored without an id gets `section-<position>` (1-based), so
	/// reloading the same layout always yields the same ids and therefore the
	/// same rendered DOM ids.
	pub fn from_sections(sections: Vec<Section>) -> ModelResult<Self> {
		let mut seen = HashSet::new();
		let mut sections = sections;
		for (index, section) in sections.iter_mut().enumerate() {
			if section.id.trim().is_empty() {
				section.id = format!("section-{}", index + 1);
			}
			if !seen.insert(section.id.clone()) {
				return Err(ModelError::DuplicateSectionId(section.id.clone()));
			}
		}
		Ok(Self { sections })
	}

	/// Decode a stored layout array
	pub fn from_json(json: &str) -> ModelResult<Self> {
		let sections: Vec<Section> = serde_json::from_str(json)?;
		Self::from_sections(sections)
	}

	/// Encode as a layout array
	pub fn to_json(&self) -> ModelResult<String> {
		Ok(serde_json::to_string(&self.sections)?)
	}

	/// Append a new section of the given type with default props.
	///
	/// Returns the generated id.
	pub fn add_section(&mut self, section_type: SectionType) -> String {
		let section = Section::new(section_type);
		let id = section.id.clone();
		tracing::debug!(id = %id, section_type = %section.section_type(), "section added");
		self.sections.push(section);
		id
	}

	/// Append an existing section
	pub fn push(&mut self, section: Section) -> ModelResult<()> {
		self.ensure_unique(&section.id)?;
		self.sections.push(section);
		Ok(())
	}

	/// Insert a section at `index`, shifting later sections down
	pub fn insert_section(&mut self, index: usize, section: Section) -> ModelResult<()> {
		if index > self.sections.len() {
			return Err(ModelError::IndexOutOfRange {
				index,
				len: self.sections.len(),
			});
		}
		self.ensure_unique(&section.id)?;
		self.sections.insert(index, section);
		Ok(())
	}

	/// Move the section at `from` so that it ends up at `to`
	pub fn move_section(&mut self, from: usize, to: usize) -> ModelResult<()> {
		let len = self.sections.len();
		for index in [from, to] {
			if index >= len {
				return Err(ModelError::IndexOutOfRange { index, len });
			}
		}
		let section = self.sections.remove(from);
		self.sections.insert(to, section);
		Ok(())
	}

	/// Remove a section by id and return it
	pub fn remove_section(&mut self, id: &str) -> ModelResult<Section> {
		let index = self.position(id)?;
		Ok(self.sections.remove(index))
	}

	/// Edit a section's props in place
	pub fn update_props<F>(&mut self, id: &str, edit: F) -> ModelResult<()>
	where
		F: FnOnce(&mut Props),
	{
		let index = self.position(id)?;
		edit(&mut self.sections[index].props);
		Ok(())
	}

	/// Set or clear a section's display title
	pub fn rename_section(&mut self, id: &str, title: Option<String>) -> ModelResult<()> {
		let index = self.position(id)?;
		self.sections[index].title = title;
		Ok(())
	}

	/// Look up a section by id
	pub fn section(&self, id: &str) -> Option<&Section> {
		self.sections.iter().find(|s| s.id == id)
	}

	/// Sections in page order
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	/// Iterate sections in page order
	pub fn iter(&self) -> std::slice::Iter<'_, Section> {
		self.sections.iter()
	}

	/// Number of sections
	pub fn len(&self) -> usize {
		self.sections.len()
	}

	/// Whether the page has no sections
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	fn position(&self, id: &str) -> ModelResult<usize> {
		self.sections
			.iter()
			.position(|s| s.id == id)
			.ok_or_else(|| ModelError::SectionNotFound(id.to_string()))
	}

	fn ensure_unique(&self, id: &str) -> ModelResult<()> {
		if self.section(id).is_some() {
			return Err(ModelError::DuplicateSectionId(id.to_string()));
		}
		Ok(())
	}
}

impl<'de> Deserialize<'de> for PageLayout {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let sections = Vec::<Section>::deserialize(deserializer)?;
		Self::from_sections(sections).map_err(serde::de::Error::custom)
	}
}

impl<'a> IntoIterator for &'a PageLayout {
	type Item = &'a Section;
	type IntoIter = std::slice::Iter<'a, Section>;

	fn into_iter(self) -> Self::IntoIter {
		self.sections.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn layout_of(ids: &[&str]) -> PageLayout {
		PageLayout::from_sections(
			ids.iter()
				.map(|id| Section::with_props(*id, SectionType::Hero, Props::new()))
				.collect(),
		)
		.unwrap()
	}

	fn ids(layout: &PageLayout) -> Vec<&str> {
		layout.iter().map(|s| s.id.as_str()).collect()
	}

	#[rstest]
	fn test_missing_ids_are_positional() {
		// Arrange
		let raw = json!([
			{ "type": "hero" },
			{ "id": "keep", "type": "cards" },
			{ "id": "", "type": "cta" }
		])
		.to_string();

		// Act
		let layout = PageLayout::from_json(&raw).unwrap();

		// Assert
		assert_eq!(ids(&layout), vec!["section-1", "keep", "section-3"]);
	}

	#[rstest]
	fn test_duplicate_ids_rejected() {
		let raw = json!([{ "id": "a", "type": "hero" }, { "id": "a", "type": "cta" }]).to_string();
		assert!(matches!(
			PageLayout::from_json(&raw),
			Err(ModelError::DuplicateSectionId(id)) if id == "a"
		));
	}

	#[rstest]
	#[case(0, 2, vec!["b", "c", "a"])]
	#[case(2, 0, vec!["c", "a", "b"])]
	#[case(1, 1, vec!["a", "b", "c"])]
	fn test_move_section(#[case] from: usize, #[case] to: usize, #[case] expected: Vec<&str>) {
		// Arrange
		let mut layout = layout_of(&["a", "b", "c"]);

		// Act
		layout.move_section(from, to).unwrap();

		// Assert
		assert_eq!(ids(&layout), expected);
	}

	#[rstest]
	fn test_move_out_of_range() {
		let mut layout = layout_of(&["a"]);
		assert!(matches!(
			layout.move_section(0, 3),
			Err(ModelError::IndexOutOfRange { index: 3, len: 1 })
		));
	}

	#[rstest]
	fn test_add_update_rename_remove() {
		// Arrange
		let mut layout = PageLayout::new();

		// Act
		let id = layout.add_section(SectionType::Cards);
		layout
			.update_props(&id, |props| {
				props.set("heading", "Features");
			})
			.unwrap();
		layout.rename_section(&id, Some("Feature grid".to_string())).unwrap();

		// Assert
		let section = layout.section(&id).unwrap();
		assert_eq!(section.props.text("heading").as_deref(), Some("Features"));
		assert_eq!(section.display_title(), "Feature grid");
		let removed = layout.remove_section(&id).unwrap();
		assert_eq!(removed.id, id);
		assert!(layout.is_empty());
	}

	#[rstest]
	fn test_unknown_id_errors() {
		let mut layout = layout_of(&["a"]);
		assert!(matches!(
			layout.remove_section("zzz"),
			Err(ModelError::SectionNotFound(_))
		));
		assert!(layout.rename_section("zzz", None).is_err());
	}

	#[rstest]
	fn test_insert_section() {
		let mut layout = layout_of(&["a", "c"]);
		layout
			.insert_section(1, Section::with_props("b", SectionType::Blog, Props::new()))
			.unwrap();
		assert_eq!(ids(&layout), vec!["a", "b", "c"]);
		assert!(layout
			.insert_section(1, Section::with_props("b", SectionType::Blog, Props::new()))
			.is_err());
	}

	#[rstest]
	fn test_json_round_trip_preserves_order_and_ids() {
		// Arrange
		let layout = layout_of(&["x", "y"]);

		// Act
		let decoded = PageLayout::from_json(&layout.to_json().unwrap()).unwrap();

		// Assert
		assert_eq!(decoded, layout);
	}
}
