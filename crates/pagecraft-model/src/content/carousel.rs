//! Carousel props

use crate::props::Props;
use crate::variant::CarouselVariant;

/// Category assigned to gallery items without a `type`
pub const DEFAULT_ITEM_TYPE: &str = "default";

/// One carousel item.
///
/// The fields used depend on the variant: simple slides read `image` and
/// `title`, review cards read `background_image`, `stars`, `text` and
/// `author`, gallery items read `image` and `item_type`, and paged grid
/// items read `image`, `title` and `description`.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselItem {
	/// Stable item id; positional (`item-N`) when the editor omitted it
	pub id: String,
	/// Foreground image
	pub image: Option<String>,
	/// Full-bleed background image (review cards)
	pub background_image: Option<String>,
	/// Item title
	pub title: Option<String>,
	/// Item description (paged grid)
	pub description: Option<String>,
	/// Review text
	pub text: Option<String>,
	/// Review author
	pub author: Option<String>,
	/// Star rating as stored
	pub stars: f64,
	/// Gallery category
	pub item_type: String,
}

impl CarouselItem {
	/// Read one item; `index` seeds the positional fallback id
	pub fn from_props(props: &Props, index: usize) -> Self {
		Self {
			id: props
				.non_empty("id")
				.unwrap_or_else(|| format!("item-{}", index + 1)),
			image: props.first_non_empty(&["image", "imageUrl"]),
			background_image: props.non_empty("backgroundImage"),
			title: props.non_empty("title"),
			description: props.non_empty("description"),
			text: props.first_non_empty(&["text", "review"]),
			author: props.non_empty("author"),
			stars: props.number_or("stars", 5.0),
			item_type: props.non_empty_or("type", DEFAULT_ITEM_TYPE),
		}
	}

	/// Number of filled stars: `clamp(round(stars), 0, 5)`
	pub fn star_count(&self) -> usize {
		self.stars.round().clamp(0.0, 5.0) as usize
	}
}

/// Resolved carousel content
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselContent {
	/// Stored behavior variant
	pub variant: CarouselVariant,
	/// Optional section heading
	pub heading: Option<String>,
	/// Whether a timer advances the carousel
	pub auto_scroll: bool,
	/// Slide height (CSS length)
	pub height: String,
	/// Items in display order
	pub items: Vec<CarouselItem>,
	/// Section background
	pub background_color: String,
	/// Accent used for active dots, arrows and category buttons
	pub accent_color: String,
}

impl CarouselContent {
	/// Resolve carousel props
	pub fn from_props(props: &Props) -> Self {
		Self {
			variant: CarouselVariant::from_props(props, "variant"),
			heading: props.non_empty("heading"),
			auto_scroll: props.flag_or("autoScroll", false),
			height: props.length("height").unwrap_or_else(|| "420px".to_string()),
			items: props
				.list("items")
				.iter()
				.enumerate()
				.map(|(index, item)| CarouselItem::from_props(&Props::from_value_ref(item), index))
				.collect(),
			background_color: props.non_empty_or("backgroundColor", "#ffffff"),
			accent_color: props.non_empty_or("accentColor", "#3b82f6"),
		}
	}

	/// Distinct gallery categories in first-appearance order
	pub fn categories(&self) -> Vec<&str> {
		let mut seen: Vec<&str> = Vec::new();
		for item in &self.items {
			if !seen.contains(&item.item_type.as_str()) {
				seen.push(&item.item_type);
			}
		}
		seen
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(3.4), 3)]
	#[case(json!(3.5), 4)]
	#[case(json!(-2), 0)]
	#[case(json!(11), 5)]
	#[case(json!("4"), 4)]
	#[case(json!("lots"), 5)]
	fn test_star_count(#[case] stars: serde_json::Value, #[case] expected: usize) {
		let item = CarouselItem::from_props(&Props::from_value(json!({ "stars": stars })), 0);
		assert_eq!(item.star_count(), expected);
	}

	#[rstest]
	fn test_items_get_positional_ids_and_default_type() {
		// Arrange
		let props = Props::from_value(json!({
			"items": [ { "id": "a", "type": "nature" }, {}, { "type": "  " } ]
		}));

		// Act
		let content = CarouselContent::from_props(&props);

		// Assert
		let ids: Vec<&str> = content.items.iter().map(|i| i.id.as_str()).collect();
		assert_eq!(ids, vec!["a", "item-2", "item-3"]);
		assert_eq!(content.items[1].item_type, DEFAULT_ITEM_TYPE);
		assert_eq!(content.items[2].item_type, DEFAULT_ITEM_TYPE);
	}

	#[rstest]
	fn test_categories_in_first_appearance_order() {
		let props = Props::from_value(json!({
			"items": [ { "type": "city" }, { "type": "nature" }, { "type": "city" }, {} ]
		}));
		let content = CarouselContent::from_props(&props);
		assert_eq!(content.categories(), vec!["city", "nature", DEFAULT_ITEM_TYPE]);
	}
}
