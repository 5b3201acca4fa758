//! Lenient property bag backing every section's `props`
//!
//! The editor stores section properties as an open JSON object. Renderers
//! read it through the accessors here, which never fail: a key that is
//! missing, or that holds a value of the wrong shape, reads as absent and the
//! caller substitutes its documented default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open-ended mapping of section properties.
///
/// Unrecognized keys are kept verbatim and survive a serialize/deserialize
/// round trip, so fields added by a newer editor are never dropped.
///
/// # Examples
///
/// ```
/// use pagecraft_model::Props;
/// use serde_json::json;
///
/// let props = Props::from_value(json!({ "variant": "3", "autoScroll": true }));
/// assert_eq!(props.number("variant"), Some(3.0));
/// assert!(props.flag_or("autoScroll", false));
/// assert_eq!(props.text_or("heading", "Welcome"), "Welcome");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
	/// Create an empty property bag
	pub fn new() -> Self {
		Self(Map::new())
	}

	/// Wrap an existing JSON object
	pub fn from_map(map: Map<String, Value>) -> Self {
		Self(map)
	}

	/// Build a bag from any JSON value; anything but an object yields an empty bag
	pub fn from_value(value: Value) -> Self {
		match value {
			Value::Object(map) => Self(map),
			_ => Self::new(),
		}
	}

	/// Build a bag from a borrowed JSON value, cloning only when it is an object
	pub fn from_value_ref(value: &Value) -> Self {
		match value {
			Value::Object(map) => Self(map.clone()),
			_ => Self::new(),
		}
	}

	/// Raw value stored under `key`
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Store a value, returning the previous one
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	/// Remove a key, returning its value
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.0.remove(key)
	}

	/// Whether `key` is present, whatever its value
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of stored keys
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the bag holds no keys at all
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the stored keys in stable order
	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.0.keys()
	}

	/// Borrow the underlying JSON object
	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Convert back into a JSON value
	pub fn into_value(self) -> Value {
		Value::Object(self.0)
	}

	/// Textual value of `key`.
	///
	/// Strings are returned as-is; numbers and booleans are rendered as text
	/// so that an editor which stored `600` instead of `"600"` still works.
	pub fn text(&self, key: &str) -> Option<String> {
		self.get(key).and_then(value_text)
	}

	/// Textual value of `key`, or `default` when absent
	pub fn text_or(&self, key: &str, default: &str) -> String {
		self.text(key).unwrap_or_else(|| default.to_string())
	}

	/// Textual value of `key`, treating blank strings as absent
	pub fn non_empty(&self, key: &str) -> Option<String> {
		self.text(key).filter(|s| !s.trim().is_empty())
	}

	/// Non-blank textual value of `key`, or `default`
	pub fn non_empty_or(&self, key: &str, default: &str) -> String {
		self.non_empty(key).unwrap_or_else(|| default.to_string())
	}

	/// First non-blank value among several alias keys
	pub fn first_non_empty(&self, keys: &[&str]) -> Option<String> {
		keys.iter().find_map(|key| self.non_empty(key))
	}

	/// Numeric value of `key`.
	///
	/// Accepts JSON numbers and numeric strings; everything else, including
	/// non-finite results, reads as absent.
	pub fn number(&self, key: &str) -> Option<f64> {
		self.get(key).and_then(value_number)
	}

	/// Numeric value of `key`, or `default`
	pub fn number_or(&self, key: &str, default: f64) -> f64 {
		self.number(key).unwrap_or(default)
	}

	/// Boolean value of `key`.
	///
	/// Accepts booleans, the strings `"true"`/`"false"`, and numbers (non-zero
	/// is true).
	pub fn flag(&self, key: &str) -> Option<bool> {
		match self.get(key)? {
			Value::Bool(b) => Some(*b),
			Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
				"true" | "yes" | "on" | "1" => Some(true),
				"false" | "no" | "off" | "0" => Some(false),
				_ => None,
			},
			Value::Number(n) => n.as_f64().map(|n| n != 0.0),
			_ => None,
		}
	}

	/// Boolean value of `key`, or `default`
	pub fn flag_or(&self, key: &str, default: bool) -> bool {
		self.flag(key).unwrap_or(default)
	}

	/// CSS length stored under `key`.
	///
	/// A bare number is read as pixels (`2` becomes `"2px"`); strings are
	/// passed through untouched.
	pub fn length(&self, key: &str) -> Option<String> {
		match self.get(key)? {
			Value::Number(n) => n.as_f64().filter(|n| n.is_finite()).map(|n| format!("{}px", format_number(n))),
			Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
			_ => None,
		}
	}

	/// Pixel amount stored under `key`, accepting `4`, `"4"` and `"4px"`
	pub fn pixels(&self, key: &str) -> Option<f64> {
		match self.get(key)? {
			Value::String(s) => parse_leading_number(s.trim().trim_end_matches("px")),
			other => value_number(other),
		}
	}

	/// Duration in seconds stored under `key`.
	///
	/// Bare numbers are seconds; strings may carry an `s` or `ms` suffix.
	pub fn seconds(&self, key: &str) -> Option<f64> {
		match self.get(key)? {
			Value::String(s) => {
				let s = s.trim();
				if let Some(ms) = s.strip_suffix("ms") {
					parse_leading_number(ms.trim()).map(|v| v / 1000.0)
				} else {
					parse_leading_number(s.trim_end_matches('s').trim())
				}
			}
			other => value_number(other),
		}
	}

	/// Array stored under `key`; anything else reads as an empty list
	pub fn list(&self, key: &str) -> &[Value] {
		match self.get(key) {
			Some(Value::Array(items)) => items,
			_ => &[],
		}
	}

	/// Nested object stored under `key`; anything else reads as an empty bag
	pub fn object(&self, key: &str) -> Props {
		self.get(key).map(Props::from_value_ref).unwrap_or_default()
	}
}

impl From<Map<String, Value>> for Props {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

impl From<Props> for Value {
	fn from(props: Props) -> Self {
		props.into_value()
	}
}

/// Text form of a scalar JSON value
pub fn value_text(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}

/// Numeric form of a JSON number or numeric string
pub fn value_number(value: &Value) -> Option<f64> {
	let number = match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok(),
		_ => None,
	};
	number.filter(|n| n.is_finite())
}

/// Format a number without a trailing `.0` for whole values
pub fn format_number(value: f64) -> String {
	if value.fract() == 0.0 && value.abs() < 1e15 {
		format!("{}", value as i64)
	} else {
		format!("{}", value)
	}
}

fn parse_leading_number(s: &str) -> Option<f64> {
	s.parse::<f64>().ok().filter(|n| n.is_finite())
}
