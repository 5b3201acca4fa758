//! Ordered CSS declaration lists

use std::fmt;

/// An ordered list of CSS declarations.
///
/// Declarations keep insertion order so the same inputs always serialize to
/// the same string. Setting a property that is already present replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<(&'static str, String)>);

impl Declarations {
	/// Create an empty list
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Set a property
	pub fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
		let value = value.into();
		match self.0.iter_mut().find(|(p, _)| *p == property) {
			Some(entry) => entry.1 = value,
			None => self.0.push((property, value)),
		}
		self
	}

	/// Builder-style [`set`](Self::set)
	pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
		self.set(property, value);
		self
	}

	/// Value of a property
	pub fn get(&self, property: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(p, _)| *p == property)
			.map(|(_, v)| v.as_str())
	}

	/// Drop a property
	pub fn remove(&mut self, property: &str) {
		self.0.retain(|(p, _)| *p != property);
	}

	/// Whether no declarations are set
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate `(property, value)` pairs in order
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.0.iter().map(|(p, v)| (*p, v.as_str()))
	}

	/// Wrap the declarations in a rule for `selector`; empty lists yield nothing
	pub fn rule(&self, selector: &str) -> String {
		if self.is_empty() {
			return String::new();
		}
		format!("{} {{ {} }}\n", selector, self)
	}
}

impl fmt::Display for Declarations {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (property, value) in &self.0 {
			if !first {
				f.write_str(" ")?;
			}
			write!(f, "{}: {};", property, value)?;
			first = false;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_replace_keeps_position() {
		// Arrange
		let mut decls = Declarations::new().with("color", "red").with("padding", "4px");

		// Act
		decls.set("color", "blue");

		// Assert
		assert_eq!(decls.to_string(), "color: blue; padding: 4px;");
	}

	#[rstest]
	fn test_empty_rule_is_empty() {
		assert_eq!(Declarations::new().rule(".x"), "");
		assert_eq!(
			Declarations::new().with("margin", "0").rule(".x"),
			".x { margin: 0; }\n"
		);
	}
}
