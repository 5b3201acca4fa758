//! Subcommand implementations
//!
//! Each command returns the text it produces; [`write_output`] decides where
//! it goes.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use pagecraft::PageBuilderSettings;
use pagecraft::model::{PageDraft, Section, SectionType, default_props};
use pagecraft::render::{Assembler, render_section};
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs of the `render` command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
	/// Draft JSON file
	pub draft: PathBuf,
	/// Use the configured preview origin
	pub preview: bool,
	/// Explicit preview origin, wins over the configured one
	pub preview_origin: Option<String>,
	/// Settings file
	pub config: Option<PathBuf>,
}

fn read(path: &Path, what: &str) -> Result<String> {
	fs::read_to_string(path).with_context(|| format!("Failed to read {} {}", what, path.display()))
}

/// Render a draft file to a full document
pub fn render_draft(options: &RenderOptions) -> Result<String> {
	let settings = PageBuilderSettings::load(options.config.as_deref())
		.context("Failed to load settings")?;
	let draft = PageDraft::from_json(&read(&options.draft, "draft")?)
		.with_context(|| format!("Invalid draft {}", options.draft.display()))?;

	let title = settings.title_for(&draft.title);
	tracing::info!(
		path = %draft.route(),
		sections = draft.layout.len(),
		"rendering draft"
	);
	let document = Assembler::new(settings.assembler.clone()).assemble(
		&draft.nav,
		draft.layout.sections(),
		&draft.footer,
		&draft.footer_link_overrides,
		title,
	);

	let origin = match (&options.preview_origin, options.preview) {
		(Some(origin), _) => Some(origin.clone()),
		(None, true) => match &settings.assembler.preview_origin {
			Some(origin) => Some(origin.clone()),
			None => bail!("--preview needs a preview origin in the settings or PAGECRAFT_PREVIEW_ORIGIN"),
		},
		(None, false) => None,
	};
	Ok(match origin {
		Some(origin) => document.for_preview(&origin).into_string(),
		None => document.into_string(),
	})
}

/// Render a single section file to its fragment
pub fn render_section_file(path: &Path) -> Result<String> {
	let mut section: Section = serde_json::from_str(&read(path, "section")?)
		.with_context(|| format!("Invalid section {}", path.display()))?;
	if section.id.trim().is_empty() {
		section.id = "section-1".to_string();
	}
	Ok(render_section(&section).into_string())
}

/// Default props of `type_name` as pretty JSON
pub fn defaults_json(type_name: &str) -> Result<String> {
	let section_type = SectionType::from(type_name);
	if !section_type.is_known() {
		let known: Vec<String> = SectionType::KNOWN
			.iter()
			.map(|t| t.as_str().to_string())
			.collect();
		bail!(
			"Unknown section type '{}' (expected one of: {})",
			type_name,
			known.join(", ")
		);
	}
	Ok(serde_json::to_string_pretty(&default_props(&section_type))?)
}

/// Write `text` to `output`, or stdout when there is none
pub fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
	match output {
		Some(path) => {
			fs::write(path, text)
				.with_context(|| format!("Failed to write {}", path.display()))?;
			eprintln!("{} {}", "Wrote".green(), path.display());
		}
		None => println!("{}", text),
	}
	Ok(())
}
