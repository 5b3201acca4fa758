//! Command behavior against files on disk

use pagecraft_cli::{RenderOptions, defaults_json, render_draft, render_section_file, write_output};
use rstest::{fixture, rstest};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[fixture]
fn workspace() -> TempDir {
	let dir = tempfile::tempdir().unwrap();
	let draft = json!({
		"title": "Launch",
		"path": "/launch",
		"nav": { "brandText": "Acme", "logo": "/logo.svg" },
		"layout": [
			{ "type": "hero", "props": { "heading": "We are live", "backgroundImage": "/media/bg.jpg" } },
			{ "type": "cta", "props": { "headline": "Join now" } }
		],
		"footer": { "companyName": "Acme", "footerSections": [ { "title": "Company", "links": [] } ] },
		"footerLinkOverrides": { "0": "About, Careers" }
	});
	fs::write(dir.path().join("draft.json"), draft.to_string()).unwrap();
	fs::write(
		dir.path().join("pagecraft.toml"),
		"[assembler]\nlang = \"sv\"\npreview_origin = \"https://staging.test\"\n",
	)
	.unwrap();
	dir
}

#[rstest]
fn test_render_draft_to_document(workspace: TempDir) {
	// Arrange
	let options = RenderOptions {
		draft: workspace.path().join("draft.json"),
		..RenderOptions::default()
	};

	// Act
	let html = render_draft(&options).unwrap();

	// Assert
	assert!(html.starts_with("<!DOCTYPE html>"));
	assert!(html.contains("<title>Launch</title>"));
	assert!(html.contains("We are live"));
	assert!(html.contains("Careers"));
	assert!(html.contains("src=\"/logo.svg\""));
}

#[rstest]
fn test_render_with_config_and_preview(workspace: TempDir) {
	// Arrange
	let options = RenderOptions {
		draft: workspace.path().join("draft.json"),
		preview: true,
		config: Some(workspace.path().join("pagecraft.toml")),
		..RenderOptions::default()
	};

	// Act
	let html = render_draft(&options).unwrap();

	// Assert
	assert!(html.contains("<html lang=\"sv\">"));
	assert!(!html.contains("src=\"/logo.svg\""));
	assert!(html.contains("/logo.svg\""));
	assert!(html.contains("/media/bg.jpg')"));
}

#[rstest]
fn test_explicit_origin_wins(workspace: TempDir) {
	// Arrange
	let options = RenderOptions {
		draft: workspace.path().join("draft.json"),
		preview_origin: Some("http://localhost:9000/".to_string()),
		config: Some(workspace.path().join("pagecraft.toml")),
		..RenderOptions::default()
	};

	// Act
	let html = render_draft(&options).unwrap();

	// Assert
	assert!(html.contains("src=\"http://localhost:9000/logo.svg\""));
	assert!(html.contains("url('http://localhost:9000/media/bg.jpg')"));
}

#[rstest]
fn test_missing_draft_reports_path(workspace: TempDir) {
	// Arrange
	let options = RenderOptions {
		draft: workspace.path().join("nope.json"),
		..RenderOptions::default()
	};

	// Act
	let error = render_draft(&options).unwrap_err();

	// Assert
	assert!(format!("{:#}", error).contains("nope.json"));
}

#[rstest]
fn test_invalid_draft_is_an_error(workspace: TempDir) {
	// Arrange
	let path = workspace.path().join("broken.json");
	fs::write(&path, "{ not json").unwrap();

	// Act
	let result = render_draft(&RenderOptions {
		draft: path,
		..RenderOptions::default()
	});

	// Assert
	assert!(result.is_err());
}

#[rstest]
fn test_section_file_renders_fragment(workspace: TempDir) {
	// Arrange
	let path = workspace.path().join("section.json");
	fs::write(
		&path,
		json!({ "type": "cards", "props": { "cards": [ { "title": "Fast" } ] } }).to_string(),
	)
	.unwrap();

	// Act
	let html = render_section_file(&path).unwrap();

	// Assert
	assert!(html.starts_with("<section id=\"pc-"));
	assert!(html.contains("data-section-id=\"section-1\""));
	assert!(html.contains("Fast"));
}

#[rstest]
#[case("hero", "heading")]
#[case("carousel", "items")]
#[case("imagetextblock", "layout")]
fn test_defaults_for_known_types(#[case] section_type: &str, #[case] key: &str) {
	// Act
	let json = defaults_json(section_type).unwrap();

	// Assert
	let value: serde_json::Value = serde_json::from_str(&json).unwrap();
	assert!(value.get(key).is_some(), "{} defaults lack {}", section_type, key);
}

#[rstest]
fn test_defaults_for_unknown_type_lists_known_ones() {
	let error = defaults_json("pricing").unwrap_err().to_string();
	assert!(error.contains("pricing"));
	assert!(error.contains("imagetextblock"));
}

#[rstest]
fn test_write_output_to_file(workspace: TempDir) {
	// Arrange
	let path = workspace.path().join("out.html");

	// Act
	write_output("<p>hi</p>", Some(&path)).unwrap();

	// Assert
	assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
}
