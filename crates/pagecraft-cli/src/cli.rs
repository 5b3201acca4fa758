//! Command-line definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pagecraft")]
#[command(about = "Render page builder drafts and sections to HTML", long_about = None)]
#[command(version)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	pub verbosity: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
	/// Render a page draft to a complete HTML document
	Render {
		/// Draft JSON file
		#[arg(value_name = "DRAFT")]
		draft: PathBuf,

		/// Write the document here instead of stdout
		#[arg(short, long, value_name = "PATH")]
		output: Option<PathBuf>,

		/// Absolutize root-relative URLs against the configured preview origin
		#[arg(long)]
		preview: bool,

		/// Absolutize root-relative URLs against this origin
		#[arg(long, value_name = "URL")]
		preview_origin: Option<String>,

		/// Settings file (TOML)
		#[arg(long, value_name = "PATH")]
		config: Option<PathBuf>,
	},

	/// Render one section JSON file to an HTML fragment
	Section {
		/// Section JSON file
		#[arg(value_name = "SECTION")]
		section: PathBuf,
	},

	/// Print the default props of a section type
	Defaults {
		/// Section type, e.g. hero or imagetextblock
		#[arg(value_name = "TYPE")]
		section_type: String,
	},
}
