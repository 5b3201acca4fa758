//! # pagecraft-cli
//!
//! The `pagecraft` command: render drafts and sections from JSON files.
//!
//! ```bash
//! pagecraft render home.json -o home.html
//! pagecraft render home.json --preview-origin http://localhost:8000
//! pagecraft section hero.json
//! pagecraft defaults carousel
//! ```

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{
	RenderOptions, defaults_json, render_draft, render_section_file, write_output,
};

use tracing_subscriber::EnvFilter;

/// Install the log subscriber: `RUST_LOG` wins, otherwise `verbosity` picks
/// the level
pub fn init_tracing(verbosity: u8) {
	let fallback = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

/// Run a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
	match cli.command {
		Commands::Render {
			draft,
			output,
			preview,
			preview_origin,
			config,
		} => {
			let html = render_draft(&RenderOptions {
				draft,
				preview,
				preview_origin,
				config,
			})?;
			write_output(&html, output.as_deref())
		}
		Commands::Section { section } => write_output(&render_section_file(&section)?, None),
		Commands::Defaults { section_type } => write_output(&defaults_json(&section_type)?, None),
	}
}
