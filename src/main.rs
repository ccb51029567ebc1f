//! The Mechanical Editor - a terminal writing assistant
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::{Path, PathBuf};

use clap::Parser;
use mechedit_analysis::{load_default_rules, LlmAnalyzer};
use mechedit_app::config::{init_config_dir, load_settings};
use mechedit_app::{Engine, FileTarget};
use mechedit_core::logging;
use mechedit_core::prelude::*;

/// The Mechanical Editor - check a document against style rules with an LLM
#[derive(Parser, Debug)]
#[command(name = "mechedit")]
#[command(about = "A terminal writing assistant driven by Vale-style rules", long_about = None)]
struct Args {
    /// Document to load on startup (.txt, .md, .markdown, .html, .htm)
    #[arg(value_name = "DOCUMENT")]
    document: Option<PathBuf>,

    /// Extra Vale rule file (.yml, .yaml); repeat to add several
    #[arg(short, long = "rules", value_name = "FILE")]
    rules: Vec<PathBuf>,

    /// Analyze DOCUMENT once and print JSON events instead of the TUI
    #[arg(long, requires = "document")]
    headless: bool,

    /// Directory holding `.mechedit/config.toml` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if let Err(e) = init_config_dir(&config_dir) {
        warn!("Could not create config directory: {}", e);
    }
    let settings = load_settings(&config_dir);
    info!(
        "Loaded settings: provider={}/{}",
        settings.provider.backend, settings.provider.model
    );

    let default_rules = load_default_rules(Path::new(&settings.rules.default_path));

    let analyzer = match LlmAnalyzer::new(settings.provider.clone(), default_rules) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            error!("Invalid provider settings: {}", e);
            eprintln!("❌ {}", e);
            eprintln!(
                "   Check [provider] in {}",
                config_dir.join(".mechedit").join("config.toml").display()
            );
            std::process::exit(1);
        }
    };

    let mut engine = Engine::new(settings, analyzer);

    if args.headless {
        let Some(document) = args.document else {
            eprintln!("❌ --headless needs a DOCUMENT");
            std::process::exit(2);
        };
        let succeeded = mechanical_editor::run_headless(engine, document, args.rules).await?;
        if !succeeded {
            std::process::exit(1);
        }
        return Ok(());
    }

    for path in args.rules {
        engine.load_file(path, FileTarget::Rules);
    }
    if let Some(document) = args.document {
        engine.load_file(document, FileTarget::Document);
    }

    let result = mechanical_editor::run(engine);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("The Mechanical Editor exiting");
    result
}
