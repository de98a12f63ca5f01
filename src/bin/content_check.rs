//! Content check binary - loads and lints the content catalog
//!
//! Usage:
//!   cargo run --bin content-check              # Check the embedded content
//!   cargo run --bin content-check -- data/     # Check documents in a directory
//!   cargo run --bin content-check -- --list    # Also list every page copy path
//!
//! Exits non-zero if the content fails to load or the lint finds errors.

use anyhow::{bail, Result};
use learning_content::catalog::Catalog;
use learning_content::i18n::{Locale, TranslationValidator};
use learning_content::text::placeholders;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("learning_content=info".parse()?)
                .add_directive("content_check=info".parse()?),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    let list = args.iter().any(|a| a == "--list");
    let dir = args.iter().find(|a| !a.starts_with("--")).map(PathBuf::from);

    let catalog = match &dir {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::embedded()?,
    };

    println!("\n========================================");
    println!("  CONTENT SUMMARY");
    println!("========================================");
    println!(
        "  Languages:  {} ({} enabled)",
        catalog.languages().len(),
        catalog.enabled_languages().len()
    );
    println!(
        "  Courses:    {} ({} enabled)",
        catalog.courses().len(),
        catalog.enabled_courses().len()
    );
    println!(
        "  Subjects:   {} ({} enabled)",
        catalog.subjects().len(),
        catalog.enabled_subjects().len()
    );
    println!("  Level sets: {}", catalog.course_level_entries().len());
    println!("  Operations: {}", catalog.operations().len());
    println!("  Pages:      {}", catalog.pages().len());
    let locales: Vec<String> = Locale::all()
        .iter()
        .map(|locale| format!("{} ({})", locale.name(), locale))
        .collect();
    println!("  Locales:    {}", locales.join(", "));
    println!("========================================\n");

    if list {
        for (page_key, page) in catalog.pages() {
            println!("─── {} ───", page_key);
            for (path, text) in page.leaves() {
                let names = placeholders(text.in_locale(Locale::default()));
                if names.is_empty() {
                    println!("  {}", path);
                } else {
                    println!("  {}  [{}]", path, names.join(", "));
                }
            }
        }
        println!();
    }

    let report = TranslationValidator::validate_catalog(&catalog);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for error in &report.errors {
        warn!("ERROR: {}", error);
    }

    if report.has_errors() {
        bail!("{} translation error(s) found", report.errors.len());
    }

    info!(
        "✓ Content OK ({} warning(s))",
        report.warnings.len()
    );
    Ok(())
}

fn print_usage() {
    println!("Usage: content-check [DIR] [--list]");
    println!();
    println!("  DIR      Directory holding the six content documents (default: embedded)");
    println!("  --list   Print every page copy path and its placeholders");
}
