//! # Summary Subcommand
//!
//! Section counts followed by each function and its categories.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use csf_framework::Framework;

use crate::config::CliConfig;

/// Arguments for the `csf summary` subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Framework export (JSON).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Show at most this many categories per function.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Execute the summary subcommand.
///
/// Returns exit code: 0 on success.
pub fn run_summary(args: &SummaryArgs, config: &CliConfig) -> Result<u8> {
    let (path, framework) = crate::load_framework(args.path.as_deref(), config)?;
    println!("Framework: {}", path.display());
    println!("{}", render_summary(&framework, args.limit));
    Ok(0)
}

/// Render the summary text.
pub fn render_summary(framework: &Framework, limit: Option<usize>) -> String {
    let mut lines = Vec::new();
    for doc in framework.documents() {
        lines.push(format!("Document: {} {} ({})", doc.name(), doc.version(), doc.doc_identifier()));
    }
    lines.push(format!("  Documents:     {}", framework.documents().len()));
    lines.push(format!("  Elements:      {}", framework.elements().len()));
    lines.push(format!("  Relationships: {}", framework.relationships().len()));

    let (functions, categories, subcategories) = framework.index_sizes();
    lines.push(format!(
        "  Indexed:       {functions} functions, {categories} categories, {subcategories} subcategories"
    ));

    lines.push(String::new());
    lines.push("Functions:".to_string());
    for function in framework.functions() {
        let id = function.element_identifier();
        let cats = framework.get_categories_for_function(id);
        lines.push(format!("{id}: {} ({} categories)", function.title(), cats.len()));
        let shown = limit.unwrap_or(cats.len()).min(cats.len());
        for category in &cats[..shown] {
            lines.push(format!(
                "  - {}: {}",
                category.element_identifier(),
                category.title()
            ));
        }
        if shown < cats.len() {
            lines.push(format!("  ... {} more", cats.len() - shown));
        }
    }
    lines.join("\n")
}
