//! # csf-cli — CLI Tool for the CSF Taxonomy Stack
//!
//! Provides the `csf` command-line interface over a CSF JSON export.
//!
//! ## Subcommands
//!
//! - `csf summary` — Counts, functions, and their categories.
//! - `csf validate` — Integrity validation with CI-friendly exit codes.
//! - `csf show` — One element with its parents, children, and relations.
//!
//! ```bash
//! csf summary csf-2.0-framework.json --limit 3
//! csf validate --strict
//! csf show GV.OC-01 -v
//! ```
//!
//! Without a `PATH`, the export comes from the config file's `framework`
//! key, then `csf-2.0-framework.json` in the current directory.

pub mod config;
pub mod show;
pub mod summary;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use csf_framework::Framework;

pub use config::CliConfig;

/// Export file name looked up in the current directory by default.
pub const DEFAULT_FRAMEWORK_FILE: &str = "csf-2.0-framework.json";

/// Resolve a path that may be relative to `base`.
///
/// If the path is absolute, returns it as-is. If relative and the file
/// exists relative to `base`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let based = base.join(path);
    if based.exists() {
        based
    } else {
        path.to_path_buf()
    }
}

/// Pick the export to load: the command-line path, then the config file,
/// then [`DEFAULT_FRAMEWORK_FILE`].
pub fn framework_path(arg: Option<&Path>, config: &CliConfig) -> PathBuf {
    arg.map(Path::to_path_buf)
        .or_else(|| config.framework.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FRAMEWORK_FILE))
}

/// Load the export chosen by [`framework_path`] in the configured mode.
pub fn load_framework(arg: Option<&Path>, config: &CliConfig) -> Result<(PathBuf, Framework)> {
    let path = framework_path(arg, config);
    tracing::debug!(path = %path.display(), mode = ?config.load_mode(), "loading framework");
    let framework = csf_framework::load_framework_from_json_with(&path, config.load_mode())
        .with_context(|| format!("failed to load framework from {}", path.display()))?;
    Ok((path, framework))
}

/// Shorten text to `max` characters, appending `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::PathBuf;

    use serde_json::json;

    /// Write a small export with one dangling relationship endpoint.
    pub fn write_export(dir: &tempfile::TempDir, broken: bool) -> PathBuf {
        let el = |id: &str, kind: &str, title: &str, text: &str| {
            json!({
                "doc_identifier": "CSF_2_0_0",
                "element_identifier": id,
                "element_type": kind,
                "title": title,
                "text": text
            })
        };
        let rel = |source: &str, dest: &str| {
            json!({
                "source_doc_identifier": "CSF_2_0_0",
                "source_element_identifier": source,
                "dest_doc_identifier": "CSF_2_0_0",
                "dest_element_identifier": dest,
                "relationship_identifier": "projection",
                "provenance_doc_identifier": "CSF_2_0_0"
            })
        };
        let mut relationships = vec![rel("GV", "GV.OC")];
        if broken {
            relationships.push(rel("INVALID", "GV"));
        }
        let export = json!({
            "response": {"elements": {
                "documents": [{
                    "doc_identifier": "CSF_2_0_0",
                    "name": "Cybersecurity Framework",
                    "version": "2.0",
                    "website": "https://www.nist.gov/cyberframework"
                }],
                "elements": [
                    el("GV", "function", "GOVERN", "The organization's cybersecurity risk management strategy is established."),
                    el("GV.OC", "category", "Organizational Context", ""),
                    el("GV.OC-01", "subcategory", "", "The organizational mission is understood."),
                    el("GV.OC-01.001", "implementation_example", "", "Share the mission."),
                    el("GV.RM", "category", "Risk Management Strategy", ""),
                    el("PR", "function", "PROTECT", ""),
                    el("first", "party", "1st Party Risk", ""),
                    el("GV.OC-01", "subcategory", "", "The organizational mission is understood."),
                ],
                "relationships": relationships
            }}
        });
        let path = dir.path().join("csf.json");
        std::fs::write(&path, export.to_string()).unwrap();
        path
    }
}
