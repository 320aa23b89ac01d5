//! # Show Subcommand
//!
//! Prints one element: its fields, derived parents, the elements directly
//! beneath it in the hierarchy, and elements related by a relationship.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use csf_core::{Element, ElementType};
use csf_framework::Framework;

use crate::config::CliConfig;

/// Width at which element text is cut.
const TEXT_WIDTH: usize = 100;

/// Arguments for the `csf show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Element identifier (e.g. `GV`, `GV.OC`, `GV.OC-01`, `first`).
    #[arg(value_name = "ID")]
    pub id: String,

    /// Framework export (JSON).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Print full element text instead of truncating it.
    #[arg(long)]
    pub full: bool,
}

/// Execute the show subcommand.
///
/// Returns exit code: 0 when the element exists, 1 when it does not.
pub fn run_show(args: &ShowArgs, config: &CliConfig) -> Result<u8> {
    let (_, framework) = crate::load_framework(args.path.as_deref(), config)?;
    match render_element(&framework, &args.id, args.full) {
        Some(text) => {
            println!("{text}");
            Ok(0)
        }
        None => {
            println!("element not found: {}", args.id);
            Ok(1)
        }
    }
}

/// Render an element, or `None` when no element has this identifier.
pub fn render_element(framework: &Framework, id: &str, full: bool) -> Option<String> {
    let element = framework.get_element_by_id(id)?;
    let text = |e: &Element| {
        if full {
            e.text().to_string()
        } else {
            crate::truncate(e.text(), TEXT_WIDTH)
        }
    };

    let mut lines = vec![element.to_string()];
    lines.push(format!("  Document: {}", element.doc_identifier()));
    if !element.text().is_empty() {
        lines.push(format!("  Text:     {}", text(element)));
    }
    if let Some(function) = element.function_code() {
        lines.push(format!("  Function: {} ({})", function.code(), function.full_name()));
    }
    if let Some(party) = element.party_type() {
        lines.push(format!("  Party:    {}", party.display_name()));
    }

    // Parents
    for (label, parent) in [
        ("Function", element.parent_function()),
        ("Category", element.parent_category()),
        ("Subcategory", element.parent_subcategory()),
    ] {
        if let Some(parent_id) = parent {
            let loaded = if framework.get_element_by_id(parent_id).is_some() {
                ""
            } else {
                " (not loaded)"
            };
            lines.push(format!("  Parent {label}: {parent_id}{loaded}"));
        }
    }

    // Children
    let (heading, children) = match element.element_type() {
        ElementType::Function => ("Categories", framework.get_categories_for_function(id)),
        ElementType::Category => ("Subcategories", framework.get_subcategories_for_category(id)),
        ElementType::Subcategory => (
            "Implementation examples",
            framework.get_implementation_examples(id),
        ),
        _ => ("", Vec::new()),
    };
    if !children.is_empty() {
        lines.push(format!("  {heading} ({}):", children.len()));
        for child in children {
            let detail = if child.title().is_empty() {
                text(child)
            } else {
                child.title().to_string()
            };
            lines.push(format!("    - {}: {detail}", child.element_identifier()));
        }
    }

    // Relations
    let related = framework.get_related_elements(id);
    if !related.is_empty() {
        lines.push(format!("  Related ({}):", related.len()));
        for entry in related {
            lines.push(format!(
                "    {}: {} ({})",
                entry.label(),
                entry.element.element_identifier(),
                entry.element.element_type()
            ));
        }
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn sample() -> Framework {
        let dir = tempfile::tempdir().unwrap();
        let path = fixtures::write_export(&dir, false);
        csf_framework::load_framework_from_json(&path).unwrap()
    }

    #[test]
    fn show_function() {
        let text = render_element(&sample(), "GV", false).unwrap();
        assert!(text.starts_with("GV: GOVERN (function)"));
        assert!(text.contains("Function: GV (GOVERN)"));
        assert!(text.contains("Categories (2):"));
        assert!(text.contains("    - GV.OC: Organizational Context"));
        assert!(text.contains("Related (1):"));
        assert!(text.contains("    projection: GV.OC (category)"));
    }

    #[test]
    fn show_subcategory_parents_and_examples() {
        let text = render_element(&sample(), "GV.OC-01", false).unwrap();
        assert!(text.contains("Parent Function: GV\n"));
        assert!(text.contains("Parent Category: GV.OC"));
        assert!(text.contains("Implementation examples (1):"));
        assert!(text.contains("    - GV.OC-01.001: Share the mission."));
    }

    #[test]
    fn show_category_reverse_relation() {
        let text = render_element(&sample(), "GV.OC", false).unwrap();
        assert!(text.contains("    reverse_projection: GV (function)"));
        assert!(text.contains("Subcategories (1):"));
    }

    #[test]
    fn show_party() {
        let text = render_element(&sample(), "first", false).unwrap();
        assert!(text.contains("Party:    1st Party Risk"));
        assert!(!text.contains("Parent"));
    }

    #[test]
    fn truncates_text_unless_full() {
        let short = render_element(&sample(), "GV", false).unwrap();
        let full = render_element(&sample(), "GV", true).unwrap();
        assert!(full.contains("strategy is established."));
        assert!(short.len() <= full.len());
    }

    #[test]
    fn missing_element() {
        assert!(render_element(&sample(), "ZZ", false).is_none());
    }

    #[test]
    fn run_show_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixtures::write_export(&dir, false);
        let found = ShowArgs {
            id: "GV".into(),
            path: Some(path.clone()),
            full: false,
        };
        assert_eq!(run_show(&found, &CliConfig::default()).unwrap(), 0);
        let missing = ShowArgs {
            id: "ZZ".into(),
            path: Some(path),
            full: false,
        };
        assert_eq!(run_show(&missing, &CliConfig::default()).unwrap(), 1);
    }
}
