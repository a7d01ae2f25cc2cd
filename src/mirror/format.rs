//! Format a run summary as text or JSON.

use crate::error::ApiError;
use crate::mirror::types::RunSummary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Human-readable run summary with a per-project table.
pub fn format_summary_text(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Mirror Summary")));
    out.push_str(&format!("  User: {}\n", summary.username));
    out.push_str(&format!("  Output: {}\n", summary.user_dir.display()));
    out.push_str(&format!("  Index: {}\n", summary.index_path.display()));
    out.push_str(&format!(
        "  Projects: {}  Folders: {}  Files: {}  Skipped: {}\n\n",
        summary.projects.len(),
        summary.total_folders(),
        summary.total_files(),
        summary.total_skipped()
    ));

    if !summary.projects.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Project", "Id", "Folders", "Files", "Downloads", "Skipped"]);
        for report in &summary.projects {
            let name = if report.root_missing {
                format!("{} (no root)", report.project_name)
            } else {
                report.project_name.clone()
            };
            table.add_row(vec![
                name,
                report.project_id.clone(),
                report.folders.to_string(),
                report.inline_files.to_string(),
                report.downloads.to_string(),
                report.skipped.len().to_string(),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }

    let skipped: Vec<_> = summary
        .projects
        .iter()
        .flat_map(|p| p.skipped.iter())
        .collect();
    if !skipped.is_empty() {
        out.push_str(&format!("\n{}\n\n", format_section_heading("Skipped")));
        for node in skipped {
            out.push_str(&format!(
                "  {} {} ({})\n",
                "!".yellow(),
                node.path.display(),
                node.reason
            ));
        }
    }

    out
}

pub fn format_summary_json(summary: &RunSummary) -> Result<String, ApiError> {
    serde_json::to_string_pretty(summary).map_err(|e| ApiError::Encode(e.to_string()))
}
