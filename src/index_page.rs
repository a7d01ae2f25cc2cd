//! HTML index linking each materialized project to its editor page.

use crate::error::ApiError;
use crate::tree::node::Project;
use std::path::{Path, PathBuf};

pub const INDEX_FILE_NAME: &str = "index.html";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the index table, one row per project in listing order.
pub fn render_index(username: &str, projects: &[Project], editor_base_url: &str) -> String {
    let base = editor_base_url.trim_end_matches('/');
    let mut html = String::from("<table>");
    for project in projects {
        html.push_str("<tr>");
        html.push_str(&format!(
            "<td><a href=\"{}/index.html\" target=_blank>{}</a></td>",
            escape_html(&project.id),
            escape_html(&project.name)
        ));
        html.push_str(&format!(
            "<td><a href=\"{}/{}/sketches/{}\" target=_blank>p5 editor</a></td>",
            escape_html(base),
            escape_html(username),
            escape_html(&project.id)
        ));
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

/// Write `<user_dir>/index.html` and return its path.
pub fn write_index(
    user_dir: &Path,
    username: &str,
    projects: &[Project],
    editor_base_url: &str,
) -> Result<PathBuf, ApiError> {
    let path = user_dir.join(INDEX_FILE_NAME);
    let html = render_index(username, projects, editor_base_url);
    std::fs::write(&path, html).map_err(|e| ApiError::io("Failed to write index", &path, e))?;
    Ok(path)
}
