//! Markdown report of a finished speedrun
//!
//! Written only when the player asks for it with `--summary`.

use crate::output::summary::{OutputResult, RunSummary};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report of a finished run
///
/// # Arguments
///
/// * `summary` - The finished run
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(summary: &RunSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    tracing::info!("Wrote run summary to {}", output_path.display());
    Ok(())
}

/// Formats a finished run as markdown
pub fn format_markdown_summary(summary: &RunSummary) -> String {
    let mut md = String::new();

    md.push_str("# Wiki-Swipe Speedrun\n\n");

    md.push_str("## Run\n\n");
    md.push_str(&format!("- **Start**: {}\n", summary.start));
    md.push_str(&format!("- **Target**: {}\n", summary.target));
    md.push_str(&format!(
        "- **Time**: {:.2} seconds\n\n",
        summary.elapsed.as_secs_f64()
    ));

    md.push_str("## Swipes\n\n");
    md.push_str("| Swipe | Count |\n");
    md.push_str("|-------|-------|\n");
    md.push_str(&format!("| Right | {} |\n", summary.right_swipes));
    md.push_str(&format!("| Left | {} |\n", summary.left_swipes));
    md.push_str(&format!("| Total | {} |\n\n", summary.steps));

    md.push_str("## Path Taken\n\n");
    md.push_str(&format!("{} links followed.\n\n", summary.hops()));
    for (i, title) in summary.path.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", i + 1, title));
    }

    md
}
