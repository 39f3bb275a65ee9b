use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use match_engine::{write_report, PersistError};
use match_logging::{match_error, match_info};

/// Stamps the rendered page with its generation time and writes it to `target`.
pub(crate) fn save_report(
    target: &Path,
    page_html: &str,
    generated: DateTime<Utc>,
) -> Result<PathBuf, PersistError> {
    let content = stamp(page_html, generated);
    match write_report(target, &content) {
        Ok(path) => {
            match_info!("Wrote report to {:?} ({} bytes)", path, content.len());
            Ok(path)
        }
        Err(err) => {
            match_error!("Failed to write report to {:?}: {}", target, err);
            Err(err)
        }
    }
}

fn stamp(page_html: &str, generated: DateTime<Utc>) -> String {
    format!(
        "<!-- resume-match report generated {} -->\n{}",
        generated.to_rfc3339(),
        page_html
    )
}
