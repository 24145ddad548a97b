//! Plain-text headline report writer.
//!
//! # Report Format
//!
//! ```text
//! News Headlines - Scraped on 2025-05-06 14:30:00
//! ==================================================
//!
//!  1. [BBC] First headline
//!  2. [BBC] Second headline
//!
//!
//! Total Headlines: 2
//! ```
//!
//! # Fallback
//!
//! When the primary destination rejects the write with a permission error,
//! one fallback write is attempted to the user's Desktop with identical
//! content. Any other I/O error is returned without a fallback.

use crate::utils::{desktop_dir, timestamp};
use std::error::Error;
use std::ffi::OsStr;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

/// Render the report body for a list of tagged headlines.
///
/// Headline numbering is 1-based with a width-2 right-aligned index.
pub fn render_report(headlines: &[String], timestamp: &str) -> String {
    let mut out = String::new();
    writeln!(out, "News Headlines - Scraped on {}", timestamp).unwrap();
    writeln!(out, "{}\n", "=".repeat(50)).unwrap();

    for (i, headline) in headlines.iter().enumerate() {
        writeln!(out, "{:2}. {}", i + 1, headline).unwrap();
    }

    writeln!(out, "\n\nTotal Headlines: {}", headlines.len()).unwrap();
    out
}

/// Write the report to `destination`, falling back to the Desktop on a
/// permission error.
///
/// # Returns
///
/// The path that was actually written.
#[instrument(level = "info", skip_all, fields(path = %destination.display()))]
pub async fn write_report(
    headlines: &[String],
    destination: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let content = render_report(headlines, &timestamp());
    write_with_fallback(&content, destination, desktop_dir()).await
}

async fn write_with_fallback(
    content: &str,
    destination: &Path,
    fallback_dir: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn Error>> {
    match fs::write(destination, content).await {
        Ok(()) => {
            info!(
                path = %destination.display(),
                bytes = content.len(),
                "Wrote headline report"
            );
            return Ok(destination.to_path_buf());
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            warn!(
                path = %destination.display(),
                error = %e,
                "Primary destination not writable; trying fallback"
            );
        }
        Err(e) => return Err(e.into()),
    }

    let Some(dir) = fallback_dir else {
        return Err("primary destination not writable and no fallback directory available".into());
    };
    let file_name = destination
        .file_name()
        .unwrap_or_else(|| OsStr::new("news_headlines.txt"));
    let fallback = dir.join(file_name);

    fs::write(&fallback, content).await?;
    info!(
        path = %fallback.display(),
        bytes = content.len(),
        "Wrote headline report to fallback location"
    );
    Ok(fallback)
}
