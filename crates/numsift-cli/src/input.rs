use anyhow::{Context as _, Result};
use numsift_files::read_rows;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

/// Collects raw text from `--text`, imported files and, when neither is
/// given, stdin. Imported rows are appended one per line.
pub fn gather_text(text: Option<String>, files: &[PathBuf]) -> Result<String> {
    let mut out = text.unwrap_or_default();

    for path in files {
        let rows = read_rows(path).with_context(|| format!("import {}", path.display()))?;
        debug!(path = %path.display(), rows = rows.len(), "imported rows");
        if rows.is_empty() {
            continue;
        }
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&rows.join("\n"));
    }

    if out.is_empty() && files.is_empty() {
        out = read_stdin()?;
    }
    Ok(out)
}

fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .with_context(|| "read stdin")?;
    Ok(buf)
}
