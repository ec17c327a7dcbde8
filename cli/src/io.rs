//! File and stdio helpers. `-` names stdin or stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

const STDIO: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Read a whole UTF-8 input file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdio(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), len = text.len(), "input read");
    Ok(text)
}

/// Write `text` verbatim to a file, or to stdout with a trailing newline.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) if !is_stdio(path) => {
            fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), len = text.len(), "output written");
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
