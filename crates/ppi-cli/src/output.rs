//! Shared output layer: human key/value lines or stable JSON.
//!
//! Every command handler receives an [`OutputMode`] and renders through the
//! helpers here, so `--json` behaves identically across subcommands.

use std::io::{self, Write};

use serde::Serialize;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable key/value or line output.
    Human,
    /// Machine-readable JSON (one object or array per result).
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Render a serializable value: JSON in `Json` mode, the given closure in
/// `Human` mode.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut w, value)?;
            writeln!(w)?;
        }
        OutputMode::Human => human(value, &mut w)?,
    }
    Ok(())
}

/// Render a plain confirmation message (`{"status": …}` in JSON mode).
pub fn render_success(mode: OutputMode, message: &str) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    if mode.is_json() {
        serde_json::to_writer(&mut w, &serde_json::json!({ "status": message }))?;
        writeln!(w)?;
    } else {
        writeln!(w, "{message}")?;
    }
    Ok(())
}

/// Write a left-aligned `key : value` line, the layout used by the
/// centrality report.
pub fn kv_line(w: &mut dyn Write, key: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(w, "{key} : {value}")
}
