//! Line-oriented interactive cleaning session.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scrub_core::CleaningSession;
use scrub_ingest::{export_file_name, write_view};
use scrub_model::OutputFormat;
use tracing::{info, warn};

use crate::summary::{
    render_dates, render_history, render_outcome, render_preview, render_quality,
    render_row_counts, render_suggestions, render_undo, render_values,
};

pub const PROMPT: &str = "scrub> ";

pub const HELP: &str = "\
Commands:
  suggestions                 list suggested fixes
  refresh                     re-scan the current data for fixes
  apply ID                    apply one suggestion
  apply-all                   apply every pending suggestion as one step
  undo                        revert the last step
  history                     list undoable steps
  profile                     column quality of the current view
  preview [N]                 first rows of the current view
  values COLUMN               distinct values of a column
  dates                       columns that look like dates
  filter COLUMN START END     keep rows whose COLUMN date is in range
  clear-filter                remove the date filter
  export FORMAT [PATH]        write the current view (csv, tsv, json, xlsx)
  help                        show this help
  quit                        leave the session
Quote arguments that contain spaces: values \"Order Date\"";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Suggestions,
    Refresh,
    Apply(String),
    ApplyAll,
    Undo,
    History,
    Profile,
    Preview(Option<usize>),
    Values(String),
    Dates,
    Filter {
        column: String,
        start: String,
        end: String,
    },
    ClearFilter,
    Export {
        format: OutputFormat,
        path: Option<PathBuf>,
    },
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one input line; `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let tokens = tokenize(line)?;
        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("suggestions" | "suggest", []) => Self::Suggestions,
            ("refresh", []) => Self::Refresh,
            ("apply", [id]) => Self::Apply((*id).to_string()),
            ("apply-all", []) => Self::ApplyAll,
            ("undo", []) => Self::Undo,
            ("history", []) => Self::History,
            ("profile", []) => Self::Profile,
            ("preview", []) => Self::Preview(None),
            ("preview", [n]) => Self::Preview(Some(
                n.parse().map_err(|_| format!("not a row count: {n}"))?,
            )),
            ("values", [column]) => Self::Values((*column).to_string()),
            ("dates", []) => Self::Dates,
            ("filter", [column, start, end]) => Self::Filter {
                column: (*column).to_string(),
                start: (*start).to_string(),
                end: (*end).to_string(),
            },
            ("clear-filter", []) => Self::ClearFilter,
            ("export", [format, rest @ ..]) if rest.len() <= 1 => Self::Export {
                format: OutputFormat::parse(format)
                    .ok_or_else(|| format!("unknown format: {format}"))?,
                path: rest.first().map(PathBuf::from),
            },
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            (other, _) => {
                return Err(format!(
                    "unrecognised command or arguments: {other} (try 'help')"
                ));
            }
        };
        Ok(Some(command))
    }
}

/// Splits a line on whitespace; double quotes group words and may be empty.
pub fn tokenize(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Runs the shell until `quit` or end of input.
///
/// Engine and parse errors are reported on `output` and the loop continues;
/// only I/O failures on `input` or `output` end it with an error.
pub fn run_shell<R, W>(
    session: &mut CleaningSession,
    source: &Path,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render_row_counts(session.row_counts()))?;
    writeln!(output, "Type 'help' for commands.")?;
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("read command")?;
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "error: {message}")?;
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        match execute(session, source, &command) {
            Ok(text) => writeln!(output, "{text}")?,
            Err(error) => {
                warn!(error = %error, "command failed");
                writeln!(output, "error: {error:#}")?;
            }
        }
    }
    Ok(())
}

/// Runs one command and returns what to print.
pub fn execute(
    session: &mut CleaningSession,
    source: &Path,
    command: &ShellCommand,
) -> Result<String> {
    let text = match command {
        ShellCommand::Suggestions => render_suggestions(&session.suggestions()),
        ShellCommand::Refresh => {
            session.refresh_suggestions();
            render_suggestions(&session.suggestions())
        }
        ShellCommand::Apply(id) => render_outcome(&session.apply(id)?),
        ShellCommand::ApplyAll => render_outcome(&session.apply_all()?),
        ShellCommand::Undo => render_undo(&session.undo()?),
        ShellCommand::History => render_history(&session.history_labels()),
        ShellCommand::Profile => render_quality(&session.quality_report()),
        ShellCommand::Preview(rows) => {
            let rows = rows.unwrap_or(session.options().preview_rows);
            format!(
                "{}\n{}",
                render_preview(&session.preview_rows(rows)),
                render_row_counts(session.row_counts())
            )
        }
        ShellCommand::Values(column) => render_values(&session.column_values(column)?),
        ShellCommand::Dates => render_dates(session.date_columns()),
        ShellCommand::Filter { column, start, end } => {
            session.set_filter(column, start, end)?;
            render_row_counts(session.row_counts())
        }
        ShellCommand::ClearFilter => {
            session.clear_filter();
            render_row_counts(session.row_counts())
        }
        ShellCommand::Export { format, path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => default_export_path(source, *format, &session.options().export.suffix),
            };
            let view = session.view();
            write_view(&view, *format, &path)
                .with_context(|| format!("export {}", path.display()))?;
            info!(path = %path.display(), rows = view.len(), "exported from session");
            format!("Exported {} rows to {}", view.len(), path.display())
        }
        ShellCommand::Help => HELP.to_string(),
        ShellCommand::Quit => String::new(),
    };
    Ok(text)
}

/// `<dir>/<stem><suffix>.<ext>` next to the source file.
pub fn default_export_path(source: &Path, format: OutputFormat, suffix: &str) -> PathBuf {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(export_file_name(&name, format, suffix))
}
