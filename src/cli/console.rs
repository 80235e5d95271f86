//! Line-oriented console front end over a [`Session`]
//!
//! Generic over its input and output so tests can drive it with byte buffers.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;

use crate::export::ColumnSpec;
use crate::models::LogField;
use crate::session::Session;
use crate::utils::format_path_with_tilde;

const PROMPT: &str = "Enter a keyword to search for (or type 'exit' to quit) : ";
const EXPORT_PROMPT: &str = "Do you want to export this data? (o/n) : ";
const EXIT_COMMAND: &str = "exit";
const CELL_SEPARATOR: &str = " | ";

#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    pub export_dir: PathBuf,
    /// Colour timestamp cells (only meaningful on a terminal)
    pub color: bool,
}

/// Read the next line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "o" | "oui" | "y" | "yes")
}

fn is_history_ref(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `!N` recalls the N-th most recent keyword and `!!N` searches for the text `!N`
///
/// Anything else, including `!N` past the end of the history, is taken literally.
fn recall<'a>(session: &'a Session, line: &'a str) -> &'a str {
    let Some(rest) = line.trim().strip_prefix('!') else {
        return line;
    };
    if let Some(escaped) = rest.strip_prefix('!')
        && is_history_ref(escaped)
    {
        return rest;
    }
    if !is_history_ref(rest) {
        return line;
    }
    rest.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| session.history().iter().nth(index))
        .unwrap_or(line)
}

fn write_history<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    if session.history().is_empty() {
        return Ok(());
    }
    writeln!(output, "Recent searches (recall with !N, type !!N to search for \"!N\"):")?;
    for (i, keyword) in session.history().iter().enumerate() {
        writeln!(output, "  !{} {}", i + 1, keyword)?;
    }
    Ok(())
}

fn write_results<W: Write>(
    session: &Session,
    output: &mut W,
    options: &ConsoleOptions,
) -> Result<()> {
    writeln!(output)?;
    writeln!(output, " === RESULTS FOR : \"{}\" === ", session.keyword())?;
    writeln!(output, "[Results found : {}]", session.filtered().len())?;
    writeln!(output)?;
    writeln!(output, "Columns : {}", session.columns())?;
    writeln!(output, "=== BEGIN RESULTS ===")?;

    let columns = session.columns().columns();
    for row in session.projected_rows() {
        let cells: Vec<String> = row
            .iter()
            .zip(columns)
            .map(|(cell, column)| match column {
                ColumnSpec::Field(LogField::Timestamp) if options.color => {
                    cell.clone().green().to_string()
                }
                _ => cell.clone(),
            })
            .collect();
        writeln!(output, "{}", cells.join(CELL_SEPARATOR))?;
    }

    writeln!(output, "=== END RESULTS ===")?;
    Ok(())
}

fn offer_export<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
    options: &ConsoleOptions,
) -> Result<()> {
    if !session.can_export() {
        return Ok(());
    }

    write!(output, "\n{}", EXPORT_PROMPT)?;
    output.flush()?;
    let Some(answer) = read_line(input)? else {
        return Ok(());
    };
    if !is_yes(&answer) {
        return Ok(());
    }

    match session.export(&options.export_dir) {
        Ok(path) => {
            writeln!(output, "\nResults exported to : {}", format_path_with_tilde(&path))?;
        }
        Err(e) => {
            writeln!(output, "\nExport failed: {:#}", e)?;
        }
    }
    Ok(())
}

/// Prompt for keywords until `exit` or end of input
///
/// Each keyword filters the session, is recorded in the history, and the
/// projected rows are printed; an export is offered when there is something
/// to export. Only I/O errors on `input`/`output` end the loop early.
pub fn run_prompt_loop<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
    options: &ConsoleOptions,
) -> Result<()> {
    write_history(session, &mut output)?;

    loop {
        write!(output, "\n{}", PROMPT)?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if is_exit(&line) {
            break;
        }

        let keyword = recall(session, &line).to_string();
        let outcome = session.run_query(&keyword);
        if let Some(e) = outcome.history_error {
            writeln!(output, "Warning: could not save search history: {:#}", e)?;
        }

        write_results(session, &mut output, options)?;
        offer_export(session, &mut input, &mut output, options)?;
    }

    writeln!(output, "End of program.")?;
    Ok(())
}
