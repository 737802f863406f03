//! Interactive browsing session.
//!
//! Each input line is one event against the [`TableController`]; the table
//! is re-rendered after every event that changes what is shown.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use tabview_core::{Event, TableController};

use crate::logging::redact_value;
use crate::render::{RenderOptions, write_view};

pub const PROMPT: &str = "tabview> ";

pub const HELP: &str = "\
commands:
  sort <header>   sort by a column (click again to reverse)
  filter <text>   show rows containing text (empty clears)
  clear           clear the filter
  headers         list column headers
  state           show sort state and filter
  help            show this help
  quit            leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Sort(String),
    Filter(String),
    Headers,
    State,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };
        match word {
            "" => Self::Empty,
            "sort" if !rest.trim().is_empty() => Self::Sort(rest.trim().to_string()),
            "filter" => Self::Filter(rest.to_string()),
            "clear" => Self::Filter(String::new()),
            "headers" => Self::Headers,
            "state" => Self::State,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

/// Run the session until `quit` or end of input.
pub fn run_session<R, W>(
    controller: &mut TableController,
    options: &RenderOptions,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write_view(&controller.view(), options, out)?;
    prompt(out)?;
    for line in input.lines() {
        let line = line.context("read session input")?;
        match SessionCommand::parse(&line) {
            SessionCommand::Quit => break,
            SessionCommand::Empty => {}
            SessionCommand::Sort(header) => {
                if !controller.headers().contains(&header) {
                    writeln!(out, "unknown header: {header}")?;
                } else {
                    controller.apply(Event::HeaderClicked(header));
                    write_view(&controller.view(), options, out)?;
                }
            }
            SessionCommand::Filter(term) => {
                debug!(term = redact_value(&term), "filter changed");
                controller.apply(Event::FilterChanged(term));
                write_view(&controller.view(), options, out)?;
            }
            SessionCommand::Headers => {
                for header in controller.headers() {
                    writeln!(out, "{header}")?;
                }
            }
            SessionCommand::State => write_state(controller, out)?,
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Unknown(command) => {
                warn!(command = redact_value(&command), "unknown session command");
                writeln!(out, "unknown command: {command} (type `help`)")?;
            }
        }
        prompt(out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_state<W: Write>(controller: &TableController, out: &mut W) -> Result<()> {
    for header in controller.headers() {
        writeln!(out, "{header}: {}", controller.direction(header))?;
    }
    writeln!(out, "filter: {:?}", controller.filter_term())?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    Ok(())
}
