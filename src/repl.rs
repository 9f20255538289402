// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::build_session_cli;
use crate::commands::{self, Flow};
use crate::session::Session;
use crate::utils::split_words;
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Outcome of feeding a single line to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Ran(Flow),
    Skipped,
    Rejected,
}

pub fn run_line(session: &mut Session, line: &str, json: bool) -> Result<LineOutcome> {
    let words = match split_words(line) {
        Ok(w) => w,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(LineOutcome::Rejected);
        }
    };
    if words.is_empty() {
        return Ok(LineOutcome::Skipped);
    }
    let matches = match build_session_cli(&session.settings().categories).try_get_matches_from(words)
    {
        Ok(m) => m,
        Err(err) => {
            let rejected = !matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
            err.print().context("Failed to print command error")?;
            return Ok(if rejected {
                LineOutcome::Rejected
            } else {
                LineOutcome::Skipped
            });
        }
    };
    debug!(command = matches.subcommand_name().unwrap_or_default(), "dispatch");
    Ok(LineOutcome::Ran(commands::dispatch(session, &matches, json)?))
}

/// Read commands until `quit` or end of input.
pub fn run<R: BufRead>(session: &mut Session, input: R, json: bool, interactive: bool) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if interactive {
            print!("{}", session.settings().prompt);
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;
        match run_line(session, &line, json) {
            Ok(LineOutcome::Ran(Flow::Quit)) => break,
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "command failed");
                eprintln!("Error: {:#}", err);
            }
        }
    }
    debug!(expenses = session.store().len(), "session ended");
    Ok(())
}
