// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod expenses;
pub mod filter;
pub mod form;

use crate::session::Session;
use crate::utils::maybe_print_json;
use crate::view::{Screen, rows_table, total_line};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one parsed session line. `json` is the process-wide `--json` flag.
pub fn dispatch(session: &mut Session, m: &clap::ArgMatches, json: bool) -> Result<Flow> {
    match m.subcommand() {
        Some(("set", sub)) => form::set(session, sub)?,
        Some(("form", _)) => form::show(session, json)?,
        Some(("reset", _)) => form::reset(session, json)?,
        Some(("submit", sub)) => expenses::submit(session, sub, json)?,
        Some(("edit", sub)) => expenses::edit(session, sub, json)?,
        Some(("delete", sub)) => expenses::delete(session, sub, json)?,
        Some(("list", sub)) => expenses::list(session, sub, json)?,
        Some(("total", sub)) => expenses::total(session, sub, json)?,
        Some(("filter", sub)) => filter::filter(session, sub, json)?,
        Some(("categories", _)) => filter::categories(session, json)?,
        Some(("quit", _)) => return Ok(Flow::Quit),
        _ => {}
    }
    Ok(Flow::Continue)
}

pub(crate) fn print_screen(screen: &Screen, json_flag: bool, jsonl_flag: bool) -> Result<()> {
    if !maybe_print_json(json_flag, jsonl_flag, screen)? {
        println!("{}", rows_table(&screen.rows));
        println!("{}", total_line(&screen.total));
    }
    Ok(())
}
