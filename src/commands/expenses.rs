// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::form::{apply_fields, show};
use super::print_screen;
use crate::session::Session;
use crate::utils::{maybe_print_json, to_fixed};
use crate::view::total_line;
use anyhow::{Context, Result};

fn id_of(sub: &clap::ArgMatches) -> Result<i64> {
    sub.get_one::<i64>("id")
        .copied()
        .context("Missing expense id")
}

pub fn submit(session: &mut Session, sub: &clap::ArgMatches, json: bool) -> Result<()> {
    apply_fields(session.form_mut(), sub);
    let (expense, screen) = session.submit();
    if !json {
        println!(
            "Added #{} '{}' {}{} ({})",
            expense.id,
            expense.name,
            session.settings().currency_symbol,
            to_fixed(expense.amount),
            expense.category
        );
    }
    print_screen(&screen, json, false)
}

pub fn delete(session: &mut Session, sub: &clap::ArgMatches, json: bool) -> Result<()> {
    let id = id_of(sub)?;
    let screen = session.delete(id);
    print_screen(&screen, json, false)
}

pub fn edit(session: &mut Session, sub: &clap::ArgMatches, json: bool) -> Result<()> {
    let id = id_of(sub)?;
    let found = session.store().find_by_id(id).is_some();
    let screen = session.edit(id);
    print_screen(&screen, json, false)?;
    if found {
        if !json {
            println!("Expense #{} moved to the form; submit to save it again.", id);
        }
        show(session, json)?;
    }
    Ok(())
}

pub fn list(session: &Session, sub: &clap::ArgMatches, json: bool) -> Result<()> {
    let json_flag = json || sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    print_screen(&session.screen(), json_flag && !jsonl_flag, jsonl_flag)
}

pub fn total(session: &Session, sub: &clap::ArgMatches, json: bool) -> Result<()> {
    let json_flag = json || sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let total = session.store().total().display();
    if !maybe_print_json(json_flag && !jsonl_flag, jsonl_flag, &total)? {
        println!("{}", total_line(&total));
    }
    Ok(())
}
