// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::ExpenseForm;
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

/// Copy any field flags present on `sub` into the form.
pub(crate) fn apply_fields(form: &mut ExpenseForm, sub: &clap::ArgMatches) {
    if let Some(v) = sub.get_one::<String>("name") {
        form.set_name(v);
    }
    if let Some(v) = sub.get_one::<String>("amount") {
        form.set_amount(v);
    }
    if let Some(v) = sub.get_one::<String>("category") {
        form.set_category(v);
    }
    if let Some(v) = sub.get_one::<String>("date") {
        form.set_date(v);
    }
}

pub fn set(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    apply_fields(session.form_mut(), sub);
    Ok(())
}

pub fn show(session: &Session, json: bool) -> Result<()> {
    let d = session.form().draft();
    if !maybe_print_json(json, false, d)? {
        let rows = vec![
            vec!["Name".to_string(), d.name.clone()],
            vec!["Amount".to_string(), d.amount.clone()],
            vec!["Category".to_string(), d.category.clone()],
            vec!["Date".to_string(), d.date.clone()],
        ];
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}

pub fn reset(session: &mut Session, json: bool) -> Result<()> {
    session.form_mut().reset();
    show(session, json)
}
