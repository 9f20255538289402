// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::print_screen;
use crate::models::ALL_CATEGORIES;
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn filter(session: &mut Session, sub: &clap::ArgMatches, json: bool) -> Result<()> {
    let category = sub
        .get_one::<String>("category")
        .map(String::as_str)
        .unwrap_or(ALL_CATEGORIES);
    let screen = session.change_filter(category);
    print_screen(&screen, json, false)
}

pub fn categories(session: &Session, json: bool) -> Result<()> {
    let cats = &session.settings().categories;
    if !maybe_print_json(json, false, cats)? {
        let data = cats.iter().map(|c| vec![c.clone()]).collect();
        println!("{}", pretty_table(&["Category"], data));
    }
    Ok(())
}
