// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ALL_CATEGORIES;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("expense-tracker")
        .version(clap::crate_version!())
        .about("Interactive expense tracker: add, edit, delete and filter expenses with a running total")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Settings file (JSON); defaults to the platform config dir"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print lists and totals as JSON"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .help("Log filter, e.g. info or expense_tracker=debug"),
        )
}

fn field_args(categories: &[String]) -> [Arg; 4] {
    [
        Arg::new("name").long("name").help("Expense name"),
        Arg::new("amount")
            .long("amount")
            .allow_hyphen_values(true)
            .help("Amount, e.g. 3.50 or -10"),
        Arg::new("category")
            .long("category")
            .value_parser(PossibleValuesParser::new(categories.to_vec())),
        Arg::new("date").long("date").help("Date, e.g. 2024-01-01"),
    ]
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json").long("json").action(ArgAction::SetTrue),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json"),
    ]
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .allow_hyphen_values(true)
        .value_parser(value_parser!(i64))
}

/// Grammar of one line typed into a running session.
pub fn build_session_cli(categories: &[String]) -> Command {
    let mut filter_values = vec![ALL_CATEGORIES.to_string()];
    filter_values.extend(categories.iter().cloned());

    Command::new("expenses")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_version_flag(true)
        .subcommand(
            Command::new("set")
                .about("Fill form fields")
                .args(field_args(categories)),
        )
        .subcommand(
            Command::new("submit")
                .visible_alias("add")
                .about("Fill any given fields, then add the form as an expense")
                .args(field_args(categories)),
        )
        .subcommand(Command::new("form").about("Show the form"))
        .subcommand(Command::new("reset").about("Clear the form"))
        .subcommand(
            Command::new("edit")
                .about("Move an expense back into the form (it leaves the list)")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("delete")
                .visible_alias("rm")
                .about("Delete an expense")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("filter")
                .about("Show only one category, or All")
                .arg(
                    Arg::new("category")
                        .required(true)
                        .value_parser(PossibleValuesParser::new(filter_values)),
                ),
        )
        .subcommand(Command::new("list").about("Show all expenses").args(json_args()))
        .subcommand(Command::new("total").about("Show the running total").args(json_args()))
        .subcommand(Command::new("categories").about("List categories"))
        .subcommand(Command::new("quit").visible_alias("exit").about("End the session"))
}
