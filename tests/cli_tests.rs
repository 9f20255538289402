// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expense_tracker::commands::{self, Flow, expenses, filter, form};
use expense_tracker::config::Settings;
use expense_tracker::repl::{self, LineOutcome};
use expense_tracker::session::Session;
use expense_tracker::{cli, store::ExpenseStore};
use std::io::Cursor;

fn frozen() -> i64 {
    1_700_000_000_000
}

fn setup() -> Session {
    Session::with_store(Settings::default(), ExpenseStore::with_clock(frozen))
}

fn session_cli(session: &Session) -> clap::Command {
    cli::build_session_cli(&session.settings().categories)
}

#[test]
fn submit_adds_expense_from_flags() {
    let mut session = setup();
    let matches = session_cli(&session).get_matches_from([
        "submit",
        "--name",
        "Coffee",
        "--amount",
        "3.50",
        "--category",
        "Food",
        "--date",
        "2024-01-01",
    ]);
    if let Some(("submit", sub)) = matches.subcommand() {
        expenses::submit(&mut session, sub, false).unwrap();
    } else {
        panic!("no submit subcommand");
    }
    let list = session.store().list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Coffee");
    assert_eq!(list[0].amount, 3.5);
    assert_eq!(list[0].date, "2024-01-01");
}

#[test]
fn add_alias_accepts_negative_amount() {
    let mut session = setup();
    let matches =
        session_cli(&session).get_matches_from(["add", "--amount", "-10", "--category", "Other"]);
    assert_eq!(matches.subcommand_name(), Some("submit"));
    commands::dispatch(&mut session, &matches, false).unwrap();
    let total = session.store().total();
    assert!(total.is_negative());
    assert_eq!(total.display().text, "-10.00");
}

#[test]
fn category_must_come_from_enumeration() {
    let session = setup();
    let res = session_cli(&session).try_get_matches_from(["set", "--category", "Rent"]);
    assert!(res.is_err());
    let res = session_cli(&session).try_get_matches_from(["set", "--category", "All"]);
    assert!(res.is_err());
}

#[test]
fn filter_accepts_all_sentinel() {
    let mut session = setup();
    repl::run_line(
        &mut session,
        "submit --name Coffee --amount 3.50 --category Food",
        false,
    )
    .unwrap();
    let matches = session_cli(&session).get_matches_from(["filter", "All"]);
    if let Some(("filter", sub)) = matches.subcommand() {
        assert_eq!(
            sub.get_one::<String>("category").map(String::as_str),
            Some("All")
        );
        filter::filter(&mut session, sub, false).unwrap();
    } else {
        panic!("no filter subcommand");
    }
    assert_eq!(session.store().len(), 1);
}

#[test]
fn set_fills_only_given_fields() {
    let mut session = setup();
    let matches = session_cli(&session).get_matches_from(["set", "--name", "Bus"]);
    if let Some(("set", sub)) = matches.subcommand() {
        form::set(&mut session, sub).unwrap();
    } else {
        panic!("no set subcommand");
    }
    let draft = session.form().draft();
    assert_eq!(draft.name, "Bus");
    assert_eq!(draft.amount, "");
    assert_eq!(draft.category, "Food");
    assert!(session.store().is_empty());
}

#[test]
fn edit_and_delete_take_ids() {
    let mut session = setup();
    for line in [
        "submit --name Coffee --amount 3.50 --category Food",
        "submit --name Bus --amount 2 --category Transport",
    ] {
        repl::run_line(&mut session, line, false).unwrap();
    }
    let coffee = session.store().list()[0].id;
    let bus = session.store().list()[1].id;

    repl::run_line(&mut session, &format!("edit {}", coffee), false).unwrap();
    assert_eq!(session.form().draft().name, "Coffee");
    assert_eq!(session.store().len(), 1);

    repl::run_line(&mut session, &format!("rm {}", bus), false).unwrap();
    assert!(session.store().is_empty());
}

#[test]
fn quit_and_exit_end_the_session() {
    let mut session = setup();
    for word in ["quit", "exit"] {
        let matches = session_cli(&session).get_matches_from([word]);
        assert_eq!(
            commands::dispatch(&mut session, &matches, false).unwrap(),
            Flow::Quit
        );
    }
}

#[test]
fn run_line_reports_blank_and_bad_input() {
    let mut session = setup();
    assert_eq!(
        repl::run_line(&mut session, "   ", false).unwrap(),
        LineOutcome::Skipped
    );
    assert_eq!(
        repl::run_line(&mut session, "bogus", false).unwrap(),
        LineOutcome::Rejected
    );
    assert_eq!(
        repl::run_line(&mut session, "edit notanumber", false).unwrap(),
        LineOutcome::Rejected
    );
    assert_eq!(
        repl::run_line(&mut session, "set --name \"open", false).unwrap(),
        LineOutcome::Rejected
    );
    assert_eq!(
        repl::run_line(&mut session, "list --json", false).unwrap(),
        LineOutcome::Ran(Flow::Continue)
    );
}

#[test]
fn run_stops_at_quit() {
    let mut session = setup();
    let input = Cursor::new(
        "submit --name \"Coffee beans\" --amount 3.50 --category Food\n\
         bogus command\n\
         total\n\
         quit\n\
         submit --name Late --amount 1 --category Food\n",
    );
    repl::run(&mut session, input, false, false).unwrap();
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().list()[0].name, "Coffee beans");
}

#[test]
fn process_args_parse() {
    let matches = cli::build_cli().get_matches_from([
        "expense-tracker",
        "--config",
        "/tmp/cfg.json",
        "--json",
        "--log-level",
        "debug",
    ]);
    assert_eq!(
        matches.get_one::<String>("config").map(String::as_str),
        Some("/tmp/cfg.json")
    );
    assert!(matches.get_flag("json"));
    assert_eq!(
        matches.get_one::<String>("log-level").map(String::as_str),
        Some("debug")
    );
}
