// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::io::IsTerminal;
use std::path::Path;
use tracing::info;

use expense_tracker::{cli, config, logging, repl, session::Session};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let settings = config::load(matches.get_one::<String>("config").map(Path::new))?;
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = logging::resolve_filter(
        matches.get_one::<String>("log-level").map(String::as_str),
        rust_log.as_deref(),
        &settings.log_level,
    );
    logging::init(&filter)?;

    let json = matches.get_flag("json");
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Expense tracker: type 'help' for commands, 'quit' to leave.");
    }
    info!(categories = settings.categories.len(), "session started");

    let mut session = Session::new(settings);
    repl::run(&mut session, stdin.lock(), json, interactive)
}
