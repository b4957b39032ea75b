// src/bin/orgaudit.rs
use clap::Parser;
use colored::Colorize;
use orgaudit_core::cli::{self, Cli};
use orgaudit_core::exit::OrgAuditExit;
use orgaudit_core::logging;

fn main() -> OrgAuditExit {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} {e}", "Warning:".yellow());
    }

    match cli::handle_analyze(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            OrgAuditExit::for_error(&e)
        }
    }
}
