// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Registry --> Command Dispatch
//!   Version | Current | Is | Name | List
//! ```

use std::process::ExitCode;

use csenv::cli::{self, Command};
use csenv::cmd::query::{run_current_command, run_is_command, run_list_command, run_name_command};
use csenv::cmd::load_registry;
use csenv::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = cli.global.log_config();
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Current(args)) => load_registry(&cli.global)
            .and_then(|registry| run_current_command(args, &registry))
            .map(print_line),
        Some(Command::Is(args)) => load_registry(&cli.global)
            .and_then(|registry| run_is_command(args, &registry))
            .map(|matched| {
                if matched {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                }
            }),
        Some(Command::Name(args)) => load_registry(&cli.global)
            .and_then(|registry| run_name_command(args, &registry))
            .map(print_line),
        Some(Command::List) => load_registry(&cli.global)
            .and_then(|registry| run_list_command(&registry))
            .map(|lines| print_line(lines.join("\n"))),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn print_line(line: String) -> ExitCode {
    println!("{line}");
    ExitCode::SUCCESS
}
