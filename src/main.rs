// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! spacey-steps - Flatten JavaScript programs into an ordered table of steps
//!
//! This is the main entry point for the spacey-steps CLI/REPL.
//!
//! ## Features
//!
//! - Table or JSON output of the flattened steps
//! - Concurrent file loading with tokio
//! - Interactive REPL with history and multi-line input

mod cli;
mod config;
mod error;
mod output;
mod repl;

use clap::Parser;
use spacey_analyzer::AsyncAnalyzer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::Config;
use error::CliError;
use output::{OutputFormat, Printer};

/// Main entry point - uses tokio runtime for async file loading.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            let printer = Printer::new(OutputFormat::Table, !cli.no_color);
            eprintln!("{}", printer.render_error(&e));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config, cli.log_level.is_some());
    let printer = Printer::new(config.format, config.color);

    if let Some(code) = &cli.eval {
        return run_eval(code, &printer);
    }

    if !cli.files.is_empty() {
        return run_files(&cli.files, &printer).await;
    }

    run_repl(&config)
}

/// Log to stderr; `RUST_LOG` wins over configuration unless `--log-level` was given.
fn init_tracing(config: &Config, explicit: bool) {
    let configured = || {
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let filter = if explicit {
        configured()
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Start the interactive REPL
fn run_repl(config: &Config) -> ExitCode {
    let printer = Printer::new(OutputFormat::Table, config.color);
    let result = repl::Repl::new(config).and_then(|mut repl| repl.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", printer.render_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// Analyze code given on the command line.
fn run_eval(code: &str, printer: &Printer) -> ExitCode {
    let rendered = spacey_analyzer::analyze(code)
        .map_err(CliError::from)
        .and_then(|model| printer.render(&model));

    match rendered {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", printer.render_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// Analyze files concurrently, printing results in argument order.
async fn run_files(paths: &[PathBuf], printer: &Printer) -> ExitCode {
    let analyzer = AsyncAnalyzer::new();
    let results = analyzer.analyze_files(paths).await;
    let with_headers = paths.len() > 1;
    let mut failed = false;

    for (index, (path, result)) in paths.iter().zip(results).enumerate() {
        if with_headers {
            if index > 0 {
                println!();
            }
            println!("{}", printer.render_header(&path.display().to_string()));
        }

        match result.map_err(CliError::from).and_then(|model| printer.render(&model)) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{}", printer.render_error(&e));
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
