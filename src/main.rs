use std::{io, process};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use accum::cli::args::{parse_tokens, Cli, ParseOutcome};
use accum::cli::commands::execute_command;
use accum::cli::output;
use accum::exitcode;

fn main() {
    let cli = match parse_tokens(std::env::args_os()) {
        ParseOutcome::Parsed(cli) => cli,
        ParseOutcome::Help(text) => {
            print!("{}", text);
            process::exit(exitcode::OK);
        }
        ParseOutcome::Usage(text) => {
            eprint!("{}", text);
            process::exit(exitcode::USAGE);
        }
    };

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Diagnostics go to stderr; stdout carries only the computed result.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(%filter, "logging initialised");
}
