//! `trakx` command-line tool.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use trakx_cli::commands::{run_best_match, run_distance, run_select};
use trakx_cli::logging::{LogConfig, LogFormat, init_logging};
use trakx_cli::summary::{ReportFormat, render_select_report};
use trakx_match::SelectionOptions;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg, SelectArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Distance(args) => {
            println!("{}", run_distance(&args.source, &args.target).distance);
            0
        }
        Command::BestMatch(args) => {
            let max_distance = args.max_distance.unwrap_or(f64::INFINITY);
            match run_best_match(&args.source, &args.candidates, max_distance).best_match {
                Some(candidate) => {
                    println!("{candidate}");
                    0
                }
                None => 1,
            }
        }
        Command::Select(args) => match select(&args) {
            Ok(report) => {
                println!("{report}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn select(args: &SelectArgs) -> anyhow::Result<String> {
    let options = SelectionOptions::default()
        .with_max_standard_deviations(args.max_std_devs)
        .with_median(args.median)
        .with_throw_if_no_match(args.strict);
    let report = run_select(&args.values, options)?;
    let format = match args.output {
        OutputFormatArg::Table => ReportFormat::Table,
        OutputFormatArg::Json => ReportFormat::Json,
    };
    render_select_report(&report, format)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
