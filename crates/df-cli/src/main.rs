//! `df` command-line entry point.

use std::io::{self, IsTerminal, Write};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use tracing::warn;

use df_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use df_cli::commands::{RunOptions, dispatch};
use df_cli::logging::{LogConfig, LogFormat, init_logging};
use df_transform::CancelHandle;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let options = RunOptions {
        styled: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        },
        cancel: matches!(cli.command, Command::Nullify(_)).then(install_interrupt_handler),
    };

    let status = dispatch(
        &cli.command,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &options,
    );
    let _ = io::stdout().flush();
    std::process::exit(status.code());
}

/// Cancels the returned handle on Ctrl-C so a long run stops between records.
fn install_interrupt_handler() -> CancelHandle {
    let handle = CancelHandle::new();
    let signal = handle.clone();
    if let Err(error) = ctrlc::set_handler(move || signal.cancel()) {
        warn!(%error, "could not install Ctrl-C handler");
    }
    handle
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
