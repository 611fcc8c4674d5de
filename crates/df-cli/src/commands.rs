//! Subcommand handlers.
//!
//! Handlers write to the writers they are given rather than to the process
//! streams, so they can be driven from tests.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info_span, warn};

use df_ingest::{read_head, read_headers};
use df_transform::{CancelHandle, TransformOptions, nullify_file_with_options};

use crate::cli::{ColsArgs, Command, HeadArgs, NullifyArgs};
use crate::render::{TableOptions, print_table};
use crate::summary::print_nullify_summary;

/// Process exit status for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The command ran and failed (I/O, parse or cancellation).
    Failure,
    /// The invocation itself was invalid.
    Usage,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Usage => 2,
        }
    }
}

/// Process-level settings that are not part of a subcommand's arguments.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Emit ANSI styling in tables.
    pub styled: bool,
    /// Checked by `nullify` between records.
    pub cancel: Option<CancelHandle>,
}

/// Runs `command`, reporting errors on `err` as `error: <message>`.
pub fn dispatch(
    command: &Command,
    out: &mut dyn Write,
    err: &mut dyn Write,
    options: &RunOptions,
) -> ExitStatus {
    if let Err(message) = validate(command) {
        let _ = writeln!(err, "error: {message}");
        return ExitStatus::Usage;
    }
    let result = match command {
        Command::Cols(args) => run_cols(args, out),
        Command::Head(args) => run_head(args, out, options),
        Command::Nullify(args) => run_nullify(args, out, err, options),
    };
    match result {
        Ok(()) => ExitStatus::Success,
        Err(error) => {
            let _ = writeln!(err, "error: {error}");
            ExitStatus::Failure
        }
    }
}

/// Checks argument combinations clap cannot express.
fn validate(command: &Command) -> std::result::Result<(), String> {
    if let Command::Nullify(args) = command
        && args.input == args.output
    {
        return Err(format!(
            "nullify: output path must differ from input: {}",
            args.output.display()
        ));
    }
    Ok(())
}

/// Prints `index<TAB>name` for every header column.
pub fn run_cols(args: &ColsArgs, out: &mut dyn Write) -> Result<()> {
    let headers = read_headers(&args.file)?;
    debug!(path = %args.file.display(), columns = headers.len(), "read headers");
    for (index, name) in headers.iter().enumerate() {
        writeln!(out, "{index}\t{name}")?;
    }
    Ok(())
}

/// Prints the header and the first `args.rows` data rows as a table.
pub fn run_head(args: &HeadArgs, out: &mut dyn Write, options: &RunOptions) -> Result<()> {
    let preview = read_head(&args.file, args.rows)?;
    let table_options = TableOptions {
        max_cell_width: args.max_width,
        styled: options.styled,
        ..TableOptions::default()
    };
    print_table(out, &preview.headers, &preview.rows, &table_options)?;
    Ok(())
}

/// Writes the nullified copy and reports the run statistics.
///
/// On failure the partial statistics are logged and the error is returned;
/// nothing is printed to the summary streams.
pub fn run_nullify(
    args: &NullifyArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    options: &RunOptions,
) -> Result<()> {
    let policy = args.policy();
    let span = info_span!("command", name = "nullify");
    let _guard = span.enter();
    debug!(?policy, "selected policy");
    if policy.is_empty() {
        warn!("no NULL rule enabled; output will equal the normalized input");
    }

    let transform_options = TransformOptions {
        cancel: options.cancel.clone(),
    };
    let stats = nullify_file_with_options(&args.input, &args.output, &policy, &transform_options)?;
    print_nullify_summary(args.summary, stats, &args.output, out, err)
}
