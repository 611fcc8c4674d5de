//! End-to-end tests for the `df` subcommands, driven through argument parsing.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::error::ErrorKind;
use insta::assert_snapshot;
use tempfile::TempDir;

use df_cli::cli::Cli;
use df_cli::commands::{ExitStatus, RunOptions, dispatch};
use df_transform::CancelHandle;

struct Run {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

fn arg(path: &Path) -> String {
    path.display().to_string()
}

fn run_with(args: &[&str], options: &RunOptions) -> Run {
    let cli = Cli::try_parse_from(std::iter::once("df").chain(args.iter().copied()))
        .expect("valid invocation");
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let status = dispatch(&cli.command, &mut out, &mut err, options);
    Run {
        status,
        stdout: String::from_utf8(out).expect("utf-8 stdout"),
        stderr: String::from_utf8(err).expect("utf-8 stderr"),
    }
}

fn run(args: &[&str]) -> Run {
    run_with(args, &RunOptions::default())
}

fn usage_error(args: &[&str]) -> clap::Error {
    match Cli::try_parse_from(std::iter::once("df").chain(args.iter().copied())) {
        Ok(_) => panic!("expected a usage error for {args:?}"),
        Err(error) => error,
    }
}

// =========================================================================
// cols
// =========================================================================

#[test]
fn cols_lists_headers_with_indices() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "contacts.csv", "id,email,full name\n1,a@example.com,Ada\n");

    let result = run(&["cols", &arg(&input)]);

    assert_eq!(result.status, ExitStatus::Success);
    assert_snapshot!(result.stdout.trim_end(), @"0\tid\n1\temail\n2\tfull name");
    assert!(result.stderr.is_empty());
}

#[test]
fn cols_shows_leading_bom_as_part_of_first_name() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "bom.csv", "\u{feff}id,email\n");

    let result = run(&["cols", &arg(&input)]);

    assert_eq!(result.status, ExitStatus::Success);
    assert_eq!(result.stdout, "0\t\u{feff}id\n1\temail\n");
}

#[test]
fn cols_on_empty_file_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "empty.csv", "");

    let result = run(&["cols", &arg(&input)]);

    assert_eq!(result.status, ExitStatus::Failure);
    assert!(result.stdout.is_empty());
    assert!(
        result
            .stderr
            .starts_with("error: read headers: CSV file is empty: ")
    );
}

#[test]
fn cols_without_file_is_a_usage_error() {
    let error = usage_error(&["cols"]);
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn cols_with_two_files_is_a_usage_error() {
    let error = usage_error(&["cols", "a.csv", "b.csv"]);
    assert_eq!(error.exit_code(), 2);
}

// =========================================================================
// head
// =========================================================================

#[test]
fn head_prints_header_separator_and_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "rows.csv", "a,b\n1,2\n3,4\n5,6\n7,8\n");

    let result = run(&["head", &arg(&input), "-n", "2"]);

    assert_eq!(result.status, ExitStatus::Success);
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[2].contains('1') && lines[2].contains('2'));
    assert!(lines[3].contains('3') && lines[3].contains('4'));
    assert!(!result.stdout.contains('5'));
}

#[test]
fn head_stops_at_end_of_input() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "rows.csv", "a\n1\n");

    let result = run(&["head", "-n", "10", &arg(&input)]);

    assert_eq!(result.status, ExitStatus::Success);
    assert_eq!(result.stdout.lines().count(), 3);
}

#[test]
fn head_zero_rows_prints_header_only() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "rows.csv", "a,b\n1,2\n");

    let result = run(&["head", &arg(&input), "-n", "0"]);

    assert_eq!(result.status, ExitStatus::Success);
    assert_eq!(result.stdout.lines().count(), 2);
}

#[test]
fn head_clips_wide_cells() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "wide.csv", "note\nabcdefghijkl\n");

    let result = run(&["head", &arg(&input), "-w", "5"]);

    assert_eq!(result.status, ExitStatus::Success);
    assert!(result.stdout.contains("abcd…"));
    assert!(!result.stdout.contains("abcde"));
}

#[test]
fn head_pads_short_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "ragged.csv", "a,b,c\n1\n");

    let result = run(&["head", &arg(&input)]);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].matches('|').count(), lines[0].matches('|').count());
}

#[test]
fn head_negative_row_count_is_a_usage_error() {
    let error = usage_error(&["head", "file.csv", "-n", "-1"]);
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn head_non_numeric_width_is_a_usage_error() {
    let error = usage_error(&["head", "file.csv", "-w", "wide"]);
    assert_eq!(error.exit_code(), 2);
}

// =========================================================================
// nullify
// =========================================================================

#[test]
fn nullify_writes_output_and_text_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "in.csv", "a,b\n1,\n ,2\n");
    let output = dir.path().join("out.csv");

    let result = run(&["nullify", &arg(&input), "-o", &arg(&output)]);

    assert_eq!(result.status, ExitStatus::Success);
    assert_eq!(fs::read_to_string(&output).unwrap(), "a,b\n1,\n,2\n");
    assert!(result.stdout.is_empty());
    assert_snapshot!(result.stderr.replace(&arg(&output), "[OUT]"), @r"
    Rows read: 2
    Cells checked: 4
    Cells nullified (changed): 1
    Wrote: [OUT]
    ");
}

#[test]
fn nullify_json_summary_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "in.csv", "a,b\n1,NULL\nNA,n/a\n");
    let output = dir.path().join("out.csv");

    let result = run(&[
        "nullify",
        &arg(&input),
        "--na",
        "--null-literal",
        "-o",
        &arg(&output),
        "--summary",
        "json",
    ]);

    assert_eq!(result.status, ExitStatus::Success);
    assert!(result.stderr.is_empty());
    let summary: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(summary["rows_read"], 2);
    assert_eq!(summary["cells_checked"], 4);
    assert_eq!(summary["cells_nullified"], 3);
    assert_eq!(summary["output"], arg(&output));
    assert_eq!(fs::read_to_string(&output).unwrap(), "a,b\n1,\n,\n");
}

#[test]
fn nullify_no_blanks_keeps_whitespace() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "in.csv", "a,b\n1, \n");
    let output = dir.path().join("out.csv");

    let result = run(&["nullify", &arg(&input), "-o", &arg(&output), "--no-blanks"]);

    assert_eq!(result.status, ExitStatus::Success);
    let written = fs::read_to_string(&output).unwrap();
    let mut reader = csv::ReaderBuilder::new().from_reader(written.as_bytes());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[1], " ");
}

#[test]
fn nullify_missing_input_is_a_runtime_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    let result = run(&[
        "nullify",
        &arg(&dir.path().join("missing.csv")),
        "-o",
        &arg(&output),
    ]);

    assert_eq!(result.status, ExitStatus::Failure);
    assert_eq!(result.status.code(), 1);
    assert!(result.stderr.starts_with("error: open input csv "));
    assert!(!output.exists());
}

#[test]
fn nullify_malformed_row_reports_row_number() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, b"a,b\n1,2\n3,\"oops\n4,5\n").unwrap();
    let output = dir.path().join("out.csv");

    let result = run(&["nullify", &arg(&input), "-o", &arg(&output)]);

    assert_eq!(result.status, ExitStatus::Failure);
    assert_snapshot!(
        result.stderr.trim_end(),
        @r#"error: read row 2: line 3: extraneous or missing " in quoted-field"#
    );
    assert!(!result.stderr.contains("Rows read"));
}

#[test]
fn nullify_keeps_latin1_bytes_and_bom() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, b"\xEF\xBB\xBFname,city\nJos\xe9,M\xfcnchen\nNULL,\n").unwrap();
    let output = dir.path().join("out.csv");

    let result = run(&["nullify", &arg(&input), "-o", &arg(&output), "--null-literal"]);

    assert_eq!(result.status, ExitStatus::Success);
    assert_eq!(
        fs::read(&output).unwrap(),
        b"\xEF\xBB\xBFname,city\nJos\xe9,M\xfcnchen\n,\n".to_vec()
    );
}

#[test]
fn nullify_cancelled_run_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "in.csv", "a\n1\n2\n");
    let output = dir.path().join("out.csv");
    let cancel = CancelHandle::new();
    cancel.cancel();
    let options = RunOptions {
        cancel: Some(cancel),
        ..RunOptions::default()
    };

    let result = run_with(&["nullify", &arg(&input), "-o", &arg(&output)], &options);

    assert_eq!(result.status, ExitStatus::Failure);
    assert!(result.stderr.starts_with("error: "));
    assert_eq!(fs::read_to_string(&output).unwrap(), "a\n");
}

#[test]
fn nullify_without_output_is_a_usage_error() {
    let error = usage_error(&["nullify", "in.csv"]);
    assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn nullify_unknown_summary_format_is_a_usage_error() {
    let error = usage_error(&["nullify", "in.csv", "-o", "out.csv", "--summary", "xml"]);
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let error = usage_error(&["describe", "in.csv"]);
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let error = usage_error(&[]);
    assert_eq!(error.exit_code(), 2);
}
