use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use df_model::TransformStats;

use crate::cli::SummaryFormatArg;

/// Machine-readable summary of a successful `nullify` run.
#[derive(Debug, Serialize)]
pub struct NullifySummary<'a> {
    #[serde(flatten)]
    pub stats: TransformStats,
    pub output: &'a Path,
}

/// Reports `stats` in the requested format.
///
/// Text goes to `err` so stdout stays clean for pipelines; JSON goes to `out`.
pub fn print_nullify_summary(
    format: SummaryFormatArg,
    stats: TransformStats,
    output: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match format {
        SummaryFormatArg::Text => {
            writeln!(err, "Rows read: {}", stats.rows_read)?;
            writeln!(err, "Cells checked: {}", stats.cells_checked)?;
            writeln!(err, "Cells nullified (changed): {}", stats.cells_nullified)?;
            writeln!(err, "Wrote: {}", output.display())?;
        }
        SummaryFormatArg::Json => {
            let summary = NullifySummary { stats, output };
            serde_json::to_writer(&mut *out, &summary).context("encode summary")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: TransformStats = TransformStats {
        rows_read: 2,
        cells_checked: 4,
        cells_nullified: 1,
    };

    #[test]
    fn text_summary_goes_to_err() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        print_nullify_summary(
            SummaryFormatArg::Text,
            STATS,
            Path::new("clean.csv"),
            &mut out,
            &mut err,
        )
        .unwrap();

        assert!(out.is_empty());
        insta::assert_snapshot!(String::from_utf8(err).unwrap(), @r"
        Rows read: 2
        Cells checked: 4
        Cells nullified (changed): 1
        Wrote: clean.csv
        ");
    }

    #[test]
    fn json_summary_goes_to_out() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        print_nullify_summary(
            SummaryFormatArg::Json,
            STATS,
            Path::new("clean.csv"),
            &mut out,
            &mut err,
        )
        .unwrap();

        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "rows_read": 2,
                "cells_checked": 4,
                "cells_nullified": 1,
                "output": "clean.csv",
            })
        );
    }
}
