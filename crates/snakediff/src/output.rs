//! Printing text diffs

use crate::config::OutputFormat;
use anyhow::Result;
use snakediff_core::{ChangeKind, Granularity, TextDiff};
use std::io::Write;

pub fn write_diff(out: &mut impl Write, diff: &TextDiff, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, diff)?;
            writeln!(out)?;
        }
        OutputFormat::Text if diff.granularity == Granularity::Lines => write_lines(out, diff)?,
        OutputFormat::Text => write_inline(out, diff)?,
    }
    Ok(())
}

fn write_lines(out: &mut impl Write, diff: &TextDiff) -> Result<()> {
    for span in &diff.spans {
        let prefix = match span.kind {
            ChangeKind::Equal => ' ',
            ChangeKind::Delete => '-',
            ChangeKind::Insert => '+',
        };
        writeln!(out, "{}{}", prefix, span.text)?;
    }
    Ok(())
}

/// Word-diff style markers around changed text
fn write_inline(out: &mut impl Write, diff: &TextDiff) -> Result<()> {
    for span in &diff.spans {
        match span.kind {
            ChangeKind::Equal => write!(out, "{}", span.text)?,
            ChangeKind::Delete => write!(out, "[-{}-]", span.text)?,
            ChangeKind::Insert => write!(out, "{{+{}+}}", span.text)?,
        }
    }
    if !diff.spans.last().is_some_and(|s| s.text.ends_with('\n')) {
        writeln!(out)?;
    }
    Ok(())
}
