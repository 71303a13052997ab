//! # generate_sql
//!
//! Expands the input arguments into record files and writes one upsert
//! script for them.
//!
//! Exit codes: 0 when the script was written or there was nothing to do,
//! 1 when an input pattern, a record, or the output file failed. Every
//! outcome is reported on the result writer. Nothing is written when a
//! record fails.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use eazy_core::collect_inputs;
use eazy_sql::{output_path, write_script};

/// Arguments for `generate_sql`.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Record files, directories (searched recursively) or glob patterns.
    #[arg(value_name = "PATH")]
    pub inputs: Vec<String>,

    /// Script to write [default: eazyskills_update.sql].
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute `generate_sql`, writing the result lines to `out`.
pub fn run_generate(args: &GenerateArgs, out: &mut impl Write) -> Result<u8> {
    let files = match collect_inputs(&args.inputs) {
        Ok(files) => files,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(1);
        }
    };
    tracing::info!(inputs = args.inputs.len(), files = files.len(), "collected record files");

    if files.is_empty() {
        writeln!(out, "No files to process.")?;
        return Ok(0);
    }

    let script = match eazy_sql::generate(&files) {
        Ok(script) => script,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(1);
        }
    };

    let output = output_path(args.output.as_deref());
    if let Err(e) = write_script(&output, &script) {
        writeln!(out, "{e}")?;
        return Ok(1);
    }
    writeln!(out, "SQL script generated: {}", output.display())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_inputs_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.sql");
        let args = GenerateArgs {
            inputs: vec![],
            output: Some(output.clone()),
        };
        let mut out = Vec::new();
        assert_eq!(run_generate(&args, &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "No files to process.\n");
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_glob_reported_on_writer() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/courses/[z-a.yaml", dir.path().display());
        let args = GenerateArgs {
            inputs: vec![pattern.clone()],
            output: Some(dir.path().join("out.sql")),
        };
        let mut out = Vec::new();
        assert_eq!(run_generate(&args, &mut out).unwrap(), 1);
        let text = String::from_utf8(out).unwrap();
        assert!(
            text.starts_with(&format!("invalid glob pattern {pattern:?}")),
            "{text}"
        );
    }

    #[test]
    fn test_unmatched_glob_is_nothing_to_do() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("courses").join("*.yaml");
        let args = GenerateArgs {
            inputs: vec![pattern.display().to_string()],
            output: Some(dir.path().join("out.sql")),
        };
        let mut out = Vec::new();
        assert_eq!(run_generate(&args, &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "No files to process.\n");
    }
}
