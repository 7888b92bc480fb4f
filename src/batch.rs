use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ast::Node;
use crate::diag::Reporter;
use crate::opt;

/// A stage failure for one file. The remaining stages of that file are
/// skipped; other files in the batch are unaffected.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("read failed for {}: {}", .0.display(), .1)]
    Read(PathBuf, io::Error),

    #[error("parse failed for {}: {}", .0.display(), .1)]
    Parse(PathBuf, serde_json::Error),

    #[error("generate failed for {}: {}", .0.display(), .1)]
    Generate(PathBuf, serde_json::Error),

    #[error("write failed for {}: {}", .0.display(), .1)]
    Write(PathBuf, io::Error),
}

#[derive(Debug)]
pub struct BatchOptions {
    /// Write optimized trees back to their files.
    pub write: bool,
    /// Print each optimized tree as JSON to stdout.
    pub dump: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            write: true,
            dump: false,
        }
    }
}

/// One file through the staged pipeline: read the ESTree JSON the external
/// parser produced, decode it, optimize in place, re-encode for the external
/// generator, and write back. Returns the generated JSON.
pub fn process_file(
    path: &Path,
    opts: &BatchOptions,
    diags: &mut Reporter,
) -> Result<String, FileError> {
    let text = fs::read_to_string(path).map_err(|e| FileError::Read(path.to_path_buf(), e))?;

    let mut program: Node =
        serde_json::from_str(&text).map_err(|e| FileError::Parse(path.to_path_buf(), e))?;

    opt::optimize(&mut program, diags);

    let output = serde_json::to_string_pretty(&program)
        .map_err(|e| FileError::Generate(path.to_path_buf(), e))?;

    if opts.write {
        fs::write(path, &output).map_err(|e| FileError::Write(path.to_path_buf(), e))?;
    }

    Ok(output)
}

/// Processes each file as an independent unit of work. A failed stage is
/// logged and that file is skipped; the batch continues. One reporter spans
/// the whole run, so the fix state accumulates across files.
pub fn run(paths: &[PathBuf], opts: &BatchOptions, diags: &mut Reporter) -> Vec<FileError> {
    let mut failures = Vec::new();
    for path in paths {
        match process_file(path, opts, diags) {
            Ok(output) => {
                if opts.dump {
                    println!("{output}");
                }
            }
            Err(error) => {
                eprintln!("[ERROR] {error}");
                failures.push(error);
            }
        }
        for diag in diags.take_diagnostics() {
            println!("{diag}");
        }
    }
    failures
}

#[cfg(test)]
#[path = "tests/t_batch.rs"]
mod tests;
