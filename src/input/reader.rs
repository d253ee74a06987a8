use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Where a one-shot expression comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl ExpressionSource {
    /// Picks the source from CLI arguments: an inline expression wins,
    /// then a file, then stdin.
    pub fn from_args(expression: Option<String>, file: Option<PathBuf>) -> Self {
        match (expression, file) {
            (Some(expr), _) => Self::Inline(expr),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(expr) => {
                check_size(expr.len(), "expression")?;
                Ok(expr.clone())
            }
            Self::File(path) => read_file(path),
            Self::Stdin => read_limited(io::stdin().lock()).context("Failed to read from stdin"),
        }
    }
}

fn check_size(size: usize, what: &str) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        bail!(
            "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
             Consider splitting the {what} into smaller parts.",
            size as f64 / 1024.0 / 1024.0
        );
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to access file: {}", path.display()))?;
    check_size(metadata.len() as usize, "file")?;

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn read_limited<R: Read>(mut reader: R) -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);
        check_size(buffer.len(), "input")?;
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}
