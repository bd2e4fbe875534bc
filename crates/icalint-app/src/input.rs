//! Resolving and reading the documents to lint.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Maps command-line paths to inputs. No paths means standard input,
    /// and `-` stands for standard input wherever it appears.
    #[must_use]
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            return vec![Self::Stdin];
        }

        files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    /// ## Summary
    /// Reads the whole document as UTF-8 text.
    ///
    /// ## Errors
    /// Returns an error if the source cannot be read or is not valid UTF-8.
    pub fn read(&self) -> AppResult<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(AppError::StdinError)?;
                Ok(text)
            }
            Self::File(path) => read_file(path),
        }
    }
}

fn read_file(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
