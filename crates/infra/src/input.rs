// crates/infra/src/input.rs
use std::{
    io::{self, BufRead, Cursor, IsTerminal},
    path::{Path, PathBuf},
};

use subcomb_shared_kernel::{ApplicationError, ApplicationResult, Result};

use crate::persistence::FileReader;

/// Where seed lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// A single seed given on the command line.
    Argument(String),
    Stdin,
}

impl InputSource {
    /// Picks the input source: an input file wins over a positional seed,
    /// which wins over piped standard input. Interactive stdin is refused.
    pub fn resolve(file: Option<&Path>, seed: Option<&str>, stdin_is_terminal: bool) -> ApplicationResult<Self> {
        if let Some(path) = file {
            return Ok(Self::File(path.to_path_buf()));
        }
        if let Some(seed) = seed {
            return Ok(Self::Argument(seed.to_string()));
        }
        if stdin_is_terminal {
            return Err(ApplicationError::NoInput);
        }
        Ok(Self::Stdin)
    }

    /// [`resolve`](Self::resolve) against the real process stdin.
    pub fn detect(file: Option<&Path>, seed: Option<&str>) -> ApplicationResult<Self> {
        Self::resolve(file, seed, io::stdin().is_terminal())
    }

    /// Opens the source as a line reader.
    pub fn open(self) -> Result<Box<dyn BufRead>> {
        tracing::debug!(source = ?self, "opening input");
        let reader: Box<dyn BufRead> = match self {
            Self::File(path) => Box::new(FileReader::open_buffered(&path)?),
            Self::Argument(seed) => Box::new(Cursor::new(seed)),
            Self::Stdin => Box::new(io::stdin().lock()),
        };
        Ok(reader)
    }
}
