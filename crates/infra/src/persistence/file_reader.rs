// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, io::BufReader, path::Path};

use subcomb_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| InfrastructureError::InputOpen { path: path.to_path_buf(), source })
    }
}
