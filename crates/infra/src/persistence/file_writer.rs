// crates/infra/src/persistence/file_writer.rs
use std::{fs::File, io::BufWriter, path::Path};

use subcomb_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` and wrap it in a buffered writer.
    pub fn create<P: AsRef<Path>>(path: P) -> InfraResult<BufWriter<File>> {
        let path = path.as_ref();
        File::create(path)
            .map(BufWriter::new)
            .map_err(|source| InfrastructureError::OutputCreate { path: path.to_path_buf(), source })
    }
}
