// crates/infra/src/output/writer.rs
use std::{
    io::{self, Write},
    path::Path,
};

use subcomb_shared_kernel::Result;

use crate::persistence::FileWriter;

/// The primary output sink: a file when a path is given, stdout otherwise.
pub struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    pub fn create(path: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = path {
            Box::new(FileWriter::create(path)?)
        } else {
            Box::new(io::BufWriter::new(io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
