use std::fs;
use std::path::Path;

use crate::core::error::{Result, SweepError};

pub trait WriteToFile {
    fn write_to_file(&self, path: &Path, data: &str) -> Result<()>;
}

/// Creates or truncates the target file
#[derive(Debug, Default)]
pub struct Writer;

impl WriteToFile for Writer {
    fn write_to_file(&self, path: &Path, data: &str) -> Result<()> {
        fs::write(path, data)
            .map_err(|e| SweepError::Output(format!("{}: {e}", path.display())))
    }
}
