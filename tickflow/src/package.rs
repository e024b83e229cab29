use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::*;

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("file system error: {error:?}")]
    Fs { error: io::Error },

    #[error("duplicated trace name: {name}")]
    DuplicatedTrace { name: String },
}

impl From<io::Error> for PackageError {
    fn from(error: io::Error) -> Self { Self::Fs { error } }
}

/// Package.
#[derive(Debug, Default)]
pub struct Package {
    /// Traces.
    pub traces: Vec<Trace>,
}

impl Package {
    /// Adds the given trace to package.
    pub fn add(&mut self, trace: Trace) { self.traces.push(trace); }

    /// Writes every trace into `<path>/<trace name>.vcd`, creating the directory if needed.
    pub fn gen_vcd(&self, path: &Path) -> Result<(), PackageError> {
        fs::create_dir_all(path)?;

        for (i, trace) in self.traces.iter().enumerate() {
            if self.traces[..i].iter().any(|other| other.name() == trace.name()) {
                return Err(PackageError::DuplicatedTrace { name: trace.name().to_string() });
            }
        }

        for trace in &self.traces {
            let file_path = path.join(format!("{}.vcd", trace.name()));
            let mut writer = BufWriter::new(File::create(&file_path)?);
            trace.write_vcd(&mut writer)?;
            writer.flush()?;
            info!(path = %file_path.display(), ticks = trace.len(), "wrote trace");
        }

        Ok(())
    }
}
