//! Input: whole-buffer reads of the report text.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Please provide an input file path using the --file flag")]
    MissingFile,

    #[error("error reading file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading from stdin: {0}")]
    Stdin(#[source] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick the input for a `--file` value. Without one, standard input is
    /// used when `stdin_fallback` is set; otherwise it is a usage error.
    pub fn from_flag(file: Option<&Path>, stdin_fallback: bool) -> Result<Self, InputError> {
        match file {
            Some(path) if !path.as_os_str().is_empty() => Ok(InputSource::File(path.to_path_buf())),
            _ if stdin_fallback => Ok(InputSource::Stdin),
            _ => Err(InputError::MissingFile),
        }
    }

    /// Read the whole input into memory.
    pub fn read(&self) -> Result<Vec<u8>, InputError> {
        match self {
            InputSource::File(path) => {
                let data = std::fs::read(path).map_err(|source| InputError::File {
                    path: path.clone(),
                    source,
                })?;
                info!("Read {} bytes from {}", data.len(), path.display());
                Ok(data)
            }
            InputSource::Stdin => read_all(io::stdin().lock()).map_err(InputError::Stdin),
        }
    }
}

fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    info!("Read {} bytes from stdin", data.len());
    Ok(data)
}
