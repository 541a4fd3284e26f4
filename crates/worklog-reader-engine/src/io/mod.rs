use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a worklog (or any markdown document) as UTF-8 text
pub fn read_worklog(path: &Path) -> Result<String, IoError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(IoError::NotFound(path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            Err(IoError::InvalidUtf8(path.to_path_buf()))
        }
        Err(e) => Err(IoError::Io(e)),
    }
}

/// Write generated output, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    Ok(())
}
