//! File I/O: loading a file into a buffer and the save protocol.
//!
//! Saving opens the target read-write (creating it with mode 0644), truncates
//! it to the exact serialized length and writes every row followed by `\n`.
//! No temporary file or rename is involved; a failure part way leaves the
//! file in whatever state the OS produced.

use anyhow::Result;
use core_state::EditorState;
use core_terminal::TerminalBackend;
use core_text::Buffer;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::prompt::prompt;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Read `path` into a buffer using `tab_stop` for renders.
pub fn open_file(path: &Path, tab_stop: usize) -> Result<Buffer, OpenError> {
    match std::fs::read(path) {
        Ok(content) => {
            let buffer = Buffer::from_bytes(&content, tab_stop);
            tracing::info!(
                target: "io",
                path = %path.display(),
                bytes = content.len(),
                lines = buffer.line_count(),
                "file_opened"
            );
            Ok(buffer)
        }
        Err(source) => {
            tracing::error!(target: "io", path = %path.display(), ?source, "file_open_error");
            Err(OpenError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Write `data` to `path` in place. Returns the number of bytes written.
pub fn write_file(path: &Path, data: &[u8]) -> Result<usize, SaveError> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.set_len(data.len() as u64)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(data.len())
}

/// Save the buffer, asking for a name first when it has none. Returns whether
/// the file was written; every outcome is reported in the message bar.
pub fn save(state: &mut EditorState, term: &mut dyn TerminalBackend) -> Result<bool> {
    let path = match state.file_name.clone() {
        Some(p) => p,
        None => {
            let name = prompt(state, term, "Save as: {} (ESC to cancel)")?;
            if name.is_empty() {
                state.set_status("Save aborted");
                return Ok(false);
            }
            let p = PathBuf::from(name);
            state.file_name = Some(p.clone());
            p
        }
    };

    let data = state.buffer().to_bytes();
    match write_file(&path, &data) {
        Ok(n) => {
            state.dirty = false;
            state.set_status(format!("{n} bytes written to disk"));
            tracing::info!(target: "io", path = %path.display(), bytes = n, "file_saved");
            Ok(true)
        }
        Err(e) => {
            state.set_status(format!("Can't save! I/O error: {e}"));
            tracing::error!(target: "io", path = %path.display(), error = %e, "file_write_error");
            Ok(false)
        }
    }
}
