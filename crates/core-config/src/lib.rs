//! Run-control file (`.mirtrc`) discovery and parsing.
//!
//! The file is line oriented. Every line of the form `set <subcmd>` yields
//! `<subcmd>`, which the binary feeds to the same handler as `:set`. Blank
//! lines, `"` comments and anything else are skipped. A missing file is not
//! an error; the editor simply starts with default options.

use anyhow::{Context, Result};
use std::{fs, io, path::PathBuf};
use tracing::{debug, info};

pub const RC_FILE_NAME: &str = ".mirtrc";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcFile {
    /// File the commands came from; `None` when nothing was found.
    pub path: Option<PathBuf>,
    /// `set` arguments in file order.
    pub set_commands: Vec<String>,
}

/// `.mirtrc` in the working directory, else in the home directory.
pub fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(RC_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::home_dir()
        .map(|home| home.join(RC_FILE_NAME))
        .filter(|p| p.is_file())
}

/// Extract the `set` arguments from rc file text.
pub fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            match line.strip_prefix("set ") {
                Some(sub) => Some(sub.trim_start().to_string()),
                None => {
                    if !line.is_empty() && !line.starts_with('"') {
                        debug!(target: "config", line, "rc_line_ignored");
                    }
                    None
                }
            }
        })
        .collect()
}

/// Load `path`, or the discovered rc file when `None`. A file that does not
/// exist yields an empty [`RcFile`]; other read failures are errors.
pub fn load_from(path: Option<PathBuf>) -> Result<RcFile> {
    let Some(path) = path.or_else(discover) else {
        debug!(target: "config", "rc_not_found");
        return Ok(RcFile::default());
    };
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(target: "config", path = %path.display(), "rc_missing");
            return Ok(RcFile::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading {}", path.display()));
        }
    };
    let set_commands = parse(&content);
    info!(
        target: "config",
        path = %path.display(),
        commands = set_commands.len(),
        "rc_loaded"
    );
    Ok(RcFile {
        path: Some(path),
        set_commands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    #[test]
    fn parse_keeps_only_set_lines() {
        let rc = "set number\n\" a comment\n\nset  tabstop=4\r\nnumber\n  set rnu  \nsetnu\n";
        assert_eq!(parse(rc), vec!["number", "tabstop=4", "rnu"]);
    }

    #[test]
    fn missing_file_is_empty() {
        let rc = load_from(Some(PathBuf::from("__nonexistent_hopefully__.mirtrc"))).unwrap();
        assert_eq!(rc, RcFile::default());
    }

    #[test]
    fn loads_explicit_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "set relativenumber\nset tabstop=2\n").unwrap();
        let rc = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(rc.path.as_deref(), Some(tmp.path()));
        assert_eq!(rc.set_commands, vec!["relativenumber", "tabstop=2"]);
    }

    #[test]
    fn directory_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from(Some(dir.path().to_path_buf())).is_err());
    }

    #[test]
    fn load_logging_uses_config_target() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "set nu\n").unwrap();
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        let rc = with_default(subscriber, || load_from(Some(tmp.path().to_path_buf())).unwrap());

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("rc_loaded"));
        assert!(log_output.contains("commands=1"));
        assert_eq!(rc.set_commands, vec!["nu"]);
    }
}
