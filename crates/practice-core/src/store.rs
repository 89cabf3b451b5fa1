use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::PracticeError;
use crate::session::Session;
use crate::stats::{self, PracticeTotal};

/// A line of the session log that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the file.
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

/// Append-only log of practice sessions backed by a plain text file.
///
/// The file holds one `YYYY-MM-DD,<minutes>` line per session, in the order
/// the sessions were appended. Every append rewrites the whole file.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    sessions: Vec<Session>,
    skipped: Vec<SkippedLine>,
}

impl SessionStore {
    /// Open the store at `path`, loading any sessions already on disk.
    ///
    /// A missing file yields an empty store. Lines that cannot be decoded are
    /// skipped with a warning and collected in [`SessionStore::skipped`];
    /// only failing to read the file at all is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PracticeError> {
        let path = path.into();
        let mut store = Self {
            path,
            sessions: Vec::new(),
            skipped: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<(), PracticeError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no session log yet");
                return Ok(());
            }
            Err(e) => return Err(PracticeError::io(&self.path, e)),
        };

        for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let line_number = idx + 1;
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

            let result = std::str::from_utf8(raw)
                .map_err(|e| (String::from_utf8_lossy(raw).into_owned(), e.to_string()))
                .and_then(|line| {
                    if line.trim().is_empty() {
                        return Ok(None);
                    }
                    Session::parse_line(line)
                        .map(Some)
                        .map_err(|e| (line.to_string(), e.to_string()))
                });

            match result {
                Ok(Some(session)) => self.sessions.push(session),
                Ok(None) => {}
                Err((content, reason)) => {
                    warn!("Skipping line {line_number} of {}: {reason}", self.path.display());
                    self.skipped.push(SkippedLine {
                        line_number,
                        content,
                        reason,
                    });
                }
            }
        }

        debug!(
            path = %self.path.display(),
            loaded = self.sessions.len(),
            skipped = self.skipped.len(),
            "loaded session log"
        );
        Ok(())
    }

    /// Record a session and persist the full log.
    ///
    /// If writing fails the session is not kept in memory either.
    pub fn append(&mut self, session: Session) -> Result<(), PracticeError> {
        self.sessions.push(session);
        if let Err(e) = self.save() {
            self.sessions.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Rewrite the session log from memory via a temp file and rename.
    fn save(&self) -> Result<(), PracticeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PracticeError::io(parent, e))?;
        }

        let tmp_path = self.tmp_path();
        let write = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            for session in &self.sessions {
                writeln!(writer, "{}", session.to_line())?;
            }
            writer.flush()?;
            writer.get_ref().sync_all()?;
            Ok(())
        };
        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp_path);
            return Err(PracticeError::io(&tmp_path, e));
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            PracticeError::io(&self.path, e)
        })?;

        debug!(path = %self.path.display(), sessions = self.sessions.len(), "saved session log");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Copy of all sessions in the order they were appended.
    pub fn sessions(&self) -> Vec<Session> {
        self.sessions.clone()
    }

    /// Lines dropped while loading.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn total_minutes(&self) -> u64 {
        stats::total_minutes(&self.sessions)
    }

    pub fn summary(&self) -> PracticeTotal {
        PracticeTotal::from_minutes(self.total_minutes())
    }
}
