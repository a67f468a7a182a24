use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::AttendanceError;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEvent {
    pub user: String,
    pub day: String,
}

/// Split a line into exactly two whitespace-separated tokens: user and day.
/// The day token is not checked here.
pub fn parse_line(line: &str) -> Result<AttendanceEvent, AttendanceError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(user), Some(day), None) => Ok(AttendanceEvent {
            user: user.to_string(),
            day: day.to_string(),
        }),
        _ => Err(AttendanceError::MalformedLine {
            line: line.trim().to_string(),
        }),
    }
}

/// A line-oriented attendance log.
pub struct LogSource<R> {
    path: PathBuf,
    reader: R,
}

impl LogSource<BufReader<File>> {
    /// Open a log file. Failure here is fatal for the run.
    pub fn open(path: &Path) -> Result<Self, AttendanceError> {
        let file = File::open(path).map_err(|source| AttendanceError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }
}

impl<R: BufRead> LogSource<R> {
    /// Wrap an already-open reader; `path` is only used in error messages.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines of the log, without the trailing newline.
    ///
    /// The outer `Result` is the read itself; a failure there ends the stream
    /// with `SourceUnavailable`. The inner one rejects a line that is not
    /// UTF-8 as `MalformedLine`, so only that line is lost.
    pub fn lines(
        self,
    ) -> impl Iterator<Item = Result<Result<String, AttendanceError>, AttendanceError>> {
        let LogSource { path, mut reader } = self;
        let mut buf = Vec::new();
        let mut failed = false;
        std::iter::from_fn(move || {
            if failed {
                return None;
            }
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => None,
                Ok(_) => {
                    if buf.last() == Some(&b'\n') {
                        buf.pop();
                    }
                    Some(Ok(decode_line(&buf)))
                }
                Err(source) => {
                    failed = true;
                    Some(Err(AttendanceError::SourceUnavailable {
                        path: path.clone(),
                        source,
                    }))
                }
            }
        })
    }
}

fn decode_line(bytes: &[u8]) -> Result<String, AttendanceError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| AttendanceError::MalformedLine {
        line: String::from_utf8_lossy(bytes).trim().to_string(),
    })
}
