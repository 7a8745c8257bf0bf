//! File-backed save/load for any `FlatRecord` entity.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use recordkeep_core::{DomainError, Entity, Repository};

use super::codec::{self, FlatRecord};
use super::error::StorageError;

/// How a load reacts to a bad line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// The first bad line aborts the load; the repository is left untouched.
    #[default]
    Strict,
    /// Bad lines are logged, reported and skipped; the rest are loaded.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file at the configured path: nothing to load.
    Missing,
    Loaded(LoadReport),
}

/// Flat-file store bound to a single path.
///
/// File handles are opened inside `save`/`load` and dropped before they
/// return, on success and error alike.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
    policy: LoadPolicy,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Write every record, replacing the file. Returns the number written.
    ///
    /// All lines are encoded before the file is opened, so an unencodable
    /// record leaves any existing file as it was.
    pub fn save<T: FlatRecord>(&self, records: &[T]) -> Result<usize, StorageError> {
        let mut body = String::new();
        for record in records {
            body.push_str(&codec::encode(record)?);
            body.push('\n');
        }

        let file = File::create(&self.path).map_err(|e| self.unavailable(e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(body.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| self.unavailable(e))?;

        tracing::info!(path = %self.path.display(), count = records.len(), "records saved");
        Ok(records.len())
    }

    /// Save a repository snapshot in insertion order.
    pub fn save_repository<T, R>(&self, repo: &R) -> Result<usize, StorageError>
    where
        T: FlatRecord + Entity + Clone,
        R: Repository<T> + ?Sized,
    {
        self.save(&repo.all())
    }

    /// Load every record into `repo`.
    ///
    /// Blank lines are ignored. Under `Strict`, any malformed line (including
    /// one that is not UTF-8) or duplicate id fails the whole load before
    /// anything is inserted. Under `Lenient`, those lines are skipped and
    /// listed in the report.
    ///
    /// Malformed lines fail with `StorageError::Format`, whose `line` field is
    /// 1-based. A duplicate id fails with `StorageError::Domain(DuplicateKey)`
    /// instead; its message names the line, and the lenient report carries it
    /// in `SkippedLine::line`.
    pub fn load<T, R>(&self, repo: &mut R) -> Result<LoadOutcome, StorageError>
    where
        T: FlatRecord + Entity + Clone,
        R: Repository<T> + ?Sized,
    {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no data file; nothing to load");
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        let mut staged: Vec<T> = Vec::new();
        let mut seen: HashSet<T::Id> = HashSet::new();
        let mut skipped: Vec<SkippedLine> = Vec::new();

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| self.unavailable(e))?
                == 0
            {
                break;
            }
            line_no += 1;

            let text = std::str::from_utf8(&buf)
                .map(|t| t.trim_end_matches(['\n', '\r']))
                .map_err(|e| StorageError::format(line_no, format!("line is not valid UTF-8: {e}")));
            if matches!(text, Ok(t) if t.trim().is_empty()) {
                continue;
            }

            let checked = text.and_then(|line| codec::decode::<T>(line, line_no)).and_then(|record| {
                let id = record.id();
                if seen.contains(&id) || repo.contains(id) {
                    Err(StorageError::Domain(DomainError::duplicate(format!(
                        "{} {id} at line {line_no} is already loaded",
                        T::KIND
                    ))))
                } else {
                    Ok(record)
                }
            });

            match (checked, self.policy) {
                (Ok(record), _) => {
                    seen.insert(record.id());
                    staged.push(record);
                }
                (Err(e), LoadPolicy::Strict) => return Err(e),
                (Err(e), LoadPolicy::Lenient) => {
                    tracing::warn!(path = %self.path.display(), line = line_no, "skipping record: {e}");
                    skipped.push(SkippedLine {
                        line: line_no,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let loaded = staged.len();
        for record in staged {
            repo.add(record)?;
        }

        tracing::info!(
            path = %self.path.display(),
            loaded,
            skipped = skipped.len(),
            "records loaded"
        );
        Ok(LoadOutcome::Loaded(LoadReport { loaded, skipped }))
    }

    fn unavailable(&self, source: std::io::Error) -> StorageError {
        StorageError::unavailable(self.path.clone(), source)
    }
}
