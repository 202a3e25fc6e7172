//! Record Source domain types

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use csv::StringRecord;

use super::CsvRecordSource;
use crate::errors::{PipelineError, Result};

/// One tokenized line (header excluded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source
    pub line: u64,
    fields: StringRecord,
}

impl RawRecord {
    pub fn new(line: u64, fields: StringRecord) -> Self {
        Self { line, fields }
    }

    /// Build from plain fields (tests, adapters)
    pub fn from_fields<I, T>(line: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field.as_ref());
        }
        Self::new(line, record)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter()
    }
}

/// Handle to a readable log resource
///
/// Opening is deferred until a build actually runs, so a missing file
/// surfaces as `SourceUnavailable` from the build, not from construction.
pub enum LogSource {
    /// File on disk
    Path(PathBuf),
    /// Any byte stream (upload body, stdin, in-memory buffer)
    Reader {
        name: String,
        reader: Box<dyn Read + Send>,
    },
}

impl LogSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        LogSource::Path(path.into())
    }

    pub fn reader(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        LogSource::Reader {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    /// In-memory log contents
    pub fn bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::reader(name, Cursor::new(bytes.into()))
    }

    /// Human-readable name for logs and errors
    pub fn name(&self) -> String {
        match self {
            LogSource::Path(path) => path.display().to_string(),
            LogSource::Reader { name, .. } => name.clone(),
        }
    }

    /// Open the resource and wrap it in a record source
    pub fn open(self, delimiter: u8) -> Result<CsvRecordSource<Box<dyn Read + Send>>> {
        let name = self.name();
        let reader: Box<dyn Read + Send> = match self {
            LogSource::Path(path) => {
                let file = File::open(&path)
                    .map_err(|e| PipelineError::source_unavailable(name.clone(), e))?;
                Box::new(file)
            }
            LogSource::Reader { reader, .. } => reader,
        };
        Ok(CsvRecordSource::new(name, reader, delimiter))
    }
}

impl fmt::Debug for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            LogSource::Reader { name, .. } => f.debug_struct("Reader").field("name", name).finish(),
        }
    }
}
