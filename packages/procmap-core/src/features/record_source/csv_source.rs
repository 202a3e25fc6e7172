//! CSV-backed record source
//!
//! Quoting and escaping follow RFC 4180 via the `csv` crate, so a field
//! may contain the delimiter. Quotes are checked strictly: a bare `"` in
//! an unquoted field, text after a closing `"`, or a quote left open at
//! end of input all end the stream with `MalformedLine`. Field count is
//! NOT checked here; that is the parser's job.

use std::fmt;
use std::io::{self, Read};

use csv::{ReaderBuilder, StringRecord};

use super::quote_scan::QuoteScanner;
use super::RawRecord;
use crate::errors::{PipelineError, TokenizeError};

/// Lazy iterator of raw records
///
/// Yields at most one error, then stops: a line that cannot be
/// tokenized terminates the sequence.
pub struct CsvRecordSource<R: Read> {
    name: String,
    reader: csv::Reader<QuoteScanner<R>>,
    record: StringRecord,
    /// Data records handed out so far
    ordinal: u64,
    header_taken: bool,
    last_line: u64,
    done: bool,
}

impl<R: Read> CsvRecordSource<R> {
    /// Wrap a reader; the first line is consumed as a header on first read
    pub fn new(name: impl Into<String>, reader: R, delimiter: u8) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(QuoteScanner::new(reader, delimiter));
        Self {
            name: name.into(),
            reader,
            record: StringRecord::new(),
            ordinal: 0,
            header_taken: false,
            last_line: 1,
            done: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical line the record just read started on
    fn take_line(&mut self) -> u64 {
        self.reader
            .get_mut()
            .take_record_line()
            .unwrap_or(self.last_line + 1)
    }

    /// Quote violation inside any record up to `ordinal`
    fn quote_error(&self, ordinal: u64) -> Option<PipelineError> {
        let violation = self.reader.get_ref().violation()?;
        (violation.record <= ordinal).then(|| PipelineError::MalformedLine {
            line: violation.line,
            source: violation.kind.into(),
        })
    }

    fn classify(&mut self, err: csv::Error) -> PipelineError {
        if err.is_io_error() {
            let source = match err.into_kind() {
                csv::ErrorKind::Io(e) => e,
                other => io::Error::new(io::ErrorKind::Other, format!("{:?}", other)),
            };
            return PipelineError::source_unavailable(self.name.clone(), source);
        }

        let line = self.take_line();
        PipelineError::MalformedLine {
            line,
            source: TokenizeError::Csv(err),
        }
    }
}

impl<R: Read> Iterator for CsvRecordSource<R> {
    type Item = Result<RawRecord, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.reader.read_record(&mut self.record);
        if !self.header_taken {
            self.header_taken = true;
            self.reader.get_mut().take_record_line();
        }

        match result {
            Ok(true) => {
                self.ordinal += 1;
                let line = self.take_line();
                if let Some(err) = self.quote_error(self.ordinal) {
                    self.done = true;
                    return Some(Err(err));
                }
                self.last_line = line;
                Some(Ok(RawRecord::new(line, self.record.clone())))
            }
            Ok(false) => {
                self.done = true;
                self.quote_error(u64::MAX).map(Err)
            }
            Err(err) => {
                self.done = true;
                let err = self
                    .quote_error(self.ordinal + 1)
                    .unwrap_or_else(|| self.classify(err));
                Some(Err(err))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for CsvRecordSource<R> {}

impl<R: Read> fmt::Debug for CsvRecordSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvRecordSource")
            .field("name", &self.name)
            .field("last_line", &self.last_line)
            .field("done", &self.done)
            .finish()
    }
}
