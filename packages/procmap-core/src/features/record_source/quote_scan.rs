//! Strict quote checking and physical line accounting
//!
//! The `csv` reader accepts stray quotes and lets an unclosed quote run
//! to end of input. [`QuoteScanner`] sits under it as a pass-through
//! `Read`, tracks the same record boundaries, and remembers the first
//! quoting violation. Lines are counted from the raw bytes: `\r\n`, a
//! lone `\r` and `\n` each end one physical line.

use std::collections::VecDeque;
use std::io::{self, Read};

use crate::errors::TokenizeError;

/// First quoting problem seen in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuoteViolation {
    /// Ordinal of the record it belongs to (0 = header)
    pub record: u64,
    /// Physical line, 1-based
    pub line: u64,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViolationKind {
    BareQuote,
    ExtraneousQuote,
    UnterminatedQuote,
}

impl From<ViolationKind> for TokenizeError {
    fn from(kind: ViolationKind) -> Self {
        match kind {
            ViolationKind::BareQuote => TokenizeError::BareQuote,
            ViolationKind::ExtraneousQuote => TokenizeError::ExtraneousQuote,
            ViolationKind::UnterminatedQuote => TokenizeError::UnterminatedQuote,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between records; line breaks here are blank lines
    LineStart,
    FieldStart,
    Unquoted,
    Quoted { open_line: u64 },
    /// Saw `"` inside a quoted field: either an escape or the close
    QuoteInQuoted { open_line: u64 },
}

pub(crate) struct QuoteScanner<R> {
    inner: R,
    delimiter: u8,
    state: State,
    line: u64,
    prev_cr: bool,
    records_started: u64,
    /// Start lines of records the csv reader has not handed out yet
    record_lines: VecDeque<u64>,
    violation: Option<QuoteViolation>,
}

impl<R: Read> QuoteScanner<R> {
    pub fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            state: State::LineStart,
            line: 1,
            prev_cr: false,
            records_started: 0,
            record_lines: VecDeque::new(),
            violation: None,
        }
    }

    /// Start line of the oldest record not yet taken
    pub fn take_record_line(&mut self) -> Option<u64> {
        self.record_lines.pop_front()
    }

    pub fn violation(&self) -> Option<QuoteViolation> {
        self.violation
    }

    fn flag(&mut self, kind: ViolationKind, line: u64) {
        if self.violation.is_none() {
            self.violation = Some(QuoteViolation {
                record: self.records_started.saturating_sub(1),
                line,
                kind,
            });
        }
    }

    fn start_record(&mut self) {
        self.records_started += 1;
        self.record_lines.push_back(self.line);
    }

    fn scan(&mut self, bytes: &[u8]) {
        for &b in bytes {
            let line = self.line;
            let is_break = b == b'\n' || b == b'\r';

            self.state = match self.state {
                State::LineStart if is_break => State::LineStart,
                State::LineStart => {
                    self.start_record();
                    self.field_start(b, line)
                }
                State::FieldStart => self.field_start(b, line),
                State::Unquoted => {
                    if b == b'"' {
                        self.flag(ViolationKind::BareQuote, line);
                    }
                    self.after_unquoted(b)
                }
                State::Quoted { open_line } => {
                    if b == b'"' {
                        State::QuoteInQuoted { open_line }
                    } else {
                        State::Quoted { open_line }
                    }
                }
                State::QuoteInQuoted { open_line } => {
                    if b == b'"' {
                        State::Quoted { open_line }
                    } else if b == self.delimiter {
                        State::FieldStart
                    } else if is_break {
                        State::LineStart
                    } else {
                        self.flag(ViolationKind::ExtraneousQuote, line);
                        State::Unquoted
                    }
                }
            };

            // \r\n is one line break
            match b {
                b'\r' => {
                    self.line += 1;
                    self.prev_cr = true;
                }
                b'\n' => {
                    if !self.prev_cr {
                        self.line += 1;
                    }
                    self.prev_cr = false;
                }
                _ => self.prev_cr = false,
            }
        }
    }

    fn field_start(&mut self, b: u8, line: u64) -> State {
        if b == b'"' {
            State::Quoted { open_line: line }
        } else {
            self.after_unquoted(b)
        }
    }

    fn after_unquoted(&self, b: u8) -> State {
        if b == self.delimiter {
            State::FieldStart
        } else if b == b'\n' || b == b'\r' {
            State::LineStart
        } else {
            State::Unquoted
        }
    }

    fn finish(&mut self) {
        if let State::Quoted { open_line } = self.state {
            self.flag(ViolationKind::UnterminatedQuote, open_line);
        }
    }
}

impl<R: Read> Read for QuoteScanner<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 && !buf.is_empty() {
            self.finish();
        } else {
            self.scan(&buf[..n]);
        }
        Ok(n)
    }
}
