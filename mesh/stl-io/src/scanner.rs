//! Line and word scanner over a byte stream.
//!
//! The scanner holds the parse cursor: the current line, the current word
//! inside it, the 1-based line counter, the end-of-stream flag and the
//! diagnostics collected so far. One scanner serves exactly one parse.

use std::io::{BufRead, Read};
use std::ops::Range;

use tracing::warn;

use crate::diagnostic::Diagnostic;
use crate::error::DiagnosticKind;

pub(crate) struct Scanner<R> {
    reader: R,
    max_line_len: usize,
    buf: Vec<u8>,
    line: usize,
    current_line: String,
    /// Byte offset in `current_line` where the next word search starts.
    pos: usize,
    word: Range<usize>,
    eof: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<R: BufRead> Scanner<R> {
    /// Create a scanner positioned on the first word of the stream.
    pub(crate) fn new(reader: R, max_line_len: usize) -> Self {
        let mut scanner = Self {
            reader,
            max_line_len,
            buf: Vec::new(),
            line: 0,
            current_line: String::new(),
            pos: 0,
            word: 0..0,
            eof: false,
            diagnostics: Vec::new(),
        };
        scanner.next_line();
        scanner
    }

    pub(crate) const fn is_eof(&self) -> bool {
        self.eof
    }

    pub(crate) const fn line(&self) -> usize {
        self.line
    }

    /// The full text of the current line.
    pub(crate) fn line_text(&self) -> &str {
        &self.current_line
    }

    /// The current word; empty at end of stream.
    pub(crate) fn word(&self) -> &str {
        &self.current_line[self.word.clone()]
    }

    /// Record a diagnostic on the current line.
    pub(crate) fn report(&mut self, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::new(self.line, kind));
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Advance to the next word, crossing line boundaries.
    ///
    /// Returns `false` once the stream is exhausted.
    pub(crate) fn next_word(&mut self) -> bool {
        if self.eof {
            return false;
        }
        if self.advance_in_line() {
            return true;
        }
        self.next_line()
    }

    /// Drop the rest of the current line and move to the first word of the
    /// next line that has one.
    pub(crate) fn next_line(&mut self) -> bool {
        loop {
            match self.read_line() {
                Ok(true) => {
                    self.line += 1;
                    if self.advance_in_line() {
                        return true;
                    }
                }
                Ok(false) => {
                    self.finish();
                    return false;
                }
                Err(kind) => {
                    warn!(line = self.line, error = %kind, "STL stream failed");
                    self.report(kind);
                    self.finish();
                    return false;
                }
            }
        }
    }

    /// Read one line into `current_line`, without its terminator.
    ///
    /// `Ok(false)` means a clean end of stream.
    fn read_line(&mut self) -> Result<bool, DiagnosticKind> {
        self.buf.clear();
        // Room for the longest allowed line plus "\r\n"
        let limit = u64::try_from(self.max_line_len)
            .unwrap_or(u64::MAX)
            .saturating_add(2);
        let read = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| DiagnosticKind::Stream {
                message: e.to_string(),
            })?;
        if read == 0 {
            return Ok(false);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if self.buf.len() > self.max_line_len {
            // Report on the offending line itself
            self.line += 1;
            return Err(DiagnosticKind::LineTooLong {
                limit: self.max_line_len,
            });
        }

        self.current_line.clear();
        self.current_line
            .push_str(&String::from_utf8_lossy(&self.buf));
        self.pos = 0;
        self.word = 0..0;
        Ok(true)
    }

    /// Move to the next whitespace-delimited word on the current line.
    fn advance_in_line(&mut self) -> bool {
        let rest = &self.current_line[self.pos..];
        let Some(start) = rest.find(|c: char| !c.is_whitespace()) else {
            self.pos = self.current_line.len();
            return false;
        };
        let len = rest[start..]
            .find(char::is_whitespace)
            .unwrap_or(rest.len() - start);

        let begin = self.pos + start;
        self.word = begin..begin + len;
        self.pos = begin + len;
        true
    }

    fn finish(&mut self) {
        self.current_line.clear();
        self.pos = 0;
        self.word = 0..0;
        self.eof = true;
    }
}
