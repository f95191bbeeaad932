//! ASCII STL grammar parser with local error recovery.
//!
//! # Grammar
//!
//! ```text
//! file     := header triangle* "endsolid"
//! header   := "solid" STRING
//! triangle := "facet" "normal" point
//!             "outer" "loop"
//!             "vertex" point "vertex" point "vertex" point
//!             "endloop" "endfacet"
//! point    := FLOAT FLOAT FLOAT
//! ```
//!
//! # Recovery
//!
//! A triangle is accepted whole or not at all. On the first failing step
//! the parser records one diagnostic, drops the triangle and discards words
//! until the next `facet` or `endsolid`. Parsing never stops on a malformed
//! triangle, so a single run reports every problem it can see.

use std::io::BufRead;

use stl_types::{Point3, SolidWriter, Triangle, Vector3};
use tracing::{debug, info, warn};

use crate::diagnostic::ParseReport;
use crate::error::DiagnosticKind;
use crate::scanner::Scanner;
use crate::token::{Token, TokenSet};

/// Literal prefix of a valid header line.
const HEADER_PREFIX: &str = "solid ";

/// Default for [`ParseOptions::max_line_len`].
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// Options for ASCII parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Longest accepted line in bytes, terminator excluded. A longer line is
    /// treated as a stream failure and ends the parse.
    pub max_line_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

/// Parse ASCII STL from `reader`, pushing triangles into `writer`.
///
/// Triangles reach the writer in file order as soon as each one is
/// complete. Malformed triangles are skipped and reported; the returned
/// report tells whether the whole input was valid and lists every
/// diagnostic.
///
/// # Example
///
/// ```
/// use stl_io::parse_ascii;
/// use stl_types::Solid;
///
/// let text = "solid demo
/// facet normal 0 0 1
///   outer loop
///     vertex 0 0 0
///     vertex 1 0 0
///     vertex 0 1 0
///   endloop
/// endfacet
/// endsolid demo
/// ";
///
/// let mut solid = Solid::new();
/// let report = parse_ascii(text.as_bytes(), &mut solid);
///
/// assert!(report.success);
/// assert_eq!(report.error_text(), "");
/// assert_eq!(solid.name, "demo");
/// assert_eq!(solid.triangles.len(), 1);
/// ```
pub fn parse_ascii<R, W>(reader: R, writer: &mut W) -> ParseReport
where
    R: BufRead,
    W: SolidWriter + ?Sized,
{
    parse_ascii_with_options(reader, writer, &ParseOptions::default())
}

/// Parse ASCII STL with explicit options.
///
/// See [`parse_ascii`].
pub fn parse_ascii_with_options<R, W>(
    reader: R,
    writer: &mut W,
    options: &ParseOptions,
) -> ParseReport
where
    R: BufRead,
    W: SolidWriter + ?Sized,
{
    Parser::new(reader, options).run(writer)
}

/// Parse one coordinate at single precision and widen it.
///
/// Values that overflow `f32` are rejected; explicit `inf`/`infinity` and
/// `nan` literals are accepted. Hexadecimal literals are not supported.
pub(crate) fn parse_coordinate(word: &str) -> Option<f64> {
    let value: f32 = word.parse().ok()?;
    if value.is_infinite() && !is_infinity_literal(word) {
        return None;
    }
    Some(f64::from(value))
}

fn is_infinity_literal(word: &str) -> bool {
    let unsigned = word.strip_prefix(['+', '-']).unwrap_or(word);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

struct Parser<R> {
    scanner: Scanner<R>,
    header_error: bool,
    triangles_skipped: bool,
    triangle_count: usize,
}

impl<R: BufRead> Parser<R> {
    fn new(reader: R, options: &ParseOptions) -> Self {
        Self {
            scanner: Scanner::new(reader, options.max_line_len),
            header_error: false,
            triangles_skipped: false,
            triangle_count: 0,
        }
    }

    fn run<W: SolidWriter + ?Sized>(mut self, writer: &mut W) -> ParseReport {
        debug!("Parsing ASCII STL");

        if self.scanner.is_eof() {
            self.header_error = true;
            self.scanner.report(DiagnosticKind::EmptyInput);
        } else {
            self.header_error = !self.parse_header(writer);
            self.parse_triangles(writer);
        }

        let success =
            !self.header_error && !self.triangles_skipped && self.consume(Token::Endsolid).is_some();

        if self.triangles_skipped {
            warn!("Triangles had to be skipped while parsing ASCII STL");
        }

        let report = ParseReport {
            success,
            header_error: self.header_error,
            triangles_skipped: self.triangles_skipped,
            triangle_count: self.triangle_count,
            diagnostics: self.scanner.into_diagnostics(),
        };

        info!(
            triangles = report.triangle_count,
            diagnostics = report.diagnostics.len(),
            success = report.success,
            "ASCII STL parse finished"
        );

        report
    }

    /// Check the header line and hand the name to the writer.
    ///
    /// The scanner moves to the next line either way.
    fn parse_header<W: SolidWriter + ?Sized>(&mut self, writer: &mut W) -> bool {
        let name = self
            .scanner
            .line_text()
            .strip_prefix(HEADER_PREFIX)
            .map(|rest| rest.trim_end_matches('\r').to_string());

        let valid = match name {
            Some(name) => {
                writer.set_name(name);
                true
            }
            None => {
                self.scanner.report(DiagnosticKind::HeaderPrefix);
                false
            }
        };

        self.scanner.next_line();
        valid
    }

    fn parse_triangles<W: SolidWriter + ?Sized>(&mut self, writer: &mut W) {
        while !self.scanner.is_eof() && !self.at(Token::Endsolid) {
            if !self.at(Token::Facet) {
                self.scanner.report(DiagnosticKind::Expected {
                    expected: TokenSet::RESYNC,
                });
                match self.synchronize() {
                    Some(Token::Facet) => {}
                    _ => return,
                }
            }

            if let Some(triangle) = self.parse_facet() {
                writer.append_triangle(triangle);
                self.triangle_count += 1;
            } else {
                self.triangles_skipped = true;
                self.synchronize();
            }
        }
    }

    fn parse_facet(&mut self) -> Option<Triangle> {
        self.consume(Token::Facet)?;
        self.consume(Token::Normal)?;
        let normal = Vector3::from(self.parse_point()?);
        self.consume(Token::Outer)?;
        self.consume(Token::Loop)?;

        let mut vertices = [Point3::origin(); 3];
        for vertex in &mut vertices {
            self.consume(Token::Vertex)?;
            *vertex = Point3::from(self.parse_point()?);
        }

        self.consume(Token::Endloop)?;
        self.consume(Token::Endfacet)?;
        Some(Triangle::new(normal, vertices))
    }

    fn parse_point(&mut self) -> Option<[f64; 3]> {
        Some([self.parse_float()?, self.parse_float()?, self.parse_float()?])
    }

    fn parse_float(&mut self) -> Option<f64> {
        if self.scanner.is_eof() {
            self.scanner.report(DiagnosticKind::UnexpectedEof);
            return None;
        }

        let Some(value) = parse_coordinate(self.scanner.word()) else {
            let literal = self.scanner.word().to_string();
            self.scanner
                .report(DiagnosticKind::UnparsableFloat { literal });
            return None;
        };

        self.scanner.next_word();
        Some(value)
    }

    /// Consume `token` or record that it was expected.
    fn consume(&mut self, token: Token) -> Option<()> {
        if !self.at(token) {
            self.scanner.report(DiagnosticKind::Expected {
                expected: token.into(),
            });
            return None;
        }
        self.scanner.next_word();
        Some(())
    }

    fn at(&self, token: Token) -> bool {
        token.matches(self.scanner.word())
    }

    /// Discard words until one in [`TokenSet::RESYNC`] is current.
    ///
    /// Returns the keyword landed on, or `None` at end of stream.
    fn synchronize(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = TokenSet::RESYNC.match_word(self.scanner.word()) {
                debug!(line = self.scanner.line(), %token, "Resynchronized");
                return Some(token);
            }
            if !self.scanner.next_word() {
                debug!(line = self.scanner.line(), "End of stream while resynchronizing");
                return None;
            }
        }
    }
}
