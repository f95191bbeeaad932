//! Line-numbered diagnostics and the outcome of one parse.

use std::fmt;

use crate::error::DiagnosticKind;

/// Banner emitted before the diagnostics when triangles were dropped.
pub const SKIPPED_BANNER: &str = "Triangles had to be skipped.";

/// A problem found on a given line.
///
/// Displays as `"<line>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number the scanner was on.
    pub line: usize,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a diagnostic.
    #[must_use]
    pub const fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.kind)
    }
}

/// Outcome of one ASCII parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// True when the header was valid, no triangle was skipped and the
    /// input ended with `endsolid`.
    pub success: bool,
    /// The header was missing or malformed.
    pub header_error: bool,
    /// At least one triangle was dropped during recovery.
    pub triangles_skipped: bool,
    /// Number of triangles handed to the writer.
    pub triangle_count: usize,
    /// Every diagnostic, in the order it was found.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Render the report as text: the skipped-triangles banner (if any),
    /// then one diagnostic per line. Empty for a clean parse.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_io::{Diagnostic, DiagnosticKind, ParseReport};
    ///
    /// let report = ParseReport {
    ///     triangles_skipped: true,
    ///     diagnostics: vec![Diagnostic::new(3, DiagnosticKind::UnexpectedEof)],
    ///     ..ParseReport::default()
    /// };
    /// assert_eq!(
    ///     report.error_text(),
    ///     "Triangles had to be skipped.\n3: unexpected end of file\n"
    /// );
    /// ```
    #[must_use]
    pub fn error_text(&self) -> String {
        self.to_string()
    }

    /// True if nothing at all was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.success && self.diagnostics.is_empty()
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.triangles_skipped {
            writeln!(f, "{SKIPPED_BANNER}")?;
        }
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenSet};

    #[test]
    fn diagnostic_format() {
        let d = Diagnostic::new(
            12,
            DiagnosticKind::Expected {
                expected: TokenSet::single(Token::Endloop),
            },
        );
        assert_eq!(d.to_string(), "12: \"endloop\" expected");
    }

    #[test]
    fn clean_report_has_no_text() {
        let report = ParseReport {
            success: true,
            triangle_count: 3,
            ..ParseReport::default()
        };
        assert!(report.is_clean());
        assert_eq!(report.error_text(), "");
    }

    #[test]
    fn banner_only_when_skipped() {
        let mut report = ParseReport {
            diagnostics: vec![Diagnostic::new(1, DiagnosticKind::HeaderPrefix)],
            header_error: true,
            ..ParseReport::default()
        };
        assert_eq!(
            report.error_text(),
            "1: ASCII header must start with \"solid \"\n"
        );

        report.triangles_skipped = true;
        assert!(report.error_text().starts_with(SKIPPED_BANNER));
    }
}
