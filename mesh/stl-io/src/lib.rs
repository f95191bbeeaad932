//! ASCII STL reading for the STL crates.
//!
//! This crate turns untrusted ASCII STL text into triangles:
//!
//! - A **scanner** splits the byte stream into lines and words and keeps the
//!   line counter used in diagnostics
//! - A **token classifier** ([`Token`], [`TokenSet`]) matches words against
//!   the keyword vocabulary exactly
//! - A **grammar parser** ([`parse_ascii`]) walks the grammar, streams each
//!   complete triangle into a [`SolidWriter`](stl_types::SolidWriter), and
//!   recovers from errors by skipping to the next `facet` or `endsolid`
//!
//! Every problem becomes a line-numbered [`Diagnostic`]; one bad triangle
//! never ends the parse.
//!
//! # Example
//!
//! ```
//! use stl_io::read_stl_ascii;
//!
//! let text = "solid tri
//! facet normal 0 0 1
//! outer loop
//! vertex 0 0 0
//! vertex 1 0 0
//! vertex 0 1 0
//! endloop
//! endfacet
//! endsolid tri
//! ";
//!
//! let solid = read_stl_ascii(text.as_bytes()).unwrap();
//! assert_eq!(solid.triangles.len(), 1);
//! ```
//!
//! Binary STL and writing are handled elsewhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod ascii;
mod diagnostic;
mod error;
mod scanner;
mod stl;
mod token;

pub use ascii::{DEFAULT_MAX_LINE_LEN, ParseOptions, parse_ascii, parse_ascii_with_options};
pub use diagnostic::{Diagnostic, ParseReport, SKIPPED_BANNER};
pub use error::{DiagnosticKind, IoError, IoResult};
pub use stl::{load_stl_ascii, read_stl_ascii, read_stl_ascii_lenient};
pub use token::{Token, TokenSet};
