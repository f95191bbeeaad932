//! File-level entry points for ASCII STL.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use stl_types::{Solid, SolidWriter};
use tracing::info;

use crate::ascii::parse_ascii;
use crate::diagnostic::ParseReport;
use crate::error::{IoError, IoResult};

/// Load a solid from an ASCII STL file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The content is not clean ASCII STL ([`IoError::Parse`] carries every
///   diagnostic)
///
/// # Example
///
/// ```no_run
/// use stl_io::load_stl_ascii;
///
/// let solid = load_stl_ascii("model.stl").unwrap();
/// println!("{}: {} triangles", solid.name, solid.triangles.len());
/// ```
pub fn load_stl_ascii<P: AsRef<Path>>(path: P) -> IoResult<Solid> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let solid = read_stl_ascii(BufReader::new(file))?;
    info!(
        path = %path.display(),
        triangles = solid.triangles.len(),
        "Loaded ASCII STL"
    );
    Ok(solid)
}

/// Read a solid from ASCII STL text.
///
/// The solid is marked as ASCII.
///
/// # Errors
///
/// Returns [`IoError::Parse`] unless the parse succeeded.
pub fn read_stl_ascii<R: BufRead>(reader: R) -> IoResult<Solid> {
    let (solid, report) = read_stl_ascii_lenient(reader);
    if report.success {
        Ok(solid)
    } else {
        Err(IoError::Parse { report })
    }
}

/// Read whatever can be salvaged from ASCII STL text.
///
/// Never fails: the solid holds every triangle that parsed, and the report
/// says what was wrong with the rest.
pub fn read_stl_ascii_lenient<R: BufRead>(reader: R) -> (Solid, ParseReport) {
    let mut solid = Solid::new();
    solid.set_ascii(true);
    let report = parse_ascii(reader, &mut solid);
    (solid, report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    const CUBE_CORNER: &str = "solid corner
facet normal 0 0 -1
outer loop
vertex 0 0 0
vertex 0 1 0
vertex 1 0 0
endloop
endfacet
endsolid corner
";

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("corner.stl");
        File::create(&path)
            .and_then(|mut f| f.write_all(CUBE_CORNER.as_bytes()))
            .expect("write fixture");

        let solid = load_stl_ascii(&path).unwrap();
        assert_eq!(solid.name, "corner");
        assert_eq!(solid.triangles.len(), 1);
        assert!(solid.is_ascii);
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_stl_ascii("nonexistent_file_12345.stl");
        assert!(matches!(
            result,
            Err(IoError::FileNotFound { ref path }) if path.to_string_lossy().contains("nonexistent")
        ));
    }

    #[test]
    fn parse_failure_carries_report() {
        let broken = CUBE_CORNER.replace("vertex 0 1 0", "vertex 0 1");
        let err = read_stl_ascii(broken.as_bytes()).unwrap_err();
        let IoError::Parse { report } = &err else {
            panic!("expected parse error, got {err:?}");
        };
        assert!(report.triangles_skipped);
        assert!(err.to_string().contains("Triangles had to be skipped."));
    }

    #[test]
    fn lenient_keeps_good_triangles() {
        let broken = format!("{}\nextra", CUBE_CORNER.replace("endsolid corner\n", ""));
        let (solid, report) = read_stl_ascii_lenient(broken.as_bytes());
        assert_eq!(solid.triangles.len(), 1);
        assert!(!report.success);
    }
}
