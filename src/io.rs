//! Text formats for linear systems and point lists.
//!
//! Matrix files hold `rows cols` followed by `rows × cols` numbers in
//! row-major order. Point files hold whitespace-separated `x y` pairs until
//! end of file. Tokens past the matrix data are ignored.
//!
//! Loading never partially overwrites existing input: parsing happens into a
//! temporary that only replaces the target on success.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::gauss::{LinearSystem, MAX_COLS, MAX_ROWS};
use crate::point::Point;

/// Why a file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read file: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("matrix dimensions {rows}x{cols} outside 1..=20 rows and 2..=20 columns")]
    BadDimensions { rows: usize, cols: usize },
    #[error("non-numeric data in file: {0}")]
    BadData(String),
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, LoadError> {
    tokens
        .next()
        .ok_or_else(|| LoadError::BadData("unexpected end of file".into()))
}

fn parse_number(token: &str) -> Result<f64, LoadError> {
    token
        .parse()
        .map_err(|_| LoadError::BadData(format!("`{}` is not a number", token)))
}

fn parse_extent(token: &str) -> Result<usize, LoadError> {
    token
        .parse()
        .map_err(|_| LoadError::BadData(format!("`{}` is not a dimension", token)))
}

// ── Linear systems ──────────────────────────────────────────────────

/// Parse a linear system from the matrix text format.
///
/// ```
/// use numlab::io::parse_system;
///
/// let sys = parse_system("2 3\n1 1 5\n1 -1 1\n").unwrap();
/// assert_eq!(sys.equations(), 2);
/// assert_eq!(sys.solve().solution.unwrap(), vec![3.0, 2.0]);
/// ```
pub fn parse_system(text: &str) -> Result<LinearSystem, LoadError> {
    let mut tokens = text.split_whitespace();
    let rows = parse_extent(next_token(&mut tokens)?)?;
    let cols = parse_extent(next_token(&mut tokens)?)?;
    if !(1..=MAX_ROWS).contains(&rows) || !(2..=MAX_COLS).contains(&cols) {
        return Err(LoadError::BadDimensions { rows, cols });
    }

    let mut data = Vec::with_capacity(rows * cols);
    for _ in 0..rows * cols {
        data.push(parse_number(next_token(&mut tokens)?)?);
    }
    LinearSystem::from_rows(rows, cols, &data).map_err(|_| LoadError::BadDimensions { rows, cols })
}

/// Read and parse a matrix file.
pub fn load_system(path: impl AsRef<Path>) -> Result<LinearSystem, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let sys = parse_system(&text)?;
    debug!(
        "loaded {}x{} system from {}",
        sys.equations(),
        sys.variables() + 1,
        path.display()
    );
    Ok(sys)
}

impl LinearSystem {
    /// Replace the system with the contents of a matrix file.
    ///
    /// On error `self` is unchanged.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        match load_system(path) {
            Ok(sys) => {
                *self = sys;
                Ok(())
            }
            Err(e) => {
                warn!("matrix load failed: {}", e);
                Err(e)
            }
        }
    }
}

// ── Point lists ─────────────────────────────────────────────────────

/// Parse whitespace-separated `x y` pairs.
///
/// A dangling `x` without its `y` is reported as [`LoadError::BadData`].
///
/// ```
/// use numlab::io::parse_points;
///
/// let pts = parse_points("0 1\n2.5 -3").unwrap();
/// assert_eq!(pts.len(), 2);
/// assert_eq!(pts[1].y, -3.0);
/// assert!(parse_points("1 2 oops").is_err());
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point<f64>>, LoadError> {
    let mut tokens = text.split_whitespace();
    let mut points = Vec::new();
    while let Some(x) = tokens.next() {
        let x = parse_number(x)?;
        let y = parse_number(next_token(&mut tokens)?)?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Read and parse a point file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point<f64>>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let points = parse_points(&text)?;
    debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Replace `points` with the contents of a point file; on error `points`
/// is unchanged.
pub fn load_points_into(points: &mut Vec<Point<f64>>, path: impl AsRef<Path>) -> Result<(), LoadError> {
    *points = load_points(path).inspect_err(|e| warn!("point load failed: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_system_file() {
        let file = file_with("3 4\n2 1 -1 8\n-3 -1 2 -11\n-2 1 2 -3\n");
        let sys = load_system(file.path()).unwrap();
        assert_eq!(sys.equations(), 3);
        assert_eq!(sys.variables(), 3);
        assert_eq!(sys.rhs(1), -11.0);
    }

    #[test]
    fn extra_tokens_ignored() {
        let sys = parse_system("1 2 4 8 trailing junk").unwrap();
        assert_eq!(sys.get(0, 0), 4.0);
        assert_eq!(sys.rhs(0), 8.0);
    }

    #[test]
    fn bad_dimensions() {
        for text in ["0 3", "21 3", "2 1", "2 21"] {
            assert!(
                matches!(parse_system(text), Err(LoadError::BadDimensions { .. })),
                "{}",
                text
            );
        }
    }

    #[test]
    fn bad_data() {
        for text in ["", "two 3", "-1 3", "2 2 1 2 3", "2 2 1 x 3 4"] {
            assert!(matches!(parse_system(text), Err(LoadError::BadData(_))), "{:?}", text);
        }
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_system(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Unreadable(_)));
    }

    #[test]
    fn failed_load_keeps_system() {
        let mut sys = LinearSystem::from_rows(1, 2, &[2.0, 4.0]).unwrap();
        let file = file_with("2 3\n1 2 3\n4 five 6\n");
        assert!(sys.load_from_file(file.path()).is_err());
        assert_eq!(sys.equations(), 1);
        assert_eq!(sys.get(0, 0), 2.0);

        let good = file_with("1 3\n1 1 2\n");
        sys.load_from_file(good.path()).unwrap();
        assert_eq!(sys.variables(), 2);
    }

    #[test]
    fn point_file_round() {
        let file = file_with("0 0\n1 1\n\n2   4\n");
        let pts = load_points(file.path()).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 4.0)]);
        assert!(parse_points("").unwrap().is_empty());
    }

    #[test]
    fn point_file_errors_keep_points() {
        let mut pts = vec![Point::new(5.0, 5.0)];
        let file = file_with("1 2\n3");
        let err = load_points_into(&mut pts, file.path()).unwrap_err();
        assert!(matches!(err, LoadError::BadData(_)));
        assert_eq!(pts, vec![Point::new(5.0, 5.0)]);
        assert!(matches!(parse_points("1 2 3 nan?"), Err(LoadError::BadData(_))));
    }
}
