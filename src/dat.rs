//! Plain-text `.dat` weight files.
//!
//! One weight vector per line, coordinates separated by single spaces and
//! written with [`PRECISION`](crate::weights::PRECISION) fractional digits.
//! Files are named `W{objectives}D_{rows}.dat`.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{WeightError, WeightMatrix};

/// Write `matrix` in `.dat` layout to any writer.
pub fn write_dat<W: Write>(matrix: &WeightMatrix, writer: W) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    write!(writer, "{matrix}")?;
    writer.flush()
}

/// Save `matrix` as `dir/W{obj}D_{rows}.dat`, creating `dir` if needed.
///
/// The content goes to a temporary file in `dir` first and is renamed into
/// place, so readers never observe a partially written file.
pub fn save(matrix: &WeightMatrix, dir: &Path) -> Result<PathBuf, WeightError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(matrix.file_name());
    let mut tmp = NamedTempFile::new_in(dir)?;
    write_dat(matrix, tmp.as_file_mut())?;
    // temp files are created owner-only; weight files are shared data
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&path)?;
    tracing::info!(path = %path.display(), rows = matrix.len(), "saved weight file");
    Ok(path)
}

/// Read a `.dat` file back into a matrix.
pub fn load(path: &Path) -> Result<WeightMatrix, WeightError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parse `.dat` text. Blank lines are ignored; every other line must hold
/// the same number of decimal values.
pub fn parse(text: &str) -> Result<WeightMatrix, WeightError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| WeightError::Parse {
                    line: line_no,
                    msg: format!("'{tok}' is not a number"),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(WeightError::Parse {
                    line: line_no,
                    msg: format!("expected {w} values, found {}", row.len()),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    let width = width.ok_or_else(|| WeightError::Shape("no weight vectors found".to_string()))?;
    WeightMatrix::from_rows(width, rows)
}

/// Recover `(objectives, rows)` from a `W{obj}D_{rows}.dat` path.
pub fn parse_file_name(path: &Path) -> Option<(usize, usize)> {
    let name = path.file_name()?.to_str()?;
    let inner = name.strip_prefix('W')?.strip_suffix(".dat")?;
    let (objectives, rows) = inner.split_once("D_")?;
    Some((objectives.parse().ok()?, rows.parse().ok()?))
}
