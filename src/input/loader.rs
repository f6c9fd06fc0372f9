use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::core::error::{Result, UrlSweepError};
use crate::core::types::Target;

/// Read targets from any line-oriented source.
///
/// Blank lines are skipped; every other line is normalized into a [`Target`].
/// Order of appearance is preserved and duplicates are kept. Bytes that are
/// not valid UTF-8 are replaced rather than rejected, so one bad line only
/// affects its own target.
pub fn read_targets<R: BufRead>(mut reader: R) -> io::Result<Vec<Target>> {
    let mut targets = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if let Some(target) = Target::normalize(&String::from_utf8_lossy(&line)) {
            targets.push(target);
        }
    }
    Ok(targets)
}

/// Load targets from a file, one URL per line.
///
/// The result may be empty; see [`ensure_not_empty`].
pub fn load_targets<P: AsRef<Path>>(path: P) -> Result<Vec<Target>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => UrlSweepError::FileNotFound(path.display().to_string()),
        _ => UrlSweepError::Io(e),
    })?;

    let targets = read_targets(BufReader::new(file))?;
    log::debug!("Read {} target(s) from {}", targets.len(), path.display());
    Ok(targets)
}

/// Reject an input that produced no targets.
pub fn ensure_not_empty<P: AsRef<Path>>(targets: Vec<Target>, path: P) -> Result<Vec<Target>> {
    if targets.is_empty() {
        return Err(UrlSweepError::EmptyInput(
            path.as_ref().display().to_string(),
        ));
    }
    Ok(targets)
}
