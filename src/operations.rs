//! Houses the filter pass: `filter_into` writes the lines of the full list
//! that the exclusion set doesn't contain, and `write_filtered` does the same
//! into a freshly created file.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use bstr::ByteSlice;
use tracing::{info, trace};

use crate::error::{Error, Result};
use crate::operands::LoadedSequence;
use crate::set::ExclusionSet;
use crate::tally::Tally;

/// Writes each line of `full` that `excluded` doesn't contain to `out`, in the
/// order the lines occur in `full`. Lines are written exactly as read, so the
/// output needs no added terminators. Duplicate lines that aren't excluded
/// are written each time they occur.
pub fn filter_into(
    full: &LoadedSequence,
    excluded: &ExclusionSet,
    mut out: impl Write,
) -> io::Result<Tally> {
    let mut tally = Tally::default();
    for line in full.lines() {
        if excluded.contains(line) {
            trace!(line = %line.as_bstr(), "excluded");
            tally.drop_line();
        } else {
            out.write_all(line)?;
            tally.keep();
        }
    }
    out.flush()?;
    Ok(tally)
}

/// Creates (or truncates) the file at `path` and runs `filter_into` on it.
/// The file is closed before we return. If writing fails partway, whatever
/// was written stays in the file.
pub fn write_filtered(
    full: &LoadedSequence,
    excluded: &ExclusionSet,
    path: &Path,
) -> Result<Tally> {
    let file = File::create(path).map_err(Error::unavailable("create", path))?;
    let tally = filter_into(full, excluded, BufWriter::new(file))
        .map_err(Error::unavailable("write", path))?;
    info!(
        output = %path.display(),
        kept = tally.kept,
        dropped = tally.dropped,
        "wrote filtered list"
    );
    Ok(tally)
}
