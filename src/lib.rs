//! The `run` function is the kernel of the application: it loads the full
//! list and the exclusion list, builds an `ExclusionSet` from the exclusion
//! list, and writes the lines of the full list the set doesn't contain.
//!
//! * `operands` reads a source into a `LoadedSequence` of lines,
//! * `set` builds the `ExclusionSet`, and
//! * `operations` does the filtering and writing.
//!
//! Lines are compared byte for byte, line terminator included: `"x\n"` and
//! `"x"` are different lines, and so are `"x\n"` and `"x \n"`.

#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use tracing::debug;

pub mod args;
pub mod config;
pub mod error;
pub mod logger;
pub mod operands;
pub mod operations;
pub mod set;
pub mod tally;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
use crate::operands::load;
use crate::operations::write_filtered;
use crate::set::ExclusionSet;
pub use crate::tally::Tally;

/// Writes to `config.output` the lines of `config.full_list` that don't occur
/// in `config.exclusion_list`, in the full list's order and with its
/// duplicates. Both lists are read completely before the output is created.
/// The first file we can't open, read or write ends the run.
pub fn run(config: &Config) -> Result<Tally> {
    debug!(?config, "starting");
    let full = load(&config.full_list)?;
    let exclusion = load(&config.exclusion_list)?;
    let excluded = ExclusionSet::build(&exclusion);
    write_filtered(&full, &excluded, &config.output)
}
